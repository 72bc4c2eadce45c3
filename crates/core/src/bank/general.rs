use crate::model::Difficulty;

/// `(id, text, topic, difficulty, tip)` rows of the fixed `general` pool.
pub(super) static GENERAL_QUESTIONS: [(&str, &str, &str, Difficulty, &str); 60] = [
    (
        "gen_001",
        "Tell me about yourself.",
        "behavioral",
        Difficulty::Easy,
        "Keep it professional. Focus on your career journey, key skills, and what brings you here.",
    ),
    (
        "gen_002",
        "Why do you want to work here?",
        "behavioral",
        Difficulty::Easy,
        "Research the company. Mention specific things that align with your values and goals.",
    ),
    (
        "gen_003",
        "What are your greatest strengths?",
        "behavioral",
        Difficulty::Easy,
        "Pick 2-3 strengths relevant to the role. Give specific examples.",
    ),
    (
        "gen_004",
        "What is your greatest weakness?",
        "behavioral",
        Difficulty::Medium,
        "Be honest but strategic. Show how you're working to improve it.",
    ),
    (
        "gen_005",
        "Where do you see yourself in 5 years?",
        "behavioral",
        Difficulty::Medium,
        "Show ambition but be realistic. Align your goals with company growth.",
    ),
    (
        "gen_006",
        "Tell me about a time you failed.",
        "behavioral",
        Difficulty::Hard,
        "Use STAR method. Focus on what you learned and how you grew.",
    ),
    (
        "gen_007",
        "Describe a situation where you had to work with a difficult colleague.",
        "behavioral",
        Difficulty::Hard,
        "Show emotional intelligence. Focus on communication and resolution.",
    ),
    (
        "gen_008",
        "Why are you leaving your current job?",
        "behavioral",
        Difficulty::Medium,
        "Stay positive. Focus on growth opportunities, not negativity about current role.",
    ),
    (
        "gen_009",
        "Tell me about a time you demonstrated leadership.",
        "behavioral",
        Difficulty::Medium,
        "Leadership isn't just managing. Show initiative, influence, and results.",
    ),
    (
        "gen_010",
        "How do you handle stress and pressure?",
        "behavioral",
        Difficulty::Medium,
        "Give concrete examples. Show healthy coping mechanisms and resilience.",
    ),
    (
        "gen_011",
        "Describe a time you had to meet a tight deadline.",
        "situational",
        Difficulty::Medium,
        "Show time management, prioritization, and ability to deliver under pressure.",
    ),
    (
        "gen_012",
        "Tell me about a time you went above and beyond.",
        "behavioral",
        Difficulty::Easy,
        "Show initiative and dedication. Quantify the impact if possible.",
    ),
    (
        "gen_013",
        "How do you prioritize tasks when you have multiple deadlines?",
        "situational",
        Difficulty::Medium,
        "Discuss frameworks (Eisenhower Matrix, urgent vs important). Give examples.",
    ),
    (
        "gen_014",
        "Describe a time you had to learn something new quickly.",
        "behavioral",
        Difficulty::Medium,
        "Show adaptability and learning agility. Mention resources you used.",
    ),
    (
        "gen_015",
        "Tell me about a time you disagreed with your manager.",
        "behavioral",
        Difficulty::Hard,
        "Show respect and professionalism. Focus on constructive dialogue and outcome.",
    ),
    (
        "gen_016",
        "How do you handle constructive criticism?",
        "behavioral",
        Difficulty::Medium,
        "Show openness to feedback and growth mindset. Give a specific example.",
    ),
    (
        "gen_017",
        "What motivates you?",
        "behavioral",
        Difficulty::Easy,
        "Be authentic. Connect your motivations to the role and company mission.",
    ),
    (
        "gen_018",
        "Describe your ideal work environment.",
        "behavioral",
        Difficulty::Easy,
        "Research the company culture first. Show flexibility while being honest.",
    ),
    (
        "gen_019",
        "Tell me about a time you had to persuade someone.",
        "behavioral",
        Difficulty::Medium,
        "Show communication skills, empathy, and data-driven decision making.",
    ),
    (
        "gen_020",
        "How do you handle feedback that you disagree with?",
        "behavioral",
        Difficulty::Hard,
        "Show maturity and self-reflection. Explain your thought process.",
    ),
    (
        "gen_021",
        "Describe a time you made a mistake at work.",
        "behavioral",
        Difficulty::Hard,
        "Own it. Focus on accountability, what you learned, and how you prevented recurrence.",
    ),
    (
        "gen_022",
        "Tell me about your greatest professional achievement.",
        "behavioral",
        Difficulty::Easy,
        "Choose something relevant to the role. Quantify the impact and your specific contribution.",
    ),
    (
        "gen_023",
        "How do you stay organized?",
        "behavioral",
        Difficulty::Easy,
        "Mention specific tools, systems, or frameworks you use. Give examples.",
    ),
    (
        "gen_024",
        "Describe a time you had to adapt to change.",
        "behavioral",
        Difficulty::Medium,
        "Show flexibility and positive attitude. Explain your adaptation process.",
    ),
    (
        "gen_025",
        "What do you do when you don't know the answer to something?",
        "situational",
        Difficulty::Medium,
        "Show resourcefulness, willingness to learn, and humility.",
    ),
    (
        "gen_026",
        "Tell me about a time you had to work with limited resources.",
        "behavioral",
        Difficulty::Hard,
        "Show creativity, problem-solving, and ability to deliver despite constraints.",
    ),
    (
        "gen_027",
        "How do you build relationships with coworkers?",
        "behavioral",
        Difficulty::Easy,
        "Show emotional intelligence and collaboration skills. Give specific examples.",
    ),
    (
        "gen_028",
        "Describe a time you had to give difficult feedback.",
        "behavioral",
        Difficulty::Hard,
        "Show empathy, directness, and focus on improvement. Explain the outcome.",
    ),
    (
        "gen_029",
        "What's your approach to teamwork?",
        "behavioral",
        Difficulty::Easy,
        "Discuss collaboration, communication, and supporting team goals.",
    ),
    (
        "gen_030",
        "Tell me about a time you took initiative.",
        "behavioral",
        Difficulty::Medium,
        "Show proactiveness and ownership. Explain the impact of your initiative.",
    ),
    (
        "gen_031",
        "How do you handle ambiguity?",
        "situational",
        Difficulty::Hard,
        "Show comfort with uncertainty. Explain how you gather information and make decisions.",
    ),
    (
        "gen_032",
        "Describe your decision-making process.",
        "behavioral",
        Difficulty::Medium,
        "Walk through your framework. Mention data, stakeholders, and risk assessment.",
    ),
    (
        "gen_033",
        "Tell me about a time you had conflicting priorities.",
        "situational",
        Difficulty::Hard,
        "Show prioritization skills and communication with stakeholders.",
    ),
    (
        "gen_034",
        "What role do you usually take in a team?",
        "behavioral",
        Difficulty::Easy,
        "Be honest but show flexibility. Give examples of different roles you've played.",
    ),
    (
        "gen_035",
        "How do you handle repetitive tasks?",
        "behavioral",
        Difficulty::Easy,
        "Show reliability and also initiative to improve processes.",
    ),
    (
        "gen_036",
        "Describe a time you had to meet a goal you didn't agree with.",
        "behavioral",
        Difficulty::Hard,
        "Show professionalism and commitment while respectfully sharing concerns.",
    ),
    (
        "gen_037",
        "What do you know about our company?",
        "company-specific",
        Difficulty::Easy,
        "Research thoroughly. Mention recent news, products, culture, and mission.",
    ),
    (
        "gen_038",
        "Why should we hire you?",
        "behavioral",
        Difficulty::Hard,
        "Summarize your unique value. Connect your skills to their specific needs.",
    ),
    (
        "gen_039",
        "How do you handle multitasking?",
        "behavioral",
        Difficulty::Medium,
        "Be honest about limits. Discuss prioritization and time management strategies.",
    ),
    (
        "gen_040",
        "Tell me about a time you improved a process.",
        "behavioral",
        Difficulty::Medium,
        "Show analytical thinking and initiative. Quantify the improvement.",
    ),
    (
        "gen_041",
        "What's your management style?",
        "behavioral",
        Difficulty::Medium,
        "Discuss your approach to delegation, feedback, and team development.",
    ),
    (
        "gen_042",
        "Describe a time you had to deliver bad news.",
        "behavioral",
        Difficulty::Hard,
        "Show empathy, transparency, and professionalism. Explain how you handled reactions.",
    ),
    (
        "gen_043",
        "How do you measure success?",
        "behavioral",
        Difficulty::Medium,
        "Discuss both quantitative metrics and qualitative factors. Be role-specific.",
    ),
    (
        "gen_044",
        "Tell me about a time you exceeded expectations.",
        "behavioral",
        Difficulty::Easy,
        "Choose a clear example. Explain what the expectations were and how you surpassed them.",
    ),
    (
        "gen_045",
        "How do you stay current in your field?",
        "behavioral",
        Difficulty::Easy,
        "Mention specific resources, courses, communities, or practices.",
    ),
    (
        "gen_046",
        "Describe your communication style.",
        "behavioral",
        Difficulty::Easy,
        "Be self-aware. Discuss how you adapt to different audiences and situations.",
    ),
    (
        "gen_047",
        "Tell me about a time you had to collaborate across departments.",
        "behavioral",
        Difficulty::Medium,
        "Show cross-functional skills and ability to navigate different perspectives.",
    ),
    (
        "gen_048",
        "What questions do you have for me?",
        "closing",
        Difficulty::Easy,
        "ALWAYS have questions prepared. Ask about team, growth, challenges, or culture.",
    ),
    (
        "gen_049",
        "How do you handle a situation where you don't have all the information?",
        "situational",
        Difficulty::Hard,
        "Show resourcefulness and communication. Explain how you identify gaps and fill them.",
    ),
    (
        "gen_050",
        "Tell me about a time you mentored someone.",
        "behavioral",
        Difficulty::Medium,
        "Show investment in others' growth. Explain your approach and the outcome.",
    ),
    (
        "gen_051",
        "How do you handle competing deadlines from different managers?",
        "situational",
        Difficulty::Hard,
        "Show communication and negotiation skills. Explain prioritization process.",
    ),
    (
        "gen_052",
        "Describe a time you had to say no to a request.",
        "behavioral",
        Difficulty::Hard,
        "Show boundary-setting and professionalism. Explain your reasoning.",
    ),
    (
        "gen_053",
        "What would your previous manager say about you?",
        "behavioral",
        Difficulty::Medium,
        "Be honest and positive. Ideally reference actual feedback you've received.",
    ),
    (
        "gen_054",
        "How do you approach professional development?",
        "behavioral",
        Difficulty::Easy,
        "Show continuous learning mindset. Mention specific goals and actions.",
    ),
    (
        "gen_055",
        "Tell me about a time you had to adjust your communication style.",
        "behavioral",
        Difficulty::Medium,
        "Show emotional intelligence and adaptability. Give specific examples.",
    ),
    (
        "gen_056",
        "What's the most difficult decision you've had to make at work?",
        "behavioral",
        Difficulty::Hard,
        "Show decision-making process, consideration of trade-offs, and courage.",
    ),
    (
        "gen_057",
        "How do you handle a situation where a project is going off track?",
        "situational",
        Difficulty::Hard,
        "Show problem-solving, communication, and course-correction abilities.",
    ),
    (
        "gen_058",
        "Describe your approach to problem-solving.",
        "behavioral",
        Difficulty::Medium,
        "Walk through your framework. Mention analysis, creativity, and implementation.",
    ),
    (
        "gen_059",
        "Tell me about a time you received recognition for your work.",
        "behavioral",
        Difficulty::Easy,
        "Show humility while taking credit. Explain what made it meaningful.",
    ),
    (
        "gen_060",
        "What salary range are you looking for?",
        "compensation",
        Difficulty::Hard,
        "Research market rates. Give a range based on your skills and the market.",
    ),
];
