/// Question templates per field, keyed by exact field name.
pub(super) static FIELD_TEMPLATES: [(&str, [&str; 10]); 5] = [
    (
        "Software Engineering",
        [
            "Tell me about a challenging bug you debugged.",
            "How do you approach code reviews?",
            "Describe your experience with [specific technology].",
            "How do you stay updated with new technologies?",
            "Walk me through how you would design [system].",
            "Explain your testing philosophy.",
            "Tell me about a time you optimized performance.",
            "How do you handle technical debt?",
            "Describe your experience with version control.",
            "What's your approach to documentation?",
        ],
    ),
    (
        "Data Science",
        [
            "Explain a machine learning project you've worked on.",
            "How do you handle missing data?",
            "Describe your experience with [specific ML framework].",
            "How do you validate model performance?",
            "Tell me about a time you presented findings to non-technical stakeholders.",
            "What's your approach to feature engineering?",
            "How do you handle imbalanced datasets?",
            "Describe your data cleaning process.",
            "What metrics do you use to evaluate models?",
            "How do you prevent overfitting?",
        ],
    ),
    (
        "Marketing",
        [
            "Describe a successful campaign you've run.",
            "How do you measure marketing ROI?",
            "Tell me about your experience with [platform].",
            "How do you identify target audiences?",
            "Describe your content creation process.",
            "How do you stay on top of marketing trends?",
            "Tell me about a campaign that didn't work.",
            "How do you approach A/B testing?",
            "Describe your social media strategy.",
            "How do you collaborate with sales teams?",
        ],
    ),
    (
        "Finance",
        [
            "Walk me through a financial model you've built.",
            "How do you approach financial forecasting?",
            "Describe your experience with [financial software].",
            "How do you handle financial reporting?",
            "Tell me about a time you identified cost savings.",
            "How do you stay compliant with regulations?",
            "Describe your budgeting process.",
            "How do you analyze financial statements?",
            "Tell me about your experience with audits.",
            "How do you communicate financial data to non-finance stakeholders?",
        ],
    ),
    (
        "Design (UI/UX)",
        [
            "Walk me through your design process.",
            "How do you incorporate user feedback?",
            "Describe a design challenge you faced.",
            "How do you balance aesthetics and functionality?",
            "Tell me about your experience with [design tool].",
            "How do you conduct user research?",
            "Describe your approach to accessibility.",
            "How do you handle design critiques?",
            "Tell me about a redesign project.",
            "How do you measure design success?",
        ],
    ),
];
