use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use interview_core::bank::{GENERAL_CATEGORY, known_fields, question_bank};
use interview_core::model::{Question, QuestionId};
use services::{AppServices, Clock, RateLimitConfig, SessionProgress};
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Rate-limit key guarding batch draws from the CLI.
const NEXT_LIMIT_KEY: &str = "interview_next";

#[derive(Parser)]
#[command(name = "interview")]
#[command(author, version, about = "Practice interview questions one batch at a time", long_about = None)]
struct Cli {
    /// SQLite database URL or path
    #[arg(long, env = "INTERVIEW_DB_URL", default_value = "sqlite://interview.sqlite3")]
    db: String,

    /// Questions drawn per session
    #[arg(long, env = "INTERVIEW_BATCH_SIZE", default_value_t = services::QUESTIONS_PER_SESSION)]
    batch_size: usize,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resume the open session or draw a new batch
    Next {
        /// "general" or a field name such as "Data Science"
        category: String,
    },
    /// Mark a question of the current session as answered
    Answer { category: String, question_id: String },
    /// Finish the current session, retiring every question in it
    Complete { category: String },
    /// Show coverage of the category's question pool
    Stats { category: String },
    /// Forget all progress for the category
    Reset { category: String },
    /// List the categories with dedicated question sets
    Categories,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "interview=info,services=info".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    let cli = Cli::parse();
    let db_url = normalize_sqlite_url(&cli.db);
    prepare_sqlite_file(&db_url)?;
    debug!(db_url = %db_url, "opening database");

    let services = AppServices::new_sqlite(&db_url, Clock::system())
        .await
        .with_context(|| format!("failed to open {db_url}"))?
        .with_batch_size(cli.batch_size);
    let tracker = services.tracker();

    match cli.command {
        Commands::Next { category } => {
            let limiter = services.rate_limiter();
            if !limiter.check(NEXT_LIMIT_KEY, RateLimitConfig::API_CALLS).await {
                let wait = limiter
                    .time_until_reset(NEXT_LIMIT_KEY, RateLimitConfig::API_CALLS)
                    .await;
                bail!(
                    "too many requests, try again in {}s",
                    wait.num_seconds().max(1)
                );
            }

            let next = tracker.next_questions(&category).await;
            let progress = SessionProgress::of(&next.progress);
            if next.is_resuming_session {
                println!(
                    "Resuming {category}: {} of {} answered",
                    progress.answered, progress.total
                );
            } else {
                println!("New {category} session with {} questions", progress.total);
            }

            let start = next.progress.current_question_index();
            for (position, question) in next.questions.iter().enumerate().skip(start) {
                print_question(position + 1, question);
            }
        }
        Commands::Answer {
            category,
            question_id,
        } => {
            let id: QuestionId = question_id
                .parse::<QuestionId>()
                .map_err(interview_core::Error::from)?;
            let updated = tracker.mark_question_answered(&category, &id).await?;
            let progress = SessionProgress::of(&updated);
            println!(
                "Answered {id} ({} of {})",
                progress.answered, progress.total
            );
            if progress.is_complete {
                println!("Session finished. Run `interview complete {category:?}` to retire it.");
            }
        }
        Commands::Complete { category } => match tracker.complete_session(&category).await {
            Some(progress) => println!(
                "Completed {category} session, {} questions asked so far",
                progress.asked_question_ids().len()
            ),
            None => println!("No {category} session to complete"),
        },
        Commands::Stats { category } => {
            let stats = tracker.statistics(&category).await;
            println!("{category}");
            println!("  total:     {}", stats.total_questions);
            println!("  asked:     {}", stats.asked_questions);
            println!("  remaining: {}", stats.remaining_questions);
            println!("  complete:  {}%", stats.percentage_complete);
        }
        Commands::Reset { category } => {
            tracker.reset_progress(&category).await;
            println!("Progress for {category} reset");
        }
        Commands::Categories => print_categories(),
    }

    Ok(())
}

fn print_categories() {
    println!(
        "{GENERAL_CATEGORY} ({} questions)",
        question_bank(GENERAL_CATEGORY).len()
    );
    for field in known_fields() {
        println!("{field} ({} questions)", question_bank(field).len());
    }
}

fn print_question(position: usize, question: &Question) {
    println!(
        "{position:>2}. [{}] {} ({}, {})",
        question.id(),
        question.text(),
        question.topic(),
        question.difficulty()
    );
    if let Some(tip) = question.tip() {
        println!("    tip: {tip}");
    }
}

fn normalize_sqlite_url(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed == "sqlite::memory:" || trimmed.starts_with("sqlite://") {
        return trimmed.to_owned();
    }

    let path = Path::new(trimmed.strip_prefix("sqlite:").unwrap_or(trimmed));
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(path)
    };
    format!("sqlite://{}", absolute.display())
}

fn prepare_sqlite_file(db_url: &str) -> Result<()> {
    if db_url == "sqlite::memory:" {
        return Ok(());
    }

    let Some(path) = db_url.strip_prefix("sqlite://") else {
        bail!("invalid database url: {db_url}");
    };
    let path = path.split('?').next().unwrap_or(path);
    if path.is_empty() {
        bail!("invalid database url: {db_url}");
    }

    let path = Path::new(path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    if !path.exists() {
        std::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(false)
            .open(path)
            .with_context(|| format!("failed to create {}", path.display()))?;
    }

    Ok(())
}
