#![forbid(unsafe_code)]

pub mod app_services;
pub mod error;
pub mod identity;
pub mod rate_limiter;
pub mod sessions;
pub mod shuffle;

pub use interview_core::Clock;

pub use app_services::AppServices;
pub use error::{AppServicesError, SessionError};
pub use identity::{INSTALLATION_ID_KEY, InstallationIdentity};
pub use rate_limiter::{RateLimitConfig, RateLimitInfo, RateLimiter};
pub use sessions::{
    BatchBuilder, BatchPlan, NextQuestions, QUESTIONS_PER_SESSION, SessionProgress, SessionTracker,
};
pub use shuffle::Shuffler;
