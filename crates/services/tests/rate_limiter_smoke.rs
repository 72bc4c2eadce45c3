use chrono::Duration;
use interview_core::time::fixed_now;
use services::{AppServices, Clock, RateLimitConfig};

#[tokio::test]
async fn limiter_persists_across_service_handles_over_sqlite() {
    let url = "sqlite:file:memdb_rate_limit_smoke?mode=memory&cache=shared";
    let mut clock = Clock::fixed(fixed_now());
    let config = RateLimitConfig::RESUME_GENERATION;

    let services = AppServices::new_sqlite(url, clock).await.unwrap();
    let limiter = services.rate_limiter();
    for _ in 0..3 {
        assert!(limiter.check("resume", config).await);
    }
    assert!(!limiter.check("resume", config).await);

    // a second bootstrap over the same database sees the same log and identity
    clock.advance(Duration::seconds(45));
    let reopened = AppServices::new_sqlite(url, clock).await.unwrap();
    assert_eq!(reopened.installation_id(), services.installation_id());
    let limiter = reopened.rate_limiter();
    assert_eq!(limiter.remaining("resume", config).await, 0);
    assert_eq!(
        limiter.time_until_reset("resume", config).await,
        Duration::seconds(15)
    );

    clock.advance(Duration::seconds(15));
    let later = AppServices::new_sqlite(url, clock).await.unwrap();
    assert_eq!(later.rate_limiter().remaining("resume", config).await, 3);
}

#[tokio::test]
async fn clear_all_leaves_progress_alone() {
    let services = AppServices::in_memory(Clock::fixed(fixed_now())).await;
    services.tracker().next_questions("general").await;

    let limiter = services.rate_limiter();
    limiter.check("a", RateLimitConfig::API_CALLS).await;
    limiter.check("b", RateLimitConfig::LOGIN_ATTEMPTS).await;
    limiter.clear_all().await;

    assert_eq!(limiter.remaining("a", RateLimitConfig::API_CALLS).await, 20);
    assert_eq!(limiter.remaining("b", RateLimitConfig::LOGIN_ATTEMPTS).await, 5);
    assert!(services.tracker().progress("general").await.is_some());
}
