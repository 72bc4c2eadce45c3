use std::sync::Arc;

use interview_core::model::InstallationId;
use storage::repository::{KeyValueStore, Storage};
use tracing::info;

use crate::error::AppServicesError;
use crate::identity::InstallationIdentity;
use crate::rate_limiter::RateLimiter;
use crate::sessions::SessionTracker;
use crate::shuffle::Shuffler;
use crate::Clock;

/// Assembles app-facing services around one store and one installation.
#[derive(Clone)]
pub struct AppServices {
    installation_id: InstallationId,
    store: Arc<dyn KeyValueStore>,
    tracker: Arc<SessionTracker>,
    rate_limiter: Arc<RateLimiter>,
}

impl AppServices {
    /// Build services backed by `SQLite` storage.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if storage initialization fails.
    pub async fn new_sqlite(db_url: &str, clock: Clock) -> Result<Self, AppServicesError> {
        let storage = Storage::sqlite(db_url).await?;
        Ok(Self::from_storage(storage, clock).await)
    }

    /// Build services over a fresh in-memory store.
    pub async fn in_memory(clock: Clock) -> Self {
        Self::from_storage(Storage::in_memory(), clock).await
    }

    async fn from_storage(storage: Storage, clock: Clock) -> Self {
        let store = Arc::clone(&storage.kv);
        let installation_id = InstallationIdentity::new(Arc::clone(&store))
            .load_or_create()
            .await;
        info!(installation_id = %installation_id, "services ready");

        let tracker = Arc::new(SessionTracker::new(
            installation_id.clone(),
            clock,
            Arc::clone(&store),
            Arc::new(Shuffler::from_os_rng()),
        ));
        let rate_limiter = Arc::new(RateLimiter::new(clock, Arc::clone(&store)));

        Self {
            installation_id,
            store,
            tracker,
            rate_limiter,
        }
    }

    /// Rebuild the tracker with a different batch size.
    #[must_use]
    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        let tracker = (*self.tracker).clone().with_batch_size(batch_size);
        self.tracker = Arc::new(tracker);
        self
    }

    #[must_use]
    pub fn installation_id(&self) -> &InstallationId {
        &self.installation_id
    }

    #[must_use]
    pub fn store(&self) -> Arc<dyn KeyValueStore> {
        Arc::clone(&self.store)
    }

    #[must_use]
    pub fn tracker(&self) -> Arc<SessionTracker> {
        Arc::clone(&self.tracker)
    }

    #[must_use]
    pub fn rate_limiter(&self) -> Arc<RateLimiter> {
        Arc::clone(&self.rate_limiter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use interview_core::time::fixed_clock;

    #[tokio::test]
    async fn in_memory_services_share_one_identity() {
        let services = AppServices::in_memory(fixed_clock()).await;
        assert_eq!(
            services.tracker().installation_id(),
            services.installation_id()
        );

        let stored = services.store().get("interview_user_id").await.unwrap();
        assert_eq!(stored.as_deref(), Some(services.installation_id().as_str()));
    }

    #[tokio::test]
    async fn batch_size_override_reaches_tracker() {
        let services = AppServices::in_memory(fixed_clock()).await.with_batch_size(4);
        assert_eq!(services.tracker().batch_size(), 4);

        let next = services.tracker().next_questions("general").await;
        assert_eq!(next.questions.len(), 4);
    }
}
