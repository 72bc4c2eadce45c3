use std::sync::Arc;

use interview_core::model::InstallationId;
use storage::repository::KeyValueStore;
use tracing::{debug, error, warn};

/// Store key holding the per-installation identity.
pub const INSTALLATION_ID_KEY: &str = "interview_user_id";

/// Resolves the stable per-installation identity.
///
/// The identity is read once at startup and handed to the tracker
/// explicitly; nothing caches it globally.
#[derive(Clone)]
pub struct InstallationIdentity {
    store: Arc<dyn KeyValueStore>,
    key: String,
}

impl InstallationIdentity {
    #[must_use]
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            store,
            key: INSTALLATION_ID_KEY.to_owned(),
        }
    }

    #[must_use]
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    /// Return the stored identity, generating and persisting one on first use.
    ///
    /// Unreadable or invalid stored values are replaced. A failed write is
    /// logged; the generated id is still returned for this process.
    pub async fn load_or_create(&self) -> InstallationId {
        match self.store.get(&self.key).await {
            Ok(Some(raw)) => match InstallationId::new(raw) {
                Ok(id) => return id,
                Err(err) => warn!(
                    key = %self.key,
                    error = %err,
                    "stored installation id is invalid, regenerating"
                ),
            },
            Ok(None) => {}
            Err(err) => warn!(key = %self.key, error = %err, "failed to read installation id"),
        }

        let id = InstallationId::generate();
        debug!(installation_id = %id, "generated installation id");
        if let Err(err) = self.store.set(&self.key, id.as_str()).await {
            error!(key = %self.key, error = %err, "failed to persist installation id");
        }
        id
    }
}
