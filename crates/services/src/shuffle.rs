use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use std::fmt;
use std::sync::{Mutex, PoisonError};

/// Injectable random source for batch selection.
///
/// Production code seeds from the OS; tests pass a fixed seed so draws are
/// reproducible.
pub struct Shuffler {
    rng: Mutex<StdRng>,
}

impl Shuffler {
    #[must_use]
    pub fn from_os_rng() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_os_rng()),
        }
    }

    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    /// Uniform in-place shuffle (Fisher-Yates).
    pub fn shuffle<T>(&self, items: &mut [T]) {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        items.shuffle(&mut *rng);
    }
}

impl Default for Shuffler {
    fn default() -> Self {
        Self::from_os_rng()
    }
}

impl fmt::Debug for Shuffler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Shuffler").finish_non_exhaustive()
    }
}
