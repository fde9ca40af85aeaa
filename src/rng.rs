use std::sync::{Arc, Mutex, MutexGuard};

use argon2::password_hash::rand_core::CryptoRngCore;

/// Shared rng handle; the lock is only ever held across a single draw.
pub struct SyncRng<R: CryptoRngCore + Send> {
    rng: Arc<Mutex<R>>,
}

impl<R: CryptoRngCore + Send> SyncRng<R> {
    pub fn new(rng: R) -> Self {
        SyncRng {
            rng: Arc::new(Mutex::new(rng)),
        }
    }

    pub fn get_rng(&self) -> MutexGuard<'_, R> {
        self.rng.lock().unwrap()
    }
}

impl<R: CryptoRngCore + Send> Clone for SyncRng<R> {
    fn clone(&self) -> Self {
        SyncRng {
            rng: self.rng.clone(),
        }
    }
}
