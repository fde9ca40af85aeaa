#[cfg(test)] pub mod testing;

use std::ops::DerefMut;

use argon2::password_hash::{PasswordHashString, SaltString};
use argon2::{Algorithm, Argon2, PasswordHash, PasswordHasher, Version};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::AppConfig;
use crate::rng::SyncRng;

pub trait Hasher: Send + Sync {
    fn generate_hash(&self, password: &str) -> PasswordHashString;
    fn check_hash(&self, hash: PasswordHash<'_>, password: &str) -> bool;
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProductionHasherConfig {
    pub argon2_params: argon2::Params,
}

impl ProductionHasherConfig {
    pub fn new(argon2_params: argon2::Params) -> Self {
        ProductionHasherConfig {
            argon2_params,
        }
    }
}

#[derive(Clone)]
pub struct ProductionHasher {
    config: ProductionHasherConfig,
    rng: SyncRng<StdRng>,
}

impl ProductionHasher {
    pub fn new(
        config: ProductionHasherConfig,
        rng: SyncRng<StdRng>,
    ) -> Self {
        ProductionHasher {
            config,
            rng,
        }
    }

    pub fn from_app_config(
        app_config: &AppConfig,
    ) -> Result<Self, argon2::Error> {
        Ok(
            ProductionHasher::new(
                ProductionHasherConfig::new(
                    app_config.hasher_config.clone().try_into()?,
                ),
                SyncRng::new(StdRng::from_entropy()),
            )
        )
    }

    fn get_hasher(&self) -> Argon2<'_> {
        Argon2::new(
            Algorithm::Argon2id,
            Version::V0x13,
            self.config.argon2_params.clone(),
        )
    }

    // a fresh salt per hash; equal inputs produce distinct hash strings
    fn make_salt(&self) -> SaltString {
        SaltString::generate(self.rng.get_rng().deref_mut())
    }
}

impl Hasher for ProductionHasher {
    fn generate_hash(&self, password: &str) -> PasswordHashString {
        let salt = self.make_salt();
        // params are validated at construction, a failure here is a bug
        self.get_hasher()
            .hash_password(password.as_bytes(), &salt)
            .expect("password hashing failed")
            .serialize()
    }

    fn check_hash(&self, hash: PasswordHash<'_>, password: &str) -> bool {
        hash.verify_password(&[&self.get_hasher()], password).is_ok()
    }
}
