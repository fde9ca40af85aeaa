use rand::rngs::StdRng;
use rand::SeedableRng;

use super::{ProductionHasher, ProductionHasherConfig};
use crate::rng::SyncRng;

// deliberately weak parameters, hashing cost is irrelevant under test
pub fn cheap_params() -> argon2::Params {
    argon2::Params::new(32, 2, 1, None).expect("invalid test params")
}

pub fn cheap_hasher() -> ProductionHasher {
    ProductionHasher::new(
        ProductionHasherConfig::new(cheap_params()),
        SyncRng::new(StdRng::seed_from_u64(42)),
    )
}
