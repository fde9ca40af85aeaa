pub const APP_CONFIG_ENV_PREFIX: &str = "NOTEHIVE_";

pub const USERNAME_MIN_LEN: usize = 3;
pub const USERNAME_MAX_LEN: usize = 50;

pub const DEFAULT_ARGON2_M_COST: u32 = 19456;
pub const DEFAULT_ARGON2_T_COST: u32 = 2;
pub const DEFAULT_ARGON2_P_COST: u32 = 1;
pub const DEFAULT_ARGON2_OUTPUT_LEN: Option<usize> = None;

// upper bound on in-flight inserts during a bulk create
pub const BULK_INSERT_CONCURRENCY: usize = 8;
