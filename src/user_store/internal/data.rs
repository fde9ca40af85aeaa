use argon2::password_hash::PasswordHashString;
use serde::Deserialize;

use crate::data::{Role, User};
use crate::username_string::UsernameString;

#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(deny_unknown_fields)]
pub(super) struct SeedUser {
    pub username: UsernameString,

    #[serde(with = "crate::serde::password_hash_string")]
    pub hash: PasswordHashString,

    pub role: Role,

    pub active: bool,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(super) struct UsersData {
    #[serde(rename = "user", default)]
    pub users: Vec<SeedUser>,
}

impl From<SeedUser> for User {
    fn from(value: SeedUser) -> Self {
        User {
            name: value.username,
            password_hash: value.hash,
            role: value.role,
            active: value.active,
        }
    }
}
