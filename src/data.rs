use argon2::password_hash::PasswordHashString;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::username_string::UsernameString;

pub type NoteId = i64;

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Note {
    pub id: NoteId,
    pub title: String,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub created_at: Option<OffsetDateTime>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub updated_at: Option<OffsetDateTime>,
    #[serde(default)]
    pub owner_name: Option<String>,
    #[serde(default)]
    pub owner_email: Option<String>,
}

/// A note before the store has assigned it an id.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
pub struct NoteDraft {
    pub title: String,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub created_at: Option<OffsetDateTime>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub updated_at: Option<OffsetDateTime>,
    #[serde(default)]
    pub owner_name: Option<String>,
    #[serde(default)]
    pub owner_email: Option<String>,
}

/// Full-replace payload: exactly these fields overwrite the stored record.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
pub struct NoteUpdate {
    pub title: String,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub updated_at: Option<OffsetDateTime>,
}

/// Field-level merge payload. A `None` field is left unchanged; there is
/// no way to clear a field to empty through a patch.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
pub struct NotePatch {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub updated_at: Option<OffsetDateTime>,
    #[serde(default)]
    pub owner_name: Option<String>,
    #[serde(default)]
    pub owner_email: Option<String>,
}

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Admin,
    User,
}

// not serializable on purpose: the stored hash must not travel outward
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct User {
    pub name: UsernameString,
    pub password_hash: PasswordHashString,
    pub role: Role,
    pub active: bool,
}

/// Create input; the password is plaintext and is only ever hashed, never
/// persisted.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
pub struct UserDraft {
    pub name: UsernameString,
    pub password: String,
    pub role: Role,
    pub active: bool,
}

/// Update input; the record key is supplied separately by the caller.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
pub struct UserUpdate {
    pub password: String,
    pub role: Role,
    pub active: bool,
}
