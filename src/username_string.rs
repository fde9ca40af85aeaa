use std::fmt;
use std::fmt::Formatter;
use std::ops::Deref;
use std::str::FromStr;

use serde::de::Error;
use serde::de::Unexpected::Str;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error as ThisError;

use crate::lib_constants::{USERNAME_MAX_LEN, USERNAME_MIN_LEN};

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UsernameString(String);

#[derive(Debug, ThisError)]
#[error("username length must be between 3 and 50 characters")]
pub struct UsernameParseError;

impl FromStr for UsernameString {
    type Err = UsernameParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let length = s.chars().count();
        if length < USERNAME_MIN_LEN || length > USERNAME_MAX_LEN {
            return Err(UsernameParseError);
        }
        Ok(UsernameString(s.to_string()))
    }
}

impl Deref for UsernameString {
    type Target = str;
    fn deref(&self) -> &str {
        &self.0[..]
    }
}

impl fmt::Display for UsernameString {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<UsernameString> for String {
    fn from(value: UsernameString) -> Self {
        value.0
    }
}

impl Serialize for UsernameString {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for UsernameString {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct Visitor;
        impl<'de> serde::de::Visitor<'de> for Visitor {
            type Value = UsernameString;

            fn expecting(&self, formatter: &mut Formatter) -> std::fmt::Result {
                formatter.write_str("string containing a valid username")
            }

            fn visit_str<E>(self, v: &str) -> Result<UsernameString, E>
            where
                E: Error,
            {
                UsernameString::from_str(v)
                    .map_err(|_| Error::invalid_value(Str(v), &self))
            }
        }

        deserializer.deserialize_str(Visitor)
    }
}
