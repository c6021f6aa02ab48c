//! User records as returned by the users listing.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a user. The API emits integers, but string ids are
/// accepted so a differently-keyed backend does not break the listing.
///
/// Integers above `i64::MAX` land in `Uint`. Fractional ids are not
/// identifiers and fail deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UserId {
    Int(i64),
    Uint(u64),
    Str(String),
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserId::Int(id) => write!(f, "{id}"),
            UserId::Uint(id) => write!(f, "{id}"),
            UserId::Str(id) => f.write_str(id),
        }
    }
}

impl From<i64> for UserId {
    fn from(id: i64) -> Self {
        UserId::Int(id)
    }
}

impl From<&str> for UserId {
    fn from(id: &str) -> Self {
        UserId::Str(id.to_string())
    }
}

/// One entry of the users listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub user_id: UserId,
    pub name: String,
    /// Only present on the v2 listing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}
