//! Shared types used across all modules.
//!
//! Defines the user records returned by the API, the dropdown state the
//! populator builds from them, and the API version selector. Other modules
//! import from here rather than reaching into each other's internals.

pub mod dropdown;
pub mod user;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

pub use dropdown::{DropdownOption, DropdownState};
pub use user::{UserId, UserRecord};

/// Version of the users endpoint to query.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, ValueEnum,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ApiVersion {
    /// `/api/v1/users`: id and name only.
    #[default]
    V1,
    /// `/api/v2/users`: id, name and avatar.
    V2,
}

impl ApiVersion {
    /// Path of the users listing for this version.
    pub fn users_path(self) -> &'static str {
        match self {
            ApiVersion::V1 => "/api/v1/users",
            ApiVersion::V2 => "/api/v2/users",
        }
    }

    /// Whether records from this version carry an avatar worth displaying.
    pub fn supports_avatar(self) -> bool {
        matches!(self, ApiVersion::V2)
    }
}
