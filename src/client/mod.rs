//! UserSource trait and the HTTP implementation.
//!
//! The populator only sees [`UserSource`], so tests can swap the network
//! for canned records or scripted failures.

pub mod http;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::UserRecord;

pub use http::HttpUserSource;

/// Ways a users fetch can fail.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("network error: {0}")]
    Network(String),

    #[error("server responded with HTTP {status}")]
    UnexpectedStatus { status: u16 },

    #[error("malformed users response: {0}")]
    MalformedResponse(String),
}

/// Something that can produce the users listing.
#[async_trait]
pub trait UserSource: Send + Sync {
    /// Fetch the full listing in server order.
    async fn fetch_users(&self) -> Result<Vec<UserRecord>, FetchError>;
}
