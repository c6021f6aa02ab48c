//! Configuration loading and layering.
//!
//! Handles `.presence-roster.toml` loading, environment variable resolution,
//! and CLI flag merging with proper priority ordering.

pub mod loader;

pub use loader::{
    ApiConfig, ApiLayer, Config, ConfigError, ConfigLayer, LogConfig, LogFormat, LogLayer,
};
