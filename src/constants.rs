//! App-wide constants.
//!
//! Centralises the tool name, config paths, environment variable names,
//! API paths and chart library settings so a rename only requires
//! changing this file.

use std::time::Duration;

/// Display name of the tool (lowercase).
pub const APP_NAME: &str = "presence-roster";

/// Crate version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Compilation target triple, injected by `build.rs`.
pub const TARGET: &str = env!("TARGET");

/// `User-Agent` header sent with every API request.
pub const USER_AGENT: &str = concat!("presence-roster/", env!("CARGO_PKG_VERSION"));

/// Local config filename (looked up in the working directory).
pub const CONFIG_FILENAME: &str = ".presence-roster.toml";

/// Directory name under `~/.config/` for global config.
pub const CONFIG_DIR: &str = "presence-roster";

/// Default API host.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

/// Default time budget for the user list request.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

// ── UI control identifiers ──────────────────────────────────────────

/// Identifier of the user selection dropdown.
pub const DROPDOWN_ID: &str = "user_id";

/// Identifier of the loading indicator.
pub const LOADING_ID: &str = "loading";

// ── Chart library ───────────────────────────────────────────────────

/// Library module requested from the chart loader.
pub const CHART_MODULE: &str = "visualization";

/// Library version requested from the chart loader.
pub const CHART_VERSION: &str = "1";

/// Chart packages loaded at startup.
pub const CHART_PACKAGES: [&str; 2] = ["corechart", "timeline"];

/// Display locale for the chart library.
pub const CHART_LANGUAGE: &str = "pl";

// ── Environment variable names ──────────────────────────────────────

pub const ENV_BASE_URL: &str = "PRESENCE_ROSTER_BASE_URL";
pub const ENV_API_VERSION: &str = "PRESENCE_ROSTER_API";
pub const ENV_NO_CACHE: &str = "PRESENCE_ROSTER_NO_CACHE";
pub const ENV_TIMEOUT: &str = "PRESENCE_ROSTER_TIMEOUT";
pub const ENV_LOG: &str = "PRESENCE_ROSTER_LOG";
