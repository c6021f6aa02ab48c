//! Clap argument types and config overrides.

use clap::{Parser, ValueEnum};

use presence_roster::config::{Config, LogFormat};
use presence_roster::models::ApiVersion;
use presence_roster::output::OutputRenderer;
use presence_roster::ui::MemoryView;

/// Load the presence analyzer's user list the way its pages do.
#[derive(Parser, Debug)]
#[command(
    name = "presence-roster",
    version = presence_roster::constants::VERSION,
    about = "Load the presence analyzer user dropdown",
)]
pub struct Cli {
    /// Log filter directive (e.g. `info`, `presence_roster=debug`).
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Log output format.
    #[arg(long, global = true, value_enum)]
    pub log_format: Option<LogFormat>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(clap::Subcommand, Debug)]
pub enum Command {
    /// Fetch the users listing and render the resulting dropdown.
    Users(UsersArgs),

    /// Convert seconds since midnight into a time of day.
    Interval(IntervalArgs),

    /// Print the effective configuration as TOML.
    Config,

    /// Print version and build information.
    Version,
}

/// Arguments for the `users` subcommand.
#[derive(Parser, Debug, Default)]
pub struct UsersArgs {
    /// Endpoint version to query.
    #[arg(long, value_enum)]
    pub api: Option<ApiVersion>,

    /// Scheme and host of the presence API.
    #[arg(long)]
    pub base_url: Option<String>,

    /// Bypass HTTP caches for the users request.
    #[arg(long, default_value_t = false)]
    pub no_cache: bool,

    /// Request timeout in seconds.
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: Option<u64>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Terminal)]
    pub format: OutputFormat,
}

/// Arguments for the `interval` subcommand.
#[derive(Parser, Debug)]
pub struct IntervalArgs {
    /// Seconds since midnight; fractions and negatives are accepted.
    #[arg(required = true, allow_negative_numbers = true)]
    pub seconds: Vec<f64>,
}

/// Output format options.
#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Terminal,
    Json,
}

impl OutputFormat {
    /// Render the view using the renderer for this format.
    pub fn render(&self, view: &MemoryView) -> String {
        match self {
            OutputFormat::Terminal => presence_roster::output::terminal::TerminalRenderer.render(view),
            OutputFormat::Json => presence_roster::output::json::JsonRenderer.render(view),
        }
    }
}

impl Cli {
    /// Apply the global logging flags on top of the loaded config.
    pub fn apply_log_overrides(&self, config: &mut Config) {
        if let Some(ref level) = self.log_level {
            config.log.level = level.clone();
        }
        if let Some(format) = self.log_format {
            config.log.format = format;
        }
    }
}

impl UsersArgs {
    /// Apply endpoint flags on top of the loaded config.
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(api) = self.api {
            config.api.version = api;
        }
        if let Some(ref url) = self.base_url {
            config.api.base_url = url.clone();
        }
        if self.no_cache {
            config.api.disable_request_cache = Some(true);
        }
        if let Some(secs) = self.timeout {
            config.api.timeout_secs = secs;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_users_flags() {
        let cli = Cli::parse_from([
            "presence-roster",
            "--log-level",
            "debug",
            "users",
            "--api",
            "v2",
            "--base-url",
            "http://intranet:5000",
            "--no-cache",
            "--timeout",
            "3",
            "--format",
            "json",
        ]);
        let Command::Users(args) = &cli.command else {
            panic!("expected users command");
        };
        assert_eq!(args.api, Some(ApiVersion::V2));
        assert_eq!(args.format, OutputFormat::Json);

        let mut config = Config::default();
        cli.apply_log_overrides(&mut config);
        args.apply_overrides(&mut config);
        assert_eq!(config.log.level, "debug");
        assert_eq!(config.api.version, ApiVersion::V2);
        assert_eq!(config.api.base_url, "http://intranet:5000");
        assert_eq!(config.api.disable_request_cache, Some(true));
        assert_eq!(config.api.timeout_secs, 3);
    }

    #[test]
    fn users_without_flags_keeps_config() {
        let mut config = Config::default();
        config.api.version = ApiVersion::V2;
        UsersArgs::default().apply_overrides(&mut config);
        assert_eq!(config.api.version, ApiVersion::V2);
        assert_eq!(config.api.disable_request_cache, None);
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let result = Cli::try_parse_from(["presence-roster", "users", "--timeout", "0"]);
        assert!(result.is_err());
    }

    #[test]
    fn interval_accepts_negative_and_fractional() {
        let cli = Cli::parse_from(["presence-roster", "interval", "3661", "-1", "0.5"]);
        let Command::Interval(args) = cli.command else {
            panic!("expected interval command");
        };
        assert_eq!(args.seconds, vec![3661.0, -1.0, 0.5]);
    }

    #[test]
    fn interval_requires_a_value() {
        assert!(Cli::try_parse_from(["presence-roster", "interval"]).is_err());
    }
}
