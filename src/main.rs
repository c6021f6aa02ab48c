//! presence-roster — user dropdown loader CLI.
//!
//! Entry point and error handling boundary. Uses `anyhow` for
//! ergonomic error propagation and user-facing messages.

mod cli;

use presence_roster::app::App;
use presence_roster::chart::TracingChartLoader;
use presence_roster::config::Config;
use presence_roster::constants;
use presence_roster::env::Env;
use presence_roster::interval;
use presence_roster::logging;
use presence_roster::populator::{LoadOutcome, UserListPopulator};
use presence_roster::ui::MemoryView;

use std::process;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

use cli::args::{Cli, Command, IntervalArgs, UsersArgs};

#[tokio::main]
async fn main() {
    match run().await {
        Ok(code) => process::exit(code),
        Err(err) => {
            eprintln!("Error: {err:#}");
            process::exit(1);
        }
    }
}

async fn run() -> Result<i32> {
    let cli = Cli::parse();

    let cwd = std::env::current_dir().context("failed to determine working directory")?;
    let mut config =
        Config::load(Some(&cwd), &Env::real()).context("failed to load configuration")?;
    cli.apply_log_overrides(&mut config);

    match cli.command {
        Command::Users(ref args) => run_users(args, config).await,
        Command::Interval(ref args) => run_interval(args),
        Command::Config => run_config(&config),
        Command::Version => run_version(),
    }
}

/// Run the startup sequence against the configured API and render the result.
async fn run_users(args: &UsersArgs, mut config: Config) -> Result<i32> {
    args.apply_overrides(&mut config);
    logging::init_logging(&config.log);

    let populator = UserListPopulator::from_config(&config.api)
        .context("failed to set up the users client")?;
    let app = App::new(populator, Arc::new(TracingChartLoader));

    let (ready, pending) = app.start(MemoryView::new());
    ready.signal();

    let wait = pending.wait();
    tokio::pin!(wait);
    let (view, outcome) = tokio::select! {
        settled = &mut wait => settled?,
        _ = tokio::signal::ctrl_c() => {
            app.shutdown();
            wait.await?
        }
    };

    print!("{}", args.format.render(&view));

    Ok(match outcome {
        LoadOutcome::Loaded { .. } => 0,
        LoadOutcome::Failed(_) => cli::EXIT_LOAD_FAILED,
        LoadOutcome::Cancelled => cli::EXIT_INTERRUPTED,
    })
}

/// Print each value as a time of day.
fn run_interval(args: &IntervalArgs) -> Result<i32> {
    for &seconds in &args.seconds {
        let offset = interval::format_interval(seconds)
            .with_context(|| format!("cannot convert {seconds}"))?;
        println!("{seconds}\t{offset}");
    }
    Ok(0)
}

/// Print the effective configuration.
fn run_config(config: &Config) -> Result<i32> {
    let text = toml::to_string_pretty(config).context("failed to serialize configuration")?;
    print!("{text}");
    Ok(0)
}

/// Print detailed version and build information.
fn run_version() -> Result<i32> {
    use colored::Colorize;

    println!(
        "{} {}",
        constants::APP_NAME.bold(),
        constants::VERSION.green().bold()
    );
    println!("{}     {}", "target:".dimmed(), constants::TARGET);
    Ok(0)
}
