//! presence-roster — user dropdown loader for the presence analyzer (library crate).
//!
//! Re-exports public modules for integration tests and external use.

pub mod app;
pub mod chart;
pub mod client;
pub mod config;
pub mod constants;
pub mod env;
pub mod interval;
pub mod logging;
pub mod models;
pub mod output;
pub mod populator;
pub mod ui;
