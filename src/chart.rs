//! Chart library bootstrap.
//!
//! The presence pages render their charts with the Google visualization
//! library. Startup asks it for the `corechart` and `timeline` packages in
//! Polish and moves on without waiting: nothing on the user dropdown path
//! depends on the charts being ready.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;
use tracing::{debug, info};

use crate::constants::{CHART_LANGUAGE, CHART_MODULE, CHART_PACKAGES, CHART_VERSION};

/// Options passed to the chart loader. Field names are part of the
/// library's contract and serialize verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartOptions {
    pub packages: Vec<String>,
    pub language: String,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            packages: CHART_PACKAGES.iter().map(|p| p.to_string()).collect(),
            language: CHART_LANGUAGE.to_string(),
        }
    }
}

impl ChartOptions {
    /// The equivalent `google.load(...)` statement for embedding in a page.
    pub fn loader_call(&self) -> String {
        let options = serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string());
        format!("google.load(\"{CHART_MODULE}\", \"{CHART_VERSION}\", {options});")
    }
}

/// Something that can initialise the chart library.
#[async_trait]
pub trait ChartLoader: Send + Sync {
    async fn load(
        &self,
        module: &str,
        version: &str,
        options: &ChartOptions,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;
}

/// Loader for hosts without a chart runtime: records the call in the log.
#[derive(Debug, Default)]
pub struct TracingChartLoader;

#[async_trait]
impl ChartLoader for TracingChartLoader {
    async fn load(
        &self,
        module: &str,
        version: &str,
        options: &ChartOptions,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        info!(
            module,
            version,
            packages = ?options.packages,
            language = %options.language,
            "chart library requested"
        );
        Ok(())
    }
}

/// Fire-and-forget: ask `loader` for the default packages. Returns
/// immediately via `tokio::spawn`; the outcome is discarded.
pub fn bootstrap(loader: Arc<dyn ChartLoader>) {
    tokio::spawn(async move {
        let options = ChartOptions::default();
        if let Err(e) = loader.load(CHART_MODULE, CHART_VERSION, &options).await {
            debug!(error = %e, "chart bootstrap failed");
        }
    });
}
