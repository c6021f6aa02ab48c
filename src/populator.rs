//! Fills the user dropdown from the users listing.
//!
//! A load is one fetch followed by one finalization step. Whatever the
//! fetch produced (records, an error, or nothing because the load was
//! cancelled), [`finalize`] is the only place that touches the UI, and it
//! always hides the loading indicator last.

use std::sync::Arc;

use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::client::{FetchError, HttpUserSource, UserSource};
use crate::config::ApiConfig;
use crate::models::{DropdownOption, UserRecord};
use crate::ui::UserInterface;

/// Result of a single load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The dropdown now holds `count` options and is visible.
    Loaded { count: usize },
    /// The fetch failed; an error message is on screen.
    Failed(FetchError),
    /// The load was torn down before the fetch completed.
    Cancelled,
}

impl LoadOutcome {
    pub fn is_loaded(&self) -> bool {
        matches!(self, LoadOutcome::Loaded { .. })
    }
}

/// Loads users from a [`UserSource`] into a [`UserInterface`].
pub struct UserListPopulator {
    source: Arc<dyn UserSource>,
    with_avatar: bool,
}

impl UserListPopulator {
    pub fn new(source: Arc<dyn UserSource>, with_avatar: bool) -> Self {
        Self {
            source,
            with_avatar,
        }
    }

    /// Build a populator that talks HTTP to the endpoint in `config`.
    pub fn from_config(config: &ApiConfig) -> Result<Self, FetchError> {
        let source = HttpUserSource::new(config)?;
        Ok(Self::new(Arc::new(source), config.avatars()))
    }

    /// Run one load: fetch, then settle the UI.
    ///
    /// Never leaves the loading indicator visible. A cancelled `cancel`
    /// token abandons the request.
    pub async fn populate<U>(&self, ui: &mut U, cancel: &CancellationToken) -> LoadOutcome
    where
        U: UserInterface + ?Sized,
    {
        let fetched = tokio::select! {
            biased;
            _ = cancel.cancelled() => None,
            result = self.source.fetch_users() => Some(result),
        };
        finalize(ui, fetched, self.with_avatar)
    }
}

fn finalize<U>(
    ui: &mut U,
    fetched: Option<Result<Vec<UserRecord>, FetchError>>,
    with_avatar: bool,
) -> LoadOutcome
where
    U: UserInterface + ?Sized,
{
    let outcome = match fetched {
        Some(Ok(users)) => {
            ui.clear_error();
            ui.clear_options();
            for user in &users {
                ui.append_option(DropdownOption::from_record(user, with_avatar));
            }
            ui.set_dropdown_visible(true);
            info!(count = users.len(), "user dropdown populated");
            LoadOutcome::Loaded { count: users.len() }
        }
        Some(Err(err)) => {
            warn!(error = %err, "failed to load users");
            ui.set_dropdown_visible(false);
            ui.clear_options();
            ui.show_error(&format!("Could not load users: {err}"));
            LoadOutcome::Failed(err)
        }
        None => {
            debug!("user load cancelled");
            LoadOutcome::Cancelled
        }
    };
    ui.set_loading_visible(false);
    outcome
}
