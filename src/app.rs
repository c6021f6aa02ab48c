//! Page startup sequence.
//!
//! Startup happens in two phases. [`App::start`] kicks off the chart
//! bootstrap and registers a ready handler, then returns. When the host
//! fires the [`ReadyHandle`], the handler runs exactly one user load.
//! [`App::shutdown`] tears down a load that has not finished yet.

use std::sync::Arc;

use thiserror::Error;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::chart::{self, ChartLoader};
use crate::populator::{LoadOutcome, UserListPopulator};
use crate::ui::UserInterface;

/// Errors from the startup sequence.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("user load task failed: {0}")]
    Task(String),
}

/// Fires the ready handler registered by [`App::start`].
#[derive(Debug)]
pub struct ReadyHandle(oneshot::Sender<()>);

impl ReadyHandle {
    /// Signal that the host UI is ready. Consumes the handle: ready fires once.
    pub fn signal(self) {
        // The handler may already be gone after a shutdown.
        let _ = self.0.send(());
    }
}

/// A load registered on ready, resolving to the view it mutated.
#[derive(Debug)]
pub struct PendingLoad<V> {
    handle: JoinHandle<(V, LoadOutcome)>,
}

impl<V> PendingLoad<V> {
    /// Wait for the load to settle and take the view back.
    pub async fn wait(self) -> Result<(V, LoadOutcome), AppError> {
        self.handle
            .await
            .map_err(|e| AppError::Task(e.to_string()))
    }
}

/// Owns the collaborators of the startup sequence.
pub struct App {
    populator: Arc<UserListPopulator>,
    charts: Arc<dyn ChartLoader>,
    cancel: CancellationToken,
}

impl App {
    pub fn new(populator: UserListPopulator, charts: Arc<dyn ChartLoader>) -> Self {
        Self {
            populator: Arc::new(populator),
            charts,
            cancel: CancellationToken::new(),
        }
    }

    /// Phase one: bootstrap charts and register the ready handler.
    ///
    /// Must be called from within a tokio runtime. Dropping the returned
    /// [`ReadyHandle`] without signalling settles the load as cancelled.
    pub fn start<V>(&self, view: V) -> (ReadyHandle, PendingLoad<V>)
    where
        V: UserInterface + Send + 'static,
    {
        chart::bootstrap(self.charts.clone());

        let (ready_tx, ready_rx) = oneshot::channel::<()>();
        let populator = self.populator.clone();
        let cancel = self.cancel.child_token();

        let handle = tokio::spawn(async move {
            let mut view = view;
            let ready = tokio::select! {
                biased;
                _ = cancel.cancelled() => false,
                signalled = ready_rx => signalled.is_ok(),
            };
            if ready {
                debug!("host ready, loading users");
            } else {
                cancel.cancel();
            }
            let outcome = populator.populate(&mut view, &cancel).await;
            (view, outcome)
        });

        (ReadyHandle(ready_tx), PendingLoad { handle })
    }

    /// Cancel any load still in flight.
    pub fn shutdown(&self) {
        self.cancel.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::TracingChartLoader;
    use crate::client::{FetchError, UserSource};
    use crate::models::{UserId, UserRecord};
    use crate::ui::MemoryView;
    use async_trait::async_trait;

    struct OneUser;

    #[async_trait]
    impl UserSource for OneUser {
        async fn fetch_users(&self) -> Result<Vec<UserRecord>, FetchError> {
            Ok(vec![UserRecord {
                user_id: UserId::Int(10),
                name: "User 10".into(),
                avatar: None,
            }])
        }
    }

    fn app() -> App {
        App::new(
            UserListPopulator::new(Arc::new(OneUser), false),
            Arc::new(TracingChartLoader),
        )
    }

    #[tokio::test]
    async fn ready_triggers_a_single_load() {
        let app = app();
        let (ready, pending) = app.start(MemoryView::new());
        ready.signal();

        let (view, outcome) = pending.wait().await.unwrap();
        assert_eq!(outcome, LoadOutcome::Loaded { count: 1 });
        assert_eq!(view.dropdown.options()[0].label, "User 10");
        assert!(view.dropdown_visible);
        assert!(!view.loading_visible);
    }

    #[tokio::test]
    async fn shutdown_before_ready_cancels() {
        let app = app();
        let (_ready, pending) = app.start(MemoryView::new());
        app.shutdown();

        let (view, outcome) = pending.wait().await.unwrap();
        assert_eq!(outcome, LoadOutcome::Cancelled);
        assert!(view.dropdown.is_empty());
        assert!(!view.loading_visible);
    }

    #[tokio::test]
    async fn dropped_ready_handle_cancels() {
        let app = app();
        let (ready, pending) = app.start(MemoryView::new());
        drop(ready);

        let (_, outcome) = pending.wait().await.unwrap();
        assert_eq!(outcome, LoadOutcome::Cancelled);
    }
}
