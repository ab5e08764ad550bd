//! Start-up fetch as an explicit task
//!
//! The dataset is fetched once. The outcome is published through a
//! `tokio::sync::watch` channel so the event loop can poll it between frames
//! without ever observing a half-applied transition.

use std::sync::Arc;

use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::RowSource;
use crate::error::Error;
use crate::model::Dataset;

/// Outcome of the start-up fetch.
#[derive(Debug, Clone, Default)]
pub enum LoadState {
    /// The fetch has not completed yet.
    #[default]
    Pending,
    /// The fetch succeeded.
    Loaded(Dataset),
    /// The fetch failed. Terminal; there is no retry.
    Failed(Arc<Error>),
}

impl LoadState {
    /// Returns `true` while the fetch is in flight.
    pub fn is_pending(&self) -> bool {
        matches!(self, LoadState::Pending)
    }

    /// Returns the dataset if the fetch succeeded.
    pub fn dataset(&self) -> Option<&Dataset> {
        match self {
            LoadState::Loaded(dataset) => Some(dataset),
            _ => None,
        }
    }

    /// Returns the error if the fetch failed.
    pub fn error(&self) -> Option<&Error> {
        match self {
            LoadState::Failed(error) => Some(error),
            _ => None,
        }
    }
}

impl From<Result<Dataset, Error>> for LoadState {
    fn from(result: Result<Dataset, Error>) -> Self {
        match result {
            Ok(dataset) => LoadState::Loaded(dataset),
            Err(error) => LoadState::Failed(Arc::new(error)),
        }
    }
}

/// Handle to a running start-up fetch.
#[derive(Debug)]
pub struct Loader {
    state: watch::Receiver<LoadState>,
    task: JoinHandle<()>,
}

impl Loader {
    /// Spawns the fetch on the current tokio runtime.
    ///
    /// Must be called from within a runtime context.
    pub fn spawn(source: Arc<dyn RowSource>) -> Self {
        let (tx, rx) = watch::channel(LoadState::Pending);
        let task = tokio::spawn(async move {
            log::info!("Loading dataset");
            let state = LoadState::from(source.fetch().await);
            match &state {
                LoadState::Loaded(dataset) => log::info!("Dataset loaded: {} rows", dataset.len()),
                LoadState::Failed(error) => log::error!("Dataset load failed: {}", error),
                LoadState::Pending => {}
            }
            // Receiver gone means nobody is waiting for the result.
            let _ = tx.send(state);
        });
        Self { state: rx, task }
    }

    /// Returns the current state without waiting.
    pub fn state(&self) -> LoadState {
        self.state.borrow().clone()
    }

    /// Returns the new state if it changed since the last call.
    pub fn poll_changed(&mut self) -> Option<LoadState> {
        match self.state.has_changed() {
            Ok(true) => Some(self.state.borrow_and_update().clone()),
            _ => None,
        }
    }

    /// Waits for the next state change.
    ///
    /// Returns `None` once the task has finished and its result was seen.
    pub async fn changed(&mut self) -> Option<LoadState> {
        self.state.changed().await.ok()?;
        Some(self.state.borrow_and_update().clone())
    }

    /// Waits until the fetch settles and returns its outcome.
    pub async fn settled(&mut self) -> LoadState {
        let current = self.state.borrow_and_update().clone();
        if !current.is_pending() {
            return current;
        }
        while let Some(state) = self.changed().await {
            if !state.is_pending() {
                return state;
            }
        }
        // Sender dropped without publishing; report the last value.
        self.state.borrow().clone()
    }
}

impl Drop for Loader {
    fn drop(&mut self) {
        self.task.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::StaticSource;
    use crate::error::ApiError;
    use crate::model::Row;

    struct FailingSource;

    #[async_trait::async_trait]
    impl RowSource for FailingSource {
        async fn fetch(&self) -> Result<Dataset, Error> {
            Err(ApiError::http(503, "unavailable").into())
        }
    }

    #[tokio::test]
    async fn test_loader_publishes_dataset() {
        let dataset = Dataset::from_rows(vec![Row::new("1", "Alpha", "X")]);
        let mut loader = Loader::spawn(Arc::new(StaticSource::new(dataset.clone())));

        let state = loader.settled().await;
        assert_eq!(state.dataset(), Some(&dataset));
    }

    #[tokio::test]
    async fn test_loader_publishes_failure() {
        let mut loader = Loader::spawn(Arc::new(FailingSource));

        let state = loader.settled().await;
        let error = state.error().expect("failure state");
        assert!(matches!(error, Error::Api(api) if api.status_code() == Some(503)));
    }

    #[tokio::test]
    async fn test_poll_changed_reports_once() {
        let mut loader = Loader::spawn(Arc::new(StaticSource::new(Dataset::default())));
        loader.settled().await;

        assert!(loader.poll_changed().is_none());
        assert!(matches!(loader.state(), LoadState::Loaded(_)));
    }
}
