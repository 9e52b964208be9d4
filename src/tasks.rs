//! Async task management for non-blocking API operations.
//!
//! The fetch runs in a background tokio task so the UI stays responsive:
//! the main loop spawns the task via `TaskSpawner`, keeps rendering and
//! handling events, and drains results from the channel with `try_recv()`
//! on each tick.

use tokio::sync::mpsc;
use tracing::{error, info};

use crate::api::LaunchClient;
use crate::error::AppError;
use crate::model::Record;

/// Messages sent from background tasks to the main event loop.
#[derive(Debug)]
pub enum ApiMessage {
    /// The launch dataset was fetched (initial load or manual refresh).
    LaunchesFetched {
        result: Result<Vec<Record>, String>,
        is_refresh: bool,
    },
}

/// Spawns background API tasks and hands out their result channel.
pub struct TaskSpawner {
    tx: mpsc::UnboundedSender<ApiMessage>,
}

impl TaskSpawner {
    /// Create a spawner and the receiving end for the main loop.
    pub fn new() -> (Self, mpsc::UnboundedReceiver<ApiMessage>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }

    /// Fetch the launch dataset in the background.
    ///
    /// The error side is stringified so the message type stays `Send` and
    /// the UI only deals in displayable text.
    pub fn spawn_fetch_launches(&self, client: LaunchClient, is_refresh: bool) {
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let result = match client.fetch_launches().await {
                Ok(records) => {
                    info!(count = records.len(), "Launch fetch completed");
                    Ok(records)
                }
                Err(e) => {
                    error!(error = %e, "Launch fetch failed");
                    Err(AppError::Api(e).user_message())
                }
            };

            // The receiver only drops on shutdown; losing the message then
            // is fine.
            let _ = tx.send(ApiMessage::LaunchesFetched { result, is_refresh });
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_delivers_messages() {
        let (spawner, mut rx) = TaskSpawner::new();

        spawner
            .tx
            .send(ApiMessage::LaunchesFetched {
                result: Ok(Vec::new()),
                is_refresh: false,
            })
            .unwrap();

        match rx.try_recv().unwrap() {
            ApiMessage::LaunchesFetched { result, is_refresh } => {
                assert!(result.unwrap().is_empty());
                assert!(!is_refresh);
            }
        }
    }

    #[tokio::test]
    async fn test_spawn_reports_failure_as_string() {
        let (spawner, mut rx) = TaskSpawner::new();

        // Unroutable endpoint: the fetch fails fast and the error arrives
        // as a plain string.
        let client = LaunchClient::new("http://127.0.0.1:1/launches").unwrap();
        spawner.spawn_fetch_launches(client, true);

        let msg = rx.recv().await.unwrap();
        match msg {
            ApiMessage::LaunchesFetched { result, is_refresh } => {
                assert!(result.is_err());
                assert!(is_refresh);
            }
        }
    }
}
