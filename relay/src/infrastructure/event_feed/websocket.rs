use crate::domain::ChainEvent;
use futures_util::StreamExt;
use std::time::Duration;
use thiserror::Error;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_tungstenite::{connect_async, tungstenite::Message};

#[derive(Error, Debug)]
pub enum FeedError {
    #[error("Connection error: {0}")]
    Connection(#[from] tokio_tungstenite::tungstenite::Error),
    #[error("Channel closed")]
    ChannelClosed,
}

/// Subscribes to an external fill/cancel feed over WebSocket.
///
/// Each text frame is one JSON `ChainEvent`. Malformed frames are logged
/// and skipped. The connection is re-established after `reconnect_delay`
/// until the receiving end of the event channel goes away.
pub struct WebSocketEventFeed {
    url: String,
    reconnect_delay: Duration,
}

impl WebSocketEventFeed {
    pub fn new(url: impl Into<String>, reconnect_delay: Duration) -> Self {
        WebSocketEventFeed {
            url: url.into(),
            reconnect_delay,
        }
    }

    pub fn spawn(self, events: mpsc::Sender<ChainEvent>) -> JoinHandle<()> {
        tokio::spawn(self.run(events))
    }

    /// Forward events until `events` is closed
    pub async fn run(self, events: mpsc::Sender<ChainEvent>) {
        loop {
            match self.stream_once(&events).await {
                Err(FeedError::ChannelClosed) => break,
                Err(e) => tracing::warn!("Chain event feed {} failed: {}", self.url, e),
                Ok(()) => tracing::warn!("Chain event feed {} closed by remote", self.url),
            }

            tokio::select! {
                _ = tokio::time::sleep(self.reconnect_delay) => {}
                _ = events.closed() => break,
            }
        }
        tracing::info!("Chain event feed {} stopped", self.url);
    }

    async fn stream_once(&self, events: &mpsc::Sender<ChainEvent>) -> Result<(), FeedError> {
        let (mut ws_stream, _) = connect_async(self.url.as_str()).await?;
        tracing::info!("Subscribed to chain event feed {}", self.url);

        loop {
            let msg = tokio::select! {
                msg = ws_stream.next() => msg,
                // an idle connection must not outlive the listener
                _ = events.closed() => return Err(FeedError::ChannelClosed),
            };
            let Some(msg) = msg else {
                break;
            };

            match msg? {
                Message::Text(text) => match serde_json::from_str::<ChainEvent>(text.as_str()) {
                    Ok(event) => events
                        .send(event)
                        .await
                        .map_err(|_| FeedError::ChannelClosed)?,
                    Err(e) => {
                        tracing::warn!("Ignoring malformed chain event {:?}: {}", text.as_str(), e)
                    }
                },
                Message::Ping(data) => {
                    tracing::trace!("Received ping: {:?}", data);
                }
                Message::Close(_) => return Ok(()),
                _ => {}
            }
        }
        Ok(())
    }
}
