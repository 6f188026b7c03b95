//! Client feed — the host-side source of nameplate events.
//!
//! DESIGN
//! ======
//! `ClientFeed` is the seam between the overlay and whatever receives game
//! events. `ClientService` is the in-process implementation: one broadcast
//! channel per event kind, fanned out to every subscriber. Events published
//! before a subscription exists are not replayed.
//!
//! ERROR HANDLING
//! ==============
//! A subscriber that falls more than `feed_capacity` events behind either
//! receives `FeedError::Lagged` and stops, or skips ahead, depending on
//! `LagPolicy`. Dropping the service closes every subscription.

use futures::StreamExt;
use futures::stream::{self, BoxStream};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::sync::broadcast;
use tokio::sync::broadcast::error::RecvError;
use tracing::{debug, info, warn};

use crate::config::{LagPolicy, NameplateConfig};
use crate::message::ClientMessage;
use crate::position::Position;

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FeedError {
    #[error("subscriber lagged behind the feed by {0} events")]
    Lagged(u64),
}

/// A live source of nameplate events.
///
/// Each call returns a fresh, independent subscription.
pub trait ClientFeed {
    /// Position updates, in the order they occur.
    fn nameplate_change(&self) -> BoxStream<'static, Result<Position, FeedError>>;

    /// Visibility updates. Feeds without a visibility source never yield.
    fn nameplate_visibility(&self) -> BoxStream<'static, Result<bool, FeedError>> {
        stream::pending().boxed()
    }
}

// =============================================================================
// CLIENT SERVICE
// =============================================================================

/// Broadcast-backed [`ClientFeed`] owned by the host application.
pub struct ClientService {
    positions: broadcast::Sender<Position>,
    visibility: broadcast::Sender<bool>,
    lag_policy: LagPolicy,
}

impl ClientService {
    #[must_use]
    pub fn new(config: NameplateConfig) -> Self {
        let capacity = config.feed_capacity.max(1);
        let (positions, _) = broadcast::channel(capacity);
        let (visibility, _) = broadcast::channel(capacity);
        Self { positions, visibility, lag_policy: config.lag_policy }
    }

    /// Push a position to every subscriber. Returns how many received it.
    pub fn publish_position(&self, position: Position) -> usize {
        let delivered = self.positions.send(position).unwrap_or(0);
        debug!(x = position.x, y = position.y, delivered, "nameplate position published");
        delivered
    }

    /// Push a visibility change to every subscriber. Returns how many received it.
    pub fn set_visible(&self, shown: bool) -> usize {
        let delivered = self.visibility.send(shown).unwrap_or(0);
        debug!(shown, delivered, "nameplate visibility published");
        delivered
    }

    /// Route a host message to the matching channel.
    pub fn dispatch(&self, message: ClientMessage) -> usize {
        match message {
            ClientMessage::NameplateChange { position } => self.publish_position(position),
            ClientMessage::NameplateVisibility { shown } => self.set_visible(shown),
        }
    }

    /// Dispatch one JSON message per line from `reader` until EOF.
    ///
    /// Blank lines are ignored; lines that are not UTF-8 or not a valid
    /// message are logged and skipped. Returns the number of messages
    /// dispatched.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error if reading fails.
    pub async fn pump<R>(&self, mut reader: R) -> std::io::Result<usize>
    where
        R: AsyncBufRead + Unpin,
    {
        let mut line = Vec::new();
        let mut dispatched = 0;
        loop {
            line.clear();
            if reader.read_until(b'\n', &mut line).await? == 0 {
                break;
            }
            if line.trim_ascii().is_empty() {
                continue;
            }
            match ClientMessage::from_bytes(&line) {
                Ok(message) => {
                    self.dispatch(message);
                    dispatched += 1;
                    // Let subscribers drain before the next burst.
                    tokio::task::yield_now().await;
                }
                Err(e) => warn!(error = %e, "skipping client message"),
            }
        }
        info!(dispatched, "client message input closed");
        Ok(dispatched)
    }

    /// Number of live position subscriptions.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.positions.receiver_count()
    }
}

impl Default for ClientService {
    fn default() -> Self {
        Self::new(NameplateConfig::default())
    }
}

impl ClientFeed for ClientService {
    fn nameplate_change(&self) -> BoxStream<'static, Result<Position, FeedError>> {
        receiver_stream(self.positions.subscribe(), self.lag_policy, "position")
    }

    fn nameplate_visibility(&self) -> BoxStream<'static, Result<bool, FeedError>> {
        receiver_stream(self.visibility.subscribe(), self.lag_policy, "visibility")
    }
}

/// Adapt a broadcast receiver into a stream that ends when the sender closes.
fn receiver_stream<T>(
    rx: broadcast::Receiver<T>,
    lag_policy: LagPolicy,
    channel: &'static str,
) -> BoxStream<'static, Result<T, FeedError>>
where
    T: Clone + Send + 'static,
{
    stream::unfold(Some(rx), move |rx| async move {
        let mut rx = rx?;
        loop {
            match rx.recv().await {
                Ok(value) => return Some((Ok(value), Some(rx))),
                Err(RecvError::Closed) => return None,
                Err(RecvError::Lagged(skipped)) => match lag_policy {
                    LagPolicy::Skip => warn!(channel, skipped, "nameplate subscriber lagged; skipping ahead"),
                    LagPolicy::Error => return Some((Err(FeedError::Lagged(skipped)), None)),
                },
            }
        }
    })
    .boxed()
}

#[cfg(test)]
#[path = "feed_test.rs"]
mod tests;
