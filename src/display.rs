//! Nameplate display — feed-to-UI bridge.
//!
//! DESIGN
//! ======
//! The display borrows a `ClientFeed` for its own lifetime and never mutates
//! it. `position()` prepends `Position::ORIGIN` to a fresh feed subscription
//! so a renderer always has a value to draw before the first real update.
//! Nothing else is buffered, deduplicated, or transformed.
//!
//! ERROR HANDLING
//! ==============
//! A feed error is forwarded once and ends that subscription. Feed
//! termination ends the derived stream.

use futures::future;
use futures::stream::{self, BoxStream, Stream, StreamExt};

use crate::feed::{ClientFeed, FeedError};
use crate::position::Position;
use crate::render::NameplateUpdate;

pub struct NameplateDisplay<'a, F: ClientFeed + ?Sized> {
    client: &'a F,
}

impl<'a, F: ClientFeed + ?Sized> NameplateDisplay<'a, F> {
    #[must_use]
    pub fn new(client: &'a F) -> Self {
        Self { client }
    }

    /// Subscribe to nameplate positions.
    ///
    /// The first item is always `Ok(Position::ORIGIN)`, followed by every feed
    /// value in order. Each call is an independent subscription that starts
    /// with the origin again.
    #[must_use]
    pub fn position(&self) -> BoxStream<'static, Result<Position, FeedError>> {
        let feed = until_error(self.client.nameplate_change());
        stream::once(future::ready(Ok(Position::ORIGIN))).chain(feed).boxed()
    }

    /// Subscribe to visibility changes exactly as the feed reports them.
    #[must_use]
    pub fn is_shown(&self) -> BoxStream<'static, Result<bool, FeedError>> {
        until_error(self.client.nameplate_visibility()).boxed()
    }

    /// Both subscriptions merged into one update stream for a render loop.
    ///
    /// The first error from either side is forwarded and ends the merged
    /// stream. Otherwise it ends only once both sides have ended, so a feed
    /// without a visibility source keeps it open after positions stop.
    #[must_use]
    pub fn updates(&self) -> BoxStream<'static, Result<NameplateUpdate, FeedError>> {
        let positions = self.position().map(|item| item.map(NameplateUpdate::Moved));
        let shown = self.is_shown().map(|item| item.map(NameplateUpdate::Shown));
        until_error(stream::select(positions, shown)).boxed()
    }
}

/// Forward items up to and including the first error, then end without
/// polling `feed` again.
fn until_error<T, S>(feed: S) -> impl Stream<Item = Result<T, FeedError>>
where
    S: Stream<Item = Result<T, FeedError>> + Unpin,
{
    stream::unfold(Some(feed), |feed| async move {
        let mut feed = feed?;
        let item = feed.next().await?;
        let rest = if item.is_ok() { Some(feed) } else { None };
        Some((item, rest))
    })
}

#[cfg(test)]
#[path = "display_test.rs"]
mod tests;
