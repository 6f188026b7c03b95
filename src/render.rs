//! Nameplate rendering.
//!
//! `render` is the explicit replacement for the overlay template: given the
//! current position and visibility it produces the absolute-position style
//! for the nameplate, or nothing when it is hidden. `render_loop` folds an
//! update stream into a `NameplateView` and writes one line per frame.

use std::fmt;
use std::io::Write;

use futures::{Stream, StreamExt};

use crate::feed::FeedError;
use crate::position::Position;

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("nameplate feed failed: {0}")]
    Feed(#[from] FeedError),
    #[error("failed to write frame: {0}")]
    Io(#[from] std::io::Error),
}

/// One change observed by a render loop.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum NameplateUpdate {
    Moved(Position),
    Shown(bool),
}

/// Absolute placement of the nameplate on screen.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NameplateStyle {
    pub left_px: f64,
    pub top_px: f64,
}

impl fmt::Display for NameplateStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "left: {}px; top: {}px;", self.left_px, self.top_px)
    }
}

/// Style for the nameplate at `position`, or `None` when hidden.
#[must_use]
pub fn render(position: Position, shown: bool) -> Option<NameplateStyle> {
    shown.then_some(NameplateStyle { left_px: position.x, top_px: position.y })
}

/// Latest values seen by a render loop. Starts at the origin, hidden.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct NameplateView {
    pub position: Position,
    pub shown: bool,
}

impl NameplateView {
    /// Fold one update in. Returns `true` if the rendered output may differ.
    pub fn apply(&mut self, update: NameplateUpdate) -> bool {
        match update {
            NameplateUpdate::Moved(position) => {
                let changed = self.position != position;
                self.position = position;
                changed && self.shown
            }
            NameplateUpdate::Shown(shown) => {
                let changed = self.shown != shown;
                self.shown = shown;
                changed
            }
        }
    }

    #[must_use]
    pub fn render(&self) -> Option<NameplateStyle> {
        render(self.position, self.shown)
    }
}

/// Draw every frame that may differ from the last one until `updates` ends.
///
/// The first update always produces a frame. A hidden nameplate is written as
/// `hidden`, a shown one as its style. Returns the number of frames written.
///
/// # Errors
///
/// Stops at the first feed error or failed write.
pub async fn render_loop<S, W>(mut updates: S, out: &mut W) -> Result<usize, RenderError>
where
    S: Stream<Item = Result<NameplateUpdate, FeedError>> + Unpin,
    W: Write,
{
    let mut view = NameplateView::default();
    let mut frames = 0;

    while let Some(item) = updates.next().await {
        if view.apply(item?) || frames == 0 {
            match view.render() {
                Some(style) => writeln!(out, "{style}")?,
                None => writeln!(out, "hidden")?,
            }
            out.flush()?;
            frames += 1;
        }
    }
    Ok(frames)
}

#[cfg(test)]
#[path = "render_test.rs"]
mod tests;
