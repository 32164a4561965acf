//! Virtual scroll timeline
//!
//! Replaces a browser scroll container with a virtual one: wheel input moves
//! a scroll offset inside a container that is `content_factor` viewport
//! heights tall, and the timeline reports how far the animation has
//! progressed between its two anchors.

use thiserror::Error;

/// Errors raised when a timeline is configured so its anchors cannot be hit
#[derive(Debug, Error)]
pub enum TimelineError {
    /// The container is not taller than the viewport, so the end anchor
    /// (container midpoint aligned with viewport midpoint) can never be
    /// reached by scrolling.
    #[error("scroll container ({content_factor}x viewport) too short to reach the end anchor")]
    EndUnreachable { content_factor: f32 },

    /// Viewport height must be positive to define the anchors at all.
    #[error("viewport height must be positive, got {0}")]
    EmptyViewport(f32),
}

/// A scroll container with two animation anchors
///
/// The start anchor is "container top at viewport top" (offset 0). The end
/// anchor is "container 50% mark at viewport 50% mark", which for a container
/// of height `f * viewport` sits at offset `0.5 * (f - 1) * viewport`.
///
/// Progress is recomputed from the offset on every call; nothing about the
/// mapping is stateful, so scrolling back up replays the same values in
/// reverse.
#[derive(Debug, Clone)]
pub struct ScrollTimeline {
    content_factor: f32,
    viewport_height: f32,
    offset: f32,
}

impl ScrollTimeline {
    /// Creates a timeline for a container `content_factor` viewports tall
    pub fn new(content_factor: f32, viewport_height: f32) -> Result<Self, TimelineError> {
        if viewport_height <= 0.0 {
            return Err(TimelineError::EmptyViewport(viewport_height));
        }
        if content_factor <= 1.0 {
            return Err(TimelineError::EndUnreachable { content_factor });
        }

        Ok(Self {
            content_factor,
            viewport_height,
            offset: 0.0,
        })
    }

    /// Total height of the virtual container in pixels
    pub fn content_height(&self) -> f32 {
        self.content_factor * self.viewport_height
    }

    /// Scroll offset where the end anchor is reached
    ///
    /// The container's midpoint aligns with the viewport's midpoint when
    /// `0.5 * content - offset == 0.5 * viewport`.
    pub fn end_offset(&self) -> f32 {
        0.5 * (self.content_height() - self.viewport_height)
    }

    /// Maximum scrollable offset (container bottom at viewport bottom)
    pub fn max_offset(&self) -> f32 {
        self.content_height() - self.viewport_height
    }

    /// Current scroll offset in pixels
    pub fn offset(&self) -> f32 {
        self.offset
    }

    /// Moves the scroll position by `delta` pixels, clamped to the container
    pub fn scroll_by(&mut self, delta: f32) {
        self.offset = (self.offset + delta).clamp(0.0, self.max_offset());
    }

    /// Updates the viewport height after a window resize
    ///
    /// The offset is preserved (re-clamped) so the user does not jump around
    /// the container when the window changes size.
    pub fn set_viewport_height(&mut self, viewport_height: f32) {
        if viewport_height <= 0.0 {
            return;
        }
        self.viewport_height = viewport_height;
        self.offset = self.offset.clamp(0.0, self.max_offset());
    }

    /// Animation progress in [0, 1], a pure function of the current offset
    pub fn progress(&self) -> f32 {
        (self.offset / self.end_offset()).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_zero_at_top() {
        let timeline = ScrollTimeline::new(2.0, 1080.0).unwrap();
        assert_eq!(timeline.progress(), 0.0);
    }

    #[test]
    fn test_progress_one_at_end_anchor() {
        let mut timeline = ScrollTimeline::new(2.0, 1080.0).unwrap();
        // End anchor for a 2x container sits half a viewport down
        assert_eq!(timeline.end_offset(), 540.0);
        timeline.scroll_by(540.0);
        assert_eq!(timeline.progress(), 1.0);
    }

    #[test]
    fn test_progress_clamps_past_end() {
        let mut timeline = ScrollTimeline::new(2.0, 1080.0).unwrap();
        timeline.scroll_by(10_000.0);
        assert_eq!(timeline.offset(), timeline.max_offset());
        assert_eq!(timeline.progress(), 1.0);
    }

    #[test]
    fn test_progress_is_linear_in_offset() {
        let mut timeline = ScrollTimeline::new(2.0, 1000.0).unwrap();
        timeline.scroll_by(0.25 * timeline.end_offset());
        assert!((timeline.progress() - 0.25).abs() < 1e-6);
        timeline.scroll_by(0.5 * timeline.end_offset());
        assert!((timeline.progress() - 0.75).abs() < 1e-6);
    }

    #[test]
    fn test_scrolling_back_replays_in_reverse() {
        let mut timeline = ScrollTimeline::new(2.0, 1080.0).unwrap();
        timeline.scroll_by(300.0);
        let forward = timeline.progress();
        timeline.scroll_by(200.0);
        timeline.scroll_by(-200.0);
        assert_eq!(timeline.progress(), forward);
        timeline.scroll_by(-1000.0);
        assert_eq!(timeline.progress(), 0.0);
    }

    #[test]
    fn test_short_container_rejected() {
        assert!(matches!(
            ScrollTimeline::new(1.0, 1080.0),
            Err(TimelineError::EndUnreachable { .. })
        ));
        assert!(matches!(
            ScrollTimeline::new(2.0, 0.0),
            Err(TimelineError::EmptyViewport(_))
        ));
    }

    #[test]
    fn test_resize_preserves_clamped_offset() {
        let mut timeline = ScrollTimeline::new(2.0, 1000.0).unwrap();
        timeline.scroll_by(900.0);
        timeline.set_viewport_height(500.0);
        assert!(timeline.offset() <= timeline.max_offset());
        assert_eq!(timeline.progress(), 1.0);
    }
}
