//! Scroll-driven camera rig
//!
//! Consumes mouse-wheel input, tracks it on a [`ScrollTimeline`], and maps
//! the damped progress onto a camera position tween once per frame.

use std::time::Duration;

use cgmath::Vector3;
use winit::{dpi::PhysicalPosition, event::MouseScrollDelta};

use super::{
    scroll_timeline::{ScrollTimeline, TimelineError},
    tween::{Scrub, Tween},
};

/// Pixels per wheel line tick
const LINE_HEIGHT: f32 = 40.0;

/// Maps scroll progress onto the camera position
///
/// The rig writes the camera position while the raw progress is changing or
/// the scrub is still catching up; once settled it stops producing values,
/// so other writers (the debug panel) are not fought over the camera.
pub struct ScrollCameraRig {
    timeline: ScrollTimeline,
    tween: Tween,
    scrub: Scrub,
}

impl ScrollCameraRig {
    /// Creates a rig moving the camera between `from` and `to`
    ///
    /// # Arguments
    /// * `from` - Camera position at progress 0
    /// * `to` - Camera position at progress 1
    /// * `scrub_lag` - Damping time constant in seconds
    /// * `content_factor` - Virtual container height in viewport heights
    /// * `viewport_height` - Initial viewport height in pixels
    pub fn new(
        from: Vector3<f32>,
        to: Vector3<f32>,
        scrub_lag: f32,
        content_factor: f32,
        viewport_height: f32,
    ) -> Result<Self, TimelineError> {
        let timeline = ScrollTimeline::new(content_factor, viewport_height)?;

        Ok(Self {
            timeline,
            tween: Tween::new(from, to),
            scrub: Scrub::new(scrub_lag, 0.0),
        })
    }

    /// Feeds a wheel event into the timeline
    ///
    /// Scrolling down (negative winit delta) moves deeper into the
    /// container, matching page scroll direction.
    pub fn process_scroll(&mut self, delta: &MouseScrollDelta) {
        let pixels = match delta {
            MouseScrollDelta::LineDelta(_, lines) => lines * LINE_HEIGHT,
            MouseScrollDelta::PixelDelta(PhysicalPosition { y, .. }) => *y as f32,
        };
        self.timeline.scroll_by(-pixels);
    }

    /// Updates the timeline after a viewport resize
    pub fn set_viewport_height(&mut self, viewport_height: f32) {
        self.timeline.set_viewport_height(viewport_height);
    }

    /// Raw (undamped) scroll progress in [0, 1]
    pub fn progress(&self) -> f32 {
        self.timeline.progress()
    }

    /// Undamped camera position for the current scroll offset
    pub fn target_position(&self) -> Vector3<f32> {
        self.tween.at(self.timeline.progress())
    }

    /// Advances the scrub and returns the camera position to write
    ///
    /// Returns `None` once the damped progress has settled on the raw
    /// progress; the camera is left alone until the user scrolls again.
    pub fn advance(&mut self, dt: Duration) -> Option<Vector3<f32>> {
        let target = self.timeline.progress();
        if self.scrub.settled(target) {
            return None;
        }

        let smoothed = self.scrub.advance(target, dt.as_secs_f32());
        Some(self.tween.at(smoothed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::vec3;

    fn rig() -> ScrollCameraRig {
        ScrollCameraRig::new(
            vec3(34.0, 16.0, -20.0),
            vec3(-30.0, 20.0, -40.0),
            0.5,
            2.0,
            1080.0,
        )
        .unwrap()
    }

    #[test]
    fn test_idle_rig_reports_settled() {
        let mut rig = rig();
        assert_eq!(rig.advance(Duration::from_millis(16)), None);
        assert_eq!(rig.target_position(), vec3(34.0, 16.0, -20.0));
    }

    #[test]
    fn test_wheel_down_advances_progress() {
        let mut rig = rig();
        rig.process_scroll(&MouseScrollDelta::LineDelta(0.0, -3.0));
        assert!(rig.progress() > 0.0);
    }

    #[test]
    fn test_converges_to_target_at_full_progress() {
        let mut rig = rig();
        rig.process_scroll(&MouseScrollDelta::PixelDelta(PhysicalPosition::new(
            0.0, -600.0,
        )));
        assert_eq!(rig.progress(), 1.0);

        let mut last = rig.target_position();
        for _ in 0..600 {
            if let Some(position) = rig.advance(Duration::from_millis(16)) {
                last = position;
            }
        }
        let target = vec3(-30.0, 20.0, -40.0);
        assert!((last - target).map(f32::abs).x < 0.05);
        assert!((last - target).map(f32::abs).y < 0.05);
        assert!((last - target).map(f32::abs).z < 0.05);
        // Settled rigs stop writing
        assert_eq!(rig.advance(Duration::from_millis(16)), None);
    }

    #[test]
    fn test_scrolling_up_reverses_the_rig() {
        let mut rig = rig();
        rig.process_scroll(&MouseScrollDelta::PixelDelta(PhysicalPosition::new(
            0.0, -540.0,
        )));
        rig.process_scroll(&MouseScrollDelta::PixelDelta(PhysicalPosition::new(
            0.0, 540.0,
        )));
        assert_eq!(rig.progress(), 0.0);
        assert_eq!(rig.target_position(), vec3(34.0, 16.0, -20.0));
    }
}
