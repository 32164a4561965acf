//! Linear tween and damped-follow scrub
//!
//! The tween maps progress straight onto the segment between two positions
//! with no easing curve. The scrub lags the displayed progress behind the
//! raw scroll sample so abrupt wheel input does not snap the camera.

use cgmath::Vector3;

/// Linear interpolation between two positions
///
/// `at(0.0)` returns the start, `at(1.0)` the end; inputs outside [0, 1]
/// are clamped so overshooting scroll samples cannot push the camera off
/// the interpolation path.
#[derive(Debug, Clone, Copy)]
pub struct Tween {
    from: Vector3<f32>,
    to: Vector3<f32>,
}

impl Tween {
    pub fn new(from: Vector3<f32>, to: Vector3<f32>) -> Self {
        Self { from, to }
    }

    /// Position on the segment at `progress`
    pub fn at(&self, progress: f32) -> Vector3<f32> {
        let t = progress.clamp(0.0, 1.0);
        self.from + (self.to - self.from) * t
    }

    pub fn start(&self) -> Vector3<f32> {
        self.from
    }

    pub fn end(&self) -> Vector3<f32> {
        self.to
    }
}

/// Damped follow of a scalar target
///
/// The held value approaches the target asymptotically with time constant
/// `lag` (seconds): `value += (target - value) * (1 - e^(-dt/lag))`. The
/// step factor is always in (0, 1], so the value moves toward the target
/// monotonically and never overshoots. A non-positive lag degenerates to an
/// instantaneous jump.
#[derive(Debug, Clone, Copy)]
pub struct Scrub {
    lag: f32,
    value: f32,
}

impl Scrub {
    pub fn new(lag: f32, initial: f32) -> Self {
        Self { lag, value: initial }
    }

    /// Current smoothed value
    pub fn value(&self) -> f32 {
        self.value
    }

    /// Advances the smoothed value toward `target` over `dt` seconds
    pub fn advance(&mut self, target: f32, dt: f32) -> f32 {
        if self.lag <= 0.0 || dt <= 0.0 {
            if self.lag <= 0.0 {
                self.value = target;
            }
            return self.value;
        }

        let step = 1.0 - (-dt / self.lag).exp();
        self.value += (target - self.value) * step;
        self.value
    }

    /// Whether the smoothed value has effectively caught up with `target`
    pub fn settled(&self, target: f32) -> bool {
        (self.value - target).abs() < 1e-4
    }

    /// Snaps the smoothed value straight to `target`
    pub fn jump_to(&mut self, target: f32) {
        self.value = target;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::vec3;

    fn camera_tween() -> Tween {
        Tween::new(vec3(34.0, 16.0, -20.0), vec3(-30.0, 20.0, -40.0))
    }

    #[test]
    fn test_tween_endpoints() {
        let tween = camera_tween();
        assert_eq!(tween.at(0.0), vec3(34.0, 16.0, -20.0));
        assert_eq!(tween.at(1.0), vec3(-30.0, 20.0, -40.0));
    }

    #[test]
    fn test_tween_midpoint_is_linear() {
        let tween = camera_tween();
        let mid = tween.at(0.5);
        assert_eq!(mid, vec3(2.0, 18.0, -30.0));
    }

    #[test]
    fn test_tween_clamps_out_of_range_progress() {
        let tween = camera_tween();
        assert_eq!(tween.at(-0.5), tween.at(0.0));
        assert_eq!(tween.at(1.5), tween.at(1.0));
    }

    #[test]
    fn test_scrub_monotonically_approaches_target() {
        let mut scrub = Scrub::new(0.5, 0.0);
        let mut previous = scrub.value();
        for _ in 0..400 {
            let value = scrub.advance(1.0, 1.0 / 60.0);
            assert!(value >= previous);
            assert!(value <= 1.0);
            previous = value;
        }
        assert!(scrub.settled(1.0));
    }

    #[test]
    fn test_scrub_never_overshoots_in_either_direction() {
        let mut scrub = Scrub::new(0.5, 1.0);
        for _ in 0..200 {
            let value = scrub.advance(0.25, 1.0 / 30.0);
            assert!(value >= 0.25);
        }
        assert!(scrub.settled(0.25));
    }

    #[test]
    fn test_zero_lag_jumps_immediately() {
        let mut scrub = Scrub::new(0.0, 0.0);
        assert_eq!(scrub.advance(0.8, 1.0 / 60.0), 0.8);
    }

    #[test]
    fn test_zero_dt_leaves_value_unchanged() {
        let mut scrub = Scrub::new(0.5, 0.3);
        assert_eq!(scrub.advance(1.0, 0.0), 0.3);
    }
}
