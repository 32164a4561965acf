//! Scene lighting
//!
//! Two static lights: an ambient fill and a directional "sun". Both are
//! read every frame when the global uniform buffer is rebuilt, and both can
//! be overridden live from the debug panel.

use cgmath::{InnerSpace, Vector3, Zero};

/// Uniform fill light with no direction
#[derive(Debug, Clone, Copy)]
pub struct AmbientLight {
    pub color: [f32; 3],
    pub intensity: f32,
}

impl Default for AmbientLight {
    fn default() -> Self {
        // #a0a0fc at 0.82
        Self {
            color: [0.627, 0.627, 0.988],
            intensity: 0.82,
        }
    }
}

/// Directional light shining from `position` toward the scene origin
#[derive(Debug, Clone, Copy)]
pub struct DirectionalLight {
    pub color: [f32; 3],
    pub intensity: f32,
    pub position: Vector3<f32>,
}

impl Default for DirectionalLight {
    fn default() -> Self {
        // #e8c37b at 1.96
        Self {
            color: [0.910, 0.765, 0.482],
            intensity: 1.96,
            position: Vector3::new(-69.0, 44.0, 14.0),
        }
    }
}

impl DirectionalLight {
    /// Unit vector pointing from the light toward the origin
    pub fn direction(&self) -> Vector3<f32> {
        if self.position.is_zero() {
            return -Vector3::unit_y();
        }
        -self.position.normalize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_is_unit_length() {
        let light = DirectionalLight::default();
        assert!((light.direction().magnitude() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_direction_points_at_origin() {
        let light = DirectionalLight {
            position: Vector3::new(0.0, 10.0, 0.0),
            ..Default::default()
        };
        let direction = light.direction();
        assert!((direction - Vector3::new(0.0, -1.0, 0.0)).magnitude() < 1e-6);
    }

    #[test]
    fn test_degenerate_position_falls_back_to_down() {
        let light = DirectionalLight {
            position: Vector3::zero(),
            ..Default::default()
        };
        assert_eq!(light.direction(), -Vector3::unit_y());
    }
}
