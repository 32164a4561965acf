//! Live scene overrides
//!
//! The debug panel edits a [`SceneSettings`] value rather than reaching into
//! the scene directly; the app applies the store to the scene once per frame.
//! This keeps the panel decoupled from scene internals and gives every
//! override a single, ordered write point.

use crate::gfx::scene::scene::Scene;

/// Mutable copy of everything the debug panel can override
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneSettings {
    pub sun_color: [f32; 3],
    pub sun_intensity: f32,
    pub sun_position: [f32; 3],
    pub ambient_color: [f32; 3],
    pub ambient_intensity: f32,
    pub background: [f32; 3],
    pub camera_position: [f32; 3],
    /// When set, the camera position is logged each frame
    pub trace_camera: bool,
}

impl SceneSettings {
    /// Snapshots the current scene state into a settings store
    pub fn from_scene(scene: &Scene) -> Self {
        Self {
            sun_color: scene.sun.color,
            sun_intensity: scene.sun.intensity,
            sun_position: scene.sun.position.into(),
            ambient_color: scene.ambient.color,
            ambient_intensity: scene.ambient.intensity,
            background: scene.background,
            camera_position: scene.camera.position.into(),
            trace_camera: false,
        }
    }

    /// Keeps the stored camera position in sync while the rig is animating
    ///
    /// Without this, opening the panel mid-scroll would snap the camera back
    /// to wherever the store last saw it.
    pub fn track_camera(&mut self, position: [f32; 3]) {
        self.camera_position = position;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_matches_scene_defaults() {
        let scene = Scene::new(1.0);
        let settings = SceneSettings::from_scene(&scene);

        assert_eq!(settings.camera_position, [34.0, 16.0, -20.0]);
        assert_eq!(settings.sun_position, [-69.0, 44.0, 14.0]);
        assert_eq!(settings.ambient_intensity, 0.82);
        assert_eq!(settings.background, [0.784, 0.941, 0.976]);
        assert!(!settings.trace_camera);
    }

    #[test]
    fn test_apply_roundtrip_is_lossless() {
        let mut scene = Scene::new(1.0);
        let mut settings = SceneSettings::from_scene(&scene);
        settings.sun_intensity = 5.0;
        settings.camera_position = [1.0, 2.0, 3.0];
        settings.background = [0.0, 0.0, 0.0];

        scene.apply_settings(&settings);

        assert_eq!(scene.sun.intensity, 5.0);
        assert_eq!(scene.background, [0.0, 0.0, 0.0]);
        let snapshot = SceneSettings::from_scene(&scene);
        assert_eq!(snapshot.camera_position, [1.0, 2.0, 3.0]);
    }
}
