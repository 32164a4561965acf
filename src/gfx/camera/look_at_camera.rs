use super::camera_utils::{convert_matrix4_to_array, Camera, CameraUniform};
use cgmath::*;

#[rustfmt::skip]
pub const OPENGL_TO_WGPU_MATRIX: cgmath::Matrix4<f32> = cgmath::Matrix4::new(
    1.0, 0.0, 0.0, 0.0,
    0.0, 1.0, 0.0, 0.0,
    0.0, 0.0, 0.5, 0.5,
    0.0, 0.0, 0.0, 1.0,
);

/// A fixed look-at perspective camera
///
/// Unlike an orbit camera there is no spherical parameterization: the
/// position is written directly, by the scroll rig while animating and by
/// the debug panel when idle. The camera always faces `target`.
#[derive(Debug, Clone, Copy)]
pub struct LookAtCamera {
    pub position: Vector3<f32>,
    pub target: Vector3<f32>,
    pub up: Vector3<f32>,
    pub aspect: f32,
    pub fovy: Rad<f32>,
    pub znear: f32,
    pub zfar: f32,
    pub uniform: CameraUniform,
}

impl Camera for LookAtCamera {
    fn build_view_projection_matrix(&self) -> Matrix4<f32> {
        let eye = Point3::from_vec(self.position);
        let target = Point3::from_vec(self.target);
        let view = Matrix4::look_at_rh(eye, target, self.up);
        let proj =
            OPENGL_TO_WGPU_MATRIX * perspective(self.fovy, self.aspect, self.znear, self.zfar);
        proj * view
    }
}

impl LookAtCamera {
    pub fn new(position: Vector3<f32>, target: Vector3<f32>, fovy: Deg<f32>, aspect: f32) -> Self {
        let mut camera = Self {
            position,
            target,
            up: Vector3::unit_y(),
            aspect,
            fovy: fovy.into(),
            znear: 0.1,
            zfar: 1000.0,
            uniform: CameraUniform::default(),
        };
        camera.update_view_proj();
        camera
    }

    /// Recomputes the cached uniform from the current position and projection
    pub fn update_view_proj(&mut self) {
        self.uniform.view_position = [self.position.x, self.position.y, self.position.z, 1.0];
        self.uniform.view_proj = convert_matrix4_to_array(self.build_view_projection_matrix());
    }

    /// Updates the aspect ratio after a surface resize
    ///
    /// Idempotent: repeated calls with the same dimensions leave the
    /// projection unchanged.
    pub fn resize_projection(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.aspect = width as f32 / height as f32;
        self.update_view_proj();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::vec3;

    fn camera() -> LookAtCamera {
        LookAtCamera::new(vec3(34.0, 16.0, -20.0), Vector3::zero(), Deg(75.0), 1.0)
    }

    #[test]
    fn test_resize_sets_aspect_from_dimensions() {
        let mut camera = camera();
        camera.resize_projection(1920, 1080);
        assert!((camera.aspect - 1920.0 / 1080.0).abs() < 1e-6);
    }

    #[test]
    fn test_resize_is_idempotent() {
        let mut camera = camera();
        camera.resize_projection(1920, 1080);
        let first = camera.uniform;
        camera.resize_projection(1920, 1080);
        assert_eq!(camera.uniform.view_proj, first.view_proj);
        assert_eq!(camera.uniform.view_position, first.view_position);
    }

    #[test]
    fn test_degenerate_resize_is_ignored() {
        let mut camera = camera();
        let before = camera.aspect;
        camera.resize_projection(0, 1080);
        camera.resize_projection(1920, 0);
        assert_eq!(camera.aspect, before);
    }

    #[test]
    fn test_uniform_tracks_position_writes() {
        let mut camera = camera();
        camera.position = vec3(-30.0, 20.0, -40.0);
        camera.update_view_proj();
        assert_eq!(camera.uniform.view_position, [-30.0, 20.0, -40.0, 1.0]);
    }

    #[test]
    fn test_view_projection_is_finite() {
        let camera = camera();
        for row in camera.uniform.view_proj {
            for value in row {
                assert!(value.is_finite());
            }
        }
    }
}
