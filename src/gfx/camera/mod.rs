pub mod camera_utils;
pub mod look_at_camera;

// Re-export main types
pub use camera_utils::CameraUniform;
pub use look_at_camera::LookAtCamera;
