// src/lib.rs
//! Vista scene viewer
//!
//! A scroll-driven 3D scene viewer built on wgpu and winit. Mouse-wheel
//! input scrolls a virtual container; a damped animation rig maps scroll
//! progress onto the camera position while the scene renders every frame.

pub mod animation;
pub mod app;
pub mod assets;
pub mod gfx;
pub mod ui;
pub mod wgpu_utils;

// Re-export main types for convenience
pub use app::VistaApp;

/// Creates a default Vista application instance
pub fn default() -> anyhow::Result<VistaApp> {
    VistaApp::new()
}
