//! # User Interface Module
//!
//! Dear ImGui-based debug panel for the Vista viewer.
//!
//! ## Key Components
//!
//! - [`UiManager`] - ImGui integration with winit and wgpu: input capture,
//!   frame timing, and overlay rendering
//! - [`panel`] - The scene debug panel (lights, camera, background) that
//!   edits a [`SceneSettings`] store instead of the scene itself
//!
//! [`SceneSettings`]: crate::gfx::scene::SceneSettings

pub mod manager;
pub mod panel;

// Re-export main types
pub use manager::UiManager;
pub use panel::scene_panel;
