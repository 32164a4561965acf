//! # Rendering Module
//!
//! The forward rendering pipeline: surface management, depth buffer, and
//! the per-frame draw pass.

pub mod render_engine;

// Re-export main types
pub use render_engine::RenderEngine;
