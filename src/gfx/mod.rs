//! # Graphics Module
//!
//! All graphics-related functionality for the Vista viewer: the look-at
//! camera, the forward rendering pipeline, scene management, and GPU
//! resource handling.
//!
//! ## Architecture Overview
//!
//! - **Camera** ([`camera`]) - Fixed look-at perspective camera written by the scroll rig
//! - **Rendering** ([`rendering`]) - Single forward pass with ambient + directional shading
//! - **Scene** ([`scene`]) - Camera, lights, loaded objects, settings store
//! - **Resources** ([`resources`]) - Uniform buffers, materials, depth texture

pub mod camera;
pub mod rendering;
pub mod resources;
pub mod scene;

// Re-export commonly used types
pub use camera::look_at_camera::LookAtCamera;
pub use rendering::render_engine::RenderEngine;
