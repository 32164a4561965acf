//! # Scene Management Module
//!
//! Scene state for the Vista viewer: the camera, the two lights, the loaded
//! model objects, and the settings store the debug panel edits.
//!
//! ## Key Components
//!
//! - [`Scene`] - The main scene container that owns camera, lights, objects and materials
//! - [`Object`] - Individual 3D objects with meshes and transforms
//! - [`Vertex3D`] - 3D vertex data structure with position and normal
//! - [`SceneSettings`] - Live override store applied to the scene once per frame
//!
//! Objects enter the scene exactly once, when the asynchronous model load
//! completes; nothing is ever removed.

pub mod lighting;
pub mod object;
pub mod scene;
pub mod settings;
pub mod vertex;

// Re-export main types
pub use lighting::{AmbientLight, DirectionalLight};
pub use object::{DrawObject, Object};
pub use scene::Scene;
pub use settings::SceneSettings;
pub use vertex::Vertex3D;
