//! # Asset Loading Module
//!
//! Asynchronous model loading. A load runs once, on a worker thread, and
//! reports back over a channel the app polls each frame; the render loop
//! never waits for it. Failures are a logged result, not a crash — the
//! scene keeps rendering without the model.

pub mod loader;

// Re-export main types
pub use loader::{AssetError, LoadedModel, ModelLoadTask};
