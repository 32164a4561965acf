//! # Animation Module
//!
//! Scroll-driven camera animation for the Vista viewer.
//!
//! The animation system has three layers:
//!
//! - **Scroll Timeline** ([`scroll_timeline`]) - Maps a scroll offset within a
//!   virtual container to a progress value in [0, 1]
//! - **Tween** ([`tween`]) - Linear interpolation between two camera positions,
//!   plus the damped-follow scrub that smooths raw scroll samples
//! - **Camera Rig** ([`camera_rig`]) - Composes timeline, tween and scrub and
//!   writes the camera position once per frame
//!
//! Progress is a pure function of the scroll offset: the same offset always
//! produces the same undamped camera position, in either scroll direction.

pub mod camera_rig;
pub mod scroll_timeline;
pub mod tween;

// Re-export main types
pub use camera_rig::ScrollCameraRig;
pub use scroll_timeline::{ScrollTimeline, TimelineError};
pub use tween::{Scrub, Tween};
