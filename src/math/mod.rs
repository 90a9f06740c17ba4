//! Math utilities module
//!
//! Provides convenient re-exports from glam and the joint transform type.

mod transform;

pub use transform::Transform;

// Re-export commonly used glam types
pub use glam::{Quat, Vec3};
