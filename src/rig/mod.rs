//! Skeleton-facing types: joint identifiers and the pose capability traits
//! the grounding layer is handed by the host.

mod joint;
mod pose;

pub use joint::{Foot, JointId};
pub use pose::{Pose, PoseSink, PoseSource};
