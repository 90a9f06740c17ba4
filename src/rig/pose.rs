use super::joint::JointId;
use crate::math::Transform;

/// Read access to the animated pose for the current frame.
///
/// Implemented by whatever owns the evaluated skeleton. The grounding layer
/// reads natural joint transforms through this before writing any override
/// (read-before-write, once per frame).
pub trait PoseSource {
    fn joint_world(&self, joint: JointId) -> Transform;
}

/// Write access for per-joint overrides, applied after animation evaluation
/// and before the frame is presented.
pub trait PoseSink {
    fn write_joint(&mut self, joint: JointId, transform: Transform);
}

/// A plain in-memory pose, keyed by [`JointId`].
///
/// Implements both capability traits, so it can stand in for the host
/// engine's pose in tests and demos.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Pose {
    joints: [Transform; JointId::ALL.len()],
}

impl Pose {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn joint(&self, joint: JointId) -> Transform {
        self.joints[joint.index()]
    }

    pub fn set_joint(&mut self, joint: JointId, transform: Transform) {
        self.joints[joint.index()] = transform;
    }
}

impl PoseSource for Pose {
    fn joint_world(&self, joint: JointId) -> Transform {
        self.joint(joint)
    }
}

impl PoseSink for Pose {
    fn write_joint(&mut self, joint: JointId, transform: Transform) {
        self.set_joint(joint, transform);
    }
}
