use crate::math::Transform;
use crate::rig::{Foot, PoseSource};

/// Caches both feet's animated world transforms for the current frame.
///
/// Capture must happen before any override is written for the frame, so the
/// solver always sees the pure animation-driven pose.
#[derive(Debug, Clone, Copy, Default)]
pub struct FootTargetTracker {
    feet: [Transform; 2],
}

impl FootTargetTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn capture(&mut self, pose: &impl PoseSource) {
        for foot in Foot::BOTH {
            self.feet[foot.index()] = pose.joint_world(foot.joint());
        }
    }

    /// The foot's natural (pre-correction) transform from the last capture.
    pub fn natural(&self, foot: Foot) -> Transform {
        self.feet[foot.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rig::{JointId, Pose};
    use glam::Vec3;

    #[test]
    fn capture_reads_both_feet() {
        let mut pose = Pose::new();
        pose.set_joint(
            JointId::LeftFoot,
            Transform::from_position(Vec3::new(-0.2, 0.1, 0.0)),
        );
        pose.set_joint(
            JointId::RightFoot,
            Transform::from_position(Vec3::new(0.2, 0.3, 0.1)),
        );

        let mut tracker = FootTargetTracker::new();
        tracker.capture(&pose);

        assert_eq!(tracker.natural(Foot::Left).position.x, -0.2);
        assert_eq!(tracker.natural(Foot::Right).position.y, 0.3);
    }

    #[test]
    fn capture_is_a_snapshot() {
        let mut pose = Pose::new();
        pose.set_joint(
            JointId::LeftFoot,
            Transform::from_position(Vec3::new(0.0, 0.5, 0.0)),
        );

        let mut tracker = FootTargetTracker::new();
        tracker.capture(&pose);

        // Later writes to the pose must not leak into the snapshot.
        pose.set_joint(
            JointId::LeftFoot,
            Transform::from_position(Vec3::new(0.0, 9.0, 0.0)),
        );
        assert_eq!(tracker.natural(Foot::Left).position.y, 0.5);
    }
}
