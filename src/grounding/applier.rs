use glam::Vec3;

use super::solver::FootSolveResult;
use crate::math::Transform;
use crate::rig::{Foot, JointId, PoseSink};

/// Commits solved corrections to the pose sink, easing each foot's height
/// from its last committed value so corrections never snap.
#[derive(Debug, Clone, Copy, Default)]
pub struct IkApplier {
    foot_heights: [Option<f32>; 2],
}

impl IkApplier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drops both feet's interpolation anchors (airborne-to-grounded
    /// transition).
    pub fn reset(&mut self) {
        self.foot_heights = [None; 2];
    }

    /// Writes the corrected pelvis transform. Rotation stays animated;
    /// only the position (its height) is driven by the adjuster.
    pub fn apply_pelvis(&self, sink: &mut impl PoseSink, natural: &Transform, position: Vec3) {
        sink.write_joint(JointId::Pelvis, Transform::new(position, natural.rotation));
    }

    /// Eases the foot toward the solved target and writes it to the sink.
    /// Invalid results write nothing, so the natural animated pose stands.
    pub fn apply_foot(
        &mut self,
        sink: &mut impl PoseSink,
        foot: Foot,
        natural: &Transform,
        result: &FootSolveResult,
        speed: f32,
    ) {
        if !result.valid {
            return;
        }

        let anchor = self.foot_heights[foot.index()].unwrap_or(natural.position.y);
        let y = anchor + (result.target_position.y - anchor) * speed;
        self.foot_heights[foot.index()] = Some(y);

        // Only height and tilt are overridden; x/z stay animation-driven.
        let position = Vec3::new(natural.position.x, y, natural.position.z);
        sink.write_joint(
            foot.joint(),
            Transform::new(position, result.target_rotation),
        );
    }
}
