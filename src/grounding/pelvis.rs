use glam::Vec3;

use super::config::GroundingConfig;
use super::solver::FootSolveResult;

/// Smoothly drives the pelvis height toward the lower of the two solved
/// foot heights, so the body follows a foot that has stepped into a
/// depression instead of floating above it.
#[derive(Debug, Clone, Copy, Default)]
pub struct PelvisHeightAdjuster {
    last_height: Option<f32>,
}

impl PelvisHeightAdjuster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears the interpolation anchor. Called on the airborne-to-grounded
    /// transition, where the previous anchor is stale.
    pub fn reset(&mut self) {
        self.last_height = None;
    }

    /// Returns the corrected pelvis position for this frame.
    ///
    /// Until both feet have valid ground data (and on any frame where one
    /// loses it), the anchor is re-seated at the animated pelvis height and
    /// the pelvis passes through unmodified.
    pub fn adjust(
        &mut self,
        left: &FootSolveResult,
        right: &FootSolveResult,
        pelvis: Vec3,
        config: &GroundingConfig,
    ) -> Vec3 {
        let anchor = match self.last_height {
            Some(height) if left.valid && right.valid => height,
            _ => {
                self.last_height = Some(pelvis.y);
                return pelvis;
            }
        };

        let lowest_foot = left.target_position.y.min(right.target_position.y);
        let offset = lowest_foot - pelvis.y + config.pelvis_offset;
        let target = pelvis.y + offset;

        let new_height = anchor + (target - anchor) * config.pelvis_up_down_speed;
        self.last_height = Some(new_height);

        Vec3::new(pelvis.x, new_height, pelvis.z)
    }
}
