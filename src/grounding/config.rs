use thiserror::Error;

use crate::ground::GroundLayer;

/// Smallest probe start height accepted; a zero height would put the ray
/// origin inside the foot and make the hit math degenerate.
pub const MIN_PROBE_HEIGHT: f32 = 0.001;

const MAX_PROBE_HEIGHT: f32 = 2.0;
const MAX_DOWN_DISTANCE: f32 = 2.0;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("height_from_ground must be in ({MIN_PROBE_HEIGHT}, {MAX_PROBE_HEIGHT}], got {0}")]
    HeightFromGround(f32),
    #[error("raycast_down_distance must be in [0, {MAX_DOWN_DISTANCE}], got {0}")]
    RaycastDownDistance(f32),
    #[error("pelvis_up_down_speed must be in [0, 1], got {0}")]
    PelvisSpeed(f32),
    #[error("foot_to_ik_speed must be in [0, 1], got {0}")]
    FootSpeed(f32),
}

/// Tuning for the foot grounding pass. Set once at construction, not
/// per frame. Setters clamp into range; use [`validated`](Self::validated)
/// to reject out-of-range values instead.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GroundingConfig {
    pub enabled: bool,
    /// Probe ray starts this far above the foot; hits are lifted back up by
    /// the same amount so the sole sits on the surface.
    pub height_from_ground: f32,
    /// Extra probe reach below the foot.
    pub raycast_down_distance: f32,
    /// Constant vertical bias added to the pelvis correction.
    pub pelvis_offset: f32,
    /// Per-step lerp factor for the pelvis height.
    pub pelvis_up_down_speed: f32,
    /// Per-step lerp factor for each foot's height.
    pub foot_to_ik_speed: f32,
    pub ground_mask: GroundLayer,
}

impl Default for GroundingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            height_from_ground: 1.14,
            raycast_down_distance: 1.5,
            pelvis_offset: 0.0,
            pelvis_up_down_speed: 0.28,
            foot_to_ik_speed: 0.5,
            ground_mask: GroundLayer::ALL,
        }
    }
}

impl GroundingConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn with_height_from_ground(mut self, height: f32) -> Self {
        self.height_from_ground = height.clamp(MIN_PROBE_HEIGHT, MAX_PROBE_HEIGHT);
        self
    }

    pub fn with_raycast_down_distance(mut self, distance: f32) -> Self {
        self.raycast_down_distance = distance.clamp(0.0, MAX_DOWN_DISTANCE);
        self
    }

    pub fn with_pelvis_offset(mut self, offset: f32) -> Self {
        self.pelvis_offset = offset;
        self
    }

    pub fn with_pelvis_up_down_speed(mut self, speed: f32) -> Self {
        self.pelvis_up_down_speed = speed.clamp(0.0, 1.0);
        self
    }

    pub fn with_foot_to_ik_speed(mut self, speed: f32) -> Self {
        self.foot_to_ik_speed = speed.clamp(0.0, 1.0);
        self
    }

    pub fn with_ground_mask(mut self, mask: GroundLayer) -> Self {
        self.ground_mask = mask;
        self
    }

    /// Range-checks every field, consuming self. For callers that prefer a
    /// hard failure over silent clamping.
    pub fn validated(self) -> Result<Self, ConfigError> {
        if !(self.height_from_ground > 0.0 && self.height_from_ground <= MAX_PROBE_HEIGHT) {
            return Err(ConfigError::HeightFromGround(self.height_from_ground));
        }
        if !(0.0..=MAX_DOWN_DISTANCE).contains(&self.raycast_down_distance) {
            return Err(ConfigError::RaycastDownDistance(self.raycast_down_distance));
        }
        if !(0.0..=1.0).contains(&self.pelvis_up_down_speed) {
            return Err(ConfigError::PelvisSpeed(self.pelvis_up_down_speed));
        }
        if !(0.0..=1.0).contains(&self.foot_to_ik_speed) {
            return Err(ConfigError::FootSpeed(self.foot_to_ik_speed));
        }
        Ok(self)
    }

    /// Total probe length: reach below the foot plus the raised start.
    pub fn probe_range(&self) -> f32 {
        self.raycast_down_distance + self.height_from_ground
    }
}
