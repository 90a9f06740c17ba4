use super::applier::IkApplier;
use super::config::GroundingConfig;
use super::pelvis::PelvisHeightAdjuster;
use super::solver::{FootGroundSolver, FootSolveResult};
use super::tracker::FootTargetTracker;
use crate::ground::GroundWorld;
use crate::rig::{Foot, JointId, PoseSink, PoseSource};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GroundingState {
    Airborne,
    Grounded,
}

/// Per-character foot grounding pass.
///
/// Runs once per fixed simulation step, after animation evaluation and
/// before the pose is committed for rendering:
/// capture natural feet -> solve each foot against the ground -> adjust
/// pelvis -> commit pelvis, then feet. While airborne (or disabled) the
/// whole pass is a no-op and no probes are issued.
#[derive(Debug)]
pub struct FeetGrounder {
    config: GroundingConfig,
    tracker: FootTargetTracker,
    pelvis: PelvisHeightAdjuster,
    applier: IkApplier,
    state: GroundingState,
}

impl FeetGrounder {
    pub fn new(config: GroundingConfig) -> Self {
        Self {
            config,
            tracker: FootTargetTracker::new(),
            pelvis: PelvisHeightAdjuster::new(),
            applier: IkApplier::new(),
            state: GroundingState::Airborne,
        }
    }

    pub fn config(&self) -> &GroundingConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: GroundingConfig) {
        self.config = config;
    }

    /// Advances one fixed step. `grounded` comes from the caller's own
    /// ground check, not from the foot probes.
    pub fn step<P>(&mut self, pose: &mut P, world: &GroundWorld, grounded: bool)
    where
        P: PoseSource + PoseSink,
    {
        if !self.config.enabled {
            return;
        }

        if !grounded {
            if self.state == GroundingState::Grounded {
                log::debug!("feet ik: airborne, dropping interpolation anchors");
                self.pelvis.reset();
                self.applier.reset();
            }
            self.state = GroundingState::Airborne;
            return;
        }

        if self.state == GroundingState::Airborne {
            // Anchors from before takeoff are stale; re-seat them this step.
            log::debug!("feet ik: grounded, re-anchoring");
            self.pelvis.reset();
            self.applier.reset();
            self.state = GroundingState::Grounded;
        }

        // Natural pose must be read before any override lands.
        self.tracker.capture(pose);

        let left = self.solve_foot(Foot::Left, world);
        let right = self.solve_foot(Foot::Right, world);

        let pelvis_natural = pose.joint_world(JointId::Pelvis);
        let pelvis_position =
            self.pelvis
                .adjust(&left, &right, pelvis_natural.position, &self.config);

        // Pelvis first, so foot targets read consistently against it.
        self.applier.apply_pelvis(pose, &pelvis_natural, pelvis_position);

        let speed = self.config.foot_to_ik_speed;
        let left_natural = self.tracker.natural(Foot::Left);
        let right_natural = self.tracker.natural(Foot::Right);
        self.applier
            .apply_foot(pose, Foot::Left, &left_natural, &left, speed);
        self.applier
            .apply_foot(pose, Foot::Right, &right_natural, &right, speed);
    }

    fn solve_foot(&self, foot: Foot, world: &GroundWorld) -> FootSolveResult {
        FootGroundSolver::solve(&self.tracker.natural(foot), &self.config, world)
    }
}
