//! # ik-grounder
//!
//! Procedural foot-IK grounding for animated characters: given a root-motion
//! driven skeleton, adjusts foot and pelvis heights each fixed step so feet
//! contact uneven ground without corrupting the underlying animation.
//!
//! ## Features
//! - Two-point grounding: per-foot vertical offset and tilt, plus a shared
//!   pelvis height bias toward the lower foot
//! - Capability traits for the host seams: pose source/sink and layered
//!   ground ray queries
//! - Anchor-based interpolation so corrections never visibly snap
//! - Airborne/grounded state machine; zero probes while airborne
//!
//! ## Example
//! ```rust,ignore
//! use ik_grounder::ground::GroundWorld;
//! use ik_grounder::grounding::{FeetGrounder, GroundingConfig};
//! use ik_grounder::rig::Pose;
//!
//! let mut world = GroundWorld::new();
//! world.add_plane(0.0);
//!
//! let mut grounder = FeetGrounder::new(GroundingConfig::default());
//! let mut pose = Pose::new();
//!
//! // Each fixed step, after animation evaluation:
//! grounder.step(&mut pose, &world, /* grounded = */ true);
//! ```

pub mod ground;
pub mod grounding;
pub mod math;
pub mod rig;

pub use ground::{GroundHit, GroundLayer, GroundQuery, GroundWorld, Heightfield, PlaneGround, Ray};
pub use grounding::{
    ConfigError, FeetGrounder, FootGroundSolver, FootSolveResult, FootTargetTracker,
    GroundingConfig, IkApplier, PelvisHeightAdjuster,
};
pub use math::Transform;
pub use rig::{Foot, JointId, Pose, PoseSink, PoseSource};
