//! The foot grounding pass: per-frame solve, pelvis adjustment, and pose
//! application.

mod applier;
mod config;
mod grounder;
mod pelvis;
mod solver;
mod tracker;

pub use applier::IkApplier;
pub use config::{ConfigError, GroundingConfig, MIN_PROBE_HEIGHT};
pub use grounder::FeetGrounder;
pub use pelvis::PelvisHeightAdjuster;
pub use solver::{FootGroundSolver, FootSolveResult};
pub use tracker::FootTargetTracker;
