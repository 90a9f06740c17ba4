use glam::{Quat, Vec3};

use super::config::GroundingConfig;
use crate::ground::GroundWorld;
use crate::math::Transform;

/// Per-foot solve output for one frame. When `valid` is false the foot
/// must keep its natural animated transform and the targets are just the
/// inputs passed through.
#[derive(Debug, Clone, Copy)]
pub struct FootSolveResult {
    pub target_position: Vec3,
    pub target_rotation: Quat,
    pub valid: bool,
}

impl FootSolveResult {
    /// Miss: foot falls back to its animated pose.
    pub fn miss(natural: &Transform) -> Self {
        Self {
            target_position: natural.position,
            target_rotation: natural.rotation,
            valid: false,
        }
    }
}

pub struct FootGroundSolver;

impl FootGroundSolver {
    /// Probes the ground beneath a foot's natural (animated) transform and
    /// computes where the foot should rest.
    ///
    /// The ray starts `height_from_ground` above the foot so a foot already
    /// slightly below the surface is still caught; a hit is lifted back up
    /// by the same amount. The target rotation keeps the foot's animated
    /// heading and replaces its pitch/roll with the tilt that aligns the
    /// foot's up axis to the ground normal (tilt applied after yaw).
    pub fn solve(
        natural: &Transform,
        config: &GroundingConfig,
        world: &GroundWorld,
    ) -> FootSolveResult {
        let range = config.probe_range();
        if range <= 0.0 {
            return FootSolveResult::miss(natural);
        }

        let origin = natural.position + Vec3::Y * config.height_from_ground;
        let hit = match world.probe_down(origin, range, config.ground_mask) {
            Some(hit) => hit,
            None => return FootSolveResult::miss(natural),
        };

        let normal = hit.normal.try_normalize().unwrap_or(Vec3::Y);
        let tilt = Quat::from_rotation_arc(Vec3::Y, normal);

        FootSolveResult {
            target_position: hit.point + Vec3::Y * config.height_from_ground,
            target_rotation: tilt * natural.yaw_rotation(),
            valid: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ground::{GroundLayer, Heightfield, PlaneGround};
    use approx::assert_relative_eq;

    fn flat_world(height: f32) -> GroundWorld {
        let mut world = GroundWorld::new();
        world.add_plane(height);
        world
    }

    #[test]
    fn hit_lifts_target_by_probe_height() {
        let config = GroundingConfig::default().with_height_from_ground(1.0);
        let world = flat_world(0.0);
        let natural = Transform::from_position(Vec3::new(0.3, 1.0, -0.2));

        let result = FootGroundSolver::solve(&natural, &config, &world);

        assert!(result.valid);
        assert_relative_eq!(result.target_position.y, 1.0, epsilon = 1e-5);
        assert_relative_eq!(result.target_position.x, 0.3, epsilon = 1e-5);
        assert_relative_eq!(result.target_position.z, -0.2, epsilon = 1e-5);
    }

    #[test]
    fn no_ground_in_range_is_invalid() {
        let config = GroundingConfig::default()
            .with_height_from_ground(0.5)
            .with_raycast_down_distance(0.5);
        let world = flat_world(-10.0);
        let natural = Transform::from_position(Vec3::new(0.0, 1.0, 0.0));

        let result = FootGroundSolver::solve(&natural, &config, &world);

        assert!(!result.valid);
        assert_eq!(result.target_position, natural.position);
        assert_eq!(result.target_rotation, natural.rotation);
    }

    #[test]
    fn solve_is_idempotent() {
        let config = GroundingConfig::default();
        let world = flat_world(0.2);
        let natural = Transform::new(
            Vec3::new(1.0, 0.8, 2.0),
            Quat::from_rotation_y(0.4),
        );

        let a = FootGroundSolver::solve(&natural, &config, &world);
        let b = FootGroundSolver::solve(&natural, &config, &world);

        assert_eq!(a.valid, b.valid);
        assert_eq!(a.target_position, b.target_position);
        assert_eq!(a.target_rotation, b.target_rotation);
    }

    #[test]
    fn flat_ground_keeps_heading_and_levels_foot() {
        let config = GroundingConfig::default().with_height_from_ground(1.0);
        let world = flat_world(0.0);
        // Animated foot is pitched mid-stride; heading 0.6 rad.
        let natural = Transform::new(
            Vec3::new(0.0, 0.5, 0.0),
            Quat::from_rotation_y(0.6) * Quat::from_rotation_x(0.3),
        );

        let result = FootGroundSolver::solve(&natural, &config, &world);

        assert!(result.valid);
        // Tilt on flat ground is identity, so only the yaw survives.
        let expected = Quat::from_rotation_y(0.6);
        assert!(result.target_rotation.dot(expected).abs() > 0.9999);
    }

    #[test]
    fn sloped_ground_tilts_foot_up_axis_to_normal() {
        let config = GroundingConfig::default().with_height_from_ground(1.0);
        let mut world = GroundWorld::new();
        // 0.25 rise per unit along +x.
        world.add(
            GroundLayer::DEFAULT,
            Heightfield::from_fn(-10.0, -10.0, 1.0, 21, 21, |x, _| 0.25 * x),
        );
        let natural = Transform::from_position(Vec3::new(0.0, 0.5, 0.0));

        let result = FootGroundSolver::solve(&natural, &config, &world);
        assert!(result.valid);

        let foot_up = result.target_rotation * Vec3::Y;
        let expected_normal = Vec3::new(-0.25, 1.0, 0.0).normalize();
        assert_relative_eq!(foot_up.dot(expected_normal), 1.0, epsilon = 1e-3);
    }

    #[test]
    fn degenerate_probe_range_is_a_miss() {
        let mut config = GroundingConfig::default();
        // Bypass the clamping setters to simulate a corrupted config.
        config.height_from_ground = -2.0;
        config.raycast_down_distance = 1.0;
        let world = flat_world(0.0);
        let natural = Transform::from_position(Vec3::new(0.0, 0.5, 0.0));

        let result = FootGroundSolver::solve(&natural, &config, &world);
        assert!(!result.valid);
    }

    #[test]
    fn foot_slightly_below_surface_is_still_caught() {
        let config = GroundingConfig::default()
            .with_height_from_ground(1.0)
            .with_raycast_down_distance(0.5);
        let world = flat_world(0.0);
        // Animated foot clipped 5cm into the ground.
        let natural = Transform::from_position(Vec3::new(0.0, -0.05, 0.0));

        let result = FootGroundSolver::solve(&natural, &config, &world);
        assert!(result.valid);
        assert_relative_eq!(result.target_position.y, 1.0, epsilon = 1e-5);
    }

    #[test]
    fn ground_mask_filters_surfaces() {
        let config = GroundingConfig::default().with_ground_mask(GroundLayer::bit(5));
        let mut world = GroundWorld::new();
        world.add(GroundLayer::bit(0), PlaneGround::new(0.0));
        let natural = Transform::from_position(Vec3::new(0.0, 0.5, 0.0));

        let result = FootGroundSolver::solve(&natural, &config, &world);
        assert!(!result.valid);
    }
}
