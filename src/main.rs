use glam::{Quat, Vec3};
use ik_grounder::ground::{GroundLayer, GroundWorld, Heightfield};
use ik_grounder::grounding::{FeetGrounder, GroundingConfig};
use ik_grounder::math::Transform;
use ik_grounder::rig::{JointId, Pose};
use std::f32::consts::{FRAC_PI_2, TAU};

const FIXED_STEP: f32 = 1.0 / 50.0;
const WALK_SPEED: f32 = 1.2;
const STRIDE_HZ: f32 = 1.4;

/// Synthetic root-motion walk along +x: pelvis bobs slightly, feet lift
/// alternately. Stands in for the host engine's evaluated animation.
fn animate(pose: &mut Pose, t: f32) {
    let x = WALK_SPEED * t;
    let heading = Quat::from_rotation_y(-FRAC_PI_2);
    let phase = TAU * STRIDE_HZ * t;

    let pelvis_y = 0.95 + 0.02 * (2.0 * phase).sin();
    pose.set_joint(
        JointId::Pelvis,
        Transform::new(Vec3::new(x, pelvis_y, 0.0), heading),
    );

    let left_lift = 0.12 * phase.sin().max(0.0);
    let right_lift = 0.12 * (-phase.sin()).max(0.0);
    pose.set_joint(
        JointId::LeftFoot,
        Transform::new(Vec3::new(x, 0.08 + left_lift, -0.15), heading),
    );
    pose.set_joint(
        JointId::RightFoot,
        Transform::new(Vec3::new(x, 0.08 + right_lift, 0.15), heading),
    );
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Gently rolling terrain under the walk path.
    let mut world = GroundWorld::new();
    world.add(
        GroundLayer::DEFAULT,
        Heightfield::from_fn(-2.0, -2.0, 0.25, 100, 17, |x, z| {
            0.15 * (0.8 * x).sin() + 0.05 * (1.3 * z).cos()
        }),
    );

    let config = GroundingConfig::default()
        .with_height_from_ground(0.1)
        .with_raycast_down_distance(0.6);
    let mut grounder = FeetGrounder::new(config);
    let mut pose = Pose::new();

    for frame in 0..500u32 {
        let t = frame as f32 * FIXED_STEP;
        animate(&mut pose, t);
        let natural_pelvis = pose.joint(JointId::Pelvis).position.y;
        let natural_left = pose.joint(JointId::LeftFoot).position.y;

        // Short hop between 4s and 4.4s.
        let grounded = !(4.0..4.4).contains(&t);
        grounder.step(&mut pose, &world, grounded);

        if frame % 25 == 0 {
            let pelvis = pose.joint(JointId::Pelvis).position;
            let left = pose.joint(JointId::LeftFoot).position;
            log::info!(
                "t={:5.2}s {} pelvis {:.3} (anim {:.3})  left foot {:.3} (anim {:.3})",
                t,
                if grounded { "grounded" } else { "airborne" },
                pelvis.y,
                natural_pelvis,
                left.y,
                natural_left,
            );
        }
    }
}
