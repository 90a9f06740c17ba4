use glam::{Quat, Vec3};

/// World-space joint transform. Skeleton joints are rigid, so no scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Quat,
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform {
    pub const IDENTITY: Self = Self {
        position: Vec3::ZERO,
        rotation: Quat::IDENTITY,
    };

    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            ..Self::IDENTITY
        }
    }

    pub fn new(position: Vec3, rotation: Quat) -> Self {
        Self { position, rotation }
    }

    pub fn forward(&self) -> Vec3 {
        self.rotation * Vec3::NEG_Z
    }

    pub fn up(&self) -> Vec3 {
        self.rotation * Vec3::Y
    }

    pub fn right(&self) -> Vec3 {
        self.rotation * Vec3::X
    }

    /// Heading angle about world +Y, in radians.
    ///
    /// Taken from the forward axis projected onto the ground plane; falls
    /// back to the right axis when forward is near vertical.
    pub fn yaw(&self) -> f32 {
        let forward = self.forward();
        let flat = Vec3::new(forward.x, 0.0, forward.z);
        if flat.length_squared() > 0.0001 {
            (-flat.x).atan2(-flat.z)
        } else {
            let right = self.right();
            (-right.z).atan2(right.x)
        }
    }

    /// Heading-only rotation: the yaw component about world +Y with any
    /// pitch/roll stripped.
    pub fn yaw_rotation(&self) -> Quat {
        Quat::from_rotation_y(self.yaw())
    }

    pub fn lerp(&self, other: &Self, t: f32) -> Self {
        Self {
            position: self.position.lerp(other.position, t),
            rotation: self.rotation.slerp(other.rotation, t),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn identity_basis() {
        let t = Transform::IDENTITY;
        assert_relative_eq!(t.forward().z, -1.0);
        assert_relative_eq!(t.up().y, 1.0);
        assert_relative_eq!(t.right().x, 1.0);
    }

    #[test]
    fn yaw_roundtrip() {
        for angle in [0.0, 0.7, -1.2, FRAC_PI_2] {
            let t = Transform::new(Vec3::ZERO, Quat::from_rotation_y(angle));
            assert_relative_eq!(t.yaw(), angle, epsilon = 1e-5);
        }
    }

    #[test]
    fn yaw_ignores_pitch() {
        let rotation = Quat::from_rotation_y(0.9) * Quat::from_rotation_x(0.3);
        let t = Transform::new(Vec3::ZERO, rotation);
        assert_relative_eq!(t.yaw(), 0.9, epsilon = 1e-5);
    }

    #[test]
    fn yaw_vertical_forward_falls_back_to_right() {
        // Pitch the forward axis straight down; heading should survive.
        let rotation = Quat::from_rotation_y(0.5) * Quat::from_rotation_x(-FRAC_PI_2);
        let t = Transform::new(Vec3::ZERO, rotation);
        assert_relative_eq!(t.yaw(), 0.5, epsilon = 1e-4);
    }

    #[test]
    fn lerp_midpoint() {
        let a = Transform::from_position(Vec3::ZERO);
        let b = Transform::from_position(Vec3::new(2.0, 0.0, 0.0));
        let mid = a.lerp(&b, 0.5);
        assert_relative_eq!(mid.position.x, 1.0);
    }
}
