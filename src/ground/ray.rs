use glam::Vec3;

#[derive(Debug, Clone, Copy)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
    pub t_min: f32,
    pub t_max: f32,
}

impl Ray {
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize(),
            t_min: 0.0001,
            t_max: f32::MAX,
        }
    }

    pub fn with_range(origin: Vec3, direction: Vec3, t_min: f32, t_max: f32) -> Self {
        Self {
            origin,
            direction: direction.normalize(),
            t_min,
            t_max,
        }
    }

    /// Vertical probe ray: straight down from `origin` for up to `max_distance`.
    pub fn down(origin: Vec3, max_distance: f32) -> Self {
        Self {
            origin,
            direction: Vec3::NEG_Y,
            t_min: 0.0,
            t_max: max_distance,
        }
    }

    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}

/// Ground intersection produced by a probe. A miss is `None` at the call
/// site, so point and normal are always meaningful here.
#[derive(Debug, Clone, Copy)]
pub struct GroundHit {
    pub t: f32,
    pub point: Vec3,
    /// Unit surface normal, world space.
    pub normal: Vec3,
}
