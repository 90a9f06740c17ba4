use glam::Vec3;

use super::query::GroundQuery;
use super::ray::{GroundHit, Ray};

/// Infinite horizontal plane at a fixed height.
#[derive(Debug, Clone, Copy)]
pub struct PlaneGround {
    pub height: f32,
}

impl PlaneGround {
    pub fn new(height: f32) -> Self {
        Self { height }
    }
}

impl GroundQuery for PlaneGround {
    fn cast_ray(&self, ray: &Ray) -> Option<GroundHit> {
        if ray.direction.y.abs() < 0.0001 {
            return None;
        }

        let t = (self.height - ray.origin.y) / ray.direction.y;
        if t < ray.t_min || t > ray.t_max {
            return None;
        }

        let point = ray.at(t);
        Some(GroundHit {
            t,
            point: Vec3::new(point.x, self.height, point.z),
            normal: Vec3::Y,
        })
    }

    fn clone_box(&self) -> Box<dyn GroundQuery> {
        Box::new(*self)
    }
}

/// Regular grid of height samples over the XZ plane, bilinearly
/// interpolated. Rays falling outside the grid miss.
#[derive(Debug, Clone)]
pub struct Heightfield {
    min_x: f32,
    min_z: f32,
    cell_size: f32,
    columns: usize,
    rows: usize,
    heights: Vec<f32>,
}

impl Heightfield {
    /// `heights` is row-major, `rows` rows of `columns` samples each,
    /// rows running along +Z. Missing samples are padded with 0.0.
    pub fn new(
        min_x: f32,
        min_z: f32,
        cell_size: f32,
        columns: usize,
        rows: usize,
        mut heights: Vec<f32>,
    ) -> Self {
        let columns = columns.max(2);
        let rows = rows.max(2);
        heights.resize(columns * rows, 0.0);
        Self {
            min_x,
            min_z,
            cell_size: cell_size.max(0.0001),
            columns,
            rows,
            heights,
        }
    }

    pub fn from_fn(
        min_x: f32,
        min_z: f32,
        cell_size: f32,
        columns: usize,
        rows: usize,
        f: impl Fn(f32, f32) -> f32,
    ) -> Self {
        let columns = columns.max(2);
        let rows = rows.max(2);
        let cell_size = cell_size.max(0.0001);
        let mut heights = Vec::with_capacity(columns * rows);
        for row in 0..rows {
            for col in 0..columns {
                let x = min_x + col as f32 * cell_size;
                let z = min_z + row as f32 * cell_size;
                heights.push(f(x, z));
            }
        }
        Self {
            min_x,
            min_z,
            cell_size,
            columns,
            rows,
            heights,
        }
    }

    pub fn max_x(&self) -> f32 {
        self.min_x + (self.columns - 1) as f32 * self.cell_size
    }

    pub fn max_z(&self) -> f32 {
        self.min_z + (self.rows - 1) as f32 * self.cell_size
    }

    fn sample(&self, col: usize, row: usize) -> f32 {
        self.heights[row * self.columns + col]
    }

    /// Bilinear surface height at `(x, z)`, `None` outside the grid.
    pub fn height_at(&self, x: f32, z: f32) -> Option<f32> {
        let u = (x - self.min_x) / self.cell_size;
        let v = (z - self.min_z) / self.cell_size;
        if u < 0.0 || v < 0.0 || u > (self.columns - 1) as f32 || v > (self.rows - 1) as f32 {
            return None;
        }

        let col = (u.floor() as usize).min(self.columns - 2);
        let row = (v.floor() as usize).min(self.rows - 2);
        let fu = u - col as f32;
        let fv = v - row as f32;

        let h00 = self.sample(col, row);
        let h10 = self.sample(col + 1, row);
        let h01 = self.sample(col, row + 1);
        let h11 = self.sample(col + 1, row + 1);

        let h0 = h00 + (h10 - h00) * fu;
        let h1 = h01 + (h11 - h01) * fu;
        Some(h0 + (h1 - h0) * fv)
    }

    fn height_clamped(&self, x: f32, z: f32) -> f32 {
        let x = x.clamp(self.min_x, self.max_x());
        let z = z.clamp(self.min_z, self.max_z());
        self.height_at(x, z).unwrap_or(0.0)
    }

    /// Surface normal from central differences of the interpolated surface.
    pub fn normal_at(&self, x: f32, z: f32) -> Vec3 {
        let d = self.cell_size * 0.5;
        let dhdx = (self.height_clamped(x + d, z) - self.height_clamped(x - d, z)) / (2.0 * d);
        let dhdz = (self.height_clamped(x, z + d) - self.height_clamped(x, z - d)) / (2.0 * d);
        Vec3::new(-dhdx, 1.0, -dhdz).normalize()
    }
}

impl GroundQuery for Heightfield {
    fn cast_ray(&self, ray: &Ray) -> Option<GroundHit> {
        // Descending rays only; probes always point down.
        if ray.direction.y >= -0.0001 {
            return None;
        }

        // Fixed-point iteration on t. Exact for vertical rays after one
        // pass; slanted rays converge on smooth fields.
        let mut t = ray.t_min.max(0.0);
        for _ in 0..8 {
            let p = ray.at(t);
            let h = self.height_at(p.x, p.z)?;
            let next = (ray.origin.y - h) / -ray.direction.y;
            if (next - t).abs() < 0.0001 {
                t = next;
                break;
            }
            t = next;
        }

        if t < ray.t_min || t > ray.t_max {
            return None;
        }

        let p = ray.at(t);
        let h = self.height_at(p.x, p.z)?;
        if (p.y - h).abs() > 0.001 {
            return None;
        }

        Some(GroundHit {
            t,
            point: Vec3::new(p.x, h, p.z),
            normal: self.normal_at(p.x, p.z),
        })
    }

    fn clone_box(&self) -> Box<dyn GroundQuery> {
        Box::new(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn plane_hit_from_above() {
        let plane = PlaneGround::new(0.5);
        let ray = Ray::down(Vec3::new(2.0, 3.0, -1.0), 5.0);
        let hit = plane.cast_ray(&ray).unwrap();

        assert_relative_eq!(hit.t, 2.5);
        assert_relative_eq!(hit.point.y, 0.5);
        assert_relative_eq!(hit.point.x, 2.0);
        assert_eq!(hit.normal, Vec3::Y);
    }

    #[test]
    fn plane_out_of_range_misses() {
        let plane = PlaneGround::new(0.0);
        let ray = Ray::down(Vec3::new(0.0, 5.0, 0.0), 2.0);
        assert!(plane.cast_ray(&ray).is_none());
    }

    #[test]
    fn plane_ignores_horizontal_rays() {
        let plane = PlaneGround::new(0.0);
        let ray = Ray::new(Vec3::new(0.0, 1.0, 0.0), Vec3::X);
        assert!(plane.cast_ray(&ray).is_none());
    }

    #[test]
    fn heightfield_samples_bilinearly() {
        // Slope rising 1 unit per cell along x.
        let field = Heightfield::from_fn(0.0, 0.0, 1.0, 4, 4, |x, _| x);
        assert_relative_eq!(field.height_at(1.5, 0.5).unwrap(), 1.5, epsilon = 1e-5);
        assert!(field.height_at(-0.1, 0.0).is_none());
        assert!(field.height_at(0.0, 3.5).is_none());
    }

    #[test]
    fn heightfield_vertical_hit() {
        let field = Heightfield::from_fn(0.0, 0.0, 1.0, 8, 8, |x, _| 0.25 * x);
        let ray = Ray::down(Vec3::new(2.0, 3.0, 2.0), 5.0);
        let hit = field.cast_ray(&ray).unwrap();

        assert_relative_eq!(hit.point.y, 0.5, epsilon = 1e-4);
        // Normal tilts against the +x slope.
        assert!(hit.normal.x < 0.0);
        assert!(hit.normal.y > 0.9);
    }

    #[test]
    fn heightfield_misses_outside_grid() {
        let field = Heightfield::from_fn(0.0, 0.0, 1.0, 4, 4, |_, _| 0.0);
        let ray = Ray::down(Vec3::new(-2.0, 1.0, 0.0), 5.0);
        assert!(field.cast_ray(&ray).is_none());
    }

    #[test]
    fn heightfield_flat_normal_is_up() {
        let field = Heightfield::from_fn(0.0, 0.0, 1.0, 4, 4, |_, _| 0.3);
        let n = field.normal_at(1.5, 1.5);
        assert_relative_eq!(n.y, 1.0, epsilon = 1e-5);
    }
}
