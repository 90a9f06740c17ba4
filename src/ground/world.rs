use glam::Vec3;

use super::query::{GroundLayer, GroundQuery};
use super::ray::{GroundHit, Ray};
use super::terrain::PlaneGround;

#[derive(Clone)]
struct Surface {
    layer: GroundLayer,
    shape: Box<dyn GroundQuery>,
}

/// Layered collection of walkable surfaces, queried per probe.
#[derive(Default, Clone)]
pub struct GroundWorld {
    surfaces: Vec<Surface>,
}

impl GroundWorld {
    pub fn new() -> Self {
        Self {
            surfaces: Vec::new(),
        }
    }

    pub fn add<G: GroundQuery + 'static>(&mut self, layer: GroundLayer, shape: G) {
        self.surfaces.push(Surface {
            layer,
            shape: Box::new(shape),
        });
    }

    pub fn add_plane(&mut self, height: f32) {
        self.add(GroundLayer::DEFAULT, PlaneGround::new(height));
    }

    pub fn clear(&mut self) {
        self.surfaces.clear();
    }

    pub fn surface_count(&self) -> usize {
        self.surfaces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.surfaces.is_empty()
    }

    /// Nearest hit among surfaces whose layer intersects `mask`.
    pub fn cast_ray(&self, ray: &Ray, mask: GroundLayer) -> Option<GroundHit> {
        let mut closest: Option<GroundHit> = None;

        for surface in &self.surfaces {
            if !surface.layer.intersects(mask) {
                continue;
            }
            if let Some(hit) = surface.shape.cast_ray(ray) {
                match &closest {
                    None => closest = Some(hit),
                    Some(prev) if hit.t < prev.t => closest = Some(hit),
                    _ => {}
                }
            }
        }

        closest
    }

    /// The ground probe: casts straight down from `origin` for up to
    /// `max_distance`. Non-positive distances are treated as a miss.
    pub fn probe_down(
        &self,
        origin: Vec3,
        max_distance: f32,
        mask: GroundLayer,
    ) -> Option<GroundHit> {
        if max_distance <= 0.0 {
            return None;
        }

        log::trace!(
            "ground probe: {:.3?} down {:.3} (mask {:#x})",
            origin,
            max_distance,
            mask.bits()
        );

        self.cast_ray(&Ray::down(origin, max_distance), mask)
    }
}

impl std::fmt::Debug for GroundWorld {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GroundWorld")
            .field("surface_count", &self.surfaces.len())
            .finish()
    }
}
