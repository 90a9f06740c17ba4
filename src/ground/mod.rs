//! Ground queries: probe rays, layered surfaces, and terrain shapes.

mod query;
mod ray;
mod terrain;
mod world;

pub use query::{GroundLayer, GroundQuery};
pub use ray::{GroundHit, Ray};
pub use terrain::{Heightfield, PlaneGround};
pub use world::GroundWorld;
