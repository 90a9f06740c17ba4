use std::fmt::Debug;
use std::ops::{BitAnd, BitOr};

use super::ray::{GroundHit, Ray};

/// Bitmask selecting which ground surfaces a probe may hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroundLayer(u32);

impl GroundLayer {
    pub const NONE: Self = Self(0);
    pub const ALL: Self = Self(u32::MAX);
    /// The layer surfaces land on when no layer is given explicitly.
    pub const DEFAULT: Self = Self(1);

    pub fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    /// Single-bit layer. Indices wrap at 32.
    pub fn bit(index: u32) -> Self {
        Self(1 << (index & 31))
    }

    pub fn bits(self) -> u32 {
        self.0
    }

    pub fn intersects(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }
}

impl Default for GroundLayer {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl BitOr for GroundLayer {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitAnd for GroundLayer {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

/// A walkable surface that answers ray queries.
///
/// The grounding core never owns the physics world; it is handed one of
/// these (usually via [`GroundWorld`](super::GroundWorld)) and issues
/// synchronous queries against the current step's snapshot.
pub trait GroundQuery: Send + Sync + Debug {
    fn cast_ray(&self, ray: &Ray) -> Option<GroundHit>;
    fn clone_box(&self) -> Box<dyn GroundQuery>;
}

impl Clone for Box<dyn GroundQuery> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layer_masking() {
        let walkable = GroundLayer::bit(0);
        let water = GroundLayer::bit(3);

        assert!(walkable.intersects(GroundLayer::ALL));
        assert!(!walkable.intersects(water));
        assert!((walkable | water).intersects(water));
        assert!(!GroundLayer::NONE.intersects(GroundLayer::ALL));
    }

    #[test]
    fn default_layer_is_bit_zero() {
        assert_eq!(GroundLayer::default(), GroundLayer::bit(0));
    }
}
