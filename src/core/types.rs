use std::fmt;

use serde::{Deserialize, Serialize};

/// Integer pixel position on the displayed chart image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PixelPoint {
    pub x: i32,
    pub y: i32,
}

impl PixelPoint {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Chebyshev distance, the metric used by square marker hit boxes.
    #[must_use]
    pub fn chebyshev_distance(self, other: Self) -> u32 {
        self.x.abs_diff(other.x).max(self.y.abs_diff(other.y))
    }
}

impl fmt::Display for PixelPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Live world position as reported by an external position provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorldPosition {
    pub x: i32,
    pub y: i32,
    pub z: i32,
    pub facet: i32,
}

impl WorldPosition {
    #[must_use]
    pub const fn new(x: i32, y: i32, z: i32, facet: i32) -> Self {
        Self { x, y, z, facet }
    }
}
