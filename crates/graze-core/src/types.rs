//! Shared type definitions for the simulation.

use serde::{Deserialize, Serialize};

/// Actor species
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Species {
    Sheep,
    Wolf,
}

/// Per-species behavior constants, shared immutably by every actor of the
/// species instead of living in type-level mutable state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpeciesParams {
    /// Energy gained per meal
    pub gain: f64,
    /// Reproduction probability per tick
    pub born_rate: f64,
    /// Maximum step length per tick
    pub speed: f64,
}

/// Integer cell coordinates on the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridPos {
    pub x: i32,
    pub y: i32,
}

impl GridPos {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Apply toroidal wrapping for a square grid of the given side length
    pub fn wrap(&self, size: i32) -> Self {
        Self {
            x: ((self.x % size) + size) % size,
            y: ((self.y % size) + size) % size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_identity() {
        let pos = GridPos::new(5, 5);
        assert_eq!(pos.wrap(10), GridPos::new(5, 5));
    }

    #[test]
    fn test_wrap_negative() {
        let pos = GridPos::new(-1, -3);
        assert_eq!(pos.wrap(10), GridPos::new(9, 7));
    }

    #[test]
    fn test_wrap_overflow() {
        let pos = GridPos::new(10, 23);
        assert_eq!(pos.wrap(10), GridPos::new(0, 3));
    }
}
