//! Shared actor state and movement for both species.

use graze_core::{GridPos, SpeciesParams};
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// An actor (sheep or wolf) with a continuous position on the toroidal
/// world, a heading in degrees, and an energy reserve.
///
/// Species-specific behavior is driven by the [`SpeciesParams`] passed into
/// each method, so a single struct serves both variants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Actor {
    pub x: f64,
    pub y: f64,
    /// Heading in degrees; unbounded, converted to radians when moving
    pub heading: f64,
    pub energy: f64,
}

impl Actor {
    /// Random actor for world initialization: uniform position and heading,
    /// energy uniform in `[0, 2*gain) * 4` (mean `4*gain`).
    pub fn random(size: i32, params: &SpeciesParams, rng: &mut ChaCha8Rng) -> Self {
        Self {
            x: rng.gen_range(0.0..size as f64),
            y: rng.gen_range(0.0..size as f64),
            heading: rng.gen_range(0.0..360.0),
            energy: rng.gen_range(0.0..2.0 * params.gain) * 4.0,
        }
    }

    /// Offspring at the parent's position with a fresh random heading.
    pub fn offspring(&self, energy: f64, rng: &mut ChaCha8Rng) -> Self {
        Self {
            x: self.x,
            y: self.y,
            heading: rng.gen_range(0.0..360.0),
            energy,
        }
    }

    /// One movement step: perturb the heading by the difference of two
    /// uniform integer draws in `[0, 50]` (triangular around zero), walk a
    /// random length between 1 and `speed`, and wrap both axes.
    pub fn advance(&mut self, size: i32, params: &SpeciesParams, rng: &mut ChaCha8Rng) {
        let turn = rng.gen_range(0..=50) - rng.gen_range(0..=50);
        self.heading += turn as f64;

        let radians = self.heading.to_radians();
        let (lo, hi) = if params.speed >= 1.0 {
            (1.0, params.speed)
        } else {
            (params.speed, 1.0)
        };
        let length = rng.gen_range(lo..=hi);

        let size = size as f64;
        self.x = (self.x + radians.cos() * length).rem_euclid(size);
        self.y = (self.y + radians.sin() * length).rem_euclid(size);
    }

    /// Cell coordinates of the actor's truncated position.
    pub fn loc(&self, size: i32) -> GridPos {
        // rem_euclid keeps positions in [0, size) but float rounding can
        // land exactly on the boundary; wrap() folds that back to zero.
        GridPos::new(self.x as i32, self.y as i32).wrap(size)
    }
}
