//! Per-cell grass regrowth state.

use rand::Rng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Grass in a single cell: either fully grown, or depleted and counting down
/// to regrowth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grass {
    grown: bool,
    /// Ticks remaining until regrown; held at `grass_time` while grown
    count: i32,
}

impl Grass {
    /// Randomized initial state: half the cells start grown, the rest are
    /// somewhere along their regrowth countdown.
    pub fn random(grass_time: i32, rng: &mut ChaCha8Rng) -> Self {
        if rng.gen_range(0..=1) == 0 {
            Self {
                grown: false,
                count: rng.gen_range(0..=grass_time),
            }
        } else {
            Self {
                grown: true,
                count: grass_time,
            }
        }
    }

    /// A fully grown patch.
    pub fn grown(grass_time: i32) -> Self {
        Self {
            grown: true,
            count: grass_time,
        }
    }

    /// A depleted patch with `count` ticks left on its countdown.
    pub fn depleted(count: i32) -> Self {
        Self {
            grown: false,
            count,
        }
    }

    pub fn is_grown(&self) -> bool {
        self.grown
    }

    pub fn count(&self) -> i32 {
        self.count
    }

    /// Advance the regrowth countdown by one tick. No-op while grown.
    pub fn step(&mut self, grass_time: i32) {
        if !self.grown {
            self.count -= 1;
            if self.count <= 0 {
                self.grown = true;
                self.count = grass_time;
            }
        }
    }

    /// Consume the grass: back to depleted with a full regrowth countdown.
    pub fn clear(&mut self, grass_time: i32) {
        self.grown = false;
        self.count = grass_time;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    const GRASS_TIME: i32 = 30;

    #[test]
    fn test_random_state_within_bounds() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        for _ in 0..200 {
            let grass = Grass::random(GRASS_TIME, &mut rng);
            assert!(grass.count() >= 0);
            assert!(grass.count() <= GRASS_TIME);
            if grass.is_grown() {
                assert_eq!(grass.count(), GRASS_TIME);
            }
        }
    }

    #[test]
    fn test_depleted_regrows_after_countdown() {
        let mut grass = Grass::depleted(3);
        grass.step(GRASS_TIME);
        grass.step(GRASS_TIME);
        assert!(!grass.is_grown());
        grass.step(GRASS_TIME);
        assert!(grass.is_grown());
        assert_eq!(grass.count(), GRASS_TIME);
    }

    #[test]
    fn test_step_is_noop_while_grown() {
        let mut grass = Grass::grown(GRASS_TIME);
        grass.step(GRASS_TIME);
        assert!(grass.is_grown());
        assert_eq!(grass.count(), GRASS_TIME);
    }

    #[test]
    fn test_clear_starts_full_countdown() {
        let mut grass = Grass::grown(GRASS_TIME);
        grass.clear(GRASS_TIME);
        assert!(!grass.is_grown());
        assert_eq!(grass.count(), GRASS_TIME);
    }

    #[test]
    fn test_zero_countdown_regrows_next_step() {
        let mut grass = Grass::depleted(0);
        grass.step(GRASS_TIME);
        assert!(grass.is_grown());
        assert_eq!(grass.count(), GRASS_TIME);
    }
}
