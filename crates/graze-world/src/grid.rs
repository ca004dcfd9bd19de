//! 2D toroidal grid of cells.

use crate::cell::Cell;
use crate::grass::Grass;
use graze_core::GridPos;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// A square toroidal grid. Every access wraps, so any integer coordinate
/// maps to a valid cell.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Grid {
    size: i32,
    cells: Vec<Cell>,
}

impl Grid {
    /// Grid with randomized grass in every cell.
    pub fn random(size: i32, grass_time: i32, rng: &mut ChaCha8Rng) -> Self {
        let count = size as usize * size as usize;
        let cells = (0..count)
            .map(|_| Cell::new(Grass::random(grass_time, rng)))
            .collect();
        Self { size, cells }
    }

    pub fn size(&self) -> i32 {
        self.size
    }

    pub fn get(&self, pos: GridPos) -> &Cell {
        let index = self.pos_to_index(pos.wrap(self.size));
        &self.cells[index]
    }

    pub fn get_mut(&mut self, pos: GridPos) -> &mut Cell {
        let index = self.pos_to_index(pos.wrap(self.size));
        &mut self.cells[index]
    }

    pub fn iter(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Cell> {
        self.cells.iter_mut()
    }

    /// Iterator over all cells with their grid coordinates
    pub fn iter_with_pos(&self) -> impl Iterator<Item = (GridPos, &Cell)> {
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, cell)| (self.index_to_pos(i), cell))
    }

    fn pos_to_index(&self, pos: GridPos) -> usize {
        (pos.y * self.size + pos.x) as usize
    }

    fn index_to_pos(&self, index: usize) -> GridPos {
        GridPos::new(index as i32 % self.size, index as i32 / self.size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_grid_creation() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let grid = Grid::random(10, 30, &mut rng);
        assert_eq!(grid.size(), 10);
        assert_eq!(grid.iter().count(), 100);
    }

    #[test]
    fn test_toroidal_access() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let grid = Grid::random(10, 30, &mut rng);

        // Out-of-range coordinates wrap instead of panicking
        let wrapped = grid.get(GridPos::new(-1, 10));
        let direct = grid.get(GridPos::new(9, 0));
        assert_eq!(wrapped.grass, direct.grass);
    }

    #[test]
    fn test_random_grass_mix() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let grid = Grid::random(20, 30, &mut rng);

        let grown = grid.iter().filter(|c| c.grass.is_grown()).count();
        // Uniform coin per cell; 400 cells all landing one way would mean a
        // broken initializer
        assert!(grown > 0 && grown < 400);
    }
}
