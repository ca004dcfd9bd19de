//! Simulation engine driving the per-tick world loop.

use crate::actor::Actor;
use crate::cell::Cell;
use crate::grid::Grid;
use graze_core::{PopulationSeries, Result, Species, SpeciesParams, WorldConfig};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

/// The simulation world: a toroidal grid of grass cells populated by sheep
/// and wolves, advanced one atomic tick at a time.
///
/// Actors are owned by the cell they stand on. A tick runs three ordered
/// phases:
/// 1. grass phase — every cell's grass steps, grown cells are tallied, and
///    all occupancy lists are drained into a pre-tick snapshot;
/// 2. actor phase — every snapshot actor moves, re-registers into the cell
///    matching its new position, and resolves eat/die/reproduce there;
/// 3. rebuild phase — population counts are recomputed from the cells.
pub struct World {
    config: WorldConfig,
    sheep_params: SpeciesParams,
    wolf_params: SpeciesParams,
    grid: Grid,
    rng: ChaCha8Rng,
    tick: u64,
    grass_count: usize,
    sheep_count: usize,
    wolf_count: usize,
}

impl World {
    /// Build a world from a validated configuration: randomized grass in
    /// every cell, initial sheep and wolves scattered uniformly.
    pub fn new(config: WorldConfig) -> Result<Self> {
        config.validate()?;

        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        let mut grid = Grid::random(config.size, config.grass_time, &mut rng);

        let sheep_params = config.sheep_params();
        let wolf_params = config.wolf_params();
        let size = config.size;

        for _ in 0..config.init_sheep_count {
            let actor = Actor::random(size, &sheep_params, &mut rng);
            grid.get_mut(actor.loc(size)).push(Species::Sheep, actor);
        }
        for _ in 0..config.init_wolf_count {
            let actor = Actor::random(size, &wolf_params, &mut rng);
            grid.get_mut(actor.loc(size)).push(Species::Wolf, actor);
        }

        let grass_count = grid.iter().filter(|c| c.grass.is_grown()).count();

        Ok(Self {
            sheep_count: config.init_sheep_count,
            wolf_count: config.init_wolf_count,
            grass_count,
            sheep_params,
            wolf_params,
            grid,
            rng,
            tick: 0,
            config,
        })
    }

    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn grass_count(&self) -> usize {
        self.grass_count
    }

    pub fn sheep_count(&self) -> usize {
        self.sheep_count
    }

    pub fn wolf_count(&self) -> usize {
        self.wolf_count
    }

    pub fn config(&self) -> &WorldConfig {
        &self.config
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Advance the world by one atomic tick.
    pub fn step(&mut self) {
        let grass_time = self.config.grass_time;
        let size = self.grid.size();

        // Grass phase: step regrowth, tally grown cells, and drain all
        // occupants into the pre-tick snapshot. Sheep are collected ahead of
        // wolves so they also act first, which means wolves only ever prey
        // on sheep that have already moved this tick.
        let mut sheep = Vec::with_capacity(self.sheep_count);
        let mut wolves = Vec::with_capacity(self.wolf_count);
        let mut grown = 0;
        for cell in self.grid.iter_mut() {
            cell.grass.step(grass_time);
            if cell.grass.is_grown() {
                grown += 1;
            }
            sheep.append(&mut cell.sheep);
            wolves.append(&mut cell.wolves);
        }
        self.grass_count = grown;

        // Actor phase: move, re-register, then eat/die/reproduce in place.
        for mut actor in sheep {
            actor.advance(size, &self.sheep_params, &mut self.rng);
            let cell = self.grid.get_mut(actor.loc(size));
            cell.sheep.push(actor);
            Self::act_sheep(cell, &self.sheep_params, grass_time, &mut self.rng);
        }
        for mut actor in wolves {
            actor.advance(size, &self.wolf_params, &mut self.rng);
            let cell = self.grid.get_mut(actor.loc(size));
            cell.wolves.push(actor);
            Self::act_wolf(cell, &self.wolf_params, &mut self.rng);
        }

        // Rebuild phase: counts recomputed from the cells, so they stay
        // consistent with occupancy by construction.
        self.sheep_count = self.grid.iter().map(|c| c.sheep.len()).sum();
        self.wolf_count = self.grid.iter().map(|c| c.wolves.len()).sum();
        self.tick += 1;
    }

    /// Resolve the action sequence for the last-registered sheep in `cell`:
    /// metabolic cost, graze if the grass is grown, die below zero energy,
    /// otherwise maybe reproduce.
    fn act_sheep(cell: &mut Cell, params: &SpeciesParams, grass_time: i32, rng: &mut ChaCha8Rng) {
        let idx = cell.sheep.len() - 1;
        cell.sheep[idx].energy -= 1.0;

        if cell.grass.is_grown() {
            cell.grass.clear(grass_time);
            cell.sheep[idx].energy += params.gain;
        }

        if cell.sheep[idx].energy < 0.0 {
            let _ = cell.remove(Species::Sheep, idx);
            return;
        }

        Self::maybe_reproduce(cell, Species::Sheep, idx, params, rng);
    }

    /// Resolve the action sequence for the last-registered wolf in `cell`:
    /// metabolic cost, take a sheep if one is present, die below zero
    /// energy, otherwise maybe reproduce.
    fn act_wolf(cell: &mut Cell, params: &SpeciesParams, rng: &mut ChaCha8Rng) {
        let idx = cell.wolves.len() - 1;
        cell.wolves[idx].energy -= 1.0;

        if cell.sheep.pop().is_some() {
            cell.wolves[idx].energy += params.gain;
        }

        if cell.wolves[idx].energy < 0.0 {
            let _ = cell.remove(Species::Wolf, idx);
            return;
        }

        Self::maybe_reproduce(cell, Species::Wolf, idx, params, rng);
    }

    /// With probability `born_rate`, halve the parent's energy and register
    /// a child at the same position with the halved energy and a fresh
    /// random heading. Only live actors reach this point; a dead actor has
    /// already been removed and cannot spawn offspring.
    fn maybe_reproduce(
        cell: &mut Cell,
        species: Species,
        idx: usize,
        params: &SpeciesParams,
        rng: &mut ChaCha8Rng,
    ) {
        if rng.gen::<f64>() < params.born_rate {
            let list = cell.list_mut(species);
            list[idx].energy /= 2.0;
            let child = list[idx].offspring(list[idx].energy, rng);
            cell.push(species, child);
        }
    }

    /// Run for `steps` ticks, recording the three population series.
    pub fn run(&mut self, steps: usize) -> PopulationSeries {
        self.run_with_observer(steps, 0, |_| {})
    }

    /// Run for `steps` ticks, invoking `observer` with the series so far
    /// after every `every`-th tick (`every = 0` disables the observer). The
    /// observer sees an immutable view and cannot perturb simulation state.
    pub fn run_with_observer<F>(
        &mut self,
        steps: usize,
        every: usize,
        mut observer: F,
    ) -> PopulationSeries
    where
        F: FnMut(&PopulationSeries),
    {
        info!(
            steps,
            size = self.config.size,
            sheep = self.sheep_count,
            wolves = self.wolf_count,
            "starting run"
        );

        let mut series = PopulationSeries::with_capacity(steps);
        for i in 0..steps {
            self.step();
            series.record(
                self.grass_count as f64 / self.config.sheep_gain,
                self.sheep_count,
                self.wolf_count,
            );

            if every > 0 && i % every == 0 {
                observer(&series);
            }

            if i % 100 == 0 {
                debug!(
                    tick = self.tick,
                    grass = self.grass_count,
                    sheep = self.sheep_count,
                    wolves = self.wolf_count,
                    "tick progress"
                );
            }
        }

        info!(
            ticks = series.ticks(),
            sheep = self.sheep_count,
            wolves = self.wolf_count,
            "run complete"
        );
        series
    }
}
