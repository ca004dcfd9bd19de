//! A single grid cell: grass plus current occupants.

use crate::actor::Actor;
use crate::grass::Grass;
use graze_core::Species;
use serde::{Deserialize, Serialize};

/// One grid location. Owns its grass and, between phases of a tick, the
/// actors currently standing on it. Occupancy lists are drained and rebuilt
/// every tick from actor positions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cell {
    pub grass: Grass,
    pub sheep: Vec<Actor>,
    pub wolves: Vec<Actor>,
}

impl Cell {
    pub fn new(grass: Grass) -> Self {
        Self {
            grass,
            sheep: Vec::new(),
            wolves: Vec::new(),
        }
    }

    /// Append an actor to the matching occupancy list.
    pub fn push(&mut self, species: Species, actor: Actor) {
        match species {
            Species::Sheep => self.sheep.push(actor),
            Species::Wolf => self.wolves.push(actor),
        }
    }

    /// Remove the actor at `index` from the matching list. No-op when the
    /// index is out of bounds, so a double removal cannot panic.
    pub fn remove(&mut self, species: Species, index: usize) -> Option<Actor> {
        let list = self.list_mut(species);
        if index < list.len() {
            Some(list.remove(index))
        } else {
            None
        }
    }

    pub fn list(&self, species: Species) -> &Vec<Actor> {
        match species {
            Species::Sheep => &self.sheep,
            Species::Wolf => &self.wolves,
        }
    }

    pub fn list_mut(&mut self, species: Species) -> &mut Vec<Actor> {
        match species {
            Species::Sheep => &mut self.sheep,
            Species::Wolf => &mut self.wolves,
        }
    }
}
