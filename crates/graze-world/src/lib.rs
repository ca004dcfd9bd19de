//! Predator-prey world engine.
//!
//! This crate implements the toroidal grid world where grass regrows, sheep
//! graze, and wolves hunt, advanced tick by tick.

pub mod actor;
pub mod cell;
pub mod grass;
pub mod grid;
pub mod world;

pub use actor::Actor;
pub use cell::Cell;
pub use grass::Grass;
pub use grid::Grid;
pub use world::World;
