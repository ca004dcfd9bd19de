//! Core types and configuration for the graze predator-prey simulation.

pub mod config;
pub mod error;
pub mod series;
pub mod types;

pub use config::WorldConfig;
pub use error::{Error, Result};
pub use series::PopulationSeries;
pub use types::*;
