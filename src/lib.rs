//! savanna-grid: uniform spatial grid and 2D collision predicates for a predator/prey simulation

pub mod types;
pub mod api;
pub mod vector;
pub mod grid;
pub mod narrowphase;
pub mod units;
pub mod config;

pub use glam::Vec2;

pub use crate::types::*;
pub use crate::api::*;
pub use crate::vector::Vec2Ext;
pub use crate::grid::{SpatialGrid, EDGE_OFFSET, MAX_CELLS, MIN_CELL_SIZE};
pub use crate::narrowphase::Narrowphase;
pub use crate::units::*;
pub use crate::config::{ConfigError, GridConfig, SimConfig};
