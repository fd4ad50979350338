//! The autonomous player: A* pathfinding plus the per-tick controller.

pub mod controller;
pub mod pathfinder;

pub use controller::decide;
pub use pathfinder::{manhattan, shortest_path};
