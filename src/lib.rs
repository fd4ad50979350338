//! Terminal Snake with an A*-driven autonomous player
//!
//! This library provides:
//! - Core game logic and the match state machine (game module)
//! - The pathfinding autonomous controller (ai module)
//! - TUI rendering (render module)
//! - Keyboard input mapping (input module)
//! - In-memory session stats (metrics module)
//! - The interactive app loop (modes module)

pub mod ai;
pub mod game;
pub mod input;
pub mod metrics;
pub mod modes;
pub mod render;
