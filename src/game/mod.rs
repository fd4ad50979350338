//! Core game logic: grid geometry, snake movement, and the match rules
//! engine.
//!
//! Nothing in this module touches the terminal or the clock; the match
//! consumes queued input events and exposes its state for rendering.

pub mod action;
pub mod config;
pub mod engine;
pub mod session;
pub mod state;

// Re-export commonly used types
pub use action::Direction;
pub use config::GameConfig;
pub use engine::{Collision, Control, Player, Round, TickReport};
pub use session::{GameMode, Match, MatchInput, Phase};
pub use state::{CollisionKind, Grid, Position, Snake};
