//! Core match model: players, aggregate state, configuration.

pub mod config;
pub mod player;
pub mod state;

pub use config::MatchConfig;
pub use player::{Player, PlayerId, SEAT_COUNT};
pub use state::MatchState;
