//! # duelgrid
//!
//! Turn-based rules engine for a two-player card battle on a 2x2 grid
//! per side. One seat is a human-equivalent actor driven by UI intents;
//! the other is an automated opponent driven by a deterministic greedy
//! policy.
//!
//! ## Design Principles
//!
//! 1. **Single writer**: the [`engine::Engine`] owns the match state.
//!    Collaborators dispatch intents and read snapshots; they never
//!    mutate state directly.
//!
//! 2. **Silent guards**: an illegal intent (occupied cell, wrong card
//!    kind, not enough stones, out-of-range attack, wrong phase) is a
//!    no-op that leaves state deeply equal to before. Contract
//!    violations - out-of-range cell coordinates, unguarded placement -
//!    panic instead, because they are caller bugs.
//!
//! 3. **Deterministic**: starter hands stamp in catalog order, instance
//!    ids come from an injected generator, and the automated policy has
//!    no randomness. The same inputs replay the same match.
//!
//! ## Modules
//!
//! - `cards`: catalog templates, stamped instances, id generation
//! - `board`: the 2x2 battlefield grid, cells, resting flags
//! - `core`: players, aggregate match state, configuration
//! - `combat`: range legality and damage arithmetic
//! - `engine`: the turn-transition state machine and intent surface
//! - `policy`: the automated actor's greedy decision procedure

pub mod board;
pub mod cards;
pub mod combat;
pub mod core;
pub mod engine;
pub mod policy;

// Re-export commonly used types
pub use crate::board::{CellPos, FieldCell, FieldMonster, Grid, BACK_ROW, COLS, FRONT_ROW, ROWS};

pub use crate::cards::{
    AttackRange, CardCatalog, CardInstance, CardKind, CardTemplate, Command, InstanceId,
    InstanceIdGen, MagicStats, MonsterStats, TemplateId,
};

pub use crate::core::{MatchConfig, MatchState, Player, PlayerId, SEAT_COUNT};

pub use crate::engine::{Engine, Intent, Phase, AUTOMATED_SEAT, HUMAN_SEAT};
