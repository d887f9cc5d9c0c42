//! Match configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Knobs fixed at match construction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Starting hit points per player.
    pub starting_hp: i32,

    /// Starting placement stones per player.
    pub starting_stones: i32,

    /// Display names, seat 0 first.
    pub player_names: [String; 2],

    /// Whether seat 1 is driven by the automated policy. When false,
    /// ending a turn hands control straight to the other seat.
    pub automated_opponent: bool,

    /// Whether the automated actor attacks after placing. Off by
    /// default; placement-only is the baseline behavior.
    pub automated_attacks: bool,

    /// Delay before the automated phase hands control back.
    pub handoff_delay: Duration,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            starting_hp: 20,
            starting_stones: 10,
            player_names: ["Player 1".to_string(), "Player 2".to_string()],
            automated_opponent: true,
            automated_attacks: false,
            handoff_delay: Duration::from_millis(2000),
        }
    }
}

impl MatchConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set starting stones.
    #[must_use]
    pub fn with_starting_stones(mut self, stones: i32) -> Self {
        assert!(stones >= 0, "Starting stones must be non-negative");
        self.starting_stones = stones;
        self
    }

    /// Set starting hit points.
    #[must_use]
    pub fn with_starting_hp(mut self, hp: i32) -> Self {
        assert!(hp > 0, "Starting hp must be positive");
        self.starting_hp = hp;
        self
    }

    /// Set the automated-phase handoff delay.
    #[must_use]
    pub fn with_handoff_delay(mut self, delay: Duration) -> Self {
        self.handoff_delay = delay;
        self
    }

    /// Enable or disable the automated opponent for seat 1.
    #[must_use]
    pub fn with_automated_opponent(mut self, automated: bool) -> Self {
        self.automated_opponent = automated;
        self
    }

    /// Enable or disable the automated attack sub-phase.
    #[must_use]
    pub fn with_automated_attacks(mut self, attacks: bool) -> Self {
        self.automated_attacks = attacks;
        self
    }
}
