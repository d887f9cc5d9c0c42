//! Player identification and per-player match data.
//!
//! Exactly two seats exist: seat 0 is the human-equivalent actor, seat 1
//! the automated opponent.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::board::Grid;
use crate::cards::{CardInstance, InstanceId};

/// Number of seats in a match.
pub const SEAT_COUNT: usize = 2;

/// Type-safe seat identifier (0 or 1).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a seat id. Panics outside the two-seat range.
    #[must_use]
    pub fn new(id: u8) -> Self {
        assert!((id as usize) < SEAT_COUNT, "Seat {id} out of range");
        Self(id)
    }

    /// The seat index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The other seat.
    #[must_use]
    pub const fn opponent(self) -> Self {
        Self(1 - self.0)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Seat {}", self.0)
    }
}

/// Per-player match record: life, placement stones, cards, battlefield.
///
/// `hand` and `deck` use `im::Vector` so snapshots of the whole match
/// state clone cheaply.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Seat identity.
    pub id: PlayerId,

    /// Display name.
    pub name: String,

    /// Hit points. The match ends when this reaches 0.
    pub hp: i32,

    /// Placement resource pool; one stone per monster placed.
    pub stones: i32,

    /// Cards not yet drawn into hand.
    pub deck: Vector<CardInstance>,

    /// Cards available to play; always reflects instances not yet
    /// placed or consumed.
    pub hand: Vector<CardInstance>,

    /// This player's battlefield.
    pub grid: Grid,
}

impl Player {
    /// Create a player with an empty deck, hand, and grid.
    #[must_use]
    pub fn new(id: PlayerId, name: impl Into<String>, hp: i32, stones: i32) -> Self {
        assert!(hp > 0, "Starting hp must be positive");
        assert!(stones >= 0, "Starting stones must be non-negative");
        Self {
            id,
            name: name.into(),
            hp,
            stones,
            deck: Vector::new(),
            hand: Vector::new(),
            grid: Grid::new(),
        }
    }

    /// Look up a hand card by instance id.
    #[must_use]
    pub fn hand_card(&self, id: InstanceId) -> Option<&CardInstance> {
        self.hand.iter().find(|card| card.instance_id == id)
    }

    /// Remove a hand card by instance id.
    ///
    /// Returns the removed card, or `None` if the id is not in hand.
    /// Duplicated templates are safe: only the matching instance leaves.
    pub fn remove_from_hand(&mut self, id: InstanceId) -> Option<CardInstance> {
        let index = self.hand.iter().position(|card| card.instance_id == id)?;
        Some(self.hand.remove(index))
    }

    /// Check whether this player has lost.
    #[must_use]
    pub fn is_defeated(&self) -> bool {
        self.hp <= 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{AttackRange, CardTemplate, Command, InstanceIdGen, TemplateId};

    fn slime_template() -> CardTemplate {
        CardTemplate::monster(
            TemplateId::new(1),
            "Slime",
            5,
            vec![Command::new(1, 2, "Bash", AttackRange::Melee)],
        )
    }

    #[test]
    fn test_opponent() {
        assert_eq!(PlayerId::new(0).opponent(), PlayerId::new(1));
        assert_eq!(PlayerId::new(1).opponent(), PlayerId::new(0));
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_third_seat_panics() {
        let _ = PlayerId::new(2);
    }

    #[test]
    fn test_remove_from_hand_by_instance_id() {
        let mut ids = InstanceIdGen::sequential();
        let template = slime_template();
        let first = CardInstance::stamp(&template, &mut ids);
        let second = CardInstance::stamp(&template, &mut ids);
        let second_id = second.instance_id;

        let mut player = Player::new(PlayerId::new(0), "Player 1", 20, 10);
        player.hand.push_back(first.clone());
        player.hand.push_back(second);

        // Identical templates: removal must pick the matching instance
        let removed = player.remove_from_hand(second_id).unwrap();
        assert_eq!(removed.instance_id, second_id);
        assert_eq!(player.hand.len(), 1);
        assert_eq!(player.hand[0].instance_id, first.instance_id);

        assert!(player.remove_from_hand(second_id).is_none());
    }

    #[test]
    fn test_is_defeated() {
        let mut player = Player::new(PlayerId::new(0), "Player 1", 20, 10);
        assert!(!player.is_defeated());

        player.hp = 0;
        assert!(player.is_defeated());
    }
}
