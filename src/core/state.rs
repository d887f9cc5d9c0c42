//! Match state: the aggregate the engine mutates and collaborators read.
//!
//! `MatchState` holds both player records, whose turn it is, any
//! in-progress selection, and the winner marker. It is owned exclusively
//! by the engine; external collaborators receive read-only snapshots.
//! Cloning is cheap (persistent hand/deck vectors), so a snapshot is a
//! plain `clone()` and never observes a half-applied mutation.

use serde::{Deserialize, Serialize};

use super::player::{Player, PlayerId};
use crate::board::CellPos;
use crate::cards::InstanceId;

/// The full, authoritative state of one match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchState {
    /// Both player records, indexed by seat.
    pub players: [Player; 2],

    /// Whose turn it is.
    pub active: PlayerId,

    /// Pending card selection (a hand card awaiting a cell).
    pub selected_card: Option<InstanceId>,

    /// Pending cell selection (a cell awaiting a card).
    pub selected_cell: Option<CellPos>,

    /// Pending monster selection (an occupied own cell, for attack
    /// targeting surfaces).
    pub selected_monster: Option<InstanceId>,

    /// Set once a player's hp reaches 0; no transitions after that.
    pub winner: Option<PlayerId>,
}

impl MatchState {
    /// Create a match state with seat 0 active and nothing selected.
    #[must_use]
    pub fn new(players: [Player; 2]) -> Self {
        Self {
            players,
            active: PlayerId::new(0),
            selected_card: None,
            selected_cell: None,
            selected_monster: None,
            winner: None,
        }
    }

    /// Get a player record.
    #[must_use]
    pub fn player(&self, seat: PlayerId) -> &Player {
        &self.players[seat.index()]
    }

    /// Get a mutable player record.
    pub fn player_mut(&mut self, seat: PlayerId) -> &mut Player {
        &mut self.players[seat.index()]
    }

    /// The player whose turn it is.
    #[must_use]
    pub fn active_player(&self) -> &Player {
        self.player(self.active)
    }

    /// Clear all three pending selections.
    pub fn clear_selections(&mut self) {
        self.selected_card = None;
        self.selected_cell = None;
        self.selected_monster = None;
    }

    /// Locate a monster instance on either battlefield.
    #[must_use]
    pub fn find_on_field(&self, id: InstanceId) -> Option<(PlayerId, CellPos)> {
        self.players
            .iter()
            .find_map(|player| player.grid.find(id).map(|pos| (player.id, pos)))
    }

    /// The defeated seat, if any.
    #[must_use]
    pub fn defeated(&self) -> Option<PlayerId> {
        self.players
            .iter()
            .find(|player| player.is_defeated())
            .map(|player| player.id)
    }

    /// Check placement legality: empty cell, monster card in the seat's
    /// hand, at least one stone.
    ///
    /// The stone cost of placement is always 1, regardless of the
    /// card's command costs.
    #[must_use]
    pub fn can_place(&self, seat: PlayerId, card: InstanceId, pos: CellPos) -> bool {
        let player = self.player(seat);
        player.grid.cell(pos).is_empty()
            && player.stones >= 1
            && player
                .hand_card(card)
                .is_some_and(|card| card.template.is_monster())
    }

    /// Place a hand card onto the battlefield: one stone consumed, cell
    /// occupied and resting, instance removed from hand.
    ///
    /// Callers must check [`can_place`](Self::can_place) first; placing
    /// an illegal card is a caller bug and panics.
    pub fn place(&mut self, seat: PlayerId, card: InstanceId, pos: CellPos) {
        let player = self.player_mut(seat);
        let card = player
            .remove_from_hand(card)
            .expect("Placement must be guarded by can_place");
        player.stones -= 1;
        player.grid.place(pos, card);
    }
}
