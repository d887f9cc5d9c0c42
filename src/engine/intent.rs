//! Player intents dispatched into the engine.

use serde::{Deserialize, Serialize};

use crate::board::CellPos;
use crate::cards::InstanceId;

/// An inbound action request from the UI or any other collaborator.
///
/// Intents are requests, not commands: the engine validates each one
/// against the current state, and an intent that fails its guards is
/// silently ignored so a stray click never throws or corrupts a match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Intent {
    /// Select a hand card; places it immediately when a legal cell is
    /// already pending.
    SelectCard(InstanceId),

    /// Select an own-field cell; places immediately when a legal card is
    /// already pending, else records the cell (and its occupant).
    SelectCell(CellPos),

    /// Place a hand card directly onto a cell.
    PlaceCard { card: InstanceId, cell: CellPos },

    /// Attack an enemy field monster with an own field monster.
    Attack {
        attacker: InstanceId,
        target: InstanceId,
    },

    /// Clear every pending selection.
    ResetSelection,

    /// Hand the turn over.
    EndTurn,
}
