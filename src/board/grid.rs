//! Battlefield grid: a fixed 2x2 matrix of cells per player.
//!
//! Row 0 is the front row (faces the opponent), row 1 the back row.
//! A column index shared by both rows forms a lane. Each cell holds at
//! most one monster plus a resting flag; a resting monster was placed or
//! advanced during the current entry into its owner's turn and cannot
//! attack yet.

use serde::{Deserialize, Serialize};

use crate::cards::{CardInstance, InstanceId, MonsterStats};

/// Grid rows per player.
pub const ROWS: usize = 2;
/// Grid columns per player (lanes).
pub const COLS: usize = 2;
/// The row facing the opponent.
pub const FRONT_ROW: usize = 0;
/// The row behind the front row.
pub const BACK_ROW: usize = 1;

/// A cell coordinate within a player's grid.
///
/// Construction is bounds-checked: coordinates outside the 2x2 grid are
/// a caller bug, not a game situation, and panic immediately.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellPos {
    pub row: usize,
    pub col: usize,
}

impl CellPos {
    /// Create a cell position. Panics on out-of-range coordinates.
    #[must_use]
    pub fn new(row: usize, col: usize) -> Self {
        assert!(row < ROWS, "Row {row} out of range");
        assert!(col < COLS, "Column {col} out of range");
        Self { row, col }
    }

    /// The lane (column) this cell belongs to.
    #[must_use]
    pub const fn lane(self) -> usize {
        self.col
    }
}

impl std::fmt::Display for CellPos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A monster on the battlefield: the placed card plus current hit points.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldMonster {
    /// The card instance occupying the cell.
    pub card: CardInstance,

    /// Current hit points. Floored at 0; a monster at 0 is removed.
    pub hp: i32,
}

impl FieldMonster {
    /// Put a monster card onto the field at its template's starting hp.
    ///
    /// Panics if the card is not a monster; only monsters ever enter
    /// the grid.
    #[must_use]
    pub fn summon(card: CardInstance) -> Self {
        let hp = card
            .template
            .monster_stats()
            .expect("Only monster cards enter the field")
            .hp;
        Self { card, hp }
    }

    /// The occupying card's unique identity.
    #[must_use]
    pub fn instance_id(&self) -> InstanceId {
        self.card.instance_id
    }

    /// The monster's template stats.
    #[must_use]
    pub fn stats(&self) -> &MonsterStats {
        self.card
            .template
            .monster_stats()
            .expect("Field monster has a monster template")
    }
}

/// A single battlefield cell.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldCell {
    /// The occupying monster, if any.
    pub monster: Option<FieldMonster>,

    /// Set when the occupant was placed or advanced this turn entry.
    pub resting: bool,
}

impl FieldCell {
    /// Check whether the cell has no occupant.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.monster.is_none()
    }
}

/// A player's 2x2 battlefield.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    cells: [[FieldCell; COLS]; ROWS],
}

impl Grid {
    /// Create an empty grid.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All cell positions in row-major order.
    pub fn positions() -> impl Iterator<Item = CellPos> {
        (0..ROWS).flat_map(|row| (0..COLS).map(move |col| CellPos::new(row, col)))
    }

    /// Get a cell.
    #[must_use]
    pub fn cell(&self, pos: CellPos) -> &FieldCell {
        &self.cells[pos.row][pos.col]
    }

    /// Get a mutable cell.
    pub fn cell_mut(&mut self, pos: CellPos) -> &mut FieldCell {
        &mut self.cells[pos.row][pos.col]
    }

    /// Empty cell positions in row-major order.
    #[must_use]
    pub fn empty_cells(&self) -> Vec<CellPos> {
        Self::positions()
            .filter(|&pos| self.cell(pos).is_empty())
            .collect()
    }

    /// Occupied cells in row-major order.
    pub fn occupied(&self) -> impl Iterator<Item = (CellPos, &FieldCell)> {
        Self::positions()
            .map(|pos| (pos, self.cell(pos)))
            .filter(|(_, cell)| !cell.is_empty())
    }

    /// Locate a monster by instance id.
    #[must_use]
    pub fn find(&self, id: InstanceId) -> Option<CellPos> {
        self.occupied()
            .find(|(_, cell)| {
                cell.monster
                    .as_ref()
                    .is_some_and(|monster| monster.instance_id() == id)
            })
            .map(|(pos, _)| pos)
    }

    /// Place a monster card into an empty cell, marking it resting.
    ///
    /// Panics if the cell is occupied; placement legality is the
    /// caller's guard.
    pub fn place(&mut self, pos: CellPos, card: CardInstance) {
        let cell = self.cell_mut(pos);
        assert!(cell.is_empty(), "Cell {pos} is already occupied");
        cell.monster = Some(FieldMonster::summon(card));
        cell.resting = true;
    }

    /// Remove the monster at a position, clearing the resting flag.
    ///
    /// Returns the removed monster, or `None` if the cell was empty.
    pub fn remove(&mut self, pos: CellPos) -> Option<FieldMonster> {
        let cell = self.cell_mut(pos);
        cell.resting = false;
        cell.monster.take()
    }

    /// Clear resting flags on occupied cells.
    ///
    /// Empty cells are left untouched; an occupant is what the flag
    /// describes.
    pub fn clear_resting(&mut self) {
        for row in &mut self.cells {
            for cell in row {
                if cell.monster.is_some() {
                    cell.resting = false;
                }
            }
        }
    }

    /// Advance back-row monsters into empty front-row cells.
    ///
    /// Each lane is decided independently from the pre-advance snapshot:
    /// back occupied and front empty moves the monster (resting flag
    /// included) forward and empties the back cell. A monster never
    /// advances twice in one call.
    pub fn advance_back_row(&mut self) {
        for col in 0..COLS {
            if self.cells[BACK_ROW][col].monster.is_some()
                && self.cells[FRONT_ROW][col].monster.is_none()
            {
                self.cells[FRONT_ROW][col] = std::mem::take(&mut self.cells[BACK_ROW][col]);
            }
        }
    }
}
