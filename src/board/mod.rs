//! Battlefield grid types.

pub mod grid;

pub use grid::{CellPos, FieldCell, FieldMonster, Grid, BACK_ROW, COLS, FRONT_ROW, ROWS};
