//! Combat resolver: range legality and damage arithmetic.
//!
//! Pure functions with no hidden state, called by the engine's attack
//! handler and the automated actor's attack sub-phase.
//!
//! ## Range rule
//!
//! Positions are local to each owner's grid, row 0 = front. The opposing
//! front-row cell in the attacker's lane is the *blocker* position:
//!
//! - `Melee` reaches only the blocker.
//! - `Ranged` reaches every enemy cell except the blocker: ranged units
//!   shoot past the lane blocker but cannot hit it.
//!
//! Same-player targeting never reaches this module; the engine rejects
//! it before resolving range.

use crate::board::{CellPos, FRONT_ROW};
use crate::cards::AttackRange;

/// Check whether a target cell is reachable from an attacker cell.
///
/// Both positions are in their owner's local grid coordinates.
#[must_use]
pub fn is_legal_target(attacker: CellPos, target: CellPos, range: AttackRange) -> bool {
    let blocker = CellPos::new(FRONT_ROW, attacker.lane());
    match range {
        AttackRange::Melee => target == blocker,
        AttackRange::Ranged => target != blocker,
    }
}

/// Apply damage to a hit point total, floored at 0.
#[must_use]
pub fn apply_damage(hp: i32, amount: i32) -> i32 {
    (hp - amount).max(0)
}

/// Check whether a hit point total means destruction.
#[must_use]
pub fn is_destroyed(hp: i32) -> bool {
    hp <= 0
}
