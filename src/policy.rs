//! Automated actor policy.
//!
//! A deterministic greedy procedure run once per automated phase.
//! Placement always runs; the attack sub-phase is gated by match
//! configuration. Given the same hand, stones, and grids, the policy
//! reproduces the exact same action sequence - there is no randomness
//! anywhere in this module.

use im::Vector;

use crate::board::CellPos;
use crate::cards::{CardInstance, InstanceId};
use crate::combat;
use crate::core::{MatchState, Player, PlayerId};

/// Run the automated seat's whole turn: greedy placement, then the
/// attack sub-phase when enabled.
pub fn run_automated_turn(state: &mut MatchState, seat: PlayerId, attacks_enabled: bool) {
    place_monsters(state, seat);
    if attacks_enabled {
        attack_sweep(state, seat);
    }
}

/// Greedy placement loop.
///
/// While the seat has a stone, an empty cell, and a monster in hand:
/// place the highest-value monster (hp plus total command damage, ties
/// to hand order) into the first empty cell in row-major order.
pub fn place_monsters(state: &mut MatchState, seat: PlayerId) {
    loop {
        if state.player(seat).stones < 1 {
            break;
        }
        let Some(&pos) = state.player(seat).grid.empty_cells().first() else {
            break;
        };
        let Some(card) = best_monster(&state.player(seat).hand) else {
            break;
        };
        state.place(seat, card, pos);
    }
}

/// Pick the highest-value monster in hand. Ties resolve to the earliest
/// card; magic cards are never candidates.
fn best_monster(hand: &Vector<CardInstance>) -> Option<InstanceId> {
    let mut best: Option<(InstanceId, i32)> = None;
    for card in hand {
        let Some(stats) = card.template.monster_stats() else {
            continue;
        };
        let value = stats.combat_value();
        match best {
            Some((_, best_value)) if value <= best_value => {}
            _ => best = Some((card.instance_id, value)),
        }
    }
    best.map(|(id, _)| id)
}

/// Attack sub-phase: every non-resting monster of the automated seat, in
/// row-major order, strikes the lowest-hp enemy its strongest command
/// can reach. Ties resolve to row-major encounter order.
fn attack_sweep(state: &mut MatchState, seat: PlayerId) {
    let enemy = seat.opponent();

    let attackers: Vec<CellPos> = state
        .player(seat)
        .grid
        .occupied()
        .filter(|(_, cell)| !cell.resting)
        .map(|(pos, _)| pos)
        .collect();

    for attacker_pos in attackers {
        let Some(monster) = state.player(seat).grid.cell(attacker_pos).monster.as_ref() else {
            continue;
        };
        let command = monster.stats().strongest_command();
        let (damage, range) = (command.damage, command.range);

        let mut target: Option<(CellPos, i32)> = None;
        for (pos, cell) in state.player(enemy).grid.occupied() {
            if !combat::is_legal_target(attacker_pos, pos, range) {
                continue;
            }
            let hp = cell.monster.as_ref().map_or(0, |m| m.hp);
            match target {
                Some((_, weakest)) if hp >= weakest => {}
                _ => target = Some((pos, hp)),
            }
        }

        if let Some((target_pos, hp)) = target {
            let remaining = combat::apply_damage(hp, damage);
            let grid = &mut state.player_mut(enemy).grid;
            if combat::is_destroyed(remaining) {
                grid.remove(target_pos);
            } else if let Some(monster) = grid.cell_mut(target_pos).monster.as_mut() {
                monster.hp = remaining;
            }
        }
    }
}

/// How much damage a player's board can deal right now: the sum of each
/// non-resting monster's strongest command damage.
#[must_use]
pub fn threat_level(player: &Player) -> i32 {
    player
        .grid
        .occupied()
        .filter(|(_, cell)| !cell.resting)
        .filter_map(|(_, cell)| cell.monster.as_ref())
        .map(|monster| monster.stats().strongest_command().damage)
        .sum()
}
