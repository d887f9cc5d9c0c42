//! Card placement integration tests.
//!
//! Covers direct placement, the two-step select-card/select-cell flow,
//! and the guard conditions: occupied cells, magic cards, and stone
//! accounting. Every rejected intent must leave the match state deeply
//! equal to before.

use proptest::prelude::*;

use duelgrid::{
    AttackRange, CardCatalog, CardInstance, CardTemplate, CellPos, Command, Engine, InstanceId,
    InstanceIdGen, Intent, MatchConfig, TemplateId,
};

fn slime() -> CardTemplate {
    CardTemplate::monster(
        TemplateId::new(1),
        "Slime",
        5,
        vec![
            Command::new(1, 2, "Bash", AttackRange::Melee),
            Command::new(2, 4, "Heavy Bash", AttackRange::Melee),
        ],
    )
}

fn fireball() -> CardTemplate {
    CardTemplate::magic(TemplateId::new(2), "Fireball", 3, "Deal 3 damage")
}

/// Engine whose seat-0 hand holds one slime and one fireball.
fn engine_with_stones(stones: i32) -> Engine {
    let mut ids = InstanceIdGen::sequential();
    let hand = vec![
        CardInstance::stamp(&slime(), &mut ids),
        CardInstance::stamp(&fireball(), &mut ids),
    ];
    Engine::with_hands(
        CardCatalog::starter(),
        MatchConfig::default().with_starting_stones(stones),
        [hand, vec![]],
    )
}

fn hand_card(engine: &Engine, index: usize) -> InstanceId {
    engine.state().players[0].hand[index].instance_id
}

// =============================================================================
// Direct placement
// =============================================================================

/// Placing a monster consumes one stone, occupies the cell resting, and
/// removes the instance from hand.
#[test]
fn test_place_monster_succeeds() {
    let mut engine = engine_with_stones(10);
    let monster = hand_card(&engine, 0);

    engine.dispatch(Intent::PlaceCard {
        card: monster,
        cell: CellPos::new(0, 0),
    });

    let player = &engine.state().players[0];
    assert_eq!(player.stones, 9);
    assert_eq!(player.hand.len(), 1);

    let cell = player.grid.cell(CellPos::new(0, 0));
    assert!(cell.resting);
    assert_eq!(cell.monster.as_ref().unwrap().instance_id(), monster);
}

/// Every one of the four cells accepts a legal placement.
#[test]
fn test_every_empty_cell_accepts_placement() {
    for row in 0..2 {
        for col in 0..2 {
            let mut engine = engine_with_stones(10);
            let monster = hand_card(&engine, 0);

            engine.dispatch(Intent::PlaceCard {
                card: monster,
                cell: CellPos::new(row, col),
            });

            let grid = &engine.state().players[0].grid;
            assert_eq!(grid.find(monster), Some(CellPos::new(row, col)));
        }
    }
}

/// A second placement onto an occupied cell changes nothing.
#[test]
fn test_place_on_occupied_cell_is_noop() {
    let mut engine = engine_with_stones(10);
    let monster = hand_card(&engine, 0);
    engine.dispatch(Intent::PlaceCard {
        card: monster,
        cell: CellPos::new(0, 0),
    });

    // A second slime to attempt the illegal placement with
    let mut ids = InstanceIdGen::seeded(7);
    let extra = CardInstance::stamp(&slime(), &mut ids);
    let extra_id = extra.instance_id;
    // Fixture-only state surgery to get the card into hand
    let mut engine = {
        let mut state = engine.snapshot();
        state.players[0].hand.push_back(extra);
        Engine::with_state(
            CardCatalog::starter(),
            MatchConfig::default(),
            state,
            duelgrid::Phase::ActiveTurn,
        )
    };

    let before = engine.snapshot();
    engine.dispatch(Intent::PlaceCard {
        card: extra_id,
        cell: CellPos::new(0, 0),
    });

    assert_eq!(engine.snapshot(), before);
}

/// With zero stones no placement ever goes through.
#[test]
fn test_place_without_stones_is_noop() {
    let mut engine = engine_with_stones(0);
    let monster = hand_card(&engine, 0);

    let before = engine.snapshot();
    engine.dispatch(Intent::PlaceCard {
        card: monster,
        cell: CellPos::new(0, 0),
    });

    assert_eq!(engine.snapshot(), before);
}

/// Magic cards never reach the battlefield.
#[test]
fn test_magic_card_cannot_be_placed() {
    let mut engine = engine_with_stones(10);
    let magic = hand_card(&engine, 1);

    let before = engine.snapshot();
    engine.dispatch(Intent::PlaceCard {
        card: magic,
        cell: CellPos::new(0, 0),
    });

    assert_eq!(engine.snapshot(), before);
}

// =============================================================================
// Two-step selection flow
// =============================================================================

/// Card first, then cell: the cell selection completes the placement.
#[test]
fn test_select_card_then_cell_places() {
    let mut engine = engine_with_stones(10);
    let monster = hand_card(&engine, 0);

    engine.dispatch(Intent::SelectCard(monster));
    assert_eq!(engine.state().selected_card, Some(monster));

    engine.dispatch(Intent::SelectCell(CellPos::new(1, 1)));

    let state = engine.state();
    assert_eq!(state.players[0].grid.find(monster), Some(CellPos::new(1, 1)));
    assert_eq!(state.players[0].stones, 9);
    assert_eq!(state.selected_card, None);
    assert_eq!(state.selected_cell, None);
    assert_eq!(state.selected_monster, None);
}

/// Cell first, then card: the card selection completes the placement.
#[test]
fn test_select_cell_then_card_places() {
    let mut engine = engine_with_stones(10);
    let monster = hand_card(&engine, 0);

    engine.dispatch(Intent::SelectCell(CellPos::new(0, 1)));
    assert_eq!(engine.state().selected_cell, Some(CellPos::new(0, 1)));

    engine.dispatch(Intent::SelectCard(monster));

    let state = engine.state();
    assert_eq!(state.players[0].grid.find(monster), Some(CellPos::new(0, 1)));
    assert_eq!(state.selected_card, None);
    assert_eq!(state.selected_cell, None);
}

/// Selecting an occupied own cell records both the cell and its monster.
#[test]
fn test_select_occupied_cell_records_monster() {
    let mut engine = engine_with_stones(10);
    let monster = hand_card(&engine, 0);
    engine.dispatch(Intent::PlaceCard {
        card: monster,
        cell: CellPos::new(0, 0),
    });

    engine.dispatch(Intent::SelectCell(CellPos::new(0, 0)));

    let state = engine.state();
    assert_eq!(state.selected_cell, Some(CellPos::new(0, 0)));
    assert_eq!(state.selected_monster, Some(monster));
}

/// Selecting a cell while an illegal placement is pending records the
/// cell but keeps the pending card.
#[test]
fn test_failed_placement_keeps_selections() {
    let mut engine = engine_with_stones(10);
    let magic = hand_card(&engine, 1);

    engine.dispatch(Intent::SelectCard(magic));
    engine.dispatch(Intent::SelectCell(CellPos::new(0, 0)));

    let state = engine.state();
    assert_eq!(state.selected_card, Some(magic));
    assert_eq!(state.selected_cell, Some(CellPos::new(0, 0)));
    // Nothing was placed
    assert!(state.players[0].grid.cell(CellPos::new(0, 0)).is_empty());
}

/// Selecting a card that is not in the active hand records nothing.
#[test]
fn test_select_unknown_card_is_noop() {
    let mut engine = engine_with_stones(10);

    let before = engine.snapshot();
    engine.dispatch(Intent::SelectCard(InstanceId(999)));

    assert_eq!(engine.snapshot(), before);
}

/// ResetSelection unconditionally clears all three pending selections.
#[test]
fn test_reset_selection_clears_all() {
    let mut engine = engine_with_stones(10);
    let monster = hand_card(&engine, 0);
    engine.dispatch(Intent::PlaceCard {
        card: monster,
        cell: CellPos::new(0, 0),
    });

    engine.dispatch(Intent::SelectCell(CellPos::new(0, 0)));
    engine.dispatch(Intent::ResetSelection);

    let state = engine.state();
    assert_eq!(state.selected_card, None);
    assert_eq!(state.selected_cell, None);
    assert_eq!(state.selected_monster, None);
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    /// Any legal placement consumes exactly one stone, whatever the cell
    /// and starting pool.
    #[test]
    fn prop_placement_consumes_exactly_one_stone(
        row in 0usize..2,
        col in 0usize..2,
        stones in 1i32..50,
    ) {
        let mut engine = engine_with_stones(stones);
        let monster = hand_card(&engine, 0);

        engine.dispatch(Intent::PlaceCard {
            card: monster,
            cell: CellPos::new(row, col),
        });

        prop_assert_eq!(engine.state().players[0].stones, stones - 1);
        prop_assert_eq!(engine.state().players[0].hand.len(), 1);
    }

    /// With an empty stone pool, no placement intent mutates anything.
    #[test]
    fn prop_broke_player_cannot_mutate_state(row in 0usize..2, col in 0usize..2) {
        let mut engine = engine_with_stones(0);
        let monster = hand_card(&engine, 0);

        let before = engine.snapshot();
        engine.dispatch(Intent::PlaceCard {
            card: monster,
            cell: CellPos::new(row, col),
        });
        engine.dispatch(Intent::SelectCell(CellPos::new(row, col)));
        engine.dispatch(Intent::SelectCard(monster));

        // Selections may move, but players must be untouched
        prop_assert_eq!(&engine.state().players, &before.players);
    }
}
