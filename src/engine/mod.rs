//! Turn-transition engine: the match state machine.
//!
//! The engine owns the [`MatchState`] and is the only writer. Collaborators
//! dispatch [`Intent`]s; the engine validates them against the current
//! phase and state, applies the mutation, and leaves a fresh snapshot for
//! rendering. Every guard failure is a silent no-op that leaves the state
//! deeply equal to before.
//!
//! ## Phases
//!
//! - `ActiveTurn`: the acting player may issue intents.
//! - `AutomatedTurn`: seat 1's scripted phase. Entry is atomic - back-row
//!   advance, then the whole automated policy - and external intents are
//!   ignored until the handoff timer fires.
//! - `MatchOver`: terminal; everything is ignored.
//!
//! ## Turn switching
//!
//! A turn switch advances the active seat, clears selections, and clears
//! resting flags on the *incoming* seat's occupied cells. Entering a
//! phase then advances the incoming seat's back row, lane by lane. The
//! same steps run whether the switch came from `EndTurn` or from the
//! automated handoff.
//!
//! ## Timing
//!
//! The automated phase ends after a fixed delay. The engine does not
//! spawn threads; the host drives the clock by calling [`Engine::poll`]
//! with the current instant (or [`Engine::force_handoff`] to skip the
//! wait). Restarting the match cancels any pending handoff.

pub mod intent;

pub use intent::Intent;

use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::board::CellPos;
use crate::cards::{CardCatalog, CardInstance, InstanceId, InstanceIdGen};
use crate::combat;
use crate::core::{MatchConfig, MatchState, Player, PlayerId};
use crate::policy;

/// The human-equivalent seat.
pub const HUMAN_SEAT: PlayerId = PlayerId(0);
/// The automated seat.
pub const AUTOMATED_SEAT: PlayerId = PlayerId(1);

/// Engine phase tag, published with every snapshot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// The acting player may issue intents.
    ActiveTurn,
    /// The automated actor's phase; intents are ignored.
    AutomatedTurn,
    /// Terminal.
    MatchOver,
}

/// The match state machine.
pub struct Engine {
    config: MatchConfig,
    catalog: CardCatalog,
    ids: InstanceIdGen,
    state: MatchState,
    phase: Phase,
    /// When the automated phase hands control back. Only set during
    /// `AutomatedTurn`.
    handoff_at: Option<Instant>,
}

impl Engine {
    /// Create a fresh match with deterministic starter hands and decks
    /// stamped from the catalog in catalog order.
    #[must_use]
    pub fn new(catalog: CardCatalog, config: MatchConfig) -> Self {
        Self::with_ids(catalog, config, InstanceIdGen::sequential())
    }

    /// Create a fresh match with an injected instance-id generator.
    #[must_use]
    pub fn with_ids(catalog: CardCatalog, config: MatchConfig, mut ids: InstanceIdGen) -> Self {
        let state = Self::fresh_state(&catalog, &config, &mut ids);
        Self {
            config,
            catalog,
            ids,
            state,
            phase: Phase::ActiveTurn,
            handoff_at: None,
        }
    }

    /// Create a match with custom starting hands instead of the
    /// catalog-derived starter set. Decks start empty.
    #[must_use]
    pub fn with_hands(
        catalog: CardCatalog,
        config: MatchConfig,
        hands: [Vec<CardInstance>; 2],
    ) -> Self {
        let [first_hand, second_hand] = hands;
        let mut players = Self::empty_players(&config);
        players[0].hand = first_hand.into();
        players[1].hand = second_hand.into();

        Self {
            config,
            catalog,
            ids: InstanceIdGen::sequential(),
            state: MatchState::new(players),
            phase: Phase::ActiveTurn,
            handoff_at: None,
        }
    }

    /// Create an engine over a prebuilt state and phase.
    ///
    /// This bypasses the construction invariants and exists for test
    /// fixtures; regular callers go through [`Engine::new`].
    #[must_use]
    pub fn with_state(
        catalog: CardCatalog,
        config: MatchConfig,
        state: MatchState,
        phase: Phase,
    ) -> Self {
        Self {
            config,
            catalog,
            ids: InstanceIdGen::sequential(),
            state,
            phase,
            handoff_at: None,
        }
    }

    fn empty_players(config: &MatchConfig) -> [Player; 2] {
        [
            Player::new(
                HUMAN_SEAT,
                config.player_names[0].clone(),
                config.starting_hp,
                config.starting_stones,
            ),
            Player::new(
                AUTOMATED_SEAT,
                config.player_names[1].clone(),
                config.starting_hp,
                config.starting_stones,
            ),
        ]
    }

    fn fresh_state(
        catalog: &CardCatalog,
        config: &MatchConfig,
        ids: &mut InstanceIdGen,
    ) -> MatchState {
        let mut players = Self::empty_players(config);
        for player in &mut players {
            player.hand = catalog.stamp_all(ids).into();
            player.deck = catalog.stamp_all(ids).into();
        }
        MatchState::new(players)
    }

    // === Snapshot surface ===

    /// Current phase tag.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Read-only view of the match state.
    #[must_use]
    pub fn state(&self) -> &MatchState {
        &self.state
    }

    /// Detached snapshot of the match state. Cheap: hands and decks are
    /// persistent vectors.
    #[must_use]
    pub fn snapshot(&self) -> MatchState {
        self.state.clone()
    }

    /// The match configuration.
    #[must_use]
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// The catalog this match plays with.
    #[must_use]
    pub fn catalog(&self) -> &CardCatalog {
        &self.catalog
    }

    // === Intent dispatch ===

    /// Dispatch an intent.
    ///
    /// Accepted only during `ActiveTurn`; in any other phase the intent
    /// is dropped without touching state. Guard failures inside a
    /// handler are equally silent.
    pub fn dispatch(&mut self, intent: Intent) {
        if self.phase != Phase::ActiveTurn {
            return;
        }

        match intent {
            Intent::SelectCard(card) => self.select_card(card),
            Intent::SelectCell(cell) => self.select_cell(cell),
            Intent::PlaceCard { card, cell } => self.place_card(card, cell),
            Intent::Attack { attacker, target } => self.attack(attacker, target),
            Intent::ResetSelection => self.state.clear_selections(),
            Intent::EndTurn => self.end_turn(),
        }

        self.check_victory();
    }

    /// Drive the automated handoff timer.
    ///
    /// Returns true when the handoff fired and control returned to the
    /// active phase.
    pub fn poll(&mut self, now: Instant) -> bool {
        if self.phase != Phase::AutomatedTurn {
            return false;
        }
        match self.handoff_at {
            Some(due) if now >= due => {
                self.finish_automated_turn();
                true
            }
            _ => false,
        }
    }

    /// Complete the automated phase immediately, cancelling the timer.
    ///
    /// No-op outside `AutomatedTurn`.
    pub fn force_handoff(&mut self) {
        if self.phase == Phase::AutomatedTurn {
            self.finish_automated_turn();
        }
    }

    /// Reset to a fresh match from the same catalog and configuration.
    ///
    /// Cancels any pending handoff timer.
    pub fn restart(&mut self) {
        self.handoff_at = None;
        self.state = Self::fresh_state(&self.catalog, &self.config, &mut self.ids);
        self.phase = Phase::ActiveTurn;
    }

    // === Intent handlers ===

    fn select_card(&mut self, card: InstanceId) {
        let seat = self.state.active;

        if let Some(cell) = self.state.selected_cell {
            if self.state.can_place(seat, card, cell) {
                self.state.place(seat, card, cell);
                self.state.clear_selections();
                return;
            }
        }

        if self.state.player(seat).hand_card(card).is_some() {
            self.state.selected_card = Some(card);
        }
    }

    fn select_cell(&mut self, pos: CellPos) {
        let seat = self.state.active;

        if let Some(card) = self.state.selected_card {
            if self.state.can_place(seat, card, pos) {
                self.state.place(seat, card, pos);
                self.state.clear_selections();
                return;
            }
        }

        let cell = self.state.player(seat).grid.cell(pos);
        self.state.selected_monster = cell.monster.as_ref().map(|m| m.instance_id());
        self.state.selected_cell = Some(pos);
    }

    fn place_card(&mut self, card: InstanceId, cell: CellPos) {
        let seat = self.state.active;
        if self.state.can_place(seat, card, cell) {
            self.state.place(seat, card, cell);
            self.state.clear_selections();
        }
    }

    fn attack(&mut self, attacker: InstanceId, target: InstanceId) {
        let Some((attacker_seat, attacker_pos)) = self.state.find_on_field(attacker) else {
            return;
        };
        let Some((target_seat, target_pos)) = self.state.find_on_field(target) else {
            return;
        };
        if attacker_seat == target_seat {
            return;
        }

        let attacker_cell = self.state.player(attacker_seat).grid.cell(attacker_pos);
        if attacker_cell.resting {
            return;
        }

        // The default attack is always the first command.
        let (damage, range) = {
            let monster = attacker_cell
                .monster
                .as_ref()
                .expect("Attacker was found on the field");
            let command = monster.stats().primary_command();
            (command.damage, command.range)
        };

        if !combat::is_legal_target(attacker_pos, target_pos, range) {
            return;
        }

        let grid = &mut self.state.player_mut(target_seat).grid;
        let destroyed = {
            let monster = grid
                .cell_mut(target_pos)
                .monster
                .as_mut()
                .expect("Target was found on the field");
            monster.hp = combat::apply_damage(monster.hp, damage);
            combat::is_destroyed(monster.hp)
        };
        if destroyed {
            grid.remove(target_pos);
        }
    }

    fn end_turn(&mut self) {
        self.switch_turn();

        let incoming = self.state.active;
        if incoming == AUTOMATED_SEAT && self.config.automated_opponent {
            self.begin_automated_turn();
        } else {
            self.state.player_mut(incoming).grid.advance_back_row();
        }
    }

    // === Transitions ===

    /// Advance the active seat, clear selections, and clear resting flags
    /// on the incoming seat's occupied cells.
    fn switch_turn(&mut self) {
        let incoming = self.state.active.opponent();
        self.state.active = incoming;
        self.state.clear_selections();
        self.state.player_mut(incoming).grid.clear_resting();
    }

    /// Automated phase entry: back-row advance, the full policy, then the
    /// handoff timer. All of it commits before anyone observes the state.
    fn begin_automated_turn(&mut self) {
        self.phase = Phase::AutomatedTurn;

        let seat = self.state.active;
        self.state.player_mut(seat).grid.advance_back_row();
        policy::run_automated_turn(&mut self.state, seat, self.config.automated_attacks);

        self.check_victory();
        if self.phase == Phase::AutomatedTurn {
            self.handoff_at = Some(Instant::now() + self.config.handoff_delay);
        }
    }

    fn finish_automated_turn(&mut self) {
        self.handoff_at = None;
        self.switch_turn();
        self.phase = Phase::ActiveTurn;

        let incoming = self.state.active;
        self.state.player_mut(incoming).grid.advance_back_row();
        self.check_victory();
    }

    fn check_victory(&mut self) {
        if self.phase == Phase::MatchOver {
            return;
        }
        if let Some(loser) = self.state.defeated() {
            self.state.winner = Some(loser.opponent());
            self.phase = Phase::MatchOver;
            self.handoff_at = None;
        }
    }
}
