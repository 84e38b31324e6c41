use serde::{Deserialize, Serialize};

use super::cards_types::{Card, Suit};
use crate::errors::domain::DomainError;

/// Opaque stable identifier for a participant, owned by the adapter layer
/// (chat user id, console name, ...). The engine never interprets it.
pub type PlayerId = String;

/// Overall session progression phases.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum Phase {
    /// Table open, waiting for players to join.
    Idle,
    /// Hands dealt, players place bids in any order.
    Bidding,
    /// Tricks are being played.
    Playing,
    /// Round complete, scoring in progress. Transient: the session resets
    /// back to Idle within the same transition that finishes the round.
    Finished,
}

/// Per-seat state. The seat vector's order is join order and defines the
/// turn rotation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeatState {
    pub player: PlayerId,
    /// Private hand, sorted for display. Disclosed only to its owner.
    pub hand: Vec<Card>,
    /// Declared target trick count; None until the player bids this round.
    pub bid: Option<u8>,
    /// Tricks taken this round.
    pub tricks_won: u8,
    /// Rounds in which this player hit their bid exactly. Survives resets.
    pub wins: u32,
}

impl SeatState {
    pub fn new(player: PlayerId) -> Self {
        Self {
            player,
            hand: Vec::new(),
            bid: None,
            tricks_won: 0,
            wins: 0,
        }
    }
}

/// The session aggregate: one table, mutated only through the operations in
/// this module's siblings (roster, dealing, bidding, tricks, scoring).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub phase: Phase,
    /// Joined players in seating order; no duplicates.
    pub seats: Vec<SeatState>,
    /// Ordered plays of the active trick; length stays below the seat count.
    pub current_trick: Vec<(PlayerId, Card)>,
    /// Suit of the first card played this trick.
    pub lead_suit: Option<Suit>,
    /// Index into `seats` of the player expected to act; None until bidding
    /// completes and outside the Playing phase.
    pub turn: Option<usize>,
    /// Undealt remainder of the deck for this round (52 mod players cards).
    pub leftover: Vec<Card>,
    /// 1-based round counter, incremented on each full reset.
    pub round: u32,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            phase: Phase::Idle,
            seats: Vec::new(),
            current_trick: Vec::new(),
            lead_suit: None,
            turn: None,
            leftover: Vec::new(),
            round: 1,
        }
    }
}

impl Session {
    pub fn seat_index(&self, player: &str) -> Option<usize> {
        self.seats.iter().position(|s| s.player == player)
    }

    pub fn seat(&self, player: &str) -> Option<&SeatState> {
        self.seats.iter().find(|s| s.player == player)
    }

    /// Player expected to act, if a turn holder is defined.
    pub fn current_player(&self) -> Option<&PlayerId> {
        self.turn
            .and_then(|idx| self.seats.get(idx))
            .map(|s| &s.player)
    }

    /// Next seat in rotation after `idx`, wrapping.
    pub fn next_seat(&self, idx: usize) -> usize {
        (idx + 1) % self.seats.len()
    }

    pub fn all_hands_empty(&self) -> bool {
        self.seats.iter().all(|s| s.hand.is_empty())
    }
}

pub fn require_turn(state: &Session, ctx: &'static str) -> Result<usize, DomainError> {
    state.turn.ok_or_else(|| {
        DomainError::validation_other(format!("Invariant violated: turn must be set ({ctx})"))
    })
}

/// Full reset: clear all per-round state, return to Idle, advance the round
/// counter. The roster and per-player win tallies are kept.
///
/// Resetting an already-idle session is a no-op, so consecutive resets yield
/// identical states and the round counter only moves when a round actually
/// started.
pub fn reset_round(state: &mut Session) {
    if state.phase == Phase::Idle {
        return;
    }
    for seat in &mut state.seats {
        seat.hand.clear();
        seat.bid = None;
        seat.tricks_won = 0;
    }
    state.current_trick.clear();
    state.lead_suit = None;
    state.turn = None;
    state.leftover.clear();
    state.phase = Phase::Idle;
    state.round += 1;
}
