//! Public snapshot API for observing session state without exposing hands.

use serde::{Deserialize, Serialize};

use super::cards_types::{Card, Suit};
use super::state::{Phase, PlayerId, Session};

/// Public info about a single seat: everything except the private hand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatPublic {
    pub player: PlayerId,
    pub cards_left: usize,
    pub bid: Option<u8>,
    pub tricks_won: u8,
    pub wins: u32,
}

/// Safe-to-broadcast view of the whole table, used by the `score` verb and
/// any observer surface. Hands appear only as counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionPublic {
    pub phase: Phase,
    pub round: u32,
    pub seats: Vec<SeatPublic>,
    pub current_trick: Vec<(PlayerId, Card)>,
    pub lead_suit: Option<Suit>,
    pub to_act: Option<PlayerId>,
    pub undealt_cards: usize,
}

/// Produce a redacted snapshot of the current session state.
pub fn public_snapshot(state: &Session) -> SessionPublic {
    SessionPublic {
        phase: state.phase,
        round: state.round,
        seats: state
            .seats
            .iter()
            .map(|seat| SeatPublic {
                player: seat.player.clone(),
                cards_left: seat.hand.len(),
                bid: seat.bid,
                tricks_won: seat.tricks_won,
                wins: seat.wins,
            })
            .collect(),
        current_trick: state.current_trick.clone(),
        lead_suit: state.lead_suit,
        to_act: state.current_player().cloned(),
        undealt_cards: state.leftover.len(),
    }
}
