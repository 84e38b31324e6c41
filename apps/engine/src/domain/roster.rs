//! Roster management: joining and leaving the table.

use super::bidding;
use super::rules::MAX_PLAYERS;
use super::scoring::RoundReport;
use super::state::{self, Phase, PlayerId, SeatState, Session};
use super::tricks::{self, TrickResult};
use crate::errors::domain::{ConflictKind, DomainError, NotFoundKind};

/// Add a player to the table.
///
/// Only possible while the table is idle; the seat order is join order and
/// fixes the turn rotation for every round until the player leaves.
pub fn join(state: &mut Session, player: PlayerId) -> Result<(), DomainError> {
    if state.phase != Phase::Idle {
        return Err(DomainError::conflict(
            ConflictKind::AlreadyInProgress,
            "A game is already in progress; wait for the next round",
        ));
    }
    if state.seat_index(&player).is_some() {
        return Err(DomainError::conflict(
            ConflictKind::AlreadyJoined,
            "You're already in the game",
        ));
    }
    if state.seats.len() >= MAX_PLAYERS {
        return Err(DomainError::conflict(
            ConflictKind::TableFull,
            "The table seats at most 4 players",
        ));
    }
    state.seats.push(SeatState::new(player));
    Ok(())
}

/// Result of removing a player, describing the knock-on transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaveOutcome {
    /// The table emptied and the session fully reset.
    pub roster_emptied: bool,
    /// Set when the removal left every remaining seat having played, which
    /// completes the trick on the spot.
    pub resolved_trick: Option<TrickResult>,
    /// Set when the removal ended the round (last cards left with the leaver).
    pub round_over: Option<RoundReport>,
    /// Player expected to act after the removal, if any.
    pub next_turn: Option<PlayerId>,
}

/// Remove a player and every trace of their round data.
///
/// Their hand, bid, trick counters, and any cards they contributed to the
/// current trick all go with them; the lead suit is recomputed from the
/// first remaining play. If the leaver held the turn it passes to the next
/// remaining seat in order. An emptied table performs a full reset.
pub fn leave(state: &mut Session, player: &str) -> Result<LeaveOutcome, DomainError> {
    let idx = state
        .seat_index(player)
        .ok_or_else(|| DomainError::not_found(NotFoundKind::NotInRoster, "You're not in the game"))?;

    state.seats.remove(idx);
    state.current_trick.retain(|(p, _)| p != player);
    state.lead_suit = state.current_trick.first().map(|(_, c)| c.suit);

    if state.seats.is_empty() {
        state.turn = None;
        state::reset_round(state);
        return Ok(LeaveOutcome {
            roster_emptied: true,
            resolved_trick: None,
            round_over: None,
            next_turn: None,
        });
    }

    // Re-anchor the turn index to the shrunk seat vector. When the leaver
    // held the turn, the seat that followed them now sits at the same index.
    if let Some(turn) = state.turn {
        if turn >= idx {
            let shifted = if turn == idx { turn } else { turn - 1 };
            state.turn = Some(shifted % state.seats.len());
        }
    }

    // The leaver may have been the last seat blocking a phase transition.
    if state.phase == Phase::Bidding {
        bidding::complete_if_all_bid(state);
    }
    let resolved_trick = tricks::resolve_full_trick(state);
    let round_over = tricks::finish_if_round_over(state);

    let next_turn = if round_over.is_some() {
        None
    } else {
        state.current_player().cloned()
    };

    Ok(LeaveOutcome {
        roster_emptied: false,
        resolved_trick,
        round_over,
        next_turn,
    })
}
