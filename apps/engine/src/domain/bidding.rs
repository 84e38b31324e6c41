//! Bidding: one declared trick target per seat before play starts.

use super::state::{Phase, PlayerId, Session};
use crate::errors::domain::{DomainError, NotFoundKind, ValidationKind};

/// Result of recording a bid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BidOutcome {
    /// Whether this was the final outstanding bid.
    pub bidding_complete: bool,
    /// First turn holder, set once bidding completes.
    pub first_turn: Option<PlayerId>,
}

/// Record a bid for `who`.
///
/// Any `u8` is accepted: the bid range is deliberately unconstrained (no
/// check against hand size). Bids arrive in any order; the phase flips to
/// Playing when the last outstanding seat has bid, with the first seat to
/// act chosen deterministically as seat 0.
pub fn place_bid(state: &mut Session, who: &str, bid: u8) -> Result<BidOutcome, DomainError> {
    let idx = state.seat_index(who).ok_or_else(|| {
        DomainError::not_found(NotFoundKind::NotInGame, "You have not joined this game")
    })?;

    if state.phase != Phase::Bidding {
        return Err(DomainError::validation(
            ValidationKind::WrongPhase,
            "Bids are only accepted during the bidding phase",
        ));
    }

    if state.seats[idx].bid.is_some() {
        return Err(DomainError::validation(
            ValidationKind::DuplicateBid,
            "You have already bid this round",
        ));
    }

    state.seats[idx].bid = Some(bid);

    let first_turn = complete_if_all_bid(state);
    Ok(BidOutcome {
        bidding_complete: first_turn.is_some(),
        first_turn,
    })
}

/// Transition Bidding -> Playing once every seat has bid.
///
/// Shared with roster removal: a leaver may have been the only seat without
/// a bid, in which case the remaining table is ready to play.
pub(crate) fn complete_if_all_bid(state: &mut Session) -> Option<PlayerId> {
    if state.phase != Phase::Bidding
        || state.seats.is_empty()
        || state.seats.iter().any(|s| s.bid.is_none())
    {
        return None;
    }
    state.phase = Phase::Playing;
    state.turn = Some(0);
    Some(state.seats[0].player.clone())
}
