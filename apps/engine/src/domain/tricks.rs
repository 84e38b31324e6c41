//! Turn and trick state machine: play legality, trick resolution, round end.

use super::cards_logic::{cards_beating_lead, hand_has_suit, highest_of_suit, trick_winner};
use super::cards_types::{Card, Suit};
use super::rules::TRUMP;
use super::scoring::{self, RoundReport};
use super::state::{require_turn, Phase, PlayerId, Session};
use crate::errors::domain::{DomainError, ValidationKind};

/// A resolved trick: who took it and with which card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrickResult {
    pub winner: PlayerId,
    pub card: Card,
}

/// Result of playing a card, describing what state changes occurred.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayOutcome {
    /// Set when this play completed a trick.
    pub trick: Option<TrickResult>,
    /// Set when this play emptied the last hand and the round was scored.
    pub round_over: Option<RoundReport>,
    /// Player expected to act next; None once the round is over.
    pub next_turn: Option<PlayerId>,
}

/// What the legality ladder demands of the next card.
enum PlayRequirement {
    /// Leading, or void in both the lead suit (above the table) and trump.
    Any,
    /// Holding lead-suit cards that beat the table: one of them must be played.
    BeatLead(Vec<Card>),
    /// Cannot beat the lead suit but holds trump: a spade must be thrown.
    ThrowTrump,
}

fn play_requirement(
    hand: &[Card],
    trick: &[(PlayerId, Card)],
    lead: Option<Suit>,
) -> PlayRequirement {
    if trick.is_empty() {
        return PlayRequirement::Any;
    }
    let Some(lead) = lead else {
        return PlayRequirement::Any;
    };
    let higher = match highest_of_suit(trick, lead) {
        Some(best) => cards_beating_lead(hand, lead, best),
        None => hand.iter().copied().filter(|c| c.suit == lead).collect(),
    };
    if !higher.is_empty() {
        PlayRequirement::BeatLead(higher)
    } else if hand_has_suit(hand, TRUMP) {
        PlayRequirement::ThrowTrump
    } else {
        PlayRequirement::Any
    }
}

/// Compute legal cards the player may play, independent of turn enforcement.
pub fn legal_moves(state: &Session, who: &str) -> Vec<Card> {
    if state.phase != Phase::Playing {
        return Vec::new();
    }
    let Some(seat) = state.seat(who) else {
        return Vec::new();
    };
    let mut legal = match play_requirement(&seat.hand, &state.current_trick, state.lead_suit) {
        PlayRequirement::Any => seat.hand.clone(),
        PlayRequirement::BeatLead(higher) => higher,
        PlayRequirement::ThrowTrump => seat
            .hand
            .iter()
            .copied()
            .filter(|c| c.suit == TRUMP)
            .collect(),
    };
    legal.sort();
    legal
}

/// Play a card into the current trick, enforcing phase, turn, and legality.
pub fn play_card(state: &mut Session, who: &str, card: Card) -> Result<PlayOutcome, DomainError> {
    if state.phase != Phase::Playing {
        return Err(DomainError::validation(
            ValidationKind::WrongPhase,
            "Cards can only be played after bidding completes",
        ));
    }

    let turn = require_turn(state, "play_card")?;
    if state.seats[turn].player != who {
        return Err(DomainError::validation(
            ValidationKind::NotYourTurn,
            "It is not your turn",
        ));
    }

    let pos = state.seats[turn].hand.iter().position(|&c| c == card);
    let Some(pos) = pos else {
        return Err(DomainError::validation(
            ValidationKind::CardNotHeld,
            "You don't have that card",
        ));
    };

    match play_requirement(
        &state.seats[turn].hand,
        &state.current_trick,
        state.lead_suit,
    ) {
        PlayRequirement::Any => {}
        PlayRequirement::BeatLead(higher) => {
            if !higher.contains(&card) {
                return Err(DomainError::validation(
                    ValidationKind::MustBeatLeadSuit,
                    "You must play a higher card of the lead suit",
                ));
            }
        }
        PlayRequirement::ThrowTrump => {
            if card.suit != TRUMP {
                return Err(DomainError::validation(
                    ValidationKind::MustThrowTrump,
                    "You must throw a spade when you cannot beat the lead suit",
                ));
            }
        }
    }

    // All checks passed: commit the play.
    if state.current_trick.is_empty() {
        state.lead_suit = Some(card.suit);
    }
    let removed = state.seats[turn].hand.remove(pos);
    state.current_trick.push((who.to_string(), removed));
    state.turn = Some(state.next_seat(turn));

    let trick = resolve_full_trick(state);
    let round_over = finish_if_round_over(state);
    let next_turn = if round_over.is_some() {
        None
    } else {
        state.current_player().cloned()
    };

    Ok(PlayOutcome {
        trick,
        round_over,
        next_turn,
    })
}

/// Resolve the trick once every seated player has contributed a card.
///
/// The winner takes the trick and leads the next one. Also invoked after a
/// roster removal, which can complete a trick that was one card short.
pub(crate) fn resolve_full_trick(state: &mut Session) -> Option<TrickResult> {
    if state.phase != Phase::Playing
        || state.current_trick.is_empty()
        || state.current_trick.len() < state.seats.len()
    {
        return None;
    }
    let lead = state.lead_suit?;
    let idx = trick_winner(&state.current_trick, lead)?;
    let (winner, card) = state.current_trick[idx].clone();
    let seat_idx = state.seat_index(&winner)?;

    state.seats[seat_idx].tricks_won += 1;
    state.current_trick.clear();
    state.lead_suit = None;
    state.turn = Some(seat_idx);

    Some(TrickResult { winner, card })
}

/// Score and reset once every hand is empty.
pub(crate) fn finish_if_round_over(state: &mut Session) -> Option<RoundReport> {
    if state.phase != Phase::Playing || !state.all_hands_empty() {
        return None;
    }
    state.phase = Phase::Finished;
    Some(scoring::finish_round(state))
}
