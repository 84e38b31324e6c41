//! Deck construction and seeded dealing.

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha12Rng;

use super::cards_types::{Card, Rank, Suit};
use super::rules::{hand_size_for, MIN_PLAYERS};
use super::state::{Phase, Session};
use crate::errors::domain::{DomainError, ValidationKind};

/// Generate a full 52-card deck in standard order.
pub fn full_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(52);
    for suit in Suit::ALL {
        for rank in Rank::ALL {
            deck.push(Card { suit, rank });
        }
    }
    deck
}

/// Shuffle + partition a fresh deck into `player_count` contiguous hands.
///
/// Returns the hands (sorted for display) and the undealt remainder
/// (`52 mod player_count` cards). Deterministic for a given seed; the
/// service draws the seed from OS entropy per round.
pub fn deal(player_count: usize, seed: u64) -> Result<(Vec<Vec<Card>>, Vec<Card>), DomainError> {
    if player_count < MIN_PLAYERS {
        return Err(DomainError::validation(
            ValidationKind::InsufficientPlayers,
            "Need at least 2 players to start",
        ));
    }

    let mut deck = full_deck();
    let mut rng = ChaCha12Rng::seed_from_u64(seed);
    deck.shuffle(&mut rng);

    let hand_size = hand_size_for(player_count);
    let mut hands = Vec::with_capacity(player_count);
    for player in 0..player_count {
        let start = player * hand_size;
        let mut hand = deck[start..start + hand_size].to_vec();
        hand.sort();
        hands.push(hand);
    }
    let leftover = deck[player_count * hand_size..].to_vec();

    Ok((hands, leftover))
}

/// Result of starting a round, reported to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DealOutcome {
    pub hand_size: usize,
    /// Cards set aside because the deck does not divide evenly.
    pub leftover: Vec<Card>,
}

/// Start a round: deal hands and open bidding.
///
/// Replaces every hand, zeroes trick counters, clears bids and the current
/// trick. Only valid from Idle with at least 2 seated players.
pub fn start_round(state: &mut Session, seed: u64) -> Result<DealOutcome, DomainError> {
    if state.phase != Phase::Idle {
        return Err(DomainError::validation(
            ValidationKind::WrongPhase,
            "A round is already in progress",
        ));
    }

    let (hands, leftover) = deal(state.seats.len(), seed)?;
    let hand_size = hands[0].len();

    for (seat, hand) in state.seats.iter_mut().zip(hands) {
        seat.hand = hand;
        seat.bid = None;
        seat.tricks_won = 0;
    }
    state.current_trick.clear();
    state.lead_suit = None;
    state.turn = None;
    state.leftover = leftover.clone();
    state.phase = Phase::Bidding;

    Ok(DealOutcome {
        hand_size,
        leftover,
    })
}
