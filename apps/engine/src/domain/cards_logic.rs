//! Card game logic: checking suits in hands, trick resolution

use super::cards_types::{Card, Rank, Suit};
use super::rules::TRUMP;
use super::state::PlayerId;

pub fn hand_has_suit(hand: &[Card], suit: Suit) -> bool {
    hand.iter().any(|c| c.suit == suit)
}

/// Highest rank of `suit` among the plays so far, if any.
pub fn highest_of_suit(plays: &[(PlayerId, Card)], suit: Suit) -> Option<Rank> {
    plays
        .iter()
        .filter(|(_, c)| c.suit == suit)
        .map(|(_, c)| c.rank)
        .max()
}

/// Cards in `hand` that follow `lead` and strictly beat the best lead-suit
/// card already on the table.
pub fn cards_beating_lead(hand: &[Card], lead: Suit, best: Rank) -> Vec<Card> {
    hand.iter()
        .copied()
        .filter(|c| c.suit == lead && c.rank > best)
        .collect()
}

/// Winner of a completed trick: index into `plays`.
///
/// The lead-suit subset decides first; if nobody followed the lead suit the
/// highest trump played wins. Ties cannot occur since every card appears at
/// most once per trick.
pub fn trick_winner(plays: &[(PlayerId, Card)], lead: Suit) -> Option<usize> {
    if plays.is_empty() {
        return None;
    }
    let best_in = |suit: Suit| {
        plays
            .iter()
            .enumerate()
            .filter(|(_, (_, c))| c.suit == suit)
            .max_by_key(|(_, (_, c))| c.rank)
            .map(|(i, _)| i)
    };
    best_in(lead).or_else(|| best_in(TRUMP))
}
