use super::cards_types::Suit;

pub const MIN_PLAYERS: usize = 2;
pub const MAX_PLAYERS: usize = 4;
pub const DECK_SIZE: usize = 52;

/// Spades are the permanent trump suit in Call Break.
pub const TRUMP: Suit = Suit::Spades;

/// Cards dealt to each player for a given roster size (contiguous equal
/// blocks; the remainder is set aside, never dealt).
pub fn hand_size_for(players: usize) -> usize {
    DECK_SIZE / players
}

pub fn leftover_for(players: usize) -> usize {
    DECK_SIZE % players
}
