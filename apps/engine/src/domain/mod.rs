//! Domain layer: pure game logic types and helpers.

pub mod bidding;
pub mod cards_logic;
pub mod cards_parsing;
pub mod cards_serde;
pub mod cards_types;
pub mod dealing;
pub mod roster;
pub mod rules;
pub mod scoring;
pub mod snapshot;
pub mod state;
pub mod tricks;

#[cfg(test)]
mod test_state_helpers;

#[cfg(test)]
mod tests_integration;
#[cfg(test)]
mod tests_roster;
#[cfg(test)]
mod tests_scoring;
#[cfg(test)]
mod tests_snapshot;

// Re-exports for ergonomics
pub use cards_logic::{hand_has_suit, trick_winner};
pub use cards_parsing::parse_card_phrase;
pub use cards_types::{Card, Rank, Suit};
pub use rules::TRUMP;
pub use state::{Phase, PlayerId, Session};
