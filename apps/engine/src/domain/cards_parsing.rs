//! Card parsing from string representations.
//!
//! Two forms are accepted: the compact 2-character token (`"AS"`, `"2C"`) via
//! `FromStr`, and the free-text phrase form players actually type
//! (`"10 hearts"`, `"queen of spades"`, `"a club"`) via [`parse_card_phrase`].
//! This is the single normalization point: the engine itself only ever
//! receives validated [`Card`] values.

use std::str::FromStr;

use super::cards_types::{Card, Rank, Suit};
use crate::errors::domain::{DomainError, ValidationKind};

impl FromStr for Card {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 2 {
            return Err(DomainError::validation(
                ValidationKind::ParseCard,
                format!("Parse card: {s}"),
            ));
        }
        let mut chars = s.chars();
        let rank_ch = chars.next().ok_or_else(|| {
            DomainError::validation(ValidationKind::ParseCard, format!("Parse card: {s}"))
        })?;
        let suit_ch = chars.next().ok_or_else(|| {
            DomainError::validation(ValidationKind::ParseCard, format!("Parse card: {s}"))
        })?;
        let rank = match rank_ch {
            '2' => Rank::Two,
            '3' => Rank::Three,
            '4' => Rank::Four,
            '5' => Rank::Five,
            '6' => Rank::Six,
            '7' => Rank::Seven,
            '8' => Rank::Eight,
            '9' => Rank::Nine,
            'T' => Rank::Ten,
            'J' => Rank::Jack,
            'Q' => Rank::Queen,
            'K' => Rank::King,
            'A' => Rank::Ace,
            _ => {
                return Err(DomainError::validation(
                    ValidationKind::ParseCard,
                    format!("Parse card: {s}"),
                ))
            }
        };
        let suit = match suit_ch {
            'C' => Suit::Clubs,
            'D' => Suit::Diamonds,
            'H' => Suit::Hearts,
            'S' => Suit::Spades,
            _ => {
                return Err(DomainError::validation(
                    ValidationKind::ParseCard,
                    format!("Parse card: {s}"),
                ))
            }
        };
        Ok(Card { suit, rank })
    }
}

fn rank_alias(token: &str) -> Option<Rank> {
    match token {
        "2" => Some(Rank::Two),
        "3" => Some(Rank::Three),
        "4" => Some(Rank::Four),
        "5" => Some(Rank::Five),
        "6" => Some(Rank::Six),
        "7" => Some(Rank::Seven),
        "8" => Some(Rank::Eight),
        "9" => Some(Rank::Nine),
        "10" | "t" | "ten" => Some(Rank::Ten),
        "j" | "jack" => Some(Rank::Jack),
        "q" | "queen" => Some(Rank::Queen),
        "k" | "king" => Some(Rank::King),
        "a" | "ace" => Some(Rank::Ace),
        _ => None,
    }
}

fn suit_alias(token: &str) -> Option<Suit> {
    match token {
        "club" | "clubs" => Some(Suit::Clubs),
        "diamond" | "diamonds" => Some(Suit::Diamonds),
        "heart" | "hearts" => Some(Suit::Hearts),
        "spade" | "spades" => Some(Suit::Spades),
        _ => None,
    }
}

/// Parse a free-text card phrase such as `"10 hearts"`, `"queen of spades"`,
/// or `"a club"`. Case-insensitive; a connecting `of` is ignored.
///
/// Falls back to the compact token form (`"AS"`) when the phrase is a single
/// word, so both notations work at every input site.
pub fn parse_card_phrase(input: &str) -> Result<Card, DomainError> {
    let lowered = input.trim().to_lowercase();
    let tokens: Vec<&str> = lowered
        .split_whitespace()
        .filter(|t| *t != "of")
        .collect();

    match tokens.as_slice() {
        [token] => token.to_uppercase().parse::<Card>(),
        [rank_tok, suit_tok] => {
            let rank = rank_alias(rank_tok).ok_or_else(|| {
                DomainError::validation(
                    ValidationKind::ParseCard,
                    format!("Unknown rank: {rank_tok}"),
                )
            })?;
            let suit = suit_alias(suit_tok).ok_or_else(|| {
                DomainError::validation(
                    ValidationKind::ParseCard,
                    format!("Unknown suit: {suit_tok}"),
                )
            })?;
            Ok(Card { suit, rank })
        }
        _ => Err(DomainError::validation(
            ValidationKind::ParseCard,
            format!("Use a form like `10 hearts`, `queen of spades`, or `AS`: {input}"),
        )),
    }
}
