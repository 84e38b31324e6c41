//! Test-only session builders for domain unit tests.

use crate::domain::state::{Phase, SeatState, Session};
use crate::domain::Card;

pub fn parse_cards(tokens: &[&str]) -> Vec<Card> {
    tokens
        .iter()
        .map(|t| t.parse::<Card>().expect("hardcoded valid card token"))
        .collect()
}

/// Idle session with the given players seated, nothing dealt.
pub fn idle_session(players: &[&str]) -> Session {
    let mut session = Session::default();
    for name in players {
        session.seats.push(SeatState::new((*name).to_string()));
    }
    session
}

/// Session mid-bidding with the given named hands; no bids placed yet.
pub fn bidding_session(hands: &[(&str, &[&str])]) -> Session {
    let mut session = idle_session(&[]);
    for (name, hand) in hands {
        let mut seat = SeatState::new((*name).to_string());
        seat.hand = parse_cards(hand);
        session.seats.push(seat);
    }
    session.phase = Phase::Bidding;
    session
}

/// Session in the Playing phase with the given named hands, all bids at 0,
/// turn at seat 0.
pub fn playing_session(hands: &[(&str, &[&str])]) -> Session {
    let mut session = bidding_session(hands);
    for seat in &mut session.seats {
        seat.bid = Some(0);
    }
    session.phase = Phase::Playing;
    session.turn = Some(0);
    session
}
