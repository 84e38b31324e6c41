//! End-of-round scoring: bid-vs-actual comparison and winner set.

use serde::{Deserialize, Serialize};

use super::state::{self, PlayerId, Session};

/// One player's line in the round report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreLine {
    pub player: PlayerId,
    pub bid: Option<u8>,
    pub tricks_won: u8,
    pub success: bool,
}

/// Outcome of a completed round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundReport {
    pub round: u32,
    pub lines: Vec<ScoreLine>,
    /// Players whose trick count matched their bid exactly. Zero, one, or
    /// several winners are all valid outcomes.
    pub winners: Vec<PlayerId>,
}

/// Compare accumulated tricks against bids without mutating state.
pub fn round_report(state: &Session) -> RoundReport {
    let lines: Vec<ScoreLine> = state
        .seats
        .iter()
        .map(|seat| ScoreLine {
            player: seat.player.clone(),
            bid: seat.bid,
            tricks_won: seat.tricks_won,
            success: matches!(seat.bid, Some(b) if b == seat.tricks_won),
        })
        .collect();
    let winners = lines
        .iter()
        .filter(|l| l.success)
        .map(|l| l.player.clone())
        .collect();

    RoundReport {
        round: state.round,
        lines,
        winners,
    }
}

/// Apply the round outcome and perform the implicit full reset.
///
/// Winners' cross-round win tallies increment; everything per-round is
/// cleared and the session returns to Idle with the round counter advanced.
pub fn finish_round(state: &mut Session) -> RoundReport {
    let report = round_report(state);
    for seat in &mut state.seats {
        if report.winners.contains(&seat.player) {
            seat.wins += 1;
        }
    }
    state::reset_round(state);
    report
}
