//! Notifier that reports game events through the tracing pipeline.
//!
//! The default stand-in where no chat transport is wired up; real adapters
//! (a bot DM, a websocket push) implement the same trait.

use async_trait::async_trait;
use tracing::info;

use crate::domain::scoring::RoundReport;
use crate::domain::Card;
use crate::error::AppError;
use crate::services::Notifier;

pub struct LogNotifier;

fn join_cards(cards: &[Card]) -> String {
    cards
        .iter()
        .map(Card::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

#[async_trait]
impl Notifier for LogNotifier {
    async fn hand_dealt(&self, player: &str, hand: &[Card]) -> Result<(), AppError> {
        info!(%player, hand = %join_cards(hand), "hand dealt");
        Ok(())
    }

    async fn trick_won(&self, winner: &str, card: Card) -> Result<(), AppError> {
        info!(%winner, %card, "trick won");
        Ok(())
    }

    async fn turn_started(&self, player: &str) -> Result<(), AppError> {
        info!(%player, "next turn");
        Ok(())
    }

    async fn game_over(&self, report: &RoundReport) -> Result<(), AppError> {
        for line in &report.lines {
            info!(
                player = %line.player,
                bid = ?line.bid,
                tricks = line.tricks_won,
                success = line.success,
                "round result"
            );
        }
        info!(round = report.round, winners = ?report.winners, "round over");
        Ok(())
    }
}
