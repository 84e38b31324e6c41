//! Session service: the single serialized command loop over the table.
//!
//! Every verb acquires the session mutex, runs the pure domain transition,
//! clones the resulting aggregate, and releases the lock before doing any
//! I/O. Snapshot persistence and notifications always happen after release,
//! so the lock is never held across unbounded-latency work.
//!
//! Durability is best-effort: a failed snapshot save is logged as a warning
//! and the committed in-memory transition stands. Notification delivery is
//! fire-and-forget.

use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;
use rand::Rng;
use tracing::{debug, info, warn};

use crate::domain::bidding::{self, BidOutcome};
use crate::domain::dealing::{self, DealOutcome};
use crate::domain::roster::{self, LeaveOutcome};
use crate::domain::scoring::RoundReport;
use crate::domain::snapshot::{public_snapshot, SessionPublic};
use crate::domain::state::{self, Phase, PlayerId, Session};
use crate::domain::tricks::{self, PlayOutcome};
use crate::domain::Card;
use crate::error::AppError;

/// Durable snapshot/restore of the session aggregate.
///
/// Consumed, never implemented, by the engine; `load` returning `None`
/// means no snapshot exists yet and the caller substitutes a fresh table.
#[async_trait]
pub trait SnapshotStore: Send + Sync {
    async fn load(&self) -> Result<Option<Session>, AppError>;
    async fn save(&self, session: &Session) -> Result<(), AppError>;
}

/// Best-effort outbound notifications. Delivery failure must never fail the
/// underlying state transition; the service downgrades errors to warnings.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn hand_dealt(&self, player: &str, hand: &[Card]) -> Result<(), AppError>;
    async fn trick_won(&self, winner: &str, card: Card) -> Result<(), AppError>;
    async fn turn_started(&self, player: &str) -> Result<(), AppError>;
    async fn game_over(&self, report: &RoundReport) -> Result<(), AppError>;
}

pub struct SessionService {
    state: Mutex<Session>,
    store: Arc<dyn SnapshotStore>,
    notifier: Arc<dyn Notifier>,
}

impl SessionService {
    /// Restore the session from the snapshot store, or start a fresh table
    /// when no snapshot exists.
    pub async fn restore(
        store: Arc<dyn SnapshotStore>,
        notifier: Arc<dyn Notifier>,
    ) -> Result<Self, AppError> {
        let session = store.load().await?.unwrap_or_default();
        info!(round = session.round, phase = ?session.phase, "session restored");
        Ok(Self {
            state: Mutex::new(session),
            store,
            notifier,
        })
    }

    pub async fn join(&self, player: PlayerId) -> Result<(), AppError> {
        let snapshot = {
            let mut state = self.state.lock();
            roster::join(&mut state, player.clone())?;
            state.clone()
        };
        info!(%player, seats = snapshot.seats.len(), "player joined");
        self.persist(&snapshot).await;
        Ok(())
    }

    pub async fn leave(&self, player: &str) -> Result<LeaveOutcome, AppError> {
        let (outcome, snapshot) = {
            let mut state = self.state.lock();
            let outcome = roster::leave(&mut state, player)?;
            (outcome, state.clone())
        };
        info!(%player, "player left");
        self.persist(&snapshot).await;
        if let Some(trick) = &outcome.resolved_trick {
            self.notify_trick(trick.winner.clone(), trick.card).await;
        }
        if let Some(report) = &outcome.round_over {
            self.notify_game_over(report).await;
        } else if snapshot.phase == Phase::Playing {
            if let Some(next) = &outcome.next_turn {
                self.notify_turn(next).await;
            }
        }
        Ok(outcome)
    }

    /// Start a round: deal, open bidding, and tell each player their hand.
    pub async fn start(&self) -> Result<DealOutcome, AppError> {
        let seed = rand::rng().random::<u64>();
        let (outcome, snapshot) = {
            let mut state = self.state.lock();
            let outcome = dealing::start_round(&mut state, seed)?;
            (outcome, state.clone())
        };
        info!(
            players = snapshot.seats.len(),
            hand_size = outcome.hand_size,
            undealt = outcome.leftover.len(),
            "round started"
        );
        self.persist(&snapshot).await;
        for seat in &snapshot.seats {
            if let Err(err) = self.notifier.hand_dealt(&seat.player, &seat.hand).await {
                warn!(player = %seat.player, %err, "failed to deliver hand");
            }
        }
        Ok(outcome)
    }

    pub async fn bid(&self, player: &str, amount: u8) -> Result<BidOutcome, AppError> {
        let (outcome, snapshot) = {
            let mut state = self.state.lock();
            let outcome = bidding::place_bid(&mut state, player, amount)?;
            (outcome, state.clone())
        };
        debug!(%player, amount, complete = outcome.bidding_complete, "bid recorded");
        self.persist(&snapshot).await;
        if let Some(first) = &outcome.first_turn {
            self.notify_turn(first).await;
        }
        Ok(outcome)
    }

    pub async fn play(&self, player: &str, card: Card) -> Result<PlayOutcome, AppError> {
        let (outcome, snapshot) = {
            let mut state = self.state.lock();
            let outcome = tricks::play_card(&mut state, player, card)?;
            (outcome, state.clone())
        };
        debug!(%player, %card, "card played");
        self.persist(&snapshot).await;
        if let Some(trick) = &outcome.trick {
            self.notify_trick(trick.winner.clone(), trick.card).await;
        }
        if let Some(report) = &outcome.round_over {
            self.notify_game_over(report).await;
        } else if let Some(next) = &outcome.next_turn {
            self.notify_turn(next).await;
        }
        Ok(outcome)
    }

    /// Read-only standings view; hands are redacted to counts.
    pub fn standings(&self) -> SessionPublic {
        let state = self.state.lock();
        public_snapshot(&state)
    }

    /// Legal cards for a player right now (empty outside their turn phases).
    pub fn legal_moves(&self, player: &str) -> Vec<Card> {
        let state = self.state.lock();
        tricks::legal_moves(&state, player)
    }

    /// Explicit full reset of the current round. Keeps the roster.
    pub async fn reset(&self) -> Result<(), AppError> {
        let snapshot = {
            let mut state = self.state.lock();
            state::reset_round(&mut state);
            state.clone()
        };
        info!(round = snapshot.round, "session reset");
        self.persist(&snapshot).await;
        Ok(())
    }

    async fn persist(&self, snapshot: &Session) {
        if let Err(err) = self.store.save(snapshot).await {
            warn!(%err, "snapshot save failed; in-memory state stands");
        }
    }

    async fn notify_turn(&self, player: &str) {
        if let Err(err) = self.notifier.turn_started(player).await {
            warn!(%player, %err, "failed to deliver turn notification");
        }
    }

    async fn notify_trick(&self, winner: PlayerId, card: Card) {
        if let Err(err) = self.notifier.trick_won(&winner, card).await {
            warn!(%winner, %err, "failed to deliver trick result");
        }
    }

    async fn notify_game_over(&self, report: &RoundReport) {
        if let Err(err) = self.notifier.game_over(report).await {
            warn!(%err, "failed to deliver game-over report");
        }
    }
}
