use thiserror::Error;

use crate::errors::domain::{
    ConflictKind, DomainError, InfraErrorKind, NotFoundKind, ValidationKind,
};

/// Application-level error surfaced to adapters for user display.
///
/// Every variant carries a stable SCREAMING_SNAKE code so adapters can match
/// on it without parsing the human-readable detail.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {detail}")]
    Validation { code: &'static str, detail: String },
    #[error("Conflict: {detail}")]
    Conflict { code: &'static str, detail: String },
    #[error("Not found: {detail}")]
    NotFound { code: &'static str, detail: String },
    #[error("I/O error: {detail}")]
    Io { detail: String },
    #[error("Configuration error: {detail}")]
    Config { detail: String },
    #[error("Internal error: {detail}")]
    Internal { detail: String },
}

impl AppError {
    /// Stable user-facing code for this error.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Validation { code, .. } => code,
            AppError::Conflict { code, .. } => code,
            AppError::NotFound { code, .. } => code,
            AppError::Io { .. } => "IO_ERROR",
            AppError::Config { .. } => "CONFIG_ERROR",
            AppError::Internal { .. } => "INTERNAL",
        }
    }

    pub fn io(detail: impl Into<String>) -> Self {
        Self::Io {
            detail: detail.into(),
        }
    }

    pub fn config(detail: impl Into<String>) -> Self {
        Self::Config {
            detail: detail.into(),
        }
    }

    pub fn internal(detail: impl Into<String>) -> Self {
        Self::Internal {
            detail: detail.into(),
        }
    }
}

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(kind, detail) => {
                let code = match kind {
                    ValidationKind::InsufficientPlayers => "INSUFFICIENT_PLAYERS",
                    ValidationKind::WrongPhase => "WRONG_PHASE",
                    ValidationKind::NotYourTurn => "NOT_YOUR_TURN",
                    ValidationKind::CardNotHeld => "CARD_NOT_HELD",
                    ValidationKind::MustBeatLeadSuit => "MUST_BEAT_LEAD_SUIT",
                    ValidationKind::MustThrowTrump => "MUST_THROW_TRUMP",
                    ValidationKind::DuplicateBid => "DUPLICATE_BID",
                    ValidationKind::ParseCard => "PARSE_CARD",
                    _ => "VALIDATION",
                };
                AppError::Validation { code, detail }
            }
            DomainError::Conflict(kind, detail) => {
                let code = match kind {
                    ConflictKind::AlreadyInProgress => "ALREADY_IN_PROGRESS",
                    ConflictKind::AlreadyJoined => "ALREADY_JOINED",
                    ConflictKind::TableFull => "TABLE_FULL",
                    _ => "CONFLICT",
                };
                AppError::Conflict { code, detail }
            }
            DomainError::NotFound(kind, detail) => {
                let code = match kind {
                    NotFoundKind::NotInRoster => "NOT_IN_ROSTER",
                    NotFoundKind::NotInGame => "NOT_IN_GAME",
                    _ => "NOT_FOUND",
                };
                AppError::NotFound { code, detail }
            }
            DomainError::Infra(kind, detail) => match kind {
                InfraErrorKind::Io | InfraErrorKind::DataCorruption => AppError::Io { detail },
                _ => AppError::Internal { detail },
            },
        }
    }
}
