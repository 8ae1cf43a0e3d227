//! Rejection reasons for player actions.
//!
//! An `Err` from any session entry point means nothing changed. Rejections
//! are never fatal; some are surfaced through the notification slot using
//! their `Display` text.

use crate::ledger::Currency;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActionError {
    #[error("Not enough {currency} to {purpose}!")]
    InsufficientFunds {
        currency: Currency,
        purpose: &'static str,
    },

    #[error("{subject} is not {expected}")]
    WrongStatus {
        subject: String,
        expected: &'static str,
    },

    #[error("{0} is on cooldown")]
    OnCooldown(String),

    #[error("Max artifacts equipped ({0})")]
    ArtifactCapReached(usize),

    #[error("{0} has already been purchased")]
    AlreadyPurchased(String),

    #[error("{0} is already at max level")]
    MaxLevel(String),

    #[error("Requires level {required}")]
    LevelTooLow { required: u32 },

    #[error("No skill points available")]
    NoSkillPoints,

    #[error("Unknown {kind}: {id}")]
    UnknownId { kind: &'static str, id: String },

    #[error("You are not ready to ascend yet.")]
    NotReadyToAscend,

    #[error("The Monarch system is still sealed")]
    MonarchLocked,

    #[error("Allegiance has already been sworn")]
    MonarchAlreadyChosen,

    #[error("Tier {0} is locked")]
    TierLocked(u32),

    #[error("Rewards have already been claimed")]
    AlreadyClaimed,

    #[error("No gate run is active")]
    NoActiveRun,

    #[error("A gate run is already active")]
    RunAlreadyActive,

    #[error("Gate depth must be between 1 and 100 (got {0})")]
    InvalidDepth(u32),

    #[error("The session has been shut down")]
    SessionClosed,
}

impl ActionError {
    pub fn unknown(kind: &'static str, id: impl Into<String>) -> Self {
        ActionError::UnknownId {
            kind,
            id: id.into(),
        }
    }

    pub fn wrong_status(subject: impl Into<String>, expected: &'static str) -> Self {
        ActionError::WrongStatus {
            subject: subject.into(),
            expected,
        }
    }
}
