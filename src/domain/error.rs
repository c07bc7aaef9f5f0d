//! Domain-level errors (no external dependencies)

use thiserror::Error;

use crate::domain::entities::{Amount, Ticket};

/// Domain errors represent admission rule violations.
/// These are independent of orchestration and CLI concerns.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("no tickets left at the box office")]
    TicketUnavailable,

    #[error("insufficient funds: fee is {required}, bag holds {available}")]
    InsufficientFunds { required: Amount, available: Amount },

    #[error("audience already holds a ticket")]
    AlreadyAdmitted,
}

/// A refused [`Bag::hold`](crate::domain::Bag::hold).
///
/// Carries the un-stored ticket back to the caller so it can be restocked;
/// a refused hold never loses a ticket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HoldRefused {
    pub ticket: Ticket,
    pub reason: DomainError,
}

impl std::fmt::Display for HoldRefused {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "hold refused: {}", self.reason)
    }
}

impl std::error::Error for HoldRefused {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.reason)
    }
}
