//! Capability traits: the narrow surfaces entities expose to orchestrators
//!
//! The seller transacts with the till only through [`TicketVendor`], never
//! through raw field access. Tests substitute scripted implementations.

use crate::domain::entities::{Amount, Ticket, TicketOffice};
use crate::domain::error::DomainError;

/// The till side of an admission: issue tickets, take payments.
pub trait TicketVendor {
    /// Remove and return the next ticket from the pool, in issuance order.
    fn issue(&mut self) -> Result<Ticket, DomainError>;

    /// Accumulate a received payment.
    fn receive(&mut self, amount: Amount);

    /// Return an issued ticket whose hold was refused.
    ///
    /// The ticket goes back to the front of the pool so issuance order is
    /// preserved.
    fn restock(&mut self, ticket: Ticket);
}

impl TicketVendor for TicketOffice {
    fn issue(&mut self) -> Result<Ticket, DomainError> {
        self.pop_front().ok_or(DomainError::TicketUnavailable)
    }

    fn receive(&mut self, amount: Amount) {
        self.accumulate(amount);
    }

    fn restock(&mut self, ticket: Ticket) {
        self.push_front(ticket);
    }
}
