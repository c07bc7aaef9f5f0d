//! Admission service
//!
//! The seller mediates between an audience's bag and the box office till.
//! The charging rule itself lives in [`Bag::hold`](crate::domain::Bag::hold);
//! the seller only moves the ticket and banks whatever the bag reports as
//! charged.

use tracing::debug;

use crate::application::{ApplicationError, ApplicationResult};
use crate::domain::{Amount, Audience, TicketOffice, TicketVendor};

/// Agent mediating access to a ticket vendor's pool and till.
///
/// Generic over [`TicketVendor`] so tests can script the till; production
/// code uses the default [`TicketOffice`].
#[derive(Debug)]
pub struct TicketSeller<V = TicketOffice> {
    office: V,
}

impl<V: TicketVendor> TicketSeller<V> {
    pub fn new(office: V) -> Self {
        Self { office }
    }

    /// Read-only view of the office. The till changes only through
    /// [`TicketSeller::sell_to`].
    pub fn office(&self) -> &V {
        &self.office
    }

    /// Sell (or hand over, with an invitation) one ticket to an audience.
    ///
    /// Issues the next ticket, lets the audience's bag hold it, and banks the
    /// charged amount. A refused hold puts the ticket back in the pool and
    /// propagates the refusal; pool and till are then exactly as before the
    /// call.
    pub fn sell_to(&mut self, audience: &mut Audience) -> ApplicationResult<Amount> {
        let ticket = self.office.issue()?;
        match audience.buy(ticket) {
            Ok(charged) => {
                debug!(charged, "admission complete");
                self.office.receive(charged);
                Ok(charged)
            }
            Err(refused) => {
                debug!(reason = %refused.reason, "admission refused");
                self.office.restock(refused.ticket);
                Err(ApplicationError::Domain(refused.reason))
            }
        }
    }
}

/// Theater orchestrating admissions through its seller.
///
/// `enter` touches neither the bag nor the till directly; it delegates to the
/// seller, which in turn talks to the bag only through
/// [`Audience::buy`](crate::domain::Audience::buy).
#[derive(Debug)]
pub struct Theater<V = TicketOffice> {
    seller: TicketSeller<V>,
}

impl<V: TicketVendor> Theater<V> {
    pub fn new(seller: TicketSeller<V>) -> Self {
        Self { seller }
    }

    pub fn seller(&self) -> &TicketSeller<V> {
        &self.seller
    }

    /// Admit one audience member. Returns the amount charged (0 with an
    /// invitation).
    pub fn enter(&mut self, audience: &mut Audience) -> ApplicationResult<Amount> {
        self.seller.sell_to(audience)
    }
}
