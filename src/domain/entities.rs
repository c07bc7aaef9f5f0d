//! Domain entities: core data structures

use std::collections::VecDeque;

use crate::domain::error::{DomainError, HoldRefused};

/// Cash amount in the smallest currency unit.
///
/// Non-negative by type; underflow is surfaced as
/// [`DomainError::InsufficientFunds`] instead of wrapping.
pub type Amount = u64;

/// Admission ticket carrying its fee.
///
/// Not `Copy`: a ticket moves from the office pool into exactly one bag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket {
    fee: Amount,
}

impl Ticket {
    pub fn new(fee: Amount) -> Self {
        Self { fee }
    }

    pub fn fee(&self) -> Amount {
        self.fee
    }
}

/// Token entitling free admission. Presence is the signal; it carries no data.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Invitation;

/// An audience member's container for cash, an optional invitation, and the
/// admitted ticket.
///
/// The only mutation path is [`Bag::hold`]; cash arithmetic and ticket
/// storage are private so the charging rule cannot be bypassed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bag {
    cash: Amount,
    invitation: Option<Invitation>,
    ticket: Option<Ticket>,
}

impl Bag {
    /// Bag of a paying audience member: cash only.
    pub fn with_cash(cash: Amount) -> Self {
        Self {
            cash,
            invitation: None,
            ticket: None,
        }
    }

    /// Bag of an invited audience member: invitation plus cash.
    pub fn with_invitation(cash: Amount) -> Self {
        Self {
            cash,
            invitation: Some(Invitation),
            ticket: None,
        }
    }

    pub fn has_invitation(&self) -> bool {
        self.invitation.is_some()
    }

    pub fn has_ticket(&self) -> bool {
        self.ticket.is_some()
    }

    pub fn cash(&self) -> Amount {
        self.cash
    }

    /// Hold a ticket, applying the admission charging rule.
    ///
    /// Returns the amount actually charged: 0 with an invitation, the
    /// ticket's fee otherwise. A refused hold hands the ticket back inside
    /// [`HoldRefused`] so the caller can restock it; the bag is unchanged.
    pub fn hold(&mut self, ticket: Ticket) -> Result<Amount, HoldRefused> {
        if self.has_ticket() {
            return Err(HoldRefused {
                ticket,
                reason: DomainError::AlreadyAdmitted,
            });
        }
        if self.has_invitation() {
            self.set_ticket(ticket);
            return Ok(0);
        }
        let fee = ticket.fee();
        if self.cash < fee {
            return Err(HoldRefused {
                ticket,
                reason: DomainError::InsufficientFunds {
                    required: fee,
                    available: self.cash,
                },
            });
        }
        self.set_ticket(ticket);
        self.minus_amount(fee);
        Ok(fee)
    }

    fn set_ticket(&mut self, ticket: Ticket) {
        self.ticket = Some(ticket);
    }

    fn minus_amount(&mut self, amount: Amount) {
        self.cash -= amount;
    }
}

/// Audience member wrapping one bag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Audience {
    bag: Bag,
}

impl Audience {
    pub fn new(bag: Bag) -> Self {
        Self { bag }
    }

    /// Read-only view of the bag. There is no mutable accessor; the bag
    /// changes only through [`Audience::buy`].
    pub fn bag(&self) -> &Bag {
        &self.bag
    }

    /// Buy (or receive, with an invitation) a ticket.
    ///
    /// Delegates to [`Bag::hold`] and returns the amount charged.
    pub fn buy(&mut self, ticket: Ticket) -> Result<Amount, HoldRefused> {
        self.bag.hold(ticket)
    }
}

/// Ticket inventory and cash till for a theater.
///
/// Tickets are issued first-in-first-out in the order they were stocked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketOffice {
    tickets: VecDeque<Ticket>,
    cash: Amount,
}

impl TicketOffice {
    pub fn new(cash: Amount, tickets: impl IntoIterator<Item = Ticket>) -> Self {
        Self {
            tickets: tickets.into_iter().collect(),
            cash,
        }
    }

    /// Stock a house: `count` tickets at a uniform fee.
    pub fn with_stock(cash: Amount, count: usize, fee: Amount) -> Self {
        Self::new(cash, std::iter::repeat_with(|| Ticket::new(fee)).take(count))
    }

    pub fn balance(&self) -> Amount {
        self.cash
    }

    pub fn tickets_remaining(&self) -> usize {
        self.tickets.len()
    }

    pub(crate) fn pop_front(&mut self) -> Option<Ticket> {
        self.tickets.pop_front()
    }

    pub(crate) fn push_front(&mut self, ticket: Ticket) {
        self.tickets.push_front(ticket);
    }

    pub(crate) fn accumulate(&mut self, amount: Amount) {
        self.cash += amount;
    }
}
