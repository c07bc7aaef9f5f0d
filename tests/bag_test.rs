//! Tests for Bag::hold, the admission charging rule

use rstest::rstest;

use boxoffice::domain::{Amount, Bag, DomainError, Ticket};

#[test]
fn given_invitation_when_holding_then_charges_nothing() {
    // Arrange
    let mut bag = Bag::with_invitation(500);

    // Act
    let charged = bag.hold(Ticket::new(10_000)).expect("hold");

    // Assert
    assert_eq!(charged, 0);
    assert!(bag.has_ticket());
    assert_eq!(bag.cash(), 500, "invitation admission takes no cash");
}

#[rstest]
#[case::exact_fee(10_000, 10_000, 0)]
#[case::more_than_fee(15_000, 10_000, 5_000)]
#[case::free_ticket(0, 0, 0)]
fn given_sufficient_cash_when_holding_then_charges_fee(
    #[case] cash: Amount,
    #[case] fee: Amount,
    #[case] remaining: Amount,
) {
    // Arrange
    let mut bag = Bag::with_cash(cash);

    // Act
    let charged = bag.hold(Ticket::new(fee)).expect("hold");

    // Assert
    assert_eq!(charged, fee);
    assert!(bag.has_ticket());
    assert_eq!(bag.cash(), remaining);
}

#[test]
fn given_insufficient_cash_when_holding_then_refuses_and_returns_ticket() {
    // Arrange
    let mut bag = Bag::with_cash(900);

    // Act
    let refused = bag.hold(Ticket::new(10_000)).unwrap_err();

    // Assert - reason names both sides of the shortfall
    assert_eq!(
        refused.reason,
        DomainError::InsufficientFunds {
            required: 10_000,
            available: 900,
        }
    );
    // Assert - the ticket comes back un-stored
    assert_eq!(refused.ticket.fee(), 10_000);
    // Assert - the bag is untouched
    assert!(!bag.has_ticket());
    assert_eq!(bag.cash(), 900);
}

#[test]
fn given_held_ticket_when_holding_again_then_refuses_already_admitted() {
    // Arrange
    let mut bag = Bag::with_cash(20_000);
    bag.hold(Ticket::new(10_000)).expect("first hold");

    // Act
    let refused = bag.hold(Ticket::new(10_000)).unwrap_err();

    // Assert - no silent overwrite, no double charge
    assert_eq!(refused.reason, DomainError::AlreadyAdmitted);
    assert_eq!(bag.cash(), 10_000, "second hold must not charge");
}

#[test]
fn given_invitation_and_held_ticket_when_holding_again_then_refuses() {
    // Arrange - the already-admitted check applies to invited bags too
    let mut bag = Bag::with_invitation(0);
    bag.hold(Ticket::new(10_000)).expect("first hold");

    // Act
    let refused = bag.hold(Ticket::new(10_000)).unwrap_err();

    // Assert
    assert_eq!(refused.reason, DomainError::AlreadyAdmitted);
}
