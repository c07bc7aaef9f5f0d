//! Tests for scripted scenario runs

use boxoffice::application::services::{Scenario, ScenarioService};
use boxoffice::domain::DomainError;
use boxoffice::util::testing;

const MIXED_HOUSE: &str = r#"
fee = 10000
tickets = 3
till = 0

[[audience]]
name = "alice"
invitation = true

[[audience]]
name = "bob"
cash = 10000

[[audience]]
name = "carol"
cash = 100

[[audience]]
name = "dave"
cash = 25000
"#;

#[test]
fn given_mixed_house_when_running_then_reports_each_outcome() {
    // Arrange
    testing::init_test_setup();
    let scenario = Scenario::parse(MIXED_HOUSE).expect("parse");

    // Act
    let report = ScenarioService::new().run(&scenario).expect("run");

    // Assert - alice: free, bob: paid, carol: refused, dave: paid after carol
    assert_eq!(report.outcomes.len(), 4);
    assert_eq!(report.outcomes[0].result, Ok(0));
    assert!(report.outcomes[0].has_ticket);
    assert_eq!(report.outcomes[1].result, Ok(10_000));
    assert_eq!(report.outcomes[1].bag_cash, 0);
    assert_eq!(
        report.outcomes[2].result,
        Err(DomainError::InsufficientFunds {
            required: 10_000,
            available: 100,
        })
    );
    assert!(!report.outcomes[2].has_ticket);
    // Refusal does not abort the run; carol's ticket went back to dave
    assert_eq!(report.outcomes[3].result, Ok(10_000));
    assert_eq!(report.outcomes[3].bag_cash, 15_000);
}

#[test]
fn given_mixed_house_when_running_then_closing_state_balances() {
    // Arrange
    let scenario = Scenario::parse(MIXED_HOUSE).expect("parse");

    // Act
    let report = ScenarioService::new().run(&scenario).expect("run");

    // Assert - two paid fees in the till, all three tickets placed
    assert_eq!(report.admitted(), 3);
    assert_eq!(report.refused(), 1);
    assert_eq!(report.till, 20_000);
    assert_eq!(report.tickets_remaining, 0);
}

#[test]
fn given_more_audiences_than_tickets_when_running_then_pool_exhaustion_recorded() {
    // Arrange
    let scenario = Scenario::parse(
        r#"
fee = 10000
tickets = 1

[[audience]]
name = "first"
cash = 10000

[[audience]]
name = "second"
cash = 10000
"#,
    )
    .expect("parse");

    // Act
    let report = ScenarioService::new().run(&scenario).expect("run");

    // Assert
    assert_eq!(report.outcomes[0].result, Ok(10_000));
    assert_eq!(
        report.outcomes[1].result,
        Err(DomainError::TicketUnavailable)
    );
    assert_eq!(report.tickets_remaining, 0);
    assert_eq!(report.till, 10_000);
}

#[test]
fn given_opening_till_when_running_then_till_accumulates_on_top() {
    // Arrange
    let scenario = Scenario::parse(
        r#"
fee = 10000
tickets = 1
till = 5000

[[audience]]
name = "bob"
cash = 10000
"#,
    )
    .expect("parse");

    // Act
    let report = ScenarioService::new().run(&scenario).expect("run");

    // Assert
    assert_eq!(report.till, 15_000);
}

#[test]
fn given_malformed_toml_when_parsing_then_scenario_error() {
    // Act
    let result = Scenario::parse("fee = \"lots\"\ntickets = 1\n");

    // Assert
    assert!(result.is_err());
}
