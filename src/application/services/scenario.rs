//! Scenario service
//!
//! Runs a scripted house: one box office and a sequence of audiences,
//! described declaratively in TOML. Refused admissions are recorded, not
//! fatal; the house stays open for the next walk-up.

use serde::Deserialize;
use tracing::debug;

use crate::application::services::admission::{Theater, TicketSeller};
use crate::application::{ApplicationError, ApplicationResult};
use crate::domain::{Amount, Audience, Bag, DomainError, TicketOffice};

/// Declarative description of one house and its audiences.
///
/// ```toml
/// fee = 10000
/// tickets = 2
/// till = 0
///
/// [[audience]]
/// name = "alice"
/// invitation = true
///
/// [[audience]]
/// name = "bob"
/// cash = 10000
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Scenario {
    /// Fee for every ticket stocked at the office
    pub fee: Amount,
    /// Number of tickets stocked
    pub tickets: usize,
    /// Opening till balance
    #[serde(default)]
    pub till: Amount,
    /// Audiences admitted in listed order
    #[serde(default, rename = "audience")]
    pub audiences: Vec<AudienceSpec>,
}

/// One audience member entry in a scenario.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AudienceSpec {
    pub name: String,
    #[serde(default)]
    pub invitation: bool,
    #[serde(default)]
    pub cash: Amount,
}

impl Scenario {
    /// Parse a scenario from TOML content.
    pub fn parse(content: &str) -> ApplicationResult<Self> {
        toml::from_str(content).map_err(|e| ApplicationError::Scenario {
            message: e.to_string(),
        })
    }
}

impl AudienceSpec {
    fn to_audience(&self) -> Audience {
        let bag = if self.invitation {
            Bag::with_invitation(self.cash)
        } else {
            Bag::with_cash(self.cash)
        };
        Audience::new(bag)
    }
}

/// Outcome of one admission within a scenario run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdmissionOutcome {
    pub name: String,
    /// Amount charged, or the refusal reason
    pub result: Result<Amount, DomainError>,
    /// Closing bag balance
    pub bag_cash: Amount,
    pub has_ticket: bool,
}

/// Report for a whole scenario run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScenarioReport {
    pub outcomes: Vec<AdmissionOutcome>,
    /// Closing till balance
    pub till: Amount,
    pub tickets_remaining: usize,
}

impl ScenarioReport {
    pub fn admitted(&self) -> usize {
        self.outcomes.iter().filter(|o| o.result.is_ok()).count()
    }

    pub fn refused(&self) -> usize {
        self.outcomes.len() - self.admitted()
    }
}

/// Service running scripted admission scenarios.
#[derive(Debug, Default)]
pub struct ScenarioService;

impl ScenarioService {
    pub fn new() -> Self {
        Self
    }

    /// Admit every audience in order and report the closing state.
    pub fn run(&self, scenario: &Scenario) -> ApplicationResult<ScenarioReport> {
        debug!(
            fee = scenario.fee,
            tickets = scenario.tickets,
            audiences = scenario.audiences.len(),
            "running scenario"
        );

        let office = TicketOffice::with_stock(scenario.till, scenario.tickets, scenario.fee);
        let mut theater = Theater::new(TicketSeller::new(office));

        let mut outcomes = Vec::with_capacity(scenario.audiences.len());
        for spec in &scenario.audiences {
            let mut audience = spec.to_audience();
            let result = match theater.enter(&mut audience) {
                Ok(charged) => Ok(charged),
                Err(ApplicationError::Domain(reason)) => Err(reason),
                // `enter` only fails on domain grounds today; propagate
                // anything else rather than misreport it as a refusal.
                Err(other) => return Err(other),
            };
            outcomes.push(AdmissionOutcome {
                name: spec.name.clone(),
                result,
                bag_cash: audience.bag().cash(),
                has_ticket: audience.bag().has_ticket(),
            });
        }

        let office = theater.seller().office();
        Ok(ScenarioReport {
            outcomes,
            till: office.balance(),
            tickets_remaining: office.tickets_remaining(),
        })
    }
}
