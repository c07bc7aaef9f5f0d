//! Application services
//!
//! Concrete service implementations that orchestrate domain logic. Services
//! talk to the till only through the [`TicketVendor`](crate::domain::TicketVendor)
//! capability trait, but are themselves concrete structs, not traits.

mod admission;
mod scenario;

pub use admission::{Theater, TicketSeller};
pub use scenario::{AdmissionOutcome, AudienceSpec, Scenario, ScenarioReport, ScenarioService};
