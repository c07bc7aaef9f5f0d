//! Domain layer: entities and the admission charging rule
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod entities;
pub mod error;
pub mod traits;

pub use entities::*;
pub use error::{DomainError, HoldRefused};
pub use traits::TicketVendor;
