//! Application layer: services and use cases
//!
//! This layer orchestrates domain logic through the capability traits the
//! entities expose.

pub mod error;
pub mod services;

pub use error::{ApplicationError, ApplicationResult};
