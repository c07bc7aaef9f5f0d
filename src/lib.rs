//! Theater admission domain model.
//!
//! A theater admits audience members who either hold an invitation or pay the
//! ticket fee from their bag. The charging rule lives in one place,
//! [`domain::Bag::hold`]: it returns the amount actually charged (0 with an
//! invitation) and the box office banks that returned amount. Nothing outside
//! the bag touches the bag's cash, and nothing outside the office touches the
//! till.
//!
//! Layers:
//! - [`domain`]: entities, the charging rule, capability traits
//! - [`application`]: seller/theater orchestration and scenario runs
//! - [`cli`]: argument parsing, dispatch, terminal output

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod util;
