//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

use crate::domain::Amount;

/// Theater admission domain model: tickets, invitations, bags, and the box office till
#[derive(Parser, Debug)]
#[command(name = "boxoffice")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase debug output (-d: info, -dd: debug, -ddd: trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub debug: u8,

    /// Explicit settings file (overrides the global config)
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Admit walk-up audiences against a freshly stocked house
    Admit {
        /// Cash in the audience member's bag
        #[arg(long, default_value_t = 0)]
        cash: Amount,

        /// Bag holds an invitation (free admission)
        #[arg(long)]
        invitation: bool,

        /// Number of identical audience members to admit
        #[arg(long, default_value_t = 1)]
        count: usize,
    },

    /// Run a scripted scenario file
    Run {
        /// Scenario TOML file
        scenario: PathBuf,
    },

    /// Show effective settings
    Info,

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}
