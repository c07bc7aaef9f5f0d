//! Command dispatch

use std::fs;
use std::path::Path;

use clap::CommandFactory;
use tracing::{debug, instrument};

use crate::application::services::{Scenario, ScenarioService, Theater, TicketSeller};
use crate::cli::args::{Cli, Commands};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::config::{global_config_path, Settings};
use crate::domain::{Amount, Audience, Bag, TicketOffice};

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    let Some(command) = &cli.command else {
        return Ok(());
    };
    match command {
        Commands::Admit {
            cash,
            invitation,
            count,
        } => {
            let settings = Settings::load(cli.config.as_deref())?;
            admit(&settings, *cash, *invitation, *count)
        }
        Commands::Run { scenario } => run(scenario),
        Commands::Info => {
            let settings = Settings::load(cli.config.as_deref())?;
            info(&settings, cli.config.as_deref())
        }
        Commands::Completion { shell } => {
            completion(*shell);
            Ok(())
        }
    }
}

#[instrument(skip(settings))]
fn admit(settings: &Settings, cash: Amount, invitation: bool, count: usize) -> CliResult<()> {
    debug!(
        fee = settings.fee,
        tickets = settings.tickets,
        till = settings.till,
        "opening house"
    );
    let office = TicketOffice::with_stock(settings.till, settings.tickets, settings.fee);
    let mut theater = Theater::new(TicketSeller::new(office));

    for n in 1..=count {
        let bag = if invitation {
            Bag::with_invitation(cash)
        } else {
            Bag::with_cash(cash)
        };
        let mut audience = Audience::new(bag);
        let charged = theater.enter(&mut audience)?;
        if invitation {
            output::success(&format!("audience {n}: admitted free (invitation)"));
        } else {
            output::success(&format!(
                "audience {n}: admitted, charged {charged} (bag: {})",
                audience.bag().cash()
            ));
        }
    }

    let office = theater.seller().office();
    output::detail(&format!("till: {}", office.balance()));
    output::detail(&format!("tickets remaining: {}", office.tickets_remaining()));
    Ok(())
}

#[instrument]
fn run(path: &Path) -> CliResult<()> {
    let content = fs::read_to_string(path).map_err(|e| CliError::Io {
        path: path.display().to_string(),
        source: e,
    })?;
    let scenario = Scenario::parse(&content)?;
    let report = ScenarioService::new().run(&scenario)?;

    output::header(&format!(
        "house: fee {}, {} tickets, opening till {}",
        scenario.fee, scenario.tickets, scenario.till
    ));
    for outcome in &report.outcomes {
        match &outcome.result {
            Ok(charged) => output::success(&format!(
                "{}: admitted, charged {charged} (bag: {})",
                outcome.name, outcome.bag_cash
            )),
            Err(reason) => output::failure(&format!("{}: refused ({reason})", outcome.name)),
        }
    }
    output::detail(&format!(
        "admitted {} of {}",
        report.admitted(),
        report.outcomes.len()
    ));
    output::detail(&format!("till: {}", report.till));
    output::detail(&format!("tickets remaining: {}", report.tickets_remaining));
    Ok(())
}

#[instrument(skip(settings))]
fn info(settings: &Settings, explicit: Option<&Path>) -> CliResult<()> {
    output::header("boxoffice settings");
    output::detail(&format!("fee: {}", settings.fee));
    output::detail(&format!("tickets: {}", settings.tickets));
    output::detail(&format!("till: {}", settings.till));
    if let Some(path) = explicit {
        output::detail(&format!("config: {}", path.display()));
    } else if let Some(path) = global_config_path() {
        let state = if path.exists() { "present" } else { "absent" };
        output::detail(&format!("global config: {} ({state})", path.display()));
    }
    Ok(())
}

fn completion(shell: clap_complete::Shell) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    clap_complete::generate(shell, &mut cmd, name, &mut std::io::stdout());
}
