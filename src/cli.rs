//! Command line interface.
//!
//! One subcommand per query. Parsing and dispatch are kept apart from
//! printing so a whole invocation can be run from tests.

use crate::calculator::Calculator;
use crate::config::Config;
use crate::error::CalcError;
use crate::output::{self, Report};
use clap::{Parser, Subcommand, ValueEnum};
use std::error::Error;

#[derive(Debug, Parser)]
#[command(name = "subnet-calc", version, about = "IPv4 subnet calculator")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Table, global = true)]
    pub format: Format,

    /// Largest number of subnets a query may produce [env: SUBNET_CALC_MAX_SUBNETS]
    #[arg(long, global = true, value_parser = clap::value_parser!(u64).range(1..))]
    pub max_subnets: Option<u64>,

    /// Leave out the generated-at header line
    #[arg(long, global = true)]
    pub no_banner: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Legacy class, default mask and capacity of an address
    Class { address: String },
    /// Split into subnets holding at least COUNT hosts each
    Hosts {
        address: String,
        #[arg(allow_hyphen_values = true)]
        count: String,
    },
    /// Split into at least COUNT subnets
    Subnets {
        address: String,
        #[arg(allow_hyphen_values = true)]
        count: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Table,
    Csv,
    Json,
}

/// Run the query named by `command`.
pub fn execute(command: &Command, calculator: &Calculator) -> Result<Report, CalcError> {
    match command {
        Command::Class { address } => calculator.classify(address).map(Report::Class),
        Command::Hosts { address, count } => {
            calculator.plan_by_hosts(address, count).map(Report::Plan)
        }
        Command::Subnets { address, count } => {
            calculator.plan_by_subnets(address, count).map(Report::Plan)
        }
    }
}

/// Execute a parsed command line and render the result.
///
/// `--max-subnets` takes precedence over the configured limit. The banner is
/// not part of JSON output.
pub fn run(cli: &Cli, config: &Config, banner: Option<&str>) -> Result<String, Box<dyn Error>> {
    let mut config = config.clone();
    if let Some(max) = cli.max_subnets {
        config.max_subnets = max;
    }
    let calculator = Calculator::from_config(&config);
    log::debug!("{:?} with limit {}", cli.command, calculator.max_subnets());

    let report = execute(&cli.command, &calculator)?;
    let banner = if cli.no_banner { None } else { banner };

    let text = match cli.format {
        Format::Table => output::terminal::render(&report, banner),
        Format::Csv => output::csv::render(&report, banner),
        Format::Json => output::json::render(&report)?,
    };
    Ok(text)
}
