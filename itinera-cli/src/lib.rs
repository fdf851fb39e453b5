//! Command-line interface for driving the Itinera planner from JSON files.
//!
//! Each subcommand reads a request, runs one engine entry point in-process,
//! and prints the response as pretty JSON on stdout.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod budget;
mod error;
mod input;
mod rank;
mod route;

pub use error::CliError;

use budget::BudgetArgs;
use rank::RankArgs;
use route::RouteArgs;

const ARG_RANK_REQUEST: &str = "request-path";
const ARG_RANK_LIMIT: &str = "limit";
const ARG_RANK_MAX_RADIUS: &str = "max-radius-meters";
const ENV_RANK_REQUEST: &str = "ITINERA_CMDS_RANK_REQUEST_PATH";

const ARG_ROUTE_REQUEST: &str = "request-path";
const ARG_ROUTE_DEFAULT_MODE: &str = "default-mode";
const ARG_ROUTE_TIMEOUT_MS: &str = "timeout-ms";
const ARG_ROUTE_ITERATION_FACTOR: &str = "iteration-factor";
const ENV_ROUTE_REQUEST: &str = "ITINERA_CMDS_ROUTE_REQUEST_PATH";

const ARG_BUDGET_TOTAL: &str = "total";
const ARG_BUDGET_COMMITTED: &str = "committed";
const ARG_BUDGET_COST: &str = "cost";
const ENV_BUDGET_TOTAL: &str = "ITINERA_CMDS_BUDGET_TOTAL";
const ENV_BUDGET_COST: &str = "ITINERA_CMDS_BUDGET_COST";

/// Run the Itinera CLI with the current process arguments and environment.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    let mut stdout = std::io::stdout().lock();
    match cli.command {
        Command::Rank(args) => rank::run_rank_with(args, &mut stdout),
        Command::Route(args) => route::run_route_with(args, &mut stdout),
        Command::Budget(args) => budget::run_budget_with(args, &mut stdout),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "itinera",
    about = "Rank venues, order day routes and check budgets for Itinera trips",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Rank candidate venues for a trip.
    Rank(RankArgs),
    /// Order a day's points into a short route.
    Route(RouteArgs),
    /// Check whether a proposed cost fits the trip budget.
    Budget(BudgetArgs),
}

#[cfg(test)]
mod tests;
