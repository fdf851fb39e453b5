//! Budget command implementation for the Itinera CLI.

use std::io::Write;

use clap::Parser;
use itinera_core::{BudgetDecision, BudgetTracker, Money};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::input::write_json;
use crate::{
    ARG_BUDGET_COMMITTED, ARG_BUDGET_COST, ARG_BUDGET_TOTAL, CliError, ENV_BUDGET_COST,
    ENV_BUDGET_TOTAL,
};

/// CLI arguments for the `budget` subcommand.
///
/// Amounts are integer minor currency units (cents).
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Evaluate a proposed cost against a trip budget. All \
                 amounts are integer minor currency units (for example \
                 cents). The decision reports the remaining budget and, \
                 when rejected, the reason.",
    about = "Check whether a proposed cost fits the trip budget"
)]
#[ortho_config(prefix = "ITINERA")]
pub(crate) struct BudgetArgs {
    /// Total trip budget.
    #[arg(long = ARG_BUDGET_TOTAL, value_name = "minor-units", allow_hyphen_values = true)]
    #[serde(default)]
    pub(crate) total: Option<i64>,
    /// Spend already committed; defaults to zero.
    #[arg(long = ARG_BUDGET_COMMITTED, value_name = "minor-units", allow_hyphen_values = true)]
    #[serde(default)]
    pub(crate) committed: Option<i64>,
    /// Proposed cost to evaluate.
    #[arg(long = ARG_BUDGET_COST, value_name = "minor-units", allow_hyphen_values = true)]
    #[serde(default)]
    pub(crate) cost: Option<i64>,
}

impl BudgetArgs {
    pub(crate) fn into_config(self) -> Result<BudgetConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        BudgetConfig::try_from(merged)
    }
}

/// Resolved `budget` command configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct BudgetConfig {
    pub(crate) total: Money,
    pub(crate) committed: Money,
    pub(crate) cost: Money,
}

impl TryFrom<BudgetArgs> for BudgetConfig {
    type Error = CliError;

    fn try_from(args: BudgetArgs) -> Result<Self, Self::Error> {
        let total = args.total.ok_or(CliError::MissingArgument {
            field: ARG_BUDGET_TOTAL,
            env: ENV_BUDGET_TOTAL,
        })?;
        let cost = args.cost.ok_or(CliError::MissingArgument {
            field: ARG_BUDGET_COST,
            env: ENV_BUDGET_COST,
        })?;
        Ok(Self {
            total: Money::from_minor(total),
            committed: Money::from_minor(args.committed.unwrap_or(0)),
            cost: Money::from_minor(cost),
        })
    }
}

pub(crate) fn run_budget_with(args: BudgetArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let decision = execute_budget(args.into_config()?)?;
    write_json(writer, &decision)
}

pub(crate) fn execute_budget(config: BudgetConfig) -> Result<BudgetDecision, CliError> {
    Ok(BudgetTracker::evaluate(
        config.total,
        config.committed,
        config.cost,
    )?)
}
