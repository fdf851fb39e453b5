//! Route command implementation for the Itinera CLI.

use std::io::Write;
use std::time::Duration;

use camino::Utf8PathBuf;
use clap::Parser;
use itinera_core::TravelMode;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::{
    ARG_ROUTE_DEFAULT_MODE, ARG_ROUTE_ITERATION_FACTOR, ARG_ROUTE_REQUEST, ARG_ROUTE_TIMEOUT_MS,
    CliError, ENV_ROUTE_REQUEST,
};

/// CLI arguments for the `route` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Order the points in a JSON route request into a short \
                 path. The `start` point, else the first, stays first. The \
                 search stops early when the timeout elapses and reports \
                 the best route found.",
    about = "Order a day's points into a short route"
)]
#[ortho_config(prefix = "ITINERA")]
pub(crate) struct RouteArgs {
    /// Path to a JSON file containing a route request.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) request_path: Option<Utf8PathBuf>,
    /// Travel mode for points without their own arrival mode.
    #[arg(long = ARG_ROUTE_DEFAULT_MODE, value_name = "mode")]
    #[serde(default)]
    pub(crate) default_mode: Option<TravelMode>,
    /// Stop searching after this many milliseconds.
    #[arg(long = ARG_ROUTE_TIMEOUT_MS, value_name = "ms")]
    #[serde(default)]
    pub(crate) timeout_ms: Option<u64>,
    /// Multiplier on the n squared cap of 2-opt moves.
    #[arg(long = ARG_ROUTE_ITERATION_FACTOR, value_name = "factor")]
    #[serde(default)]
    pub(crate) iteration_factor: Option<u32>,
}

impl RouteArgs {
    pub(crate) fn into_config(self) -> Result<RouteConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        RouteConfig::try_from(merged)
    }
}

/// Resolved `route` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RouteConfig {
    /// Path to the JSON request file.
    pub(crate) request_path: Utf8PathBuf,
    /// Mode override for the optimizer default.
    pub(crate) default_mode: Option<TravelMode>,
    /// Search deadline relative to the start of the call.
    pub(crate) timeout: Option<Duration>,
    /// Override for the 2-opt iteration factor.
    pub(crate) iteration_factor: Option<u32>,
}

impl TryFrom<RouteArgs> for RouteConfig {
    type Error = CliError;

    fn try_from(args: RouteArgs) -> Result<Self, Self::Error> {
        let request_path = args.request_path.ok_or(CliError::MissingArgument {
            field: ARG_ROUTE_REQUEST,
            env: ENV_ROUTE_REQUEST,
        })?;
        Ok(Self {
            request_path,
            default_mode: args.default_mode,
            timeout: args.timeout_ms.map(Duration::from_millis),
            iteration_factor: args.iteration_factor,
        })
    }
}

pub(crate) fn run_route_with(args: RouteArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    local::run(&config, writer)
}

#[cfg(feature = "solver-local")]
pub(crate) mod local {
    use std::io::Write;

    use itinera_core::{OptimizedRoute, RouteOptimizer, RouteRequest, StopSignal};
    use itinera_solver_local::{LocalSearchOptimizer, OptimizerConfig};
    use log::debug;

    use super::RouteConfig;
    use crate::input::{load_json, require_existing, write_json};
    use crate::{ARG_ROUTE_REQUEST, CliError};

    pub(crate) fn run(config: &RouteConfig, writer: &mut dyn Write) -> Result<(), CliError> {
        let optimized = execute_route(config)?;
        write_json(writer, &optimized)
    }

    pub(crate) fn execute_route(config: &RouteConfig) -> Result<OptimizedRoute, CliError> {
        require_existing(&config.request_path, ARG_ROUTE_REQUEST)?;
        let request: RouteRequest = load_json(&config.request_path)?;
        debug!(
            "loaded {} route points from {}",
            request.points.len(),
            config.request_path
        );

        let defaults = OptimizerConfig::default();
        let optimizer = LocalSearchOptimizer::new(OptimizerConfig {
            default_mode: config.default_mode.unwrap_or(defaults.default_mode),
            iteration_factor: config.iteration_factor.unwrap_or(defaults.iteration_factor),
            ..defaults
        })?;
        let stop = config.timeout.map_or_else(StopSignal::never, StopSignal::after);
        optimizer
            .optimize(&request, &stop)
            .map_err(|source| CliError::Route {
                path: config.request_path.clone(),
                source,
            })
    }
}

#[cfg(not(feature = "solver-local"))]
pub(crate) mod local {
    use std::io::Write;

    use super::RouteConfig;
    use crate::CliError;

    pub(crate) fn run(_config: &RouteConfig, _writer: &mut dyn Write) -> Result<(), CliError> {
        Err(CliError::MissingFeature {
            feature: "solver-local",
            action: "route",
        })
    }
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<RouteConfig, CliError> {
    let merged = RouteArgs::merge_from_layers(layers).map_err(CliError::from)?;
    RouteConfig::try_from(merged)
}
