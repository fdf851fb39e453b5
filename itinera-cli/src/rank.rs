//! Rank command implementation for the Itinera CLI.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use itinera_core::Candidate;
use itinera_scorer::{
    RankRequest, RankingConfig, RankingPipeline, RankingResponse, ScoringConfig, ScoringEngine,
};
use log::debug;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::input::{load_json, require_existing, write_json};
use crate::{ARG_RANK_LIMIT, ARG_RANK_MAX_RADIUS, ARG_RANK_REQUEST, CliError, ENV_RANK_REQUEST};

/// CLI arguments for the `rank` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Rank the candidates in a JSON file against the trip \
                 parameters beside them. The file holds a ranking request \
                 (params, category, currentSpend, limit, \
                 excludeWeatherSensitive) plus a `candidates` array.",
    about = "Rank candidate venues for a trip"
)]
#[ortho_config(prefix = "ITINERA")]
pub(crate) struct RankArgs {
    /// Path to a JSON file containing the request and candidates.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) request_path: Option<Utf8PathBuf>,
    /// Override the number of results returned.
    #[arg(long = ARG_RANK_LIMIT, value_name = "count")]
    #[serde(default)]
    pub(crate) limit: Option<usize>,
    /// Distance in metres at which proximity reaches zero.
    #[arg(long = ARG_RANK_MAX_RADIUS, value_name = "metres")]
    #[serde(default)]
    pub(crate) max_radius_meters: Option<f64>,
}

impl RankArgs {
    pub(crate) fn into_config(self) -> Result<RankConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        RankConfig::try_from(merged)
    }
}

/// Resolved `rank` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct RankConfig {
    /// Path to the JSON request file.
    pub(crate) request_path: Utf8PathBuf,
    /// Limit overriding the request's own, if any.
    pub(crate) limit: Option<usize>,
    /// Scoring configuration for the engine.
    pub(crate) scoring: ScoringConfig,
}

impl TryFrom<RankArgs> for RankConfig {
    type Error = CliError;

    fn try_from(args: RankArgs) -> Result<Self, Self::Error> {
        let request_path = args.request_path.ok_or(CliError::MissingArgument {
            field: ARG_RANK_REQUEST,
            env: ENV_RANK_REQUEST,
        })?;
        let defaults = ScoringConfig::default();
        let scoring = ScoringConfig {
            max_radius_meters: args.max_radius_meters.unwrap_or(defaults.max_radius_meters),
            ..defaults
        };
        Ok(Self {
            request_path,
            limit: args.limit,
            scoring,
        })
    }
}

/// Contents of a `rank` request file.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub(crate) struct RankInput {
    /// The ranking request.
    #[serde(flatten)]
    pub(crate) request: RankRequest,
    /// Venues to rank.
    #[serde(default)]
    pub(crate) candidates: Vec<Candidate>,
}

pub(crate) fn run_rank_with(args: RankArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let response = execute_rank(args.into_config()?)?;
    write_json(writer, &response)
}

pub(crate) fn execute_rank(config: RankConfig) -> Result<RankingResponse, CliError> {
    require_existing(&config.request_path, ARG_RANK_REQUEST)?;
    let input: RankInput = load_json(&config.request_path)?;
    debug!(
        "loaded {} candidates from {}",
        input.candidates.len(),
        config.request_path
    );

    let mut request = input.request;
    if let Some(limit) = config.limit {
        request.limit = Some(limit);
    }
    let pipeline = RankingPipeline::new(
        ScoringEngine::new(config.scoring)?,
        RankingConfig::default(),
    );
    pipeline
        .rank(&input.candidates, &request)
        .map_err(|source| CliError::Rank {
            path: config.request_path,
            source,
        })
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<RankConfig, CliError> {
    let merged = RankArgs::merge_from_layers(layers).map_err(CliError::from)?;
    RankConfig::try_from(merged)
}
