//! Error types emitted by the Itinera CLI.
//!
//! Keep this error type reasonably small, as many CLI helpers return
//! `Result<_, CliError>`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use itinera_core::{BudgetError, RouteError};
use itinera_scorer::{RankError, ScoringConfigError};
use thiserror::Error;

/// Errors emitted by the Itinera CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        field: &'static str,
        env: &'static str,
    },
    /// The requested operation requires a missing compile-time feature.
    #[error("{action} requires the `{feature}` feature to be enabled")]
    MissingFeature {
        feature: &'static str,
        action: &'static str,
    },
    /// A referenced input path does not exist on disk.
    #[error("{field} path {path:?} does not exist")]
    MissingSourceFile {
        field: &'static str,
        path: Utf8PathBuf,
    },
    /// A referenced input path exists but is not a file.
    #[error("{field} path {path:?} exists but is not a file")]
    SourcePathNotFile {
        field: &'static str,
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected due to an IO error.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        field: &'static str,
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Opening a request file failed.
    #[error("failed to open request at {path:?}: {source}")]
    OpenRequest {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Request JSON could not be decoded.
    #[error("failed to parse request JSON at {path:?}: {source}")]
    ParseRequest {
        path: Utf8PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// Scoring configuration was rejected.
    #[error("invalid scoring configuration: {0}")]
    ScoringConfig(#[from] ScoringConfigError),
    /// Optimizer configuration was rejected.
    #[cfg(feature = "solver-local")]
    #[error("invalid optimizer configuration: {0}")]
    OptimizerConfig(#[from] itinera_solver_local::OptimizerConfigError),
    /// The ranking pipeline rejected the request.
    #[error("ranking request in {path:?} failed: {source}")]
    Rank {
        path: Utf8PathBuf,
        #[source]
        source: RankError,
    },
    /// The optimizer rejected the request.
    #[error("route request in {path:?} failed: {source}")]
    Route {
        path: Utf8PathBuf,
        #[source]
        source: RouteError,
    },
    /// The budget could not be evaluated.
    #[error("budget evaluation failed: {0}")]
    Budget(#[from] BudgetError),
    /// Serialising the response failed.
    #[error("failed to serialise response: {0}")]
    SerialiseResponse(#[source] serde_json::Error),
    /// Writing the response failed.
    #[error("failed to write output: {0}")]
    WriteOutput(#[source] std::io::Error),
}
