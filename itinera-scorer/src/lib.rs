//! Scoring and ranking for Itinera candidate venues.
//!
//! The crate provides two layers:
//! - [`ScoringEngine`] implements the [`Scorer`](itinera_core::Scorer) trait
//!   with a weighted sum of four normalised factors: budget fit, preference
//!   match, proximity to the trip anchor, and popularity.
//! - [`RankingPipeline`] filters candidates by category, validity, weather
//!   and affordability, scores the survivors in parallel with `rayon`, and
//!   returns a deterministic, bounded ranking.
//!
//! # Examples
//!
//! ```
//! use itinera_core::Category;
//! use itinera_core::test_support::{MemoryCandidateSource, candidate, trip_params};
//! use itinera_scorer::{RankRequest, RankingConfig, RankingPipeline, ScoringConfig, ScoringEngine};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let engine = ScoringEngine::new(ScoringConfig::default())?;
//! let pipeline = RankingPipeline::new(engine, RankingConfig::default());
//! let source = MemoryCandidateSource::default()
//!     .with_candidate("bcn", candidate("h1", Category::Hotel, 120));
//! let request = RankRequest::new(trip_params(1000, 5, &[]), Category::Hotel);
//! let response = pipeline.recommend(&source, "bcn", &request)?;
//! assert_eq!(response.ranked.len(), 1);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod config;
mod engine;
mod error;
mod pipeline;

pub use config::{
    DEFAULT_LIMIT, DEFAULT_MAX_RADIUS_METERS, RankingConfig, ScoreWeights, ScoringConfig,
    WEIGHT_SUM_TOLERANCE,
};
pub use engine::{ScoringEngine, daily_allowance};
pub use error::{RankError, ScoringConfigError};
pub use pipeline::{RankRequest, RankingDiagnostics, RankingPipeline, RankingResponse};
