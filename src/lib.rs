//! Facade crate for the Itinera trip planner.
//!
//! This crate re-exports the core domain types, the scoring engine and
//! ranking pipeline, and the local search route optimizer behind the
//! `solver-local` feature.
//!
//! # Examples
//! ```
//! use itinera_engine::{BudgetTracker, Money};
//!
//! # fn main() -> Result<(), itinera_engine::BudgetError> {
//! let decision = BudgetTracker::evaluate(
//!     Money::from_major(1000),
//!     Money::from_major(400),
//!     Money::from_major(150),
//! )?;
//! assert!(decision.accepted);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]

pub use itinera_core::{
    BudgetDecision, BudgetError, BudgetState, BudgetTracker, Candidate, CandidateSource, Category,
    DateRange, DecisionReason, Factor, FactorScore, InputError, LatLng, Money, OptimizedRoute,
    RankedLocation, Route, RouteDiagnostics, RouteError, RouteMetrics, RouteOptimizer, RoutePoint,
    RouteRequest, RouteRole, RouteSegment, ScoreBreakdown, ScoreCard, Scorer, StopSignal,
    TravelMode, TripParams, haversine_meters,
};

pub use itinera_scorer::{
    RankError, RankRequest, RankingConfig, RankingDiagnostics, RankingPipeline, RankingResponse,
    ScoreWeights, ScoringConfig, ScoringConfigError, ScoringEngine,
};

#[cfg(feature = "solver-local")]
pub use itinera_solver_local::{
    LocalSearchOptimizer, OptimizerConfig, OptimizerConfigError, TravelSpeeds,
};
