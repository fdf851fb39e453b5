//! Core domain types for the Itinera trip planner.
//!
//! The crate defines the vocabulary shared by the scorer, the route
//! optimizer, and the command-line front end: trip parameters, candidate
//! venues, money and budget state, and routes. It also defines the seams
//! implementations plug into:
//!
//! - [`CandidateSource`] supplies raw candidates for a city and category.
//! - [`Scorer`] assigns a composite fit score with a per-factor breakdown.
//! - [`RouteOptimizer`] orders points into a short visiting sequence.
//!
//! Validating constructors return `Result` to surface invalid input early.
//! Nothing here holds state across calls.
//!
//! # Examples
//!
//! ```
//! use itinera_core::{BudgetTracker, Money};
//!
//! # fn main() -> Result<(), itinera_core::BudgetError> {
//! let decision = BudgetTracker::evaluate(
//!     Money::from_major(1000),
//!     Money::from_major(400),
//!     Money::from_major(150),
//! )?;
//! assert!(decision.accepted);
//! assert_eq!(decision.remaining, Money::from_major(450));
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod budget;
pub mod cancel;
pub mod candidate;
pub mod error;
pub mod location;
pub mod money;
pub mod optimizer;
pub mod route;
pub mod scorer;
pub mod source;
pub mod trip;

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use budget::{BudgetDecision, BudgetError, BudgetState, BudgetTracker, DecisionReason};
pub use cancel::StopSignal;
pub use candidate::{Candidate, Category, MAX_POPULARITY};
pub use error::InputError;
pub use location::{LatLng, haversine_meters};
pub use money::Money;
pub use optimizer::{OptimizedRoute, RouteDiagnostics, RouteError, RouteOptimizer, RouteRequest};
pub use route::{
    ParseTravelModeError, Route, RouteMetrics, RoutePoint, RouteRole, RouteSegment, TravelMode,
    validate_points,
};
pub use scorer::{Factor, FactorScore, RankedLocation, ScoreBreakdown, ScoreCard, Scorer};
pub use source::CandidateSource;
pub use trip::{DateRange, TripParams};
