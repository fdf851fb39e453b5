//! Local search route optimizer for Itinera.
//!
//! This crate provides [`LocalSearchOptimizer`], the default implementation of
//! the [`RouteOptimizer`](itinera_core::RouteOptimizer) trait. It orders the
//! points of a day plan by building a nearest-neighbour tour over great-circle
//! distances and refining it with 2-opt moves until no move shortens the path.
//!
//! The refined tour is compared against the caller's own order, also refined,
//! so the result is never longer than the input order. Searches honour a
//! [`StopSignal`](itinera_core::StopSignal) and return the best route found so
//! far when it fires.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod optimizer;
mod tour;

pub use optimizer::{
    LocalSearchOptimizer, MIN_POINTS_TO_OPTIMIZE, OptimizerConfig, OptimizerConfigError,
    TravelSpeeds,
};

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;
