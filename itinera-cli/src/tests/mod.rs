//! Shared test harness modules for the Itinera CLI.
#![expect(
    clippy::panic,
    reason = "Tests assert panic branches to surface unexpected CLI outcomes"
)]

use super::*;

mod helpers;
#[cfg(feature = "solver-local")]
mod route_unit;
