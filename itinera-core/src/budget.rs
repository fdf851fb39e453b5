//! Budget bookkeeping for a single planning session.
//!
//! [`BudgetState`] is an immutable value: committing spend produces a new
//! state and leaves the original untouched. Overspend is rejected rather
//! than clamped, so `remaining` can never go negative.

use thiserror::Error;

use crate::{InputError, Money};

/// Errors raised by budget operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BudgetError {
    /// The budget state itself was malformed.
    #[error(transparent)]
    Invalid(#[from] InputError),
    /// A proposed cost was negative.
    #[error("cost {cost} is not a valid amount")]
    InvalidAmount {
        /// Cost supplied by the caller.
        cost: Money,
    },
    /// Committing the cost would exceed the total budget.
    #[error("cost {cost} exceeds remaining budget {remaining}")]
    Overspend {
        /// Cost supplied by the caller.
        cost: Money,
        /// Budget left before the commit.
        remaining: Money,
    },
}

/// Total budget and the spend already committed against it.
///
/// # Examples
/// ```
/// use itinera_core::{BudgetState, Money};
///
/// # fn main() -> Result<(), itinera_core::BudgetError> {
/// let state = BudgetState::new(Money::from_major(1000), Money::from_major(250))?;
/// assert_eq!(state.remaining(), Money::from_major(750));
/// assert!(state.can_afford(Money::from_major(750))?);
/// let next = state.commit(Money::from_major(100))?;
/// assert_eq!(next.committed_spend(), Money::from_major(350));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct BudgetState {
    total_budget: Money,
    committed_spend: Money,
}

impl BudgetState {
    /// Validate and construct a budget state.
    ///
    /// # Errors
    /// Returns [`BudgetError::Invalid`] when either amount is negative or the
    /// committed spend already exceeds the total.
    pub fn new(total_budget: Money, committed_spend: Money) -> Result<Self, BudgetError> {
        if total_budget.is_negative() {
            return Err(InputError::NegativeAmount {
                field: "totalBudget",
                value: total_budget,
            }
            .into());
        }
        if committed_spend.is_negative() {
            return Err(InputError::NegativeAmount {
                field: "committedSpend",
                value: committed_spend,
            }
            .into());
        }
        if committed_spend > total_budget {
            return Err(InputError::CommittedExceedsTotal {
                total: total_budget,
                committed: committed_spend,
            }
            .into());
        }
        Ok(Self {
            total_budget,
            committed_spend,
        })
    }

    /// Total budget for the trip.
    #[must_use]
    pub const fn total_budget(&self) -> Money {
        self.total_budget
    }

    /// Spend committed so far.
    #[must_use]
    pub const fn committed_spend(&self) -> Money {
        self.committed_spend
    }

    /// Budget still available.
    #[must_use]
    pub fn remaining(&self) -> Money {
        // Construction guarantees committed <= total, both non-negative.
        self.total_budget
            .checked_sub(self.committed_spend)
            .unwrap_or(Money::ZERO)
    }

    /// Report whether `cost` fits inside the remaining budget.
    ///
    /// # Errors
    /// Returns [`BudgetError::InvalidAmount`] for a negative cost.
    pub fn can_afford(&self, cost: Money) -> Result<bool, BudgetError> {
        if cost.is_negative() {
            return Err(BudgetError::InvalidAmount { cost });
        }
        Ok(cost <= self.remaining())
    }

    /// Commit `cost`, returning the updated state.
    ///
    /// # Errors
    /// Returns [`BudgetError::InvalidAmount`] for a negative cost and
    /// [`BudgetError::Overspend`] when the cost exceeds the remaining budget.
    pub fn commit(&self, cost: Money) -> Result<Self, BudgetError> {
        if !self.can_afford(cost)? {
            return Err(BudgetError::Overspend {
                cost,
                remaining: self.remaining(),
            });
        }
        let committed_spend = self
            .committed_spend
            .checked_add(cost)
            .ok_or(BudgetError::Overspend {
                cost,
                remaining: self.remaining(),
            })?;
        Ok(Self {
            total_budget: self.total_budget,
            committed_spend,
        })
    }
}

/// Why a proposed cost was not accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum DecisionReason {
    /// The cost exceeded the remaining budget.
    InsufficientBudget,
}

/// Outcome of evaluating a proposed cost against a budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct BudgetDecision {
    /// Budget left after the decision; unchanged when rejected.
    pub remaining: Money,
    /// Whether the cost fits.
    pub accepted: bool,
    /// Present when the cost was rejected.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub reason: Option<DecisionReason>,
}

/// Stateless budget entry point.
///
/// # Examples
/// ```
/// use itinera_core::{BudgetTracker, Money};
///
/// # fn main() -> Result<(), itinera_core::BudgetError> {
/// let decision = BudgetTracker::evaluate(
///     Money::from_major(500),
///     Money::from_major(450),
///     Money::from_major(80),
/// )?;
/// assert!(!decision.accepted);
/// assert_eq!(decision.remaining, Money::from_major(50));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct BudgetTracker;

impl BudgetTracker {
    /// Evaluate `proposed_cost` against a budget without mutating anything.
    ///
    /// # Errors
    /// Returns [`BudgetError::Invalid`] for a malformed budget and
    /// [`BudgetError::InvalidAmount`] for a negative proposed cost.
    pub fn evaluate(
        total_budget: Money,
        committed_spend: Money,
        proposed_cost: Money,
    ) -> Result<BudgetDecision, BudgetError> {
        let state = BudgetState::new(total_budget, committed_spend)?;
        match state.commit(proposed_cost) {
            Ok(next) => Ok(BudgetDecision {
                remaining: next.remaining(),
                accepted: true,
                reason: None,
            }),
            Err(BudgetError::Overspend { remaining, .. }) => Ok(BudgetDecision {
                remaining,
                accepted: false,
                reason: Some(DecisionReason::InsufficientBudget),
            }),
            Err(err) => Err(err),
        }
    }
}
