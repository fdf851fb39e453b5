//! Exact currency amounts.
//!
//! Budgets and costs are held as a signed count of minor currency units
//! (cents for most currencies) so comparisons never suffer from binary
//! floating-point drift. Negative values are representable purely so that
//! they can be rejected at validation boundaries.

use std::fmt;

/// An amount of money in minor currency units.
///
/// # Examples
/// ```
/// use itinera_core::Money;
///
/// let nightly = Money::from_major(150);
/// assert_eq!(nightly.minor_units(), 15_000);
/// assert!(!nightly.is_negative());
/// assert_eq!(nightly.to_string(), "150.00");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Money(i64);

impl Money {
    /// The zero amount.
    pub const ZERO: Self = Self(0);

    /// Number of minor units in one major unit.
    pub const MINOR_PER_MAJOR: i64 = 100;

    /// Construct an amount from minor units.
    #[must_use]
    pub const fn from_minor(minor_units: i64) -> Self {
        Self(minor_units)
    }

    /// Construct an amount from whole major units, saturating on overflow.
    #[must_use]
    pub const fn from_major(major_units: i64) -> Self {
        Self(major_units.saturating_mul(Self::MINOR_PER_MAJOR))
    }

    /// Return the amount in minor units.
    #[must_use]
    pub const fn minor_units(self) -> i64 {
        self.0
    }

    /// Report whether the amount is below zero.
    #[must_use]
    pub const fn is_negative(self) -> bool {
        self.0 < 0
    }

    /// Report whether the amount is exactly zero.
    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Add two amounts, returning `None` on overflow.
    #[must_use]
    pub const fn checked_add(self, other: Self) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(sum) => Some(Self(sum)),
            None => None,
        }
    }

    /// Subtract `other`, returning `None` on overflow.
    #[must_use]
    pub const fn checked_sub(self, other: Self) -> Option<Self> {
        match self.0.checked_sub(other.0) {
            Some(diff) => Some(Self(diff)),
            None => None,
        }
    }

    /// Divide into `parts` equal shares, rounding down to the minor unit.
    ///
    /// Returns `None` when `parts` is zero.
    #[must_use]
    #[expect(
        clippy::integer_division,
        reason = "per-share allowance deliberately rounds down"
    )]
    pub const fn split_floor(self, parts: u32) -> Option<Self> {
        if parts == 0 {
            return None;
        }
        Some(Self(self.0.div_euclid(parts as i64)))
    }

    /// Return the amount as a floating-point count of minor units.
    #[must_use]
    #[expect(
        clippy::cast_precision_loss,
        reason = "ratios over realistic budgets stay well inside f64 precision"
    )]
    pub const fn as_f64(self) -> f64 {
        self.0 as f64
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        let per_major = Self::MINOR_PER_MAJOR.unsigned_abs();
        write!(
            f,
            "{sign}{}.{:02}",
            abs.div_euclid(per_major),
            abs.rem_euclid(per_major)
        )
    }
}
