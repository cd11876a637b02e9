// crates/plat-core/src/money.rs
//
// Currency and fraction-unit numeric types.
//
// The registry settles in credits; the smallest unit is the cent
// (1 CR = 100 cents). All internal accounting uses integer cents to avoid
// floating-point precision issues, and every settlement computation is
// checked: overflow fails the operation rather than wrapping.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of cents in one credit. 1 CR = 100 cents.
pub const CENTS_PER_CREDIT: u64 = 100;

/// Type alias for cents — the smallest currency denomination.
pub type Cents = u64;

/// Type alias for fraction units of an asset.
pub type Units = u64;

/// A credit amount, for display and reporting.
///
/// Wraps an amount in cents (the smallest denomination). Ledger arithmetic
/// stays on raw [`Cents`]; this wrapper only carries amounts to humans.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Credits {
    /// Amount in cents (1 CR = 100 cents).
    pub cents: u64,
}

impl Credits {
    /// Create a credit amount from a cent value.
    pub fn from_cents(cents: u64) -> Self {
        Self { cents }
    }

    /// Create a credit amount from a whole CR value (as f64).
    ///
    /// # Example
    /// ```
    /// use plat_core::money::Credits;
    /// let amount = Credits::from_credits(1.5);
    /// assert_eq!(amount.cents, 150);
    /// ```
    pub fn from_credits(amount: f64) -> Self {
        Self {
            cents: (amount * CENTS_PER_CREDIT as f64) as u64,
        }
    }

    /// Convert this amount to CR as a floating-point value.
    pub fn to_credits(&self) -> f64 {
        self.cents as f64 / CENTS_PER_CREDIT as f64
    }

    /// Returns zero CR.
    pub fn zero() -> Self {
        Self { cents: 0 }
    }
}

impl fmt::Display for Credits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let whole = self.cents / CENTS_PER_CREDIT;
        let frac = self.cents % CENTS_PER_CREDIT;
        if frac == 0 {
            write!(f, "{} CR", whole)
        } else {
            // Display up to 2 decimal places, trimming trailing zeros
            let frac_str = format!("{:02}", frac);
            let trimmed = frac_str.trim_end_matches('0');
            write!(f, "{}.{} CR", whole, trimmed)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cents_per_credit() {
        assert_eq!(CENTS_PER_CREDIT, 100);
    }

    #[test]
    fn test_from_credits() {
        let amount = Credits::from_credits(1.0);
        assert_eq!(amount.cents, CENTS_PER_CREDIT);

        let amount = Credits::from_credits(0.5);
        assert_eq!(amount.cents, 50);
    }

    #[test]
    fn test_to_credits() {
        let amount = Credits::from_cents(CENTS_PER_CREDIT);
        assert!((amount.to_credits() - 1.0).abs() < f64::EPSILON);

        let amount = Credits::from_cents(150);
        assert!((amount.to_credits() - 1.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_display_whole() {
        let amount = Credits::from_credits(42.0);
        assert_eq!(format!("{}", amount), "42 CR");
    }

    #[test]
    fn test_display_fractional() {
        let amount = Credits::from_cents(150);
        assert_eq!(format!("{}", amount), "1.5 CR");

        let amount = Credits::from_cents(105);
        assert_eq!(format!("{}", amount), "1.05 CR");
    }

    #[test]
    fn test_display_zero() {
        let amount = Credits::zero();
        assert_eq!(format!("{}", amount), "0 CR");
    }
}
