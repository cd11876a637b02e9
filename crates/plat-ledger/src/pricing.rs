// crates/plat-ledger/src/pricing.rs
//
// Global unit pricing and settlement quoting.
//
// One price applies uniformly to every asset's units. `quote` is the single
// place settlement amounts are computed, and it refuses to overflow.

use plat_core::{Cents, PlatError, Units};

/// The administrator-set price of one fraction unit, in cents.
#[derive(Debug, Clone)]
pub struct PriceBoard {
    unit_price: Cents,
}

impl PriceBoard {
    /// Create a board with the opening price.
    ///
    /// # Errors
    /// Returns `PlatError::ZeroAmount` if `unit_price` is zero; the unit
    /// price is defined positive.
    pub fn new(unit_price: Cents) -> Result<Self, PlatError> {
        if unit_price == 0 {
            return Err(PlatError::ZeroAmount);
        }
        Ok(Self { unit_price })
    }

    /// The current unit price in cents.
    pub fn unit_price(&self) -> Cents {
        self.unit_price
    }

    /// Replace the unit price. Applies to all subsequent settlements; open
    /// holdings are not revalued retroactively.
    ///
    /// # Errors
    /// Returns `PlatError::ZeroAmount` if `new_price` is zero.
    pub fn set(&mut self, new_price: Cents) -> Result<(), PlatError> {
        if new_price == 0 {
            return Err(PlatError::ZeroAmount);
        }
        self.unit_price = new_price;
        Ok(())
    }

    /// Settlement amount for `units` at the current price.
    ///
    /// # Errors
    /// Returns `PlatError::AmountOverflow` if the product exceeds
    /// `u64::MAX`.
    pub fn quote(&self, units: Units) -> Result<Cents, PlatError> {
        units
            .checked_mul(self.unit_price)
            .ok_or(PlatError::AmountOverflow)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_zero_price() {
        assert!(PriceBoard::new(0).is_err());
    }

    #[test]
    fn test_quote_multiplies() {
        let board = PriceBoard::new(250).unwrap();
        assert_eq!(board.quote(4).unwrap(), 1_000);
        assert_eq!(board.quote(0).unwrap(), 0);
    }

    #[test]
    fn test_quote_overflow() {
        let board = PriceBoard::new(2).unwrap();
        let err = board.quote(u64::MAX).unwrap_err();
        assert_eq!(err.code(), "AMOUNT_OVERFLOW");
    }

    #[test]
    fn test_set_replaces_price() {
        let mut board = PriceBoard::new(100).unwrap();
        board.set(175).unwrap();
        assert_eq!(board.unit_price(), 175);
        assert_eq!(board.quote(2).unwrap(), 350);
    }

    #[test]
    fn test_set_rejects_zero_and_keeps_price() {
        let mut board = PriceBoard::new(100).unwrap();
        assert!(board.set(0).is_err());
        assert_eq!(board.unit_price(), 100);
    }
}
