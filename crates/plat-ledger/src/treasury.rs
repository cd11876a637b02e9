// crates/plat-ledger/src/treasury.rs
//
// Registry treasury: the cents the registry holds to honor sell payouts and
// the owner's withdrawal.
//
// The treasury receives every buy payment in full (overpayments included)
// and mirrors the registry's settlement-bank account one-to-one. Sell
// payouts debit it; withdrawal drains it.

use plat_core::{Cents, PlatError};

/// Liquid balance of the registry, in cents.
#[derive(Debug, Clone)]
pub struct Treasury {
    /// Current balance in cents.
    balance: Cents,
}

impl Treasury {
    /// Create a new treasury with zero balance.
    pub fn new() -> Self {
        Self { balance: 0 }
    }

    /// Get the current treasury balance (in cents).
    pub fn balance(&self) -> Cents {
        self.balance
    }

    /// Record an incoming buy payment.
    ///
    /// # Errors
    /// Returns `PlatError::AmountOverflow` if the balance would exceed
    /// `u64::MAX`.
    pub fn deposit(&mut self, amount: Cents) -> Result<(), PlatError> {
        self.balance = self
            .balance
            .checked_add(amount)
            .ok_or(PlatError::AmountOverflow)?;
        Ok(())
    }

    /// Record an outgoing sell payout.
    ///
    /// # Errors
    /// Returns `PlatError::InsufficientBalance` if `amount` exceeds the
    /// balance.
    pub fn debit(&mut self, amount: Cents) -> Result<(), PlatError> {
        if amount > self.balance {
            return Err(PlatError::InsufficientBalance {
                required: amount,
                held: self.balance,
            });
        }
        self.balance -= amount;
        Ok(())
    }

    /// Empty the treasury, returning the amount that was held.
    pub fn drain(&mut self) -> Cents {
        std::mem::take(&mut self.balance)
    }

    /// Put back an amount a `drain` or `debit` just removed, after the
    /// downstream settlement was refused. The amount fit a moment ago, so
    /// this cannot overflow; it stays crate-private to keep it that way.
    pub(crate) fn restore(&mut self, amount: Cents) {
        self.balance += amount;
    }
}

impl Default for Treasury {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_treasury_has_zero_balance() {
        let treasury = Treasury::new();
        assert_eq!(treasury.balance(), 0);
    }

    #[test]
    fn test_deposit() {
        let mut treasury = Treasury::new();
        treasury.deposit(100).unwrap();
        assert_eq!(treasury.balance(), 100);
    }

    #[test]
    fn test_multiple_deposits() {
        let mut treasury = Treasury::new();
        treasury.deposit(50).unwrap();
        treasury.deposit(30).unwrap();
        assert_eq!(treasury.balance(), 80);
    }

    #[test]
    fn test_deposit_overflow_rejected() {
        let mut treasury = Treasury::new();
        treasury.deposit(u64::MAX).unwrap();
        let err = treasury.deposit(1).unwrap_err();
        assert_eq!(err.code(), "AMOUNT_OVERFLOW");
        assert_eq!(treasury.balance(), u64::MAX);
    }

    #[test]
    fn test_debit_success() {
        let mut treasury = Treasury::new();
        treasury.deposit(100).unwrap();
        assert!(treasury.debit(40).is_ok());
        assert_eq!(treasury.balance(), 60);
    }

    #[test]
    fn test_debit_exact_balance() {
        let mut treasury = Treasury::new();
        treasury.deposit(100).unwrap();
        assert!(treasury.debit(100).is_ok());
        assert_eq!(treasury.balance(), 0);
    }

    #[test]
    fn test_debit_insufficient_balance() {
        let mut treasury = Treasury::new();
        treasury.deposit(50).unwrap();
        let result = treasury.debit(100);
        assert!(result.is_err());
        // Balance should be unchanged
        assert_eq!(treasury.balance(), 50);
    }

    #[test]
    fn test_drain_empties_treasury() {
        let mut treasury = Treasury::new();
        treasury.deposit(75).unwrap();
        assert_eq!(treasury.drain(), 75);
        assert_eq!(treasury.balance(), 0);

        // Draining an empty treasury yields zero.
        assert_eq!(treasury.drain(), 0);
    }

    #[test]
    fn test_restore_after_drain() {
        let mut treasury = Treasury::new();
        treasury.deposit(75).unwrap();
        let drained = treasury.drain();
        treasury.restore(drained);
        assert_eq!(treasury.balance(), 75);
    }
}
