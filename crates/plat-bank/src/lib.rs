// crates/plat-bank/src/lib.rs
//
// plat-bank: in-memory settlement accounts for the Plat registry.
//
// `SettlementBank` is the value-transfer channel the ledger settles against:
// a process-local account book keyed by account id. Debits require funds,
// credits auto-create the receiving account, and a transfer either moves the
// full amount or nothing. The registry's treasury account lives here like
// any other account, so the ledger's internal balance and the bank's view of
// that account stay reconcilable.

use std::collections::HashMap;

use parking_lot::RwLock;

use plat_core::{AccountId, Cents, PlatError, ValueChannel};

/// Process-local currency accounts.
///
/// Interior-mutable so one instance can be shared as `Arc<SettlementBank>`
/// between the ledger (settlements) and the service layer (queries and
/// seeding deposits).
#[derive(Debug, Default)]
pub struct SettlementBank {
    accounts: RwLock<HashMap<AccountId, Cents>>,
}

impl SettlementBank {
    pub fn new() -> Self {
        Self {
            accounts: RwLock::new(HashMap::new()),
        }
    }

    /// Register `account` with a zero balance. Idempotent: an existing
    /// balance is left untouched.
    pub fn open(&self, account: AccountId) {
        self.accounts.write().entry(account).or_insert(0);
    }

    /// Seed `amount` cents into `account`, creating it if needed.
    ///
    /// This is the faucet the registry owner uses to fund participant
    /// accounts; it is the only way currency enters the bank.
    ///
    /// # Errors
    ///
    /// Returns `PlatError::AmountOverflow` if the balance would exceed
    /// `u64::MAX`.
    pub fn deposit(&self, account: &AccountId, amount: Cents) -> Result<(), PlatError> {
        let mut accounts = self.accounts.write();
        let balance = accounts.entry(*account).or_insert(0);
        *balance = balance.checked_add(amount).ok_or(PlatError::AmountOverflow)?;
        Ok(())
    }

    /// Current balance of `account` in cents. Unknown accounts read as zero.
    pub fn balance(&self, account: &AccountId) -> Cents {
        self.accounts.read().get(account).copied().unwrap_or(0)
    }

    /// Number of accounts the bank knows about.
    pub fn account_count(&self) -> usize {
        self.accounts.read().len()
    }
}

impl ValueChannel for SettlementBank {
    fn transfer(&self, from: &AccountId, to: &AccountId, amount: Cents) -> Result<(), PlatError> {
        if amount == 0 {
            return Ok(());
        }

        let mut accounts = self.accounts.write();
        let from_balance = accounts.get(from).copied().unwrap_or(0);
        if from_balance < amount {
            return Err(PlatError::TransferFailed(format!(
                "account {} holds {} cents, transfer needs {}",
                from, from_balance, amount
            )));
        }

        // A self-transfer is a funded no-op, not a balance rewrite.
        if from == to {
            return Ok(());
        }

        let to_balance = accounts.get(to).copied().unwrap_or(0);
        let credited = to_balance.checked_add(amount).ok_or_else(|| {
            PlatError::TransferFailed("recipient balance would overflow".to_string())
        })?;

        accounts.insert(*from, from_balance - amount);
        accounts.insert(*to, credited);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn acct(byte: u8) -> AccountId {
        AccountId::from_bytes([byte; 32])
    }

    #[test]
    fn test_open_is_idempotent() {
        let bank = SettlementBank::new();
        bank.open(acct(1));
        bank.deposit(&acct(1), 500).unwrap();
        bank.open(acct(1));
        assert_eq!(bank.balance(&acct(1)), 500);
        assert_eq!(bank.account_count(), 1);
    }

    #[test]
    fn test_deposit_creates_account() {
        let bank = SettlementBank::new();
        bank.deposit(&acct(2), 300).unwrap();
        assert_eq!(bank.balance(&acct(2)), 300);
    }

    #[test]
    fn test_deposit_overflow_rejected() {
        let bank = SettlementBank::new();
        bank.deposit(&acct(2), u64::MAX).unwrap();
        let err = bank.deposit(&acct(2), 1).unwrap_err();
        assert_eq!(err.code(), "AMOUNT_OVERFLOW");
        assert_eq!(bank.balance(&acct(2)), u64::MAX);
    }

    #[test]
    fn test_transfer_moves_funds() {
        let bank = SettlementBank::new();
        bank.deposit(&acct(1), 1_000).unwrap();

        bank.transfer(&acct(1), &acct(2), 400).unwrap();
        assert_eq!(bank.balance(&acct(1)), 600);
        // Recipient was auto-created.
        assert_eq!(bank.balance(&acct(2)), 400);
    }

    #[test]
    fn test_transfer_insufficient_funds() {
        let bank = SettlementBank::new();
        bank.deposit(&acct(1), 100).unwrap();

        let err = bank.transfer(&acct(1), &acct(2), 101).unwrap_err();
        assert_eq!(err.code(), "TRANSFER_FAILED");
        // Nothing moved.
        assert_eq!(bank.balance(&acct(1)), 100);
        assert_eq!(bank.balance(&acct(2)), 0);
    }

    #[test]
    fn test_transfer_from_unknown_account_fails() {
        let bank = SettlementBank::new();
        assert!(bank.transfer(&acct(9), &acct(2), 1).is_err());
    }

    #[test]
    fn test_zero_transfer_is_noop() {
        let bank = SettlementBank::new();
        // Even from an account the bank has never seen.
        bank.transfer(&acct(9), &acct(2), 0).unwrap();
        assert_eq!(bank.balance(&acct(2)), 0);
    }

    #[test]
    fn test_self_transfer_does_not_mint() {
        let bank = SettlementBank::new();
        bank.deposit(&acct(1), 250).unwrap();
        bank.transfer(&acct(1), &acct(1), 100).unwrap();
        assert_eq!(bank.balance(&acct(1)), 250);

        // Still requires the funds to exist.
        assert!(bank.transfer(&acct(1), &acct(1), 251).is_err());
    }

    #[test]
    fn test_transfer_recipient_overflow() {
        let bank = SettlementBank::new();
        bank.deposit(&acct(1), 10).unwrap();
        bank.deposit(&acct(2), u64::MAX).unwrap();

        assert!(bank.transfer(&acct(1), &acct(2), 10).is_err());
        // Payer untouched by the failed credit.
        assert_eq!(bank.balance(&acct(1)), 10);
    }
}
