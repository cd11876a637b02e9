// crates/plat-ledger/src/ledger.rs
//
// PropertyLedger: the composed registry state machine.
//
// Every mutation follows the same discipline: authorize, validate, mutate,
// settle. All checks come before the first write, so a failing precondition
// never leaves a partial state. Outbound settlements (sell payouts, the
// owner's withdrawal) happen only after the books are written and are rolled
// back if the channel refuses; the ledger is exclusively borrowed for the
// whole call, so no caller can observe the intermediate state.
//
// Incoming value (buy payments) is collected before the books are written,
// because once the channel has moved the buyer's cents the remaining
// mutation must not be able to fail. Both orderings keep the registry's
// internal treasury balance equal to its settlement-bank account.

use std::sync::Arc;

use chrono::Utc;

use plat_core::{
    AccountId, Asset, AssetId, AssetMetadata, Cents, EventRecord, LedgerEvent, PlatError, Units,
    ValueChannel,
};

use crate::access::OwnerGate;
use crate::fractions::FractionBook;
use crate::pricing::PriceBoard;
use crate::registry::AssetBook;
use crate::treasury::Treasury;

/// The fractional-ownership ledger for all registered properties.
pub struct PropertyLedger {
    access: OwnerGate,
    assets: AssetBook,
    fractions: FractionBook,
    pricing: PriceBoard,
    treasury: Treasury,
    /// The registry's own account on the settlement channel. Buy payments
    /// land here and payouts leave from here; it accepts currency through
    /// no other path.
    treasury_account: AccountId,
    channel: Arc<dyn ValueChannel>,
    journal: Vec<EventRecord>,
}

impl PropertyLedger {
    /// Create a ledger with the given owner, treasury account, and opening
    /// unit price.
    ///
    /// # Errors
    /// Returns `PlatError::ZeroAmount` if `unit_price` is zero.
    pub fn new(
        owner: AccountId,
        treasury_account: AccountId,
        unit_price: Cents,
        channel: Arc<dyn ValueChannel>,
    ) -> Result<Self, PlatError> {
        Ok(Self {
            access: OwnerGate::new(owner),
            assets: AssetBook::new(),
            fractions: FractionBook::new(),
            pricing: PriceBoard::new(unit_price)?,
            treasury: Treasury::new(),
            treasury_account,
            channel,
            journal: Vec::new(),
        })
    }

    // ------------------------------------------------------------------
    // Owner-only mutations
    // ------------------------------------------------------------------

    /// Mint a new asset with a fixed fraction supply, all of it initially
    /// unsold. Returns the new asset's id.
    ///
    /// # Errors
    /// `Unauthorized` unless `caller` is the owner; `ZeroAmount` if
    /// `total_supply` is zero.
    pub fn mint(
        &mut self,
        caller: &AccountId,
        metadata: AssetMetadata,
        display_uri: String,
        total_supply: Units,
    ) -> Result<AssetId, PlatError> {
        self.access.authorize(caller)?;
        let asset_id = self.assets.mint(metadata, display_uri, total_supply)?;
        self.fractions.open(asset_id, total_supply);
        self.seal(LedgerEvent::AssetMinted {
            asset_id,
            total_supply,
        });
        Ok(asset_id)
    }

    /// Replace an asset's descriptive metadata. Supply, holdings, and
    /// pricing are untouched.
    pub fn set_metadata(
        &mut self,
        caller: &AccountId,
        asset_id: AssetId,
        metadata: AssetMetadata,
    ) -> Result<(), PlatError> {
        self.access.authorize(caller)?;
        self.assets.set_metadata(asset_id, metadata)
    }

    /// Replace the global unit price. Takes effect for all subsequent
    /// settlements; open positions are not revalued.
    pub fn set_price(&mut self, caller: &AccountId, new_price: Cents) -> Result<(), PlatError> {
        self.access.authorize(caller)?;
        self.pricing.set(new_price)?;
        self.seal(LedgerEvent::PriceUpdated { new_price });
        Ok(())
    }

    /// Drain the treasury to the owner's account. Returns the amount moved.
    ///
    /// Withdrawing an empty treasury succeeds, moves nothing, and never
    /// touches the channel.
    pub fn withdraw(&mut self, caller: &AccountId) -> Result<Cents, PlatError> {
        self.access.authorize(caller)?;
        let owner = self.access.owner();
        let amount = self.treasury.drain();
        if amount > 0 {
            if let Err(e) = self.channel.transfer(&self.treasury_account, &owner, amount) {
                self.treasury.restore(amount);
                return Err(e);
            }
        }
        self.seal(LedgerEvent::Withdrawal { owner, amount });
        Ok(amount)
    }

    /// Hand the registry, and with it every owner privilege, to `new_owner`.
    pub fn transfer_ownership(
        &mut self,
        caller: &AccountId,
        new_owner: AccountId,
    ) -> Result<(), PlatError> {
        let previous = self.access.transfer(caller, new_owner)?;
        self.seal(LedgerEvent::OwnershipTransferred {
            previous,
            new: new_owner,
        });
        Ok(())
    }

    // ------------------------------------------------------------------
    // Market mutations
    // ------------------------------------------------------------------

    /// Buy `units` of `asset_id` from the unsold pool, paying `paid` cents.
    ///
    /// The full payment is collected and kept, overpayment included; there
    /// are no refunds. Returns the quoted cost of the purchase.
    ///
    /// # Errors
    /// In check order: `AssetNotFound`, `ZeroAmount` for zero units,
    /// `AmountOverflow` if the cost is unrepresentable, `InsufficientPayment`
    /// if `paid` is below the cost, `InsufficientSupply` if the pool cannot
    /// cover `units`, and `TransferFailed` if the buyer's payment does not
    /// clear. Any error leaves both ledger and channel untouched.
    pub fn buy(
        &mut self,
        buyer: &AccountId,
        asset_id: AssetId,
        units: Units,
        paid: Cents,
    ) -> Result<Cents, PlatError> {
        if !self.assets.exists(asset_id) {
            return Err(PlatError::AssetNotFound(asset_id));
        }
        if units == 0 {
            return Err(PlatError::ZeroAmount);
        }
        let cost = self.pricing.quote(units)?;
        if paid < cost {
            return Err(PlatError::InsufficientPayment {
                required: cost,
                paid,
            });
        }
        let available = self.fractions.unsold(asset_id)?;
        if available < units {
            return Err(PlatError::InsufficientSupply {
                asset_id,
                requested: units,
                available,
            });
        }
        // The deposit below must be provably writable before any money
        // moves on the channel.
        if self.treasury.balance().checked_add(paid).is_none() {
            return Err(PlatError::AmountOverflow);
        }

        // Collect the payment first; every book write after this point is
        // covered by the checks above and cannot fail.
        self.channel.transfer(buyer, &self.treasury_account, paid)?;
        self.fractions.allot(asset_id, buyer, units)?;
        self.treasury.deposit(paid)?;

        self.seal(LedgerEvent::FractionsPurchased {
            buyer: *buyer,
            asset_id,
            units,
        });
        Ok(cost)
    }

    /// Sell `units` of `asset_id` back to the registry at the current
    /// price. Returns the payout in cents.
    ///
    /// The books are written before the payout leaves the treasury; if the
    /// channel refuses the payout, the books are rolled back and the call
    /// fails as a whole.
    ///
    /// # Errors
    /// In check order: `AssetNotFound`, `ZeroAmount` for zero units,
    /// `InsufficientFractions` if the seller does not hold `units`,
    /// `AmountOverflow` if the payout is unrepresentable,
    /// `InsufficientBalance` if the treasury cannot cover it, and
    /// `TransferFailed` if the payout does not clear.
    pub fn sell(
        &mut self,
        seller: &AccountId,
        asset_id: AssetId,
        units: Units,
    ) -> Result<Cents, PlatError> {
        if !self.assets.exists(asset_id) {
            return Err(PlatError::AssetNotFound(asset_id));
        }
        if units == 0 {
            return Err(PlatError::ZeroAmount);
        }
        let held = self.fractions.balance_of(asset_id, seller)?;
        if held < units {
            return Err(PlatError::InsufficientFractions {
                requested: units,
                held,
            });
        }
        let payout = self.pricing.quote(units)?;
        if payout > self.treasury.balance() {
            return Err(PlatError::InsufficientBalance {
                required: payout,
                held: self.treasury.balance(),
            });
        }

        // Books first, money last. The two writes are covered by the checks
        // above; the transfer is the only step left that can fail.
        self.fractions.surrender(asset_id, seller, units)?;
        self.treasury.debit(payout)?;
        if let Err(e) = self.channel.transfer(&self.treasury_account, seller, payout) {
            self.treasury.restore(payout);
            self.fractions.unwind_surrender(asset_id, seller, units);
            return Err(e);
        }

        self.seal(LedgerEvent::FractionsSold {
            seller: *seller,
            asset_id,
            units,
        });
        Ok(payout)
    }

    // ------------------------------------------------------------------
    // External transfer screening
    // ------------------------------------------------------------------

    /// Screen a channel transfer requested from outside the ledger. The
    /// treasury account may be neither the recipient (currency enters only
    /// through `buy`) nor the payer (currency leaves only through `sell`
    /// payouts and `withdraw`).
    ///
    /// # Errors
    /// `DirectPaymentRejected` when `to` is the treasury account;
    /// `Unauthorized` when `from` is.
    pub fn vet_external_transfer(
        &self,
        from: &AccountId,
        to: &AccountId,
    ) -> Result<(), PlatError> {
        if *to == self.treasury_account {
            return Err(PlatError::DirectPaymentRejected);
        }
        if *from == self.treasury_account {
            return Err(PlatError::Unauthorized { caller: *from });
        }
        Ok(())
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    pub fn owner(&self) -> AccountId {
        self.access.owner()
    }

    pub fn treasury_account(&self) -> AccountId {
        self.treasury_account
    }

    pub fn unit_price(&self) -> Cents {
        self.pricing.unit_price()
    }

    /// Cost of `units` at the current price, without touching anything.
    pub fn quote(&self, units: Units) -> Result<Cents, PlatError> {
        self.pricing.quote(units)
    }

    pub fn treasury_balance(&self) -> Cents {
        self.treasury.balance()
    }

    pub fn asset_count(&self) -> u64 {
        self.assets.count()
    }

    pub fn asset_exists(&self, asset_id: AssetId) -> bool {
        self.assets.exists(asset_id)
    }

    pub fn asset(&self, asset_id: AssetId) -> Result<&Asset, PlatError> {
        self.assets.get(asset_id)
    }

    pub fn assets(&self) -> impl Iterator<Item = &Asset> {
        self.assets.iter()
    }

    pub fn unsold_units(&self, asset_id: AssetId) -> Result<Units, PlatError> {
        self.fractions.unsold(asset_id)
    }

    pub fn balance_of(&self, asset_id: AssetId, holder: &AccountId) -> Result<Units, PlatError> {
        self.fractions.balance_of(asset_id, holder)
    }

    pub fn holder_count(&self, asset_id: AssetId) -> Result<usize, PlatError> {
        self.fractions.holder_count(asset_id)
    }

    /// Unsold pool plus all holder balances; always the total supply.
    pub fn circulating(&self, asset_id: AssetId) -> Result<Units, PlatError> {
        self.fractions.circulating(asset_id)
    }

    /// Total number of journaled events.
    pub fn event_count(&self) -> u64 {
        self.journal.len() as u64
    }

    /// The most recent `limit` journal entries, oldest first.
    pub fn events(&self, limit: usize) -> &[EventRecord] {
        let start = self.journal.len().saturating_sub(limit);
        &self.journal[start..]
    }

    fn seal(&mut self, event: LedgerEvent) {
        let seq = self.journal.len() as u64;
        self.journal.push(EventRecord {
            seq,
            at: Utc::now(),
            event,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};

    use plat_bank::SettlementBank;
    use plat_core::AssetMetadata;

    fn owner() -> AccountId {
        AccountId::from_bytes([1; 32])
    }

    fn buyer() -> AccountId {
        AccountId::from_bytes([2; 32])
    }

    fn treasury_acct() -> AccountId {
        AccountId::from_bytes([200; 32])
    }

    fn meta(name: &str) -> AssetMetadata {
        AssetMetadata::new(name, "desc", "somewhere", "")
    }

    /// Ledger wired to a real settlement bank, with the buyer funded.
    fn setup(unit_price: Cents, buyer_cents: Cents) -> (PropertyLedger, Arc<SettlementBank>) {
        let bank = Arc::new(SettlementBank::new());
        bank.open(owner());
        bank.open(treasury_acct());
        bank.deposit(&buyer(), buyer_cents).unwrap();
        let ledger =
            PropertyLedger::new(owner(), treasury_acct(), unit_price, bank.clone()).unwrap();
        (ledger, bank)
    }

    /// Channel that can be armed to refuse transfers leaving one account.
    struct FlakyChannel {
        inner: SettlementBank,
        refuse_payer: AccountId,
        armed: AtomicBool,
    }

    impl FlakyChannel {
        fn new(refuse_payer: AccountId) -> Self {
            Self {
                inner: SettlementBank::new(),
                refuse_payer,
                armed: AtomicBool::new(false),
            }
        }
    }

    impl ValueChannel for FlakyChannel {
        fn transfer(
            &self,
            from: &AccountId,
            to: &AccountId,
            amount: Cents,
        ) -> Result<(), PlatError> {
            if self.armed.load(Ordering::SeqCst) && *from == self.refuse_payer {
                return Err(PlatError::TransferFailed("channel refused".to_string()));
            }
            self.inner.transfer(from, to, amount)
        }
    }

    #[test]
    fn test_mint_assigns_sequential_ids() {
        let (mut ledger, _) = setup(1, 0);
        let a = ledger.mint(&owner(), meta("a"), "uri-a".into(), 1_000).unwrap();
        let b = ledger.mint(&owner(), meta("b"), "uri-b".into(), 50).unwrap();
        assert_eq!((a, b), (0, 1));
        assert_eq!(ledger.asset_count(), 2);
        assert_eq!(ledger.unsold_units(0).unwrap(), 1_000);
        assert_eq!(ledger.unsold_units(1).unwrap(), 50);
    }

    #[test]
    fn test_mint_requires_owner() {
        let (mut ledger, _) = setup(1, 0);
        let err = ledger.mint(&buyer(), meta("a"), "uri".into(), 10).unwrap_err();
        assert_eq!(err.code(), "UNAUTHORIZED");
        assert_eq!(ledger.asset_count(), 0);
        assert_eq!(ledger.event_count(), 0);
    }

    #[test]
    fn test_mint_zero_supply_rejected() {
        let (mut ledger, _) = setup(1, 0);
        assert!(ledger.mint(&owner(), meta("a"), "uri".into(), 0).is_err());
        assert_eq!(ledger.asset_count(), 0);
    }

    #[test]
    fn test_set_metadata_owner_only() {
        let (mut ledger, _) = setup(1, 0);
        ledger.mint(&owner(), meta("before"), "uri".into(), 10).unwrap();

        assert!(ledger.set_metadata(&buyer(), 0, meta("x")).is_err());
        ledger.set_metadata(&owner(), 0, meta("after")).unwrap();
        assert_eq!(ledger.asset(0).unwrap().metadata.name, "after");
    }

    #[test]
    fn test_set_price_owner_only_and_positive() {
        let (mut ledger, _) = setup(100, 0);
        assert!(ledger.set_price(&buyer(), 200).is_err());
        assert!(ledger.set_price(&owner(), 0).is_err());
        assert_eq!(ledger.unit_price(), 100);

        ledger.set_price(&owner(), 250).unwrap();
        assert_eq!(ledger.unit_price(), 250);
    }

    #[test]
    fn test_buy_moves_units_and_payment() {
        let (mut ledger, bank) = setup(1, 100);
        ledger.mint(&owner(), meta("a"), "uri".into(), 1_000).unwrap();

        let cost = ledger.buy(&buyer(), 0, 100, 100).unwrap();
        assert_eq!(cost, 100);

        assert_eq!(ledger.balance_of(0, &buyer()).unwrap(), 100);
        assert_eq!(ledger.unsold_units(0).unwrap(), 900);
        assert_eq!(ledger.treasury_balance(), 100);
        // The channel mirrors the ledger.
        assert_eq!(bank.balance(&buyer()), 0);
        assert_eq!(bank.balance(&treasury_acct()), 100);
    }

    #[test]
    fn test_buy_overpayment_is_kept() {
        let (mut ledger, bank) = setup(1, 150);
        ledger.mint(&owner(), meta("a"), "uri".into(), 1_000).unwrap();

        let cost = ledger.buy(&buyer(), 0, 100, 150).unwrap();
        assert_eq!(cost, 100);
        // No refunds: the full 150 stays with the registry.
        assert_eq!(ledger.treasury_balance(), 150);
        assert_eq!(bank.balance(&buyer()), 0);
    }

    #[test]
    fn test_buy_unknown_asset() {
        let (mut ledger, _) = setup(1, 100);
        let err = ledger.buy(&buyer(), 3, 10, 10).unwrap_err();
        assert_eq!(err.code(), "ASSET_NOT_FOUND");
    }

    #[test]
    fn test_buy_zero_units_rejected() {
        let (mut ledger, _) = setup(1, 100);
        ledger.mint(&owner(), meta("a"), "uri".into(), 1_000).unwrap();
        let err = ledger.buy(&buyer(), 0, 0, 100).unwrap_err();
        assert_eq!(err.code(), "ZERO_AMOUNT");
    }

    #[test]
    fn test_buy_underpayment_rejected() {
        let (mut ledger, bank) = setup(2, 100);
        ledger.mint(&owner(), meta("a"), "uri".into(), 1_000).unwrap();

        let err = ledger.buy(&buyer(), 0, 100, 199).unwrap_err();
        assert_eq!(err.code(), "INSUFFICIENT_PAYMENT");
        // Nothing moved anywhere.
        assert_eq!(ledger.unsold_units(0).unwrap(), 1_000);
        assert_eq!(ledger.treasury_balance(), 0);
        assert_eq!(bank.balance(&buyer()), 100);
    }

    #[test]
    fn test_buy_beyond_supply_rejected() {
        let (mut ledger, _) = setup(1, 5_000);
        ledger.mint(&owner(), meta("a"), "uri".into(), 100).unwrap();

        let err = ledger.buy(&buyer(), 0, 101, 101).unwrap_err();
        assert_eq!(err.code(), "INSUFFICIENT_SUPPLY");
        assert_eq!(ledger.unsold_units(0).unwrap(), 100);
    }

    #[test]
    fn test_buy_with_unfunded_account_rejected() {
        // Buyer claims to pay 100 but the channel holds only 40 for them.
        let (mut ledger, bank) = setup(1, 40);
        ledger.mint(&owner(), meta("a"), "uri".into(), 1_000).unwrap();

        let err = ledger.buy(&buyer(), 0, 100, 100).unwrap_err();
        assert_eq!(err.code(), "TRANSFER_FAILED");
        // The ledger did not move either.
        assert_eq!(ledger.unsold_units(0).unwrap(), 1_000);
        assert_eq!(ledger.treasury_balance(), 0);
        assert_eq!(bank.balance(&buyer()), 40);
    }

    #[test]
    fn test_buy_cost_overflow_rejected() {
        let (mut ledger, _) = setup(u64::MAX, 100);
        ledger.mint(&owner(), meta("a"), "uri".into(), 1_000).unwrap();
        let err = ledger.buy(&buyer(), 0, 2, 100).unwrap_err();
        assert_eq!(err.code(), "AMOUNT_OVERFLOW");
    }

    #[test]
    fn test_sell_pays_out_at_current_price() {
        let (mut ledger, bank) = setup(1, 100);
        ledger.mint(&owner(), meta("a"), "uri".into(), 1_000).unwrap();
        ledger.buy(&buyer(), 0, 100, 100).unwrap();

        let payout = ledger.sell(&buyer(), 0, 50).unwrap();
        assert_eq!(payout, 50);

        assert_eq!(ledger.balance_of(0, &buyer()).unwrap(), 50);
        assert_eq!(ledger.unsold_units(0).unwrap(), 950);
        assert_eq!(ledger.treasury_balance(), 50);
        assert_eq!(bank.balance(&buyer()), 50);
        assert_eq!(bank.balance(&treasury_acct()), 50);
    }

    #[test]
    fn test_sell_more_than_held_rejected() {
        let (mut ledger, _) = setup(1, 100);
        ledger.mint(&owner(), meta("a"), "uri".into(), 1_000).unwrap();
        ledger.buy(&buyer(), 0, 100, 100).unwrap();

        let err = ledger.sell(&buyer(), 0, 101).unwrap_err();
        assert_eq!(err.code(), "INSUFFICIENT_FRACTIONS");
        assert_eq!(ledger.balance_of(0, &buyer()).unwrap(), 100);
    }

    #[test]
    fn test_sell_zero_units_rejected() {
        let (mut ledger, _) = setup(1, 100);
        ledger.mint(&owner(), meta("a"), "uri".into(), 1_000).unwrap();
        assert!(ledger.sell(&buyer(), 0, 0).is_err());
    }

    #[test]
    fn test_sell_after_price_rise_needs_treasury_cover() {
        // Buy 100 at 1 cent, then the owner reprices to 10 cents. Selling
        // all 100 would owe 1_000 cents but the treasury only holds 100.
        let (mut ledger, _) = setup(1, 100);
        ledger.mint(&owner(), meta("a"), "uri".into(), 1_000).unwrap();
        ledger.buy(&buyer(), 0, 100, 100).unwrap();
        ledger.set_price(&owner(), 10).unwrap();

        let err = ledger.sell(&buyer(), 0, 100).unwrap_err();
        assert_eq!(err.code(), "INSUFFICIENT_BALANCE");
        // Holdings intact after the refusal.
        assert_eq!(ledger.balance_of(0, &buyer()).unwrap(), 100);
        assert_eq!(ledger.treasury_balance(), 100);

        // Selling only what the treasury covers still works.
        assert_eq!(ledger.sell(&buyer(), 0, 10).unwrap(), 100);
    }

    #[test]
    fn test_sell_rolls_back_when_channel_refuses() {
        let channel = Arc::new(FlakyChannel::new(treasury_acct()));
        channel.inner.deposit(&buyer(), 100).unwrap();
        let mut ledger =
            PropertyLedger::new(owner(), treasury_acct(), 1, channel.clone()).unwrap();
        ledger.mint(&owner(), meta("a"), "uri".into(), 1_000).unwrap();
        ledger.buy(&buyer(), 0, 100, 100).unwrap();

        channel.armed.store(true, Ordering::SeqCst);
        let err = ledger.sell(&buyer(), 0, 50).unwrap_err();
        assert_eq!(err.code(), "TRANSFER_FAILED");

        // Books restored exactly.
        assert_eq!(ledger.balance_of(0, &buyer()).unwrap(), 100);
        assert_eq!(ledger.unsold_units(0).unwrap(), 900);
        assert_eq!(ledger.treasury_balance(), 100);
        assert_eq!(ledger.circulating(0).unwrap(), 1_000);
        // No event for the failed sale.
        assert_eq!(ledger.event_count(), 2);

        // Once the channel recovers the same sale clears.
        channel.armed.store(false, Ordering::SeqCst);
        assert_eq!(ledger.sell(&buyer(), 0, 50).unwrap(), 50);
    }

    #[test]
    fn test_withdraw_drains_treasury_to_owner() {
        let (mut ledger, bank) = setup(1, 100);
        ledger.mint(&owner(), meta("a"), "uri".into(), 1_000).unwrap();
        ledger.buy(&buyer(), 0, 100, 100).unwrap();

        let amount = ledger.withdraw(&owner()).unwrap();
        assert_eq!(amount, 100);
        assert_eq!(ledger.treasury_balance(), 0);
        assert_eq!(bank.balance(&owner()), 100);
        assert_eq!(bank.balance(&treasury_acct()), 0);
    }

    #[test]
    fn test_withdraw_empty_treasury_is_noop() {
        let (mut ledger, bank) = setup(1, 0);
        assert_eq!(ledger.withdraw(&owner()).unwrap(), 0);
        assert_eq!(bank.balance(&owner()), 0);
        // Still journaled.
        assert_eq!(ledger.event_count(), 1);
    }

    #[test]
    fn test_withdraw_requires_owner() {
        let (mut ledger, _) = setup(1, 100);
        ledger.mint(&owner(), meta("a"), "uri".into(), 1_000).unwrap();
        ledger.buy(&buyer(), 0, 100, 100).unwrap();

        assert!(ledger.withdraw(&buyer()).is_err());
        assert_eq!(ledger.treasury_balance(), 100);
    }

    #[test]
    fn test_withdraw_rolls_back_when_channel_refuses() {
        let channel = Arc::new(FlakyChannel::new(treasury_acct()));
        channel.inner.deposit(&buyer(), 100).unwrap();
        let mut ledger =
            PropertyLedger::new(owner(), treasury_acct(), 1, channel.clone()).unwrap();
        ledger.mint(&owner(), meta("a"), "uri".into(), 1_000).unwrap();
        ledger.buy(&buyer(), 0, 100, 100).unwrap();

        channel.armed.store(true, Ordering::SeqCst);
        assert!(ledger.withdraw(&owner()).is_err());
        assert_eq!(ledger.treasury_balance(), 100);
    }

    #[test]
    fn test_transfer_ownership_moves_privileges() {
        let (mut ledger, _) = setup(1, 0);
        let new_owner = AccountId::from_bytes([9; 32]);

        assert!(ledger.transfer_ownership(&buyer(), new_owner).is_err());
        ledger.transfer_ownership(&owner(), new_owner).unwrap();
        assert_eq!(ledger.owner(), new_owner);

        // Privileges follow the ownership.
        assert!(ledger.mint(&owner(), meta("a"), "uri".into(), 10).is_err());
        assert!(ledger.mint(&new_owner, meta("a"), "uri".into(), 10).is_ok());
    }

    #[test]
    fn test_vet_external_transfer_shields_treasury() {
        let (ledger, _) = setup(1, 0);
        let err = ledger
            .vet_external_transfer(&buyer(), &treasury_acct())
            .unwrap_err();
        assert_eq!(err.code(), "DIRECT_PAYMENT_REJECTED");

        let err = ledger
            .vet_external_transfer(&treasury_acct(), &buyer())
            .unwrap_err();
        assert_eq!(err.code(), "UNAUTHORIZED");

        assert!(ledger.vet_external_transfer(&buyer(), &owner()).is_ok());
    }

    #[test]
    fn test_journal_records_mutations_in_order() {
        let (mut ledger, _) = setup(1, 100);
        ledger.mint(&owner(), meta("a"), "uri".into(), 1_000).unwrap();
        ledger.buy(&buyer(), 0, 100, 100).unwrap();
        ledger.set_price(&owner(), 2).unwrap();
        ledger.withdraw(&owner()).unwrap();

        assert_eq!(ledger.event_count(), 4);
        let tail = ledger.events(2);
        assert_eq!(tail.len(), 2);
        assert_eq!(tail[0].seq, 2);
        assert_eq!(tail[0].event.kind(), "price_updated");
        assert_eq!(tail[1].seq, 3);
        assert_eq!(tail[1].event.kind(), "withdrawal");

        // Asking for more than exists returns everything.
        assert_eq!(ledger.events(100).len(), 4);
    }

    // The walkthrough from the product brief: mint 1_000 units at 1 cent,
    // buy 100, sell 50 back, withdraw, then watch a second sale bounce off
    // the emptied treasury.
    #[test]
    fn test_full_market_cycle() {
        let (mut ledger, bank) = setup(1, 100);
        ledger
            .mint(&owner(), meta("14 Harbor Lane"), "https://plat.example/deeds/0".into(), 1_000)
            .unwrap();

        ledger.buy(&buyer(), 0, 100, 100).unwrap();
        assert_eq!(ledger.balance_of(0, &buyer()).unwrap(), 100);
        assert_eq!(ledger.unsold_units(0).unwrap(), 900);
        assert_eq!(ledger.treasury_balance(), 100);

        ledger.sell(&buyer(), 0, 50).unwrap();
        assert_eq!(ledger.balance_of(0, &buyer()).unwrap(), 50);
        assert_eq!(ledger.treasury_balance(), 50);
        assert_eq!(bank.balance(&buyer()), 50);

        assert_eq!(ledger.withdraw(&owner()).unwrap(), 50);
        assert_eq!(bank.balance(&owner()), 50);

        // The treasury is empty, so the remaining units cannot be sold back
        // until new purchases refill it.
        let err = ledger.sell(&buyer(), 0, 50).unwrap_err();
        assert_eq!(err.code(), "INSUFFICIENT_BALANCE");
        assert_eq!(ledger.balance_of(0, &buyer()).unwrap(), 50);
        assert_eq!(ledger.circulating(0).unwrap(), 1_000);
    }
}
