// crates/plat-ledger/src/access.rs
//
// Owner gate: the single-owner authorization check in front of every
// privileged mutation.

use plat_core::{AccountId, PlatError};

/// Holds the one account allowed to mint, edit metadata, reprice, withdraw,
/// and hand the registry over.
///
/// The owner is explicit ledger state, set at construction and changed only
/// through [`OwnerGate::transfer`]. The caller's account id is the entire
/// authorization capability; there are no roles beyond owner and everyone
/// else.
#[derive(Debug, Clone)]
pub struct OwnerGate {
    owner: AccountId,
}

impl OwnerGate {
    /// Create a gate with the given initial owner.
    pub fn new(owner: AccountId) -> Self {
        Self { owner }
    }

    /// The current owner.
    pub fn owner(&self) -> AccountId {
        self.owner
    }

    /// Pass only the owner through.
    ///
    /// # Errors
    /// Returns `PlatError::Unauthorized` for any other caller.
    pub fn authorize(&self, caller: &AccountId) -> Result<(), PlatError> {
        if *caller != self.owner {
            return Err(PlatError::Unauthorized { caller: *caller });
        }
        Ok(())
    }

    /// Hand the registry to `new_owner`, returning the previous owner.
    /// Owner-only.
    pub fn transfer(
        &mut self,
        caller: &AccountId,
        new_owner: AccountId,
    ) -> Result<AccountId, PlatError> {
        self.authorize(caller)?;
        let previous = self.owner;
        self.owner = new_owner;
        Ok(previous)
    }
}
