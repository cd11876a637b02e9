// crates/plat-core/src/events.rs
//
// Ledger events for audit and integration.
//
// Every successful mutation seals exactly one event into the ledger journal.
// The daemon mirrors events to its log; the query surface serves the journal
// tail to clients.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::asset::AssetId;
use crate::identity::AccountId;
use crate::money::{Cents, Units};

/// Events emitted by successful ledger mutations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LedgerEvent {
    /// A new asset was minted with its full supply in the unsold pool.
    AssetMinted {
        asset_id: AssetId,
        total_supply: Units,
    },
    /// A buyer purchased fraction units out of the unsold pool.
    FractionsPurchased {
        buyer: AccountId,
        asset_id: AssetId,
        units: Units,
    },
    /// A holder sold fraction units back into the unsold pool.
    FractionsSold {
        seller: AccountId,
        asset_id: AssetId,
        units: Units,
    },
    /// The owner replaced the global unit price.
    PriceUpdated { new_price: Cents },
    /// The owner withdrew the accumulated treasury balance.
    Withdrawal { owner: AccountId, amount: Cents },
    /// The registry changed hands.
    OwnershipTransferred {
        previous: AccountId,
        new: AccountId,
    },
}

impl LedgerEvent {
    /// Short label for logs and tabular output.
    pub fn kind(&self) -> &'static str {
        match self {
            LedgerEvent::AssetMinted { .. } => "asset_minted",
            LedgerEvent::FractionsPurchased { .. } => "fractions_purchased",
            LedgerEvent::FractionsSold { .. } => "fractions_sold",
            LedgerEvent::PriceUpdated { .. } => "price_updated",
            LedgerEvent::Withdrawal { .. } => "withdrawal",
            LedgerEvent::OwnershipTransferred { .. } => "ownership_transferred",
        }
    }
}

/// A sealed journal entry: the event plus its position and timestamp.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventRecord {
    /// Monotonic journal sequence, starting at 0.
    pub seq: u64,
    /// UTC time the event was sealed.
    pub at: DateTime<Utc>,
    /// The event itself.
    #[serde(flatten)]
    pub event: LedgerEvent,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_kind_labels() {
        let event = LedgerEvent::AssetMinted {
            asset_id: 0,
            total_supply: 100,
        };
        assert_eq!(event.kind(), "asset_minted");

        let event = LedgerEvent::PriceUpdated { new_price: 250 };
        assert_eq!(event.kind(), "price_updated");
    }

    #[test]
    fn test_record_serializes_flat() {
        let record = EventRecord {
            seq: 3,
            at: Utc::now(),
            event: LedgerEvent::FractionsPurchased {
                buyer: AccountId::from_bytes([2; 32]),
                asset_id: 1,
                units: 40,
            },
        };

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["seq"], 3);
        assert_eq!(value["kind"], "fractions_purchased");
        assert_eq!(value["units"], 40);
        // Account ids travel as hex strings.
        assert_eq!(value["buyer"], "02".repeat(32));

        let back: EventRecord = serde_json::from_value(value).unwrap();
        assert_eq!(back.event, record.event);
    }
}
