// crates/plat-core/src/lib.rs
//
// plat-core: Core types, traits, and crypto primitives for the Plat registry.
//
// This is the leaf crate that all other crates in the workspace depend on.
// It defines the canonical data structures, error types, ledger events,
// cryptographic helpers, and trait interfaces used throughout the fractional
// property registry.

pub mod asset;
pub mod crypto;
pub mod encoder;
pub mod error;
pub mod events;
pub mod identity;
pub mod money;
pub mod traits;

// Re-export key types for ergonomic access from downstream crates.
// Usage: `use plat_core::Asset;`

// Asset types
pub use asset::{Asset, AssetId, AssetMetadata};

// Identity types
pub use identity::AccountId;

// Crypto helpers
pub use crypto::{derive_account, hash_bytes, Keypair};

// Money types
pub use money::{Cents, Credits, Units, CENTS_PER_CREDIT};

// Event types
pub use events::{EventRecord, LedgerEvent};

// Deed document types
pub use encoder::{DeedDocument, EncodedDeed, JsonDeedEncoder};

// Error type
pub use error::PlatError;

// Traits
pub use traits::{DeedEncoder, ValueChannel};
