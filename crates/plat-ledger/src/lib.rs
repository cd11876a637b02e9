// crates/plat-ledger/src/lib.rs
//
// plat-ledger: the accounting core of the Plat registry.
//
// Asset records, per-asset fraction holdings, global unit pricing, the
// registry treasury, and the owner gate, composed into `PropertyLedger`,
// the single-writer state machine behind every mutation.
//
// All amounts are integer cents and all holdings integer units. Every
// operation validates before it mutates, so a failed call never leaves a
// partial write.

pub mod access;
pub mod fractions;
pub mod ledger;
pub mod pricing;
pub mod registry;
pub mod treasury;

// Re-export key types for ergonomic access from downstream crates.
// Usage: `use plat_ledger::PropertyLedger;`

pub use access::OwnerGate;
pub use fractions::FractionBook;
pub use ledger::PropertyLedger;
pub use pricing::PriceBoard;
pub use registry::AssetBook;
pub use treasury::Treasury;
