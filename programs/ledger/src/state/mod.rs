//! Ledger State Structures
//!
//! # Types
//!
//! | Type | Description |
//! |------|-------------|
//! | Ledger | Balances, allowances and total supply |
//! | TokenMetadata | Name, symbol and decimals fixed at creation |
//! | LedgerEvent | Audit record of one successful state transition |

// =============================================================================
// SUBMODULES
// =============================================================================

pub mod event;
pub mod ledger;
pub mod metadata;

// =============================================================================
// RE-EXPORTS
// =============================================================================

pub use event::LedgerEvent;
pub use ledger::Ledger;
pub use metadata::TokenMetadata;
