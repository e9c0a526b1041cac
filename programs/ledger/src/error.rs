//! Ledger Error Types
//!
//! Every failure the ledger can report, with a stable numeric code.
//! The `Display` text of the first variants is the revert message
//! callers of the token contract already match on.
//!
//! # Error Codes
//!
//! | Code | Variant | Raised by |
//! |------|---------|-----------|
//! | 0 | Unauthorized | mint, burn |
//! | 1 | InsufficientBalance | burn, transfer, transfer_from |
//! | 2 | NotApproved | transfer_from |
//! | 3 | InsufficientAllowance | decrease_allowance |
//! | 4 | Overflow | mint, transfer, increase_allowance |
//! | 5 | InvalidInstruction | instruction decoding |
//! | 6 | SupplyMismatch | invariant verification |

use solana_program::program_error::ProgramError;
use thiserror::Error;

// =============================================================================
// ERROR ENUM
// =============================================================================

/// Errors that may be returned by the ledger.
///
/// Variants are append-only: the discriminant is the error code a
/// byte-level caller sees in `ProgramError::Custom`.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum LedgerError {
    /// Error 0: an owner-only operation was called by someone else.
    #[error("You are not owner")]
    Unauthorized,

    /// Error 1: the debited account holds less than the requested amount.
    #[error("Not enough tokens")]
    InsufficientBalance,

    /// Error 2: the spender's allowance does not cover a delegated transfer.
    #[error("Not approved")]
    NotApproved,

    /// Error 3: a decrease would take an allowance below zero.
    ///
    /// Kept apart from `NotApproved` so that clients can tell a failed
    /// allowance edit from a failed spend.
    #[error("Decreased allowance below zero")]
    InsufficientAllowance,

    /// Error 4: a credit would exceed the 256-bit amount range.
    #[error("Arithmetic overflow")]
    Overflow,

    /// Error 5: instruction bytes could not be decoded.
    #[error("Invalid instruction")]
    InvalidInstruction,

    /// Error 6: total supply no longer equals the sum of all balances.
    #[error("Total supply does not match the sum of balances")]
    SupplyMismatch,
}

impl LedgerError {
    /// Stable numeric code of this error.
    pub fn code(self) -> u32 {
        self as u32
    }
}

// =============================================================================
// CONVERSION TO PROGRAMERROR
// =============================================================================

/// Byte-level callers receive `ProgramError::Custom(code)`.
impl From<LedgerError> for ProgramError {
    fn from(e: LedgerError) -> Self {
        ProgramError::Custom(e.code())
    }
}
