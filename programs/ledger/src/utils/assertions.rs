//! Assertion Helper Functions
//!
//! Guards and checked arithmetic shared by every processor.
//!
//! # Usage Pattern
//!
//! ```ignore
//! pub fn process(ledger: &mut Ledger, caller: &Address, ...) -> Result<(), LedgerError> {
//!     // Validate everything first
//!     assert_owner(ledger, caller)?;
//!     let new_balance = checked_add(ledger.balance_of(to), amount)?;
//!
//!     // Then write
//!     ledger.set_balance(*to, new_balance);
//!     Ok(())
//! }
//! ```

use crate::error::LedgerError;
use crate::state::Ledger;
use crate::{Address, Amount};

// =============================================================================
// AUTHORITY CHECKS
// =============================================================================

/// Assert that `caller` is the ledger owner.
///
/// Runs before any other check in owner-only operations, so a stranger
/// always sees `Unauthorized` whatever the state of the target account.
///
/// # Errors
///
/// Returns `Unauthorized` if the caller is someone else.
pub fn assert_owner(ledger: &Ledger, caller: &Address) -> Result<(), LedgerError> {
    if ledger.owner() != *caller {
        Err(LedgerError::Unauthorized)
    } else {
        Ok(())
    }
}

// =============================================================================
// CHECKED ARITHMETIC
// =============================================================================

/// Checked addition.
///
/// # Errors
///
/// Returns `Overflow` if `a + b` exceeds the 256-bit range.
pub fn checked_add(a: Amount, b: Amount) -> Result<Amount, LedgerError> {
    a.checked_add(b).ok_or(LedgerError::Overflow)
}

/// Checked subtraction of a debit from a balance.
///
/// # Errors
///
/// Returns `InsufficientBalance` if `b > a`.
///
/// Allowance processors compare and raise their own error before calling
/// this, so the balance error never leaks out of an allowance path.
pub fn checked_sub(a: Amount, b: Amount) -> Result<Amount, LedgerError> {
    a.checked_sub(b).ok_or(LedgerError::InsufficientBalance)
}

// =============================================================================
// INVARIANTS
// =============================================================================

/// Check that `total_supply` equals the sum of `balances`.
///
/// # Errors
///
/// - `Overflow` if the balances alone sum past the 256-bit range
/// - `SupplyMismatch` if the sum differs from `total_supply`
pub fn verify_supply<'a, I>(total_supply: Amount, balances: I) -> Result<(), LedgerError>
where
    I: IntoIterator<Item = &'a Amount>,
{
    let sum = balances
        .into_iter()
        .try_fold(Amount::zero(), |acc, balance| checked_add(acc, *balance))?;

    if sum != total_supply {
        return Err(LedgerError::SupplyMismatch);
    }
    Ok(())
}

// =============================================================================
// UNIT TESTS
// =============================================================================
