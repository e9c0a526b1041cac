//! TransferFrom Processor
//!
//! Delegated transfer: the caller spends an allowance granted by `from`.

use crate::error::LedgerError;
use crate::processor::transfer::move_balance;
use crate::state::{Ledger, LedgerEvent};
use crate::utils::*;
use crate::{Address, Amount};

/// Process TransferFrom
///
/// Checks, in order:
/// 1. `allowance[(from, caller)] >= amount` (`NotApproved`)
/// 2. `balance[from] >= amount` (`InsufficientBalance`)
///
/// On success three values change together: both balances and the
/// allowance. On failure none do.
pub fn process(
    ledger: &mut Ledger,
    caller: &Address,
    from: &Address,
    to: &Address,
    amount: Amount,
) -> Result<(), LedgerError> {
    // Validate allowance
    let allowance = ledger.allowance(from, caller);
    if allowance < amount {
        return Err(LedgerError::NotApproved);
    }

    // Validate sufficient funds
    if ledger.balance_of(from) < amount {
        return Err(LedgerError::InsufficientBalance);
    }

    // Compute new values
    let (source, dest) = move_balance(ledger, from, to, amount)?;
    let allowance = checked_sub(allowance, amount)?;

    // Save state
    ledger.set_balance(*from, source);
    ledger.set_balance(*to, dest);
    ledger.set_allowance(*from, *caller, allowance);
    ledger.record(LedgerEvent::moved(*from, *to, amount));
    ledger.record(LedgerEvent::Approval {
        holder: *from,
        spender: *caller,
        amount: allowance,
    });

    Ok(())
}
