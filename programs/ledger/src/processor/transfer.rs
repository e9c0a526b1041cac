//! Transfer Processor
//!
//! Moves tokens from the caller to another account.

use crate::error::LedgerError;
use crate::state::{Ledger, LedgerEvent};
use crate::utils::*;
use crate::{Address, Amount};

/// Process Transfer
///
/// Self-transfers are allowed and leave the balance unchanged.
pub fn process(
    ledger: &mut Ledger,
    caller: &Address,
    to: &Address,
    amount: Amount,
) -> Result<(), LedgerError> {
    let (source, dest) = move_balance(ledger, caller, to, amount)?;

    ledger.set_balance(*caller, source);
    ledger.set_balance(*to, dest);
    ledger.record(LedgerEvent::moved(*caller, *to, amount));

    Ok(())
}

/// Compute the balances of `from` and `to` after moving `amount`.
///
/// Nothing is written. The debit is applied first and the credit is taken
/// from the debited value when both sides are the same account, so the
/// pair can be stored in either order.
///
/// # Errors
///
/// - `InsufficientBalance` if `from` holds less than `amount`
/// - `Overflow` if the credit exceeds the amount range
pub(crate) fn move_balance(
    ledger: &Ledger,
    from: &Address,
    to: &Address,
    amount: Amount,
) -> Result<(Amount, Amount), LedgerError> {
    let source = checked_sub(ledger.balance_of(from), amount)?;

    // Debit and credit hit the same key.
    if from == to {
        let same = checked_add(source, amount)?;
        return Ok((same, same));
    }

    let dest = checked_add(ledger.balance_of(to), amount)?;
    Ok((source, dest))
}
