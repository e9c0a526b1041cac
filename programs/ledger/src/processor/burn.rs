//! Burn Processor
//!
//! Destroys tokens held by an account. Owner only.

use crate::error::LedgerError;
use crate::state::{Ledger, LedgerEvent};
use crate::utils::*;
use crate::{Address, Amount};

/// Process Burn
///
/// Authority is checked before the balance: a stranger burning from an
/// empty account gets `Unauthorized`, not `InsufficientBalance`.
pub fn process(
    ledger: &mut Ledger,
    caller: &Address,
    from: &Address,
    amount: Amount,
) -> Result<(), LedgerError> {
    // Validate authority
    assert_owner(ledger, caller)?;

    // Validate sufficient funds
    let balance = ledger.balance_of(from);
    if balance < amount {
        return Err(LedgerError::InsufficientBalance);
    }

    // Compute new values.
    // total_supply >= balance[from] >= amount while the supply invariant holds.
    let balance = checked_sub(balance, amount)?;
    let supply = checked_sub(ledger.total_supply(), amount)?;

    // Save state
    ledger.set_balance(*from, balance);
    ledger.set_total_supply(supply);
    ledger.record(LedgerEvent::burned(*from, amount));

    Ok(())
}
