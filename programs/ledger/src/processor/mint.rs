//! Mint Processor
//!
//! Creates new tokens in an account. Owner only.

use crate::error::LedgerError;
use crate::state::{Ledger, LedgerEvent};
use crate::utils::*;
use crate::{Address, Amount};

/// Process Mint
///
/// Checks, in order:
/// 1. `caller` is the owner (`Unauthorized`)
/// 2. `total_supply + amount` fits (`Overflow`)
/// 3. `balance[to] + amount` fits (`Overflow`)
pub fn process(
    ledger: &mut Ledger,
    caller: &Address,
    to: &Address,
    amount: Amount,
) -> Result<(), LedgerError> {
    // Validate authority
    assert_owner(ledger, caller)?;

    // Compute new values
    let supply = checked_add(ledger.total_supply(), amount)?;
    let balance = checked_add(ledger.balance_of(to), amount)?;

    // Save state
    ledger.set_total_supply(supply);
    ledger.set_balance(*to, balance);
    ledger.record(LedgerEvent::minted(*to, amount));

    Ok(())
}
