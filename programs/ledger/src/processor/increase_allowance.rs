//! IncreaseAllowance Processor
//!
//! Raises an allowance by a delta.

use crate::error::LedgerError;
use crate::state::{Ledger, LedgerEvent};
use crate::utils::*;
use crate::{Address, Amount};

/// Process IncreaseAllowance
///
/// Fails with `Overflow` if the new allowance exceeds the amount range.
pub fn process(
    ledger: &mut Ledger,
    caller: &Address,
    spender: &Address,
    delta: Amount,
) -> Result<(), LedgerError> {
    let allowance = checked_add(ledger.allowance(caller, spender), delta)?;

    ledger.set_allowance(*caller, *spender, allowance);
    ledger.record(LedgerEvent::Approval {
        holder: *caller,
        spender: *spender,
        amount: allowance,
    });

    Ok(())
}
