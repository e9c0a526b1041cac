//! DecreaseAllowance Processor
//!
//! Lowers an allowance by a delta.

use crate::error::LedgerError;
use crate::state::{Ledger, LedgerEvent};
use crate::utils::*;
use crate::{Address, Amount};

/// Process DecreaseAllowance
///
/// Fails with `InsufficientAllowance` if `delta` is larger than the
/// current allowance. The allowance is never clamped to zero.
pub fn process(
    ledger: &mut Ledger,
    caller: &Address,
    spender: &Address,
    delta: Amount,
) -> Result<(), LedgerError> {
    let current = ledger.allowance(caller, spender);
    if current < delta {
        return Err(LedgerError::InsufficientAllowance);
    }
    let allowance = checked_sub(current, delta)?;

    ledger.set_allowance(*caller, *spender, allowance);
    ledger.record(LedgerEvent::Approval {
        holder: *caller,
        spender: *spender,
        amount: allowance,
    });

    Ok(())
}
