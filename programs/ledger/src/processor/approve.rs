//! Approve Processor
//!
//! Sets an allowance to an absolute value.

use crate::error::LedgerError;
use crate::state::{Ledger, LedgerEvent};
use crate::{Address, Amount};

/// Process Approve
///
/// Overwrites any previous allowance, including lowering it or setting it
/// to zero. The holder's balance is not consulted: approving more than one
/// owns is legal.
pub fn process(
    ledger: &mut Ledger,
    caller: &Address,
    spender: &Address,
    amount: Amount,
) -> Result<(), LedgerError> {
    ledger.set_allowance(*caller, *spender, amount);
    ledger.record(LedgerEvent::Approval {
        holder: *caller,
        spender: *spender,
        amount,
    });

    Ok(())
}
