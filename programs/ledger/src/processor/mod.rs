//! Instruction Processors
//!
//! The business logic of each ledger operation lives in its own file.
//! Every processor follows the same shape:
//!
//! 1. validate (authority, allowance, balance, in that order)
//! 2. compute every new value with checked arithmetic
//! 3. write the values and record the events
//!
//! Nothing is written before step 3, so a failing operation leaves the
//! ledger exactly as it found it.

pub mod approve;
pub mod burn;
pub mod decrease_allowance;
pub mod increase_allowance;
pub mod mint;
pub mod transfer;
pub mod transfer_from;

use crate::error::LedgerError;
use crate::instruction::LedgerInstruction;
use crate::state::Ledger;
use crate::Address;
use solana_program::{entrypoint::ProgramResult, msg};

/// Routes packed instructions to the processor functions.
pub struct Processor;

impl Processor {
    /// Decode `instruction_data` and apply it to `ledger` on behalf of
    /// `caller`.
    ///
    /// The transport authenticates `caller`; the ledger trusts it.
    pub fn process(
        ledger: &mut Ledger,
        caller: &Address,
        instruction_data: &[u8],
    ) -> ProgramResult {
        let instruction = LedgerInstruction::unpack(instruction_data)?;
        msg!("Instruction: {}", instruction.name());

        Self::apply(ledger, caller, instruction).map_err(|e| {
            msg!("Error: {}", e);
            e
        })?;

        #[cfg(feature = "verify-invariants")]
        ledger.verify_invariants()?;

        Ok(())
    }

    /// Apply an already decoded instruction.
    pub fn apply(
        ledger: &mut Ledger,
        caller: &Address,
        instruction: LedgerInstruction,
    ) -> Result<(), LedgerError> {
        match instruction {
            LedgerInstruction::Mint { to, amount } => {
                mint::process(ledger, caller, &to, amount)
            }

            LedgerInstruction::Burn { from, amount } => {
                burn::process(ledger, caller, &from, amount)
            }

            LedgerInstruction::Transfer { to, amount } => {
                transfer::process(ledger, caller, &to, amount)
            }

            LedgerInstruction::Approve { spender, amount } => {
                approve::process(ledger, caller, &spender, amount)
            }

            LedgerInstruction::IncreaseAllowance { spender, delta } => {
                increase_allowance::process(ledger, caller, &spender, delta)
            }

            LedgerInstruction::DecreaseAllowance { spender, delta } => {
                decrease_allowance::process(ledger, caller, &spender, delta)
            }

            LedgerInstruction::TransferFrom { from, to, amount } => {
                transfer_from::process(ledger, caller, &from, &to, amount)
            }
        }
    }
}
