//! Instruction Types
//!
//! Binary form of the seven mutating ledger operations, for transports that
//! carry raw bytes. The caller's identity is not encoded: it is supplied by
//! the transport next to the data.
//!
//! # Instruction Format
//!
//! ```text
//! [discriminant: u8][payload: fixed per instruction]
//! ```
//!
//! Addresses are 32 raw bytes. Amounts are 32-byte little-endian U256.
//!
//! # Discriminant Values
//!
//! | Value | Instruction | Payload |
//! |-------|-------------|---------|
//! | 0 | Mint | to, amount (64 bytes) |
//! | 1 | Burn | from, amount (64 bytes) |
//! | 2 | Transfer | to, amount (64 bytes) |
//! | 3 | Approve | spender, amount (64 bytes) |
//! | 4 | IncreaseAllowance | spender, delta (64 bytes) |
//! | 5 | DecreaseAllowance | spender, delta (64 bytes) |
//! | 6 | TransferFrom | from, to, amount (96 bytes) |

use crate::error::LedgerError;
use crate::{Address, Amount};
use arrayref::{array_ref, array_refs};
use solana_program::{program_error::ProgramError, pubkey::Pubkey};

/// Length of an encoded address.
pub const ADDRESS_LEN: usize = 32;

/// Length of an encoded amount.
pub const AMOUNT_LEN: usize = 32;

// =============================================================================
// LEDGER INSTRUCTION ENUM
// =============================================================================

/// All mutating instructions understood by the ledger.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LedgerInstruction {
    /// Create tokens in `to`. Caller must be the owner.
    ///
    /// ```text
    /// [0]: discriminant (0)
    /// [1..33]: to
    /// [33..65]: amount
    /// ```
    Mint {
        /// Credited account
        to: Address,
        /// Tokens to create
        amount: Amount,
    },

    /// Destroy tokens held by `from`. Caller must be the owner.
    ///
    /// ```text
    /// [0]: discriminant (1)
    /// [1..33]: from
    /// [33..65]: amount
    /// ```
    Burn {
        /// Debited account
        from: Address,
        /// Tokens to destroy
        amount: Amount,
    },

    /// Move tokens from the caller to `to`.
    Transfer {
        /// Credited account
        to: Address,
        /// Tokens to move
        amount: Amount,
    },

    /// Set the caller's allowance for `spender`.
    Approve {
        /// Account allowed to spend
        spender: Address,
        /// New allowance
        amount: Amount,
    },

    /// Raise the caller's allowance for `spender`.
    IncreaseAllowance {
        /// Account allowed to spend
        spender: Address,
        /// Amount added to the allowance
        delta: Amount,
    },

    /// Lower the caller's allowance for `spender`.
    DecreaseAllowance {
        /// Account allowed to spend
        spender: Address,
        /// Amount removed from the allowance
        delta: Amount,
    },

    /// Move tokens from `from` to `to` using the caller's allowance.
    ///
    /// ```text
    /// [0]: discriminant (6)
    /// [1..33]: from
    /// [33..65]: to
    /// [65..97]: amount
    /// ```
    TransferFrom {
        /// Debited account, the allowance holder
        from: Address,
        /// Credited account
        to: Address,
        /// Tokens to move
        amount: Amount,
    },
}

// =============================================================================
// INSTRUCTION PARSING (UNPACK)
// =============================================================================

impl LedgerInstruction {
    /// Parse instruction data.
    ///
    /// # Errors
    ///
    /// `InvalidInstruction` for an empty buffer, an unknown discriminant,
    /// or a payload that is not exactly the expected length.
    pub fn unpack(input: &[u8]) -> Result<Self, ProgramError> {
        let (&discriminant, rest) = input
            .split_first()
            .ok_or(LedgerError::InvalidInstruction)?;

        Ok(match discriminant {
            0 => {
                let (to, amount) = unpack_address_amount(rest)?;
                LedgerInstruction::Mint { to, amount }
            }
            1 => {
                let (from, amount) = unpack_address_amount(rest)?;
                LedgerInstruction::Burn { from, amount }
            }
            2 => {
                let (to, amount) = unpack_address_amount(rest)?;
                LedgerInstruction::Transfer { to, amount }
            }
            3 => {
                let (spender, amount) = unpack_address_amount(rest)?;
                LedgerInstruction::Approve { spender, amount }
            }
            4 => {
                let (spender, delta) = unpack_address_amount(rest)?;
                LedgerInstruction::IncreaseAllowance { spender, delta }
            }
            5 => {
                let (spender, delta) = unpack_address_amount(rest)?;
                LedgerInstruction::DecreaseAllowance { spender, delta }
            }
            6 => {
                if rest.len() != 2 * ADDRESS_LEN + AMOUNT_LEN {
                    return Err(LedgerError::InvalidInstruction.into());
                }
                let src = array_ref![rest, 0, 2 * ADDRESS_LEN + AMOUNT_LEN];
                let (from, to, amount) = array_refs![src, ADDRESS_LEN, ADDRESS_LEN, AMOUNT_LEN];
                LedgerInstruction::TransferFrom {
                    from: Pubkey::new_from_array(*from),
                    to: Pubkey::new_from_array(*to),
                    amount: Amount::from_little_endian(amount),
                }
            }
            _ => return Err(LedgerError::InvalidInstruction.into()),
        })
    }

    // =========================================================================
    // INSTRUCTION PACKING (for tests and clients)
    // =========================================================================

    /// Pack instruction into bytes. Inverse of `unpack()`.
    pub fn pack(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(1 + 2 * ADDRESS_LEN + AMOUNT_LEN);

        match self {
            LedgerInstruction::Mint { to, amount } => {
                buf.push(0);
                pack_address_amount(&mut buf, to, amount);
            }
            LedgerInstruction::Burn { from, amount } => {
                buf.push(1);
                pack_address_amount(&mut buf, from, amount);
            }
            LedgerInstruction::Transfer { to, amount } => {
                buf.push(2);
                pack_address_amount(&mut buf, to, amount);
            }
            LedgerInstruction::Approve { spender, amount } => {
                buf.push(3);
                pack_address_amount(&mut buf, spender, amount);
            }
            LedgerInstruction::IncreaseAllowance { spender, delta } => {
                buf.push(4);
                pack_address_amount(&mut buf, spender, delta);
            }
            LedgerInstruction::DecreaseAllowance { spender, delta } => {
                buf.push(5);
                pack_address_amount(&mut buf, spender, delta);
            }
            LedgerInstruction::TransferFrom { from, to, amount } => {
                buf.push(6);
                buf.extend_from_slice(from.as_ref());
                pack_address_amount(&mut buf, to, amount);
            }
        }

        buf
    }

    /// Instruction name as written to the program log.
    pub fn name(&self) -> &'static str {
        match self {
            LedgerInstruction::Mint { .. } => "Mint",
            LedgerInstruction::Burn { .. } => "Burn",
            LedgerInstruction::Transfer { .. } => "Transfer",
            LedgerInstruction::Approve { .. } => "Approve",
            LedgerInstruction::IncreaseAllowance { .. } => "IncreaseAllowance",
            LedgerInstruction::DecreaseAllowance { .. } => "DecreaseAllowance",
            LedgerInstruction::TransferFrom { .. } => "TransferFrom",
        }
    }
}

// =============================================================================
// PAYLOAD HELPERS
// =============================================================================

fn unpack_address_amount(rest: &[u8]) -> Result<(Address, Amount), ProgramError> {
    if rest.len() != ADDRESS_LEN + AMOUNT_LEN {
        return Err(LedgerError::InvalidInstruction.into());
    }
    let src = array_ref![rest, 0, ADDRESS_LEN + AMOUNT_LEN];
    let (address, amount) = array_refs![src, ADDRESS_LEN, AMOUNT_LEN];
    Ok((
        Pubkey::new_from_array(*address),
        Amount::from_little_endian(amount),
    ))
}

fn pack_address_amount(buf: &mut Vec<u8>, address: &Address, amount: &Amount) {
    let mut bytes = [0u8; AMOUNT_LEN];
    amount.to_little_endian(&mut bytes);
    buf.extend_from_slice(address.as_ref());
    buf.extend_from_slice(&bytes);
}

// =============================================================================
// UNIT TESTS
// =============================================================================
