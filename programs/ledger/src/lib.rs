//! # Fungible Ledger
//!
//! An owner-minted fungible token ledger with ERC-20 style allowances.
//!
//! ## Overview
//!
//! The ledger keeps:
//! - a balance per account
//! - an allowance per (holder, spender) pair
//! - the total supply, always equal to the sum of all balances
//!
//! and changes them only through the operations below. Every operation is
//! all-or-nothing: on error the ledger is untouched.
//!
//! ## Operations
//!
//! | Operation | Who may call | Failure signals |
//! |-----------|--------------|-----------------|
//! | mint | owner | Unauthorized, Overflow |
//! | burn | owner | Unauthorized, InsufficientBalance |
//! | transfer | anyone | InsufficientBalance |
//! | approve | anyone | never |
//! | increase_allowance | anyone | Overflow |
//! | decrease_allowance | anyone | InsufficientAllowance |
//! | transfer_from | spender | NotApproved, InsufficientBalance |
//!
//! ## Example
//!
//! ```ignore
//! use fungible_ledger::{Amount, Ledger};
//!
//! let mut ledger = Ledger::new("DevbulatERC20", "ERC20", 10, owner);
//! ledger.mint(&owner, &owner, Amount::from(2u64))?;
//! ledger.approve(&owner, &spender, Amount::from(2u64))?;
//! ledger.transfer_from(&spender, &owner, &spender, Amount::from(1u64))?;
//! ```

// =============================================================================
// MODULE DECLARATIONS
// =============================================================================

/// Error types with stable codes
pub mod error;

/// Instruction definitions and binary codec
pub mod instruction;

/// Per-operation business logic and the instruction router
pub mod processor;

/// Ledger state, metadata and audit events
pub mod state;

/// Guards, checked math and invariant checks
pub mod utils;

// =============================================================================
// RE-EXPORTS
// =============================================================================

pub use error::LedgerError;
pub use instruction::LedgerInstruction;
pub use processor::Processor;
pub use state::{Ledger, LedgerEvent, TokenMetadata};

// =============================================================================
// CORE TYPES
// =============================================================================

/// Opaque 32-byte account identifier.
pub type Address = solana_program::pubkey::Pubkey;

/// Token quantity in base units. 256-bit, never wraps.
pub type Amount = primitive_types::U256;

/*
=============================================================================
DETAILED EXPLANATION
=============================================================================

WHO IS THE CALLER?
==================

Every mutating operation takes `caller: &Address` as its first argument.
The ledger never derives it: signature checking belongs to the transport
that delivers the call. The ledger only decides what that caller may do.

    mint/burn          caller must equal owner
    transfer           caller is the debited account
    approve & friends  caller is the holder granting the allowance
    transfer_from      caller is the spender consuming the allowance

TWO WAYS IN
===========

Typed:
    ledger.transfer(&alice, &bob, Amount::from(5u64))?;

Bytes:
    let data = LedgerInstruction::Transfer { to: bob, amount }.pack();
    Processor::process(&mut ledger, &alice, &data)?;

Both end up in processor::transfer::process, so there is exactly one
implementation of each rule.

WHY U256?
=========

The token this ledger models counts in 256-bit units. u64 caps out at
about 1.8e19 base units, which is only 1.8 billion whole tokens with
10 decimals. U256 covers the full range and every add/sub is checked,
so an out-of-range result is an error instead of a silent wrap.
*/
