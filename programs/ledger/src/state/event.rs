//! Audit Events
//!
//! Every successful mutation appends one or more events to the ledger's log.
//! Failed operations append nothing, so the log is an exact record of the
//! state transitions that took effect.

use crate::{Address, Amount};

/// A state transition recorded by the ledger.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LedgerEvent {
    /// Tokens moved between accounts.
    ///
    /// | from | to | Meaning |
    /// |------|----|---------|
    /// | None | Some | mint |
    /// | Some | None | burn |
    /// | Some | Some | transfer or transfer_from |
    Transfer {
        /// Debited account, `None` when tokens were created.
        from: Option<Address>,

        /// Credited account, `None` when tokens were destroyed.
        to: Option<Address>,

        /// Amount moved, in base units.
        amount: Amount,
    },

    /// An allowance changed. `amount` is the allowance after the change.
    Approval {
        /// Account whose tokens may be spent.
        holder: Address,

        /// Account allowed to spend them.
        spender: Address,

        /// Resulting allowance.
        amount: Amount,
    },
}

impl LedgerEvent {
    /// Event recorded by a mint.
    pub fn minted(to: Address, amount: Amount) -> Self {
        LedgerEvent::Transfer {
            from: None,
            to: Some(to),
            amount,
        }
    }

    /// Event recorded by a burn.
    pub fn burned(from: Address, amount: Amount) -> Self {
        LedgerEvent::Transfer {
            from: Some(from),
            to: None,
            amount,
        }
    }

    /// Event recorded by a transfer between two accounts.
    pub fn moved(from: Address, to: Address, amount: Amount) -> Self {
        LedgerEvent::Transfer {
            from: Some(from),
            to: Some(to),
            amount,
        }
    }
}
