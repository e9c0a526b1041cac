//! Ledger State
//!
//! The `Ledger` owns every balance, every allowance and the total supply.
//!
//! # Storage
//!
//! ```text
//! balances:   Address            -> Amount
//! allowances: (holder, spender)  -> Amount
//! ```
//!
//! Zero entries are never stored. Reading an absent key yields zero, so
//! "never touched" and "drained to zero" look the same to every reader.
//!
//! # Mutation
//!
//! Fields are private. The public mutating methods delegate to the
//! per-operation functions in [`crate::processor`], which validate first and
//! write through the crate-private setters below only once every check has
//! passed.

use crate::error::LedgerError;
use crate::processor;
use crate::state::{LedgerEvent, TokenMetadata};
use crate::utils::verify_supply;
use crate::{Address, Amount};
use std::collections::HashMap;

// =============================================================================
// LEDGER STRUCTURE
// =============================================================================

/// Authoritative record of token balances and allowances.
///
/// # Invariants
///
/// ```text
/// total_supply == SUM(balances.values())
/// owner never changes after construction
/// ```
#[derive(Clone, Debug)]
pub struct Ledger {
    metadata: TokenMetadata,
    owner: Address,
    total_supply: Amount,
    balances: HashMap<Address, Amount>,
    allowances: HashMap<(Address, Address), Amount>,
    events: Vec<LedgerEvent>,
}

impl Ledger {
    /// Create an empty ledger.
    ///
    /// `owner` is the constructing caller and the only account that may
    /// mint or burn for the lifetime of the ledger.
    pub fn new(
        name: impl Into<String>,
        symbol: impl Into<String>,
        decimals: u8,
        owner: Address,
    ) -> Self {
        Self::with_metadata(TokenMetadata::new(name, symbol, decimals), owner)
    }

    /// Create an empty ledger from prepared metadata.
    pub fn with_metadata(metadata: TokenMetadata, owner: Address) -> Self {
        Self {
            metadata,
            owner,
            total_supply: Amount::zero(),
            balances: HashMap::new(),
            allowances: HashMap::new(),
            events: Vec::new(),
        }
    }

    // =========================================================================
    // QUERIES
    // =========================================================================

    /// Token name.
    pub fn name(&self) -> &str {
        &self.metadata.name
    }

    /// Token symbol.
    pub fn symbol(&self) -> &str {
        &self.metadata.symbol
    }

    /// Display decimals.
    pub fn decimals(&self) -> u8 {
        self.metadata.decimals
    }

    /// All construction metadata.
    pub fn metadata(&self) -> &TokenMetadata {
        &self.metadata
    }

    /// The account allowed to mint and burn.
    pub fn owner(&self) -> Address {
        self.owner
    }

    /// Tokens currently in existence.
    pub fn total_supply(&self) -> Amount {
        self.total_supply
    }

    /// Balance of `account`, zero if it never held tokens.
    pub fn balance_of(&self, account: &Address) -> Amount {
        self.balances.get(account).copied().unwrap_or_else(Amount::zero)
    }

    /// Amount `spender` may still move out of `holder`'s balance.
    pub fn allowance(&self, holder: &Address, spender: &Address) -> Amount {
        self.allowances
            .get(&(*holder, *spender))
            .copied()
            .unwrap_or_else(Amount::zero)
    }

    /// Every account with a positive balance, in no particular order.
    pub fn holders(&self) -> impl Iterator<Item = (&Address, &Amount)> + '_ {
        self.balances.iter()
    }

    /// Number of accounts with a positive balance.
    pub fn holder_count(&self) -> usize {
        self.balances.len()
    }

    /// Events recorded since creation or since the last `take_events`.
    pub fn events(&self) -> &[LedgerEvent] {
        &self.events
    }

    /// Drain the event log, handing ownership to an external indexer.
    pub fn take_events(&mut self) -> Vec<LedgerEvent> {
        std::mem::take(&mut self.events)
    }

    /// Recompute the sum of all balances and compare it with total supply.
    pub fn verify_invariants(&self) -> Result<(), LedgerError> {
        verify_supply(self.total_supply, self.balances.values())
    }

    // =========================================================================
    // OPERATIONS
    // =========================================================================

    /// Create `amount` new tokens in `to`'s balance. Owner only.
    pub fn mint(
        &mut self,
        caller: &Address,
        to: &Address,
        amount: Amount,
    ) -> Result<(), LedgerError> {
        processor::mint::process(self, caller, to, amount)
    }

    /// Destroy `amount` tokens held by `from`. Owner only.
    pub fn burn(
        &mut self,
        caller: &Address,
        from: &Address,
        amount: Amount,
    ) -> Result<(), LedgerError> {
        processor::burn::process(self, caller, from, amount)
    }

    /// Move `amount` of the caller's tokens to `to`.
    pub fn transfer(
        &mut self,
        caller: &Address,
        to: &Address,
        amount: Amount,
    ) -> Result<(), LedgerError> {
        processor::transfer::process(self, caller, to, amount)
    }

    /// Set the caller's allowance for `spender` to exactly `amount`.
    pub fn approve(
        &mut self,
        caller: &Address,
        spender: &Address,
        amount: Amount,
    ) -> Result<(), LedgerError> {
        processor::approve::process(self, caller, spender, amount)
    }

    /// Raise the caller's allowance for `spender` by `delta`.
    pub fn increase_allowance(
        &mut self,
        caller: &Address,
        spender: &Address,
        delta: Amount,
    ) -> Result<(), LedgerError> {
        processor::increase_allowance::process(self, caller, spender, delta)
    }

    /// Lower the caller's allowance for `spender` by `delta`.
    pub fn decrease_allowance(
        &mut self,
        caller: &Address,
        spender: &Address,
        delta: Amount,
    ) -> Result<(), LedgerError> {
        processor::decrease_allowance::process(self, caller, spender, delta)
    }

    /// Move `amount` from `from` to `to`, spending the caller's allowance.
    pub fn transfer_from(
        &mut self,
        caller: &Address,
        from: &Address,
        to: &Address,
        amount: Amount,
    ) -> Result<(), LedgerError> {
        processor::transfer_from::process(self, caller, from, to, amount)
    }

    // =========================================================================
    // RAW WRITES (processors only)
    // =========================================================================

    pub(crate) fn set_balance(&mut self, account: Address, amount: Amount) {
        if amount.is_zero() {
            self.balances.remove(&account);
        } else {
            self.balances.insert(account, amount);
        }
    }

    pub(crate) fn set_allowance(&mut self, holder: Address, spender: Address, amount: Amount) {
        if amount.is_zero() {
            self.allowances.remove(&(holder, spender));
        } else {
            self.allowances.insert((holder, spender), amount);
        }
    }

    pub(crate) fn set_total_supply(&mut self, amount: Amount) {
        self.total_supply = amount;
    }

    pub(crate) fn record(&mut self, event: LedgerEvent) {
        self.events.push(event);
    }
}

// =============================================================================
// UNIT TESTS
// =============================================================================
