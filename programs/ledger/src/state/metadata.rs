//! Token Metadata
//!
//! Descriptive fields fixed when the ledger is created:
//! name, symbol and the number of display decimals.

// =============================================================================
// METADATA STRUCTURE
// =============================================================================

/// Immutable description of the token held by a [`Ledger`](crate::Ledger).
///
/// `decimals` only affects presentation. Amounts on the ledger are always
/// integers in base units:
///
/// ```text
/// decimals = 10, balance = 25_000_000_000
/// Display: 2.5000000000 tokens
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TokenMetadata {
    /// Human readable name, e.g. "DevbulatERC20".
    pub name: String,

    /// Ticker symbol, e.g. "ERC20".
    pub symbol: String,

    /// Number of decimal places used when displaying amounts.
    pub decimals: u8,
}

impl TokenMetadata {
    /// Create metadata from its three fields.
    pub fn new(name: impl Into<String>, symbol: impl Into<String>, decimals: u8) -> Self {
        Self {
            name: name.into(),
            symbol: symbol.into(),
            decimals,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_keeps_fields() {
        let metadata = TokenMetadata::new("DevbulatERC20", "ERC20", 10);
        assert_eq!(metadata.name, "DevbulatERC20");
        assert_eq!(metadata.symbol, "ERC20");
        assert_eq!(metadata.decimals, 10);
    }
}
