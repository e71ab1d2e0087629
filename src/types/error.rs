//! Error types for the token ledger
//!
//! This module defines all errors that can abort a ledger action. Every
//! violated precondition is fatal to the call that raised it: the engine
//! rolls the ledger back to its pre-action state, so no variant here ever
//! describes a partially applied action.
//!
//! # Error Categories
//!
//! - **Validation errors**: malformed symbols, non-positive amounts,
//!   oversized memos, self-transfers, precision mismatches
//! - **Lookup errors**: duplicate creates, missing registry/balance/blacklist
//!   entries
//! - **Authorization errors**: the host rejected the invoking principal
//! - **Accounting errors**: supply ceiling breaches, overdrawn balances,
//!   non-zero close attempts
//! - **Ambient errors**: file I/O and CSV parsing in the replay pipeline

use crate::types::AccountId;
use rust_decimal::Decimal;
use thiserror::Error;

/// Main error type for the token ledger
///
/// Each variant carries the context needed to diagnose the rejected action.
/// All variants abort the whole action with no partial effect; retry policy,
/// if any, belongs to the caller.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LedgerError {
    /// Malformed symbol code or spec
    #[error("Invalid symbol '{symbol}'")]
    InvalidSymbol {
        /// The offending symbol text
        symbol: String,
    },

    /// Non-positive, overflowing, or otherwise malformed amount
    #[error("Invalid amount '{amount}': {reason}")]
    InvalidAmount {
        /// The offending amount, in display form
        amount: String,
        /// Why the amount was rejected
        reason: String,
    },

    /// An entity with this key already exists
    #[error("{entity} '{key}' already exists")]
    AlreadyExists {
        /// Kind of entity (token, blacklist entry, ...)
        entity: String,
        /// The duplicate key
        key: String,
    },

    /// Lookup miss on the registry, balance ledger, or blacklist
    #[error("{entity} '{key}' not found")]
    NotFound {
        /// Kind of entity (token, balance, account, ...)
        entity: String,
        /// The missing key
        key: String,
    },

    /// The host rejected the invoking principal for this identity
    #[error("Missing authorization of account '{account}'")]
    Unauthorized {
        /// The identity whose authorization was required
        account: AccountId,
    },

    /// Issuing this quantity would push supply above the maximum
    #[error("Issuing {requested} of '{symbol}' exceeds available supply {available}")]
    SupplyExceeded {
        /// Symbol code
        symbol: String,
        /// Quantity the issuer tried to add
        requested: Decimal,
        /// Headroom remaining below max supply
        available: Decimal,
    },

    /// Debit exceeds the account's held amount
    #[error(
        "Insufficient balance for account '{account}': held {available}, requested {requested}"
    )]
    InsufficientBalance {
        /// The overdrawn account
        account: AccountId,
        /// Balance currently held
        available: Decimal,
        /// Quantity requested
        requested: Decimal,
    },

    /// A transfer endpoint or issue recipient is on the exclusion list
    #[error("Account '{account}' is blacklisted")]
    Blacklisted {
        /// The excluded account
        account: AccountId,
    },

    /// Close attempted on a record still holding tokens
    #[error("Cannot close balance of '{account}' for '{symbol}': balance {balance} is not zero")]
    NonZeroBalance {
        /// Owner of the record
        account: AccountId,
        /// Symbol code
        symbol: String,
        /// Remaining balance
        balance: Decimal,
    },

    /// Self-transfer, oversized memo, precision mismatch, and similar
    /// argument-level violations
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Description of the violation
        message: String,
    },

    /// I/O error in the replay pipeline
    #[error("I/O error: {message}")]
    IoError {
        /// Description of the I/O error
        message: String,
    },

    /// CSV parsing error in the replay pipeline
    #[error("CSV parse error{}: {message}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    ParseError {
        /// Line number where the error occurred (if available)
        line: Option<u64>,
        /// Description of the parsing error
        message: String,
    },
}

impl From<std::io::Error> for LedgerError {
    fn from(error: std::io::Error) -> Self {
        LedgerError::IoError {
            message: error.to_string(),
        }
    }
}

impl From<csv::Error> for LedgerError {
    fn from(error: csv::Error) -> Self {
        let line = error.position().map(|pos| pos.line());

        LedgerError::ParseError {
            line,
            message: error.to_string(),
        }
    }
}

// Helper constructors for the variants the engine raises in several places

impl LedgerError {
    /// Create an InvalidSymbol error
    pub fn invalid_symbol(symbol: impl Into<String>) -> Self {
        LedgerError::InvalidSymbol {
            symbol: symbol.into(),
        }
    }

    /// Create an InvalidAmount error
    pub fn invalid_amount(amount: impl Into<String>, reason: &str) -> Self {
        LedgerError::InvalidAmount {
            amount: amount.into(),
            reason: reason.to_string(),
        }
    }

    /// Create an AlreadyExists error
    pub fn already_exists(entity: &str, key: impl Into<String>) -> Self {
        LedgerError::AlreadyExists {
            entity: entity.to_string(),
            key: key.into(),
        }
    }

    /// Create a NotFound error
    pub fn not_found(entity: &str, key: impl Into<String>) -> Self {
        LedgerError::NotFound {
            entity: entity.to_string(),
            key: key.into(),
        }
    }

    /// Create an Unauthorized error
    pub fn unauthorized(account: impl Into<AccountId>) -> Self {
        LedgerError::Unauthorized {
            account: account.into(),
        }
    }

    /// Create a SupplyExceeded error
    pub fn supply_exceeded(symbol: &str, requested: Decimal, available: Decimal) -> Self {
        LedgerError::SupplyExceeded {
            symbol: symbol.to_string(),
            requested,
            available,
        }
    }

    /// Create an InsufficientBalance error
    pub fn insufficient_balance(
        account: impl Into<AccountId>,
        available: Decimal,
        requested: Decimal,
    ) -> Self {
        LedgerError::InsufficientBalance {
            account: account.into(),
            available,
            requested,
        }
    }

    /// Create a Blacklisted error
    pub fn blacklisted(account: impl Into<AccountId>) -> Self {
        LedgerError::Blacklisted {
            account: account.into(),
        }
    }

    /// Create a NonZeroBalance error
    pub fn non_zero_balance(
        account: impl Into<AccountId>,
        symbol: &str,
        balance: Decimal,
    ) -> Self {
        LedgerError::NonZeroBalance {
            account: account.into(),
            symbol: symbol.to_string(),
            balance,
        }
    }

    /// Create an InvalidArgument error
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        LedgerError::InvalidArgument {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::invalid_symbol(
        LedgerError::invalid_symbol("td1"),
        "Invalid symbol 'td1'"
    )]
    #[case::invalid_amount(
        LedgerError::invalid_amount("-1.0000 TDN", "must be positive"),
        "Invalid amount '-1.0000 TDN': must be positive"
    )]
    #[case::already_exists(
        LedgerError::already_exists("token", "TDN"),
        "token 'TDN' already exists"
    )]
    #[case::not_found(
        LedgerError::not_found("balance", "alice/TDN"),
        "balance 'alice/TDN' not found"
    )]
    #[case::unauthorized(
        LedgerError::unauthorized("issuer"),
        "Missing authorization of account 'issuer'"
    )]
    #[case::supply_exceeded(
        LedgerError::supply_exceeded("TDN", Decimal::new(9500000, 4), Decimal::new(9000000, 4)),
        "Issuing 950.0000 of 'TDN' exceeds available supply 900.0000"
    )]
    #[case::insufficient_balance(
        LedgerError::insufficient_balance("alice", Decimal::new(5000, 4), Decimal::new(10000, 4)),
        "Insufficient balance for account 'alice': held 0.5000, requested 1.0000"
    )]
    #[case::blacklisted(
        LedgerError::blacklisted("mallory"),
        "Account 'mallory' is blacklisted"
    )]
    #[case::non_zero_balance(
        LedgerError::non_zero_balance("alice", "TDN", Decimal::new(10000, 4)),
        "Cannot close balance of 'alice' for 'TDN': balance 1.0000 is not zero"
    )]
    #[case::invalid_argument(
        LedgerError::invalid_argument("cannot transfer to self"),
        "Invalid argument: cannot transfer to self"
    )]
    #[case::parse_error_with_line(
        LedgerError::ParseError { line: Some(42), message: "bad field".to_string() },
        "CSV parse error at line 42: bad field"
    )]
    #[case::parse_error_without_line(
        LedgerError::ParseError { line: None, message: "bad field".to_string() },
        "CSV parse error: bad field"
    )]
    fn test_error_display(#[case] error: LedgerError, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error =
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "Permission denied");
        let error: LedgerError = io_error.into();
        assert!(matches!(error, LedgerError::IoError { .. }));
        assert_eq!(error.to_string(), "I/O error: Permission denied");
    }
}
