//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `asset`: Symbol and asset (quantity) types
//! - `action`: The external action surface and account identifiers
//! - `error`: Error types for the token ledger

pub mod action;
pub mod asset;
pub mod error;

pub use action::{AccountId, Action, MAX_MEMO_BYTES};
pub use asset::{Asset, Symbol, MAX_SYMBOL_LEN};
pub use error::LedgerError;
