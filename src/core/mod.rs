//! Core business logic module
//!
//! This module contains the core ledger components:
//! - `host` - Execution host abstraction (auth, account resolution, notification)
//! - `engine` - Action dispatch and atomic application
//! - `token_registry` - Token metadata and supply accounting
//! - `balance_ledger` - Per-account balance records
//! - `blacklist` - Exclusion list gating issuance and transfers

pub mod balance_ledger;
pub mod blacklist;
pub mod engine;
pub mod host;
pub mod token_registry;

pub use balance_ledger::BalanceLedger;
pub use blacklist::BlacklistStore;
pub use engine::LedgerEngine;
pub use host::{Host, ReplayHost};
pub use token_registry::TokenRegistry;
