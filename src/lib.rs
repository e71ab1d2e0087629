//! Rust Token Ledger Library
//! # Overview
//!
//! This library provides an in-memory fungible token ledger with a CSV-based
//! replay pipeline implementing both a sync and an async input strategy.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (Symbol, Asset, Action, errors)
//! - [`cli`] - CLI arguments parsing
//! - [`core`] - Business logic components:
//!   - [`core::engine`] - Action dispatch and atomic application
//!   - [`core::token_registry`] - Token metadata and supply accounting
//!   - [`core::balance_ledger`] - Per-account balance records
//!   - [`core::blacklist`] - Exclusion list for issuance and transfers
//!   - [`core::host`] - Execution host abstraction (auth, resolution, notify)
//! - [`io`] - I/O handling with pluggable parsing strategies
//!
//! # Actions
//!
//! The engine supports eight action types:
//!
//! - **Create**: Register a new token symbol with an issuer and maximum supply
//! - **Issue**: Mint new tokens against the ceiling (issuer authority required)
//! - **Retire**: Burn tokens from the issuer's balance, shrinking supply
//! - **Transfer**: Move tokens between accounts with blacklist gating
//! - **Open**: Create a zero balance record ahead of incoming transfers
//! - **Close**: Delete an empty balance record
//! - **AddBlacklist** / **RmvBlacklist**: Maintain the exclusion list
//!
//! # Safety Rules
//!
//! The engine maintains, for every token:
//! - Circulating supply equals the sum of all balances (conservation)
//! - Supply never exceeds the registered maximum
//! - No balance or supply is ever negative
//! - Every action applies atomically or not at all

// Module declarations
pub mod cli;
pub mod core;
pub mod io;
pub mod strategy;
pub mod types;

pub use crate::core::{BalanceLedger, BlacklistStore, Host, LedgerEngine, ReplayHost, TokenRegistry};
pub use crate::io::write_balances_csv;
pub use crate::types::{AccountId, Action, Asset, LedgerError, Symbol};
