//! Balance ledger
//!
//! This module provides the `BalanceLedger` component that maintains one
//! balance record per (account, symbol) pair. Records are created lazily on
//! first credit or by an explicit `open`, and destroyed only by an explicit
//! `close` of an empty record.
//!
//! The ledger owns the holdings side of the conservation law: for every
//! symbol, the sum of all record amounts must equal the registry's supply.
//! The engine is responsible for pairing every credit/debit with the
//! matching supply mutation (or the opposite balance mutation) in the same
//! atomic action.

use crate::types::{AccountId, Asset, LedgerError, Symbol};
use std::collections::HashMap;

/// One account's balance of one symbol
#[derive(Debug, Clone, PartialEq)]
pub struct BalanceRecord {
    /// Quantity held; never negative
    pub balance: Asset,
    /// Identity charged for the storage of this record
    pub payer: AccountId,
}

/// Per-account, per-symbol balance records
///
/// Records are scoped by owner and keyed by symbol code within each owner,
/// mirroring the registry's one-descriptor-per-code rule.
#[derive(Debug, Clone, Default)]
pub struct BalanceLedger {
    /// Map of owner to that owner's records, keyed by symbol code
    records: HashMap<AccountId, HashMap<String, BalanceRecord>>,
}

impl BalanceLedger {
    /// Create a new empty balance ledger
    pub fn new() -> Self {
        BalanceLedger {
            records: HashMap::new(),
        }
    }

    /// Add `quantity` to `owner`'s balance, creating the record if absent
    ///
    /// A freshly created record is funded by `payer`; an existing record
    /// keeps its original payer.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::InvalidAmount`] if the addition overflows.
    /// The caller enforces every other bound (the symbol's supply ceiling
    /// in particular).
    pub fn credit(
        &mut self,
        owner: &AccountId,
        quantity: &Asset,
        payer: &AccountId,
    ) -> Result<(), LedgerError> {
        let owner_records = self.records.entry(owner.clone()).or_default();

        match owner_records.get_mut(&quantity.symbol.code) {
            Some(record) => {
                let new_balance = record.balance.checked_add(quantity).ok_or_else(|| {
                    LedgerError::invalid_amount(quantity.to_string(), "balance overflow")
                })?;
                record.balance = new_balance;
            }
            None => {
                owner_records.insert(
                    quantity.symbol.code.clone(),
                    BalanceRecord {
                        balance: quantity.clone(),
                        payer: payer.clone(),
                    },
                );
            }
        }

        Ok(())
    }

    /// Subtract `quantity` from `owner`'s balance
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::InsufficientBalance`] if no record exists or
    /// the record holds less than `quantity`. A missing record debits like a
    /// zero balance.
    pub fn debit(&mut self, owner: &AccountId, quantity: &Asset) -> Result<(), LedgerError> {
        let record = self
            .records
            .get_mut(owner)
            .and_then(|owner_records| owner_records.get_mut(&quantity.symbol.code))
            .ok_or_else(|| {
                LedgerError::insufficient_balance(
                    owner.clone(),
                    rust_decimal::Decimal::ZERO,
                    quantity.amount,
                )
            })?;

        if record.balance.amount < quantity.amount {
            return Err(LedgerError::insufficient_balance(
                owner.clone(),
                record.balance.amount,
                quantity.amount,
            ));
        }

        let new_balance = record.balance.checked_sub(quantity).ok_or_else(|| {
            LedgerError::invalid_amount(quantity.to_string(), "balance underflow")
        })?;
        record.balance = new_balance;

        Ok(())
    }

    /// Create a zero-balance record for `(owner, symbol)` if none exists
    ///
    /// Idempotent: opening an existing record leaves it untouched and is
    /// not an error.
    pub fn open(&mut self, owner: &AccountId, symbol: &Symbol, payer: &AccountId) {
        self.records
            .entry(owner.clone())
            .or_default()
            .entry(symbol.code.clone())
            .or_insert_with(|| BalanceRecord {
                balance: Asset::zero(symbol.clone()),
                payer: payer.clone(),
            });
    }

    /// Delete `owner`'s record for `code`
    ///
    /// # Errors
    ///
    /// - [`LedgerError::NotFound`] if no record exists
    /// - [`LedgerError::NonZeroBalance`] if the record still holds tokens;
    ///   the record is left untouched
    pub fn close(&mut self, owner: &AccountId, code: &str) -> Result<(), LedgerError> {
        let owner_records = self
            .records
            .get_mut(owner)
            .ok_or_else(|| LedgerError::not_found("balance", format!("{}/{}", owner, code)))?;

        let record = owner_records
            .get(code)
            .ok_or_else(|| LedgerError::not_found("balance", format!("{}/{}", owner, code)))?;

        if record.balance.is_positive() {
            return Err(LedgerError::non_zero_balance(
                owner.clone(),
                code,
                record.balance.amount,
            ));
        }

        owner_records.remove(code);
        if owner_records.is_empty() {
            self.records.remove(owner);
        }

        Ok(())
    }

    /// Read `owner`'s balance of `code`
    ///
    /// Absence of a record is a distinct [`LedgerError::NotFound`] outcome,
    /// not a zero balance; only an explicit record reads as zero.
    pub fn balance_of(&self, owner: &str, code: &str) -> Result<&Asset, LedgerError> {
        self.records
            .get(owner)
            .and_then(|owner_records| owner_records.get(code))
            .map(|record| &record.balance)
            .ok_or_else(|| LedgerError::not_found("balance", format!("{}/{}", owner, code)))
    }

    /// Look up the full record for `(owner, code)`
    pub fn find(&self, owner: &str, code: &str) -> Option<&BalanceRecord> {
        self.records
            .get(owner)
            .and_then(|owner_records| owner_records.get(code))
    }

    /// Sum of all balances held in `code`
    ///
    /// Together with the registry's supply this expresses the conservation
    /// law; the two must always agree.
    pub fn total_held(&self, code: &str) -> rust_decimal::Decimal {
        self.records
            .values()
            .filter_map(|owner_records| owner_records.get(code))
            .map(|record| record.balance.amount)
            .sum()
    }

    /// All balance records, sorted by owner then symbol code
    ///
    /// Sorting provides deterministic output for the report writer.
    pub fn all_balances(&self) -> Vec<(AccountId, Asset)> {
        let mut balances: Vec<(AccountId, Asset)> = self
            .records
            .iter()
            .flat_map(|(owner, owner_records)| {
                owner_records
                    .values()
                    .map(|record| (owner.clone(), record.balance.clone()))
            })
            .collect();
        balances.sort_by(|a, b| (&a.0, &a.1.symbol.code).cmp(&(&b.0, &b.1.symbol.code)));
        balances
    }
}
