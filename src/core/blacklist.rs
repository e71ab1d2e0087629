//! Blacklist store
//!
//! Exclusion set consumed by the engine when gating issuance and transfers.
//! Membership is a pure boolean predicate; each entry remembers when it was
//! registered.

use crate::types::{AccountId, LedgerError};
use chrono::{DateTime, Utc};
use std::collections::HashMap;

/// One blacklist entry
#[derive(Debug, Clone, PartialEq)]
pub struct BlacklistEntry {
    /// When the account was added to the exclusion list
    pub registered_at: DateTime<Utc>,
}

/// Set of excluded accounts, keyed by account identity
#[derive(Debug, Clone, Default)]
pub struct BlacklistStore {
    entries: HashMap<AccountId, BlacklistEntry>,
}

impl BlacklistStore {
    /// Create a new empty blacklist
    pub fn new() -> Self {
        BlacklistStore {
            entries: HashMap::new(),
        }
    }

    /// Add `user` to the exclusion list
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::AlreadyExists`] if `user` is already listed.
    pub fn add(&mut self, user: AccountId, registered_at: DateTime<Utc>) -> Result<(), LedgerError> {
        if self.entries.contains_key(&user) {
            return Err(LedgerError::already_exists("blacklist entry", user));
        }
        self.entries.insert(user, BlacklistEntry { registered_at });
        Ok(())
    }

    /// Remove `user` from the exclusion list
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::NotFound`] if `user` is not listed.
    pub fn remove(&mut self, user: &AccountId) -> Result<(), LedgerError> {
        self.entries
            .remove(user)
            .map(|_| ())
            .ok_or_else(|| LedgerError::not_found("blacklist entry", user.clone()))
    }

    /// Check whether `user` is on the exclusion list
    pub fn contains(&self, user: &str) -> bool {
        self.entries.contains_key(user)
    }

    /// Look up the entry for `user`
    pub fn find(&self, user: &str) -> Option<&BlacklistEntry> {
        self.entries.get(user)
    }
}
