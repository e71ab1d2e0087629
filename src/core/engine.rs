//! Ledger action engine
//!
//! This module provides the `LedgerEngine` that dispatches external actions
//! by coordinating the `TokenRegistry`, `BalanceLedger`, and `BlacklistStore`
//! components, consulting the injected [`Host`] for authorization, account
//! resolution, and notifications.
//!
//! The engine enforces the ledger's safety rules:
//! - Conservation: every supply change pairs with the matching balance
//!   change in the same action
//! - Ceiling: issuance never pushes supply above the registered maximum
//! - Non-negativity: no balance or supply ever goes below zero
//! - Blacklist gating on issuance and transfer endpoints
//! - Atomicity: an action either applies completely or leaves the ledger
//!   untouched

use crate::core::balance_ledger::BalanceLedger;
use crate::core::blacklist::BlacklistStore;
use crate::core::host::Host;
use crate::core::token_registry::{TokenDescriptor, TokenRegistry};
use crate::types::{AccountId, Action, Asset, LedgerError, Symbol, MAX_MEMO_BYTES};
use chrono::Utc;

/// The three ledger stores, snapshotted together for atomic rollback
#[derive(Debug, Clone, Default)]
struct LedgerState {
    registry: TokenRegistry,
    balances: BalanceLedger,
    blacklist: BlacklistStore,
}

/// Ledger action engine
///
/// Orchestrates action processing over the registry, balance ledger, and
/// blacklist. One engine instance serves one ledger; the host serializes all
/// calls that touch it, so the engine performs no locking of its own.
pub struct LedgerEngine<H: Host> {
    host: H,
    /// The ledger's administrating identity; only it may register symbols
    admin: AccountId,
    state: LedgerState,
}

impl<H: Host> LedgerEngine<H> {
    /// Create a new engine with no registered tokens
    ///
    /// # Arguments
    ///
    /// * `host` - Execution host providing auth, account resolution, and
    ///   notification delivery
    /// * `admin` - Identity authorized to register new token symbols
    pub fn new(host: H, admin: AccountId) -> Self {
        LedgerEngine {
            host,
            admin,
            state: LedgerState::default(),
        }
    }

    /// Access the execution host
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Apply a single action atomically
    ///
    /// The unit of atomicity is one action: either every read and write of
    /// the action applies, or — on any failure — the ledger is restored to
    /// its state from before the call. The restore realizes the host's
    /// all-or-nothing commit guarantee for in-memory state.
    ///
    /// # Errors
    ///
    /// Any violated precondition aborts the action with the corresponding
    /// [`LedgerError`]; no partial effect remains.
    pub fn apply(&mut self, action: Action) -> Result<(), LedgerError> {
        let snapshot = self.state.clone();

        let result = self.dispatch(action);
        if result.is_err() {
            self.state = snapshot;
        }
        result
    }

    /// Route an action to its handler
    fn dispatch(&mut self, action: Action) -> Result<(), LedgerError> {
        match action {
            Action::Create { issuer, max_supply } => self.create(issuer, max_supply),
            Action::Issue { to, quantity, memo } => self.issue(to, quantity, &memo),
            Action::Retire { quantity, memo } => self.retire(quantity, &memo),
            Action::Transfer {
                from,
                to,
                quantity,
                memo,
            } => self.transfer(from, to, quantity, &memo),
            Action::Open {
                owner,
                symbol,
                payer,
            } => self.open(owner, symbol, payer),
            Action::Close { owner, symbol } => self.close(owner, symbol),
            Action::AddBlacklist { user } => self.add_blacklist(user),
            Action::RmvBlacklist { user } => self.rmv_blacklist(user),
        }
    }

    /// Register a new token symbol
    ///
    /// Requires authorization of the ledger's administrating identity — not
    /// the future issuer. Symbol and supply validation is delegated to the
    /// registry.
    fn create(&mut self, issuer: AccountId, max_supply: Asset) -> Result<(), LedgerError> {
        self.host.require_auth(&self.admin)?;
        self.state.registry.create(issuer, max_supply)
    }

    /// Issue new tokens into circulation
    ///
    /// The full quantity is first credited to the issuer, paired with the
    /// supply increase. When the recipient differs from the issuer, the
    /// engine then performs an ordinary internal transfer from the issuer —
    /// deliberately reusing the transfer path so blacklist gating, the
    /// self-transfer check, and notifications apply uniformly to
    /// issuance-driven redistribution.
    fn issue(&mut self, to: AccountId, quantity: Asset, memo: &str) -> Result<(), LedgerError> {
        if !quantity.symbol.is_valid() {
            return Err(LedgerError::invalid_symbol(quantity.symbol.to_string()));
        }
        check_memo(memo)?;

        let st = self.state.registry.get(&quantity.symbol.code)?.clone();
        self.host.require_auth(&st.issuer)?;

        check_quantity(&quantity, &st, "issue")?;

        if self.state.blacklist.contains(&to) {
            return Err(LedgerError::blacklisted(to));
        }

        // Supply increase first, paired with the issuer credit; the ceiling
        // check lives in the registry.
        self.state.registry.increase_supply(&quantity)?;
        self.state.balances.credit(&st.issuer, &quantity, &st.issuer)?;

        if to != st.issuer {
            self.transfer(st.issuer.clone(), to, quantity, memo)?;
        }

        Ok(())
    }

    /// Remove tokens from circulation
    ///
    /// Burns strictly from the issuer's own balance: an issuer holding less
    /// than `quantity` fails with InsufficientBalance rather than destroying
    /// tokens held by others. No blacklist check — retirement only moves
    /// funds out of circulation, never to a new holder.
    fn retire(&mut self, quantity: Asset, memo: &str) -> Result<(), LedgerError> {
        if !quantity.symbol.is_valid() {
            return Err(LedgerError::invalid_symbol(quantity.symbol.to_string()));
        }
        check_memo(memo)?;

        let st = self.state.registry.get(&quantity.symbol.code)?.clone();
        self.host.require_auth(&st.issuer)?;

        check_quantity(&quantity, &st, "retire")?;

        self.state.registry.decrease_supply(&quantity)?;
        self.state.balances.debit(&st.issuer, &quantity)?;

        Ok(())
    }

    /// Move tokens between two accounts
    ///
    /// Both endpoints are notified before the balance mutation; a failed
    /// notification aborts the whole action. The new record's resource payer
    /// is `to` when the host says `to` can self-authorize, else `from`.
    fn transfer(
        &mut self,
        from: AccountId,
        to: AccountId,
        quantity: Asset,
        memo: &str,
    ) -> Result<(), LedgerError> {
        if from == to {
            return Err(LedgerError::invalid_argument("cannot transfer to self"));
        }
        self.host.require_auth(&from)?;
        if !self.host.account_exists(&to) {
            return Err(LedgerError::not_found("account", to));
        }

        let st = self.state.registry.get(&quantity.symbol.code)?.clone();

        check_quantity(&quantity, &st, "transfer")?;
        check_memo(memo)?;

        if self.state.blacklist.contains(&from) {
            return Err(LedgerError::blacklisted(from));
        }
        if self.state.blacklist.contains(&to) {
            return Err(LedgerError::blacklisted(to));
        }

        // Notification precedes the balance mutation by design
        self.host.notify(&from)?;
        self.host.notify(&to)?;

        let payer = if self.host.has_auth(&to) {
            to.clone()
        } else {
            from.clone()
        };

        self.state.balances.debit(&from, &quantity)?;
        self.state.balances.credit(&to, &quantity, &payer)?;

        Ok(())
    }

    /// Create a zero balance record for `owner`, charged to `payer`
    fn open(
        &mut self,
        owner: AccountId,
        symbol: Symbol,
        payer: AccountId,
    ) -> Result<(), LedgerError> {
        self.host.require_auth(&payer)?;

        let st = self.state.registry.get(&symbol.code)?;
        if st.supply.symbol != symbol {
            return Err(LedgerError::invalid_argument("symbol precision mismatch"));
        }

        self.state.balances.open(&owner, &symbol, &payer);
        Ok(())
    }

    /// Delete `owner`'s empty balance record for `symbol`
    fn close(&mut self, owner: AccountId, symbol: Symbol) -> Result<(), LedgerError> {
        self.host.require_auth(&owner)?;
        self.state.balances.close(&owner, &symbol.code)
    }

    /// Add an account to the exclusion list
    fn add_blacklist(&mut self, user: AccountId) -> Result<(), LedgerError> {
        if !self.host.account_exists(&user) {
            return Err(LedgerError::not_found("account", user));
        }
        self.state.blacklist.add(user, Utc::now())
    }

    /// Remove an account from the exclusion list
    fn rmv_blacklist(&mut self, user: AccountId) -> Result<(), LedgerError> {
        if !self.host.account_exists(&user) {
            return Err(LedgerError::not_found("account", user));
        }
        self.state.blacklist.remove(&user)
    }

    // ------------------------------------------------------------------
    // Read-only queries, usable without authorization
    // ------------------------------------------------------------------

    /// Current circulating supply of `code`
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::NotFound`] if the symbol is not registered.
    pub fn get_supply(&self, code: &str) -> Result<Asset, LedgerError> {
        Ok(self.state.registry.get(code)?.supply.clone())
    }

    /// Balance of `owner` in `code`
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::NotFound`] if the symbol is not registered or
    /// `owner` holds no record for it.
    pub fn get_balance(&self, owner: &str, code: &str) -> Result<Asset, LedgerError> {
        self.state.registry.get(code)?;
        self.state.balances.balance_of(owner, code).cloned()
    }

    /// Check whether `user` is on the exclusion list
    pub fn is_blacklisted(&self, user: &str) -> bool {
        self.state.blacklist.contains(user)
    }

    /// All balance records, sorted by owner then symbol code
    ///
    /// Used by the report writer for deterministic output.
    pub fn balances(&self) -> Vec<(AccountId, Asset)> {
        self.state.balances.all_balances()
    }
}

/// Reject memos longer than [`MAX_MEMO_BYTES`]
fn check_memo(memo: &str) -> Result<(), LedgerError> {
    if memo.len() > MAX_MEMO_BYTES {
        return Err(LedgerError::invalid_argument(
            "memo has more than 256 bytes",
        ));
    }
    Ok(())
}

/// Common quantity checks shared by issue, retire, and transfer
///
/// The quantity must be well formed, strictly positive, and denominated in
/// exactly the registered symbol (code and precision).
fn check_quantity(
    quantity: &Asset,
    st: &TokenDescriptor,
    operation: &str,
) -> Result<(), LedgerError> {
    if !quantity.is_valid() {
        return Err(LedgerError::invalid_amount(
            quantity.to_string(),
            "invalid quantity",
        ));
    }
    if !quantity.is_positive() {
        return Err(LedgerError::invalid_amount(
            quantity.to_string(),
            &format!("must {} positive quantity", operation),
        ));
    }
    if quantity.symbol != st.supply.symbol {
        return Err(LedgerError::invalid_argument("symbol precision mismatch"));
    }
    Ok(())
}
