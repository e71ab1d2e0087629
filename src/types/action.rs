//! Ledger action types
//!
//! This module defines the external action surface of the ledger. Every
//! mutation of ledger state enters through exactly one [`Action`] variant;
//! the engine dispatches on the variant and enforces the preconditions for
//! each one.

use super::asset::{Asset, Symbol};

/// Account identifier
///
/// Account names are opaque strings resolved by the host; the ledger never
/// interprets them beyond equality and ordering.
pub type AccountId = String;

/// Maximum memo length in bytes for issue, retire, and transfer
pub const MAX_MEMO_BYTES: usize = 256;

/// External actions accepted by the ledger engine
///
/// Each variant corresponds to one external entry point. Arguments arrive
/// already deserialized; authentication of the invoking principal is the
/// host's job and is consulted per action via `Host::require_auth`.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Register a new token symbol with a fixed maximum supply
    ///
    /// Requires authorization of the ledger's administrating identity.
    /// The named issuer gains the right to issue and retire the symbol.
    Create { issuer: AccountId, max_supply: Asset },

    /// Issue new tokens into circulation
    ///
    /// Requires authorization of the symbol's issuer. The quantity first
    /// lands in the issuer's balance; if `to` differs from the issuer, the
    /// engine performs an internal transfer to `to` through the ordinary
    /// transfer path.
    Issue {
        to: AccountId,
        quantity: Asset,
        memo: String,
    },

    /// Remove tokens from circulation
    ///
    /// Requires authorization of the symbol's issuer and burns strictly
    /// from the issuer's own balance.
    Retire { quantity: Asset, memo: String },

    /// Move tokens between two accounts
    ///
    /// Requires authorization of `from`. Both endpoints are notified before
    /// any balance changes.
    Transfer {
        from: AccountId,
        to: AccountId,
        quantity: Asset,
        memo: String,
    },

    /// Create a zero balance record for `owner`, paid for by `payer`
    ///
    /// Requires authorization of `payer`. Idempotent: opening an existing
    /// record is a no-op.
    Open {
        owner: AccountId,
        symbol: Symbol,
        payer: AccountId,
    },

    /// Delete `owner`'s balance record for `symbol`
    ///
    /// Requires authorization of `owner`; the record must hold exactly zero.
    Close { owner: AccountId, symbol: Symbol },

    /// Add an account to the exclusion list
    AddBlacklist { user: AccountId },

    /// Remove an account from the exclusion list
    RmvBlacklist { user: AccountId },
}

impl Action {
    /// The action's external name, used in error and log output
    pub fn name(&self) -> &'static str {
        match self {
            Action::Create { .. } => "create",
            Action::Issue { .. } => "issue",
            Action::Retire { .. } => "retire",
            Action::Transfer { .. } => "transfer",
            Action::Open { .. } => "open",
            Action::Close { .. } => "close",
            Action::AddBlacklist { .. } => "addblacklist",
            Action::RmvBlacklist { .. } => "rmvblacklist",
        }
    }
}
