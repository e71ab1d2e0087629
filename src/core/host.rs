//! Host collaborator interface
//!
//! The ledger core never authenticates principals, resolves account names,
//! or delivers notifications itself — all of that belongs to the
//! transaction-execution host the engine runs inside. This module defines
//! the narrow capability interface the engine requires from that host, so
//! the core stays testable against hand-built fakes.

use crate::types::{AccountId, LedgerError};

/// Capabilities the ledger engine requires from its execution host
///
/// The host is trusted to have already authenticated the invoking principal
/// before the engine runs; `require_auth` consults that authentication for a
/// specific identity. All methods are synchronous: the execution model gives
/// the engine exclusive, serialized access to ledger state for the duration
/// of one action.
pub trait Host {
    /// Fail the action unless the invoking principal is `account`
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::Unauthorized`] if the invoking principal does
    /// not carry the authority of `account`.
    fn require_auth(&self, account: &AccountId) -> Result<(), LedgerError>;

    /// Check whether the invoking principal carries the authority of
    /// `account`, without failing the action
    ///
    /// Used for resource-payer selection, where a missing authority changes
    /// who is charged rather than aborting the call.
    fn has_auth(&self, account: &AccountId) -> bool;

    /// Check whether `account` resolves to an existing identity
    fn account_exists(&self, account: &AccountId) -> bool;

    /// Deliver an informational notification to `account`
    ///
    /// Notification runs before any balance mutation of the surrounding
    /// action; a failure here aborts the whole action.
    fn notify(&self, account: &AccountId) -> Result<(), LedgerError>;
}

/// Host for replaying a recorded, already-authenticated action log
///
/// Every principal is considered authorized and every account resolvable,
/// and notifications are accepted silently. This matches the trust model of
/// the CSV replay pipeline: the log being replayed was produced by a host
/// that already performed authentication, so re-checking it here would only
/// reject valid history.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReplayHost;

impl Host for ReplayHost {
    fn require_auth(&self, _account: &AccountId) -> Result<(), LedgerError> {
        Ok(())
    }

    fn has_auth(&self, _account: &AccountId) -> bool {
        true
    }

    fn account_exists(&self, _account: &AccountId) -> bool {
        true
    }

    fn notify(&self, _account: &AccountId) -> Result<(), LedgerError> {
        Ok(())
    }
}
