//! Token registry
//!
//! This module provides the `TokenRegistry` component that maintains one
//! descriptor per registered token symbol: the issuing account, the current
//! circulating supply, and the immutable maximum supply fixed at creation.
//!
//! The registry owns the supply side of the conservation law. Its two
//! mutators, `increase_supply` and `decrease_supply`, keep the supply inside
//! `[0, max_supply]` and refuse any quantity that would leave that range —
//! violations are precondition failures, never silently clamped.

use crate::types::{AccountId, Asset, LedgerError};
use std::collections::HashMap;

/// Descriptor for one registered token symbol
#[derive(Debug, Clone, PartialEq)]
pub struct TokenDescriptor {
    /// Account authorized to issue and retire this symbol
    pub issuer: AccountId,
    /// Current circulating supply, same symbol and precision as `max_supply`
    pub supply: Asset,
    /// Immutable supply ceiling fixed at creation
    pub max_supply: Asset,
}

/// Registry of token descriptors, keyed by symbol code
///
/// A symbol is registered at most once and never deleted. Supply mutation
/// goes through the checked mutators only; the engine is the sole caller.
#[derive(Debug, Clone, Default)]
pub struct TokenRegistry {
    /// Map of symbol code to descriptor
    tokens: HashMap<String, TokenDescriptor>,
}

impl TokenRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        TokenRegistry {
            tokens: HashMap::new(),
        }
    }

    /// Register a new token symbol
    ///
    /// The descriptor starts with zero supply in the same symbol as
    /// `max_supply`.
    ///
    /// # Errors
    ///
    /// - [`LedgerError::InvalidSymbol`] if the symbol code is malformed
    /// - [`LedgerError::InvalidAmount`] if `max_supply` is malformed or not
    ///   strictly positive
    /// - [`LedgerError::AlreadyExists`] if the symbol is already registered
    pub fn create(&mut self, issuer: AccountId, max_supply: Asset) -> Result<(), LedgerError> {
        if !max_supply.symbol.is_valid() {
            return Err(LedgerError::invalid_symbol(max_supply.symbol.to_string()));
        }
        if !max_supply.is_valid() {
            return Err(LedgerError::invalid_amount(
                max_supply.to_string(),
                "invalid supply",
            ));
        }
        if !max_supply.is_positive() {
            return Err(LedgerError::invalid_amount(
                max_supply.to_string(),
                "max-supply must be positive",
            ));
        }
        if self.tokens.contains_key(&max_supply.symbol.code) {
            return Err(LedgerError::already_exists("token", &max_supply.symbol.code));
        }

        let descriptor = TokenDescriptor {
            issuer,
            supply: Asset::zero(max_supply.symbol.clone()),
            max_supply: max_supply.clone(),
        };
        self.tokens.insert(max_supply.symbol.code, descriptor);

        Ok(())
    }

    /// Look up a descriptor by symbol code
    pub fn find(&self, code: &str) -> Option<&TokenDescriptor> {
        self.tokens.get(code)
    }

    /// Look up a descriptor by symbol code, failing if absent
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::NotFound`] if the symbol is not registered.
    pub fn get(&self, code: &str) -> Result<&TokenDescriptor, LedgerError> {
        self.tokens
            .get(code)
            .ok_or_else(|| LedgerError::not_found("token", code))
    }

    /// Increase circulating supply by `quantity`
    ///
    /// # Errors
    ///
    /// - [`LedgerError::NotFound`] if the symbol is not registered
    /// - [`LedgerError::InvalidArgument`] on a symbol or precision mismatch
    /// - [`LedgerError::SupplyExceeded`] if the new supply would exceed the
    ///   maximum
    /// - [`LedgerError::InvalidAmount`] if the addition overflows
    pub fn increase_supply(&mut self, quantity: &Asset) -> Result<(), LedgerError> {
        let code = quantity.symbol.code.clone();
        let descriptor = self
            .tokens
            .get_mut(&code)
            .ok_or_else(|| LedgerError::not_found("token", &code))?;

        if quantity.symbol != descriptor.supply.symbol {
            return Err(LedgerError::invalid_argument("symbol precision mismatch"));
        }

        let headroom = descriptor.max_supply.amount - descriptor.supply.amount;
        if quantity.amount > headroom {
            return Err(LedgerError::supply_exceeded(
                &code,
                quantity.amount,
                headroom,
            ));
        }

        let new_supply = descriptor
            .supply
            .checked_add(quantity)
            .ok_or_else(|| LedgerError::invalid_amount(quantity.to_string(), "supply overflow"))?;
        descriptor.supply = new_supply;

        Ok(())
    }

    /// Decrease circulating supply by `quantity`
    ///
    /// # Errors
    ///
    /// - [`LedgerError::NotFound`] if the symbol is not registered
    /// - [`LedgerError::InvalidArgument`] on a symbol or precision mismatch
    /// - [`LedgerError::InvalidAmount`] if the new supply would be negative
    pub fn decrease_supply(&mut self, quantity: &Asset) -> Result<(), LedgerError> {
        let code = quantity.symbol.code.clone();
        let descriptor = self
            .tokens
            .get_mut(&code)
            .ok_or_else(|| LedgerError::not_found("token", &code))?;

        if quantity.symbol != descriptor.supply.symbol {
            return Err(LedgerError::invalid_argument("symbol precision mismatch"));
        }

        if quantity.amount > descriptor.supply.amount {
            return Err(LedgerError::invalid_amount(
                quantity.to_string(),
                "exceeds circulating supply",
            ));
        }

        let new_supply = descriptor
            .supply
            .checked_sub(quantity)
            .ok_or_else(|| LedgerError::invalid_amount(quantity.to_string(), "supply underflow"))?;
        descriptor.supply = new_supply;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Symbol;
    use rust_decimal::Decimal;

    fn max_supply(literal: &str) -> Asset {
        literal.parse().unwrap()
    }

    #[test]
    fn test_create_registers_descriptor_with_zero_supply() {
        let mut registry = TokenRegistry::new();

        registry
            .create("issuer".to_string(), max_supply("1000.0000 TDN"))
            .unwrap();

        let descriptor = registry.get("TDN").unwrap();
        assert_eq!(descriptor.issuer, "issuer");
        assert_eq!(descriptor.supply.amount, Decimal::ZERO);
        assert_eq!(descriptor.supply.symbol, Symbol::new("TDN", 4));
        assert_eq!(descriptor.max_supply, max_supply("1000.0000 TDN"));
    }

    #[test]
    fn test_create_rejects_duplicate_symbol() {
        let mut registry = TokenRegistry::new();

        registry
            .create("issuer".to_string(), max_supply("1000.0000 TDN"))
            .unwrap();

        let result = registry.create("other".to_string(), max_supply("5.00 TDN"));
        assert!(matches!(
            result.unwrap_err(),
            LedgerError::AlreadyExists { .. }
        ));
    }

    #[test]
    fn test_create_rejects_invalid_symbol() {
        let mut registry = TokenRegistry::new();

        let bad = Asset::new(Decimal::new(10000, 4), Symbol::new("toolongcode", 4));
        let result = registry.create("issuer".to_string(), bad);
        assert!(matches!(
            result.unwrap_err(),
            LedgerError::InvalidSymbol { .. }
        ));
    }

    #[test]
    fn test_create_rejects_non_positive_max_supply() {
        let mut registry = TokenRegistry::new();

        let zero = Asset::zero(Symbol::new("TDN", 4));
        let result = registry.create("issuer".to_string(), zero);
        assert!(matches!(
            result.unwrap_err(),
            LedgerError::InvalidAmount { .. }
        ));

        let negative = Asset::new(Decimal::new(-10000, 4), Symbol::new("TDN", 4));
        let result = registry.create("issuer".to_string(), negative);
        assert!(matches!(
            result.unwrap_err(),
            LedgerError::InvalidAmount { .. }
        ));
    }

    #[test]
    fn test_get_fails_on_unknown_symbol() {
        let registry = TokenRegistry::new();
        assert!(registry.find("TDN").is_none());
        assert!(matches!(
            registry.get("TDN").unwrap_err(),
            LedgerError::NotFound { .. }
        ));
    }

    #[test]
    fn test_increase_supply_within_ceiling() {
        let mut registry = TokenRegistry::new();
        registry
            .create("issuer".to_string(), max_supply("1000.0000 TDN"))
            .unwrap();

        registry
            .increase_supply(&"100.0000 TDN".parse().unwrap())
            .unwrap();
        assert_eq!(
            registry.get("TDN").unwrap().supply.amount,
            Decimal::new(1000000, 4)
        );
    }

    #[test]
    fn test_increase_supply_to_exact_ceiling_succeeds() {
        let mut registry = TokenRegistry::new();
        registry
            .create("issuer".to_string(), max_supply("1000.0000 TDN"))
            .unwrap();

        registry
            .increase_supply(&"1000.0000 TDN".parse().unwrap())
            .unwrap();
        assert_eq!(
            registry.get("TDN").unwrap().supply.amount,
            Decimal::new(10000000, 4)
        );
    }

    #[test]
    fn test_increase_supply_beyond_ceiling_fails() {
        let mut registry = TokenRegistry::new();
        registry
            .create("issuer".to_string(), max_supply("1000.0000 TDN"))
            .unwrap();
        registry
            .increase_supply(&"100.0000 TDN".parse().unwrap())
            .unwrap();

        // 100 + 950 > 1000
        let result = registry.increase_supply(&"950.0000 TDN".parse().unwrap());
        assert!(matches!(
            result.unwrap_err(),
            LedgerError::SupplyExceeded { .. }
        ));

        // Supply must be unchanged after the failed increase
        assert_eq!(
            registry.get("TDN").unwrap().supply.amount,
            Decimal::new(1000000, 4)
        );
    }

    #[test]
    fn test_increase_supply_one_unit_over_headroom_fails() {
        let mut registry = TokenRegistry::new();
        registry
            .create("issuer".to_string(), max_supply("1000.0000 TDN"))
            .unwrap();
        registry
            .increase_supply(&"999.9999 TDN".parse().unwrap())
            .unwrap();

        // Exactly the remaining headroom succeeds
        registry
            .increase_supply(&"0.0001 TDN".parse().unwrap())
            .unwrap();

        // One more smallest unit fails
        let result = registry.increase_supply(&"0.0001 TDN".parse().unwrap());
        assert!(matches!(
            result.unwrap_err(),
            LedgerError::SupplyExceeded { .. }
        ));
    }

    #[test]
    fn test_increase_supply_rejects_precision_mismatch() {
        let mut registry = TokenRegistry::new();
        registry
            .create("issuer".to_string(), max_supply("1000.0000 TDN"))
            .unwrap();

        let wrong_precision = Asset::new(Decimal::new(100, 2), Symbol::new("TDN", 2));
        let result = registry.increase_supply(&wrong_precision);
        assert!(matches!(
            result.unwrap_err(),
            LedgerError::InvalidArgument { .. }
        ));
    }

    #[test]
    fn test_decrease_supply() {
        let mut registry = TokenRegistry::new();
        registry
            .create("issuer".to_string(), max_supply("1000.0000 TDN"))
            .unwrap();
        registry
            .increase_supply(&"100.0000 TDN".parse().unwrap())
            .unwrap();

        registry
            .decrease_supply(&"60.0000 TDN".parse().unwrap())
            .unwrap();
        assert_eq!(
            registry.get("TDN").unwrap().supply.amount,
            Decimal::new(400000, 4)
        );
    }

    #[test]
    fn test_decrease_supply_below_zero_fails() {
        let mut registry = TokenRegistry::new();
        registry
            .create("issuer".to_string(), max_supply("1000.0000 TDN"))
            .unwrap();
        registry
            .increase_supply(&"100.0000 TDN".parse().unwrap())
            .unwrap();

        let result = registry.decrease_supply(&"100.0001 TDN".parse().unwrap());
        assert!(matches!(
            result.unwrap_err(),
            LedgerError::InvalidAmount { .. }
        ));
        assert_eq!(
            registry.get("TDN").unwrap().supply.amount,
            Decimal::new(1000000, 4)
        );
    }

    #[test]
    fn test_supply_mutators_fail_on_unknown_symbol() {
        let mut registry = TokenRegistry::new();

        let quantity: Asset = "1.0000 TDN".parse().unwrap();
        assert!(matches!(
            registry.increase_supply(&quantity).unwrap_err(),
            LedgerError::NotFound { .. }
        ));
        assert!(matches!(
            registry.decrease_supply(&quantity).unwrap_err(),
            LedgerError::NotFound { .. }
        ));
    }

    #[test]
    fn test_independent_symbols() {
        let mut registry = TokenRegistry::new();
        registry
            .create("issuer".to_string(), max_supply("1000.0000 TDN"))
            .unwrap();
        registry
            .create("other".to_string(), max_supply("50.00 BAR"))
            .unwrap();

        registry
            .increase_supply(&"10.0000 TDN".parse().unwrap())
            .unwrap();

        assert_eq!(
            registry.get("TDN").unwrap().supply.amount,
            Decimal::new(100000, 4)
        );
        assert_eq!(registry.get("BAR").unwrap().supply.amount, Decimal::ZERO);
    }
}
