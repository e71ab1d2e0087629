//! Symbol and asset types for the token ledger
//!
//! A `Symbol` names a token type together with its fixed decimal precision.
//! An `Asset` is a decimal quantity bound to a symbol. All ledger arithmetic
//! goes through the checked helpers on `Asset` so that overflow and symbol
//! mismatches are surfaced instead of silently corrupting balances.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Maximum length of a symbol code in characters
pub const MAX_SYMBOL_LEN: usize = 7;

/// A token symbol: an uppercase code plus a fixed decimal precision
///
/// Two symbols are equal only if both the code and the precision match.
/// A quantity expressed in `4,TDN` is not interchangeable with one in
/// `2,TDN` — the engine reports that as a precision mismatch.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Symbol {
    /// Symbol code: 1 to 7 uppercase ASCII letters (e.g. "TDN")
    pub code: String,
    /// Number of decimal places carried by every amount of this symbol
    pub precision: u32,
}

impl Symbol {
    /// Create a new symbol from a code and precision
    pub fn new(code: impl Into<String>, precision: u32) -> Self {
        Symbol {
            code: code.into(),
            precision,
        }
    }

    /// Check whether the symbol is well formed
    ///
    /// A valid symbol code is 1 to [`MAX_SYMBOL_LEN`] uppercase ASCII letters.
    pub fn is_valid(&self) -> bool {
        !self.code.is_empty()
            && self.code.len() <= MAX_SYMBOL_LEN
            && self.code.bytes().all(|b| b.is_ascii_uppercase())
    }
}

impl fmt::Display for Symbol {
    /// Format as the `precision,CODE` spec form (e.g. `4,TDN`)
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.precision, self.code)
    }
}

impl FromStr for Symbol {
    type Err = String;

    /// Parse a symbol spec of the form `precision,CODE` (e.g. `4,TDN`)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (precision, code) = s
            .split_once(',')
            .ok_or_else(|| format!("Invalid symbol spec '{}': expected 'precision,CODE'", s))?;

        let precision: u32 = precision
            .trim()
            .parse()
            .map_err(|_| format!("Invalid precision in symbol spec '{}'", s))?;

        let symbol = Symbol::new(code.trim(), precision);
        if !symbol.is_valid() {
            return Err(format!("Invalid symbol code '{}'", code.trim()));
        }

        Ok(symbol)
    }
}

/// A quantity of a specific token symbol
///
/// The amount always carries exactly `symbol.precision` decimal places.
/// Assets of different symbols never combine; the checked arithmetic
/// helpers return `None` on a symbol mismatch as well as on overflow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Asset {
    /// The quantity, scaled to the symbol's precision
    pub amount: Decimal,
    /// The symbol this quantity is denominated in
    pub symbol: Symbol,
}

impl Asset {
    /// Create a new asset from an amount and symbol
    pub fn new(amount: Decimal, symbol: Symbol) -> Self {
        Asset { amount, symbol }
    }

    /// Create a zero-valued asset of the given symbol
    pub fn zero(symbol: Symbol) -> Self {
        let mut amount = Decimal::ZERO;
        amount.rescale(symbol.precision);
        Asset { amount, symbol }
    }

    /// Check whether the asset is well formed
    ///
    /// A valid asset has a valid symbol and an amount whose scale does not
    /// exceed the symbol's precision.
    pub fn is_valid(&self) -> bool {
        self.symbol.is_valid() && self.amount.scale() <= self.symbol.precision
    }

    /// Check whether the amount is strictly positive
    pub fn is_positive(&self) -> bool {
        self.amount > Decimal::ZERO
    }

    /// Add another asset of the same symbol
    ///
    /// Returns `None` if the symbols differ or the addition overflows.
    pub fn checked_add(&self, other: &Asset) -> Option<Asset> {
        if self.symbol != other.symbol {
            return None;
        }
        let amount = self.amount.checked_add(other.amount)?;
        Some(Asset::new(amount, self.symbol.clone()))
    }

    /// Subtract another asset of the same symbol
    ///
    /// Returns `None` if the symbols differ or the subtraction overflows.
    pub fn checked_sub(&self, other: &Asset) -> Option<Asset> {
        if self.symbol != other.symbol {
            return None;
        }
        let amount = self.amount.checked_sub(other.amount)?;
        Some(Asset::new(amount, self.symbol.clone()))
    }
}

impl fmt::Display for Asset {
    /// Format as an asset literal (e.g. `100.0000 TDN`)
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.*} {}",
            self.symbol.precision as usize, self.amount, self.symbol.code
        )
    }
}

impl FromStr for Asset {
    type Err = String;

    /// Parse an asset literal of the form `100.0000 TDN`
    ///
    /// The symbol precision is inferred from the number of decimal digits in
    /// the amount, so `100.0000 TDN` yields precision 4 and `7 BAR` yields
    /// precision 0.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (amount, code) = s
            .trim()
            .split_once(' ')
            .ok_or_else(|| format!("Invalid asset '{}': expected 'amount CODE'", s))?;

        let amount = Decimal::from_str(amount.trim())
            .map_err(|_| format!("Invalid amount in asset '{}'", s))?;

        let symbol = Symbol::new(code.trim(), amount.scale());
        if !symbol.is_valid() {
            return Err(format!("Invalid symbol code '{}'", code.trim()));
        }

        Ok(Asset::new(amount, symbol))
    }
}
