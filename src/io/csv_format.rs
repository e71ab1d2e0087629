//! CSV format handling for action records and balance output
//!
//! This module centralizes all CSV format concerns, providing:
//! - CsvRecord structure for deserialization
//! - Conversion from CSV records to domain actions
//! - Balance report serialization
//!
//! All functions are pure (no I/O) for easy testing.
//!
//! # Input format
//!
//! Columns: `action,actor,target,quantity,memo`. Which columns an action
//! uses depends on the action:
//!
//! | action       | actor | target | quantity                |
//! |--------------|-------|--------|-------------------------|
//! | create       |       | issuer | max supply (`1000.0000 TDN`) |
//! | issue        |       | to     | asset literal           |
//! | retire       |       |        | asset literal           |
//! | transfer     | from  | to     | asset literal           |
//! | open         | payer | owner  | symbol spec (`4,TDN`)   |
//! | close        |       | owner  | symbol spec             |
//! | addblacklist |       | user   |                         |
//! | rmvblacklist |       | user   |                         |
//!
//! The `memo` column applies to issue, retire, and transfer; unused columns
//! may be left empty.

use crate::types::{AccountId, Action, Asset, Symbol};
use serde::Deserialize;
use std::io::Write;
use std::str::FromStr;

/// CSV record structure for deserialization
///
/// Matches the input CSV format with columns: action, actor, target,
/// quantity, memo. All fields except the action name are optional because
/// different actions use different subsets of the columns.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct CsvRecord {
    pub action: String,
    pub actor: Option<String>,
    pub target: Option<String>,
    pub quantity: Option<String>,
    pub memo: Option<String>,
}

/// Require a column for an action, rejecting missing or blank values
fn require(
    value: Option<String>,
    action: &str,
    column: &str,
) -> Result<String, String> {
    match value {
        Some(s) if !s.trim().is_empty() => Ok(s.trim().to_string()),
        _ => Err(format!("'{}' requires the '{}' column", action, column)),
    }
}

/// Parse the quantity column as an asset literal (e.g. `100.0000 TDN`)
fn require_asset(value: Option<String>, action: &str) -> Result<Asset, String> {
    let literal = require(value, action, "quantity")?;
    Asset::from_str(&literal)
}

/// Parse the quantity column as a symbol spec (e.g. `4,TDN`)
fn require_symbol(value: Option<String>, action: &str) -> Result<Symbol, String> {
    let spec = require(value, action, "quantity")?;
    Symbol::from_str(&spec)
}

/// Convert a CsvRecord to an Action
///
/// Parses the action name (case insensitive), pulls the columns that action
/// uses, and parses asset literals and symbol specs. An empty or absent memo
/// column becomes an empty memo.
///
/// # Arguments
///
/// * `csv_record` - The deserialized CSV record
///
/// # Returns
///
/// Result containing either:
/// - Ok(Action) - Successfully converted record
/// - Err(String) - Error message describing the conversion failure
pub fn convert_csv_record(csv_record: CsvRecord) -> Result<Action, String> {
    let memo = csv_record.memo.unwrap_or_default();

    match csv_record.action.to_lowercase().as_str() {
        "create" => Ok(Action::Create {
            issuer: require(csv_record.target, "create", "target")?,
            max_supply: require_asset(csv_record.quantity, "create")?,
        }),
        "issue" => Ok(Action::Issue {
            to: require(csv_record.target, "issue", "target")?,
            quantity: require_asset(csv_record.quantity, "issue")?,
            memo,
        }),
        "retire" => Ok(Action::Retire {
            quantity: require_asset(csv_record.quantity, "retire")?,
            memo,
        }),
        "transfer" => Ok(Action::Transfer {
            from: require(csv_record.actor, "transfer", "actor")?,
            to: require(csv_record.target, "transfer", "target")?,
            quantity: require_asset(csv_record.quantity, "transfer")?,
            memo,
        }),
        "open" => {
            let owner = require(csv_record.target, "open", "target")?;
            // An absent actor column defaults the payer to the owner
            let payer = match csv_record.actor {
                Some(s) if !s.trim().is_empty() => s.trim().to_string(),
                _ => owner.clone(),
            };
            Ok(Action::Open {
                owner,
                symbol: require_symbol(csv_record.quantity, "open")?,
                payer,
            })
        }
        "close" => Ok(Action::Close {
            owner: require(csv_record.target, "close", "target")?,
            symbol: require_symbol(csv_record.quantity, "close")?,
        }),
        "addblacklist" => Ok(Action::AddBlacklist {
            user: require(csv_record.target, "addblacklist", "target")?,
        }),
        "rmvblacklist" => Ok(Action::RmvBlacklist {
            user: require(csv_record.target, "rmvblacklist", "target")?,
        }),
        other => Err(format!("Invalid action type: '{}'", other)),
    }
}

/// Write balance records to CSV format
///
/// Writes balances in CSV format with columns: account, balance. The balance
/// column holds asset literals (`60.0000 TDN`). Rows are sorted by account
/// then symbol code for deterministic output.
///
/// # Arguments
///
/// * `balances` - Balance records to write, as (owner, asset) pairs
/// * `output` - Mutable reference to a writer for outputting CSV
///
/// # Returns
///
/// * `Ok(())` if writing succeeded
/// * `Err(String)` if a write error occurred
pub fn write_balances_csv(
    balances: &[(AccountId, Asset)],
    output: &mut dyn Write,
) -> Result<(), String> {
    use csv::Writer;

    let mut writer = Writer::from_writer(output);

    writer
        .write_record(["account", "balance"])
        .map_err(|e| format!("Failed to write CSV header: {}", e))?;

    let mut sorted: Vec<&(AccountId, Asset)> = balances.iter().collect();
    sorted.sort_by(|a, b| (&a.0, &a.1.symbol.code).cmp(&(&b.0, &b.1.symbol.code)));

    for (account, asset) in sorted {
        writer
            .write_record(&[account.clone(), asset.to_string()])
            .map_err(|e| format!("Failed to write balance record: {}", e))?;
    }

    writer
        .flush()
        .map_err(|e| format!("Failed to flush output: {}", e))?;

    Ok(())
}
