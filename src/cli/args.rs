use crate::strategy::BatchConfig;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Replay token ledger actions from a CSV log
#[derive(Parser, Debug)]
#[command(name = "token-ledger")]
#[command(about = "Replay token ledger actions from a CSV log", long_about = None)]
pub struct CliArgs {
    /// Input CSV file path containing action records
    #[arg(value_name = "INPUT", help = "Path to the input CSV file")]
    pub input_file: PathBuf,

    /// Parsing strategy to use for processing actions
    #[arg(
        long = "strategy",
        value_name = "STRATEGY",
        default_value = "sync",
        help = "Parsing strategy: 'sync' for synchronous or 'async' for asynchronous"
    )]
    pub strategy: StrategyType,

    /// Number of actions per read batch (async mode only)
    #[arg(
        long = "batch-size",
        value_name = "SIZE",
        help = "Number of actions per read batch (default: 1000)"
    )]
    pub batch_size: Option<usize>,
}

/// Available parsing strategies for CSV processing
#[derive(Clone, Debug, ValueEnum)]
pub enum StrategyType {
    Sync,
    Async,
}

impl CliArgs {
    /// Create a BatchConfig from CLI arguments
    ///
    /// Uses the CLI batch size if provided, falling back to the default
    /// otherwise. Validation (zero fallback) happens in BatchConfig::new.
    pub fn to_batch_config(&self) -> BatchConfig {
        match self.batch_size {
            Some(batch_size) => BatchConfig::new(batch_size),
            None => BatchConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::default_strategy(&["program", "input.csv"], StrategyType::Sync)]
    #[case::explicit_sync(&["program", "--strategy", "sync", "input.csv"], StrategyType::Sync)]
    #[case::explicit_async(&["program", "--strategy", "async", "input.csv"], StrategyType::Async)]
    fn test_strategy_parsing(#[case] args: &[&str], #[case] expected: StrategyType) {
        let parsed = CliArgs::try_parse_from(args).unwrap();
        match (&parsed.strategy, &expected) {
            (StrategyType::Sync, StrategyType::Sync) => (),
            (StrategyType::Async, StrategyType::Async) => (),
            _ => panic!("Expected {:?}, got {:?}", expected, parsed.strategy),
        }
    }

    #[rstest]
    #[case::batch_size(&["program", "--batch-size", "2000", "input.csv"], Some(2000))]
    #[case::no_options(&["program", "input.csv"], None)]
    #[case::all_options(
        &["program", "--strategy", "async", "--batch-size", "2000", "input.csv"],
        Some(2000)
    )]
    fn test_config_options(#[case] args: &[&str], #[case] batch_size: Option<usize>) {
        let parsed = CliArgs::try_parse_from(args).unwrap();
        assert_eq!(parsed.batch_size, batch_size);
    }

    #[rstest]
    #[case::default_size(&["program", "input.csv"], 1000)]
    #[case::custom_size(&["program", "--batch-size", "2000", "input.csv"], 2000)]
    #[case::zero_falls_back(&["program", "--batch-size", "0", "input.csv"], 1000)]
    fn test_batch_config_conversion(#[case] args: &[&str], #[case] expected_batch_size: usize) {
        let parsed = CliArgs::try_parse_from(args).unwrap();
        let config = parsed.to_batch_config();

        assert_eq!(config.batch_size, expected_batch_size);
    }

    #[rstest]
    #[case::missing_input(&["program"])]
    #[case::invalid_strategy(&["program", "--strategy", "invalid", "input.csv"])]
    fn test_parsing_errors(#[case] args: &[&str]) {
        let result = CliArgs::try_parse_from(args);
        assert!(result.is_err());
    }
}
