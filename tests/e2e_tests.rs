//! End-to-end integration tests
//!
//! These tests validate the complete action replay pipeline using predefined
//! CSV test fixtures. Each test:
//! 1. Reads input.csv from a fixture directory
//! 2. Replays all actions through the engine
//! 3. Generates the balance report CSV
//! 4. Compares actual output with expected.csv
//!
//! Test fixtures are located in tests/fixtures/ and cover:
//! - Happy path token lifecycle (create, issue, transfer, retire)
//! - Supply ceiling enforcement
//! - Blacklist gating of issuance and transfers
//! - Open/close record management
//! - Error conditions (insufficient funds, duplicates, self transfers)
//! - Edge cases (multiple tokens, malformed data)
//!
//! Each test is run twice: once with the synchronous parser and once with
//! the async parser.

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use rust_token_ledger::cli::StrategyType;
    use rust_token_ledger::strategy::create_strategy;
    use std::fs;
    use std::io::Write;
    use std::path::Path;
    use tempfile::NamedTempFile;

    /// Run a test fixture by replaying input.csv and comparing with expected.csv
    ///
    /// This helper function:
    /// 1. Reads input.csv from tests/fixtures/{fixture_name}/
    /// 2. Replays all actions using the specified strategy
    /// 3. Generates output CSV to a temporary file
    /// 4. Reads expected.csv from the fixture directory
    /// 5. Compares actual output with expected output
    ///
    /// # Panics
    ///
    /// Panics if:
    /// - Input or expected files cannot be read
    /// - Output doesn't match expected
    fn run_test_fixture(fixture_name: &str, strategy_type: StrategyType) {
        let fixture_dir = format!("tests/fixtures/{}", fixture_name);
        let input_path = format!("{}/input.csv", fixture_dir);
        let expected_path = format!("{}/expected.csv", fixture_dir);

        assert!(
            Path::new(&input_path).exists(),
            "Input file not found: {}",
            input_path
        );
        assert!(
            Path::new(&expected_path).exists(),
            "Expected file not found: {}",
            expected_path
        );

        let strategy = create_strategy(strategy_type.clone(), None);

        let mut temp_output = NamedTempFile::new().expect("Failed to create temp file");

        strategy
            .process(Path::new(&input_path), &mut temp_output)
            .unwrap_or_else(|e| panic!("Failed to process actions: {}", e));

        temp_output.flush().expect("Failed to flush temp file");

        let actual_output = fs::read_to_string(temp_output.path())
            .unwrap_or_else(|e| panic!("Failed to read temp output file: {}", e));

        let expected_output = fs::read_to_string(&expected_path)
            .unwrap_or_else(|e| panic!("Failed to read expected file {}: {}", expected_path, e));

        assert_eq!(
            actual_output, expected_output,
            "\n\nOutput mismatch for fixture: {} (strategy: {:?})\n\nActual output:\n{}\n\nExpected output:\n{}\n",
            fixture_name, strategy_type, actual_output, expected_output
        );
    }

    /// End-to-end test for all fixtures with both parsing strategies
    #[rstest]
    #[case("happy_path")]
    #[case("supply_ceiling")]
    #[case("blacklist_gating")]
    #[case("open_close")]
    #[case("insufficient_funds")]
    #[case("issue_to_recipient")]
    #[case("multiple_tokens")]
    #[case("duplicate_and_self")]
    #[case("malformed_data")]
    fn test_fixtures(
        #[case] fixture: &str,
        #[values(StrategyType::Sync, StrategyType::Async)] strategy: StrategyType,
    ) {
        run_test_fixture(fixture, strategy);
    }
}
