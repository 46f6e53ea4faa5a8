//! Test utilities for sandbox_guard
//!
//! This module provides logging setup and fixtures shared by the unit
//! tests.

#![cfg(test)]

use log::LevelFilter;
use simplelog::{Config, TestLogger};

/// Routes `log` output through the test harness.
///
/// Safe to call from every test; only the first call installs the logger.
pub fn init_test_logging() {
    let _ = TestLogger::init(LevelFilter::Debug, Config::default());
}

/// A credential that satisfies the default requirements
pub const STRONG_CREDENTIAL: &str = "Tr0ub4dor-and-3-more";

/// A credential that satisfies the strict requirements
pub const STRICT_CREDENTIAL: &str = "Correct-Horse-Battery-St4ple";

#[cfg(test)]
mod tests {
    use super::*;
    use crate::security::credential_guard::{validate_credential_strength, CredentialRequirements};

    #[test]
    fn test_fixtures_are_valid() {
        init_test_logging();
        init_test_logging();
        assert_eq!(
            validate_credential_strength(STRONG_CREDENTIAL, &CredentialRequirements::default()),
            Ok(())
        );
        assert_eq!(
            validate_credential_strength(STRICT_CREDENTIAL, &CredentialRequirements::strict()),
            Ok(())
        );
    }
}
