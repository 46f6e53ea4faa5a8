//! Security policy and audit events.
//!
//! [`SecurityConfig`] bundles the numbers a sandbox or secret manager feeds
//! into the guards, and wraps each guard in a `check_*` helper that reports
//! rejections through [`log_security_event`]. The helpers return exactly what
//! the underlying primitive returns; they only add the audit trail.

use anyhow::{bail, Context, Result};
use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_MAX_CREDENTIAL_AGE_DAYS, DEFAULT_MIN_ENTROPY_BITS, DEFAULT_WORKSPACE_ROOT,
    MAX_ENTROPY_BITS,
};
use crate::security::command_guard::{extract_binary_name, is_safe_binary};
use crate::security::credential_guard::{
    is_secure_file_mode, validate_credential_strength, CredentialError, CredentialRequirements,
};
use crate::security::entropy::has_minimum_entropy;
use crate::security::expiry::{days_until_expiry, is_expired};
use crate::security::path_guard::{is_path_traversal, is_within_base, normalize_path_string};

/// Security policy for a sandbox and its secrets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SecurityConfig {
    /// Directory all file access must stay inside (no trailing `/`)
    pub workspace_root: String,

    /// Strength policy for newly issued credentials
    pub credential_requirements: CredentialRequirements,

    /// Credentials older than this many days are expired
    pub max_credential_age_days: u32,

    /// Minimum Shannon entropy in bits per byte for generated secrets
    pub min_entropy_bits: f64,

    /// Emit a warning for every rejected check
    pub audit_logging: bool,
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            workspace_root: DEFAULT_WORKSPACE_ROOT.to_string(),
            credential_requirements: CredentialRequirements::default(),
            max_credential_age_days: DEFAULT_MAX_CREDENTIAL_AGE_DAYS,
            min_entropy_bits: DEFAULT_MIN_ENTROPY_BITS,
            audit_logging: true,
        }
    }
}

impl SecurityConfig {
    /// Create a high-security configuration.
    ///
    /// Longer credentials with a mandatory special character, a 30 day
    /// rotation window and a higher entropy floor.
    pub fn strict() -> Self {
        Self {
            credential_requirements: CredentialRequirements::strict(),
            max_credential_age_days: 30,
            min_entropy_bits: 3.5,
            ..Self::default()
        }
    }

    /// Create a permissive configuration for testing.
    ///
    /// WARNING: accepts short, single-class credentials and never logs
    /// rejections. Do not use outside tests.
    pub fn permissive() -> Self {
        Self {
            credential_requirements: CredentialRequirements {
                min_length: 1,
                require_uppercase: false,
                require_lowercase: false,
                require_digit: false,
                require_special: false,
                reject_common_passwords: false,
                ..CredentialRequirements::default()
            },
            max_credential_age_days: 365,
            min_entropy_bits: 0.0,
            audit_logging: false,
            ..Self::default()
        }
    }

    /// Parse and validate a YAML policy document.
    ///
    /// Missing fields take their default values.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: SecurityConfig =
            serde_yaml::from_str(yaml).context("Failed to parse security config YAML")?;
        config.validate()?;
        debug!("Loaded security config for workspace {}", config.workspace_root);
        Ok(config)
    }

    /// Serialize the policy to YAML.
    pub fn to_yaml_string(&self) -> Result<String> {
        serde_yaml::to_string(self).context("Failed to serialize security config to YAML")
    }

    /// Reject policies the guards cannot apply meaningfully.
    pub fn validate(&self) -> Result<()> {
        if self.workspace_root.is_empty() {
            bail!("workspace_root must not be empty");
        }
        if is_path_traversal(&self.workspace_root) {
            bail!("workspace_root must not contain '..' or NUL bytes");
        }

        let req = &self.credential_requirements;
        if req.min_length > req.max_length {
            bail!(
                "credential min_length ({}) exceeds max_length ({})",
                req.min_length,
                req.max_length
            );
        }

        if !(0.0..=MAX_ENTROPY_BITS).contains(&self.min_entropy_bits) {
            bail!(
                "min_entropy_bits must be between 0 and {}, got {}",
                MAX_ENTROPY_BITS,
                self.min_entropy_bits
            );
        }

        Ok(())
    }

    fn record(&self, event: SecurityEvent) {
        if self.audit_logging {
            log_security_event(event);
        }
    }

    /// Traversal check followed by containment in `workspace_root`.
    pub fn check_path(&self, path: &str) -> bool {
        if is_path_traversal(path) {
            self.record(SecurityEvent::PathRejected {
                path: normalize_path_string(path),
                reason: PathRejection::Traversal,
            });
            return false;
        }

        if !is_within_base(path, &self.workspace_root) {
            self.record(SecurityEvent::PathRejected {
                path: normalize_path_string(path),
                reason: PathRejection::OutsideWorkspace,
            });
            return false;
        }

        debug!("Path allowed: {}", normalize_path_string(path));
        true
    }

    /// Allowlist check for a full command line.
    pub fn check_command(&self, command: &str) -> bool {
        let binary = extract_binary_name(command);
        if !is_safe_binary(command) {
            self.record(SecurityEvent::CommandRejected {
                binary: binary.to_string(),
            });
            return false;
        }

        debug!("Command allowed: {}", binary);
        true
    }

    /// Strength check against `credential_requirements`.
    pub fn check_credential(&self, credential: &str) -> Result<(), CredentialError> {
        validate_credential_strength(credential, &self.credential_requirements).map_err(
            |reason| {
                self.record(SecurityEvent::CredentialRejected { reason });
                reason
            },
        )
    }

    /// `true` if a generated secret meets `min_entropy_bits`.
    pub fn check_entropy(&self, secret: &str) -> bool {
        let sufficient = has_minimum_entropy(secret, self.min_entropy_bits);
        if !sufficient {
            self.record(SecurityEvent::LowEntropy {
                min_bits: self.min_entropy_bits,
            });
        }
        sufficient
    }

    /// `true` while a credential created at `created` is still usable at `now`.
    pub fn check_credential_age(&self, created: i64, now: i64) -> bool {
        if is_expired(created, now, self.max_credential_age_days) {
            self.record(SecurityEvent::CredentialExpired {
                days_overdue: -days_until_expiry(created, now, self.max_credential_age_days),
            });
            return false;
        }
        true
    }

    /// `true` if a secret file's mode is owner-only.
    pub fn check_file_mode(&self, path: &str, mode: u32) -> bool {
        if !is_secure_file_mode(mode) {
            self.record(SecurityEvent::InsecureFileMode {
                path: normalize_path_string(path),
                mode,
            });
            return false;
        }
        true
    }
}

/// Why a path was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PathRejection {
    Traversal,
    OutsideWorkspace,
}

/// Security audit event types.
///
/// Events never carry secret material: credential events hold only the
/// rejection reason, and paths are normalized before they are stored.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum SecurityEvent {
    /// Path failed traversal or containment checks
    PathRejected { path: String, reason: PathRejection },

    /// Command binary is not on the allowlist
    CommandRejected { binary: String },

    /// Credential failed the strength policy
    CredentialRejected { reason: CredentialError },

    /// Secret is below the entropy floor
    LowEntropy { min_bits: f64 },

    /// Credential is past its maximum age
    CredentialExpired { days_overdue: i64 },

    /// Secret file is readable or writable by group or other
    InsecureFileMode { path: String, mode: u32 },
}

/// Log a security event.
pub fn log_security_event(event: SecurityEvent) {
    match event {
        SecurityEvent::PathRejected { path, reason } => match reason {
            PathRejection::Traversal => {
                warn!("Security: Path '{}' rejected: traversal sequence", path);
            }
            PathRejection::OutsideWorkspace => {
                warn!("Security: Path '{}' rejected: outside workspace", path);
            }
        },
        SecurityEvent::CommandRejected { binary } => {
            if binary.is_empty() {
                warn!("Security: Empty command rejected");
            } else {
                warn!("Security: Command '{}' is not on the allowlist", binary);
            }
        }
        SecurityEvent::CredentialRejected { reason } => {
            warn!("Security: Credential rejected: {}", reason);
        }
        SecurityEvent::LowEntropy { min_bits } => {
            warn!(
                "Security: Secret entropy below {:.2} bits per byte",
                min_bits
            );
        }
        SecurityEvent::CredentialExpired { days_overdue } => {
            warn!("Security: Credential expired {} day(s) ago", days_overdue);
        }
        SecurityEvent::InsecureFileMode { path, mode } => {
            warn!(
                "Security: Secret file '{}' has insecure mode {:o}",
                path,
                mode & 0o777
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::SECONDS_PER_DAY;
    use crate::test_utils::{init_test_logging, STRICT_CREDENTIAL, STRONG_CREDENTIAL};

    #[test]
    fn test_security_config_default() {
        let config = SecurityConfig::default();
        assert_eq!(config.workspace_root, "/workspace");
        assert_eq!(config.credential_requirements, CredentialRequirements::default());
        assert_eq!(config.max_credential_age_days, 90);
        assert_eq!(config.min_entropy_bits, 3.0);
        assert!(config.audit_logging);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_security_config_strict() {
        let config = SecurityConfig::strict();
        assert!(config.credential_requirements.require_special);
        assert_eq!(config.credential_requirements.min_length, 24);
        assert_eq!(config.max_credential_age_days, 30);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_security_config_permissive() {
        let config = SecurityConfig::permissive();
        assert!(!config.audit_logging);
        assert_eq!(config.check_credential("password"), Ok(()));
        assert!(config.check_entropy(""));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_yaml_partial_document() {
        let yaml = r#"
workspace_root: /srv/sandbox
credential_requirements:
  min_length: 20
  require_special: true
max_credential_age_days: 45
"#;
        let config = SecurityConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(config.workspace_root, "/srv/sandbox");
        assert_eq!(config.credential_requirements.min_length, 20);
        assert_eq!(config.credential_requirements.max_length, 256);
        assert!(config.credential_requirements.require_special);
        assert!(config.credential_requirements.require_digit);
        assert_eq!(config.max_credential_age_days, 45);
        assert_eq!(config.min_entropy_bits, 3.0);
    }

    #[test]
    fn test_yaml_round_trip() {
        let config = SecurityConfig::strict();
        let yaml = config.to_yaml_string().unwrap();
        assert_eq!(SecurityConfig::from_yaml_str(&yaml).unwrap(), config);
    }

    #[test]
    fn test_from_yaml_rejects_invalid_policies() {
        let cases = vec![
            "workspace_root: ''",
            "workspace_root: /srv/../etc",
            "credential_requirements:\n  min_length: 300\n  max_length: 256",
            "min_entropy_bits: 9.5",
            "min_entropy_bits: -1.0",
            "max_credential_age_days: [not, a, number]",
        ];

        for yaml in cases {
            assert!(
                SecurityConfig::from_yaml_str(yaml).is_err(),
                "Accepted invalid config: {}",
                yaml
            );
        }
    }

    #[test]
    fn test_check_path() {
        init_test_logging();
        let config = SecurityConfig::default();

        assert!(config.check_path("/workspace/src/main.rs"));
        assert!(config.check_path("/workspace"));
        assert!(!config.check_path("/workspace/../etc/passwd"));
        assert!(!config.check_path("/workspace2/file"));
        assert!(!config.check_path("/etc/shadow"));
    }

    #[test]
    fn test_check_command() {
        init_test_logging();
        let config = SecurityConfig::default();

        assert!(config.check_command("git status"));
        assert!(config.check_command("/usr/bin/python3 script.py"));
        assert!(!config.check_command("rm -rf /"));
        assert!(!config.check_command(""));
    }

    #[test]
    fn test_check_credential() {
        init_test_logging();
        let config = SecurityConfig::default();

        assert_eq!(config.check_credential(STRONG_CREDENTIAL), Ok(()));
        assert_eq!(
            config.check_credential("short"),
            Err(CredentialError::CredentialTooShort)
        );

        let strict = SecurityConfig::strict();
        assert_eq!(strict.check_credential(STRICT_CREDENTIAL), Ok(()));
        assert_eq!(
            strict.check_credential(STRONG_CREDENTIAL),
            Err(CredentialError::CredentialTooShort)
        );
    }

    #[test]
    fn test_check_entropy() {
        init_test_logging();
        let config = SecurityConfig::default();

        assert!(config.check_entropy("Xk9#mQ2$vL7!pR4@"));
        assert!(!config.check_entropy("aaaaaaaaaaaaaaaa"));
    }

    #[test]
    fn test_check_credential_age() {
        init_test_logging();
        let config = SecurityConfig::default();

        assert!(config.check_credential_age(0, 89 * SECONDS_PER_DAY));
        assert!(!config.check_credential_age(0, 90 * SECONDS_PER_DAY));
        assert!(!config.check_credential_age(0, 120 * SECONDS_PER_DAY));
    }

    #[test]
    fn test_check_file_mode() {
        init_test_logging();
        let config = SecurityConfig::default();

        assert!(config.check_file_mode("/home/user/.secrets/key", 0o600));
        assert!(!config.check_file_mode("/home/user/.secrets//key", 0o644));
    }

    #[test]
    fn test_security_event_serializes_without_secrets() {
        let event = SecurityEvent::CredentialRejected {
            reason: CredentialError::NoDigit,
        };
        let yaml = serde_yaml::to_string(&event).unwrap();
        assert!(yaml.contains("NoDigit"));

        let event = SecurityEvent::PathRejected {
            path: normalize_path_string("/workspace//a/./b"),
            reason: PathRejection::Traversal,
        };
        assert_eq!(
            event,
            SecurityEvent::PathRejected {
                path: "/workspace/a/b".to_string(),
                reason: PathRejection::Traversal,
            }
        );
    }
}
