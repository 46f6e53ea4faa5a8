//! Security primitives for sandboxed command execution and secret handling.
//!
//! This module provides:
//! - Path traversal detection, normalization and workspace containment
//! - Command binary extraction and allowlist checks
//! - Constant-time comparison, strength policy and masking for credentials
//! - API key provider detection and format checks
//! - Shannon entropy estimation
//! - Credential age and expiry arithmetic
//! - Credential scrubbing for log lines
//! - A security policy record with audit logging

pub mod api_keys;
pub mod command_guard;
pub mod config;
pub mod credential_guard;
pub mod credential_scrubber;
pub mod entropy;
pub mod expiry;
pub mod path_guard;

pub use api_keys::{detect_api_key_provider, validate_api_key_format, ApiKeyProvider};
pub use command_guard::{extract_binary_name, is_safe_binary};
pub use config::{log_security_event, PathRejection, SecurityConfig, SecurityEvent};
#[cfg(unix)]
pub use credential_guard::is_secure_metadata;
pub use credential_guard::{
    constant_time_eq, is_common_password, is_secure_file_mode, mask_credential,
    validate_credential_strength, CredentialError, CredentialRequirements, MaskError,
};
pub use credential_scrubber::{contains_api_key, safe_error_message, scrub_credentials};
pub use entropy::{estimate_entropy, has_minimum_entropy};
pub use expiry::{days_until_expiry, is_expired, CredentialLifetime};
pub use path_guard::{is_path_traversal, is_within_base, normalize_path, normalize_path_string};
