//! # sandbox_guard
//!
//! Defensive validation primitives for systems that run shell commands and
//! handle secrets on behalf of untrusted or semi-trusted callers.
//!
//! ## Overview
//!
//! The crate answers two questions:
//!
//! - Is this filesystem path or shell command safe to act on?
//! - Is this credential strong enough, well formed, safe to display and
//!   still within its lifetime?
//!
//! Every check is a pure function over caller-supplied bytes, timestamps and
//! mode bits. Nothing here opens files, spawns processes or reads the clock,
//! so all functions can be called concurrently without locking.
//!
//! ## Usage
//!
//! ### Sandboxed file access
//!
//! ```
//! use sandbox_guard::security::path_guard::{is_path_traversal, is_within_base, normalize_path};
//!
//! let requested = "/workspace//src/./main.rs";
//! assert!(!is_path_traversal(requested));
//! assert!(is_within_base(requested, "/workspace"));
//!
//! let mut buf = vec![0u8; requested.len()];
//! assert_eq!(normalize_path(requested, &mut buf), b"/workspace/src/main.rs");
//! ```
//!
//! ### Subprocess spawning
//!
//! ```
//! use sandbox_guard::security::command_guard::is_safe_binary;
//!
//! assert!(is_safe_binary("/usr/bin/git status"));
//! assert!(!is_safe_binary("rm -rf /"));
//! ```
//!
//! ### Credentials
//!
//! ```
//! use sandbox_guard::security::credential_guard::{
//!     constant_time_eq, mask_credential, validate_credential_strength, CredentialRequirements,
//! };
//!
//! # fn main() -> anyhow::Result<()> {
//! let secret = "Tr0ub4dor-and-3-more";
//! validate_credential_strength(secret, &CredentialRequirements::default())?;
//! assert!(constant_time_eq(secret, "Tr0ub4dor-and-3-more"));
//! assert_eq!(mask_credential(secret)?, "Tr****re");
//! # Ok(())
//! # }
//! ```
//!
//! ## Module Organization
//!
//! - [`security`]: path, command and credential guards, scrubbing and policy
//! - [`constants`]: allowlist, common-password list and policy defaults

/// Application constants and fixed lookup tables
pub mod constants;

/// Security primitives for paths, commands and credentials
pub mod security;

/// Test utilities and helpers
#[cfg(test)]
pub mod test_utils;
