//! Credential guard: comparison, strength policy, masking and file modes.
//!
//! Nothing in this module logs, stores or copies a credential beyond what the
//! caller asks for. Comparisons against stored secrets must go through
//! [`constant_time_eq`].

use std::collections::TryReserveError;

use serde::{Deserialize, Serialize};
use subtle::ConstantTimeEq;
use thiserror::Error;

use crate::constants::{
    COMMON_PASSWORDS, DEFAULT_MAX_CREDENTIAL_LENGTH, DEFAULT_MIN_CREDENTIAL_LENGTH, MASK,
    MASK_FULL_MAX_LEN, MASK_SHORT_MAX_LEN, STRICT_MIN_CREDENTIAL_LENGTH,
};

/// Reason a credential failed [`validate_credential_strength`].
///
/// Only the first violated rule is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error, Serialize, Deserialize)]
pub enum CredentialError {
    #[error("credential is shorter than the minimum length")]
    CredentialTooShort,
    #[error("credential is longer than the maximum length")]
    CredentialTooLong,
    #[error("credential has no uppercase letter")]
    NoUppercase,
    #[error("credential has no lowercase letter")]
    NoLowercase,
    #[error("credential has no digit")]
    NoDigit,
    /// A special (non-alphanumeric) character was required but absent.
    #[error("credential has no special character")]
    WeakCredential,
    #[error("credential is a commonly used password")]
    CommonPassword,
}

/// Failure while producing a masked credential.
#[derive(Debug, Error)]
pub enum MaskError {
    #[error("failed to allocate masked credential: {0}")]
    Allocation(#[from] TryReserveError),
}

/// Strength policy for [`validate_credential_strength`].
///
/// `min_length <= max_length` is the caller's responsibility; the validator
/// does not cross-check it. Lengths are in bytes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CredentialRequirements {
    pub min_length: usize,
    pub max_length: usize,
    pub require_uppercase: bool,
    pub require_lowercase: bool,
    pub require_digit: bool,
    pub require_special: bool,
    pub reject_common_passwords: bool,
}

impl Default for CredentialRequirements {
    fn default() -> Self {
        Self {
            min_length: DEFAULT_MIN_CREDENTIAL_LENGTH,
            max_length: DEFAULT_MAX_CREDENTIAL_LENGTH,
            require_uppercase: true,
            require_lowercase: true,
            require_digit: true,
            require_special: false,
            reject_common_passwords: true,
        }
    }
}

impl CredentialRequirements {
    /// Default policy with a longer minimum and a mandatory special character.
    pub fn strict() -> Self {
        Self {
            min_length: STRICT_MIN_CREDENTIAL_LENGTH,
            require_special: true,
            ..Self::default()
        }
    }
}

/// Compares two byte strings without leaking where they differ.
///
/// Unequal lengths return `false` immediately. For equal lengths every byte
/// pair is examined, so the running time depends only on the length.
pub fn constant_time_eq(a: impl AsRef<[u8]>, b: impl AsRef<[u8]>) -> bool {
    let (a, b) = (a.as_ref(), b.as_ref());
    if a.len() != b.len() {
        return false;
    }
    a.ct_eq(b).into()
}

/// Returns `true` if the credential matches an entry of the common-password
/// list, ignoring ASCII case.
pub fn is_common_password(credential: &str) -> bool {
    COMMON_PASSWORDS
        .iter()
        .any(|common| common.len() == credential.len() && common.eq_ignore_ascii_case(credential))
}

/// Checks a credential against a policy.
///
/// Rules are evaluated in a fixed order and the first failure is returned:
/// too short, too long, missing uppercase, lowercase, digit, special, and
/// finally the common-password list (only when every category passed and
/// rejection is enabled).
pub fn validate_credential_strength(
    credential: &str,
    requirements: &CredentialRequirements,
) -> Result<(), CredentialError> {
    let bytes = credential.as_bytes();

    if bytes.len() < requirements.min_length {
        return Err(CredentialError::CredentialTooShort);
    }
    if bytes.len() > requirements.max_length {
        return Err(CredentialError::CredentialTooLong);
    }

    let mut has_upper = false;
    let mut has_lower = false;
    let mut has_digit = false;
    let mut has_special = false;

    for &byte in bytes {
        if byte.is_ascii_uppercase() {
            has_upper = true;
        } else if byte.is_ascii_lowercase() {
            has_lower = true;
        } else if byte.is_ascii_digit() {
            has_digit = true;
        } else {
            has_special = true;
        }
    }

    if requirements.require_uppercase && !has_upper {
        return Err(CredentialError::NoUppercase);
    }
    if requirements.require_lowercase && !has_lower {
        return Err(CredentialError::NoLowercase);
    }
    if requirements.require_digit && !has_digit {
        return Err(CredentialError::NoDigit);
    }
    if requirements.require_special && !has_special {
        return Err(CredentialError::WeakCredential);
    }

    if requirements.reject_common_passwords && is_common_password(credential) {
        return Err(CredentialError::CommonPassword);
    }

    Ok(())
}

// Non-ASCII edge bytes are hidden so the result stays valid UTF-8.
fn push_edge(masked: &mut String, byte: u8) {
    masked.push(if byte.is_ascii() { byte as char } else { '*' });
}

/// Produces a display-safe form of a credential.
///
/// | length (bytes) | output |
/// |---|---|
/// | `0..=4` | `****` |
/// | `5..=8` | first byte, `len - 2` asterisks, last byte |
/// | `9..` | first two bytes, `****`, last two bytes |
///
/// The result is always a fresh allocation. The only failure is running out
/// of memory while reserving it.
///
/// # Examples
///
/// ```
/// use sandbox_guard::security::credential_guard::mask_credential;
///
/// assert_eq!(mask_credential("abc").unwrap(), "****");
/// assert_eq!(mask_credential("abcdef").unwrap(), "a****f");
/// assert_eq!(mask_credential("sk-ant-abcdef123456").unwrap(), "sk****56");
/// ```
pub fn mask_credential(credential: &str) -> Result<String, MaskError> {
    let bytes = credential.as_bytes();
    let len = bytes.len();

    let masked_len = if len <= MASK_FULL_MAX_LEN {
        MASK.len()
    } else if len <= MASK_SHORT_MAX_LEN {
        len
    } else {
        MASK.len() + 4
    };

    let mut masked = String::new();
    masked.try_reserve_exact(masked_len)?;

    if len <= MASK_FULL_MAX_LEN {
        masked.push_str(MASK);
    } else if len <= MASK_SHORT_MAX_LEN {
        push_edge(&mut masked, bytes[0]);
        masked.extend(std::iter::repeat('*').take(len - 2));
        push_edge(&mut masked, bytes[len - 1]);
    } else {
        push_edge(&mut masked, bytes[0]);
        push_edge(&mut masked, bytes[1]);
        masked.push_str(MASK);
        push_edge(&mut masked, bytes[len - 2]);
        push_edge(&mut masked, bytes[len - 1]);
    }

    Ok(masked)
}

/// Returns `true` if neither group nor other has any permission bit set.
///
/// Owner bits are not inspected: `0o600`, `0o700` and `0o400` are all secure,
/// `0o640` and `0o604` are not.
pub fn is_secure_file_mode(mode: u32) -> bool {
    mode & 0o077 == 0
}

/// Applies [`is_secure_file_mode`] to metadata the caller already has.
#[cfg(unix)]
pub fn is_secure_metadata(metadata: &std::fs::Metadata) -> bool {
    use std::os::unix::fs::PermissionsExt;

    is_secure_file_mode(metadata.permissions().mode())
}
