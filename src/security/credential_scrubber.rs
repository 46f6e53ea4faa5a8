//! Credential scrubbing for log lines and error messages.
//!
//! Secrets found in free text are replaced by their masked form (see
//! [`mask_credential`]) so operators can still tell keys apart without the
//! log ever holding one in cleartext.

use lazy_static::lazy_static;
use regex::{Captures, Regex};

use crate::constants::MASK;
use crate::security::credential_guard::mask_credential;

const API_KEY_ALTERNATIVES: &str = r"sk-ant-[A-Za-z0-9_\-]{8,}|sk-[A-Za-z0-9_\-]{16,}|AIza[0-9A-Za-z_\-]{20,}|ghp_[A-Za-z0-9]{20,}|xoxb-[A-Za-z0-9\-]{10,}|xapp-[A-Za-z0-9\-]{10,}|BSA[A-Za-z0-9_\-]{16,}";

lazy_static! {
    /// API keys recognisable by provider prefix.
    static ref API_KEY_PATTERN: Regex =
        Regex::new(&format!(r"\b(?:{})", API_KEY_ALTERNATIVES)).unwrap();

    /// Secret assignments (`name=value`, `name: value`) and bare API keys,
    /// matched in a single left-to-right pass.
    static ref SECRET_PATTERN: Regex = Regex::new(&format!(
        r"\b(?:(?P<name>(?i:password|passwd|pwd|secret|token|api[_-]?key))(?P<sep>\s*[:=]\s*)(?P<value>[^\s,;]+)|(?P<key>{}))",
        API_KEY_ALTERNATIVES
    ))
    .unwrap();
}

fn masked_or_placeholder(secret: &str) -> String {
    mask_credential(secret).unwrap_or_else(|_| MASK.to_string())
}

/// Replaces API keys and secret assignments in `input` with masked values.
///
/// Every match is masked exactly once, whatever the secret contains.
///
/// # Example
///
/// ```
/// use sandbox_guard::security::credential_scrubber::scrub_credentials;
///
/// let scrubbed = scrub_credentials("retrying with password=hunter2hunter2");
/// assert_eq!(scrubbed, "retrying with password=hu****r2");
/// ```
pub fn scrub_credentials(input: &str) -> String {
    SECRET_PATTERN
        .replace_all(input, |caps: &Captures| match caps.name("value") {
            Some(value) => format!(
                "{}{}{}",
                &caps["name"],
                &caps["sep"],
                masked_or_placeholder(value.as_str())
            ),
            None => masked_or_placeholder(&caps["key"]),
        })
        .into_owned()
}

/// Returns `true` if `input` contains something that looks like an API key.
pub fn contains_api_key(input: &str) -> bool {
    API_KEY_PATTERN.is_match(input)
}

/// Formats `context: error` with credentials scrubbed.
pub fn safe_error_message(context: &str, error: &impl std::fmt::Display) -> String {
    let raw_message = format!("{}: {}", context, error);
    scrub_credentials(&raw_message)
}
