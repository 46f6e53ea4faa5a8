//! API key provider detection and format checks.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::MIN_API_KEY_LENGTH;

/// Provider inferred from an API key's literal prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApiKeyProvider {
    Anthropic,
    OpenAi,
    Google,
    Github,
    SlackBot,
    SlackApp,
    Brave,
    Unknown,
}

impl ApiKeyProvider {
    pub fn as_str(&self) -> &'static str {
        match self {
            ApiKeyProvider::Anthropic => "anthropic",
            ApiKeyProvider::OpenAi => "openai",
            ApiKeyProvider::Google => "google",
            ApiKeyProvider::Github => "github",
            ApiKeyProvider::SlackBot => "slack_bot",
            ApiKeyProvider::SlackApp => "slack_app",
            ApiKeyProvider::Brave => "brave",
            ApiKeyProvider::Unknown => "unknown",
        }
    }
}

impl fmt::Display for ApiKeyProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// Order matters: "sk-ant-" must be tested before its prefix "sk-".
const PROVIDER_PREFIXES: &[(&str, ApiKeyProvider)] = &[
    ("sk-ant-", ApiKeyProvider::Anthropic),
    ("sk-", ApiKeyProvider::OpenAi),
    ("AIza", ApiKeyProvider::Google),
    ("ghp_", ApiKeyProvider::Github),
    ("xoxb-", ApiKeyProvider::SlackBot),
    ("xapp-", ApiKeyProvider::SlackApp),
    ("BSA", ApiKeyProvider::Brave),
];

/// Classifies a key by its prefix, first match wins.
///
/// # Examples
///
/// ```
/// use sandbox_guard::security::api_keys::{detect_api_key_provider, ApiKeyProvider};
///
/// assert_eq!(detect_api_key_provider("sk-ant-api03-xyz"), ApiKeyProvider::Anthropic);
/// assert_eq!(detect_api_key_provider("sk-proj-xyz"), ApiKeyProvider::OpenAi);
/// assert_eq!(detect_api_key_provider("hunter2"), ApiKeyProvider::Unknown);
/// ```
pub fn detect_api_key_provider(key: &str) -> ApiKeyProvider {
    PROVIDER_PREFIXES
        .iter()
        .find(|(prefix, _)| key.starts_with(prefix))
        .map(|&(_, provider)| provider)
        .unwrap_or(ApiKeyProvider::Unknown)
}

/// Returns `true` if the key is at least 10 bytes of printable, non-blank
/// ASCII.
///
/// Space is printable but still rejected, as are tab, CR and LF.
pub fn validate_api_key_format(key: &str) -> bool {
    if key.len() < MIN_API_KEY_LENGTH {
        return false;
    }

    key.bytes().all(|byte| {
        (0x20..=0x7e).contains(&byte) && !matches!(byte, b' ' | b'\t' | b'\r' | b'\n')
    })
}
