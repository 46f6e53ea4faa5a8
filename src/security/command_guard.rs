//! Command guard: binary-name extraction and allowlist checks.
//!
//! Only the leading token of a command line is inspected. There is no shell
//! grammar here: quoting, pipes, `&&` and subshells are the launcher's
//! problem.

use crate::constants::SAFE_BINARIES;

fn is_blank(c: char) -> bool {
    c == ' ' || c == '\t'
}

/// Extracts the binary name from a command line.
///
/// Leading spaces and tabs are skipped, the first token runs up to the next
/// space or tab, and if it contains `/` only the part after the last `/` is
/// returned. Empty or whitespace-only input yields an empty slice.
///
/// # Examples
///
/// ```
/// use sandbox_guard::security::command_guard::extract_binary_name;
///
/// assert_eq!(extract_binary_name("  echo hello"), "echo");
/// assert_eq!(extract_binary_name("/usr/bin/git status"), "git");
/// assert_eq!(extract_binary_name(" \t "), "");
/// ```
pub fn extract_binary_name(command: &str) -> &str {
    let trimmed = command.trim_start_matches(is_blank);
    let end = trimmed.find(is_blank).unwrap_or(trimmed.len());
    let token = &trimmed[..end];

    match token.rfind('/') {
        Some(pos) => &token[pos + 1..],
        None => token,
    }
}

/// Returns `true` if the command's binary is on the fixed allowlist.
///
/// Membership is exact and case-sensitive. An empty binary name is never
/// safe.
pub fn is_safe_binary(command: &str) -> bool {
    let name = extract_binary_name(command);
    !name.is_empty() && SAFE_BINARIES.contains(&name)
}
