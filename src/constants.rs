//! Global constants for sandbox_guard.
//!
//! This module centralizes the fixed tables and policy numbers used by the
//! guards. The tables are compile-time constants; adding an entry to either
//! of them is a security decision and belongs in code review, not in
//! configuration.

// Time constants
/// Seconds in one day, used for credential age arithmetic
pub const SECONDS_PER_DAY: i64 = 86_400;

// Credential policy defaults
/// Default minimum credential length in bytes
pub const DEFAULT_MIN_CREDENTIAL_LENGTH: usize = 16;

/// Default maximum credential length in bytes
pub const DEFAULT_MAX_CREDENTIAL_LENGTH: usize = 256;

/// Minimum credential length for the strict policy
pub const STRICT_MIN_CREDENTIAL_LENGTH: usize = 24;

/// Default maximum credential age (90 days)
pub const DEFAULT_MAX_CREDENTIAL_AGE_DAYS: u32 = 90;

/// Default entropy floor in bits per byte
pub const DEFAULT_MIN_ENTROPY_BITS: f64 = 3.0;

/// Upper bound of per-byte Shannon entropy (log2 of 256)
pub const MAX_ENTROPY_BITS: f64 = 8.0;

// API key format
/// Shortest string accepted as an API key
pub const MIN_API_KEY_LENGTH: usize = 10;

// Masking
/// Placeholder emitted for short credentials and in the middle of long ones
pub const MASK: &str = "****";

/// Credentials up to this length are fully masked
pub const MASK_FULL_MAX_LEN: usize = 4;

/// Credentials up to this length disclose one byte at each end
pub const MASK_SHORT_MAX_LEN: usize = 8;

// Sandbox defaults
/// Default root directory for sandboxed file access
pub const DEFAULT_WORKSPACE_ROOT: &str = "/workspace";

/// Binaries a sandbox may spawn without further review.
///
/// Matching is exact and case-sensitive against the base name of the first
/// token of a command line.
pub const SAFE_BINARIES: &[&str] = &[
    // File and text inspection
    "ls", "cat", "head", "tail", "less", "grep", "egrep", "rg", "find", "fd",
    "wc", "sort", "uniq", "cut", "tr", "sed", "awk", "diff", "echo", "printf",
    "pwd", "which", "whoami", "date", "uname", "file", "stat", "tree", "du",
    "df", "basename", "dirname", "realpath", "jq", "touch", "mkdir",
    // Version control
    "git", "gh",
    // Language toolchains
    "python", "python3", "node", "deno", "ruby", "go", "cargo", "rustc",
    "rustup", "make", "cmake",
    // Package managers
    "npm", "npx", "yarn", "pnpm", "pip", "pip3",
    // Network fetchers and archives
    "curl", "wget", "tar",
];

/// Well-known weak passwords, compared case-insensitively.
pub const COMMON_PASSWORDS: &[&str] = &[
    "password", "123456", "12345678", "123456789", "qwerty", "abc123",
    "password1", "111111", "1234567", "letmein", "welcome", "monkey",
    "dragon", "master", "admin", "login", "iloveyou", "sunshine",
    "princess", "football", "baseball", "shadow", "passw0rd", "trustno1",
];
