//! Path guard: traversal detection, normalization and base containment.
//!
//! All checks here work on raw bytes. They never touch the filesystem,
//! never resolve symlinks and never decode percent-encoding. Callers are
//! expected to run them in this order:
//!
//! 1. [`is_path_traversal`] - reject on `true`
//! 2. [`is_within_base`] against the sandbox root
//! 3. [`normalize_path`] before displaying or logging the path
//!
//! Normalization deliberately leaves `..` segments alone; resolving them is
//! not its job, rejecting them is.

/// Returns `true` if the path contains the byte pair `..` or a NUL byte.
///
/// Detection is substring based rather than segment aware, so `a..b` is
/// rejected as well as `../etc`. Backslash-delimited traversal (`..\\`) is
/// caught only because it contains the same two bytes. Encoded forms such as
/// `%2e%2e` are not detected.
///
/// # Examples
///
/// ```
/// use sandbox_guard::security::path_guard::is_path_traversal;
///
/// assert!(is_path_traversal("../etc/passwd"));
/// assert!(is_path_traversal("file\0name"));
/// assert!(!is_path_traversal("/workspace/src/main.rs"));
/// ```
pub fn is_path_traversal(path: impl AsRef<[u8]>) -> bool {
    let path = path.as_ref();
    path.contains(&0) || path.windows(2).any(|pair| pair == b"..")
}

/// Normalizes a path into a caller-supplied buffer and returns the written
/// prefix of that buffer.
///
/// In a single left-to-right pass:
/// - `//` collapses to `/`
/// - `/./` and a trailing `/.` collapse to nothing
/// - every other byte is copied verbatim
///
/// One trailing `/` is then stripped unless the result is exactly `/`.
///
/// The buffer is never grown. If it is shorter than the input, copying stops
/// when it is full and the truncated result is returned; size it to at least
/// `path.len()` to get a complete result.
///
/// # Examples
///
/// ```
/// use sandbox_guard::security::path_guard::normalize_path;
///
/// let input = "/home//user/./file/";
/// let mut buf = vec![0u8; input.len()];
/// assert_eq!(normalize_path(input, &mut buf), b"/home/user/file");
/// ```
pub fn normalize_path<'a>(path: impl AsRef<[u8]>, buffer: &'a mut [u8]) -> &'a [u8] {
    let path = path.as_ref();
    let len = path.len();
    let mut read = 0;
    let mut written = 0;

    while read < len && written < buffer.len() {
        let byte = path[read];

        if byte == b'/' && read + 1 < len {
            let next = path[read + 1];

            // "//" -> "/"
            if next == b'/' {
                read += 1;
                continue;
            }

            // "/./" or trailing "/." -> ""
            if next == b'.' && (read + 2 == len || path[read + 2] == b'/') {
                read += 2;
                continue;
            }
        }

        buffer[written] = byte;
        written += 1;
        read += 1;
    }

    if written > 1 && buffer[written - 1] == b'/' {
        written -= 1;
    }

    &buffer[..written]
}

/// Owned variant of [`normalize_path`] for display and logging.
///
/// The scratch buffer is sized to the input, so the result is never
/// truncated. Only ASCII bytes are ever dropped, which keeps the output
/// valid UTF-8.
pub fn normalize_path_string(path: &str) -> String {
    let mut buffer = vec![0u8; path.len()];
    let normalized = normalize_path(path, &mut buffer);
    String::from_utf8_lossy(normalized).into_owned()
}

/// Returns `true` if `path` lies inside `base`.
///
/// The path must not be a traversal path, must start with `base` byte for
/// byte, and must either equal `base` or continue with `/` right after it.
/// That last rule keeps `/workspace2` out of `/workspace`.
///
/// Matching is literal: pass `base` without a trailing separator. A base of
/// `/workspace/` or `/` will not match its children.
///
/// # Examples
///
/// ```
/// use sandbox_guard::security::path_guard::is_within_base;
///
/// assert!(is_within_base("/workspace/src/lib.rs", "/workspace"));
/// assert!(!is_within_base("/workspace2/file", "/workspace"));
/// assert!(!is_within_base("/workspace/../etc", "/workspace"));
/// ```
pub fn is_within_base(path: impl AsRef<[u8]>, base: impl AsRef<[u8]>) -> bool {
    let path = path.as_ref();
    let base = base.as_ref();

    if is_path_traversal(path) {
        return false;
    }

    if path.len() < base.len() || !path.starts_with(base) {
        return false;
    }

    path.len() == base.len() || path[base.len()] == b'/'
}
