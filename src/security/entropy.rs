//! Shannon entropy estimation over byte frequencies.
//!
//! The estimate is per symbol (bits per byte, `0.0..=8.0`). Multiply by the
//! input length yourself if you need total information content.

/// Estimates the Shannon entropy of the input in bits per byte.
///
/// Empty input yields `0.0`. A single repeated byte also yields `0.0`.
///
/// # Examples
///
/// ```
/// use sandbox_guard::security::entropy::estimate_entropy;
///
/// assert_eq!(estimate_entropy(""), 0.0);
/// assert_eq!(estimate_entropy("aaaa"), 0.0);
/// assert_eq!(estimate_entropy("abab"), 1.0);
/// ```
pub fn estimate_entropy(input: impl AsRef<[u8]>) -> f64 {
    let input = input.as_ref();
    if input.is_empty() {
        return 0.0;
    }

    let mut counts = [0usize; 256];
    for &byte in input {
        counts[byte as usize] += 1;
    }

    let len = input.len() as f64;
    counts
        .iter()
        .filter(|&&count| count > 0)
        .map(|&count| {
            let p = count as f64 / len;
            -p * p.log2()
        })
        .sum()
}

/// Returns `true` if the estimated entropy is at least `min_bits`.
pub fn has_minimum_entropy(input: impl AsRef<[u8]>, min_bits: f64) -> bool {
    estimate_entropy(input) >= min_bits
}
