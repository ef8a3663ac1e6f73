//! Hamming distance over hex-encoded perceptual hash digests.

#[cfg(test)]
#[path = "hamming_test.rs"]
mod hamming_test;

/// Reason two digests could not be compared.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HashError {
    /// Digests of different widths come from different algorithms.
    #[error("digest lengths differ: {left} vs {right}")]
    LengthMismatch { left: usize, right: usize },
    /// A character outside `[0-9a-fA-F]`.
    #[error("invalid hex digit {digit:?} at position {position}")]
    InvalidDigit { digit: char, position: usize },
}

impl HashError {
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::LengthMismatch { .. } => "E_LENGTH_MISMATCH",
            Self::InvalidDigit { .. } => "E_INVALID_DIGIT",
        }
    }
}

/// Count differing bits between two hex digests.
///
/// Returns `None` when the digests are incomparable (different lengths or a
/// non-hex character). See [`try_distance`] for the reason.
#[must_use]
pub fn distance(a: &str, b: &str) -> Option<u32> {
    try_distance(a, b).ok()
}

/// Count differing bits between two hex digests, reporting why a pair is
/// incomparable.
///
/// # Errors
///
/// Returns [`HashError::LengthMismatch`] when the digests differ in length and
/// [`HashError::InvalidDigit`] for the first non-hex character found.
pub fn try_distance(a: &str, b: &str) -> Result<u32, HashError> {
    if a.len() != b.len() {
        return Err(HashError::LengthMismatch { left: a.len(), right: b.len() });
    }

    let mut bits = 0;
    for (position, (ca, cb)) in a.chars().zip(b.chars()).enumerate() {
        let na = nibble(ca, position)?;
        let nb = nibble(cb, position)?;
        bits += (na ^ nb).count_ones();
    }
    Ok(bits)
}

fn nibble(digit: char, position: usize) -> Result<u32, HashError> {
    digit.to_digit(16).ok_or(HashError::InvalidDigit { digit, position })
}
