use thiserror::Error;

/// Failure modes shared across the primitive layer.
///
/// Every error is raised synchronously at the point of violation; no partial
/// results travel alongside one.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CryptoError {
    /// AES-128 requires exactly a 16-byte key.
    #[error("AES-128 key must be 16 bytes, got {0}")]
    KeyLength(usize),

    /// Ciphertext handed to decrypt was not a whole number of 16-byte blocks.
    #[error("ciphertext length {0} is not a multiple of the 16-byte block size")]
    BlockAlignment(usize),

    /// PKCS#7 padding failed validation on decrypt.
    #[error("invalid PKCS#7 padding")]
    Padding,

    /// A domain parameter failed validation (not prime, no primitive root,
    /// generator of wrong order, inverse does not exist).
    #[error("domain error: {0}")]
    Domain(String),

    /// A value fell outside its required interval.
    #[error("range error: {0}")]
    Range(String),

    /// Two independently computed shared secrets disagreed. The math
    /// guarantees equality, so this only ever surfaces an implementation bug.
    #[error("shared secrets disagree")]
    Consistency,
}

impl CryptoError {
    pub fn domain(message: impl Into<String>) -> Self {
        CryptoError::Domain(message.into())
    }

    pub fn range(message: impl Into<String>) -> Self {
        CryptoError::Range(message.into())
    }
}

pub type CryptoResult<T> = Result<T, CryptoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_length_display() {
        let err = CryptoError::KeyLength(12);
        assert_eq!(format!("{}", err), "AES-128 key must be 16 bytes, got 12");
    }

    #[test]
    fn domain_display() {
        let err = CryptoError::domain("P must be prime");
        assert_eq!(format!("{}", err), "domain error: P must be prime");
    }

    #[test]
    fn padding_display() {
        assert_eq!(format!("{}", CryptoError::Padding), "invalid PKCS#7 padding");
    }
}
