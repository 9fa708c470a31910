//! Error types.

use core::fmt;

/// Errors which can occur while recovering public keys.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// Curve parameters are missing or inconsistent with the curve arithmetic,
    /// e.g. the generator does not satisfy the curve equation.
    InvalidCurveConfig,

    /// `r` or `s` is outside `[1, n - 1]`, or no x-coordinate derived from `r`
    /// is a valid field element.
    InvalidSignature,

    /// `r` has no inverse modulo the group order.
    NonInvertibleScalar,

    /// Every candidate public key was discarded.
    RecoveryFailed,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Error::InvalidCurveConfig => "invalid curve configuration",
            Error::InvalidSignature => "invalid signature",
            Error::NonInvertibleScalar => "scalar is not invertible modulo the group order",
            Error::RecoveryFailed => "public key recovery failed",
        })
    }
}

impl core::error::Error for Error {}

/// Result type.
pub type Result<T> = core::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::Error;
    use alloc::string::ToString;

    #[test]
    fn display() {
        assert_eq!(Error::InvalidSignature.to_string(), "invalid signature");
        assert_eq!(
            Error::RecoveryFailed.to_string(),
            "public key recovery failed"
        );
    }
}
