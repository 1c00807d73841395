//! Parameter error types

use core::fmt;

/// Errors from [`ParameterStore`](super::ParameterStore) and parameter block
/// validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParameterError {
    /// Unknown name, name longer than 16 bytes, or a zero hold/spin/flash
    /// period rejected by [`MonitorParams::validate`](super::MonitorParams::validate)
    InvalidConfig,
    /// All slots are registered
    StoreFull,
    /// Write to a parameter registered with `READ_ONLY`
    ReadOnly,
    /// Value variant differs from the one registered
    TypeMismatch,
}

impl fmt::Display for ParameterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            ParameterError::InvalidConfig => "invalid parameter or value",
            ParameterError::StoreFull => "parameter store full",
            ParameterError::ReadOnly => "parameter is read-only",
            ParameterError::TypeMismatch => "parameter type mismatch",
        };
        f.write_str(msg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::fmt::Write;
    use heapless::String;

    #[test]
    fn test_display() {
        let mut s: String<32> = String::new();
        write!(s, "{}", ParameterError::InvalidConfig).unwrap();
        assert_eq!(s.as_str(), "invalid parameter or value");

        s.clear();
        write!(s, "{}", ParameterError::TypeMismatch).unwrap();
        assert_eq!(s.as_str(), "parameter type mismatch");
    }
}
