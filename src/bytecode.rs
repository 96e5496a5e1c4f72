use std::fmt;
use thiserror::Error;

/// Contract bytecode accepted for analysis submission.
///
/// The payload is carried through to the service byte-for-byte; the only
/// invariant enforced here is that it is not empty.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Bytecode(String);

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BytecodeError {
    #[error("Bytecode cannot be empty")]
    Empty,
}

impl Bytecode {
    /// # Errors
    ///
    /// Will fail if `raw` is the empty string. No other normalization
    /// happens; the service validates the payload itself.
    pub fn new(raw: &str) -> Result<Self, BytecodeError> {
        if raw.is_empty() {
            Err(BytecodeError::Empty)
        } else {
            Ok(Self(raw.into()))
        }
    }
}

impl fmt::Display for Bytecode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Bytecode {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_bytecode() {
        let valid = "0x606060405260043610603f576000357c01";
        assert!(Bytecode::new(valid).is_ok());
    }

    #[test]
    fn test_bytecode_passed_through_unmodified() {
        // No hex validation and no trimming, by contract
        let raw = "  not-even-hex  ";
        let bytecode = Bytecode::new(raw).unwrap();
        let as_str: &str = bytecode.as_ref();
        assert_eq!(as_str, raw);
    }

    #[test]
    fn test_empty_bytecode() {
        assert_eq!(Bytecode::new(""), Err(BytecodeError::Empty));
    }

    #[test]
    fn test_bytecode_display() {
        let raw = "0x6060";
        let bytecode = Bytecode::new(raw).unwrap();
        assert_eq!(format!("{bytecode}"), raw);
    }

    #[test]
    fn test_bytecode_error_display() {
        assert_eq!(
            format!("{}", BytecodeError::Empty),
            "Bytecode cannot be empty"
        );
    }
}
