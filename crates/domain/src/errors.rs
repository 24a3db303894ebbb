//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// An integer option code has no matching variant
    #[error("Unknown {option} code: {code}")]
    UnknownOptionCode {
        /// Name of the option family (e.g. "car type")
        option: &'static str,
        /// The rejected code
        code: u8,
    },

    /// A textual option token has no matching variant
    #[error("Unknown {option} token: {token}")]
    UnknownOptionToken {
        /// Name of the option family (e.g. "priority")
        option: &'static str,
        /// The rejected token
        token: String,
    },
}

impl DomainError {
    /// Create an unknown option code error
    pub const fn unknown_code(option: &'static str, code: u8) -> Self {
        Self::UnknownOptionCode { option, code }
    }

    /// Create an unknown option token error
    pub fn unknown_token(option: &'static str, token: impl Into<String>) -> Self {
        Self::UnknownOptionToken {
            option,
            token: token.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_code_message() {
        let err = DomainError::unknown_code("car type", 9);
        assert_eq!(err.to_string(), "Unknown car type code: 9");
    }

    #[test]
    fn test_unknown_token_message() {
        let err = DomainError::unknown_token("priority", "FASTEST");
        assert_eq!(err.to_string(), "Unknown priority token: FASTEST");
    }

    #[test]
    fn test_unknown_token_keeps_fields() {
        match DomainError::unknown_token("car fuel", "HYDROGEN") {
            DomainError::UnknownOptionToken { option, token } => {
                assert_eq!(option, "car fuel");
                assert_eq!(token, "HYDROGEN");
            },
            DomainError::UnknownOptionCode { .. } => unreachable!("Expected token error"),
        }
    }
}
