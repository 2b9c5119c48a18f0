use std::fmt;

/// Errors surfaced to the caller of the calculation pipeline.
///
/// `Configuration` covers malformed or logically inconsistent working-time
/// settings; `Validation` covers malformed or out-of-policy user input. The
/// message text is shown to the end user verbatim, so it is fixed at
/// construction and never rewritten downstream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DueDateError {
    Configuration { message: String },
    Validation { message: String },
}

impl DueDateError {
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Self::Configuration { message } | Self::Validation { message } => message,
        }
    }

    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration { .. })
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }
}

impl fmt::Display for DueDateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for DueDateError {}

pub type Result<T> = std::result::Result<T, DueDateError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configuration_error_display() {
        let err = DueDateError::configuration("Working hours must follow HH:MM format");
        assert_eq!(err.to_string(), "Working hours must follow HH:MM format");
        assert!(err.is_configuration());
        assert!(!err.is_validation());
    }

    #[test]
    fn test_validation_error_display() {
        let err = DueDateError::validation("Turnaround time must be positive");
        assert_eq!(err.to_string(), "Turnaround time must be positive");
        assert!(err.is_validation());
        assert!(!err.is_configuration());
    }

    #[test]
    fn test_errors_compare_by_kind_and_message() {
        assert_eq!(
            DueDateError::validation("same"),
            DueDateError::validation("same")
        );
        assert_ne!(
            DueDateError::validation("same"),
            DueDateError::configuration("same")
        );
    }
}
