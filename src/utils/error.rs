use thiserror::Error;

#[derive(Error, Debug)]
pub enum WorkshopError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Malformed input: {message}")]
    InputError { message: String },

    #[error("Dimension mismatch: {message}")]
    DimensionError { message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },
}

pub type Result<T> = std::result::Result<T, WorkshopError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Input,
    Dimension,
    Config,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl WorkshopError {
    pub fn input(message: impl Into<String>) -> Self {
        WorkshopError::InputError {
            message: message.into(),
        }
    }

    pub fn dimension(message: impl Into<String>) -> Self {
        WorkshopError::DimensionError {
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            WorkshopError::IoError(_) => ErrorCategory::Io,
            WorkshopError::CsvError(_) | WorkshopError::InputError { .. } => ErrorCategory::Input,
            WorkshopError::DimensionError { .. } => ErrorCategory::Dimension,
            WorkshopError::ConfigError { .. } => ErrorCategory::Config,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            WorkshopError::ConfigError { .. } => ErrorSeverity::Critical,
            WorkshopError::IoError(_) => ErrorSeverity::Medium,
            WorkshopError::CsvError(_)
            | WorkshopError::InputError { .. }
            | WorkshopError::DimensionError { .. } => ErrorSeverity::High,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            WorkshopError::IoError(_) => "Check that standard input is readable",
            WorkshopError::CsvError(_) => {
                "Check that every record line has the five comma-separated fields"
            }
            WorkshopError::InputError { .. } => {
                "Check the input against the exercise's expected format"
            }
            WorkshopError::DimensionError { .. } => {
                "Check that the matrix dimension headers match the data"
            }
            WorkshopError::ConfigError { .. } => "Check the command-line arguments",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            WorkshopError::IoError(e) => format!("Could not read input: {}", e),
            WorkshopError::CsvError(e) => format!("A record line could not be parsed: {}", e),
            WorkshopError::InputError { message } => format!("The input is malformed: {}", message),
            WorkshopError::DimensionError { message } => {
                format!("The matrices cannot be combined: {}", message)
            }
            WorkshopError::ConfigError { message } => format!("Bad configuration: {}", message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_error_severity_and_category() {
        let err = WorkshopError::input("count exceeds available lines");
        assert_eq!(err.category(), ErrorCategory::Input);
        assert_eq!(err.severity(), ErrorSeverity::High);
    }

    #[test]
    fn test_config_error_is_critical() {
        let err = WorkshopError::ConfigError {
            message: "unknown task".to_string(),
        };
        assert_eq!(err.severity(), ErrorSeverity::Critical);
    }

    #[test]
    fn test_dimension_error_display() {
        let err = WorkshopError::dimension("2x3 * 2x2");
        assert_eq!(err.to_string(), "Dimension mismatch: 2x3 * 2x2");
    }
}
