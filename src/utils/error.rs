use thiserror::Error;

#[derive(Error, Debug)]
pub enum PickerError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Search request to {url} returned status {status}")]
    SearchStatus { status: u16, url: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Data,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl PickerError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            PickerError::ApiError(_) | PickerError::SearchStatus { .. } => ErrorCategory::Network,
            PickerError::SerializationError(_) => ErrorCategory::Data,
            PickerError::IoError(_) => ErrorCategory::System,
            PickerError::ConfigError { .. }
            | PickerError::ConfigValidationError { .. }
            | PickerError::InvalidConfigValueError { .. }
            | PickerError::MissingConfigError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Network => ErrorSeverity::Medium,
            ErrorCategory::Data => ErrorSeverity::High,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// 給終端使用者看的簡短訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            PickerError::ApiError(e) if e.is_timeout() => {
                "The movie search service did not answer in time".to_string()
            }
            PickerError::ApiError(_) => "Could not reach the movie search service".to_string(),
            PickerError::SearchStatus { status, .. } => {
                format!("The movie search service answered with HTTP {}", status)
            }
            PickerError::SerializationError(_) => {
                "The movie search service returned an unexpected payload".to_string()
            }
            PickerError::IoError(e) => format!("File system error: {}", e),
            PickerError::ConfigError { message } => format!("Configuration problem: {}", message),
            PickerError::ConfigValidationError { field, message } => {
                format!("Configuration field '{}' is invalid: {}", field, message)
            }
            PickerError::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration field '{}' is invalid: {}", field, reason)
            }
            PickerError::MissingConfigError { field } => {
                format!("Configuration field '{}' is required", field)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Network => "Check that the search API is running and --api-base points at it",
            ErrorCategory::Data => "Check that --api-base points at a movie search API",
            ErrorCategory::Configuration => "Fix the configuration value and run again",
            ErrorCategory::System => "Check file permissions and available disk space",
        }
    }
}

pub type Result<T> = std::result::Result<T, PickerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_is_network_medium() {
        let err = PickerError::SearchStatus {
            status: 503,
            url: "http://127.0.0.1:5000/api/v1/movie/search".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Network);
        assert_eq!(err.severity(), ErrorSeverity::Medium);
        assert!(err.user_friendly_message().contains("503"));
    }

    #[test]
    fn test_config_errors_are_high_severity() {
        let err = PickerError::MissingConfigError {
            field: "api.base_url".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert_eq!(err.severity(), ErrorSeverity::High);
        assert_eq!(
            err.user_friendly_message(),
            "Configuration field 'api.base_url' is required"
        );
    }
}
