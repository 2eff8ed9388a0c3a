use thiserror::Error;

#[derive(Error, Debug)]
pub enum AdoptionError {
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    #[error("Invalid value '{value}' for field '{field}': {reason}")]
    InvalidFieldValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Pet not found: {name}")]
    PetNotFound { name: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Output encoding error: {0}")]
    EncodingError(#[from] std::string::FromUtf8Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Lookup,
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

impl AdoptionError {
    pub fn missing_field(field: &str) -> Self {
        Self::MissingField {
            field: field.to_string(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::MissingField { .. } | Self::InvalidFieldValue { .. } => ErrorCategory::Input,
            Self::PetNotFound { .. } => ErrorCategory::Lookup,
            Self::ConfigError { .. } => ErrorCategory::Configuration,
            Self::IoError(_)
            | Self::SerializationError(_)
            | Self::CsvError(_)
            | Self::EncodingError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Lookup => ErrorSeverity::Medium,
            ErrorCategory::Input | ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            Self::MissingField { field } => format!("Provide a value for '{}'", field),
            Self::InvalidFieldValue { field, .. } => {
                format!("Check the value given for '{}'", field)
            }
            Self::PetNotFound { .. } => "Run `list` to see the names on the roster".to_string(),
            Self::ConfigError { .. } => {
                "Make sure the roster file is valid TOML with a [[pets]] table per pet".to_string()
            }
            Self::IoError(_) => "Check that the roster file exists and is readable".to_string(),
            Self::SerializationError(_) | Self::CsvError(_) | Self::EncodingError(_) => {
                "Try a different output format".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::MissingField { field } => format!("The pet record has no '{}'", field),
            Self::PetNotFound { name } => format!("No pet named '{}' on the roster", name),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, AdoptionError>;
