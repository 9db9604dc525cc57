use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("API request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API responded with status {status} for {url}")]
    Status {
        status: reqwest::StatusCode,
        url: String,
    },

    #[error("Serialization error: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Validation error on {field}: {message}")]
    Validation { field: String, message: String },

    #[error("Web project {id} not found")]
    NotFound { id: String },

    #[error("No web project is being edited")]
    NotEditing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Data,
    Configuration,
    Input,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl AppError {
    pub fn config(message: impl Into<String>) -> Self {
        AppError::Config {
            message: message.into(),
        }
    }

    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        AppError::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            AppError::Http(_) | AppError::Status { .. } => ErrorCategory::Network,
            AppError::Decode(_) => ErrorCategory::Data,
            AppError::Io(_) | AppError::Toml(_) | AppError::Config { .. } => {
                ErrorCategory::Configuration
            }
            AppError::Validation { .. } | AppError::NotFound { .. } | AppError::NotEditing => {
                ErrorCategory::Input
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input => ErrorSeverity::High,
            ErrorCategory::Network | ErrorCategory::Data => ErrorSeverity::Medium,
            ErrorCategory::Configuration => ErrorSeverity::Critical,
        }
    }

    /// Process exit code for the CLI.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::High => 1,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            AppError::Http(_) => "Could not reach the web projects API.".to_string(),
            AppError::Status { status, .. } => {
                format!("The web projects API rejected the request ({}).", status)
            }
            AppError::Decode(_) => "The web projects API sent an unexpected response.".to_string(),
            AppError::Io(e) => format!("Could not read a file: {}", e),
            AppError::Toml(_) => "The configuration file is not valid TOML.".to_string(),
            AppError::Config { message } => format!("Invalid configuration: {}", message),
            AppError::Validation { message, .. } => message.clone(),
            AppError::NotFound { id } => format!("There is no web project with id {}.", id),
            AppError::NotEditing => "Start editing a web project first.".to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            AppError::Http(_) => "Check that the API server is running and --base-url is correct",
            AppError::Status { .. } => "Check the server logs for the rejected request",
            AppError::Decode(_) => "Make sure --base-url points at a web projects API",
            AppError::Io(_) | AppError::Toml(_) => "Check the path and contents of --config",
            AppError::Config { .. } => "Fix the reported configuration value",
            AppError::Validation { .. } => "Fill in every field and start the URL with \"www\"",
            AppError::NotFound { .. } => "Run `web-projects list` to see the available ids",
            AppError::NotEditing => "Call begin_edit before changing fields",
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
