use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Failed to write report to {path}: {source}")]
    Persistence {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration parse error: {message}")]
    ConfigParseError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl ReportError {
    pub fn persistence(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::Persistence {
            path: path.into(),
            source,
        }
    }

    pub fn is_persistence(&self) -> bool {
        matches!(self, Self::Persistence { .. })
    }

    /// Short message meant for stderr, without the nested source chain.
    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::Persistence { path, .. } => format!("Could not save the report to '{}'", path),
            Self::IoError(e) => format!("Could not read an input file: {}", e),
            Self::ConfigParseError { .. } => "The clients file is not valid TOML".to_string(),
            Self::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid setting '{}': {}", field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::Persistence { .. } => {
                "Check that the output directory exists or can be created and is writable"
            }
            Self::IoError(_) => "Check that the file exists and is readable",
            Self::ConfigParseError { .. } => {
                "Each client needs a [[clients]] table with `name` and `address` strings"
            }
            Self::InvalidConfigValueError { .. } => "Fix the value and run the command again",
        }
    }
}

pub type Result<T> = std::result::Result<T, ReportError>;
