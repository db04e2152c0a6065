use thiserror::Error;

/// Errors raised while resolving a device personality.
///
/// Everything except [`PersonalityError::Config`] describes why one
/// definition source was rejected. The resolver treats any of them as
/// "try the next source"; none of them reach the camera HAL.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PersonalityError {
    #[error("Malformed personality document: {0}")]
    MalformedDocument(String),

    #[error("Missing required field: {field}")]
    MissingRequiredField { field: String },

    #[error("Invalid value for {field}: {value:?} ({reason})")]
    InvalidFieldValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Camera resolutions must be a non-empty array")]
    EmptyResolutionList,

    #[error("Personality file unavailable: {path} ({reason})")]
    FileUnavailable { path: String, reason: String },

    #[error("Skipped malformed {container} entry at index {index}: not an object")]
    MalformedContainerElement { container: String, index: usize },

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Fieldless discriminant of [`PersonalityError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    MalformedDocument,
    MissingRequiredField,
    InvalidFieldValue,
    EmptyResolutionList,
    FileUnavailable,
    MalformedContainerElement,
    Config,
}

impl PersonalityError {
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingRequiredField {
            field: field.into(),
        }
    }

    pub fn invalid_value(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidFieldValue {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    pub fn file_unavailable(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::FileUnavailable {
            path: path.into(),
            reason: reason.into(),
        }
    }

    pub fn malformed_element(container: impl Into<String>, index: usize) -> Self {
        Self::MalformedContainerElement {
            container: container.into(),
            index,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MalformedDocument(_) => ErrorKind::MalformedDocument,
            Self::MissingRequiredField { .. } => ErrorKind::MissingRequiredField,
            Self::InvalidFieldValue { .. } => ErrorKind::InvalidFieldValue,
            Self::EmptyResolutionList => ErrorKind::EmptyResolutionList,
            Self::FileUnavailable { .. } => ErrorKind::FileUnavailable,
            Self::MalformedContainerElement { .. } => ErrorKind::MalformedContainerElement,
            Self::Config(_) => ErrorKind::Config,
        }
    }

    /// Whether a parser recovers from this error locally instead of aborting.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::MalformedContainerElement { .. })
    }
}

pub type Result<T> = std::result::Result<T, PersonalityError>;
