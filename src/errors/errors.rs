use std::fmt::Display;

use thiserror::Error;

use crate::Location;

#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    internal_error: ErrorImpl,
    location: Location,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, location: Location) -> Self {
        Error {
            internal_error: error_impl,
            location,
        }
    }

    pub fn get_location(&self) -> &Location {
        &self.location
    }

    pub fn get_kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::FileRead { .. } => "FileRead",
            ErrorImpl::ExpectedIncludePath { .. } => "ExpectedIncludePath",
            ErrorImpl::PathResolution { .. } => "PathResolution",
            ErrorImpl::WorkingDirectory { .. } => "WorkingDirectory",
            ErrorImpl::UnclassifiableCharacter { .. } => "UnclassifiableCharacter",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::FileRead { path, reason } => {
                ErrorTip::Suggestion(format!("Could not read `{}`: {}", path, reason))
            }
            ErrorImpl::ExpectedIncludePath { found } => ErrorTip::Suggestion(format!(
                "`@include` must be followed by a quoted path, found `{}`",
                found
            )),
            ErrorImpl::PathResolution { path, reason } => ErrorTip::Suggestion(format!(
                "Included path `{}` could not be resolved: {}",
                path, reason
            )),
            ErrorImpl::WorkingDirectory { .. } => ErrorTip::None,
            ErrorImpl::UnclassifiableCharacter { character } => ErrorTip::Suggestion(format!(
                "Character `{}` does not start any token",
                character.escape_default()
            )),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} at {}", self.internal_error, self.location)
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.internal_error)
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("failed to read {path:?}: {reason}")]
    FileRead { path: String, reason: String },
    #[error("expected include path string, found {found:?}")]
    ExpectedIncludePath { found: String },
    #[error("failed to resolve include path {path:?}: {reason}")]
    PathResolution { path: String, reason: String },
    #[error("failed to determine working directory: {reason}")]
    WorkingDirectory { reason: String },
    #[error("unclassifiable character: {character:?}")]
    UnclassifiableCharacter { character: char },
}
