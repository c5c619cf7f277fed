use std::process::ExitCode as StdExitCode;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    Success = 0,
    GeneralError = 1,
    InvalidInput = 10,
    DecodeFailed = 11,
    IoError = 12,
    UnsupportedEncoding = 13,
}

impl From<ExitCode> for StdExitCode {
    fn from(code: ExitCode) -> Self {
        StdExitCode::from(code as u8)
    }
}

#[derive(Debug, Error)]
pub enum EnconvError {
    #[error("invalid input: {message}")]
    InvalidInput { message: String },

    #[error("unknown locale '{tag}' (supported: zh_TW, zh_CN, ja, ko, en)")]
    UnknownLocale { tag: String },

    #[error("error decoding with {encoding}: {message}")]
    Decode { encoding: String, message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("unsupported encoding: {name}")]
    UnsupportedEncoding { name: String },
}

impl EnconvError {
    pub fn exit_code(&self) -> ExitCode {
        match self {
            EnconvError::InvalidInput { .. } | EnconvError::UnknownLocale { .. } => {
                ExitCode::InvalidInput
            }
            EnconvError::Decode { .. } => ExitCode::DecodeFailed,
            EnconvError::Io(_) => ExitCode::IoError,
            EnconvError::UnsupportedEncoding { .. } => ExitCode::UnsupportedEncoding,
        }
    }

    // Helper constructors for common error patterns
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    pub fn unknown_locale(tag: impl Into<String>) -> Self {
        Self::UnknownLocale { tag: tag.into() }
    }

    pub fn decode(encoding: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Decode {
            encoding: encoding.into(),
            message: message.into(),
        }
    }

    pub fn unsupported_encoding(name: impl Into<String>) -> Self {
        Self::UnsupportedEncoding { name: name.into() }
    }
}

pub type Result<T> = std::result::Result<T, EnconvError>;
