use std::fmt;

#[derive(Debug)]
pub enum GenerateError {
    ConfigError(String),
    InvalidRequest(String),
    InvalidSelection(String),
    NetworkError(String),
    HttpStatusError(u16),
    DecodeError(String),
    EncodeError(String),
}

impl fmt::Display for GenerateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerateError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            GenerateError::InvalidRequest(msg) => write!(f, "Invalid request: {}", msg),
            GenerateError::InvalidSelection(msg) => {
                write!(f, "Invalid provider selection: {}", msg)
            }
            GenerateError::NetworkError(msg) => write!(f, "Network error: {}", msg),
            GenerateError::HttpStatusError(status) => write!(f, "API error: status {}", status),
            GenerateError::DecodeError(msg) => write!(f, "Image decode error: {}", msg),
            GenerateError::EncodeError(msg) => write!(f, "Image encode error: {}", msg),
        }
    }
}

impl std::error::Error for GenerateError {}

pub type Result<T> = std::result::Result<T, GenerateError>;
