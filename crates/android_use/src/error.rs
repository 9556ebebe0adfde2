/// Error types for ADB operations
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AdbError {
    #[error("Command execution failed: {0}")]
    CommandFailed(String),

    #[error("Operation timed out: {0}")]
    Timeout(String),

    #[error("Device not found: {0}")]
    DeviceNotFound(String),

    #[error("Device is offline: {0}")]
    DeviceOffline(String),

    #[error("Device unauthorized: {0}")]
    DeviceUnauthorized(String),

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl AdbError {
    /// Stable machine-readable code used in JSON output.
    pub fn code(&self) -> &'static str {
        match self {
            AdbError::CommandFailed(_) => "ADB_FAILED",
            AdbError::Timeout(_) => "TIMEOUT",
            AdbError::DeviceNotFound(_) => "DEVICE_NOT_FOUND",
            AdbError::DeviceOffline(_) => "DEVICE_OFFLINE",
            AdbError::DeviceUnauthorized(_) => "DEVICE_UNAUTHORIZED",
            AdbError::FileNotFound(_) => "FILE_NOT_FOUND",
            AdbError::InvalidInput(_) => "INVALID_INPUT",
            AdbError::Parse(_) => "PARSE_ERROR",
            AdbError::Io(_) => "IO_ERROR",
        }
    }
}

pub type Result<T> = std::result::Result<T, AdbError>;
