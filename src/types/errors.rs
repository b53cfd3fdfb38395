use std::fmt;

// === OpenError ===

/// Errors raised when handing an address to the operating system's browser.
#[derive(Debug)]
pub enum OpenError {
    /// The string could not be parsed as an absolute URL.
    InvalidAddress(String),
    /// The OS opener could not be launched.
    LaunchFailed(String),
}

impl fmt::Display for OpenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OpenError::InvalidAddress(addr) => write!(f, "Invalid address: {}", addr),
            OpenError::LaunchFailed(msg) => write!(f, "Failed to launch browser: {}", msg),
        }
    }
}

impl std::error::Error for OpenError {}

// === AdapterError ===

/// Errors raised by the embedded browser adapter.
#[derive(Debug)]
pub enum AdapterError {
    /// The render surface rejected the load request.
    Surface(String),
}

impl fmt::Display for AdapterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AdapterError::Surface(msg) => write!(f, "Render surface error: {}", msg),
        }
    }
}

impl std::error::Error for AdapterError {}

// === SettingsError ===

/// Errors related to loading the settings file.
#[derive(Debug)]
pub enum SettingsError {
    /// An I/O error occurred while reading settings.
    IoError(String),
    /// The settings file is not valid JSON for `ViewerSettings`.
    SerializationError(String),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::IoError(msg) => write!(f, "Settings I/O error: {}", msg),
            SettingsError::SerializationError(msg) => {
                write!(f, "Settings serialization error: {}", msg)
            }
        }
    }
}

impl std::error::Error for SettingsError {}
