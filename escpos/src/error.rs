//! Error types for the printer library

use thiserror::Error;

/// Printer error types
#[derive(Debug, Error)]
pub enum PrintError {
    /// Job failed structural validation before encoding
    #[error("Invalid job: {0}")]
    Validation(String),

    /// Barcode payload violates the symbology's length rules
    #[error("Invalid barcode length: {0}")]
    InvalidBarcodeLength(String),

    /// No candidate device name could be opened
    #[error("Device unavailable: {0}")]
    DeviceUnavailable(String),

    /// Device accepted only part of the stream
    #[error("Partial write: {written} of {expected} bytes delivered")]
    PartialWrite { written: usize, expected: usize },

    /// IO error during printing
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Timeout waiting for the device
    #[error("Timeout: {0}")]
    Timeout(String),
}

/// Result type for printer operations
pub type PrintResult<T> = Result<T, PrintError>;
