//! Barcode symbologies and their GS k framing
//!
//! Each symbology frames its payload differently: Code128 and Code39 carry
//! an explicit length byte, EAN-13 and EAN-8 are fixed-length with the
//! digit count baked into the command. The framing functions are kept
//! separate per symbology so each can be tested on its own.

use crate::command::GS;
use crate::error::{PrintError, PrintResult};

/// Supported barcode symbologies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Symbology {
    /// Code128 (full ASCII), the fallback for unrecognized names
    #[default]
    Code128,
    /// Code39 (A-Z, 0-9, space, -.$/%+)
    Code39,
    /// EAN-13, exactly 13 digits
    Ean13,
    /// EAN-8, exactly 8 digits
    Ean8,
}

impl Symbology {
    /// Parse a wire name, case-insensitively.
    ///
    /// Unrecognized or empty names fall back to Code128.
    pub fn parse(name: &str) -> Self {
        match name.to_ascii_uppercase().as_str() {
            "CODE39" => Self::Code39,
            "EAN13" => Self::Ean13,
            "EAN8" => Self::Ean8,
            _ => Self::Code128,
        }
    }

    /// Digit count this symbology requires, if it is fixed-length
    pub fn required_len(&self) -> Option<usize> {
        match self {
            Self::Ean13 => Some(13),
            Self::Ean8 => Some(8),
            Self::Code128 | Self::Code39 => None,
        }
    }

    /// Frame a payload into the symbology's print command
    pub fn frame(&self, data: &[u8]) -> PrintResult<Vec<u8>> {
        match self {
            Self::Code128 => code128(data),
            Self::Code39 => code39(data),
            Self::Ean13 => ean13(data),
            Self::Ean8 => ean8(data),
        }
    }
}

/// Code128 frame: GS k 73 len data
pub fn code128(data: &[u8]) -> PrintResult<Vec<u8>> {
    let len = length_byte(data, "CODE128")?;
    let mut cmd = Vec::with_capacity(4 + data.len());
    cmd.extend_from_slice(&[GS, b'k', 0x49, len]);
    cmd.extend_from_slice(data);
    Ok(cmd)
}

/// Code39 frame: GS k 4 len data
pub fn code39(data: &[u8]) -> PrintResult<Vec<u8>> {
    let len = length_byte(data, "CODE39")?;
    let mut cmd = Vec::with_capacity(4 + data.len());
    cmd.extend_from_slice(&[GS, b'k', 0x04, len]);
    cmd.extend_from_slice(data);
    Ok(cmd)
}

/// EAN-13 frame: GS k 2 followed by exactly 13 digit bytes
pub fn ean13(data: &[u8]) -> PrintResult<Vec<u8>> {
    if data.len() != 13 {
        return Err(PrintError::InvalidBarcodeLength(format!(
            "EAN13 requires exactly 13 characters, got {}",
            data.len()
        )));
    }
    let mut cmd = Vec::with_capacity(3 + data.len());
    cmd.extend_from_slice(&[GS, b'k', 0x02]);
    cmd.extend_from_slice(data);
    Ok(cmd)
}

/// EAN-8 frame: GS k 3 followed by exactly 8 digit bytes
pub fn ean8(data: &[u8]) -> PrintResult<Vec<u8>> {
    if data.len() != 8 {
        return Err(PrintError::InvalidBarcodeLength(format!(
            "EAN8 requires exactly 8 characters, got {}",
            data.len()
        )));
    }
    let mut cmd = Vec::with_capacity(3 + data.len());
    cmd.extend_from_slice(&[GS, b'k', 0x03]);
    cmd.extend_from_slice(data);
    Ok(cmd)
}

/// The length prefix is a single byte; longer payloads cannot be framed
/// and would corrupt the stream if truncated, so they are rejected.
fn length_byte(data: &[u8], symbology: &str) -> PrintResult<u8> {
    u8::try_from(data.len()).map_err(|_| {
        PrintError::InvalidBarcodeLength(format!(
            "{} data exceeds 255 bytes ({})",
            symbology,
            data.len()
        ))
    })
}
