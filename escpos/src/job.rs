//! The print job model
//!
//! [`PrintRequest`] is the raw wire shape: every field optional, zero
//! values standing in for "not set". [`PrintJob`] is what the encoders
//! consume: validated, defaulted, and split by kind so a text job cannot
//! carry barcode options and vice versa.

use serde::Deserialize;

use crate::barcode::Symbology;
use crate::error::{PrintError, PrintResult};

/// Wire-format print request.
///
/// Field names are camelCase on the wire. The aliases (`type`,
/// `barcodeType`, `showText`) keep requests from older clients working.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PrintRequest {
    pub content: String,
    #[serde(alias = "type")]
    pub kind: String,
    #[serde(alias = "barcodeType")]
    pub barcode_symbology: String,
    pub barcode_data: String,
    #[serde(alias = "showText")]
    pub show_barcode_text: bool,
    pub cut: bool,
    pub bold: bool,
    pub center: bool,
    pub font_size: i64,
    pub barcode_width: i64,
    pub barcode_height: i64,
}

/// A validated print job, ready for encoding
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrintJob {
    Text(TextJob),
    Barcode(BarcodeJob),
}

/// Text content with optional styling
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextJob {
    /// Content with line endings normalized to LF
    pub content: String,
    /// Print mode font, kept only when the request gave 1..=8
    pub font_size: Option<u8>,
    pub bold: bool,
    pub center: bool,
    pub cut: bool,
}

/// A single barcode with sizing and visibility options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BarcodeJob {
    pub symbology: Symbology,
    pub data: String,
    /// Print the human-readable digits below the bars
    pub show_text: bool,
    pub center: bool,
    /// Module width, kept only when the request gave a value in 2..=6
    pub module_width: Option<u8>,
    /// Bar height in dots, always in 1..=255
    pub height: u8,
    pub cut: bool,
}

impl PrintJob {
    /// Validate and default a wire request into a job.
    ///
    /// `kind` is matched case-insensitively; anything other than
    /// "barcode" selects text. Out-of-range sizing values degrade to
    /// "leave device default" rather than failing; the hard failures are
    /// missing barcode data and EAN payloads of the wrong length.
    pub fn from_request(req: PrintRequest) -> PrintResult<Self> {
        if req.kind.eq_ignore_ascii_case("barcode") {
            Self::barcode_from_request(req)
        } else {
            Self::text_from_request(req)
        }
    }

    fn text_from_request(req: PrintRequest) -> PrintResult<Self> {
        let font_size = match req.font_size {
            n @ 1..=8 => Some(n as u8),
            _ => None,
        };
        Ok(Self::Text(TextJob {
            content: req.content.replace("\r\n", "\n"),
            font_size,
            bold: req.bold,
            center: req.center,
            cut: req.cut,
        }))
    }

    fn barcode_from_request(req: PrintRequest) -> PrintResult<Self> {
        if req.barcode_data.is_empty() {
            return Err(PrintError::Validation(
                "barcodeData is required for barcode jobs".to_string(),
            ));
        }
        let symbology = Symbology::parse(&req.barcode_symbology);
        if let Some(required) = symbology.required_len()
            && req.barcode_data.len() != required
        {
            return Err(PrintError::Validation(format!(
                "{:?} requires exactly {} characters, got {}",
                symbology,
                required,
                req.barcode_data.len()
            )));
        }
        let module_width = match req.barcode_width {
            0 => Some(3),
            w @ 2..=6 => Some(w as u8),
            _ => None,
        };
        let height = match req.barcode_height {
            h @ 1..=255 => h as u8,
            _ => 100,
        };
        Ok(Self::Barcode(BarcodeJob {
            symbology,
            data: req.barcode_data,
            show_text: req.show_barcode_text,
            center: req.center,
            module_width,
            height,
            cut: req.cut,
        }))
    }

    /// Job kind as a log label
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Text(_) => "text",
            Self::Barcode(_) => "barcode",
        }
    }
}
