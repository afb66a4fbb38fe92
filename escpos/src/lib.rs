//! # escpos
//!
//! ESC/POS receipt printing library - job model, encoder, and device sink.
//!
//! ## Scope
//!
//! This crate handles HOW a job becomes paper:
//! - ESC/POS command building
//! - Validated print jobs (text and barcode)
//! - GBK encoding for Chinese printers
//! - Parallel-port delivery with device-name fallback
//!
//! Transport (WHAT arrives and how) stays in application code:
//! - HTTP intake and error envelope → print-server
//!
//! ## Example
//!
//! ```ignore
//! use escpos::{ParallelPrinter, PrintJob, PrintRequest, Printer, encode_job};
//!
//! // Validate the wire request into a job
//! let request: PrintRequest = serde_json::from_slice(&body)?;
//! let job = PrintJob::from_request(request)?;
//!
//! // Assemble the byte stream and send it
//! let encoded = encode_job(&job)?;
//! let printer = ParallelPrinter::new();
//! printer.print(&encoded.data).await?;
//! ```

mod barcode;
mod command;
mod device;
mod encoding;
mod error;
mod job;
mod render;

// Re-exports
pub use barcode::Symbology;
pub use device::{DEVICE_CANDIDATES, ParallelPrinter, Printer};
pub use encoding::utf8_to_gbk;
pub use error::{PrintError, PrintResult};
pub use job::{BarcodeJob, PrintJob, PrintRequest, TextJob};
pub use render::{EncodedJob, encode_job};
