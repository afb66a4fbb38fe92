//! Job rendering: a validated job in, one device-ready byte stream out
//!
//! The assembler is a pure function. It always opens with printer init,
//! appends the segment for the job kind, and closes with a paper cut when
//! the job asks for one. Style commands are emitted in on/off pairs inside
//! a single invocation, so no styling leaks into the next job.

use tracing::warn;

use crate::command;
use crate::encoding::utf8_to_gbk;
use crate::error::PrintResult;
use crate::job::{BarcodeJob, PrintJob, TextJob};

/// Encoder output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedJob {
    /// The complete ESC/POS stream
    pub data: Vec<u8>,
    /// True when text content could not be represented in GBK and was
    /// sent as raw UTF-8 instead. The job still succeeds.
    pub transcode_degraded: bool,
}

/// Encode a validated job into its complete ESC/POS stream.
///
/// Deterministic: the same job always produces the same bytes. Performs
/// no I/O; delivery is the device sink's concern.
pub fn encode_job(job: &PrintJob) -> PrintResult<EncodedJob> {
    let mut buf = command::init();
    let (cut, transcode_degraded) = match job {
        PrintJob::Text(text) => (text.cut, encode_text(text, &mut buf)),
        PrintJob::Barcode(barcode) => {
            encode_barcode(barcode, &mut buf)?;
            (barcode.cut, false)
        }
    };
    if cut {
        buf.extend_from_slice(&command::cut());
    }
    Ok(EncodedJob {
        data: buf,
        transcode_degraded,
    })
}

/// Text segment: style setup, transcoded content, feed, style teardown.
///
/// Cannot fail; a transcoding miss degrades to raw UTF-8 and is reported
/// through the returned flag.
fn encode_text(job: &TextJob, buf: &mut Vec<u8>) -> bool {
    if let Some(size) = job.font_size {
        buf.extend_from_slice(&command::print_mode(size - 1));
    }
    if job.center {
        buf.extend_from_slice(&command::align_center());
    }
    if job.bold {
        buf.extend_from_slice(&command::bold_on());
    }

    let (content, degraded) = utf8_to_gbk(&job.content);
    if degraded {
        warn!(
            chars = job.content.chars().count(),
            "content not representable in GBK, sending raw UTF-8"
        );
    }
    buf.extend_from_slice(&content);
    buf.extend_from_slice(&[command::LF, command::LF]);

    if job.bold {
        buf.extend_from_slice(&command::bold_off());
    }
    if job.center {
        buf.extend_from_slice(&command::align_left());
    }
    degraded
}

/// Barcode segment: sizing and HRI setup, framed payload, feed, teardown.
///
/// The symbology frame is the one step that can fail, on payloads
/// violating the symbology's length rules.
fn encode_barcode(job: &BarcodeJob, buf: &mut Vec<u8>) -> PrintResult<()> {
    buf.extend_from_slice(&command::barcode_height(job.height));
    if let Some(width) = job.module_width {
        buf.extend_from_slice(&command::barcode_width(width));
    }
    if job.show_text {
        buf.extend_from_slice(&command::hri_below());
    } else {
        buf.extend_from_slice(&command::hri_none());
    }
    if job.center {
        buf.extend_from_slice(&command::align_center());
    }

    let frame = job.symbology.frame(job.data.as_bytes())?;
    buf.extend_from_slice(&frame);
    buf.extend_from_slice(&[command::LF, command::LF]);

    if job.center {
        buf.extend_from_slice(&command::align_left());
    }
    Ok(())
}
