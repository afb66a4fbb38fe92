//! GBK transcoding for Chinese thermal printers
//!
//! The target devices render CJK text from GBK, not UTF-8. Transcoding can
//! fail for characters outside GBK (emoji, most non-CJK scripts); in that
//! case the caller gets the original UTF-8 bytes back so the job can still
//! complete, together with a flag reporting the degradation.

/// Transcode UTF-8 text to GBK.
///
/// Returns the device-ready bytes and a degradation flag. When every
/// character maps into GBK the flag is false. When any does not, the
/// original UTF-8 bytes are returned unmodified and the flag is true;
/// the content may render incorrectly but printing proceeds.
pub fn utf8_to_gbk(s: &str) -> (Vec<u8>, bool) {
    let (cow, _, had_errors) = encoding_rs::GBK.encode(s);
    if had_errors {
        (s.as_bytes().to_vec(), true)
    } else {
        (cow.into_owned(), false)
    }
}
