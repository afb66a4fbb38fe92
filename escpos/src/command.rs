//! ESC/POS command constructors
//!
//! Each function returns the exact byte sequence for one device command,
//! in the dialect spoken by the parallel-port receipt printers this crate
//! targets. Style commands come in on/off pairs so callers can emit
//! symmetric setup and teardown around content.

/// ESC (0x1B), prefix for most commands
pub const ESC: u8 = 0x1B;

/// GS (0x1D), prefix for barcode and cutter commands
pub const GS: u8 = 0x1D;

/// LF (0x0A), print the line buffer and feed one line
pub const LF: u8 = 0x0A;

/// Initialize printer (ESC @)
///
/// Clears the print buffer and resets formatting to power-on defaults.
#[inline]
pub fn init() -> Vec<u8> {
    vec![ESC, b'@']
}

/// Select print mode (ESC ! n)
///
/// Font indices are zero-based on the wire.
#[inline]
pub fn print_mode(n: u8) -> Vec<u8> {
    vec![ESC, b'!', n]
}

/// Align left (ESC a 0), the device default
#[inline]
pub fn align_left() -> Vec<u8> {
    vec![ESC, b'a', 0x00]
}

/// Align center (ESC a 1)
#[inline]
pub fn align_center() -> Vec<u8> {
    vec![ESC, b'a', 0x01]
}

/// Emphasis on (ESC E 1)
#[inline]
pub fn bold_on() -> Vec<u8> {
    vec![ESC, b'E', 0x01]
}

/// Emphasis off (ESC E 0)
#[inline]
pub fn bold_off() -> Vec<u8> {
    vec![ESC, b'E', 0x00]
}

/// Feed to the cutter and full cut (GS V A 3)
#[inline]
pub fn cut() -> Vec<u8> {
    vec![GS, b'V', b'A', 0x03]
}

/// Set barcode height in dots (GS h n)
#[inline]
pub fn barcode_height(n: u8) -> Vec<u8> {
    vec![GS, b'h', n]
}

/// Set barcode module width (GS w n), valid range 2..=6
#[inline]
pub fn barcode_width(n: u8) -> Vec<u8> {
    vec![GS, b'w', n]
}

/// No human-readable text with barcodes (GS H 0)
#[inline]
pub fn hri_none() -> Vec<u8> {
    vec![GS, b'H', 0x00]
}

/// Human-readable text below the bars (GS H 2)
#[inline]
pub fn hri_below() -> Vec<u8> {
    vec![GS, b'H', 0x02]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init() {
        assert_eq!(init(), vec![0x1B, 0x40]);
    }

    #[test]
    fn test_print_mode() {
        assert_eq!(print_mode(0), vec![0x1B, 0x21, 0x00]);
        assert_eq!(print_mode(7), vec![0x1B, 0x21, 0x07]);
    }

    #[test]
    fn test_alignment() {
        assert_eq!(align_left(), vec![0x1B, 0x61, 0x00]);
        assert_eq!(align_center(), vec![0x1B, 0x61, 0x01]);
    }

    #[test]
    fn test_emphasis() {
        assert_eq!(bold_on(), vec![0x1B, 0x45, 0x01]);
        assert_eq!(bold_off(), vec![0x1B, 0x45, 0x00]);
    }

    #[test]
    fn test_cut() {
        assert_eq!(cut(), vec![0x1D, 0x56, 0x41, 0x03]);
    }

    #[test]
    fn test_barcode_sizing() {
        assert_eq!(barcode_height(100), vec![0x1D, 0x68, 100]);
        assert_eq!(barcode_height(255), vec![0x1D, 0x68, 0xFF]);
        assert_eq!(barcode_width(3), vec![0x1D, 0x77, 0x03]);
    }

    #[test]
    fn test_hri_position() {
        assert_eq!(hri_none(), vec![0x1D, 0x48, 0x00]);
        assert_eq!(hri_below(), vec![0x1D, 0x48, 0x02]);
    }
}
