//! Device sinks for delivering ESC/POS data
//!
//! The parallel port is exposed as a write-only device file whose name
//! varies by host convention, so the printer walks an ordered candidate
//! list and uses the first name that opens. One job is one open, write,
//! close cycle; the handle is released on every path.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::oneshot;
use tracing::{debug, instrument, warn};

use crate::error::{PrintError, PrintResult};

/// Candidate device names for the first parallel port, tried in order
#[cfg(windows)]
pub const DEVICE_CANDIDATES: &[&str] = &[r"\\.\LPT1", "LPT1"];

/// Candidate device names for the first parallel port, tried in order
#[cfg(not(windows))]
pub const DEVICE_CANDIDATES: &[&str] = &["/dev/lp0", "/dev/usb/lp0"];

/// Trait for print sinks
#[async_trait]
pub trait Printer: Send + Sync {
    /// Send raw ESC/POS data to the device
    async fn print(&self, data: &[u8]) -> PrintResult<()>;

    /// Check whether the device can currently be opened
    async fn is_online(&self) -> bool;
}

/// Parallel-port printer
///
/// Writes one assembled job per call. Blocking file I/O runs on a
/// detached writer thread, bounded by a write deadline so a wedged
/// device fails the request instead of hanging it.
#[derive(Debug, Clone)]
pub struct ParallelPrinter {
    candidates: Vec<PathBuf>,
    write_timeout: Duration,
}

impl ParallelPrinter {
    /// Create a printer over the platform's default device names
    pub fn new() -> Self {
        Self {
            candidates: DEVICE_CANDIDATES.iter().map(PathBuf::from).collect(),
            write_timeout: Duration::from_secs(10),
        }
    }

    /// Put an explicit device path at the front of the candidate list
    pub fn with_device(mut self, path: &str) -> Self {
        self.candidates.insert(0, PathBuf::from(path));
        self
    }

    /// Set the write deadline
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.write_timeout = timeout;
        self
    }

    /// The first candidate name, as reported in logs and status
    pub fn primary_name(&self) -> String {
        self.candidates
            .first()
            .map(|p| p.display().to_string())
            .unwrap_or_default()
    }

    /// Open the first reachable candidate and deliver the whole stream.
    ///
    /// Only after every candidate fails to open is the last OS error
    /// surfaced as `DeviceUnavailable`.
    fn write_to_device(&self, data: &[u8]) -> PrintResult<()> {
        let mut last_err: Option<std::io::Error> = None;
        for path in &self.candidates {
            match OpenOptions::new().write(true).open(path) {
                Ok(mut device) => {
                    debug!(device = %path.display(), "device opened");
                    return write_all(&mut device, data);
                }
                Err(e) => {
                    warn!(device = %path.display(), error = %e, "open failed, trying next candidate");
                    last_err = Some(e);
                }
            }
        }
        let detail = match last_err {
            Some(e) => e.to_string(),
            None => "no candidate device names configured".to_string(),
        };
        Err(PrintError::DeviceUnavailable(detail))
    }
}

impl Default for ParallelPrinter {
    fn default() -> Self {
        Self::new()
    }
}

/// Deliver every byte, counting progress so a short delivery can be
/// reported with exact counts. The device is not asked to retry; a
/// zero-byte write means it stopped accepting data.
fn write_all<W: Write>(device: &mut W, data: &[u8]) -> PrintResult<()> {
    let mut written = 0;
    while written < data.len() {
        match device.write(&data[written..]) {
            Ok(0) => {
                return Err(PrintError::PartialWrite {
                    written,
                    expected: data.len(),
                });
            }
            Ok(n) => written += n,
            Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(PrintError::Io(e)),
        }
    }
    device.flush()?;
    Ok(())
}

#[async_trait]
impl Printer for ParallelPrinter {
    #[instrument(skip(self, data), fields(device = %self.primary_name(), data_len = data.len()))]
    async fn print(&self, data: &[u8]) -> PrintResult<()> {
        let printer = self.clone();
        let data = data.to_vec();

        // A plain thread rather than spawn_blocking: the runtime joins
        // its blocking pool on shutdown, so a write stuck in the kernel
        // would wedge process exit. A detached thread can be abandoned
        // once the deadline fires.
        let (tx, rx) = oneshot::channel();
        thread::spawn(move || {
            let _ = tx.send(printer.write_to_device(&data));
        });

        match tokio::time::timeout(self.write_timeout, rx).await {
            Ok(Ok(result)) => result,
            Ok(Err(_)) => Err(PrintError::Io(std::io::Error::other(
                "device write thread exited without a result",
            ))),
            Err(_) => Err(PrintError::Timeout(format!(
                "device write exceeded {}ms",
                self.write_timeout.as_millis()
            ))),
        }
    }

    async fn is_online(&self) -> bool {
        let candidates = self.candidates.clone();

        // Opening the device can block just like writing to it, so the
        // availability check gets the same detached thread and deadline.
        let (tx, rx) = oneshot::channel();
        thread::spawn(move || {
            let reachable = candidates
                .iter()
                .any(|path| OpenOptions::new().write(true).open(path).is_ok());
            let _ = tx.send(reachable);
        });

        matches!(
            tokio::time::timeout(self.write_timeout, rx).await,
            Ok(Ok(true))
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unreachable_printer() -> ParallelPrinter {
        ParallelPrinter {
            candidates: vec![
                PathBuf::from("/nonexistent/first/lp0"),
                PathBuf::from("/nonexistent/second/lp0"),
            ],
            write_timeout: Duration::from_secs(5),
        }
    }

    #[tokio::test]
    async fn test_print_delivers_all_bytes() {
        let device = tempfile::NamedTempFile::new().unwrap();
        let printer = ParallelPrinter::new().with_device(device.path().to_str().unwrap());

        let stream = vec![0x1B, 0x40, b'h', b'i', 0x0A, 0x0A];
        printer.print(&stream).await.unwrap();

        let delivered = std::fs::read(device.path()).unwrap();
        assert_eq!(delivered, stream);
    }

    #[tokio::test]
    async fn test_explicit_device_is_tried_first() {
        let device = tempfile::NamedTempFile::new().unwrap();
        let printer = unreachable_printer();
        let path = device.path().to_str().unwrap().to_string();
        let printer = printer.with_device(&path);

        assert_eq!(printer.primary_name(), path);
        printer.print(&[0x01, 0x02]).await.unwrap();
        assert_eq!(std::fs::read(device.path()).unwrap(), vec![0x01, 0x02]);
    }

    #[tokio::test]
    async fn test_all_candidates_failing_is_device_unavailable() {
        let printer = unreachable_printer();
        let result = printer.print(&[0x1B, 0x40]).await;
        match result {
            Err(PrintError::DeviceUnavailable(detail)) => {
                assert!(!detail.is_empty());
            }
            other => panic!("expected DeviceUnavailable, got {:?}", other),
        }
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_wedged_device_fails_with_timeout() {
        // A FIFO with no reader blocks the writer inside open(2), which
        // is how a powered-off printer behaves on some hosts.
        let dir = tempfile::tempdir().unwrap();
        let fifo = dir.path().join("lp-wedged");
        let created = std::process::Command::new("mkfifo")
            .arg(&fifo)
            .status()
            .unwrap();
        assert!(created.success());

        let printer = ParallelPrinter {
            candidates: vec![fifo],
            write_timeout: Duration::from_millis(200),
        };

        match printer.print(&[0x1B, 0x40]).await {
            Err(PrintError::Timeout(detail)) => assert!(detail.contains("200ms")),
            other => panic!("expected Timeout, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_is_online_reflects_openability() {
        let device = tempfile::NamedTempFile::new().unwrap();
        let online = ParallelPrinter::new().with_device(device.path().to_str().unwrap());
        assert!(online.is_online().await);

        let offline = unreachable_printer();
        assert!(!offline.is_online().await);
    }

    struct ShortWriter {
        accepted: Vec<u8>,
        limit: usize,
    }

    impl Write for ShortWriter {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            let n = buf.len().min(self.limit);
            self.accepted.extend_from_slice(&buf[..n]);
            Ok(n)
        }
        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    struct StallingWriter {
        accept_before_stall: usize,
    }

    impl Write for StallingWriter {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            let n = buf.len().min(self.accept_before_stall);
            self.accept_before_stall -= n;
            Ok(n)
        }
        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_all_accumulates_short_writes() {
        let mut writer = ShortWriter {
            accepted: Vec::new(),
            limit: 3,
        };
        write_all(&mut writer, b"0123456789").unwrap();
        assert_eq!(writer.accepted, b"0123456789");
    }

    #[test]
    fn test_write_all_reports_partial_write_with_counts() {
        let mut writer = StallingWriter {
            accept_before_stall: 4,
        };
        let result = write_all(&mut writer, b"0123456789");
        match result {
            Err(PrintError::PartialWrite { written, expected }) => {
                assert_eq!(written, 4);
                assert_eq!(expected, 10);
            }
            other => panic!("expected PartialWrite, got {:?}", other),
        }
    }

    #[test]
    fn test_default_candidates_nonempty() {
        let printer = ParallelPrinter::new();
        assert!(!printer.primary_name().is_empty());
        assert_eq!(printer.primary_name(), DEVICE_CANDIDATES[0]);
    }
}
