//! 服务器状态

use std::sync::Arc;

use escpos::{ParallelPrinter, Printer};
use tokio::sync::Mutex;

use crate::core::Config;

/// 共享状态
///
/// 打印锁把对设备的访问串行化：组装字节流在锁外进行，只有
/// 传输阶段持锁，所以并发请求排队等待的只是设备写入本身。
#[derive(Clone)]
pub struct ServerState {
    pub config: Config,
    pub printer: Arc<dyn Printer>,
    pub print_lock: Arc<Mutex<()>>,
}

impl ServerState {
    pub fn new(config: Config) -> Self {
        let mut printer = ParallelPrinter::new().with_timeout(config.write_timeout());
        if let Some(device) = &config.printer_device {
            printer = printer.with_device(device);
        }

        Self {
            config,
            printer: Arc::new(printer),
            print_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Create state with a custom sink (for tests)
    pub fn with_printer(config: Config, printer: Arc<dyn Printer>) -> Self {
        Self {
            config,
            printer,
            print_lock: Arc::new(Mutex::new(())),
        }
    }
}
