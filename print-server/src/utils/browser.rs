//! 打开浏览器
//!
//! 启动时自动打开测试页面，失败只记日志不影响服务。

use std::process::Command;

use tracing::warn;

/// Open the test page in the system browser, best effort
pub fn open_test_page(port: u16) {
    let url = format!("http://localhost:{}/test", port);

    #[cfg(target_os = "windows")]
    let result = Command::new("rundll32")
        .args(["url.dll,FileProtocolHandler", &url])
        .spawn();

    #[cfg(target_os = "macos")]
    let result = Command::new("open").arg(&url).spawn();

    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    let result = Command::new("xdg-open").arg(&url).spawn();

    if let Err(e) = result {
        warn!("Failed to open browser for {}: {}", url, e);
    }
}
