use std::time::Duration;

use escpos::DEVICE_CANDIDATES;

/// 服务配置
///
/// # 环境变量
///
/// 所有配置项都可以通过环境变量覆盖：
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | HTTP_PORT | 9100 | HTTP 服务端口 |
/// | PRINTER_DEVICE | 平台默认 | 打印机设备路径 |
/// | WRITE_TIMEOUT_MS | 10000 | 设备写入超时(毫秒) |
/// | OPEN_BROWSER | false | 启动时自动打开测试页面 |
///
/// # 示例
///
/// ```ignore
/// HTTP_PORT=9100 PRINTER_DEVICE=/dev/usb/lp0 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP API 服务端口
    pub http_port: u16,
    /// 打印机设备路径 (未设置时按平台默认顺序尝试)
    pub printer_device: Option<String>,
    /// 设备写入超时 (毫秒)
    pub write_timeout_ms: u64,
    /// 启动时自动打开测试页面
    pub open_browser: bool,
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置，使用默认值
    pub fn from_env() -> Self {
        Self {
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(9100),
            printer_device: std::env::var("PRINTER_DEVICE")
                .ok()
                .filter(|d| !d.is_empty()),
            write_timeout_ms: std::env::var("WRITE_TIMEOUT_MS")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(10000),
            open_browser: std::env::var("OPEN_BROWSER")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
        }
    }

    /// 使用自定义值覆盖部分配置
    ///
    /// 常用于测试场景
    pub fn with_overrides(http_port: u16, printer_device: Option<&str>) -> Self {
        let mut config = Self::from_env();
        config.http_port = http_port;
        config.printer_device = printer_device.map(String::from);
        config
    }

    /// 报告给客户端的目标设备名
    pub fn device_name(&self) -> String {
        match &self.printer_device {
            Some(device) => device.clone(),
            None => DEVICE_CANDIDATES[0].to_string(),
        }
    }

    /// 设备写入超时
    pub fn write_timeout(&self) -> Duration {
        Duration::from_millis(self.write_timeout_ms)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides_replace_port_and_device() {
        let config = Config::with_overrides(8080, Some("/tmp/fake-lp"));
        assert_eq!(config.http_port, 8080);
        assert_eq!(config.device_name(), "/tmp/fake-lp");
    }

    #[test]
    fn test_device_name_falls_back_to_platform_default() {
        let config = Config::with_overrides(8080, None);
        assert_eq!(config.device_name(), DEVICE_CANDIDATES[0]);
    }

    #[test]
    fn test_write_timeout_is_millis() {
        let mut config = Config::with_overrides(8080, None);
        config.write_timeout_ms = 2500;
        assert_eq!(config.write_timeout(), Duration::from_millis(2500));
    }
}
