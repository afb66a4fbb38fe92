//! Print Server - 热敏打印机服务
//!
//! 接收 HTTP JSON 打印请求，组装 ESC/POS 字节流并写入并口打印机。
//!
//! # 模块结构
//!
//! ```text
//! print-server/src/
//! ├── core/          # 配置、状态、服务器
//! ├── api/           # HTTP 路由和处理器
//! └── utils/         # 错误、日志、浏览器
//! ```

pub mod api;
pub mod core;
pub mod utils;

// Re-export 公共类型
pub use core::{Config, Server, ServerState, build_app, build_service};
pub use utils::{ApiMessage, AppError, AppResult};

// Re-export logger functions
pub use utils::logger::init_logger;

pub fn print_banner(port: u16) {
    println!(
        r#"
    ____       _       __
   / __ \_____(_)___  / /_
  / /_/ / ___/ / __ \/ __/
 / ____/ /  / / / / / /_
/_/   /_/  /_/_/ /_/\__/
   _____
  / ___/___  ______   _____  _____
  \__ \/ _ \/ ___/ | / / _ \/ ___/
 ___/ /  __/ /   | |/ /  __/ /
/____/\___/_/    |___/\___/_/
    "#
    );
    println!("服务地址: http://localhost:{}", port);
    println!("测试页面: http://localhost:{}/test", port);
    println!("API接口: http://localhost:{}/api/print", port);
    println!();
}
