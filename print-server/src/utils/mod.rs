//! 工具模块 - 通用工具函数和类型
//!
//! # 内容
//!
//! - [`AppError`] - 应用错误类型
//! - [`ApiMessage`] - API 响应信封
//! - 日志、浏览器等工具

pub mod browser;
pub mod error;
pub mod logger;

pub use error::{ApiMessage, AppError, AppResult, ok};
