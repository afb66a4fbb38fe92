//! API 路由模块
//!
//! # 结构
//!
//! - [`pages`] - 主页和测试页面
//! - [`print`] - 打印接口
//! - [`status`] - 状态检查接口

pub mod pages;
pub mod print;
pub mod status;
