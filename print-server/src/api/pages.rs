//! 主页和测试页面
//!
//! 页面编译进二进制，服务不依赖外部静态文件。

use axum::{Router, response::Html, routing::get};

use crate::core::ServerState;

/// 页面路由
pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/", get(home))
        .route("/test", get(test_page))
}

/// 主页处理器
async fn home() -> Html<&'static str> {
    Html(include_str!("../../assets/home.html"))
}

/// 测试页面处理器
async fn test_page() -> Html<&'static str> {
    Html(include_str!("../../assets/test.html"))
}
