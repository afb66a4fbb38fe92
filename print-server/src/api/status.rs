//! 状态检查接口

use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;

use crate::core::ServerState;

/// 状态路由
pub fn router() -> Router<ServerState> {
    Router::new().route("/api/status", get(status))
}

/// 服务状态响应
#[derive(Serialize)]
pub struct StatusResponse {
    /// 状态 (running)
    status: &'static str,
    /// 版本号
    version: &'static str,
    /// 目标设备名 (字段名 port 兼容旧客户端)
    port: String,
    /// 支持的功能
    features: Vec<&'static str>,
}

/// 状态检查处理器
async fn status(State(state): State<ServerState>) -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "running",
        version: env!("CARGO_PKG_VERSION"),
        port: state.config.device_name(),
        features: vec!["text", "barcode", "gbk-encoding"],
    })
}
