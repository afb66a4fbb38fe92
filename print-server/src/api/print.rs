//! 打印接口
//!
//! # 路由列表
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /api/print | POST | 提交打印任务 |
//!
//! OPTIONS 预检由 CORS 中间件在路由之前统一应答。
//!
//! # 请求示例
//!
//! ```json
//! { "type": "text", "content": "你好", "cut": true }
//! { "type": "barcode", "barcodeType": "EAN13", "barcodeData": "6901234567890" }
//! ```

use axum::{Json, Router, body::Bytes, extract::State, routing::post};
use tracing::info;

use escpos::{PrintJob, PrintRequest, encode_job};

use crate::core::ServerState;
use crate::utils::{ApiMessage, AppError, AppResult, ok};

/// 打印路由
pub fn router() -> Router<ServerState> {
    Router::new().route("/api/print", post(print_job).fallback(method_not_supported))
}

/// 打印处理器
///
/// 请求体手动解析，保证格式错误也以统一信封返回。
async fn print_job(
    State(state): State<ServerState>,
    body: Bytes,
) -> AppResult<Json<ApiMessage>> {
    let request: PrintRequest = serde_json::from_slice(&body)
        .map_err(|e| AppError::Validation(format!("Invalid JSON body: {}", e)))?;

    let job = PrintJob::from_request(request)?;
    let encoded = encode_job(&job)?;

    info!(
        kind = job.kind(),
        bytes = encoded.data.len(),
        degraded = encoded.transcode_degraded,
        "print job accepted"
    );

    // 同一时刻只允许一个任务占用设备
    let _guard = state.print_lock.lock().await;
    state.printer.print(&encoded.data).await?;

    let message = if encoded.transcode_degraded {
        "Print completed (content sent as raw UTF-8, GBK transcoding failed)"
    } else {
        "Print completed"
    };
    Ok(ok(message))
}

/// 其他方法一律拒绝
async fn method_not_supported() -> AppError {
    AppError::Validation("Only POST is supported".to_string())
}
