//! 统一错误处理
//!
//! 所有 API 响应共用一个信封结构：
//!
//! ```json
//! { "status": "success", "message": "..." }
//! { "status": "error", "message": "..." }
//! ```
//!
//! 校验错误和设备错误都以 400 返回，消息原样给调用方；
//! 内部错误以 500 返回，细节只进日志。

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::error;

/// API 统一响应结构
#[derive(Debug, Serialize)]
pub struct ApiMessage {
    /// 状态 (success | error)
    pub status: &'static str,
    /// 消息
    pub message: String,
}

/// 应用错误枚举
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// 请求校验失败 (400)
    #[error("{0}")]
    Validation(String),

    /// 设备传输失败 (400)
    #[error("{0}")]
    Device(String),

    /// 内部错误 (500)
    #[error("Internal server error: {0}")]
    Internal(String),
}

pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Device(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Internal(msg) => {
                error!(target: "internal", error = %msg, "Internal error occurred");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        let body = Json(ApiMessage {
            status: "error",
            message,
        });

        (status, body).into_response()
    }
}

impl From<escpos::PrintError> for AppError {
    fn from(e: escpos::PrintError) -> Self {
        match &e {
            escpos::PrintError::Validation(_) | escpos::PrintError::InvalidBarcodeLength(_) => {
                AppError::Validation(e.to_string())
            }
            _ => AppError::Device(e.to_string()),
        }
    }
}

/// 创建成功响应
pub fn ok(message: impl Into<String>) -> Json<ApiMessage> {
    Json(ApiMessage {
        status: "success",
        message: message.into(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_errors_map_to_validation() {
        let e = escpos::PrintError::Validation("barcodeData is required".into());
        assert!(matches!(AppError::from(e), AppError::Validation(_)));

        let e = escpos::PrintError::InvalidBarcodeLength("EAN13 needs 13".into());
        assert!(matches!(AppError::from(e), AppError::Validation(_)));
    }

    #[test]
    fn test_delivery_errors_map_to_device() {
        let e = escpos::PrintError::DeviceUnavailable("os error 2".into());
        match AppError::from(e) {
            AppError::Device(msg) => assert!(msg.contains("Device unavailable")),
            other => panic!("expected Device, got {:?}", other),
        }

        let e = escpos::PrintError::PartialWrite {
            written: 3,
            expected: 10,
        };
        assert!(matches!(AppError::from(e), AppError::Device(_)));

        let e = escpos::PrintError::Timeout("device write exceeded 10000ms".into());
        assert!(matches!(AppError::from(e), AppError::Device(_)));
    }
}
