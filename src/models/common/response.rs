use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::ErrorCode;

// 响应元数据
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/api.ts")]
pub struct ResponseMetadata {
    pub timestamp: chrono::DateTime<chrono::Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<u64>,
}

impl ResponseMetadata {
    fn now() -> Self {
        Self {
            timestamp: chrono::Utc::now(),
            duration_ms: None,
        }
    }
}

// 统一的API响应结构
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/api.ts")]
pub struct ApiResponse<T: TS> {
    pub success: bool,
    pub code: ErrorCode,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    pub metadata: ResponseMetadata,
}

impl<T: TS> ApiResponse<T> {
    pub fn success(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            code: ErrorCode::Ok,
            message: message.into(),
            data: Some(data),
            metadata: ResponseMetadata::now(),
        }
    }

    pub fn error(code: ErrorCode, data: T, message: impl Into<String>) -> Self {
        Self {
            success: false,
            code,
            message: message.into(),
            data: Some(data),
            metadata: ResponseMetadata::now(),
        }
    }

    /// 附带处理耗时（从操作入口处计时）
    pub fn with_duration(mut self, started: std::time::Instant) -> Self {
        self.metadata.duration_ms = Some(started.elapsed().as_millis() as u64);
        self
    }
}

impl ApiResponse<()> {
    pub fn success_empty(message: impl Into<String>) -> Self {
        Self {
            success: true,
            code: ErrorCode::Ok,
            message: message.into(),
            data: None,
            metadata: ResponseMetadata::now(),
        }
    }

    pub fn error_empty(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            success: false,
            code,
            message: message.into(),
            data: None,
            metadata: ResponseMetadata::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_envelope() {
        let resp = ApiResponse::success(42i64, "ok");
        assert!(resp.success);
        assert_eq!(resp.code, ErrorCode::Ok);
        assert_eq!(resp.data, Some(42));
        assert!(resp.metadata.duration_ms.is_none());
    }

    #[test]
    fn test_error_envelope_serialization_skips_data() {
        let resp = ApiResponse::error_empty(ErrorCode::RecordNotFound, "no such student");
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["code"], "RECORD_NOT_FOUND");
        assert!(json.get("data").is_none());
    }

    #[test]
    fn test_with_duration() {
        let started = std::time::Instant::now();
        let resp = ApiResponse::success_empty("done").with_duration(started);
        assert!(resp.metadata.duration_ms.is_some());
    }
}
