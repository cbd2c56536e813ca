//! 请求参数错误处理器
//!
//! JSON 体和查询串解析失败时返回统一错误信封，而不是 actix 默认的纯文本。

use actix_web::error::{InternalError, JsonPayloadError, QueryPayloadError};
use actix_web::{HttpRequest, HttpResponse};
use tracing::debug;

use crate::models::{ApiResponse, ErrorCode};

pub fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    debug!("JSON payload error on {}: {}", req.path(), err);
    let message = match &err {
        JsonPayloadError::ContentType => "Content-Type must be application/json".to_string(),
        JsonPayloadError::Deserialize(e) => format!("Invalid JSON body: {e}"),
        JsonPayloadError::Overflow { .. } | JsonPayloadError::OverflowKnownLength { .. } => {
            "JSON body too large".to_string()
        }
        other => format!("Invalid JSON body: {other}"),
    };

    InternalError::from_response(
        err,
        HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::ValidationError, message)),
    )
    .into()
}

pub fn query_error_handler(err: QueryPayloadError, req: &HttpRequest) -> actix_web::Error {
    debug!("Query string error on {}: {}", req.path(), err);
    let message = format!("Invalid query parameters: {err}");

    InternalError::from_response(
        err,
        HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::ValidationError, message)),
    )
    .into()
}
