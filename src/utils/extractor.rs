//! 路径参数安全提取器
//!
//! 路径中的 ID 统一经过解析与正数校验，失败时直接返回统一错误信封，
//! 处理函数拿到的始终是合法值。

use actix_web::dev::Payload;
use actix_web::error::InternalError;
use actix_web::{FromRequest, HttpRequest, HttpResponse};
use futures_util::future::{Ready, ready};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::{ApiResponse, ErrorCode};

fn bad_request(message: &str) -> actix_web::Error {
    InternalError::from_response(
        message.to_string(),
        HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::ValidationError, message)),
    )
    .into()
}

/// 生成从指定路径参数解析正整数 ID 的提取器
macro_rules! define_safe_id_extractor {
    ($name:ident, $param:literal) => {
        pub struct $name(pub i64);

        impl FromRequest for $name {
            type Error = actix_web::Error;
            type Future = Ready<Result<Self, Self::Error>>;

            fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
                let parsed = req
                    .match_info()
                    .get($param)
                    .and_then(|raw| raw.parse::<i64>().ok())
                    .filter(|id| *id > 0);

                ready(match parsed {
                    Some(id) => Ok($name(id)),
                    None => Err(bad_request(concat!(
                        "Path parameter '",
                        $param,
                        "' must be a positive integer"
                    ))),
                })
            }
        }
    };
}

define_safe_id_extractor!(SafeIDI64, "id");
define_safe_id_extractor!(SafeCourseIdI64, "course_id");

static MODULE_NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z][a-z0-9_]{0,63}$").expect("Invalid module name regex"));

/// 模块名提取器：小写字母开头，限定字符集
pub struct SafeModuleName(pub String);

impl FromRequest for SafeModuleName {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let parsed = req
            .match_info()
            .get("name")
            .filter(|raw| MODULE_NAME_RE.is_match(raw))
            .map(|raw| raw.to_string());

        ready(match parsed {
            Some(name) => Ok(SafeModuleName(name)),
            None => Err(bad_request("Invalid module name")),
        })
    }
}

static SETTING_KEY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z][a-z0-9_.]{0,127}$").expect("Invalid setting key regex"));

/// 设置键提取器：点分小写键名
pub struct SafeSettingKey(pub String);

impl FromRequest for SafeSettingKey {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let parsed = req
            .match_info()
            .get("key")
            .filter(|raw| SETTING_KEY_RE.is_match(raw))
            .map(|raw| raw.to_string());

        ready(match parsed {
            Some(key) => Ok(SafeSettingKey(key)),
            None => Err(bad_request("Invalid setting key")),
        })
    }
}
