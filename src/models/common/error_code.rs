use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::errors::IMSystemError;

// 统一的API错误码，序列化为固定的字符串词汇表
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[ts(export, export_to = "../frontend/src/types/generated/api.ts")]
pub enum ErrorCode {
    Ok,
    ValidationError,
    RecordNotFound,
    UniqueConstraintViolation,
    ForeignKeyViolation,
    Unauthorized,
    Forbidden,
    ModuleDisabled,
    DependencyConflict,
    PaymentMismatch,
    RateLimited,
    InternalError,
}

// 内部错误到API错误码的分类：捕获、归类、返回，不做重试
impl From<&IMSystemError> for ErrorCode {
    fn from(err: &IMSystemError) -> Self {
        match err {
            IMSystemError::UniqueViolation(_) => ErrorCode::UniqueConstraintViolation,
            IMSystemError::ForeignKeyViolation(_) => ErrorCode::ForeignKeyViolation,
            IMSystemError::NotFound(_) => ErrorCode::RecordNotFound,
            IMSystemError::Validation(_) | IMSystemError::DateParse(_) => {
                ErrorCode::ValidationError
            }
            IMSystemError::Authentication(_) => ErrorCode::Unauthorized,
            IMSystemError::Authorization(_) => ErrorCode::Forbidden,
            IMSystemError::ModuleDisabled(_) => ErrorCode::ModuleDisabled,
            IMSystemError::DependencyConflict(_) => ErrorCode::DependencyConflict,
            IMSystemError::PaymentMismatch(_) => ErrorCode::PaymentMismatch,
            _ => ErrorCode::InternalError,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialized_vocabulary() {
        assert_eq!(serde_json::to_string(&ErrorCode::Ok).unwrap(), "\"OK\"");
        assert_eq!(
            serde_json::to_string(&ErrorCode::UniqueConstraintViolation).unwrap(),
            "\"UNIQUE_CONSTRAINT_VIOLATION\""
        );
        assert_eq!(
            serde_json::to_string(&ErrorCode::RecordNotFound).unwrap(),
            "\"RECORD_NOT_FOUND\""
        );
    }

    #[test]
    fn test_classification_from_internal_error() {
        let err = IMSystemError::unique_violation("users.username");
        assert_eq!(ErrorCode::from(&err), ErrorCode::UniqueConstraintViolation);

        let err = IMSystemError::not_found("student 42");
        assert_eq!(ErrorCode::from(&err), ErrorCode::RecordNotFound);

        let err = IMSystemError::database_operation("connection reset");
        assert_eq!(ErrorCode::from(&err), ErrorCode::InternalError);
    }
}
