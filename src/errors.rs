//! 统一错误处理模块
//!
//! 使用宏自动生成错误类型，支持错误代码和类型名称。

use std::fmt;

/// 定义错误类型的宏
///
/// 自动生成：
/// - enum 定义
/// - code() 方法 - 返回错误代码
/// - error_type() 方法 - 返回错误类型名称
/// - message() 方法 - 返回错误详情
/// - 便捷构造函数
macro_rules! define_imsystem_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal)
    ),* $(,)?) => {
        #[derive(Debug, Clone)]
        pub enum IMSystemError {
            $($variant(String),)*
        }

        impl IMSystemError {
            /// 获取错误代码
            pub fn code(&self) -> &'static str {
                match self {
                    $(IMSystemError::$variant(_) => $code,)*
                }
            }

            /// 获取错误类型名称
            pub fn error_type(&self) -> &'static str {
                match self {
                    $(IMSystemError::$variant(_) => $type_name,)*
                }
            }

            /// 获取错误详情
            pub fn message(&self) -> &str {
                match self {
                    $(IMSystemError::$variant(msg) => msg,)*
                }
            }
        }

        // 生成便捷构造函数
        paste::paste! {
            impl IMSystemError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        IMSystemError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_imsystem_errors! {
    CacheConnection("E001", "Cache Connection Error"),
    CachePluginNotFound("E002", "Cache Plugin Not Found"),
    DatabaseConfig("E003", "Database Configuration Error"),
    DatabaseConnection("E004", "Database Connection Error"),
    DatabaseOperation("E005", "Database Operation Error"),
    UniqueViolation("E006", "Unique Constraint Violation"),
    ForeignKeyViolation("E007", "Foreign Key Violation"),
    Validation("E008", "Validation Error"),
    NotFound("E009", "Resource Not Found"),
    Serialization("E010", "Serialization Error"),
    DateParse("E011", "Date Parse Error"),
    Authentication("E012", "Authentication Error"),
    Authorization("E013", "Authorization Error"),
    ModuleDisabled("E014", "Module Disabled"),
    DependencyConflict("E015", "Module Dependency Conflict"),
    PaymentMismatch("E016", "Payment Amount Mismatch"),
}

impl IMSystemError {
    /// 格式化为彩色输出（用于开发环境）
    #[cfg(debug_assertions)]
    pub fn format_colored(&self) -> String {
        format!(
            "\x1b[1;31m[ERROR]\x1b[0m \x1b[33m{}\x1b[0m \x1b[31m{}\x1b[0m\n  {}",
            self.code(),
            self.error_type(),
            self.message()
        )
    }

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for IMSystemError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for IMSystemError {}

// 数据库错误分类：唯一约束和外键冲突单独成类，服务层按此映射 API 错误码
impl From<sea_orm::DbErr> for IMSystemError {
    fn from(err: sea_orm::DbErr) -> Self {
        match err.sql_err() {
            Some(sea_orm::SqlErr::UniqueConstraintViolation(msg)) => {
                IMSystemError::UniqueViolation(msg)
            }
            Some(sea_orm::SqlErr::ForeignKeyConstraintViolation(msg)) => {
                IMSystemError::ForeignKeyViolation(msg)
            }
            _ => IMSystemError::DatabaseOperation(err.to_string()),
        }
    }
}

impl From<std::io::Error> for IMSystemError {
    fn from(err: std::io::Error) -> Self {
        IMSystemError::DatabaseConfig(err.to_string())
    }
}

impl From<serde_json::Error> for IMSystemError {
    fn from(err: serde_json::Error) -> Self {
        IMSystemError::Serialization(err.to_string())
    }
}

impl From<chrono::ParseError> for IMSystemError {
    fn from(err: chrono::ParseError) -> Self {
        IMSystemError::DateParse(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, IMSystemError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(IMSystemError::cache_connection("test").code(), "E001");
        assert_eq!(IMSystemError::database_config("test").code(), "E003");
        assert_eq!(IMSystemError::unique_violation("test").code(), "E006");
        assert_eq!(IMSystemError::validation("test").code(), "E008");
        assert_eq!(IMSystemError::payment_mismatch("test").code(), "E016");
    }

    #[test]
    fn test_error_types() {
        assert_eq!(
            IMSystemError::unique_violation("test").error_type(),
            "Unique Constraint Violation"
        );
        assert_eq!(
            IMSystemError::validation("test").error_type(),
            "Validation Error"
        );
    }

    #[test]
    fn test_error_message() {
        let err = IMSystemError::validation("Invalid input");
        assert_eq!(err.message(), "Invalid input");
    }

    #[test]
    fn test_format_simple() {
        let err = IMSystemError::module_disabled("payments");
        let formatted = err.format_simple();
        assert!(formatted.contains("Module Disabled"));
        assert!(formatted.contains("payments"));
    }
}
