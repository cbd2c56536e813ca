pub mod auth;
pub mod billing;
pub mod courses;
pub mod families;
pub mod fee_services;
pub mod modules;
pub mod payments;
pub mod reports;
pub mod students;
pub mod subscriptions;
pub mod system;
pub mod users;

pub use auth::AuthService;
pub use billing::BillingService;
pub use courses::CourseService;
pub use families::FamilyService;
pub use fee_services::FeeServiceService;
pub use modules::ModuleService;
pub use payments::PaymentService;
pub use reports::ReportService;
pub use students::StudentService;
pub use subscriptions::SubscriptionService;
pub use system::SystemService;
pub use users::UserService;

use actix_web::{HttpRequest, HttpResponse};
use tracing::error;

use crate::errors::IMSystemError;
use crate::middlewares::RequireJWT;
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};

/// 家长门户数据范围：家长只能访问本家庭数据
///
/// 返回 Some(family_id) 表示必须限定到该家庭；教务人员返回 None 不做限定。
/// 家长账号未关联家庭时返回 Some(-1)，保证查不到任何数据。
pub(crate) fn parent_family_scope(request: &HttpRequest) -> Option<i64> {
    RequireJWT::extract_user_claims(request).and_then(|user| match user.role {
        UserRole::Parent => user.family_id.or(Some(-1)),
        _ => None,
    })
}

/// 存储层错误统一映射为 HTTP 响应：捕获、归类、返回，不做重试
pub(crate) fn storage_error_response(err: &IMSystemError, context: &str) -> HttpResponse {
    let code = ErrorCode::from(err);
    let message = format!("{context}: {}", err.message());

    let mut builder = match code {
        ErrorCode::RecordNotFound => HttpResponse::NotFound(),
        ErrorCode::UniqueConstraintViolation | ErrorCode::DependencyConflict => {
            HttpResponse::Conflict()
        }
        ErrorCode::ValidationError | ErrorCode::ForeignKeyViolation => HttpResponse::BadRequest(),
        ErrorCode::PaymentMismatch => HttpResponse::UnprocessableEntity(),
        ErrorCode::Unauthorized => HttpResponse::Unauthorized(),
        ErrorCode::Forbidden | ErrorCode::ModuleDisabled => HttpResponse::Forbidden(),
        _ => {
            error!("{}: {}", context, err);
            HttpResponse::InternalServerError()
        }
    };

    builder.json(ApiResponse::error_empty(code, message))
}
