pub mod common;

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

pub use common::{
    ApiResponse, ErrorCode, PaginationInfo, PaginationQuery, ResponseMetadata,
};

/// 程序启动时间，用于运行时长统计
#[derive(Debug, Clone)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}
