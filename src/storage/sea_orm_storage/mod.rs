//! SeaORM 存储实现
//!
//! 统一的数据库存储层，支持 SQLite、PostgreSQL 和 MySQL。

mod billing;
mod courses;
mod families;
mod fee_services;
mod payments;
mod reports;
mod students;
mod subscriptions;
mod system_settings;
mod users;

use crate::config::AppConfig;
use crate::errors::{IMSystemError, Result};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::time::Duration;
use tracing::info;

/// SeaORM 存储实现
#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
}

impl SeaOrmStorage {
    /// 创建新的 SeaORM 存储实例
    pub async fn new_async() -> Result<Self> {
        let config = AppConfig::get();
        let db_url = Self::build_database_url(&config.database.url)?;

        // 根据数据库类型选择连接方式
        let db = if db_url.starts_with("sqlite://") {
            Self::connect_sqlite(&db_url, config).await?
        } else {
            Self::connect_generic(&db_url, config).await?
        };

        // 运行迁移
        Migrator::up(&db, None)
            .await
            .map_err(|e| IMSystemError::database_operation(format!("数据库迁移失败: {e}")))?;

        info!("SeaORM 存储初始化完成，数据库: {}", db_url);

        Ok(Self { db })
    }

    /// SQLite 专用连接（WAL + pragma 优化）
    async fn connect_sqlite(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        let opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| IMSystemError::database_config(format!("SQLite URL 解析失败: {e}")))?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(Duration::from_secs(5))
            .pragma("cache_size", "-64000")
            .pragma("temp_store", "memory")
            .pragma("foreign_keys", "ON");

        let pool = SqlitePoolOptions::new()
            .max_connections(config.database.pool_size)
            .min_connections(1)
            .test_before_acquire(true)
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(300))
            .connect_with(opt)
            .await
            .map_err(|e| IMSystemError::database_connection(format!("SQLite 连接失败: {e}")))?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// 通用连接（PostgreSQL、MySQL 等）
    async fn connect_generic(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(config.database.pool_size)
            .min_connections(5)
            .connect_timeout(Duration::from_secs(config.database.timeout))
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false)
            .sqlx_logging_level(tracing::log::LevelFilter::Debug);

        Database::connect(opt)
            .await
            .map_err(|e| IMSystemError::database_connection(format!("无法连接到数据库: {e}")))
    }

    /// 从 URL 自动推断数据库类型并构建连接 URL
    fn build_database_url(url: &str) -> Result<String> {
        if url.starts_with("sqlite://") {
            Ok(url.to_string())
        } else if url.ends_with(".db") || url.ends_with(".sqlite") || url == ":memory:" {
            Ok(format!("sqlite://{}?mode=rwc", url))
        } else if url.starts_with("postgres://")
            || url.starts_with("postgresql://")
            || url.starts_with("mysql://")
            || url.starts_with("mariadb://")
        {
            Ok(url.to_string())
        } else {
            Err(IMSystemError::database_config(format!(
                "无法从 URL 推断数据库类型: {url}. 支持: sqlite://, postgres://, mysql://, 或 .db/.sqlite 文件路径"
            )))
        }
    }
}

// Storage trait 实现
use crate::models::{
    billing::{
        entities::FeeAllocation,
        requests::AllocationListQuery,
        responses::AllocationListResponse,
    },
    courses::{
        entities::{Course, Enrollment},
        requests::{CourseListQuery, CreateCourseRequest, UpdateCourseRequest},
        responses::CourseListResponse,
    },
    families::{
        entities::Family,
        requests::{CreateFamilyRequest, FamilyListQuery, UpdateFamilyRequest},
        responses::FamilyListResponse,
    },
    fee_services::{
        entities::FeeService,
        requests::{CreateFeeServiceRequest, FeeServiceListQuery, UpdateFeeServiceRequest},
        responses::FeeServiceListResponse,
    },
    payments::{
        entities::Payment,
        requests::PaymentListQuery,
        responses::PaymentListResponse,
    },
    reports::responses::{OutstandingFamily, RevenuePoint},
    students::{
        entities::Student,
        requests::{CreateStudentRequest, StudentListQuery, UpdateStudentRequest},
        responses::StudentListResponse,
    },
    subscriptions::{
        entities::Subscription,
        requests::{CreateSubscriptionRequest, SubscriptionListQuery},
    },
    system::entities::SystemSetting,
    users::{
        entities::User,
        requests::{CreateUserRequest, UpdateUserRequest, UserListQuery},
        responses::UserListResponse,
    },
};
use crate::storage::{NewPayment, Storage};
use async_trait::async_trait;

#[async_trait]
impl Storage for SeaOrmStorage {
    // 用户模块
    async fn create_user(&self, user: CreateUserRequest) -> Result<User> {
        self.create_user_impl(user).await
    }

    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>> {
        self.get_user_by_id_impl(id).await
    }

    async fn get_user_by_username_or_email(&self, identifier: &str) -> Result<Option<User>> {
        self.get_user_by_username_or_email_impl(identifier).await
    }

    async fn list_users_with_pagination(&self, query: UserListQuery) -> Result<UserListResponse> {
        self.list_users_with_pagination_impl(query).await
    }

    async fn update_user(&self, id: i64, update: UpdateUserRequest) -> Result<Option<User>> {
        self.update_user_impl(id, update).await
    }

    async fn delete_user(&self, id: i64) -> Result<bool> {
        self.delete_user_impl(id).await
    }

    async fn update_last_login(&self, id: i64) -> Result<bool> {
        self.update_last_login_impl(id).await
    }

    async fn count_users(&self) -> Result<u64> {
        self.count_users_impl().await
    }

    // 家庭模块
    async fn create_family(&self, family: CreateFamilyRequest) -> Result<Family> {
        self.create_family_impl(family).await
    }

    async fn get_family_by_id(&self, id: i64) -> Result<Option<Family>> {
        self.get_family_by_id_impl(id).await
    }

    async fn list_families_with_pagination(
        &self,
        query: FamilyListQuery,
    ) -> Result<FamilyListResponse> {
        self.list_families_with_pagination_impl(query).await
    }

    async fn update_family(&self, id: i64, update: UpdateFamilyRequest) -> Result<Option<Family>> {
        self.update_family_impl(id, update).await
    }

    async fn deactivate_family(&self, id: i64) -> Result<bool> {
        self.deactivate_family_impl(id).await
    }

    async fn list_students_by_family(&self, family_id: i64) -> Result<Vec<Student>> {
        self.list_students_by_family_impl(family_id).await
    }

    // 学生模块
    async fn create_student(&self, student: CreateStudentRequest) -> Result<Student> {
        self.create_student_impl(student).await
    }

    async fn get_student_by_id(&self, id: i64) -> Result<Option<Student>> {
        self.get_student_by_id_impl(id).await
    }

    async fn list_students_with_pagination(
        &self,
        query: StudentListQuery,
    ) -> Result<StudentListResponse> {
        self.list_students_with_pagination_impl(query).await
    }

    async fn update_student(
        &self,
        id: i64,
        update: UpdateStudentRequest,
    ) -> Result<Option<Student>> {
        self.update_student_impl(id, update).await
    }

    async fn deactivate_student(&self, id: i64) -> Result<bool> {
        self.deactivate_student_impl(id).await
    }

    // 课程模块
    async fn create_course(&self, course: CreateCourseRequest) -> Result<Course> {
        self.create_course_impl(course).await
    }

    async fn get_course_by_id(&self, id: i64) -> Result<Option<Course>> {
        self.get_course_by_id_impl(id).await
    }

    async fn list_courses_with_pagination(
        &self,
        query: CourseListQuery,
    ) -> Result<CourseListResponse> {
        self.list_courses_with_pagination_impl(query).await
    }

    async fn update_course(&self, id: i64, update: UpdateCourseRequest) -> Result<Option<Course>> {
        self.update_course_impl(id, update).await
    }

    async fn delete_course(&self, id: i64) -> Result<bool> {
        self.delete_course_impl(id).await
    }

    async fn enroll_student(&self, course_id: i64, student_id: i64) -> Result<Enrollment> {
        self.enroll_student_impl(course_id, student_id).await
    }

    async fn unenroll_student(&self, course_id: i64, student_id: i64) -> Result<bool> {
        self.unenroll_student_impl(course_id, student_id).await
    }

    async fn list_course_students(&self, course_id: i64) -> Result<Vec<Student>> {
        self.list_course_students_impl(course_id).await
    }

    // 收费项目模块
    async fn create_fee_service(&self, service: CreateFeeServiceRequest) -> Result<FeeService> {
        self.create_fee_service_impl(service).await
    }

    async fn get_fee_service_by_id(&self, id: i64) -> Result<Option<FeeService>> {
        self.get_fee_service_by_id_impl(id).await
    }

    async fn list_fee_services_with_pagination(
        &self,
        query: FeeServiceListQuery,
    ) -> Result<FeeServiceListResponse> {
        self.list_fee_services_with_pagination_impl(query).await
    }

    async fn update_fee_service(
        &self,
        id: i64,
        update: UpdateFeeServiceRequest,
    ) -> Result<Option<FeeService>> {
        self.update_fee_service_impl(id, update).await
    }

    async fn deactivate_fee_service(&self, id: i64) -> Result<bool> {
        self.deactivate_fee_service_impl(id).await
    }

    // 订阅模块
    async fn create_subscription(
        &self,
        subscription: CreateSubscriptionRequest,
    ) -> Result<Subscription> {
        self.create_subscription_impl(subscription).await
    }

    async fn get_subscription_by_id(&self, id: i64) -> Result<Option<Subscription>> {
        self.get_subscription_by_id_impl(id).await
    }

    async fn end_subscription(&self, id: i64) -> Result<Option<Subscription>> {
        self.end_subscription_impl(id).await
    }

    async fn list_subscriptions(&self, query: SubscriptionListQuery) -> Result<Vec<Subscription>> {
        self.list_subscriptions_impl(query).await
    }

    // 计费模块
    async fn run_billing_for_period(&self, period: &str) -> Result<(i64, i64)> {
        self.run_billing_for_period_impl(period).await
    }

    async fn list_allocations_with_pagination(
        &self,
        query: AllocationListQuery,
    ) -> Result<AllocationListResponse> {
        self.list_allocations_with_pagination_impl(query).await
    }

    async fn get_allocation_by_id(&self, id: i64) -> Result<Option<FeeAllocation>> {
        self.get_allocation_by_id_impl(id).await
    }

    // 缴费模块
    async fn create_payment_with_allocations(&self, payment: NewPayment) -> Result<Payment> {
        self.create_payment_with_allocations_impl(payment).await
    }

    async fn get_payment_by_id(&self, id: i64) -> Result<Option<Payment>> {
        self.get_payment_by_id_impl(id).await
    }

    async fn list_payments_with_pagination(
        &self,
        query: PaymentListQuery,
    ) -> Result<PaymentListResponse> {
        self.list_payments_with_pagination_impl(query).await
    }

    async fn list_allocations_by_payment(&self, payment_id: i64) -> Result<Vec<FeeAllocation>> {
        self.list_allocations_by_payment_impl(payment_id).await
    }

    // 报表模块
    async fn count_active_students(&self) -> Result<i64> {
        self.count_active_students_impl().await
    }

    async fn count_active_families(&self) -> Result<i64> {
        self.count_active_families_impl().await
    }

    async fn sum_outstanding_cents(&self, family_id: Option<i64>) -> Result<i64> {
        self.sum_outstanding_cents_impl(family_id).await
    }

    async fn revenue_by_month(&self, months: u32) -> Result<Vec<RevenuePoint>> {
        self.revenue_by_month_impl(months).await
    }

    async fn outstanding_by_family(&self) -> Result<Vec<OutstandingFamily>> {
        self.outstanding_by_family_impl().await
    }

    // 系统设置模块
    async fn list_all_settings(&self) -> Result<Vec<SystemSetting>> {
        self.list_all_settings_impl().await
    }

    async fn update_setting(
        &self,
        key: &str,
        value: &str,
        updated_by: Option<i64>,
    ) -> Result<Option<SystemSetting>> {
        self.update_setting_impl(key, value, updated_by).await
    }
}
