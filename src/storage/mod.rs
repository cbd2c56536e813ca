use std::sync::Arc;

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
        entities::{Payment, PaymentMethod},
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

use crate::errors::Result;

pub mod sea_orm_storage;

/// 缴费录入参数（凭证号与录入人由服务层生成）
#[derive(Debug, Clone)]
pub struct NewPayment {
    pub family_id: i64,
    pub amount_cents: i64,
    pub method: PaymentMethod,
    pub reference: String,
    pub note: Option<String>,
    pub allocation_ids: Vec<i64>,
    pub created_by: Option<i64>,
}

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 用户管理方法
    // 创建用户
    async fn create_user(&self, user: CreateUserRequest) -> Result<User>;
    // 通过ID获取用户信息
    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>>;
    // 通过用户名或邮箱获取用户信息
    async fn get_user_by_username_or_email(&self, identifier: &str) -> Result<Option<User>>;
    // 列出用户
    async fn list_users_with_pagination(&self, query: UserListQuery) -> Result<UserListResponse>;
    // 更新用户信息
    async fn update_user(&self, id: i64, update: UpdateUserRequest) -> Result<Option<User>>;
    // 删除用户
    async fn delete_user(&self, id: i64) -> Result<bool>;
    // 更新用户最后登录时间
    async fn update_last_login(&self, id: i64) -> Result<bool>;
    // 统计用户总数
    async fn count_users(&self) -> Result<u64>;

    /// 家庭管理方法
    // 创建家庭
    async fn create_family(&self, family: CreateFamilyRequest) -> Result<Family>;
    // 通过ID获取家庭信息
    async fn get_family_by_id(&self, id: i64) -> Result<Option<Family>>;
    // 列出家庭
    async fn list_families_with_pagination(
        &self,
        query: FamilyListQuery,
    ) -> Result<FamilyListResponse>;
    // 更新家庭信息
    async fn update_family(&self, id: i64, update: UpdateFamilyRequest) -> Result<Option<Family>>;
    // 软删除家庭（置 is_active = false，幂等）
    async fn deactivate_family(&self, id: i64) -> Result<bool>;
    // 列出家庭内学生
    async fn list_students_by_family(&self, family_id: i64) -> Result<Vec<Student>>;

    /// 学生管理方法
    // 创建学生，家庭必须存在
    async fn create_student(&self, student: CreateStudentRequest) -> Result<Student>;
    // 通过ID获取学生信息
    async fn get_student_by_id(&self, id: i64) -> Result<Option<Student>>;
    // 列出学生
    async fn list_students_with_pagination(
        &self,
        query: StudentListQuery,
    ) -> Result<StudentListResponse>;
    // 更新学生信息
    async fn update_student(
        &self,
        id: i64,
        update: UpdateStudentRequest,
    ) -> Result<Option<Student>>;
    // 软删除学生（置 is_active = false，幂等）
    async fn deactivate_student(&self, id: i64) -> Result<bool>;

    /// 课程管理方法
    // 创建课程
    async fn create_course(&self, course: CreateCourseRequest) -> Result<Course>;
    // 通过ID获取课程信息
    async fn get_course_by_id(&self, id: i64) -> Result<Option<Course>>;
    // 列出课程
    async fn list_courses_with_pagination(
        &self,
        query: CourseListQuery,
    ) -> Result<CourseListResponse>;
    // 更新课程信息
    async fn update_course(&self, id: i64, update: UpdateCourseRequest) -> Result<Option<Course>>;
    // 删除课程（连带删除选课记录）
    async fn delete_course(&self, id: i64) -> Result<bool>;
    // 学生选课
    async fn enroll_student(&self, course_id: i64, student_id: i64) -> Result<Enrollment>;
    // 学生退课
    async fn unenroll_student(&self, course_id: i64, student_id: i64) -> Result<bool>;
    // 课程名册
    async fn list_course_students(&self, course_id: i64) -> Result<Vec<Student>>;

    /// 收费项目管理方法
    // 创建收费项目，名称唯一
    async fn create_fee_service(&self, service: CreateFeeServiceRequest) -> Result<FeeService>;
    // 通过ID获取收费项目
    async fn get_fee_service_by_id(&self, id: i64) -> Result<Option<FeeService>>;
    // 列出收费项目
    async fn list_fee_services_with_pagination(
        &self,
        query: FeeServiceListQuery,
    ) -> Result<FeeServiceListResponse>;
    // 更新收费项目
    async fn update_fee_service(
        &self,
        id: i64,
        update: UpdateFeeServiceRequest,
    ) -> Result<Option<FeeService>>;
    // 停用收费项目
    async fn deactivate_fee_service(&self, id: i64) -> Result<bool>;

    /// 订阅管理方法
    // 创建订阅
    async fn create_subscription(
        &self,
        subscription: CreateSubscriptionRequest,
    ) -> Result<Subscription>;
    // 通过ID获取订阅
    async fn get_subscription_by_id(&self, id: i64) -> Result<Option<Subscription>>;
    // 结束订阅（置 ended_at，幂等）
    async fn end_subscription(&self, id: i64) -> Result<Option<Subscription>>;
    // 列出订阅
    async fn list_subscriptions(&self, query: SubscriptionListQuery) -> Result<Vec<Subscription>>;

    /// 计费方法
    // 为账期生成分摊，返回 (新建数, 跳过数)；同一订阅同一账期只生成一次
    async fn run_billing_for_period(&self, period: &str) -> Result<(i64, i64)>;
    // 列出分摊
    async fn list_allocations_with_pagination(
        &self,
        query: AllocationListQuery,
    ) -> Result<AllocationListResponse>;
    // 通过ID获取分摊
    async fn get_allocation_by_id(&self, id: i64) -> Result<Option<FeeAllocation>>;

    /// 缴费方法
    // 事务性录入缴费并结清分摊，金额必须等于分摊净额之和
    async fn create_payment_with_allocations(&self, payment: NewPayment) -> Result<Payment>;
    // 通过ID获取缴费记录
    async fn get_payment_by_id(&self, id: i64) -> Result<Option<Payment>>;
    // 列出缴费记录
    async fn list_payments_with_pagination(
        &self,
        query: PaymentListQuery,
    ) -> Result<PaymentListResponse>;
    // 缴费结清的分摊明细
    async fn list_allocations_by_payment(&self, payment_id: i64) -> Result<Vec<FeeAllocation>>;

    /// 报表方法
    // 活跃学生数
    async fn count_active_students(&self) -> Result<i64>;
    // 活跃家庭数
    async fn count_active_families(&self) -> Result<i64>;
    // 待缴净额合计，可限定单个家庭
    async fn sum_outstanding_cents(&self, family_id: Option<i64>) -> Result<i64>;
    // 按月营收（含当月在内最近 N 个月）
    async fn revenue_by_month(&self, months: u32) -> Result<Vec<RevenuePoint>>;
    // 家庭欠费汇总，按欠费金额降序
    async fn outstanding_by_family(&self) -> Result<Vec<OutstandingFamily>>;

    /// 系统设置方法
    // 列出全部设置
    async fn list_all_settings(&self) -> Result<Vec<SystemSetting>>;
    // 更新设置值
    async fn update_setting(
        &self,
        key: &str,
        value: &str,
        updated_by: Option<i64>,
    ) -> Result<Option<SystemSetting>>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
