//! 存储层集成测试
//!
//! 使用临时 SQLite 数据库覆盖分页边界、唯一约束、软删除幂等、
//! 出账去重与缴费结清等属性。

use std::sync::{Arc, Once};

use tempfile::TempDir;

use rust_imsystem_next::config::AppConfig;
use rust_imsystem_next::errors::IMSystemError;
use rust_imsystem_next::models::billing::entities::AllocationStatus;
use rust_imsystem_next::models::billing::requests::AllocationListQuery;
use rust_imsystem_next::models::families::requests::{CreateFamilyRequest, FamilyListQuery};
use rust_imsystem_next::models::fee_services::requests::CreateFeeServiceRequest;
use rust_imsystem_next::models::payments::entities::PaymentMethod;
use rust_imsystem_next::models::students::requests::CreateStudentRequest;
use rust_imsystem_next::models::subscriptions::requests::CreateSubscriptionRequest;
use rust_imsystem_next::models::users::entities::UserRole;
use rust_imsystem_next::models::users::requests::CreateUserRequest;
use rust_imsystem_next::storage::{NewPayment, Storage, create_storage};

// =============================================================================
// 测试环境初始化
// =============================================================================

static INIT: Once = Once::new();
static TEST_DIR: std::sync::OnceLock<TempDir> = std::sync::OnceLock::new();
static STORAGE: tokio::sync::OnceCell<Arc<dyn Storage>> = tokio::sync::OnceCell::const_new();

fn init_static_config() {
    INIT.call_once(|| {
        let temp_dir = TempDir::new().expect("创建临时目录失败");
        let db_path = temp_dir.path().join("storage_test.db");
        // SAFETY: 在任何读取配置之前的单线程初始化阶段调用
        unsafe {
            std::env::set_var(
                "DATABASE_URL",
                format!("sqlite://{}?mode=rwc", db_path.display()),
            );
        }
        TEST_DIR.set(temp_dir).ok();
        AppConfig::init().expect("初始化配置失败");
    });
}

async fn test_storage() -> Arc<dyn Storage> {
    init_static_config();
    STORAGE
        .get_or_init(|| async { create_storage().await.expect("初始化存储失败") })
        .await
        .clone()
}

async fn create_test_family(storage: &Arc<dyn Storage>, name: &str) -> i64 {
    storage
        .create_family(CreateFamilyRequest {
            family_name: name.to_string(),
            contact_name: None,
            contact_email: None,
            contact_phone: None,
            address: None,
        })
        .await
        .expect("创建家庭失败")
        .id
}

async fn create_test_student(storage: &Arc<dyn Storage>, family_id: i64, name: &str) -> i64 {
    storage
        .create_student(CreateStudentRequest {
            family_id,
            first_name: name.to_string(),
            last_name: "Tester".to_string(),
            date_of_birth: None,
        })
        .await
        .expect("创建学生失败")
        .id
}

// =============================================================================
// 分页边界
// =============================================================================

#[tokio::test]
async fn test_pagination_bounds_are_clamped() {
    let storage = test_storage().await;

    for i in 0..3 {
        create_test_family(&storage, &format!("pagination-family-{i}")).await;
    }

    // size 超过上限被钳制到 100
    let response = storage
        .list_families_with_pagination(FamilyListQuery {
            page: Some(1),
            size: Some(1000),
            search: None,
            include_inactive: None,
            family_id: None,
        })
        .await
        .unwrap();
    assert_eq!(response.pagination.page_size, 100);

    // page 0 被钳制到 1
    let response = storage
        .list_families_with_pagination(FamilyListQuery {
            page: Some(0),
            size: Some(10),
            search: None,
            include_inactive: None,
            family_id: None,
        })
        .await
        .unwrap();
    assert_eq!(response.pagination.page, 1);
}

// =============================================================================
// 唯一约束
// =============================================================================

#[tokio::test]
async fn test_duplicate_username_is_rejected() {
    let storage = test_storage().await;

    let request = |email: &str| CreateUserRequest {
        username: "dup_user_01".to_string(),
        email: email.to_string(),
        password: "not-a-real-hash".to_string(),
        role: UserRole::Teacher,
        display_name: None,
        family_id: None,
        student_id: None,
    };

    storage
        .create_user(request("dup1@example.com"))
        .await
        .expect("第一次创建应成功");

    let err = storage
        .create_user(request("dup2@example.com"))
        .await
        .expect_err("重复用户名应失败");
    assert!(matches!(err, IMSystemError::UniqueViolation(_)));
}

#[tokio::test]
async fn test_duplicate_fee_service_name_is_rejected() {
    let storage = test_storage().await;

    let request = CreateFeeServiceRequest {
        service_name: "dup-tuition".to_string(),
        description: None,
        monthly_price_cents: 50_000,
    };

    storage
        .create_fee_service(CreateFeeServiceRequest {
            service_name: request.service_name.clone(),
            description: None,
            monthly_price_cents: 50_000,
        })
        .await
        .unwrap();

    let err = storage
        .create_fee_service(request)
        .await
        .expect_err("重复项目名应失败");
    assert!(matches!(err, IMSystemError::UniqueViolation(_)));
}

// =============================================================================
// 学生必须属于已存在的家庭 / 软删除幂等
// =============================================================================

#[tokio::test]
async fn test_student_requires_existing_family() {
    let storage = test_storage().await;

    let err = storage
        .create_student(CreateStudentRequest {
            family_id: 99_999_999,
            first_name: "Ghost".to_string(),
            last_name: "Student".to_string(),
            date_of_birth: None,
        })
        .await
        .expect_err("不存在的家庭应失败");
    assert!(matches!(err, IMSystemError::ForeignKeyViolation(_)));
}

#[tokio::test]
async fn test_student_soft_delete_is_idempotent() {
    let storage = test_storage().await;

    let family_id = create_test_family(&storage, "softdelete-family").await;
    let student_id = create_test_student(&storage, family_id, "Softie").await;

    assert!(storage.deactivate_student(student_id).await.unwrap());

    let student = storage
        .get_student_by_id(student_id)
        .await
        .unwrap()
        .expect("软删除后记录仍然存在");
    assert!(!student.is_active);

    // 重复删除同样成功，状态不变
    assert!(storage.deactivate_student(student_id).await.unwrap());
    let student = storage.get_student_by_id(student_id).await.unwrap().unwrap();
    assert!(!student.is_active);

    // 不存在的学生返回 false
    assert!(!storage.deactivate_student(88_888_888).await.unwrap());
}

// =============================================================================
// 出账与缴费
// =============================================================================

#[tokio::test]
async fn test_billing_run_creates_one_allocation_per_subscription_per_period() {
    let storage = test_storage().await;

    let family_id = create_test_family(&storage, "billing-family").await;
    let student_id = create_test_student(&storage, family_id, "Billie").await;

    let service = storage
        .create_fee_service(CreateFeeServiceRequest {
            service_name: "billing-lunch".to_string(),
            description: None,
            monthly_price_cents: 3_333,
        })
        .await
        .unwrap();

    storage
        .create_subscription(CreateSubscriptionRequest {
            student_id,
            fee_service_id: service.id,
            discount_percent: 10,
        })
        .await
        .unwrap();

    let period = "2031-01";
    storage.run_billing_for_period(period).await.unwrap();
    // 重复出账不产生新分摊
    storage.run_billing_for_period(period).await.unwrap();

    let allocations = storage
        .list_allocations_with_pagination(AllocationListQuery {
            page: None,
            size: None,
            family_id: Some(family_id),
            student_id: None,
            status: None,
            period: Some(period.to_string()),
        })
        .await
        .unwrap();

    assert_eq!(allocations.items.len(), 1);
    let allocation = &allocations.items[0];
    assert_eq!(allocation.gross_amount_cents, 3_333);
    assert_eq!(allocation.discount_amount_cents, 333);
    assert_eq!(allocation.net_amount_cents, 3_000);
    assert_eq!(
        allocation.net_amount_cents,
        allocation.gross_amount_cents - allocation.discount_amount_cents
    );
    assert_eq!(allocation.status, AllocationStatus::Pending);
}

#[tokio::test]
async fn test_payment_settlement_is_atomic_and_amount_checked() {
    let storage = test_storage().await;

    let family_id = create_test_family(&storage, "payment-family").await;
    let student_id = create_test_student(&storage, family_id, "Payer").await;

    let service = storage
        .create_fee_service(CreateFeeServiceRequest {
            service_name: "payment-tuition".to_string(),
            description: None,
            monthly_price_cents: 20_000,
        })
        .await
        .unwrap();

    storage
        .create_subscription(CreateSubscriptionRequest {
            student_id,
            fee_service_id: service.id,
            discount_percent: 0,
        })
        .await
        .unwrap();

    let period = "2032-02";
    storage.run_billing_for_period(period).await.unwrap();

    let allocations = storage
        .list_allocations_with_pagination(AllocationListQuery {
            page: None,
            size: None,
            family_id: Some(family_id),
            student_id: None,
            status: Some(AllocationStatus::Pending),
            period: Some(period.to_string()),
        })
        .await
        .unwrap();
    assert_eq!(allocations.items.len(), 1);
    let allocation_id = allocations.items[0].id;

    // 金额不符被整体拒绝
    let err = storage
        .create_payment_with_allocations(NewPayment {
            family_id,
            amount_cents: 19_999,
            method: PaymentMethod::Cash,
            reference: "PAY-TESTBAD001".to_string(),
            note: None,
            allocation_ids: vec![allocation_id],
            created_by: None,
        })
        .await
        .expect_err("金额不符应失败");
    assert!(matches!(err, IMSystemError::PaymentMismatch(_)));

    // 金额不符的缴费不应产生任何变更
    let allocation = storage
        .get_allocation_by_id(allocation_id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(allocation.status, AllocationStatus::Pending);
    assert!(allocation.payment_id.is_none());

    // 金额一致则结清
    let payment = storage
        .create_payment_with_allocations(NewPayment {
            family_id,
            amount_cents: 20_000,
            method: PaymentMethod::Transfer,
            reference: "PAY-TESTGOOD01".to_string(),
            note: Some("February tuition".to_string()),
            allocation_ids: vec![allocation_id],
            created_by: None,
        })
        .await
        .unwrap();

    let allocation = storage
        .get_allocation_by_id(allocation_id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(allocation.status, AllocationStatus::Paid);
    assert_eq!(allocation.payment_id, Some(payment.id));

    // 已结清的分摊不能再次结清
    let err = storage
        .create_payment_with_allocations(NewPayment {
            family_id,
            amount_cents: 20_000,
            method: PaymentMethod::Cash,
            reference: "PAY-TESTDUP001".to_string(),
            note: None,
            allocation_ids: vec![allocation_id],
            created_by: None,
        })
        .await
        .expect_err("重复结清应失败");
    assert!(matches!(err, IMSystemError::Validation(_)));

    // 缴费详情包含结清的分摊
    let settled = storage.list_allocations_by_payment(payment.id).await.unwrap();
    assert_eq!(settled.len(), 1);
    assert_eq!(settled[0].id, allocation_id);
}

#[tokio::test]
async fn test_outstanding_sum_tracks_pending_allocations() {
    let storage = test_storage().await;

    let family_id = create_test_family(&storage, "outstanding-family").await;
    let student_id = create_test_student(&storage, family_id, "Owen").await;

    let service = storage
        .create_fee_service(CreateFeeServiceRequest {
            service_name: "outstanding-club".to_string(),
            description: None,
            monthly_price_cents: 7_500,
        })
        .await
        .unwrap();

    storage
        .create_subscription(CreateSubscriptionRequest {
            student_id,
            fee_service_id: service.id,
            discount_percent: 0,
        })
        .await
        .unwrap();

    storage.run_billing_for_period("2033-03").await.unwrap();

    let outstanding = storage.sum_outstanding_cents(Some(family_id)).await.unwrap();
    assert_eq!(outstanding, 7_500);
}
