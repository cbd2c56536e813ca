//! API 集成测试
//!
//! 覆盖认证、角色门禁、家长门户数据范围与模块注册表端点。

use std::sync::{Arc, Once};

use actix_web::http::StatusCode;
use actix_web::test::{self, TestRequest};
use actix_web::{App, web};
use serde_json::Value;
use tempfile::TempDir;

use rust_imsystem_next::cache::ObjectCache;
use rust_imsystem_next::cache::register::get_object_cache_plugin;
use rust_imsystem_next::config::AppConfig;
use rust_imsystem_next::models::AppStartTime;
use rust_imsystem_next::models::families::requests::CreateFamilyRequest;
use rust_imsystem_next::models::students::requests::CreateStudentRequest;
use rust_imsystem_next::models::users::entities::UserRole;
use rust_imsystem_next::models::users::requests::CreateUserRequest;
use rust_imsystem_next::modules::register_builtin_modules;
use rust_imsystem_next::routes;
use rust_imsystem_next::storage::{Storage, create_storage};
use rust_imsystem_next::utils::jwt::JwtUtils;
use rust_imsystem_next::utils::password::hash_password;

// =============================================================================
// 测试环境初始化
// =============================================================================

static INIT: Once = Once::new();
static TEST_DIR: std::sync::OnceLock<TempDir> = std::sync::OnceLock::new();
static ENV: tokio::sync::OnceCell<(Arc<dyn Storage>, Arc<dyn ObjectCache>)> =
    tokio::sync::OnceCell::const_new();

fn init_static_config() {
    INIT.call_once(|| {
        let temp_dir = TempDir::new().expect("创建临时目录失败");
        let db_path = temp_dir.path().join("api_test.db");
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

async fn init_test_env() -> (Arc<dyn Storage>, Arc<dyn ObjectCache>) {
    init_static_config();
    ENV.get_or_init(|| async {
        let storage = create_storage().await.expect("初始化存储失败");

        let constructor = get_object_cache_plugin("moka").expect("moka 插件未注册");
        let cache: Arc<dyn ObjectCache> = Arc::from(constructor().await.expect("创建缓存失败"));

        register_builtin_modules(AppConfig::get());

        (storage, cache)
    })
    .await
    .clone()
}

macro_rules! test_app {
    ($storage:expr, $cache:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new($storage.clone()))
                .app_data(web::Data::new($cache.clone()))
                .app_data(web::Data::new(AppStartTime {
                    start_datetime: chrono::Utc::now(),
                }))
                .configure(routes::configure_auth_routes)
                .configure(routes::configure_user_routes)
                .configure(routes::configure_families_routes)
                .configure(routes::configure_students_routes)
                .configure(routes::configure_reports_routes)
                .configure(routes::configure_modules_routes)
                .configure(routes::configure_system_routes),
        )
        .await
    };
}

async fn create_user_with_password(
    storage: &Arc<dyn Storage>,
    username: &str,
    password: &str,
    role: UserRole,
    family_id: Option<i64>,
) -> i64 {
    let user = storage
        .create_user(CreateUserRequest {
            username: username.to_string(),
            email: format!("{username}@example.com"),
            password: hash_password(password).expect("哈希密码失败"),
            role,
            display_name: None,
            family_id,
            student_id: None,
        })
        .await
        .expect("创建用户失败");
    user.id
}

fn bearer_for(user_id: i64, role: &UserRole) -> String {
    let token =
        JwtUtils::generate_access_token(user_id, &role.to_string()).expect("生成 token 失败");
    format!("Bearer {token}")
}

async fn read_json<B>(resp: actix_web::dev::ServiceResponse<B>) -> Value
where
    B: actix_web::body::MessageBody,
{
    let body = test::read_body(resp).await;
    serde_json::from_slice(&body).expect("响应不是合法 JSON")
}

// =============================================================================
// 系统状态与认证
// =============================================================================

#[actix_rt::test]
async fn test_system_status_is_public() {
    let (storage, cache) = init_test_env().await;
    let app = test_app!(storage, cache);

    let resp = TestRequest::get()
        .uri("/api/v1/system/status")
        .send_request(&app)
        .await;
    assert_eq!(resp.status(), StatusCode::OK);

    let json = read_json(resp).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["code"], "OK");
    assert!(json["data"]["uptime_seconds"].is_i64());
}

#[actix_rt::test]
async fn test_login_and_profile() {
    let (storage, cache) = init_test_env().await;
    let app = test_app!(storage, cache);

    create_user_with_password(&storage, "login_admin", "Sup3rSecret!", UserRole::Admin, None)
        .await;

    // 错误密码返回 401
    let resp = TestRequest::post()
        .uri("/api/v1/auth/login")
        .set_json(serde_json::json!({
            "username": "login_admin",
            "password": "WrongPassword1",
        }))
        .send_request(&app)
        .await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    // 正确密码返回访问令牌
    let resp = TestRequest::post()
        .uri("/api/v1/auth/login")
        .set_json(serde_json::json!({
            "username": "login_admin",
            "password": "Sup3rSecret!",
        }))
        .send_request(&app)
        .await;
    assert_eq!(resp.status(), StatusCode::OK);

    let json = read_json(resp).await;
    assert_eq!(json["success"], true);
    let token = json["data"]["access_token"].as_str().expect("缺少访问令牌");

    // 用令牌访问个人信息
    let resp = TestRequest::get()
        .uri("/api/v1/auth/me")
        .insert_header(("Authorization", format!("Bearer {token}")))
        .send_request(&app)
        .await;
    assert_eq!(resp.status(), StatusCode::OK);

    let json = read_json(resp).await;
    assert_eq!(json["data"]["user"]["username"], "login_admin");
    // 密码哈希绝不能出现在响应里
    assert!(json["data"]["user"].get("password_hash").is_none());
}

#[actix_rt::test]
async fn test_missing_token_is_rejected() {
    let (storage, cache) = init_test_env().await;
    let app = test_app!(storage, cache);

    let resp = TestRequest::get()
        .uri("/api/v1/students")
        .send_request(&app)
        .await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let json = read_json(resp).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["code"], "UNAUTHORIZED");
}

// =============================================================================
// 角色门禁与家长门户范围
// =============================================================================

#[actix_rt::test]
async fn test_parent_cannot_manage_users() {
    let (storage, cache) = init_test_env().await;
    let app = test_app!(storage, cache);

    let parent_id =
        create_user_with_password(&storage, "rbac_parent", "Par3ntPass!", UserRole::Parent, None)
            .await;

    let resp = TestRequest::get()
        .uri("/api/v1/users")
        .insert_header(("Authorization", bearer_for(parent_id, &UserRole::Parent)))
        .send_request(&app)
        .await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
}

#[actix_rt::test]
async fn test_parent_portal_is_scoped_to_own_family() {
    let (storage, cache) = init_test_env().await;
    let app = test_app!(storage, cache);

    let family_a = storage
        .create_family(CreateFamilyRequest {
            family_name: "scope-family-a".to_string(),
            contact_name: None,
            contact_email: None,
            contact_phone: None,
            address: None,
        })
        .await
        .unwrap()
        .id;
    let family_b = storage
        .create_family(CreateFamilyRequest {
            family_name: "scope-family-b".to_string(),
            contact_name: None,
            contact_email: None,
            contact_phone: None,
            address: None,
        })
        .await
        .unwrap()
        .id;

    storage
        .create_student(CreateStudentRequest {
            family_id: family_a,
            first_name: "Alice".to_string(),
            last_name: "Scope".to_string(),
            date_of_birth: None,
        })
        .await
        .unwrap();
    let student_b = storage
        .create_student(CreateStudentRequest {
            family_id: family_b,
            first_name: "Bob".to_string(),
            last_name: "Scope".to_string(),
            date_of_birth: None,
        })
        .await
        .unwrap();

    let parent_id = create_user_with_password(
        &storage,
        "scope_parent",
        "Par3ntPass!",
        UserRole::Parent,
        Some(family_a),
    )
    .await;
    let auth = ("Authorization", bearer_for(parent_id, &UserRole::Parent));

    // 列表只包含本家庭的学生
    let resp = TestRequest::get()
        .uri("/api/v1/students?size=100")
        .insert_header(auth.clone())
        .send_request(&app)
        .await;
    assert_eq!(resp.status(), StatusCode::OK);

    let json = read_json(resp).await;
    let items = json["data"]["items"].as_array().expect("缺少 items");
    assert!(!items.is_empty());
    assert!(
        items
            .iter()
            .all(|item| item["family_id"].as_i64() == Some(family_a))
    );

    // 其他家庭的学生详情被拒绝
    let resp = TestRequest::get()
        .uri(&format!("/api/v1/students/{}", student_b.id))
        .insert_header(auth)
        .send_request(&app)
        .await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
}

// =============================================================================
// 模块注册表
// =============================================================================

#[actix_rt::test]
async fn test_module_registry_endpoints_and_gating() {
    let (storage, cache) = init_test_env().await;
    let app = test_app!(storage, cache);

    let admin_id =
        create_user_with_password(&storage, "module_admin", "Adm1nPass!", UserRole::Admin, None)
            .await;
    let auth = ("Authorization", bearer_for(admin_id, &UserRole::Admin));

    // 模块列表包含全部内置模块
    let resp = TestRequest::get()
        .uri("/api/v1/modules")
        .insert_header(auth.clone())
        .send_request(&app)
        .await;
    assert_eq!(resp.status(), StatusCode::OK);

    let json = read_json(resp).await;
    let names: Vec<&str> = json["data"]["items"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|m| m["name"].as_str())
        .collect();
    assert_eq!(
        names,
        vec!["families", "students", "courses", "billing", "payments", "reports"]
    );

    // billing 被 payments 依赖，不可停用
    let resp = TestRequest::get()
        .uri("/api/v1/modules/billing")
        .insert_header(auth.clone())
        .send_request(&app)
        .await;
    let json = read_json(resp).await;
    assert_eq!(json["data"]["can_disable"], false);
    assert!(
        json["data"]["dependents"]
            .as_array()
            .unwrap()
            .iter()
            .any(|d| d == "payments")
    );

    let resp = TestRequest::put()
        .uri("/api/v1/modules/billing")
        .insert_header(auth.clone())
        .set_json(serde_json::json!({ "enabled": false }))
        .send_request(&app)
        .await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);
    let json = read_json(resp).await;
    assert_eq!(json["code"], "DEPENDENCY_CONFLICT");

    // reports 没有依赖方，可以停用；停用后相关 API 返回 MODULE_DISABLED
    let resp = TestRequest::put()
        .uri("/api/v1/modules/reports")
        .insert_header(auth.clone())
        .set_json(serde_json::json!({ "enabled": false }))
        .send_request(&app)
        .await;
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = TestRequest::get()
        .uri("/api/v1/reports/dashboard")
        .insert_header(auth.clone())
        .send_request(&app)
        .await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    let json = read_json(resp).await;
    assert_eq!(json["code"], "MODULE_DISABLED");

    // 重新启用后恢复
    let resp = TestRequest::put()
        .uri("/api/v1/modules/reports")
        .insert_header(auth.clone())
        .set_json(serde_json::json!({ "enabled": true }))
        .send_request(&app)
        .await;
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = TestRequest::get()
        .uri("/api/v1/reports/dashboard")
        .insert_header(auth)
        .send_request(&app)
        .await;
    assert_eq!(resp.status(), StatusCode::OK);

    // 未知模块返回 404
    let resp = TestRequest::get()
        .uri("/api/v1/modules/ghost_module")
        .insert_header((
            "Authorization",
            bearer_for(admin_id, &UserRole::Admin),
        ))
        .send_request(&app)
        .await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
