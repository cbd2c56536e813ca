use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::courses::requests::{
    CourseQueryParams, CreateCourseRequest, EnrollStudentRequest, UpdateCourseRequest,
};
use crate::models::users::entities::UserRole;
use crate::services::CourseService;
use crate::utils::{SafeCourseIdI64, SafeIDI64};

// 懒加载的全局 CourseService 实例
static COURSE_SERVICE: Lazy<CourseService> = Lazy::new(CourseService::new_lazy);

// HTTP处理程序
pub async fn list_courses(
    req: HttpRequest,
    query: web::Query<CourseQueryParams>,
) -> ActixResult<HttpResponse> {
    COURSE_SERVICE.list_courses(query.into_inner(), &req).await
}

pub async fn create_course(
    req: HttpRequest,
    course_data: web::Json<CreateCourseRequest>,
) -> ActixResult<HttpResponse> {
    COURSE_SERVICE
        .create_course(course_data.into_inner(), &req)
        .await
}

pub async fn get_course(req: HttpRequest, course_id: SafeCourseIdI64) -> ActixResult<HttpResponse> {
    COURSE_SERVICE.get_course(course_id.0, &req).await
}

pub async fn update_course(
    req: HttpRequest,
    course_id: SafeCourseIdI64,
    update_data: web::Json<UpdateCourseRequest>,
) -> ActixResult<HttpResponse> {
    COURSE_SERVICE
        .update_course(course_id.0, update_data.into_inner(), &req)
        .await
}

pub async fn delete_course(
    req: HttpRequest,
    course_id: SafeCourseIdI64,
) -> ActixResult<HttpResponse> {
    COURSE_SERVICE.delete_course(course_id.0, &req).await
}

pub async fn course_roster(
    req: HttpRequest,
    course_id: SafeCourseIdI64,
) -> ActixResult<HttpResponse> {
    COURSE_SERVICE.course_roster(course_id.0, &req).await
}

pub async fn enroll_student(
    req: HttpRequest,
    course_id: SafeCourseIdI64,
    enroll_data: web::Json<EnrollStudentRequest>,
) -> ActixResult<HttpResponse> {
    COURSE_SERVICE
        .enroll_student(course_id.0, enroll_data.into_inner().student_id, &req)
        .await
}

pub async fn unenroll_student(
    req: HttpRequest,
    course_id: SafeCourseIdI64,
    student_id: SafeIDI64,
) -> ActixResult<HttpResponse> {
    COURSE_SERVICE
        .unenroll_student(course_id.0, student_id.0, &req)
        .await
}

// 配置路由
pub fn configure_courses_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/courses")
            .wrap(middlewares::RequireModule::new("courses"))
            .wrap(middlewares::RequireJWT)
            .service(
                web::scope("")
                    // 课程管理对教师和管理员开放，教师只能操作自己的课程（服务层校验）
                    .wrap(middlewares::RequireRole::new_any(UserRole::staff_roles()))
                    .route("", web::get().to(list_courses))
                    .route("", web::post().to(create_course))
                    .route("/{course_id}", web::get().to(get_course))
                    .route("/{course_id}", web::put().to(update_course))
                    .route("/{course_id}", web::delete().to(delete_course))
                    .route("/{course_id}/students", web::get().to(course_roster))
                    .route("/{course_id}/students", web::post().to(enroll_student))
                    .route(
                        "/{course_id}/students/{id}",
                        web::delete().to(unenroll_student),
                    ),
            ),
    );
}
