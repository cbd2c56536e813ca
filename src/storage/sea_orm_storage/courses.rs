use super::SeaOrmStorage;
use crate::entity::courses::{ActiveModel, Column, Entity as Courses};
use crate::entity::enrollments;
use crate::entity::students;
use crate::errors::{IMSystemError, Result};
use crate::models::{
    PaginationInfo,
    common::pagination::{clamp_page, clamp_size},
    courses::{
        entities::{Course, Enrollment},
        requests::{CourseListQuery, CreateCourseRequest, UpdateCourseRequest},
        responses::CourseListResponse,
    },
    students::entities::Student,
};
use crate::utils::escape_like_pattern;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    /// 创建课程
    pub async fn create_course_impl(&self, req: CreateCourseRequest) -> Result<Course> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            course_name: Set(req.course_name),
            description: Set(req.description),
            teacher_id: Set(req.teacher_id),
            capacity: Set(req.capacity),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model.insert(&self.db).await?;
        Ok(result.into_course())
    }

    /// 通过 ID 获取课程
    pub async fn get_course_by_id_impl(&self, id: i64) -> Result<Option<Course>> {
        let result = Courses::find_by_id(id).one(&self.db).await?;
        Ok(result.map(|m| m.into_course()))
    }

    /// 分页列出课程
    pub async fn list_courses_with_pagination_impl(
        &self,
        query: CourseListQuery,
    ) -> Result<CourseListResponse> {
        let page = clamp_page(query.page);
        let size = clamp_size(query.size);

        let mut select = Courses::find();

        if let Some(teacher_id) = query.teacher_id {
            select = select.filter(Column::TeacherId.eq(teacher_id));
        }

        if let Some(ref search) = query.search
            && !search.trim().is_empty()
        {
            let escaped = escape_like_pattern(search.trim());
            select = select.filter(Column::CourseName.contains(&escaped));
        }

        select = select.order_by_desc(Column::CreatedAt);

        let paginator = select.paginate(&self.db, size);
        let total = paginator.num_items().await?;
        let pages = paginator.num_pages().await?;
        let courses = paginator.fetch_page(page - 1).await?;

        Ok(CourseListResponse {
            items: courses.into_iter().map(|m| m.into_course()).collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 更新课程信息
    pub async fn update_course_impl(
        &self,
        id: i64,
        update: UpdateCourseRequest,
    ) -> Result<Option<Course>> {
        let existing = self.get_course_by_id_impl(id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

        let mut model = ActiveModel {
            id: Set(id),
            updated_at: Set(now),
            ..Default::default()
        };

        if let Some(course_name) = update.course_name {
            model.course_name = Set(course_name);
        }
        if let Some(description) = update.description {
            model.description = Set(Some(description));
        }
        if let Some(teacher_id) = update.teacher_id {
            model.teacher_id = Set(Some(teacher_id));
        }
        if let Some(capacity) = update.capacity {
            model.capacity = Set(Some(capacity));
        }

        let updated = model.update(&self.db).await?;
        Ok(Some(updated.into_course()))
    }

    /// 删除课程（选课记录级联删除）
    pub async fn delete_course_impl(&self, id: i64) -> Result<bool> {
        let result = Courses::delete_by_id(id).exec(&self.db).await?;
        Ok(result.rows_affected > 0)
    }

    /// 学生选课：学生必须在读，且不超过课程容量
    pub async fn enroll_student_impl(&self, course_id: i64, student_id: i64) -> Result<Enrollment> {
        let course = Courses::find_by_id(course_id)
            .one(&self.db)
            .await?
            .ok_or_else(|| IMSystemError::not_found(format!("课程 {course_id} 不存在")))?;

        let student = students::Entity::find_by_id(student_id)
            .one(&self.db)
            .await?
            .ok_or_else(|| IMSystemError::not_found(format!("学生 {student_id} 不存在")))?;

        if !student.is_active {
            return Err(IMSystemError::validation(format!(
                "学生 {student_id} 已停用，无法选课"
            )));
        }

        if let Some(capacity) = course.capacity {
            let enrolled = enrollments::Entity::find()
                .filter(enrollments::Column::CourseId.eq(course_id))
                .count(&self.db)
                .await?;
            if enrolled >= capacity as u64 {
                return Err(IMSystemError::validation(format!(
                    "课程 {course_id} 已满员（容量 {capacity}）"
                )));
            }
        }

        let now = chrono::Utc::now().timestamp();
        let model = enrollments::ActiveModel {
            course_id: Set(course_id),
            student_id: Set(student_id),
            enrolled_at: Set(now),
            ..Default::default()
        };

        let result = model.insert(&self.db).await?;
        Ok(result.into_enrollment())
    }

    /// 学生退课
    pub async fn unenroll_student_impl(&self, course_id: i64, student_id: i64) -> Result<bool> {
        let result = enrollments::Entity::delete_many()
            .filter(enrollments::Column::CourseId.eq(course_id))
            .filter(enrollments::Column::StudentId.eq(student_id))
            .exec(&self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// 课程名册：已选课学生，按选课时间排序
    pub async fn list_course_students_impl(&self, course_id: i64) -> Result<Vec<Student>> {
        let rows = enrollments::Entity::find()
            .filter(enrollments::Column::CourseId.eq(course_id))
            .find_also_related(students::Entity)
            .order_by_asc(enrollments::Column::EnrolledAt)
            .all(&self.db)
            .await?;

        Ok(rows
            .into_iter()
            .filter_map(|(_, student)| student.map(|s| s.into_student()))
            .collect())
    }
}
