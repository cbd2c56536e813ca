use super::SeaOrmStorage;
use crate::entity::families;
use crate::entity::students::{ActiveModel, Column, Entity as Students};
use crate::errors::{IMSystemError, Result};
use crate::models::{
    PaginationInfo,
    common::pagination::{clamp_page, clamp_size},
    students::{
        entities::Student,
        requests::{CreateStudentRequest, StudentListQuery, UpdateStudentRequest},
        responses::StudentListResponse,
    },
};
use crate::utils::escape_like_pattern;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    Set,
};

impl SeaOrmStorage {
    /// 创建学生，家庭必须存在且未停用
    pub async fn create_student_impl(&self, req: CreateStudentRequest) -> Result<Student> {
        let family = families::Entity::find_by_id(req.family_id)
            .one(&self.db)
            .await?;

        match family {
            None => {
                return Err(IMSystemError::foreign_key_violation(format!(
                    "家庭 {} 不存在",
                    req.family_id
                )));
            }
            Some(f) if !f.is_active => {
                return Err(IMSystemError::validation(format!(
                    "家庭 {} 已停用，无法添加学生",
                    req.family_id
                )));
            }
            Some(_) => {}
        }

        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            family_id: Set(req.family_id),
            first_name: Set(req.first_name),
            last_name: Set(req.last_name),
            date_of_birth: Set(req.date_of_birth),
            enrolled_at: Set(now),
            is_active: Set(true),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model.insert(&self.db).await?;
        Ok(result.into_student())
    }

    /// 通过 ID 获取学生
    pub async fn get_student_by_id_impl(&self, id: i64) -> Result<Option<Student>> {
        let result = Students::find_by_id(id).one(&self.db).await?;
        Ok(result.map(|m| m.into_student()))
    }

    /// 分页列出学生
    pub async fn list_students_with_pagination_impl(
        &self,
        query: StudentListQuery,
    ) -> Result<StudentListResponse> {
        let page = clamp_page(query.page);
        let size = clamp_size(query.size);

        let mut select = Students::find();

        if let Some(family_id) = query.family_id {
            select = select.filter(Column::FamilyId.eq(family_id));
        }

        // 默认只返回在读学生
        if !query.include_inactive.unwrap_or(false) {
            select = select.filter(Column::IsActive.eq(true));
        }

        if let Some(ref search) = query.search
            && !search.trim().is_empty()
        {
            let escaped = escape_like_pattern(search.trim());
            select = select.filter(
                Condition::any()
                    .add(Column::FirstName.contains(&escaped))
                    .add(Column::LastName.contains(&escaped)),
            );
        }

        select = select.order_by_desc(Column::CreatedAt);

        let paginator = select.paginate(&self.db, size);
        let total = paginator.num_items().await?;
        let pages = paginator.num_pages().await?;
        let students = paginator.fetch_page(page - 1).await?;

        Ok(StudentListResponse {
            items: students.into_iter().map(|m| m.into_student()).collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 更新学生信息
    pub async fn update_student_impl(
        &self,
        id: i64,
        update: UpdateStudentRequest,
    ) -> Result<Option<Student>> {
        let existing = self.get_student_by_id_impl(id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        // 换家庭时校验目标家庭
        if let Some(family_id) = update.family_id {
            let family = families::Entity::find_by_id(family_id).one(&self.db).await?;
            if family.is_none() {
                return Err(IMSystemError::foreign_key_violation(format!(
                    "家庭 {} 不存在",
                    family_id
                )));
            }
        }

        let now = chrono::Utc::now().timestamp();

        let mut model = ActiveModel {
            id: Set(id),
            updated_at: Set(now),
            ..Default::default()
        };

        if let Some(family_id) = update.family_id {
            model.family_id = Set(family_id);
        }
        if let Some(first_name) = update.first_name {
            model.first_name = Set(first_name);
        }
        if let Some(last_name) = update.last_name {
            model.last_name = Set(last_name);
        }
        if let Some(date_of_birth) = update.date_of_birth {
            model.date_of_birth = Set(Some(date_of_birth));
        }

        let updated = model.update(&self.db).await?;
        Ok(Some(updated.into_student()))
    }

    /// 软删除学生：仅置 is_active = false，重复删除同样返回成功
    pub async fn deactivate_student_impl(&self, id: i64) -> Result<bool> {
        let existing = Students::find_by_id(id).one(&self.db).await?;
        let Some(existing) = existing else {
            return Ok(false);
        };

        if existing.is_active {
            let now = chrono::Utc::now().timestamp();
            let model = ActiveModel {
                id: Set(id),
                is_active: Set(false),
                updated_at: Set(now),
                ..Default::default()
            };
            model.update(&self.db).await?;
        }

        Ok(true)
    }
}
