use super::SeaOrmStorage;
use crate::entity::families::{ActiveModel, Column, Entity as Families};
use crate::entity::students;
use crate::errors::Result;
use crate::models::{
    PaginationInfo,
    common::pagination::{clamp_page, clamp_size},
    families::{
        entities::Family,
        requests::{CreateFamilyRequest, FamilyListQuery, UpdateFamilyRequest},
        responses::FamilyListResponse,
    },
    students::entities::Student,
};
use crate::utils::escape_like_pattern;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    Set,
};

impl SeaOrmStorage {
    /// 创建家庭
    pub async fn create_family_impl(&self, req: CreateFamilyRequest) -> Result<Family> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            family_name: Set(req.family_name),
            contact_name: Set(req.contact_name),
            contact_email: Set(req.contact_email),
            contact_phone: Set(req.contact_phone),
            address: Set(req.address),
            is_active: Set(true),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model.insert(&self.db).await?;
        Ok(result.into_family())
    }

    /// 通过 ID 获取家庭
    pub async fn get_family_by_id_impl(&self, id: i64) -> Result<Option<Family>> {
        let result = Families::find_by_id(id).one(&self.db).await?;
        Ok(result.map(|m| m.into_family()))
    }

    /// 分页列出家庭
    pub async fn list_families_with_pagination_impl(
        &self,
        query: FamilyListQuery,
    ) -> Result<FamilyListResponse> {
        let page = clamp_page(query.page);
        let size = clamp_size(query.size);

        let mut select = Families::find();

        // 家长门户限定单个家庭
        if let Some(family_id) = query.family_id {
            select = select.filter(Column::Id.eq(family_id));
        }

        // 默认只返回未停用的家庭
        if !query.include_inactive.unwrap_or(false) {
            select = select.filter(Column::IsActive.eq(true));
        }

        if let Some(ref search) = query.search
            && !search.trim().is_empty()
        {
            let escaped = escape_like_pattern(search.trim());
            select = select.filter(
                Condition::any()
                    .add(Column::FamilyName.contains(&escaped))
                    .add(Column::ContactName.contains(&escaped))
                    .add(Column::ContactEmail.contains(&escaped)),
            );
        }

        select = select.order_by_desc(Column::CreatedAt);

        let paginator = select.paginate(&self.db, size);
        let total = paginator.num_items().await?;
        let pages = paginator.num_pages().await?;
        let families = paginator.fetch_page(page - 1).await?;

        Ok(FamilyListResponse {
            items: families.into_iter().map(|m| m.into_family()).collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 更新家庭信息
    pub async fn update_family_impl(
        &self,
        id: i64,
        update: UpdateFamilyRequest,
    ) -> Result<Option<Family>> {
        let existing = self.get_family_by_id_impl(id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

        let mut model = ActiveModel {
            id: Set(id),
            updated_at: Set(now),
            ..Default::default()
        };

        if let Some(family_name) = update.family_name {
            model.family_name = Set(family_name);
        }
        if let Some(contact_name) = update.contact_name {
            model.contact_name = Set(Some(contact_name));
        }
        if let Some(contact_email) = update.contact_email {
            model.contact_email = Set(Some(contact_email));
        }
        if let Some(contact_phone) = update.contact_phone {
            model.contact_phone = Set(Some(contact_phone));
        }
        if let Some(address) = update.address {
            model.address = Set(Some(address));
        }

        let updated = model.update(&self.db).await?;
        Ok(Some(updated.into_family()))
    }

    /// 软删除家庭：仅置 is_active = false，重复停用同样返回成功
    pub async fn deactivate_family_impl(&self, id: i64) -> Result<bool> {
        let existing = Families::find_by_id(id).one(&self.db).await?;
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

    /// 列出家庭内学生（含已停用学生）
    pub async fn list_students_by_family_impl(&self, family_id: i64) -> Result<Vec<Student>> {
        let rows = students::Entity::find()
            .filter(students::Column::FamilyId.eq(family_id))
            .order_by_asc(students::Column::Id)
            .all(&self.db)
            .await?;

        Ok(rows.into_iter().map(|m| m.into_student()).collect())
    }
}
