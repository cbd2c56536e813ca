use super::SeaOrmStorage;
use crate::entity::system_settings::{ActiveModel, Column, Entity as SystemSettings};
use crate::errors::Result;
use crate::models::system::entities::SystemSetting;
use sea_orm::{ActiveModelTrait, EntityTrait, QueryOrder, Set};

impl SeaOrmStorage {
    /// 列出全部系统设置
    pub async fn list_all_settings_impl(&self) -> Result<Vec<SystemSetting>> {
        let rows = SystemSettings::find()
            .order_by_asc(Column::Key)
            .all(&self.db)
            .await?;

        Ok(rows.into_iter().map(|m| m.into_setting()).collect())
    }

    /// 更新设置值；键不存在时返回 None（设置项由迁移预置，不允许新增）
    pub async fn update_setting_impl(
        &self,
        key: &str,
        value: &str,
        updated_by: Option<i64>,
    ) -> Result<Option<SystemSetting>> {
        let existing = SystemSettings::find_by_id(key.to_string())
            .one(&self.db)
            .await?;
        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();
        let model = ActiveModel {
            key: Set(key.to_string()),
            value: Set(value.to_string()),
            updated_at: Set(now),
            updated_by: Set(updated_by),
            ..Default::default()
        };

        let updated = model.update(&self.db).await?;
        Ok(Some(updated.into_setting()))
    }
}
