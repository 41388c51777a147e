use sea_orm::{ActiveValue::Set, DatabaseConnection, EntityTrait, sea_query::OnConflict};
use tracing::error;
use uuid::Uuid;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        nutrition::{entities::UserProfile, ports::UserProfileRepository},
    },
    entity::user_profiles::{ActiveModel, Column, Entity},
    infrastructure::nutrition::mappers::{sex_as_str, weight_unit_as_str},
};

#[derive(Debug, Clone)]
pub struct PostgresUserProfileRepository {
    pub db: DatabaseConnection,
}

impl PostgresUserProfileRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl UserProfileRepository for PostgresUserProfileRepository {
    async fn upsert(&self, profile: UserProfile) -> Result<UserProfile, CoreError> {
        let active_model = ActiveModel {
            id: Set(profile.id),
            age: Set(profile.personal_info.age),
            height_cm: Set(profile.personal_info.height_cm),
            weight: Set(profile.personal_info.weight.value),
            weight_unit: Set(weight_unit_as_str(profile.personal_info.weight.unit).to_string()),
            sex: Set(sex_as_str(profile.personal_info.sex).to_string()),
            diabetes: Set(profile.conditions.diabetes),
            high_bp: Set(profile.conditions.high_bp),
            high_cholesterol: Set(profile.conditions.high_cholesterol),
            vegetarian: Set(profile.dietary.vegetarian),
            vegan: Set(profile.dietary.vegan),
            low_sodium: Set(profile.dietary.low_sodium),
            low_carb: Set(profile.dietary.low_carb),
            created_at: Set(profile.created_at.fixed_offset()),
            updated_at: Set(profile.updated_at.fixed_offset()),
        };

        let created = Entity::insert(active_model)
            .on_conflict(
                OnConflict::column(Column::Id)
                    .update_columns([
                        Column::Age,
                        Column::HeightCm,
                        Column::Weight,
                        Column::WeightUnit,
                        Column::Sex,
                        Column::Diabetes,
                        Column::HighBp,
                        Column::HighCholesterol,
                        Column::Vegetarian,
                        Column::Vegan,
                        Column::LowSodium,
                        Column::LowCarb,
                        Column::UpdatedAt,
                    ])
                    .to_owned(),
            )
            .exec_with_returning(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to upsert user profile: {}", e);
                CoreError::InternalServerError
            })?;

        UserProfile::try_from(&created)
    }

    async fn get_by_user(&self, user_id: Uuid) -> Result<Option<UserProfile>, CoreError> {
        let profile = Entity::find_by_id(user_id)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get user profile: {}", e);
                CoreError::InternalServerError
            })?;

        profile.map(|m| UserProfile::try_from(&m)).transpose()
    }
}
