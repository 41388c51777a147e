use std::future::Future;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    nutrition::{
        entities::UserProfile,
        value_objects::{NutritionTargets, UpdateProfileInput},
    },
};

/// Repository trait for user health profiles
#[cfg_attr(test, mockall::automock)]
pub trait UserProfileRepository: Send + Sync {
    fn upsert(
        &self,
        profile: UserProfile,
    ) -> impl Future<Output = Result<UserProfile, CoreError>> + Send;

    fn get_by_user(
        &self,
        user_id: Uuid,
    ) -> impl Future<Output = Result<Option<UserProfile>, CoreError>> + Send;
}

/// Service trait for profile management and derived targets
pub trait ProfileService: Send + Sync {
    fn update_profile(
        &self,
        input: UpdateProfileInput,
    ) -> impl Future<Output = Result<UserProfile, CoreError>> + Send;

    fn get_profile(
        &self,
        user_id: Uuid,
    ) -> impl Future<Output = Result<UserProfile, CoreError>> + Send;

    fn get_targets(
        &self,
        user_id: Uuid,
    ) -> impl Future<Output = Result<NutritionTargets, CoreError>> + Send;
}
