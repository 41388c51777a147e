/// Aggregate service carrying one field per port. Each domain's service
/// trait is implemented on this type in its own `services.rs`.
#[derive(Debug, Clone)]
pub struct Service<U, HP, O, L, R, SR, DT, HC, OS, SI> {
    pub user_profile_repository: U,
    pub health_plan_repository: HP,
    pub ocr_client: O,
    pub llm_client: L,
    pub recipe_client: R,
    pub saved_recipe_repository: SR,
    pub daily_total_repository: DT,
    pub health_check_repository: HC,
    pub object_storage: OS,
    pub stored_image_repository: SI,
}

impl<U, HP, O, L, R, SR, DT, HC, OS, SI> Service<U, HP, O, L, R, SR, DT, HC, OS, SI> {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        user_profile_repository: U,
        health_plan_repository: HP,
        ocr_client: O,
        llm_client: L,
        recipe_client: R,
        saved_recipe_repository: SR,
        daily_total_repository: DT,
        health_check_repository: HC,
        object_storage: OS,
        stored_image_repository: SI,
    ) -> Self {
        Self {
            user_profile_repository,
            health_plan_repository,
            ocr_client,
            llm_client,
            recipe_client,
            saved_recipe_repository,
            daily_total_repository,
            health_check_repository,
            object_storage,
            stored_image_repository,
        }
    }
}
