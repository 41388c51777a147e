use crate::{domain::nutrition_log::entities::DailyNutritionTotal, entity::daily_totals};

impl From<&daily_totals::Model> for DailyNutritionTotal {
    fn from(model: &daily_totals::Model) -> Self {
        Self {
            user_id: model.user_id,
            date_key: model.date_key,
            calories: model.calories,
            sodium_mg: model.sodium_mg,
            sugar_g: model.sugar_g,
            updated_at: model.updated_at.to_utc(),
        }
    }
}
