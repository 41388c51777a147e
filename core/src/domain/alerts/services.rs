use crate::domain::{
    alerts::entities::NutritionAlert, nutrition::value_objects::NutritionTargets,
    nutrition_log::entities::DailyNutritionTotal,
};

/// Sodium triggers its warning well before the hard limit; it is the most
/// sensitive rule after the empty-day check.
pub const SODIUM_WARNING_RATIO: f64 = 0.75;

/// Picks the single alert for the day. Rules are an ordered decision list,
/// first match wins; targets come from the calculator and are positive for
/// plausible profiles, so ratios are taken as-is.
pub fn evaluate_alert(
    totals: &DailyNutritionTotal,
    targets: &NutritionTargets,
) -> NutritionAlert {
    if totals.calories == 0.0 || totals.sodium_mg == 0.0 {
        return NutritionAlert::NothingLoggedYet;
    }

    if totals.sodium_mg / f64::from(targets.sodium_mg) >= SODIUM_WARNING_RATIO {
        return NutritionAlert::SodiumWarning;
    }

    if totals.calories / f64::from(targets.calories) >= 1.0 {
        return NutritionAlert::CalorieLimitReached;
    }

    if totals.sodium_mg / f64::from(targets.sodium_mg) >= 1.0 {
        return NutritionAlert::SodiumLimitExceeded;
    }

    if totals.sugar_g / f64::from(targets.sugar_g) >= 1.0 {
        return NutritionAlert::SugarLimitReached;
    }

    NutritionAlert::OnTrack
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use uuid::Uuid;

    use super::*;

    fn totals(calories: f64, sodium_mg: f64, sugar_g: f64) -> DailyNutritionTotal {
        DailyNutritionTotal::new(
            Uuid::new_v4(),
            NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
            calories,
            sodium_mg,
            sugar_g,
        )
    }

    fn targets() -> NutritionTargets {
        NutritionTargets {
            calories: 2000,
            sodium_mg: 2300,
            sugar_g: 50,
        }
    }

    #[test]
    fn empty_day_wins_over_everything() {
        assert_eq!(
            evaluate_alert(&totals(0.0, 3000.0, 80.0), &targets()),
            NutritionAlert::NothingLoggedYet
        );
        assert_eq!(
            evaluate_alert(&totals(2500.0, 0.0, 80.0), &targets()),
            NutritionAlert::NothingLoggedYet
        );
    }

    #[test]
    fn sodium_warning_fires_at_three_quarters_of_target() {
        // 0.8 of target: the warning, not the limit-exceeded message.
        assert_eq!(
            evaluate_alert(&totals(500.0, 1840.0, 10.0), &targets()),
            NutritionAlert::SodiumWarning
        );
    }

    #[test]
    fn sodium_limit_rule_is_shadowed_by_the_warning() {
        // Even past 100% of the sodium target the 75% warning matches first;
        // the dedicated limit-exceeded branch is kept for rule-order
        // compatibility but cannot fire.
        assert_eq!(
            evaluate_alert(&totals(500.0, 2800.0, 10.0), &targets()),
            NutritionAlert::SodiumWarning
        );
    }

    #[test]
    fn calorie_limit_fires_below_the_sodium_warning_threshold() {
        assert_eq!(
            evaluate_alert(&totals(2100.0, 500.0, 10.0), &targets()),
            NutritionAlert::CalorieLimitReached
        );
    }

    #[test]
    fn sugar_limit_fires_when_other_rules_pass() {
        assert_eq!(
            evaluate_alert(&totals(1500.0, 500.0, 55.0), &targets()),
            NutritionAlert::SugarLimitReached
        );
    }

    #[test]
    fn quiet_day_is_positive_reinforcement() {
        assert_eq!(
            evaluate_alert(&totals(1200.0, 900.0, 20.0), &targets()),
            NutritionAlert::OnTrack
        );
    }

    #[test]
    fn every_alert_has_a_message() {
        for alert in [
            NutritionAlert::NothingLoggedYet,
            NutritionAlert::SodiumWarning,
            NutritionAlert::CalorieLimitReached,
            NutritionAlert::SodiumLimitExceeded,
            NutritionAlert::SugarLimitReached,
            NutritionAlert::OnTrack,
        ] {
            assert!(!alert.message().is_empty());
        }
    }
}
