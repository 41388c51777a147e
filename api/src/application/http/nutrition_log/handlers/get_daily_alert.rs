use axum::extract::{Path, Query, State};
use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};
use demeter_core::domain::{
    alerts::entities::NutritionAlert, nutrition_log::ports::NutritionLogService,
};

#[derive(Debug, Serialize, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct GetDailyAlertParams {
    /// Date to evaluate; defaults to today
    pub date: Option<NaiveDate>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct GetDailyAlertResponse {
    pub alert: NutritionAlert,
    pub message: String,
}

#[utoipa::path(
    get,
    path = "/alert",
    tag = "nutrition",
    summary = "Get the day's nutrition alert",
    description = "Compares the day's totals against the profile targets and picks a single alert",
    params(
        ("user_id" = Uuid, Path, description = "User id"),
        GetDailyAlertParams,
    ),
    responses(
        (status = 200, body = GetDailyAlertResponse),
        (status = 404, description = "Profile not found")
    )
)]
pub async fn get_daily_alert(
    Path(user_id): Path<Uuid>,
    Query(params): Query<GetDailyAlertParams>,
    State(state): State<AppState>,
) -> Result<Response<GetDailyAlertResponse>, ApiError> {
    let date = params.date.unwrap_or_else(|| Utc::now().date_naive());

    let alert: NutritionAlert = state
        .service
        .daily_alert(user_id, date)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetDailyAlertResponse {
        alert,
        message: alert.message().to_string(),
    }))
}
