use axum::extract::{Path, State};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};
use demeter_core::domain::nutrition_log::{
    entities::DailyNutritionTotal, ports::NutritionLogService,
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct GetDailyTotalsResponse {
    pub data: DailyNutritionTotal,
}

#[utoipa::path(
    get,
    path = "/daily/{date}",
    tag = "nutrition",
    summary = "Get nutrition totals for a date",
    description = "Stored calorie/sodium/sugar sums for the day; zeros when nothing was saved",
    params(
        ("user_id" = Uuid, Path, description = "User id"),
        ("date" = NaiveDate, Path, description = "Date key (YYYY-MM-DD)"),
    ),
    responses(
        (status = 200, body = GetDailyTotalsResponse)
    )
)]
pub async fn get_daily_totals(
    Path((user_id, date)): Path<(Uuid, NaiveDate)>,
    State(state): State<AppState>,
) -> Result<Response<GetDailyTotalsResponse>, ApiError> {
    let totals = state
        .service
        .get_daily_totals(user_id, date)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetDailyTotalsResponse { data: totals }))
}
