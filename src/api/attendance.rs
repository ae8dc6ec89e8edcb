use crate::{
    api::today,
    auth::auth::AuthUser,
    error::AppError,
    model::attendance::{DailyAttendance, MealAttendance, STATUS_PRESENT},
    models::CheckInReq,
    store::MessStore,
};
use actix_web::{HttpResponse, web};
use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::json;
use tracing::{debug, info};
use utoipa::IntoParams;

#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct ReportQuery {
    /// First day of the report, inclusive
    #[param(example = "2024-01-01", value_type = String, format = Date)]
    pub start_date: NaiveDate,
    /// Last day of the report, inclusive
    #[param(example = "2024-01-31", value_type = String, format = Date)]
    pub end_date: NaiveDate,
}

/// Check-in endpoint
#[utoipa::path(
    post,
    path = "/api/attendance",
    request_body = CheckInReq,
    responses(
        (status = 201, description = "Attendance recorded", body = Object, example = json!({
            "success": true,
            "message": "Attendance recorded."
        })),
        (status = 401, description = "Unauthorized"),
        (status = 500, description = "Internal server error")
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Attendance"
)]
pub async fn check_in(
    auth: AuthUser,
    store: web::Data<dyn MessStore>,
    payload: web::Json<CheckInReq>,
) -> Result<HttpResponse, AppError> {
    if let Some(claimed) = payload.user_id.filter(|id| *id != auth.user_id) {
        debug!(claimed, user_id = auth.user_id, "Ignoring userId from body");
    }

    // No duplicate check: repeated check-ins for the same meal are all kept.
    let attendance_id = store
        .record_attendance(auth.user_id, today(), &payload.meal_type, STATUS_PRESENT)
        .await?;

    info!(attendance_id, user_id = auth.user_id, meal_type = %payload.meal_type, "Checked in");

    Ok(HttpResponse::Created().json(json!({
        "success": true,
        "message": "Attendance recorded."
    })))
}

/// Today's attendance per meal type
#[utoipa::path(
    get,
    path = "/api/attendance/today",
    responses(
        (status = 200, description = "Check-in counts for today by meal", body = [MealAttendance]),
        (status = 500, description = "Internal server error")
    ),
    tag = "Attendance"
)]
pub async fn todays_attendance(store: web::Data<dyn MessStore>) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(store.attendance_by_meal(today()).await?))
}

/// Daily attendance totals over a date range (admin)
#[utoipa::path(
    get,
    path = "/api/admin/attendance/report",
    params(ReportQuery),
    responses(
        (status = 200, description = "One row per day that had check-ins", body = [DailyAttendance]),
        (status = 400, description = "Missing or malformed dates"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden"),
        (status = 500, description = "Internal server error")
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Admin"
)]
pub async fn attendance_report(
    store: web::Data<dyn MessStore>,
    query: web::Query<ReportQuery>,
) -> Result<HttpResponse, AppError> {
    debug!(start = %query.start_date, end = %query.end_date, "Building attendance report");

    let rows = store
        .attendance_report(query.start_date, query.end_date)
        .await?;
    Ok(HttpResponse::Ok().json(rows))
}
