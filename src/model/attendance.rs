use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const STATUS_PRESENT: &str = "Present";

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "PascalCase")]
pub struct Attendance {
    #[serde(rename = "AttendanceID")]
    pub attendance_id: u64,
    #[serde(rename = "UserID")]
    pub user_id: u64,
    pub date: NaiveDate,
    pub meal_type: String,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow, ToSchema)]
#[serde(rename_all = "PascalCase")]
pub struct MealAttendance {
    #[schema(example = "Lunch")]
    pub meal_type: String,
    #[schema(example = 42)]
    pub total_attendance: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow, ToSchema)]
#[serde(rename_all = "PascalCase")]
pub struct DailyAttendance {
    #[schema(example = "2024-01-01", format = "date", value_type = String)]
    pub date: NaiveDate,
    #[schema(example = 120)]
    pub total_attendance: i64,
}
