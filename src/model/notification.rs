use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A `None` target means the notification is a broadcast.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
#[serde(rename_all = "PascalCase")]
pub struct Notification {
    #[serde(rename = "NotificationID")]
    pub notification_id: u64,
    #[schema(example = "Mess closed for maintenance on Sunday")]
    pub message: String,
    #[serde(rename = "TargetUserID")]
    pub target_user_id: Option<u64>,
    #[schema(example = "2024-01-01T12:00:00", format = "date-time", value_type = String)]
    pub date: NaiveDateTime,
}
