use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "PascalCase")]
pub struct Feedback {
    #[serde(rename = "FeedbackID")]
    pub feedback_id: u64,
    #[serde(rename = "UserID")]
    pub user_id: u64,
    #[serde(rename = "MenuID")]
    pub menu_id: u64,
    pub rating: i32,
    pub comment: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NewFeedback {
    pub user_id: u64,
    pub menu_id: u64,
    pub rating: i32,
    pub comment: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow, ToSchema)]
#[serde(rename_all = "PascalCase")]
pub struct DishRating {
    #[schema(example = "Rajma Chawal")]
    pub dish_name: String,
    #[schema(example = 4.5)]
    pub average_rating: f64,
}
