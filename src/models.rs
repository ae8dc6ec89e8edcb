use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::{
    role::Role,
    serde_helpers::{number_or_string, option_number_or_string},
};

#[derive(Deserialize, ToSchema)]
pub struct RegisterReq {
    #[schema(example = "Alice")]
    pub name: String,
    #[schema(example = "a@x.com")]
    pub email: String,
    #[schema(example = "p")]
    pub password: String,
}

#[derive(Deserialize, ToSchema)]
pub struct LoginReqDto {
    #[schema(example = "a@x.com")]
    pub email: String,
    #[schema(example = "p")]
    pub password: String,
    #[schema(example = "Student", value_type = String)]
    pub role: String,
}

#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CheckInReq {
    /// Accepted for older clients; the acting user comes from the bearer token.
    #[serde(default, deserialize_with = "option_number_or_string")]
    #[schema(example = 1)]
    pub user_id: Option<u64>,
    #[schema(example = "Lunch")]
    pub meal_type: String,
}

#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackReq {
    /// Ignored; the acting user comes from the bearer token.
    #[serde(default, deserialize_with = "option_number_or_string")]
    #[schema(example = 1)]
    pub user_id: Option<u64>,
    /// Number or numeric string
    #[serde(deserialize_with = "number_or_string")]
    #[schema(example = 3)]
    pub menu_id: u64,
    /// Number or numeric string
    #[serde(deserialize_with = "number_or_string")]
    #[schema(example = 4)]
    pub rating: i32,
    #[schema(example = "A bit too spicy")]
    pub comment: Option<String>,
}

#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SuggestRecipeReq {
    #[serde(default, deserialize_with = "option_number_or_string")]
    #[schema(example = 1)]
    pub user_id: Option<u64>,
    #[schema(example = "Masala Dosa")]
    pub dish_name: String,
    #[serde(default)]
    #[schema(example = "Crispy dosa with potato filling")]
    pub description: String,
}

#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NotificationReq {
    #[schema(example = "Mess closed for maintenance on Sunday")]
    pub message: String,
    #[schema(example = json!(null))]
    pub target_user_id: Option<u64>,
}

#[derive(Deserialize, ToSchema)]
pub struct SuggestionStatusReq {
    #[schema(example = "Approved")]
    pub status: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub user_id: u64,
    /// account email
    pub sub: String,
    pub role: Role,
    pub exp: usize,
    pub jti: String,
}
