use actix_web::{HttpResponse, web};
use serde_json::json;
use tracing::info;

use crate::{
    auth::auth::AuthUser,
    error::AppError,
    model::feedback::{DishRating, NewFeedback},
    models::FeedbackReq,
    store::MessStore,
};

/// Submit feedback on a served dish
#[utoipa::path(
    post,
    path = "/api/feedback",
    request_body = FeedbackReq,
    responses(
        (status = 201, description = "Feedback submitted", body = Object, example = json!({
            "success": true,
            "message": "Feedback submitted."
        })),
        (status = 400, description = "Malformed body or unknown menu item", body = Object, example = json!({
            "success": false,
            "message": "Menu item not found"
        })),
        (status = 401, description = "Unauthorized"),
        (status = 500, description = "Internal server error")
    ),
    security(("bearer_auth" = [])),
    tag = "Feedback"
)]
pub async fn submit_feedback(
    auth: AuthUser,
    store: web::Data<dyn MessStore>,
    payload: web::Json<FeedbackReq>,
) -> Result<HttpResponse, AppError> {
    let FeedbackReq {
        menu_id,
        rating,
        comment,
        ..
    } = payload.into_inner();

    let feedback_id = store
        .submit_feedback(NewFeedback {
            user_id: auth.user_id,
            menu_id,
            rating,
            comment,
        })
        .await?;

    info!(feedback_id, user_id = auth.user_id, menu_id, "Feedback submitted");

    Ok(HttpResponse::Created().json(json!({
        "success": true,
        "message": "Feedback submitted."
    })))
}

/// Average rating per dish, best first
#[utoipa::path(
    get,
    path = "/api/feedback/ratings",
    responses(
        (status = 200, description = "Mean rating per dish name", body = [DishRating]),
        (status = 500, description = "Internal server error")
    ),
    tag = "Feedback"
)]
pub async fn average_ratings(store: web::Data<dyn MessStore>) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(store.average_ratings().await?))
}
