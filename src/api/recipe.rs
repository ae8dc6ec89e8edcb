use actix_web::{HttpResponse, web};
use serde::Deserialize;
use serde_json::json;
use tracing::info;
use utoipa::IntoParams;

use crate::{
    auth::auth::AuthUser,
    error::AppError,
    model::recipe_suggestion::{NewSuggestion, RecipeSuggestion, SuggestionStatus},
    models::{SuggestRecipeReq, SuggestionStatusReq},
    store::MessStore,
};

#[derive(Debug, Deserialize, IntoParams)]
pub struct SuggestionFilter {
    /// Only return suggestions in this state
    #[param(example = "Pending", value_type = Option<String>)]
    pub status: Option<String>,
}

fn parse_status(raw: &str) -> Result<SuggestionStatus, AppError> {
    raw.trim().parse().map_err(|_| {
        AppError::BadRequest(format!(
            "Invalid status '{raw}'. Allowed: Pending, Approved, Rejected"
        ))
    })
}

/// Suggest a new recipe
#[utoipa::path(
    post,
    path = "/api/recipes/suggest",
    request_body = SuggestRecipeReq,
    responses(
        (status = 201, description = "Suggestion stored as Pending", body = Object, example = json!({
            "success": true,
            "message": "Recipe suggestion submitted."
        })),
        (status = 401, description = "Unauthorized"),
        (status = 500, description = "Internal server error")
    ),
    security(("bearer_auth" = [])),
    tag = "Recipes"
)]
pub async fn suggest_recipe(
    auth: AuthUser,
    store: web::Data<dyn MessStore>,
    payload: web::Json<SuggestRecipeReq>,
) -> Result<HttpResponse, AppError> {
    let SuggestRecipeReq {
        dish_name,
        description,
        ..
    } = payload.into_inner();

    let suggestion_id = store
        .suggest_recipe(NewSuggestion {
            user_id: auth.user_id,
            dish_name,
            description,
        })
        .await?;

    info!(suggestion_id, user_id = auth.user_id, "Recipe suggested");

    Ok(HttpResponse::Created().json(json!({
        "success": true,
        "message": "Recipe suggestion submitted."
    })))
}

/// All recipe suggestions, newest first (admin)
#[utoipa::path(
    get,
    path = "/api/admin/recipes/pending",
    params(SuggestionFilter),
    responses(
        (status = 200, description = "Suggestions in every state unless filtered", body = [RecipeSuggestion]),
        (status = 400, description = "Unknown status filter"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden")
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn list_suggestions(
    store: web::Data<dyn MessStore>,
    query: web::Query<SuggestionFilter>,
) -> Result<HttpResponse, AppError> {
    let status = query.status.as_deref().map(parse_status).transpose()?;
    Ok(HttpResponse::Ok().json(store.suggestions(status).await?))
}

/// Approve or reject a pending suggestion (admin)
#[utoipa::path(
    put,
    path = "/api/admin/recipes/update/status/{suggestion_id}",
    params(
        ("suggestion_id" = u64, Path, description = "ID of the suggestion to moderate")
    ),
    request_body = SuggestionStatusReq,
    responses(
        (status = 200, description = "Status updated", body = Object, example = json!({
            "success": true,
            "message": "Suggestion status updated to Approved."
        })),
        (status = 400, description = "Invalid status, unknown suggestion, or already moderated", body = Object, example = json!({
            "success": false,
            "message": "Suggestion not found or already moderated"
        })),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden")
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn update_suggestion_status(
    auth: AuthUser,
    store: web::Data<dyn MessStore>,
    path: web::Path<u64>,
    payload: web::Json<SuggestionStatusReq>,
) -> Result<HttpResponse, AppError> {
    let suggestion_id = path.into_inner();
    let status = parse_status(&payload.status)?;

    if !status.is_terminal() {
        return Err(AppError::BadRequest(
            "Suggestions can only move to Approved or Rejected".into(),
        ));
    }

    if store.moderate_suggestion(suggestion_id, status).await? == 0 {
        return Err(AppError::BadRequest(
            "Suggestion not found or already moderated".into(),
        ));
    }

    info!(suggestion_id, %status, admin_id = auth.user_id, "Suggestion moderated");

    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "message": format!("Suggestion status updated to {status}.")
    })))
}
