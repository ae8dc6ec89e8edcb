use actix_web::{HttpResponse, web};
use serde_json::json;
use tracing::info;

use crate::{
    auth::auth::AuthUser, error::AppError, model::notification::Notification,
    models::NotificationReq, store::MessStore,
};

const RECENT_LIMIT: u32 = 3;

/// Latest notifications, visible to everyone
#[utoipa::path(
    get,
    path = "/api/notifications",
    responses(
        (status = 200, description = "Up to three newest notifications", body = [Notification]),
        (status = 500, description = "Internal server error")
    ),
    tag = "Notifications"
)]
pub async fn recent_notifications(
    store: web::Data<dyn MessStore>,
) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(store.recent_notifications(RECENT_LIMIT).await?))
}

/// Post a notification; omit `targetUserId` to broadcast (admin)
#[utoipa::path(
    post,
    path = "/api/admin/notifications",
    request_body = NotificationReq,
    responses(
        (status = 201, description = "Notification stored", body = Object, example = json!({
            "success": true,
            "message": "Notification added."
        })),
        (status = 400, description = "Unknown target user", body = Object, example = json!({
            "success": false,
            "message": "User not found"
        })),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden"),
        (status = 500, description = "Internal server error")
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn post_notification(
    auth: AuthUser,
    store: web::Data<dyn MessStore>,
    payload: web::Json<NotificationReq>,
) -> Result<HttpResponse, AppError> {
    let notification_id = store
        .post_notification(&payload.message, payload.target_user_id)
        .await?;

    info!(
        notification_id,
        target = ?payload.target_user_id,
        admin_id = auth.user_id,
        "Notification posted"
    );

    Ok(HttpResponse::Created().json(json!({
        "success": true,
        "message": "Notification added."
    })))
}
