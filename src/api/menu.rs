use actix_web::{HttpResponse, web};
use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::json;
use tracing::{debug, info};
use utoipa::IntoParams;

use crate::{
    api::today,
    auth::auth::AuthUser,
    error::AppError,
    model::menu::{MenuFields, MenuItem, MenuRef},
    store::MessStore,
};

#[derive(Debug, Deserialize, IntoParams)]
pub struct MenuQuery {
    /// Day to show, `YYYY-MM-DD`. Defaults to today.
    #[param(example = "2024-01-01", value_type = Option<String>, format = Date)]
    pub date: Option<NaiveDate>,
}

/// Menu for one day
#[utoipa::path(
    get,
    path = "/api/menu",
    params(MenuQuery),
    responses(
        (status = 200, description = "Menu rows for the day, by meal type", body = [MenuItem]),
        (status = 400, description = "Malformed date"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Menu"
)]
pub async fn get_menu(
    store: web::Data<dyn MessStore>,
    query: web::Query<MenuQuery>,
) -> Result<HttpResponse, AppError> {
    let date = query.date.unwrap_or_else(today);
    debug!(%date, "Fetching menu");

    let rows = store.menu_for_date(date).await?;
    Ok(HttpResponse::Ok().json(rows))
}

/// Dish picker listing for the feedback form
#[utoipa::path(
    get,
    path = "/api/menu/ids",
    responses(
        (status = 200, description = "All menu rows, newest first", body = [MenuRef]),
        (status = 500, description = "Internal server error")
    ),
    tag = "Menu"
)]
pub async fn menu_ids(store: web::Data<dyn MessStore>) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(store.menu_refs().await?))
}

/// Every menu row (admin)
#[utoipa::path(
    get,
    path = "/api/admin/menu",
    responses(
        (status = 200, description = "All menu rows, date desc then meal type", body = [MenuItem]),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden"),
        (status = 500, description = "Internal server error")
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn list_all_menu(store: web::Data<dyn MessStore>) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(store.all_menu().await?))
}

/// Add a menu item (admin)
#[utoipa::path(
    post,
    path = "/api/admin/menu/add",
    request_body = MenuFields,
    responses(
        (status = 201, description = "Menu item added", body = Object, example = json!({
            "success": true,
            "message": "Menu item added.",
            "menuId": 1
        })),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden"),
        (status = 500, description = "Internal server error")
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn add_menu(
    auth: AuthUser,
    store: web::Data<dyn MessStore>,
    payload: web::Json<MenuFields>,
) -> Result<HttpResponse, AppError> {
    let menu_id = store.add_menu(payload.into_inner()).await?;
    info!(menu_id, admin_id = auth.user_id, "Menu item added");

    Ok(HttpResponse::Created().json(json!({
        "success": true,
        "message": "Menu item added.",
        "menuId": menu_id
    })))
}

/// Replace all fields of a menu item (admin)
#[utoipa::path(
    put,
    path = "/api/admin/menu/update/{menu_id}",
    params(
        ("menu_id" = u64, Path, description = "Menu item ID")
    ),
    request_body = MenuFields,
    responses(
        (status = 200, description = "Menu item updated", body = Object, example = json!({
            "success": true,
            "message": "Menu item updated."
        })),
        (status = 404, description = "Menu item not found", body = Object, example = json!({
            "success": false,
            "message": "Menu item not found"
        })),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden"),
        (status = 500, description = "Internal server error")
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn update_menu(
    auth: AuthUser,
    store: web::Data<dyn MessStore>,
    path: web::Path<u64>,
    payload: web::Json<MenuFields>,
) -> Result<HttpResponse, AppError> {
    let menu_id = path.into_inner();

    if store.update_menu(menu_id, payload.into_inner()).await? == 0 {
        return Err(AppError::NotFound("Menu item not found".into()));
    }
    info!(menu_id, admin_id = auth.user_id, "Menu item updated");

    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "message": "Menu item updated."
    })))
}

/// Delete a menu item and its feedback (admin)
#[utoipa::path(
    delete,
    path = "/api/admin/menu/delete/{menu_id}",
    params(
        ("menu_id" = u64, Path, description = "Menu item ID")
    ),
    responses(
        (status = 200, description = "Menu item deleted", body = Object, example = json!({
            "success": true,
            "message": "Menu item deleted."
        })),
        (status = 404, description = "Menu item not found"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden"),
        (status = 500, description = "Internal server error")
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn delete_menu(
    auth: AuthUser,
    store: web::Data<dyn MessStore>,
    path: web::Path<u64>,
) -> Result<HttpResponse, AppError> {
    let menu_id = path.into_inner();

    if store.delete_menu(menu_id).await? == 0 {
        return Err(AppError::NotFound("Menu item not found".into()));
    }
    info!(menu_id, admin_id = auth.user_id, "Menu item deleted");

    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "message": "Menu item deleted."
    })))
}
