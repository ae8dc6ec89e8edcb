use crate::{
    api::{attendance, feedback, menu, notification, recipe},
    auth::{handlers, middleware::admin_middleware},
    config::Config,
    error::AppError,
};
use actix_governor::{
    Governor, GovernorConfigBuilder, PeerIpKeyExtractor, governor::middleware::NoOpMiddleware,
};
use actix_web::{HttpResponse, Responder, middleware::from_fn, web};
use std::sync::Arc;
use tracing::debug;

pub async fn index() -> impl Responder {
    HttpResponse::Ok().body("Welcome to the Mess Management System API!")
}

// Helper to build per-route limiter
fn build_limiter(requests_per_min: u32) -> Governor<PeerIpKeyExtractor, NoOpMiddleware> {
    let requests_per_min = requests_per_min.max(1);
    let per_ms = (60_000 / requests_per_min as u64).max(1);
    let cfg = GovernorConfigBuilder::default()
        .per_millisecond(per_ms)
        .burst_size(requests_per_min)
        .key_extractor(PeerIpKeyExtractor)
        .finish()
        .expect("period and burst size are non-zero");
    Governor::new(&cfg)
}

pub fn configure(cfg: &mut web::ServiceConfig, config: Config) {
    let login_limiter = Arc::new(build_limiter(config.rate_login_per_min));
    let register_limiter = Arc::new(build_limiter(config.rate_register_per_min));

    // malformed bodies and query strings get the same JSON envelope as handler errors
    cfg.app_data(web::JsonConfig::default().error_handler(|err, req| {
        debug!(path = %req.path(), error = %err, "Rejected request body");
        AppError::BadRequest(err.to_string()).into()
    }))
    .app_data(web::QueryConfig::default().error_handler(|err, req| {
        debug!(path = %req.path(), error = %err, "Rejected query string");
        AppError::BadRequest(err.to_string()).into()
    }));

    cfg.route("/", web::get().to(index));

    cfg.service(
        web::scope(&config.api_prefix)
            // admin routes, token with Admin role required
            .service(
                web::scope("/admin")
                    .wrap(from_fn(admin_middleware))
                    .service(web::resource("/menu").route(web::get().to(menu::list_all_menu)))
                    .service(web::resource("/menu/add").route(web::post().to(menu::add_menu)))
                    .service(
                        web::resource("/menu/update/{menu_id}")
                            .route(web::put().to(menu::update_menu)),
                    )
                    .service(
                        web::resource("/menu/delete/{menu_id}")
                            .route(web::delete().to(menu::delete_menu)),
                    )
                    .service(
                        web::resource("/notifications")
                            .route(web::post().to(notification::post_notification)),
                    )
                    .service(
                        web::resource("/attendance/report")
                            .route(web::get().to(attendance::attendance_report)),
                    )
                    .service(
                        web::resource("/recipes/pending")
                            .route(web::get().to(recipe::list_suggestions)),
                    )
                    .service(
                        web::resource("/recipes/update/status/{suggestion_id}")
                            .route(web::put().to(recipe::update_suggestion_status)),
                    ),
            )
            // public auth routes, rate limited per peer IP
            .service(
                web::scope("/auth")
                    .service(
                        web::resource("/login")
                            .wrap(login_limiter)
                            .route(web::post().to(handlers::login)),
                    )
                    .service(
                        web::resource("/register/student")
                            .wrap(register_limiter)
                            .route(web::post().to(handlers::register)),
                    ),
            )
            // public reads
            .service(web::resource("/menu").route(web::get().to(menu::get_menu)))
            .service(web::resource("/menu/ids").route(web::get().to(menu::menu_ids)))
            .service(
                web::resource("/attendance/today")
                    .route(web::get().to(attendance::todays_attendance)),
            )
            .service(
                web::resource("/feedback/ratings").route(web::get().to(feedback::average_ratings)),
            )
            .service(
                web::resource("/notifications")
                    .route(web::get().to(notification::recent_notifications)),
            )
            // student actions, bearer token resolved by the AuthUser extractor
            .service(web::resource("/attendance").route(web::post().to(attendance::check_in)))
            .service(web::resource("/feedback").route(web::post().to(feedback::submit_feedback)))
            .service(
                web::resource("/recipes/suggest").route(web::post().to(recipe::suggest_recipe)),
            ),
    );
}

// LOGIN
//  └─ access_token (ACCESS_TOKEN_TTL, default 1 day)

// API REQUEST
//  └─ Authorization: Bearer access_token
//       ├─ /api/attendance, /api/feedback, /api/recipes/suggest: any role
//       └─ /api/admin/*: Admin only
