use crate::model::attendance::{DailyAttendance, MealAttendance};
use crate::model::feedback::DishRating;
use crate::model::menu::{MenuFields, MenuItem, MenuRef};
use crate::model::notification::Notification;
use crate::model::recipe_suggestion::{RecipeSuggestion, SuggestionStatus};
use crate::model::role::Role;
use crate::model::user::UserProfile;
use crate::models::{
    CheckInReq, FeedbackReq, LoginReqDto, NotificationReq, RegisterReq, SuggestRecipeReq,
    SuggestionStatusReq,
};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Mess Hall API",
        version = "1.0.0",
        description = r#"
## Mess Hall Management

Students read daily menus, check in to meals, rate dishes and suggest recipes.
Administrators manage the menu, post notifications, moderate suggestions and
pull attendance reports.

### Security
Log in through `/api/auth/login` to receive a **JWT Bearer** token.
Student actions accept any valid token; everything under `/api/admin` needs
the **Admin** role.

### Response Format
Writes answer with `{ "success": bool, "message": string }`; reads return
bare JSON arrays.
"#,
    ),
    paths(
        crate::auth::handlers::register,
        crate::auth::handlers::login,

        crate::api::menu::get_menu,
        crate::api::menu::menu_ids,
        crate::api::menu::list_all_menu,
        crate::api::menu::add_menu,
        crate::api::menu::update_menu,
        crate::api::menu::delete_menu,

        crate::api::attendance::check_in,
        crate::api::attendance::todays_attendance,
        crate::api::attendance::attendance_report,

        crate::api::feedback::submit_feedback,
        crate::api::feedback::average_ratings,

        crate::api::recipe::suggest_recipe,
        crate::api::recipe::list_suggestions,
        crate::api::recipe::update_suggestion_status,

        crate::api::notification::recent_notifications,
        crate::api::notification::post_notification
    ),
    components(
        schemas(
            RegisterReq,
            LoginReqDto,
            UserProfile,
            Role,
            MenuItem,
            MenuFields,
            MenuRef,
            CheckInReq,
            MealAttendance,
            DailyAttendance,
            FeedbackReq,
            DishRating,
            SuggestRecipeReq,
            SuggestionStatusReq,
            RecipeSuggestion,
            SuggestionStatus,
            NotificationReq,
            Notification
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Auth", description = "Registration and login"),
        (name = "Menu", description = "Daily menus"),
        (name = "Attendance", description = "Meal check-ins"),
        (name = "Feedback", description = "Dish ratings"),
        (name = "Recipes", description = "Recipe suggestions"),
        (name = "Notifications", description = "Announcements"),
        (name = "Admin", description = "Administrator APIs"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_every_route() {
        let doc = ApiDoc::openapi();
        let paths = &doc.paths.paths;

        for path in [
            "/api/auth/register/student",
            "/api/auth/login",
            "/api/menu",
            "/api/menu/ids",
            "/api/attendance",
            "/api/attendance/today",
            "/api/feedback",
            "/api/feedback/ratings",
            "/api/recipes/suggest",
            "/api/notifications",
            "/api/admin/menu",
            "/api/admin/menu/add",
            "/api/admin/menu/update/{menu_id}",
            "/api/admin/menu/delete/{menu_id}",
            "/api/admin/notifications",
            "/api/admin/attendance/report",
            "/api/admin/recipes/pending",
            "/api/admin/recipes/update/status/{suggestion_id}",
        ] {
            assert!(paths.contains_key(path), "missing {path}");
        }
    }

    #[test]
    fn bearer_scheme_is_registered() {
        let doc = ApiDoc::openapi();
        let components = doc.components.unwrap();
        assert!(components.security_schemes.contains_key("bearer_auth"));
    }
}
