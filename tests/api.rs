use std::net::SocketAddr;
use std::sync::Arc;

use actix_web::{App, http::StatusCode, test, web};
use chrono::Utc;
use serde_json::{Value, json};

use messhall::auth::handlers::bootstrap_admin;
use messhall::config::Config;
use messhall::routes;
use messhall::store::{MemoryStore, MessStore};

const ADMIN_EMAIL: &str = "admin@mess.local";
const ADMIN_PASSWORD: &str = "admin-pass";

fn test_config() -> Config {
    Config::from_lookup(|key| match key {
        "STORE_BACKEND" => Some("memory".to_string()),
        "JWT_SECRET" => Some("integration-secret".to_string()),
        "RATE_LOGIN_PER_MIN" => Some("1000".to_string()),
        "RATE_REGISTER_PER_MIN" => Some("1000".to_string()),
        _ => None,
    })
    .unwrap()
}

fn peer() -> SocketAddr {
    "127.0.0.1:40000".parse().unwrap()
}

macro_rules! init_app {
    ($store:expr) => {{
        let config = test_config();
        let store: Arc<dyn MessStore> = $store.clone();
        let route_config = config.clone();
        test::init_service(
            App::new()
                .app_data(web::Data::from(store))
                .app_data(web::Data::new(config))
                .configure(move |cfg| routes::configure(cfg, route_config)),
        )
        .await
    }};
}

macro_rules! send {
    ($app:expr, $req:expr) => {{
        let resp = test::call_service(&$app, $req.peer_addr(peer()).to_request()).await;
        let status = resp.status();
        let bytes = test::read_body(resp).await;
        let body: Value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, body)
    }};
}

fn bearer(token: &str) -> (&'static str, String) {
    ("Authorization", format!("Bearer {token}"))
}

async fn seeded_store() -> Arc<MemoryStore> {
    let store = Arc::new(MemoryStore::new());
    bootstrap_admin(store.as_ref(), "Warden", ADMIN_EMAIL, ADMIN_PASSWORD)
        .await
        .unwrap();
    store
}

fn register_req(name: &str, email: &str, password: &str) -> test::TestRequest {
    test::TestRequest::post()
        .uri("/api/auth/register/student")
        .set_json(json!({ "name": name, "email": email, "password": password }))
}

fn login_req(email: &str, password: &str, role: &str) -> test::TestRequest {
    test::TestRequest::post()
        .uri("/api/auth/login")
        .set_json(json!({ "email": email, "password": password, "role": role }))
}

fn menu_body(date: &str, meal: &str, dish: &str) -> Value {
    json!({
        "Date": date,
        "MealType": meal,
        "DishName": dish,
        "DietaryType": "Vegetarian",
        "Description": format!("{dish} of the day")
    })
}

fn today() -> String {
    Utc::now().date_naive().format("%Y-%m-%d").to_string()
}

#[actix_web::test]
async fn registering_same_email_twice_conflicts() {
    let store = seeded_store().await;
    let app = init_app!(store);

    let (status, body) = send!(app, register_req("Alice", "a@x.com", "p"));
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["success"], true);

    let (status, body) = send!(app, register_req("Alice Again", "a@x.com", "other"));
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Email already registered.");
}

#[actix_web::test]
async fn emails_ignore_case() {
    let store = seeded_store().await;
    let app = init_app!(store);

    let (status, _) = send!(app, register_req("Alice", " Alice@X.com", "p"));
    assert_eq!(status, StatusCode::CREATED);

    let (status, _) = send!(app, register_req("Alice Again", "alice@x.com", "p"));
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, body) = send!(app, login_req("ALICE@x.com", "p", "Student"));
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["user"]["Email"], "alice@x.com");
}

#[actix_web::test]
async fn login_failures_are_indistinguishable() {
    let store = seeded_store().await;
    let app = init_app!(store);

    let (status, _) = send!(app, register_req("Alice", "a@x.com", "p"));
    assert_eq!(status, StatusCode::CREATED);

    let wrong_role = send!(app, login_req("a@x.com", "p", "Admin"));
    let wrong_password = send!(app, login_req("a@x.com", "nope", "Student"));
    let unknown_email = send!(app, login_req("b@x.com", "p", "Student"));

    for (status, body) in [wrong_role, wrong_password, unknown_email] {
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "Invalid credentials");
    }
}

#[actix_web::test]
async fn register_login_and_publish_menu_end_to_end() {
    let store = seeded_store().await;
    let app = init_app!(store);

    let (status, _) = send!(app, register_req("Alice", "a@x.com", "p"));
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = send!(app, login_req("a@x.com", "p", "Student"));
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["user"]["Role"], "Student");
    assert_eq!(body["user"]["Name"], "Alice");
    assert!(body["user"].get("Password").is_none());
    assert!(body["token"].as_str().is_some());

    let (status, body) = send!(app, test::TestRequest::get().uri("/api/menu?date=2024-01-01"));
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));

    let (_, admin) = send!(app, login_req(ADMIN_EMAIL, ADMIN_PASSWORD, "Admin"));
    let admin_token = admin["token"].as_str().unwrap().to_string();

    let (status, body) = send!(
        app,
        test::TestRequest::post()
            .uri("/api/admin/menu/add")
            .insert_header(bearer(&admin_token))
            .set_json(menu_body("2024-01-01", "Lunch", "Rajma Chawal"))
    );
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["success"], true);

    let (status, body) = send!(app, test::TestRequest::get().uri("/api/menu?date=2024-01-01"));
    assert_eq!(status, StatusCode::OK);
    let rows = body.as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["Date"], "2024-01-01");
    assert_eq!(rows[0]["MealType"], "Lunch");
    assert_eq!(rows[0]["DishName"], "Rajma Chawal");
    assert_eq!(rows[0]["DietaryType"], "Vegetarian");
    assert_eq!(rows[0]["Description"], "Rajma Chawal of the day");
    assert!(rows[0]["MenuID"].as_u64().is_some());
}

#[actix_web::test]
async fn menu_without_date_is_todays_menu() {
    let store = seeded_store().await;
    let app = init_app!(store);
    let (_, admin) = send!(app, login_req(ADMIN_EMAIL, ADMIN_PASSWORD, "Admin"));
    let token = admin["token"].as_str().unwrap().to_string();

    for (meal, dish) in [("Lunch", "Dal"), ("Breakfast", "Poha")] {
        let (status, _) = send!(
            app,
            test::TestRequest::post()
                .uri("/api/admin/menu/add")
                .insert_header(bearer(&token))
                .set_json(menu_body(&today(), meal, dish))
        );
        assert_eq!(status, StatusCode::CREATED);
    }

    let (_, implicit) = send!(app, test::TestRequest::get().uri("/api/menu"));
    let (_, explicit) = send!(
        app,
        test::TestRequest::get().uri(&format!("/api/menu?date={}", today()))
    );

    assert_eq!(implicit, explicit);
    assert_eq!(implicit[0]["MealType"], "Breakfast");
    assert_eq!(implicit[1]["MealType"], "Lunch");
}

#[actix_web::test]
async fn malformed_menu_date_is_a_bad_request() {
    let store = seeded_store().await;
    let app = init_app!(store);

    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/api/menu?date=yesterday")
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn check_in_is_not_idempotent() {
    let store = seeded_store().await;
    let app = init_app!(store);

    send!(app, register_req("Alice", "a@x.com", "p"));
    let (_, login) = send!(app, login_req("a@x.com", "p", "Student"));
    let token = login["token"].as_str().unwrap().to_string();
    let user_id = login["user"]["UserID"].as_u64().unwrap();

    for _ in 0..2 {
        let (status, body) = send!(
            app,
            test::TestRequest::post()
                .uri("/api/attendance")
                .insert_header(bearer(&token))
                .set_json(json!({ "userId": user_id, "mealType": "Lunch" }))
        );
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["message"], "Attendance recorded.");
    }

    assert_eq!(store.attendance_count().unwrap(), 2);

    let (status, body) = send!(app, test::TestRequest::get().uri("/api/attendance/today"));
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([{ "MealType": "Lunch", "TotalAttendance": 2 }]));
}

#[actix_web::test]
async fn student_actions_need_a_token() {
    let store = seeded_store().await;
    let app = init_app!(store);

    let (status, body) = send!(
        app,
        test::TestRequest::post()
            .uri("/api/attendance")
            .set_json(json!({ "userId": 1, "mealType": "Lunch" }))
    );
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["success"], false);

    let (status, _) = send!(
        app,
        test::TestRequest::post()
            .uri("/api/feedback")
            .insert_header(bearer("not-a-jwt"))
            .set_json(json!({ "userId": 1, "menuId": 1, "rating": 5, "comment": "" }))
    );
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(store.attendance_count().unwrap(), 0);
}

#[actix_web::test]
async fn admin_routes_reject_students_and_anonymous_callers() {
    let store = seeded_store().await;
    let app = init_app!(store);

    send!(app, register_req("Alice", "a@x.com", "p"));
    let (_, login) = send!(app, login_req("a@x.com", "p", "Student"));
    let student_token = login["token"].as_str().unwrap().to_string();

    let (status, _) = send!(app, test::TestRequest::get().uri("/api/admin/menu"));
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, body) = send!(
        app,
        test::TestRequest::post()
            .uri("/api/admin/menu/add")
            .insert_header(bearer(&student_token))
            .set_json(menu_body("2024-01-01", "Lunch", "Dal"))
    );
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["message"], "Admin only");
}

#[actix_web::test]
async fn admin_menu_update_and_delete() {
    let store = seeded_store().await;
    let app = init_app!(store);
    let (_, admin) = send!(app, login_req(ADMIN_EMAIL, ADMIN_PASSWORD, "Admin"));
    let token = admin["token"].as_str().unwrap().to_string();

    let (_, added) = send!(
        app,
        test::TestRequest::post()
            .uri("/api/admin/menu/add")
            .insert_header(bearer(&token))
            .set_json(menu_body("2024-01-01", "Lunch", "Dal"))
    );
    let menu_id = added["menuId"].as_u64().unwrap();

    let (status, _) = send!(
        app,
        test::TestRequest::put()
            .uri(&format!("/api/admin/menu/update/{menu_id}"))
            .insert_header(bearer(&token))
            .set_json(menu_body("2024-01-02", "Dinner", "Paneer"))
    );
    assert_eq!(status, StatusCode::OK);

    let (_, all) = send!(
        app,
        test::TestRequest::get()
            .uri("/api/admin/menu")
            .insert_header(bearer(&token))
    );
    assert_eq!(all.as_array().unwrap().len(), 1);
    assert_eq!(all[0]["DishName"], "Paneer");
    assert_eq!(all[0]["Date"], "2024-01-02");

    let (status, _) = send!(
        app,
        test::TestRequest::put()
            .uri("/api/admin/menu/update/9999")
            .insert_header(bearer(&token))
            .set_json(menu_body("2024-01-02", "Dinner", "Paneer"))
    );
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send!(
        app,
        test::TestRequest::delete()
            .uri(&format!("/api/admin/menu/delete/{menu_id}"))
            .insert_header(bearer(&token))
    );
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send!(
        app,
        test::TestRequest::delete()
            .uri(&format!("/api/admin/menu/delete/{menu_id}"))
            .insert_header(bearer(&token))
    );
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Menu item not found");
}

#[actix_web::test]
async fn attendance_report_omits_empty_days() {
    let store = seeded_store().await;
    let app = init_app!(store);
    let (_, admin) = send!(app, login_req(ADMIN_EMAIL, ADMIN_PASSWORD, "Admin"));
    let token = admin["token"].as_str().unwrap().to_string();

    let day = |s: &str| chrono::NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap();
    for (date, meal) in [
        ("2024-01-01", "Breakfast"),
        ("2024-01-01", "Dinner"),
        ("2024-01-03", "Lunch"),
    ] {
        store
            .record_attendance(1, day(date), meal, "Present")
            .await
            .unwrap();
    }

    let (status, body) = send!(
        app,
        test::TestRequest::get()
            .uri("/api/admin/attendance/report?startDate=2024-01-01&endDate=2024-01-03")
            .insert_header(bearer(&token))
    );
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([
            { "Date": "2024-01-01", "TotalAttendance": 2 },
            { "Date": "2024-01-03", "TotalAttendance": 1 }
        ])
    );

    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/api/admin/attendance/report?startDate=2024-01-01")
            .insert_header(bearer(&token))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn attendance_report_handles_inverted_and_malformed_ranges() {
    let store = seeded_store().await;
    let app = init_app!(store);
    let (_, admin) = send!(app, login_req(ADMIN_EMAIL, ADMIN_PASSWORD, "Admin"));
    let token = admin["token"].as_str().unwrap().to_string();

    let day = |s: &str| chrono::NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap();
    store
        .record_attendance(1, day("2024-01-02"), "Lunch", "Present")
        .await
        .unwrap();

    let (status, body) = send!(
        app,
        test::TestRequest::get()
            .uri("/api/admin/attendance/report?startDate=2024-01-03&endDate=2024-01-01")
            .insert_header(bearer(&token))
    );
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));

    let (status, body) = send!(
        app,
        test::TestRequest::get()
            .uri("/api/admin/attendance/report?startDate=2024-13-40&endDate=2024-01-03")
            .insert_header(bearer(&token))
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert!(body["message"].is_string());
}

#[actix_web::test]
async fn feedback_feeds_average_ratings() {
    let store = seeded_store().await;
    let app = init_app!(store);
    let (_, admin) = send!(app, login_req(ADMIN_EMAIL, ADMIN_PASSWORD, "Admin"));
    let admin_token = admin["token"].as_str().unwrap().to_string();

    send!(app, register_req("Alice", "a@x.com", "p"));
    let (_, login) = send!(app, login_req("a@x.com", "p", "Student"));
    let token = login["token"].as_str().unwrap().to_string();

    let mut ids = Vec::new();
    for (meal, dish) in [("Lunch", "Dal"), ("Dinner", "Paneer")] {
        let (_, added) = send!(
            app,
            test::TestRequest::post()
                .uri("/api/admin/menu/add")
                .insert_header(bearer(&admin_token))
                .set_json(menu_body("2024-01-01", meal, dish))
        );
        ids.push(added["menuId"].as_u64().unwrap());
    }

    for (menu_id, rating) in [(ids[0], 2), (ids[0], 3), (ids[1], 5)] {
        let (status, body) = send!(
            app,
            test::TestRequest::post()
                .uri("/api/feedback")
                .insert_header(bearer(&token))
                .set_json(json!({ "menuId": menu_id, "rating": rating, "comment": "ok" }))
        );
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["message"], "Feedback submitted.");
    }

    let (status, body) = send!(app, test::TestRequest::get().uri("/api/feedback/ratings"));
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([
            { "DishName": "Paneer", "AverageRating": 5.0 },
            { "DishName": "Dal", "AverageRating": 2.5 }
        ])
    );

    let (_, refs) = send!(app, test::TestRequest::get().uri("/api/menu/ids"));
    assert_eq!(refs.as_array().unwrap().len(), 2);
    assert_eq!(refs[0]["DishName"], "Paneer");
}

#[actix_web::test]
async fn feedback_accepts_form_string_values() {
    let store = seeded_store().await;
    let app = init_app!(store);
    let (_, admin) = send!(app, login_req(ADMIN_EMAIL, ADMIN_PASSWORD, "Admin"));
    let admin_token = admin["token"].as_str().unwrap().to_string();

    send!(app, register_req("Alice", "a@x.com", "p"));
    let (_, login) = send!(app, login_req("a@x.com", "p", "Student"));
    let token = login["token"].as_str().unwrap().to_string();
    let user_id = login["user"]["UserID"].as_u64().unwrap();

    let (_, added) = send!(
        app,
        test::TestRequest::post()
            .uri("/api/admin/menu/add")
            .insert_header(bearer(&admin_token))
            .set_json(menu_body("2024-01-01", "Lunch", "Dal"))
    );
    let menu_id = added["menuId"].as_u64().unwrap();

    // form inputs arrive as strings
    let (status, body) = send!(
        app,
        test::TestRequest::post()
            .uri("/api/feedback")
            .insert_header(bearer(&token))
            .set_json(json!({
                "userId": user_id.to_string(),
                "menuId": menu_id.to_string(),
                "rating": "4",
                "comment": "ok"
            }))
    );
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["success"], true);

    let (_, ratings) = send!(app, test::TestRequest::get().uri("/api/feedback/ratings"));
    assert_eq!(ratings, json!([{ "DishName": "Dal", "AverageRating": 4.0 }]));
}

#[actix_web::test]
async fn feedback_for_unknown_menu_is_rejected() {
    let store = seeded_store().await;
    let app = init_app!(store);

    send!(app, register_req("Alice", "a@x.com", "p"));
    let (_, login) = send!(app, login_req("a@x.com", "p", "Student"));
    let token = login["token"].as_str().unwrap().to_string();

    let (status, body) = send!(
        app,
        test::TestRequest::post()
            .uri("/api/feedback")
            .insert_header(bearer(&token))
            .set_json(json!({ "menuId": 999, "rating": 4 }))
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Menu item not found");
    assert_eq!(store.feedback_count().unwrap(), 0);
}

#[actix_web::test]
async fn malformed_bodies_get_json_errors() {
    let store = seeded_store().await;
    let app = init_app!(store);

    send!(app, register_req("Alice", "a@x.com", "p"));
    let (_, login) = send!(app, login_req("a@x.com", "p", "Student"));
    let token = login["token"].as_str().unwrap().to_string();

    let (status, body) = send!(
        app,
        test::TestRequest::post()
            .uri("/api/feedback")
            .insert_header(bearer(&token))
            .set_json(json!({ "menuId": "three", "rating": 4 }))
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert!(body["message"].is_string());

    let (status, body) = send!(
        app,
        test::TestRequest::post()
            .uri("/api/auth/login")
            .insert_header(("Content-Type", "application/json"))
            .set_payload("{not json")
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
}

#[actix_web::test]
async fn approved_suggestion_stays_in_admin_listing() {
    let store = seeded_store().await;
    let app = init_app!(store);
    let (_, admin) = send!(app, login_req(ADMIN_EMAIL, ADMIN_PASSWORD, "Admin"));
    let admin_token = admin["token"].as_str().unwrap().to_string();

    send!(app, register_req("Alice", "a@x.com", "p"));
    let (_, login) = send!(app, login_req("a@x.com", "p", "Student"));
    let token = login["token"].as_str().unwrap().to_string();

    let (status, body) = send!(
        app,
        test::TestRequest::post()
            .uri("/api/recipes/suggest")
            .insert_header(bearer(&token))
            .set_json(json!({ "dishName": "Masala Dosa", "description": "Crispy" }))
    );
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"], "Recipe suggestion submitted.");

    let (_, listing) = send!(
        app,
        test::TestRequest::get()
            .uri("/api/admin/recipes/pending")
            .insert_header(bearer(&admin_token))
    );
    assert_eq!(listing[0]["Status"], "Pending");
    let suggestion_id = listing[0]["SuggestionID"].as_u64().unwrap();

    let (status, body) = send!(
        app,
        test::TestRequest::put()
            .uri(&format!("/api/admin/recipes/update/status/{suggestion_id}"))
            .insert_header(bearer(&admin_token))
            .set_json(json!({ "status": "Approved" }))
    );
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Suggestion status updated to Approved.");

    // the listing returns every suggestion, whatever its state
    let (_, listing) = send!(
        app,
        test::TestRequest::get()
            .uri("/api/admin/recipes/pending")
            .insert_header(bearer(&admin_token))
    );
    assert_eq!(listing.as_array().unwrap().len(), 1);
    assert_eq!(listing[0]["Status"], "Approved");

    let (_, only_pending) = send!(
        app,
        test::TestRequest::get()
            .uri("/api/admin/recipes/pending?status=Pending")
            .insert_header(bearer(&admin_token))
    );
    assert_eq!(only_pending, json!([]));

    // terminal states don't move
    let (status, _) = send!(
        app,
        test::TestRequest::put()
            .uri(&format!("/api/admin/recipes/update/status/{suggestion_id}"))
            .insert_header(bearer(&admin_token))
            .set_json(json!({ "status": "Rejected" }))
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = send!(
        app,
        test::TestRequest::put()
            .uri(&format!("/api/admin/recipes/update/status/{suggestion_id}"))
            .insert_header(bearer(&admin_token))
            .set_json(json!({ "status": "Maybe" }))
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
}

#[actix_web::test]
async fn notifications_show_three_newest_to_everyone() {
    let store = seeded_store().await;
    let app = init_app!(store);
    let (_, admin) = send!(app, login_req(ADMIN_EMAIL, ADMIN_PASSWORD, "Admin"));
    let token = admin["token"].as_str().unwrap().to_string();

    send!(app, register_req("Alice", "a@x.com", "p"));
    let (_, login) = send!(app, login_req("a@x.com", "p", "Student"));
    let alice = login["user"]["UserID"].as_u64().unwrap();

    let (status, body) = send!(
        app,
        test::TestRequest::post()
            .uri("/api/admin/notifications")
            .insert_header(bearer(&token))
            .set_json(json!({ "message": "nobody", "targetUserId": alice + 100 }))
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "User not found");

    for (i, target) in [None, Some(alice), None, None].into_iter().enumerate() {
        let (status, body) = send!(
            app,
            test::TestRequest::post()
                .uri("/api/admin/notifications")
                .insert_header(bearer(&token))
                .set_json(json!({ "message": format!("notice {i}"), "targetUserId": target }))
        );
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["message"], "Notification added.");
    }

    let (status, body) = send!(app, test::TestRequest::get().uri("/api/notifications"));
    assert_eq!(status, StatusCode::OK);
    let messages: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|n| n["Message"].as_str().unwrap())
        .collect();
    assert_eq!(messages, vec!["notice 3", "notice 2", "notice 1"]);
    assert_eq!(body[2]["TargetUserID"], alice);
}

#[actix_web::test]
async fn index_greets() {
    let store = seeded_store().await;
    let app = init_app!(store);

    let resp = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = test::read_body(resp).await;
    assert!(std::str::from_utf8(&body).unwrap().contains("Mess Management"));
}
