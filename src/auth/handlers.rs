use crate::{
    auth::{
        jwt::generate_access_token,
        password::{hash_password, verify_password},
    },
    config::Config,
    error::AppError,
    model::{
        role::Role,
        user::{NewUser, UserProfile},
    },
    models::{LoginReqDto, RegisterReq},
    store::{MessStore, StoreError},
};
use actix_web::{HttpResponse, web};
use serde_json::json;
use tracing::{debug, error, info, instrument};

const INVALID_CREDENTIALS: &str = "Invalid credentials";

/// Emails are stored and looked up trimmed and lowercased.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_ascii_lowercase()
}

/// Student self-registration
#[utoipa::path(
    post,
    path = "/api/auth/register/student",
    request_body = RegisterReq,
    responses(
        (status = 201, description = "Student registered", body = Object, example = json!({
            "success": true,
            "message": "Registration successful. Please log in."
        })),
        (status = 409, description = "Email already registered", body = Object, example = json!({
            "success": false,
            "message": "Email already registered."
        })),
        (status = 500, description = "Internal server error")
    ),
    tag = "Auth"
)]
#[instrument(name = "auth_register", skip(store, user), fields(email = %user.email))]
pub async fn register(
    user: web::Json<RegisterReq>,
    store: web::Data<dyn MessStore>,
) -> Result<HttpResponse, AppError> {
    let RegisterReq {
        name,
        email,
        password,
    } = user.into_inner();

    let hashed = hash_password(&password).map_err(|e| {
        error!(error = %e, "Failed to hash password");
        AppError::Internal
    })?;

    let user_id = store
        .create_user(NewUser {
            name,
            email: normalize_email(&email),
            password: hashed,
            role: Role::Student,
        })
        .await
        .map_err(|e| {
            if matches!(e, StoreError::Duplicate(_)) {
                info!("Registration rejected: email already registered");
            }
            AppError::from(e)
        })?;

    info!(user_id, "Student registered");

    Ok(HttpResponse::Created().json(json!({
        "success": true,
        "message": "Registration successful. Please log in."
    })))
}

/// Login for students and admins
#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginReqDto,
    responses(
        (status = 200, description = "Logged in", body = Object, example = json!({
            "success": true,
            "user": { "UserID": 1, "Name": "Alice", "Email": "a@x.com", "Role": "Student" },
            "token": "eyJhbGciOiJIUzI1NiJ9..."
        })),
        (status = 401, description = "Invalid credentials", body = Object, example = json!({
            "success": false,
            "message": "Invalid credentials"
        })),
        (status = 500, description = "Internal server error")
    ),
    tag = "Auth"
)]
#[instrument(
    name = "auth_login",
    skip(store, config, user),
    fields(email = %user.email, role = %user.role)
)]
pub async fn login(
    user: web::Json<LoginReqDto>,
    store: web::Data<dyn MessStore>,
    config: web::Data<Config>,
) -> Result<HttpResponse, AppError> {
    info!("Login request received");

    debug!("Fetching user from store");

    let db_user = match store.find_user_by_email(&normalize_email(&user.email)).await? {
        Some(u) => u,
        None => {
            info!("Invalid credentials: user not found");
            return Err(AppError::Unauthorized(INVALID_CREDENTIALS.into()));
        }
    };

    if let Err(e) = verify_password(&user.password, &db_user.password) {
        info!(error = %e, "Invalid credentials: password mismatch");
        return Err(AppError::Unauthorized(INVALID_CREDENTIALS.into()));
    }

    // The stated role must match the stored one; the response doesn't say which check failed.
    let role = match (Role::from_name(&db_user.role), Role::from_name(&user.role)) {
        (Some(stored), Some(claimed)) if stored == claimed => stored,
        (None, _) => {
            error!(user_id = db_user.user_id, role = %db_user.role, "Stored role is not recognised");
            return Err(AppError::Unauthorized(INVALID_CREDENTIALS.into()));
        }
        _ => {
            info!("Invalid credentials: role mismatch");
            return Err(AppError::Unauthorized(INVALID_CREDENTIALS.into()));
        }
    };

    debug!("Generating access token");

    let token = generate_access_token(
        db_user.user_id,
        db_user.email.clone(),
        role,
        &config.jwt_secret,
        config.access_token_ttl,
    )
    .map_err(|e| {
        error!(error = %e, "Failed to sign access token");
        AppError::Internal
    })?;

    info!(user_id = db_user.user_id, "Login successful");

    let profile = UserProfile {
        user_id: db_user.user_id,
        name: db_user.name,
        email: db_user.email,
        role,
    };

    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "user": profile,
        "token": token
    })))
}

/// Creates the configured admin account unless the email is already taken.
pub async fn bootstrap_admin(
    store: &dyn MessStore,
    name: &str,
    email: &str,
    password: &str,
) -> anyhow::Result<()> {
    let hashed = hash_password(password).map_err(|e| anyhow::anyhow!("hash admin password: {e}"))?;

    match store
        .create_user(NewUser {
            name: name.to_string(),
            email: normalize_email(email),
            password: hashed,
            role: Role::Admin,
        })
        .await
    {
        Ok(user_id) => {
            info!(user_id, email, "Admin account created");
            Ok(())
        }
        Err(StoreError::Duplicate(_)) => {
            debug!(email, "Admin account already present");
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}
