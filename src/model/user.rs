use serde::Serialize;
use utoipa::ToSchema;

use super::role::Role;

#[derive(Clone, sqlx::FromRow)]
pub struct UserSql {
    pub user_id: u64, // 👈 matches BIGINT UNSIGNED
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: String,
}

/// Public view of an account, returned on login. Never carries the password hash.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[schema(example = json!({
    "UserID": 1,
    "Name": "Alice",
    "Email": "a@x.com",
    "Role": "Student"
}))]
pub struct UserProfile {
    #[serde(rename = "UserID")]
    pub user_id: u64,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Email")]
    pub email: String,
    #[serde(rename = "Role")]
    pub role: Role,
}

/// Insert payload for `users`; `password` is already hashed.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}
