//! Injected handle over the relational store.
//!
//! Every HTTP route maps to one method here. Handlers only ever see
//! `web::Data<dyn MessStore>`, so the MySQL pool and the in-memory store are
//! interchangeable.

use async_trait::async_trait;
use chrono::NaiveDate;
use thiserror::Error;

use crate::model::{
    attendance::{DailyAttendance, MealAttendance},
    feedback::{DishRating, NewFeedback},
    menu::{MenuFields, MenuItem, MenuRef},
    notification::Notification,
    recipe_suggestion::{NewSuggestion, RecipeSuggestion, SuggestionStatus},
    user::{NewUser, UserSql},
};

pub mod memory;
pub mod mysql;

pub use memory::MemoryStore;
pub use mysql::MySqlStore;

#[derive(Error, Debug)]
pub enum StoreError {
    /// A unique constraint rejected the write; carries a client-facing message.
    #[error("{0}")]
    Duplicate(String),

    /// A foreign key points at a row that doesn't exist.
    #[error("{0}")]
    MissingReference(String),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("in-memory store lock poisoned")]
    Poisoned,
}

pub type StoreResult<T> = Result<T, StoreError>;

pub(crate) const DUPLICATE_EMAIL: &str = "Email already registered.";
pub(crate) const UNKNOWN_USER: &str = "User not found";
pub(crate) const UNKNOWN_MENU: &str = "Menu item not found";

#[async_trait]
pub trait MessStore: Send + Sync + 'static {
    // users
    async fn create_user(&self, user: NewUser) -> StoreResult<u64>;
    async fn find_user_by_email(&self, email: &str) -> StoreResult<Option<UserSql>>;

    // menu
    /// Rows for one date, ordered by meal type ascending.
    async fn menu_for_date(&self, date: NaiveDate) -> StoreResult<Vec<MenuItem>>;
    /// All rows, date descending then meal type ascending.
    async fn all_menu(&self) -> StoreResult<Vec<MenuItem>>;
    async fn menu_refs(&self) -> StoreResult<Vec<MenuRef>>;
    async fn add_menu(&self, fields: MenuFields) -> StoreResult<u64>;
    /// Returns the number of rows replaced (0 when the id is unknown).
    async fn update_menu(&self, menu_id: u64, fields: MenuFields) -> StoreResult<u64>;
    /// Hard delete; dependent feedback goes with it.
    async fn delete_menu(&self, menu_id: u64) -> StoreResult<u64>;

    // attendance
    async fn record_attendance(
        &self,
        user_id: u64,
        date: NaiveDate,
        meal_type: &str,
        status: &str,
    ) -> StoreResult<u64>;
    async fn attendance_by_meal(&self, date: NaiveDate) -> StoreResult<Vec<MealAttendance>>;
    /// Per-day totals over the inclusive range; days with no check-ins are absent.
    async fn attendance_report(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> StoreResult<Vec<DailyAttendance>>;

    // feedback
    async fn submit_feedback(&self, feedback: NewFeedback) -> StoreResult<u64>;
    /// Mean rating per dish name, highest first.
    async fn average_ratings(&self) -> StoreResult<Vec<DishRating>>;

    // recipe suggestions
    async fn suggest_recipe(&self, suggestion: NewSuggestion) -> StoreResult<u64>;
    /// Newest first, optionally narrowed to one status.
    async fn suggestions(&self, status: Option<SuggestionStatus>)
    -> StoreResult<Vec<RecipeSuggestion>>;
    /// Moves a `Pending` suggestion to `status`. Returns rows affected, so 0
    /// means unknown id or already moderated.
    async fn moderate_suggestion(
        &self,
        suggestion_id: u64,
        status: SuggestionStatus,
    ) -> StoreResult<u64>;

    // notifications
    async fn post_notification(&self, message: &str, target_user_id: Option<u64>)
    -> StoreResult<u64>;
    async fn recent_notifications(&self, limit: u32) -> StoreResult<Vec<Notification>>;
}
