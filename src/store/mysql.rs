use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::MySqlPool;
use tracing::debug;

use super::{DUPLICATE_EMAIL, MessStore, StoreError, StoreResult, UNKNOWN_MENU, UNKNOWN_USER};
use crate::model::{
    attendance::{DailyAttendance, MealAttendance},
    feedback::{DishRating, NewFeedback},
    menu::{MenuFields, MenuItem, MenuRef},
    notification::Notification,
    recipe_suggestion::{NewSuggestion, RecipeSuggestion, SuggestionStatus},
    user::{NewUser, UserSql},
};

/// `MessStore` over a MySQL pool. Each method issues one parameterized statement.
#[derive(Clone)]
pub struct MySqlStore {
    pool: MySqlPool,
}

impl MySqlStore {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

fn unique_violation(e: sqlx::Error, message: &str) -> StoreError {
    if let sqlx::Error::Database(db_err) = &e {
        if db_err.is_unique_violation() {
            return StoreError::Duplicate(message.to_string());
        }
    }
    StoreError::Database(e)
}

// `message` receives the server's error text, which names the violated constraint.
fn missing_reference(e: sqlx::Error, message: impl FnOnce(&str) -> &'static str) -> StoreError {
    if let sqlx::Error::Database(db_err) = &e {
        if db_err.is_foreign_key_violation() {
            return StoreError::MissingReference(message(db_err.message()).to_string());
        }
    }
    StoreError::Database(e)
}

#[async_trait]
impl MessStore for MySqlStore {
    async fn create_user(&self, user: NewUser) -> StoreResult<u64> {
        let result = sqlx::query(
            r#"INSERT INTO users (name, email, password, role) VALUES (?, ?, ?, ?)"#,
        )
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.password)
        .bind(user.role.as_ref())
        .execute(&self.pool)
        .await
        .map_err(|e| unique_violation(e, DUPLICATE_EMAIL))?;

        Ok(result.last_insert_id())
    }

    async fn find_user_by_email(&self, email: &str) -> StoreResult<Option<UserSql>> {
        let user = sqlx::query_as::<_, UserSql>(
            r#"
            SELECT user_id, name, email, password, role
            FROM users
            WHERE email = ?
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn menu_for_date(&self, date: NaiveDate) -> StoreResult<Vec<MenuItem>> {
        let rows = sqlx::query_as::<_, MenuItem>(
            r#"
            SELECT menu_id, date, meal_type, dish_name, dietary_type, description
            FROM menu
            WHERE date = ?
            ORDER BY meal_type ASC, menu_id ASC
            "#,
        )
        .bind(date)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    async fn all_menu(&self) -> StoreResult<Vec<MenuItem>> {
        let rows = sqlx::query_as::<_, MenuItem>(
            r#"
            SELECT menu_id, date, meal_type, dish_name, dietary_type, description
            FROM menu
            ORDER BY date DESC, meal_type ASC, menu_id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    async fn menu_refs(&self) -> StoreResult<Vec<MenuRef>> {
        let rows = sqlx::query_as::<_, MenuRef>(
            r#"
            SELECT menu_id, dish_name, date
            FROM menu
            ORDER BY date DESC, meal_type ASC, menu_id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    async fn add_menu(&self, fields: MenuFields) -> StoreResult<u64> {
        let result = sqlx::query(
            r#"
            INSERT INTO menu (date, meal_type, dish_name, dietary_type, description)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(fields.date)
        .bind(&fields.meal_type)
        .bind(&fields.dish_name)
        .bind(&fields.dietary_type)
        .bind(&fields.description)
        .execute(&self.pool)
        .await?;

        Ok(result.last_insert_id())
    }

    async fn update_menu(&self, menu_id: u64, fields: MenuFields) -> StoreResult<u64> {
        let result = sqlx::query(
            r#"
            UPDATE menu
            SET date = ?, meal_type = ?, dish_name = ?, dietary_type = ?, description = ?
            WHERE menu_id = ?
            "#,
        )
        .bind(fields.date)
        .bind(&fields.meal_type)
        .bind(&fields.dish_name)
        .bind(&fields.dietary_type)
        .bind(&fields.description)
        .bind(menu_id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() > 0 {
            return Ok(result.rows_affected());
        }

        // MySQL reports 0 for a matched row whose values didn't change.
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM menu WHERE menu_id = ? LIMIT 1)",
        )
        .bind(menu_id)
        .fetch_one(&self.pool)
        .await?;

        debug!(menu_id, exists, "Menu update changed no rows");
        Ok(u64::from(exists))
    }

    async fn delete_menu(&self, menu_id: u64) -> StoreResult<u64> {
        let result = sqlx::query(r#"DELETE FROM menu WHERE menu_id = ?"#)
            .bind(menu_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    async fn record_attendance(
        &self,
        user_id: u64,
        date: NaiveDate,
        meal_type: &str,
        status: &str,
    ) -> StoreResult<u64> {
        let result = sqlx::query(
            r#"
            INSERT INTO attendance (user_id, date, meal_type, status)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(user_id)
        .bind(date)
        .bind(meal_type)
        .bind(status)
        .execute(&self.pool)
        .await
        .map_err(|e| missing_reference(e, |_| UNKNOWN_USER))?;

        Ok(result.last_insert_id())
    }

    async fn attendance_by_meal(&self, date: NaiveDate) -> StoreResult<Vec<MealAttendance>> {
        let rows = sqlx::query_as::<_, MealAttendance>(
            r#"
            SELECT meal_type, COUNT(attendance_id) AS total_attendance
            FROM attendance
            WHERE date = ?
            GROUP BY meal_type
            ORDER BY meal_type ASC
            "#,
        )
        .bind(date)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    async fn attendance_report(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> StoreResult<Vec<DailyAttendance>> {
        let rows = sqlx::query_as::<_, DailyAttendance>(
            r#"
            SELECT date, total_attendance
            FROM attendance_daily_totals
            WHERE date BETWEEN ? AND ?
            ORDER BY date ASC
            "#,
        )
        .bind(start)
        .bind(end)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    async fn submit_feedback(&self, feedback: NewFeedback) -> StoreResult<u64> {
        let result = sqlx::query(
            r#"
            INSERT INTO feedback (user_id, menu_id, rating, comment)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(feedback.user_id)
        .bind(feedback.menu_id)
        .bind(feedback.rating)
        .bind(&feedback.comment)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            missing_reference(e, |msg| {
                if msg.contains("fk_feedback_menu") {
                    UNKNOWN_MENU
                } else {
                    UNKNOWN_USER
                }
            })
        })?;

        Ok(result.last_insert_id())
    }

    async fn average_ratings(&self) -> StoreResult<Vec<DishRating>> {
        let rows = sqlx::query_as::<_, DishRating>(
            r#"
            SELECT m.dish_name, CAST(AVG(f.rating) AS DOUBLE) AS average_rating
            FROM feedback AS f
            JOIN menu AS m ON f.menu_id = m.menu_id
            GROUP BY m.dish_name
            ORDER BY average_rating DESC, m.dish_name ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    async fn suggest_recipe(&self, suggestion: NewSuggestion) -> StoreResult<u64> {
        let result = sqlx::query(
            r#"
            INSERT INTO recipe_suggestions (user_id, dish_name, description)
            VALUES (?, ?, ?)
            "#,
        )
        .bind(suggestion.user_id)
        .bind(&suggestion.dish_name)
        .bind(&suggestion.description)
        .execute(&self.pool)
        .await
        .map_err(|e| missing_reference(e, |_| UNKNOWN_USER))?;

        Ok(result.last_insert_id())
    }

    async fn suggestions(
        &self,
        status: Option<SuggestionStatus>,
    ) -> StoreResult<Vec<RecipeSuggestion>> {
        let rows = match status {
            Some(status) => {
                sqlx::query_as::<_, RecipeSuggestion>(
                    r#"
                    SELECT suggestion_id, user_id, dish_name, description, status, date
                    FROM recipe_suggestions
                    WHERE status = ?
                    ORDER BY date DESC, suggestion_id DESC
                    "#,
                )
                .bind(status.as_ref())
                .fetch_all(&self.pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, RecipeSuggestion>(
                    r#"
                    SELECT suggestion_id, user_id, dish_name, description, status, date
                    FROM recipe_suggestions
                    ORDER BY date DESC, suggestion_id DESC
                    "#,
                )
                .fetch_all(&self.pool)
                .await?
            }
        };

        Ok(rows)
    }

    async fn moderate_suggestion(
        &self,
        suggestion_id: u64,
        status: SuggestionStatus,
    ) -> StoreResult<u64> {
        let result = sqlx::query(
            r#"
            UPDATE recipe_suggestions
            SET status = ?
            WHERE suggestion_id = ?
            AND status = 'Pending'
            "#,
        )
        .bind(status.as_ref())
        .bind(suggestion_id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    async fn post_notification(
        &self,
        message: &str,
        target_user_id: Option<u64>,
    ) -> StoreResult<u64> {
        let result = sqlx::query(
            r#"INSERT INTO notifications (message, target_user_id) VALUES (?, ?)"#,
        )
        .bind(message)
        .bind(target_user_id)
        .execute(&self.pool)
        .await
        .map_err(|e| missing_reference(e, |_| UNKNOWN_USER))?;

        Ok(result.last_insert_id())
    }

    async fn recent_notifications(&self, limit: u32) -> StoreResult<Vec<Notification>> {
        let rows = sqlx::query_as::<_, Notification>(
            r#"
            SELECT notification_id, message, target_user_id, date
            FROM notifications
            ORDER BY date DESC, notification_id DESC
            LIMIT ?
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }
}
