use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime, Utc};

use super::{DUPLICATE_EMAIL, MessStore, StoreError, StoreResult, UNKNOWN_MENU, UNKNOWN_USER};
use crate::model::{
    attendance::{Attendance, DailyAttendance, MealAttendance},
    feedback::{DishRating, Feedback, NewFeedback},
    menu::{MenuFields, MenuItem, MenuRef},
    notification::Notification,
    recipe_suggestion::{NewSuggestion, RecipeSuggestion, SuggestionStatus},
    user::{NewUser, UserSql},
};

#[derive(Default)]
struct Tables {
    users: Vec<UserSql>,
    menu: Vec<MenuItem>,
    attendance: Vec<Attendance>,
    feedback: Vec<Feedback>,
    suggestions: Vec<RecipeSuggestion>,
    notifications: Vec<Notification>,
    last_id: u64,
}

impl Tables {
    fn next_id(&mut self) -> u64 {
        self.last_id += 1;
        self.last_id
    }

    fn require_user(&self, user_id: u64) -> StoreResult<()> {
        if self.users.iter().any(|u| u.user_id == user_id) {
            Ok(())
        } else {
            Err(StoreError::MissingReference(UNKNOWN_USER.to_string()))
        }
    }

    fn require_menu(&self, menu_id: u64) -> StoreResult<()> {
        if self.menu.iter().any(|m| m.menu_id == menu_id) {
            Ok(())
        } else {
            Err(StoreError::MissingReference(UNKNOWN_MENU.to_string()))
        }
    }
}

/// Process-local `MessStore` mirroring the MySQL schema: row ordering,
/// case-insensitive email uniqueness, foreign keys and the menu cascade.
#[derive(Default)]
pub struct MemoryStore {
    tables: Mutex<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> StoreResult<MutexGuard<'_, Tables>> {
        self.tables.lock().map_err(|_| StoreError::Poisoned)
    }

    /// Number of stored attendance rows, across all users and days.
    pub fn attendance_count(&self) -> StoreResult<usize> {
        Ok(self.lock()?.attendance.len())
    }

    /// Number of stored feedback rows.
    pub fn feedback_count(&self) -> StoreResult<usize> {
        Ok(self.lock()?.feedback.len())
    }
}

fn now() -> NaiveDateTime {
    Utc::now().naive_utc()
}

fn menu_order(a: &MenuItem, b: &MenuItem) -> std::cmp::Ordering {
    b.date
        .cmp(&a.date)
        .then_with(|| a.meal_type.cmp(&b.meal_type))
        .then_with(|| a.menu_id.cmp(&b.menu_id))
}

#[async_trait]
impl MessStore for MemoryStore {
    async fn create_user(&self, user: NewUser) -> StoreResult<u64> {
        let mut t = self.lock()?;
        if t.users.iter().any(|u| u.email.eq_ignore_ascii_case(&user.email)) {
            return Err(StoreError::Duplicate(DUPLICATE_EMAIL.to_string()));
        }

        let user_id = t.next_id();
        t.users.push(UserSql {
            user_id,
            name: user.name,
            email: user.email,
            password: user.password,
            role: user.role.to_string(),
        });
        Ok(user_id)
    }

    async fn find_user_by_email(&self, email: &str) -> StoreResult<Option<UserSql>> {
        let t = self.lock()?;
        Ok(t.users.iter().find(|u| u.email.eq_ignore_ascii_case(email)).cloned())
    }

    async fn menu_for_date(&self, date: NaiveDate) -> StoreResult<Vec<MenuItem>> {
        let t = self.lock()?;
        let mut rows: Vec<MenuItem> = t.menu.iter().filter(|m| m.date == date).cloned().collect();
        rows.sort_by(menu_order);
        Ok(rows)
    }

    async fn all_menu(&self) -> StoreResult<Vec<MenuItem>> {
        let t = self.lock()?;
        let mut rows = t.menu.clone();
        rows.sort_by(menu_order);
        Ok(rows)
    }

    async fn menu_refs(&self) -> StoreResult<Vec<MenuRef>> {
        Ok(self
            .all_menu()
            .await?
            .into_iter()
            .map(|m| MenuRef {
                menu_id: m.menu_id,
                dish_name: m.dish_name,
                date: m.date,
            })
            .collect())
    }

    async fn add_menu(&self, fields: MenuFields) -> StoreResult<u64> {
        let mut t = self.lock()?;
        let menu_id = t.next_id();
        t.menu.push(fields.into_item(menu_id));
        Ok(menu_id)
    }

    async fn update_menu(&self, menu_id: u64, fields: MenuFields) -> StoreResult<u64> {
        let mut t = self.lock()?;
        match t.menu.iter_mut().find(|m| m.menu_id == menu_id) {
            Some(row) => {
                *row = fields.into_item(menu_id);
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete_menu(&self, menu_id: u64) -> StoreResult<u64> {
        let mut t = self.lock()?;
        let before = t.menu.len();
        t.menu.retain(|m| m.menu_id != menu_id);
        let removed = (before - t.menu.len()) as u64;
        if removed > 0 {
            t.feedback.retain(|f| f.menu_id != menu_id);
        }
        Ok(removed)
    }

    async fn record_attendance(
        &self,
        user_id: u64,
        date: NaiveDate,
        meal_type: &str,
        status: &str,
    ) -> StoreResult<u64> {
        let mut t = self.lock()?;
        t.require_user(user_id)?;
        let attendance_id = t.next_id();
        t.attendance.push(Attendance {
            attendance_id,
            user_id,
            date,
            meal_type: meal_type.to_string(),
            status: status.to_string(),
        });
        Ok(attendance_id)
    }

    async fn attendance_by_meal(&self, date: NaiveDate) -> StoreResult<Vec<MealAttendance>> {
        let t = self.lock()?;
        let mut totals: BTreeMap<&str, i64> = BTreeMap::new();
        for row in t.attendance.iter().filter(|a| a.date == date) {
            *totals.entry(row.meal_type.as_str()).or_default() += 1;
        }
        Ok(totals
            .into_iter()
            .map(|(meal_type, total_attendance)| MealAttendance {
                meal_type: meal_type.to_string(),
                total_attendance,
            })
            .collect())
    }

    async fn attendance_report(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> StoreResult<Vec<DailyAttendance>> {
        let t = self.lock()?;
        let mut totals: BTreeMap<NaiveDate, i64> = BTreeMap::new();
        for row in t.attendance.iter().filter(|a| a.date >= start && a.date <= end) {
            *totals.entry(row.date).or_default() += 1;
        }
        Ok(totals
            .into_iter()
            .map(|(date, total_attendance)| DailyAttendance {
                date,
                total_attendance,
            })
            .collect())
    }

    async fn submit_feedback(&self, feedback: NewFeedback) -> StoreResult<u64> {
        let mut t = self.lock()?;
        t.require_user(feedback.user_id)?;
        t.require_menu(feedback.menu_id)?;
        let feedback_id = t.next_id();
        t.feedback.push(Feedback {
            feedback_id,
            user_id: feedback.user_id,
            menu_id: feedback.menu_id,
            rating: feedback.rating,
            comment: feedback.comment,
        });
        Ok(feedback_id)
    }

    async fn average_ratings(&self) -> StoreResult<Vec<DishRating>> {
        let t = self.lock()?;
        let mut sums: BTreeMap<&str, (i64, i64)> = BTreeMap::new();
        for f in &t.feedback {
            // inner join: feedback without a menu row is skipped
            if let Some(menu) = t.menu.iter().find(|m| m.menu_id == f.menu_id) {
                let entry = sums.entry(menu.dish_name.as_str()).or_default();
                entry.0 += i64::from(f.rating);
                entry.1 += 1;
            }
        }

        let mut rows: Vec<DishRating> = sums
            .into_iter()
            .map(|(dish_name, (sum, count))| DishRating {
                dish_name: dish_name.to_string(),
                average_rating: sum as f64 / count as f64,
            })
            .collect();
        rows.sort_by(|a, b| {
            b.average_rating
                .total_cmp(&a.average_rating)
                .then_with(|| a.dish_name.cmp(&b.dish_name))
        });
        Ok(rows)
    }

    async fn suggest_recipe(&self, suggestion: NewSuggestion) -> StoreResult<u64> {
        let mut t = self.lock()?;
        t.require_user(suggestion.user_id)?;
        let suggestion_id = t.next_id();
        t.suggestions.push(RecipeSuggestion {
            suggestion_id,
            user_id: suggestion.user_id,
            dish_name: suggestion.dish_name,
            description: suggestion.description,
            status: SuggestionStatus::Pending.to_string(),
            date: now(),
        });
        Ok(suggestion_id)
    }

    async fn suggestions(
        &self,
        status: Option<SuggestionStatus>,
    ) -> StoreResult<Vec<RecipeSuggestion>> {
        let t = self.lock()?;
        let mut rows: Vec<RecipeSuggestion> = t
            .suggestions
            .iter()
            .filter(|s| status.map_or(true, |st| s.status == st.as_ref()))
            .cloned()
            .collect();
        rows.sort_by(|a, b| {
            b.date
                .cmp(&a.date)
                .then_with(|| b.suggestion_id.cmp(&a.suggestion_id))
        });
        Ok(rows)
    }

    async fn moderate_suggestion(
        &self,
        suggestion_id: u64,
        status: SuggestionStatus,
    ) -> StoreResult<u64> {
        let mut t = self.lock()?;
        let pending = SuggestionStatus::Pending.to_string();
        match t
            .suggestions
            .iter_mut()
            .find(|s| s.suggestion_id == suggestion_id && s.status == pending)
        {
            Some(row) => {
                row.status = status.to_string();
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn post_notification(
        &self,
        message: &str,
        target_user_id: Option<u64>,
    ) -> StoreResult<u64> {
        let mut t = self.lock()?;
        if let Some(user_id) = target_user_id {
            t.require_user(user_id)?;
        }
        let notification_id = t.next_id();
        t.notifications.push(Notification {
            notification_id,
            message: message.to_string(),
            target_user_id,
            date: now(),
        });
        Ok(notification_id)
    }

    async fn recent_notifications(&self, limit: u32) -> StoreResult<Vec<Notification>> {
        let t = self.lock()?;
        let mut rows = t.notifications.clone();
        rows.sort_by(|a, b| {
            b.date
                .cmp(&a.date)
                .then_with(|| b.notification_id.cmp(&a.notification_id))
        });
        rows.truncate(limit as usize);
        Ok(rows)
    }
}
