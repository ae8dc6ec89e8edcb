use chrono::{NaiveDate, Utc};

pub mod attendance;
pub mod feedback;
pub mod menu;
pub mod notification;
pub mod recipe;

/// Server-side "current day" used for menu defaults and check-ins.
pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}
