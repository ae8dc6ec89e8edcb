use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};
use utoipa::ToSchema;

/// Moderation state. `Pending` is the only initial state; the other two are terminal.
#[derive(
    Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize, Display, EnumString, AsRefStr, ToSchema,
)]
pub enum SuggestionStatus {
    Pending,
    Approved,
    Rejected,
}

impl SuggestionStatus {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, SuggestionStatus::Pending)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
#[serde(rename_all = "PascalCase")]
pub struct RecipeSuggestion {
    #[serde(rename = "SuggestionID")]
    pub suggestion_id: u64,
    #[serde(rename = "UserID")]
    pub user_id: u64,
    pub dish_name: String,
    pub description: String,
    #[schema(example = "Pending")]
    pub status: String,
    #[schema(example = "2024-01-01T12:00:00", format = "date-time", value_type = String)]
    pub date: NaiveDateTime,
}

#[derive(Debug, Clone)]
pub struct NewSuggestion {
    pub user_id: u64,
    pub dish_name: String,
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_known_statuses_parse() {
        assert_eq!("Approved".parse::<SuggestionStatus>().ok(), Some(SuggestionStatus::Approved));
        assert_eq!("Rejected".parse::<SuggestionStatus>().ok(), Some(SuggestionStatus::Rejected));
        assert!("Maybe".parse::<SuggestionStatus>().is_err());
    }

    #[test]
    fn pending_is_the_only_non_terminal_state() {
        assert!(!SuggestionStatus::Pending.is_terminal());
        assert!(SuggestionStatus::Approved.is_terminal());
        assert!(SuggestionStatus::Rejected.is_terminal());
    }
}
