use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
#[serde(rename_all = "PascalCase")]
#[schema(example = json!({
    "MenuID": 1,
    "Date": "2024-01-01",
    "MealType": "Lunch",
    "DishName": "Rajma Chawal",
    "DietaryType": "Vegetarian",
    "Description": "Kidney beans with steamed rice"
}))]
pub struct MenuItem {
    #[serde(rename = "MenuID")]
    pub menu_id: u64,
    #[schema(value_type = String, format = "date")]
    pub date: NaiveDate,
    pub meal_type: String,
    pub dish_name: String,
    pub dietary_type: String,
    pub description: String,
}

/// The five admin-editable columns of a menu row. Used for both add and full-replace update.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "PascalCase")]
pub struct MenuFields {
    #[schema(example = "2024-01-01", format = "date", value_type = String)]
    pub date: NaiveDate,
    #[schema(example = "Lunch")]
    pub meal_type: String,
    #[schema(example = "Rajma Chawal")]
    pub dish_name: String,
    #[schema(example = "Vegetarian")]
    pub dietary_type: String,
    #[serde(default)]
    #[schema(example = "Kidney beans with steamed rice")]
    pub description: String,
}

impl MenuFields {
    pub fn into_item(self, menu_id: u64) -> MenuItem {
        MenuItem {
            menu_id,
            date: self.date,
            meal_type: self.meal_type,
            dish_name: self.dish_name,
            dietary_type: self.dietary_type,
            description: self.description,
        }
    }
}

/// Lightweight listing used by the feedback form's dish picker.
#[derive(Debug, Clone, Serialize, sqlx::FromRow, ToSchema)]
#[serde(rename_all = "PascalCase")]
pub struct MenuRef {
    #[serde(rename = "MenuID")]
    pub menu_id: u64,
    pub dish_name: String,
    #[schema(value_type = String, format = "date")]
    pub date: NaiveDate,
}
