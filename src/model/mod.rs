pub mod attendance;
pub mod feedback;
pub mod menu;
pub mod notification;
pub mod recipe_suggestion;
pub mod role;
pub mod serde_helpers;
pub mod user;
