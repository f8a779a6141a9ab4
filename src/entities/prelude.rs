pub use super::campaign::Entity as Campaign;
pub use super::infrastructure::Entity as Infrastructure;
pub use super::project::Entity as Project;
pub use super::weekly_entry::Entity as WeeklyEntry;
