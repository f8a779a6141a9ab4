pub mod campaign;
pub mod error;
pub mod infrastructure;
pub mod project;
pub mod validation;
pub mod weekly_entry;

pub use campaign::CampaignService;
pub use error::ServiceError;
pub use infrastructure::InfrastructureService;
pub use project::{ProjectService, ProjectType};
pub use weekly_entry::WeeklyEntryService;
