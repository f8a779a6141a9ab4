pub mod prelude;

pub mod campaign;
pub mod infrastructure;
pub mod project;
pub mod weekly_entry;
