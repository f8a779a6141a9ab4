//! Campaign performance and budget-projection engine.
//!
//! Every function here is a pure transformation over values already loaded
//! from the database. Nothing derived is cached; resolvers recompute the
//! whole pipeline on every request.

pub mod aggregate;
pub mod budget;
pub mod funnel;
pub mod projection;
pub mod rates;
pub mod recommend;

pub const WEEKS_PER_YEAR: f64 = 52.0;

/// Period goals supplied by the caller alongside a campaign. Never persisted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Goals {
    pub target_appointments: i32,
    pub target_response_rate: f64,
    pub target_volume: i32,
    pub allocated_budget: f64,
}

impl Default for Goals {
    fn default() -> Self {
        Self {
            target_appointments: 270,
            target_response_rate: 5.0,
            target_volume: 60_000,
            allocated_budget: 5_200.0,
        }
    }
}
