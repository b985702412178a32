pub mod catalog;
pub mod cli;
pub mod error;
pub mod interface;
pub mod models;
pub mod planner;
pub mod scoring;
pub mod storage;
pub mod targets;
pub mod workout;

pub use error::{CoachError, Result};
pub use models::{DailyTarget, DayPlan, DayRecord, PlanRequest, Profile};
