//! Business logic: the recurrence rule, day and month queries, the planner
//! façade and the per-command logic built on top of them.

pub mod add;
pub mod config;
pub mod day;
pub mod del;
pub mod edit;
pub mod log;
pub mod month;
pub mod planner;
pub mod recurrence;

pub use planner::Planner;
