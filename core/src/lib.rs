//! capplan-core — the capacity-planning engine behind the quarterly
//! design-team dashboard.
//!
//! The crate is a library of pure report functions over an in-memory
//! store of people, ships, and assignments:
//!   - `load`           size→load table, per-person aggregation, alerts
//!   - `scenario`       the A/B/C prioritization scenario generator
//!   - `feasibility`    greedy per-role capacity fit for a quarter
//!   - `talking_points` conversation starters for the planning review
//!   - `approvals`      the manager approval queue with impact preview
//!   - `jira`           offline issue-tracker export → ship ingestion
//!   - `planner`        the facade that wires a store and scope to all
//!                      of the above
//!
//! Everything is deterministic: no randomness, no wall clock in any
//! report path, stable iteration orders throughout.

pub mod approvals;
pub mod error;
pub mod feasibility;
pub mod filter;
pub mod fixture;
pub mod jira;
pub mod load;
pub mod model;
pub mod planner;
pub mod scenario;
pub mod store;
pub mod talking_points;
pub mod types;

pub use error::{PlanError, PlanResult};
pub use filter::PlanScope;
pub use planner::{PlanReport, Planner};
pub use store::PlanStore;
