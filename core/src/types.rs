//! Shared primitive types and enumerations used across the planner.

use serde::{Deserialize, Serialize};

/// A stable, unique identifier for a person.
pub type PersonId = String;

/// A stable, unique identifier for a ship (planned initiative).
pub type ShipId = String;

/// A planning window label, e.g. "Q1 2026".
pub type Quarter = String;

/// The three staffed disciplines tracked by the planner.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Role {
    Designer,
    Content,
    Frontend,
}

impl Role {
    /// Every role, in the fixed order reports iterate them.
    pub const ALL: [Role; 3] = [Role::Designer, Role::Content, Role::Frontend];

    pub fn label(&self) -> &'static str {
        match self {
            Role::Designer => "Designer",
            Role::Content => "Content",
            Role::Frontend => "Frontend",
        }
    }
}

/// Coarse effort estimate. Converted to a load percentage by
/// `load::size_to_load` — the only place the numbers live.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TShirtSize {
    S,
    M,
    L,
    XL,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ShipStatus {
    Planned,
    Committed,
    Backlog,
    #[serde(rename = "In Review")]
    InReview,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
pub enum Priority {
    P1,
    P2,
    P3,
    P4,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum OnePagerStatus {
    #[default]
    Missing,
    InProgress,
    ReadyForReview,
    Approved,
}

/// Derived per-person capacity classification. Never stored.
///
/// The (85, 100) threshold pair is the single invariant behind every
/// alerting decision in the planner; it lives in `load::capacity_status`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CapacityStatus {
    Healthy,
    Borderline,
    Overloaded,
}

/// Derived per-role health in the feasibility report.
/// Thresholds differ from `CapacityStatus`: >100% overloaded, >80% at-risk.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum RoleHealth {
    Healthy,
    AtRisk,
    Overloaded,
}
