//! Domain records: people, ships, assignments, pending requests.
//!
//! All records are plain owned data. They are built once from fixtures
//! (or appended at runtime through the store) and handed to the pure
//! report functions as slices. Nothing here computes anything.

use crate::types::{OnePagerStatus, PersonId, Priority, Quarter, Role, ShipId, ShipStatus, TShirtSize};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    pub id: PersonId,
    pub name: String,
    pub role: Role,
    pub area: String,
    #[serde(default)]
    pub product: Option<String>,
    pub manager_name: String,
}

/// A planned initiative tracked for delivery in a target quarter.
///
/// `tshirt_size_by_role` is partial: a role absent from the map is not
/// required by this ship. A BTreeMap keeps role iteration order stable
/// so every report is byte-identical across runs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Ship {
    pub id: ShipId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jira_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jira_url: Option<String>,
    pub title: String,
    pub area: String,
    pub product: String,
    pub pm_names: Vec<String>,
    pub target_quarter: Quarter,
    #[serde(default)]
    pub tshirt_size_by_role: BTreeMap<Role, TShirtSize>,
    pub status: ShipStatus,
    #[serde(default)]
    pub priority: Option<Priority>,
    #[serde(default)]
    pub must_have: Option<bool>,
    #[serde(default)]
    pub one_pager_status: Option<OnePagerStatus>,
}

impl Ship {
    /// Missing `must_have` means nice-to-have.
    pub fn is_must_have(&self) -> bool {
        self.must_have.unwrap_or(false)
    }
}

/// A slice of one person's quarter allocated to one ship.
///
/// Multiple assignments for the same (person, quarter) are additive.
/// There is no cap at the data level — overload is a derived status,
/// not a constraint violation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Assignment {
    pub person_id: PersonId,
    pub ship_id: ShipId,
    pub quarter: Quarter,
    pub load_percent: u32,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RequestStatus {
    Pending,
    Approved,
    Declined,
}

impl RequestStatus {
    pub fn label(&self) -> &'static str {
        match self {
            RequestStatus::Pending => "pending",
            RequestStatus::Approved => "approved",
            RequestStatus::Declined => "declined",
        }
    }
}

/// A capacity-increase request awaiting manager review.
/// Resolved in place; never physically deleted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PendingRequest {
    pub id: String,
    pub ship_id: ShipId,
    pub person_id: PersonId,
    pub requested_by: String,
    pub requested_at: DateTime<Utc>,
    pub status: RequestStatus,
}
