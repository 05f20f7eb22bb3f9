//! Load mapping and per-person load aggregation.
//!
//! RULE: the size→load table and the (85, 100) status thresholds are
//! defined here and nowhere else. Every other module converts sizes
//! and classifies utilization through these functions.

use crate::{
    model::{Assignment, Person},
    types::{CapacityStatus, PersonId, Quarter, TShirtSize},
};
use serde::{Deserialize, Serialize};

/// T-shirt size → load percentage. S→8, M→31, L→80, XL→160.
pub fn size_to_load(size: TShirtSize) -> u32 {
    match size {
        TShirtSize::S => 8,
        TShirtSize::M => 31,
        TShirtSize::L => 80,
        TShirtSize::XL => 160,
    }
}

/// Same table over an optional size. Absent (role not required,
/// unparsed fixture value) loads 0 — never an error.
pub fn size_to_load_opt(size: Option<TShirtSize>) -> u32 {
    size.map(size_to_load).unwrap_or(0)
}

/// Sum of load percents assigned to `person_id` in `quarter`.
/// 0 when nothing matches. Order of the assignment slice is irrelevant.
pub fn load_for_person(assignments: &[Assignment], person_id: &str, quarter: &str) -> u32 {
    assignments
        .iter()
        .filter(|a| a.person_id == person_id && a.quarter == quarter)
        .map(|a| a.load_percent)
        .sum()
}

/// Average load for a person across several selected quarters.
/// An empty selection averages to 0 rather than dividing by zero.
pub fn average_load_for_person(
    assignments: &[Assignment],
    person_id: &str,
    quarters: &[Quarter],
) -> f64 {
    if quarters.is_empty() {
        return 0.0;
    }
    let total: u32 = quarters
        .iter()
        .map(|q| load_for_person(assignments, person_id, q))
        .sum();
    f64::from(total) / quarters.len() as f64
}

/// Classify an aggregate load. ≤85 healthy, ≤100 borderline, else overloaded.
pub fn capacity_status(load_percent: u32) -> CapacityStatus {
    if load_percent <= 85 {
        CapacityStatus::Healthy
    } else if load_percent <= 100 {
        CapacityStatus::Borderline
    } else {
        CapacityStatus::Overloaded
    }
}

/// Utilization percentage of a workload against an availability.
/// Zero availability yields 0.0, not NaN.
pub fn utilization(workload: u32, availability: u32) -> f64 {
    if availability == 0 {
        return 0.0;
    }
    f64::from(workload) / f64::from(availability) * 100.0
}

/// Names of people over and near capacity for one quarter.
/// Input order of the people slice is preserved in both lists.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CapacityAlerts {
    pub overloaded: Vec<String>,
    pub near_capacity: Vec<String>,
}

impl CapacityAlerts {
    pub fn is_empty(&self) -> bool {
        self.overloaded.is_empty() && self.near_capacity.is_empty()
    }
}

pub fn capacity_alerts(
    people: &[Person],
    assignments: &[Assignment],
    quarter: &str,
) -> CapacityAlerts {
    let mut alerts = CapacityAlerts::default();
    for person in people {
        let load = load_for_person(assignments, &person.id, quarter);
        match capacity_status(load) {
            CapacityStatus::Overloaded => alerts.overloaded.push(person.name.clone()),
            CapacityStatus::Borderline => alerts.near_capacity.push(person.name.clone()),
            CapacityStatus::Healthy => {}
        }
    }
    alerts
}

/// One dashboard row: a person plus their derived load for the window.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CapacityRow {
    pub person_id: PersonId,
    pub name: String,
    pub role: crate::types::Role,
    pub area: String,
    pub product: Option<String>,
    pub manager_name: String,
    pub load_percent: f64,
    pub status: CapacityStatus,
}

/// Dashboard rows for a set of people over the selected quarters.
/// Load is averaged across the selection.
pub fn capacity_rows(
    people: &[Person],
    assignments: &[Assignment],
    quarters: &[Quarter],
) -> Vec<CapacityRow> {
    people
        .iter()
        .map(|person| {
            let load = average_load_for_person(assignments, &person.id, quarters);
            // Status thresholds are integer percentages; round first.
            let status = capacity_status(load.round() as u32);
            CapacityRow {
                person_id: person.id.clone(),
                name: person.name.clone(),
                role: person.role,
                area: person.area.clone(),
                product: person.product.clone(),
                manager_name: person.manager_name.clone(),
                load_percent: load,
                status,
            }
        })
        .collect()
}
