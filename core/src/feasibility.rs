//! Quarter feasibility analyzer.
//!
//! Walks the in-scope ships in input order and greedily consumes
//! per-role capacity. A ship is infeasible the moment any required
//! role's remaining capacity falls below that role's sized load.
//!
//! RULES:
//!   - Per-role load comes from the ship's t-shirt sizing through the
//!     canonical table in `load`.
//!   - Infeasible ships never consume the running capacity tally.

use crate::{
    load::size_to_load,
    model::{Person, Ship},
    types::{Priority, Role, RoleHealth},
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RoleCapacity {
    pub used: u32,
    pub total: u32,
    pub status: Option<RoleHealth>,
}

impl RoleCapacity {
    /// >100% overloaded, >80% at-risk, else healthy. A role with no
    /// people has 0 total and classifies as healthy (0% used).
    fn classify(&mut self) {
        let utilization = if self.total == 0 {
            0.0
        } else {
            f64::from(self.used) / f64::from(self.total)
        };
        self.status = Some(if utilization > 1.0 {
            RoleHealth::Overloaded
        } else if utilization > 0.8 {
            RoleHealth::AtRisk
        } else {
            RoleHealth::Healthy
        });
    }
}

/// Remediation actions for ships that did not fit.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Recommendations {
    pub move_to_next_quarter: Vec<Ship>,
    pub reduce_scope: Vec<Ship>,
    pub break_into_milestones: Vec<Ship>,
    pub deprioritize_nice_to_have: Vec<Ship>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FeasibilityAnalysis {
    pub feasible: Vec<Ship>,
    /// Reserved for the missing-role remediation path. A required role
    /// with nobody staffed counts as a capacity issue, so nothing
    /// lands here under current policy; the bucket keeps the report
    /// shape stable for consumers.
    pub partially_feasible: Vec<Ship>,
    pub not_feasible: Vec<Ship>,
    pub capacity_summary: BTreeMap<Role, RoleCapacity>,
    pub recommendations: Recommendations,
}

/// Analyze a working set of ships against the in-scope person pool.
///
/// Per-role total = 100 × people holding that role. Ships are taken in
/// input order; earlier ships claim capacity first.
pub fn analyze(ships: &[&Ship], people: &[&Person]) -> FeasibilityAnalysis {
    let mut analysis = FeasibilityAnalysis::default();

    for role in Role::ALL {
        analysis.capacity_summary.insert(role, RoleCapacity::default());
    }
    for person in people {
        if let Some(capacity) = analysis.capacity_summary.get_mut(&person.role) {
            capacity.total += 100;
        }
    }

    for ship in ships {
        let mut fits = true;
        for (role, size) in &ship.tshirt_size_by_role {
            let load = size_to_load(*size);
            let capacity = &analysis.capacity_summary[role];
            let available = capacity.total.saturating_sub(capacity.used);
            if available < load {
                fits = false;
                break;
            }
        }

        if fits {
            for (role, size) in &ship.tshirt_size_by_role {
                if let Some(capacity) = analysis.capacity_summary.get_mut(role) {
                    capacity.used += size_to_load(*size);
                }
            }
            analysis.feasible.push((*ship).clone());
        } else {
            log::debug!("ship not feasible: {} ({})", ship.id, ship.title);
            analysis.not_feasible.push((*ship).clone());
            bucket_remediation(&mut analysis.recommendations, ship);
        }
    }

    for capacity in analysis.capacity_summary.values_mut() {
        capacity.classify();
    }

    analysis
}

/// Not-feasible ships sort into exactly one remediation bucket:
/// nice-to-haves get deprioritized, low-priority must-haves move out a
/// quarter, the rest break into milestones.
fn bucket_remediation(recommendations: &mut Recommendations, ship: &Ship) {
    if !ship.is_must_have() {
        recommendations.deprioritize_nice_to_have.push(ship.clone());
    } else if matches!(ship.priority, Some(Priority::P3) | Some(Priority::P4)) {
        recommendations.move_to_next_quarter.push(ship.clone());
    } else {
        recommendations.break_into_milestones.push(ship.clone());
    }
}
