//! Manager approval queue for capacity-increase requests.
//!
//! A request ties a ship to a person. The impact preview projects the
//! person's load if their role's sized requirement on that ship were
//! granted. Approving grants it: the request flips to approved and the
//! matching assignment lands in the store. Declining only flips.

use crate::{
    error::{PlanError, PlanResult},
    load::{capacity_status, load_for_person, size_to_load_opt},
    model::{Assignment, PendingRequest, RequestStatus},
    store::PlanStore,
    types::{CapacityStatus, Quarter},
};
use serde::{Deserialize, Serialize};

/// What granting one request would do to the person's quarter.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RequestImpact {
    pub request_id: String,
    pub ship_title: String,
    pub person_name: String,
    pub quarter: Quarter,
    /// 0 when the ship does not require the person's role.
    pub load_increase: u32,
    pub current_load: u32,
    pub projected_load: u32,
    pub projected_status: CapacityStatus,
}

/// Compute the impact preview for a request. The ship's requirement
/// for the person's role drives the increase; a ship that does not
/// need that role projects no change.
pub fn request_impact(store: &PlanStore, request: &PendingRequest) -> PlanResult<RequestImpact> {
    let ship = store.ship(&request.ship_id)?;
    let person = store.person(&request.person_id)?;

    let size = ship.tshirt_size_by_role.get(&person.role).copied();
    let load_increase = size_to_load_opt(size);
    let current_load = load_for_person(store.assignments(), &person.id, &ship.target_quarter);
    let projected_load = current_load + load_increase;

    Ok(RequestImpact {
        request_id: request.id.clone(),
        ship_title: ship.title.clone(),
        person_name: person.name.clone(),
        quarter: ship.target_quarter.clone(),
        load_increase,
        current_load,
        projected_load,
        projected_status: capacity_status(projected_load),
    })
}

/// Approve a pending request: flip it in place and append the granted
/// assignment. A zero-load grant (ship doesn't need the role) still
/// approves but adds no assignment.
///
/// The impact is computed before the request flips, so an error on
/// the lookup path leaves the request untouched in the queue.
pub fn approve(store: &mut PlanStore, request_id: &str) -> PlanResult<RequestImpact> {
    let request = store
        .requests()
        .iter()
        .find(|r| r.id == request_id)
        .cloned()
        .ok_or_else(|| PlanError::UnknownRequest {
            id: request_id.to_string(),
        })?;
    let impact = request_impact(store, &request)?;
    store.resolve_request(request_id, RequestStatus::Approved)?;
    if impact.load_increase > 0 {
        store.add_assignment(Assignment {
            person_id: request.person_id.clone(),
            ship_id: request.ship_id.clone(),
            quarter: impact.quarter.clone(),
            load_percent: impact.load_increase,
        });
    } else {
        log::warn!(
            "request {} approved with no load change (ship {} does not require the role)",
            request.id,
            request.ship_id,
        );
    }
    Ok(impact)
}

/// Decline a pending request. The record stays in the queue history.
pub fn decline(store: &mut PlanStore, request_id: &str) -> PlanResult<()> {
    store.resolve_request(request_id, RequestStatus::Declined)?;
    Ok(())
}
