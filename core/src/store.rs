//! In-memory plan state.
//!
//! RULE: Only the store mutates the record arrays. Report functions
//! receive slices and never write back. There is no persistence layer
//! by design — runtime appends (new ships, requests) live for the
//! session and are gone on drop.

use crate::{
    error::{PlanError, PlanResult},
    model::{Assignment, PendingRequest, Person, RequestStatus, Ship},
    types::{PersonId, ShipId},
};
use chrono::Utc;
use uuid::Uuid;

#[derive(Debug, Clone, Default)]
pub struct PlanStore {
    people: Vec<Person>,
    ships: Vec<Ship>,
    assignments: Vec<Assignment>,
    requests: Vec<PendingRequest>,
}

impl PlanStore {
    pub fn new(
        people: Vec<Person>,
        ships: Vec<Ship>,
        assignments: Vec<Assignment>,
    ) -> Self {
        Self {
            people,
            ships,
            assignments,
            requests: Vec::new(),
        }
    }

    // ── Read access ────────────────────────────────────────────

    pub fn people(&self) -> &[Person] {
        &self.people
    }

    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    pub fn assignments(&self) -> &[Assignment] {
        &self.assignments
    }

    pub fn requests(&self) -> &[PendingRequest] {
        &self.requests
    }

    pub fn person(&self, id: &str) -> PlanResult<&Person> {
        self.people
            .iter()
            .find(|p| p.id == id)
            .ok_or_else(|| PlanError::UnknownPerson { id: id.to_string() })
    }

    pub fn ship(&self, id: &str) -> PlanResult<&Ship> {
        self.ships
            .iter()
            .find(|s| s.id == id)
            .ok_or_else(|| PlanError::UnknownShip { id: id.to_string() })
    }

    // ── Mutations ──────────────────────────────────────────────

    /// Append a runtime-created ship. Generates an id when the caller
    /// leaves it empty (the add-project flow does).
    pub fn add_ship(&mut self, mut ship: Ship) -> ShipId {
        if ship.id.is_empty() {
            ship.id = format!("SHIP-NEW-{}", Uuid::new_v4());
        }
        log::debug!("ship added: {} ({})", ship.id, ship.title);
        let id = ship.id.clone();
        self.ships.push(ship);
        id
    }

    pub fn add_assignment(&mut self, assignment: Assignment) {
        log::debug!(
            "assignment added: person={} ship={} quarter={} load={}",
            assignment.person_id,
            assignment.ship_id,
            assignment.quarter,
            assignment.load_percent,
        );
        self.assignments.push(assignment);
    }

    /// File a capacity-increase request for (ship, person).
    /// Both ids must exist; the request starts pending.
    pub fn submit_request(
        &mut self,
        ship_id: &str,
        person_id: &str,
        requested_by: &str,
    ) -> PlanResult<String> {
        self.ship(ship_id)?;
        self.person(person_id)?;
        let request = PendingRequest {
            id: Uuid::new_v4().to_string(),
            ship_id: ship_id.to_string(),
            person_id: person_id.to_string(),
            requested_by: requested_by.to_string(),
            requested_at: Utc::now(),
            status: RequestStatus::Pending,
        };
        let id = request.id.clone();
        self.requests.push(request);
        Ok(id)
    }

    /// Flip a pending request to `status` in place. Requests are never
    /// removed; resolving one twice is an error.
    pub fn resolve_request(
        &mut self,
        request_id: &str,
        status: RequestStatus,
    ) -> PlanResult<&PendingRequest> {
        let request = self
            .requests
            .iter_mut()
            .find(|r| r.id == request_id)
            .ok_or_else(|| PlanError::UnknownRequest {
                id: request_id.to_string(),
            })?;
        if request.status != RequestStatus::Pending {
            return Err(PlanError::RequestAlreadyResolved {
                id: request_id.to_string(),
                status: request.status.label().to_string(),
            });
        }
        request.status = status;
        Ok(request)
    }

    pub fn pending_requests(&self) -> Vec<&PendingRequest> {
        self.requests
            .iter()
            .filter(|r| r.status == RequestStatus::Pending)
            .collect()
    }

    /// Restore a request queue from a fixture. Every request must name
    /// a known ship and person; a single dangling id rejects the whole
    /// batch and leaves the queue unchanged.
    pub fn seed_requests(&mut self, requests: Vec<PendingRequest>) -> PlanResult<()> {
        for request in &requests {
            self.ship(&request.ship_id)?;
            self.person(&request.person_id)?;
        }
        self.requests = requests;
        Ok(())
    }

    pub fn person_id_for_name(&self, name: &str) -> Option<PersonId> {
        self.people
            .iter()
            .find(|p| p.name == name)
            .map(|p| p.id.clone())
    }
}
