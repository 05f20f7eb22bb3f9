//! The planning facade — one object that owns the store and a scope
//! and produces every report the planning conversation needs.
//!
//! REPORT ORDER (fixed, documented, never reordered):
//!   1. Capacity rows + alerts   (who is loaded, who is drowning)
//!   2. Scenarios A/B/C          (what could we choose to do)
//!   3. Feasibility              (does the chosen set actually fit)
//!   4. Talking points           (what to say about it)
//!
//! RULES:
//!   - Reports are pure reads. Only the approval operations mutate.
//!   - Every report respects the current scope's filters.
//!   - Deterministic: same store + same scope → same report.

use crate::{
    approvals::{self, RequestImpact},
    error::PlanResult,
    feasibility::{self, FeasibilityAnalysis},
    filter::PlanScope,
    load::{self, CapacityAlerts, CapacityRow},
    model::{PendingRequest, Person, Ship},
    scenario::{self, Designer, DesignReadiness, Initiative, InitiativePriority, Scenario},
    store::PlanStore,
    talking_points::{self, TalkingPoint},
    types::{OnePagerStatus, Priority, Quarter, Role, TShirtSize},
};
use serde::{Deserialize, Serialize};

pub struct Planner {
    store: PlanStore,
    scope: PlanScope,
}

/// Everything the runner prints, in one serializable bundle.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanReport {
    pub scope: PlanScope,
    pub capacity_rows: Vec<CapacityRow>,
    pub capacity_alerts: CapacityAlerts,
    pub scenarios: Vec<Scenario>,
    pub feasibility: FeasibilityAnalysis,
    pub talking_points: Vec<TalkingPoint>,
}

impl Planner {
    pub fn new(store: PlanStore, scope: PlanScope) -> Self {
        Self { store, scope }
    }

    pub fn store(&self) -> &PlanStore {
        &self.store
    }

    pub fn scope(&self) -> &PlanScope {
        &self.scope
    }

    pub fn set_scope(&mut self, scope: PlanScope) {
        self.scope = scope;
    }

    /// The quarter reports aggregate over. Falls back to the first
    /// in-scope ship's target when the scope names none.
    pub fn quarter(&self) -> Quarter {
        if let Some(q) = self.scope.quarter.as_ref().filter(|q| !q.is_empty()) {
            return q.clone();
        }
        self.scope
            .ships(self.store.ships())
            .first()
            .map(|s| s.target_quarter.clone())
            .unwrap_or_default()
    }

    // ── Reports ────────────────────────────────────────────────

    pub fn capacity_rows(&self) -> Vec<CapacityRow> {
        let people = self.scope.people(self.store.people());
        let people: Vec<Person> = people.into_iter().cloned().collect();
        load::capacity_rows(&people, self.store.assignments(), &[self.quarter()])
    }

    pub fn capacity_alerts(&self) -> CapacityAlerts {
        let people: Vec<Person> = self
            .scope
            .people(self.store.people())
            .into_iter()
            .cloned()
            .collect();
        load::capacity_alerts(&people, self.store.assignments(), &self.quarter())
    }

    pub fn scenarios(&self) -> Vec<Scenario> {
        scenario::generate_scenarios(&self.initiatives(), &self.designers())
    }

    pub fn feasibility(&self) -> FeasibilityAnalysis {
        let ships = self.scope.ships(self.store.ships());
        let people = self.scope.people(self.store.people());
        feasibility::analyze(&ships, &people)
    }

    pub fn talking_points(&self) -> Vec<TalkingPoint> {
        talking_points::generate_talking_points(
            &self.initiatives(),
            &self.designers(),
            self.scope.product.as_deref(),
            &self.capacity_alerts(),
        )
    }

    /// Run every report against the current scope.
    pub fn report(&self) -> PlanReport {
        PlanReport {
            scope: self.scope.clone(),
            capacity_rows: self.capacity_rows(),
            capacity_alerts: self.capacity_alerts(),
            scenarios: self.scenarios(),
            feasibility: self.feasibility(),
            talking_points: self.talking_points(),
        }
    }

    // ── Approval queue ─────────────────────────────────────────

    pub fn submit_request(
        &mut self,
        ship_id: &str,
        person_id: &str,
        requested_by: &str,
    ) -> PlanResult<String> {
        self.store.submit_request(ship_id, person_id, requested_by)
    }

    pub fn pending_requests(&self) -> Vec<&PendingRequest> {
        self.store.pending_requests()
    }

    pub fn request_impact(&self, request: &PendingRequest) -> PlanResult<RequestImpact> {
        approvals::request_impact(&self.store, request)
    }

    pub fn approve_request(&mut self, request_id: &str) -> PlanResult<RequestImpact> {
        approvals::approve(&mut self.store, request_id)
    }

    pub fn decline_request(&mut self, request_id: &str) -> PlanResult<()> {
        approvals::decline(&mut self.store, request_id)
    }

    // ── Derivations ────────────────────────────────────────────

    /// The in-scope ships reshaped for the prioritization views: one
    /// size, one Must/Should/Nice bucket, designers resolved from the
    /// quarter's assignments.
    pub fn initiatives(&self) -> Vec<Initiative> {
        let quarter = self.quarter();
        self.scope
            .ships(self.store.ships())
            .into_iter()
            .map(|ship| self.initiative_for_ship(ship, &quarter))
            .collect()
    }

    /// Designer pool for the scope, full availability. Time off and
    /// partial allocations are not modeled.
    pub fn designers(&self) -> Vec<Designer> {
        self.scope
            .people(self.store.people())
            .into_iter()
            .filter(|p| p.role == Role::Designer)
            .map(|p| Designer {
                name: p.name.clone(),
                availability: 100,
            })
            .collect()
    }

    fn initiative_for_ship(&self, ship: &Ship, quarter: &str) -> Initiative {
        let assigned_designers = self
            .store
            .assignments()
            .iter()
            .filter(|a| a.ship_id == ship.id && a.quarter == quarter)
            .filter_map(|a| self.store.person(&a.person_id).ok())
            .filter(|p| p.role == Role::Designer)
            .map(|p| p.name.clone())
            .collect();

        Initiative {
            name: ship.title.clone(),
            area: ship.area.clone(),
            product: ship.product.clone(),
            assigned_designers,
            size: initiative_size(ship),
            priority: initiative_priority(ship),
            design_readiness: design_readiness(ship),
        }
    }
}

/// Single headline size for a ship: the Designer sizing when present,
/// otherwise the largest sized role. Unsized ships count as S.
fn initiative_size(ship: &Ship) -> TShirtSize {
    if let Some(size) = ship.tshirt_size_by_role.get(&Role::Designer) {
        return *size;
    }
    ship.tshirt_size_by_role
        .values()
        .copied()
        .max_by_key(|s| load::size_to_load(*s))
        .unwrap_or(TShirtSize::S)
}

fn initiative_priority(ship: &Ship) -> InitiativePriority {
    if ship.is_must_have() || matches!(ship.priority, Some(Priority::P1) | Some(Priority::P2)) {
        InitiativePriority::Must
    } else if matches!(ship.priority, Some(Priority::P3)) {
        InitiativePriority::Should
    } else {
        InitiativePriority::Nice
    }
}

fn design_readiness(ship: &Ship) -> DesignReadiness {
    match ship.one_pager_status.unwrap_or_default() {
        OnePagerStatus::Approved => DesignReadiness::Ready,
        OnePagerStatus::ReadyForReview | OnePagerStatus::InProgress => DesignReadiness::Partial,
        OnePagerStatus::Missing => DesignReadiness::NotReady,
    }
}
