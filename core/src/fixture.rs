//! Fixture loading.
//!
//! The planner has no backend: people, ships, and assignments arrive
//! as static JSON at process start and the store treats them as the
//! session's starting state. `demo()` embeds the seed set used by the
//! tests and the runner's default mode; `load()` reads the same three
//! files from a directory.

use crate::{
    error::PlanResult,
    model::{Assignment, PendingRequest, Person, Ship},
    store::PlanStore,
};
use std::fs;
use std::path::Path;

const DEMO_PEOPLE: &str = include_str!("../data/people.json");
const DEMO_SHIPS: &str = include_str!("../data/ships.q1-2026.json");
const DEMO_ASSIGNMENTS: &str = include_str!("../data/assignments.json");

/// The embedded seed set: 15 people across three roles and a Q1 2026
/// assignment mix that produces overloaded, borderline, and healthy
/// people.
pub fn demo() -> PlanResult<PlanStore> {
    store_from_json(DEMO_PEOPLE, DEMO_SHIPS, DEMO_ASSIGNMENTS)
}

/// Load `people.json`, `ships.json`, and `assignments.json` from a
/// fixture directory. An optional `requests.json` seeds the approval
/// queue; its ids are validated against the loaded records.
pub fn load(dir: &Path) -> PlanResult<PlanStore> {
    let people = fs::read_to_string(dir.join("people.json"))?;
    let ships = fs::read_to_string(dir.join("ships.json"))?;
    let assignments = fs::read_to_string(dir.join("assignments.json"))?;
    let mut store = store_from_json(&people, &ships, &assignments)?;

    let requests_path = dir.join("requests.json");
    if requests_path.exists() {
        let requests: Vec<PendingRequest> =
            serde_json::from_str(&fs::read_to_string(requests_path)?)?;
        log::debug!("fixtures loaded: {} requests", requests.len());
        store.seed_requests(requests)?;
    }
    Ok(store)
}

fn store_from_json(people: &str, ships: &str, assignments: &str) -> PlanResult<PlanStore> {
    let people: Vec<Person> = serde_json::from_str(people)?;
    let ships: Vec<Ship> = serde_json::from_str(ships)?;
    let assignments: Vec<Assignment> = serde_json::from_str(assignments)?;
    log::debug!(
        "fixtures loaded: {} people, {} ships, {} assignments",
        people.len(),
        ships.len(),
        assignments.len(),
    );
    Ok(PlanStore::new(people, ships, assignments))
}
