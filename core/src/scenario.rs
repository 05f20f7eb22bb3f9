//! Prioritization scenario generator.
//!
//! Partitions one planning window's initiatives into three fixed
//! strategies and computes aggregate metrics per strategy:
//!   A "Must-Have Focus"      — Must initiatives only, low risk
//!   B "Balanced Approach"    — Must + first two Should per area
//!   C "Distributed Coverage" — everything, high risk
//!
//! RULE: deterministic. Selection order is input order (B truncates,
//! it does not rank), no randomness, no time, no caching.

use crate::{load::size_to_load, load::utilization, types::TShirtSize};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Initiative as the prioritization view sees it: one size, one
/// priority, designers by name. Distinct from `model::Ship`, which
/// carries per-role sizing for the feasibility path.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Initiative {
    pub name: String,
    pub area: String,
    pub product: String,
    #[serde(default)]
    pub assigned_designers: Vec<String>,
    pub size: TShirtSize,
    pub priority: InitiativePriority,
    #[serde(default)]
    pub design_readiness: DesignReadiness,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum InitiativePriority {
    Must,
    Should,
    Nice,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum DesignReadiness {
    #[serde(rename = "Y")]
    Ready,
    #[default]
    #[serde(rename = "N")]
    NotReady,
    #[serde(rename = "P")]
    Partial,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Designer {
    pub name: String,
    /// Availability for the window as a percentage; 100 = fully present.
    pub availability: u32,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioMetrics {
    pub total_effort: u32,
    /// Mean utilization across the whole pool, rounded to the nearest
    /// integer. Designers with no initiatives contribute 0.
    pub average_utilization: u32,
    pub overloaded_designers: Vec<String>,
    pub initiative_count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Scenario {
    pub key: char,
    pub name: String,
    pub description: String,
    pub risk_level: RiskLevel,
    pub initiatives: Vec<Initiative>,
    pub metrics: ScenarioMetrics,
}

/// Sum of effort a designer carries across the given initiatives.
pub fn designer_workload(designer_name: &str, initiatives: &[Initiative]) -> u32 {
    initiatives
        .iter()
        .filter(|i| i.assigned_designers.iter().any(|d| d == designer_name))
        .map(|i| size_to_load(i.size))
        .sum()
}

/// Generate all three scenarios for one planning window.
pub fn generate_scenarios(initiatives: &[Initiative], designers: &[Designer]) -> Vec<Scenario> {
    let musts: Vec<Initiative> = initiatives
        .iter()
        .filter(|i| i.priority == InitiativePriority::Must)
        .cloned()
        .collect();

    // Scenario B: Musts plus the first two Shoulds per distinct area,
    // in input order. Truncation, not ranking.
    let mut should_count_by_area: HashMap<&str, usize> = HashMap::new();
    let mut balanced = musts.clone();
    for initiative in initiatives {
        if initiative.priority != InitiativePriority::Should {
            continue;
        }
        let seen = should_count_by_area.entry(initiative.area.as_str()).or_insert(0);
        if *seen < 2 {
            *seen += 1;
            balanced.push(initiative.clone());
        }
    }

    vec![
        build_scenario(
            'A',
            "Must-Have Focus",
            "Focus only on Must-have initiatives, park everything else for next quarter.",
            RiskLevel::Low,
            musts,
            designers,
        ),
        build_scenario(
            'B',
            "Balanced Approach",
            "Must-have initiatives plus 1-2 strategic Should-have bets per product area.",
            RiskLevel::Medium,
            balanced,
            designers,
        ),
        build_scenario(
            'C',
            "Distributed Coverage",
            "Shallow coverage across all initiatives, higher risk.",
            RiskLevel::High,
            initiatives.to_vec(),
            designers,
        ),
    ]
}

fn build_scenario(
    key: char,
    name: &str,
    description: &str,
    risk_level: RiskLevel,
    initiatives: Vec<Initiative>,
    designers: &[Designer],
) -> Scenario {
    let total_effort = initiatives.iter().map(|i| size_to_load(i.size)).sum();

    let utilizations: Vec<(&str, f64)> = designers
        .iter()
        .map(|d| {
            let workload = designer_workload(&d.name, &initiatives);
            (d.name.as_str(), utilization(workload, d.availability))
        })
        .collect();

    // Mean over the full pool — an empty pool averages to 0.
    let average_utilization = if designers.is_empty() {
        0
    } else {
        let sum: f64 = utilizations.iter().map(|(_, u)| u).sum();
        (sum / designers.len() as f64).round() as u32
    };

    let overloaded_designers = utilizations
        .iter()
        .filter(|(_, u)| *u > 100.0)
        .map(|(name, _)| name.to_string())
        .collect();

    let metrics = ScenarioMetrics {
        total_effort,
        average_utilization,
        overloaded_designers,
        initiative_count: initiatives.len(),
    };

    Scenario {
        key,
        name: name.to_string(),
        description: description.to_string(),
        risk_level,
        initiatives,
        metrics,
    }
}
