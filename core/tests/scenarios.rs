//! A/B/C prioritization scenario tests.

use capplan_core::scenario::{
    designer_workload, generate_scenarios, Designer, DesignReadiness, Initiative,
    InitiativePriority, RiskLevel,
};
use capplan_core::types::TShirtSize;

fn initiative(
    name: &str,
    area: &str,
    size: TShirtSize,
    priority: InitiativePriority,
    designers: &[&str],
) -> Initiative {
    Initiative {
        name: name.to_string(),
        area: area.to_string(),
        product: area.to_string(),
        assigned_designers: designers.iter().map(|d| d.to_string()).collect(),
        size,
        priority,
        design_readiness: DesignReadiness::NotReady,
    }
}

fn designer(name: &str, availability: u32) -> Designer {
    Designer {
        name: name.to_string(),
        availability,
    }
}

/// Five initiatives: sizes [L, M, XL, L, M], Musts at 0, 2, 4.
/// A carries the Musts (80+160+31 = 271), C carries everything
/// (80+31+160+80+31 = 382), B adds the first two Shoulds of the single
/// area (all 382 here).
#[test]
fn scenario_efforts_follow_the_size_table() {
    let initiatives = vec![
        initiative("i1", "Core", TShirtSize::L, InitiativePriority::Must, &[]),
        initiative("i2", "Core", TShirtSize::M, InitiativePriority::Should, &[]),
        initiative("i3", "Core", TShirtSize::XL, InitiativePriority::Must, &[]),
        initiative("i4", "Core", TShirtSize::L, InitiativePriority::Should, &[]),
        initiative("i5", "Core", TShirtSize::M, InitiativePriority::Must, &[]),
    ];
    let scenarios = generate_scenarios(&initiatives, &[]);
    assert_eq!(scenarios.len(), 3);

    let a = &scenarios[0];
    let b = &scenarios[1];
    let c = &scenarios[2];
    assert_eq!((a.key, a.risk_level), ('A', RiskLevel::Low));
    assert_eq!((b.key, b.risk_level), ('B', RiskLevel::Medium));
    assert_eq!((c.key, c.risk_level), ('C', RiskLevel::High));

    assert_eq!(a.metrics.total_effort, 271);
    assert_eq!(a.metrics.initiative_count, 3);
    assert_eq!(b.metrics.total_effort, 382);
    assert_eq!(c.metrics.total_effort, 382);
    assert_eq!(c.metrics.initiative_count, 5);
}

/// Same five sizes with Musts on the two Ls and the last M: A carries
/// 80+80+31 = 191 while C still carries the full 382.
#[test]
fn must_focus_effort_with_shifted_musts() {
    let initiatives = vec![
        initiative("i1", "Core", TShirtSize::L, InitiativePriority::Must, &[]),
        initiative("i2", "Core", TShirtSize::M, InitiativePriority::Should, &[]),
        initiative("i3", "Core", TShirtSize::XL, InitiativePriority::Should, &[]),
        initiative("i4", "Core", TShirtSize::L, InitiativePriority::Must, &[]),
        initiative("i5", "Core", TShirtSize::M, InitiativePriority::Must, &[]),
    ];
    let scenarios = generate_scenarios(&initiatives, &[]);
    assert_eq!(scenarios[0].metrics.total_effort, 191);
    assert_eq!(scenarios[0].metrics.initiative_count, 3);
    assert_eq!(scenarios[2].metrics.total_effort, 382);
}

/// A's initiative set is a subset of C's; C always carries the whole
/// input, in input order.
#[test]
fn must_focus_is_subset_of_distributed() {
    let initiatives = vec![
        initiative("m1", "Core", TShirtSize::S, InitiativePriority::Must, &[]),
        initiative("n1", "Core", TShirtSize::L, InitiativePriority::Nice, &[]),
        initiative("m2", "Growth", TShirtSize::M, InitiativePriority::Must, &[]),
    ];
    let scenarios = generate_scenarios(&initiatives, &[]);
    let a_names: Vec<&str> = scenarios[0].initiatives.iter().map(|i| i.name.as_str()).collect();
    let c_names: Vec<&str> = scenarios[2].initiatives.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(a_names, vec!["m1", "m2"]);
    assert_eq!(c_names, vec!["m1", "n1", "m2"]);
    assert!(a_names.iter().all(|n| c_names.contains(n)));
}

/// B truncates Shoulds at two per area, in input order; the third
/// Should of an area never makes it. Nices never appear in B.
#[test]
fn balanced_caps_shoulds_per_area() {
    let initiatives = vec![
        initiative("must", "Core", TShirtSize::S, InitiativePriority::Must, &[]),
        initiative("s-core-1", "Core", TShirtSize::S, InitiativePriority::Should, &[]),
        initiative("s-core-2", "Core", TShirtSize::S, InitiativePriority::Should, &[]),
        initiative("s-core-3", "Core", TShirtSize::S, InitiativePriority::Should, &[]),
        initiative("s-growth-1", "Growth", TShirtSize::S, InitiativePriority::Should, &[]),
        initiative("nice", "Core", TShirtSize::S, InitiativePriority::Nice, &[]),
    ];
    let scenarios = generate_scenarios(&initiatives, &[]);
    let b_names: Vec<&str> = scenarios[1].initiatives.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(b_names, vec!["must", "s-core-1", "s-core-2", "s-growth-1"]);
}

/// An empty planning window still yields three scenarios with all-zero
/// metrics; nothing divides by the empty designer pool.
#[test]
fn empty_inputs_yield_zeroed_scenarios() {
    let scenarios = generate_scenarios(&[], &[]);
    assert_eq!(scenarios.len(), 3);
    for scenario in &scenarios {
        assert_eq!(scenario.metrics.total_effort, 0);
        assert_eq!(scenario.metrics.average_utilization, 0);
        assert_eq!(scenario.metrics.initiative_count, 0);
        assert!(scenario.metrics.overloaded_designers.is_empty());
    }
}

/// Workload sums the sized initiatives a designer is named on.
/// Utilization over 100% flags the designer as overloaded; unassigned
/// designers drag the pool average down.
#[test]
fn overload_detection_uses_availability() {
    let initiatives = vec![
        initiative("i1", "Core", TShirtSize::L, InitiativePriority::Must, &["Ada"]),
        initiative("i2", "Core", TShirtSize::M, InitiativePriority::Must, &["Ada"]),
    ];
    let designers = vec![designer("Ada", 100), designer("Grace", 100)];

    assert_eq!(designer_workload("Ada", &initiatives), 111);
    assert_eq!(designer_workload("Grace", &initiatives), 0);

    let scenarios = generate_scenarios(&initiatives, &designers);
    let a = &scenarios[0];
    assert_eq!(a.metrics.overloaded_designers, vec!["Ada"]);
    // (111% + 0%) / 2 rounds to 56.
    assert_eq!(a.metrics.average_utilization, 56);
}

/// Reduced availability lowers the overload bar: 80 load against 50
/// availability is 160% utilization.
#[test]
fn reduced_availability_raises_utilization() {
    let initiatives = vec![initiative(
        "i1",
        "Core",
        TShirtSize::L,
        InitiativePriority::Must,
        &["Ada"],
    )];
    let designers = vec![designer("Ada", 50)];
    let scenarios = generate_scenarios(&initiatives, &designers);
    assert_eq!(scenarios[0].metrics.average_utilization, 160);
    assert_eq!(scenarios[0].metrics.overloaded_designers, vec!["Ada"]);
}
