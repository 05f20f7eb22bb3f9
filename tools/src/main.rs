//! plan-runner: headless report runner for the capacity planner.
//!
//! Usage:
//!   plan-runner --quarter "Q1 2026"
//!   plan-runner --fixtures ./fixtures --area Core --report feasibility
//!   plan-runner --roles Designer,Frontend --report capacity
//!   plan-runner --report all --json
//!   plan-runner --sync-jira export.json --quarter "Q2 2026" --out ships.json

use anyhow::{bail, Context, Result};
use capplan_core::{
    fixture,
    jira::{self, IngestOptions},
    types::Role,
    PlanReport, PlanScope, Planner,
};
use std::env;
use std::fs;
use std::path::Path;

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    if let Some(input) = arg_value(&args, "--sync-jira") {
        return sync_jira(&args, input);
    }

    let quarter = arg_value(&args, "--quarter").unwrap_or("Q1 2026");
    let area = arg_value(&args, "--area").unwrap_or("");
    let product = arg_value(&args, "--product").unwrap_or("");
    let roles = match arg_value(&args, "--roles") {
        Some(raw) => parse_roles(raw)?,
        None => Vec::new(),
    };
    let report = arg_value(&args, "--report").unwrap_or("all");
    let json = args.iter().any(|a| a == "--json");

    let store = match arg_value(&args, "--fixtures") {
        Some(dir) => fixture::load(Path::new(dir))
            .with_context(|| format!("loading fixtures from {dir}"))?,
        None => fixture::demo()?,
    };

    let scope = PlanScope::for_quarter(quarter)
        .with_area(area)
        .with_product(product)
        .with_roles(&roles);
    let planner = Planner::new(store, scope);
    let full = planner.report();

    if json {
        let payload = match report {
            "all" => serde_json::to_string_pretty(&full)?,
            "capacity" => serde_json::to_string_pretty(&full.capacity_rows)?,
            "alerts" => serde_json::to_string_pretty(&full.capacity_alerts)?,
            "scenarios" => serde_json::to_string_pretty(&full.scenarios)?,
            "feasibility" => serde_json::to_string_pretty(&full.feasibility)?,
            "talking-points" => serde_json::to_string_pretty(&full.talking_points)?,
            other => bail!("unknown report: {other}"),
        };
        println!("{payload}");
        return Ok(());
    }

    println!("Capacity Planner — plan-runner");
    println!("  quarter:  {quarter}");
    println!("  area:     {}", if area.is_empty() { "(all)" } else { area });
    println!("  product:  {}", if product.is_empty() { "(all)" } else { product });
    if !roles.is_empty() {
        let labels: Vec<&str> = roles.iter().map(Role::label).collect();
        println!("  roles:    {}", labels.join(","));
    }
    println!();

    match report {
        "all" => print_report(&full),
        "capacity" => print_capacity(&full),
        "alerts" => print_alerts(&full),
        "scenarios" => print_scenarios(&full),
        "feasibility" => print_feasibility(&full),
        "talking-points" => print_talking_points(&full),
        other => bail!("unknown report: {other}"),
    }
    Ok(())
}

fn sync_jira(args: &[String], input: &str) -> Result<()> {
    let out = arg_value(args, "--out").unwrap_or("ships.json");
    let quarter = arg_value(args, "--quarter").unwrap_or("").to_string();
    let include_non_epics = args.iter().any(|a| a == "--include-non-epics");
    let mut opts = IngestOptions {
        quarter,
        include_non_epics,
        ..IngestOptions::default()
    };
    if let Some(base) = arg_value(args, "--jira-base-url") {
        opts.jira_base_url = base.to_string();
    }

    let raw = fs::read_to_string(input).with_context(|| format!("reading {input}"))?;
    let payload: serde_json::Value = serde_json::from_str(&raw)?;
    let ships = jira::map_export(&payload, &opts)?;
    log::debug!("mapped {} ships from {input}", ships.len());

    fs::write(out, serde_json::to_string_pretty(&ships)?)
        .with_context(|| format!("writing {out}"))?;
    println!("synced {} ships from {input} to {out}", ships.len());
    Ok(())
}

// ── Text reports ─────────────────────────────────────────────────────

fn print_report(report: &PlanReport) {
    print_capacity(report);
    print_alerts(report);
    print_scenarios(report);
    print_feasibility(report);
    print_talking_points(report);
}

fn print_capacity(report: &PlanReport) {
    println!("=== CAPACITY ===");
    for row in &report.capacity_rows {
        println!(
            "  {:<20} {:<10} {:<10} {:>6.0}%  {:?}",
            row.name,
            row.role.label(),
            row.area,
            row.load_percent,
            row.status,
        );
    }
    println!();
}

fn print_alerts(report: &PlanReport) {
    println!("=== ALERTS ===");
    if report.capacity_alerts.is_empty() {
        println!("  (none)");
    }
    if !report.capacity_alerts.overloaded.is_empty() {
        println!("  overloaded:    {}", report.capacity_alerts.overloaded.join(", "));
    }
    if !report.capacity_alerts.near_capacity.is_empty() {
        println!("  near capacity: {}", report.capacity_alerts.near_capacity.join(", "));
    }
    println!();
}

fn print_scenarios(report: &PlanReport) {
    println!("=== SCENARIOS ===");
    for scenario in &report.scenarios {
        println!(
            "  [{}] {} ({:?} risk): {} initiatives, {}% effort, avg utilization {}%",
            scenario.key,
            scenario.name,
            scenario.risk_level,
            scenario.metrics.initiative_count,
            scenario.metrics.total_effort,
            scenario.metrics.average_utilization,
        );
        if !scenario.metrics.overloaded_designers.is_empty() {
            println!(
                "      overloaded: {}",
                scenario.metrics.overloaded_designers.join(", ")
            );
        }
    }
    println!();
}

fn print_feasibility(report: &PlanReport) {
    let analysis = &report.feasibility;
    println!("=== FEASIBILITY ===");
    println!("  feasible:     {}", titles(&analysis.feasible));
    println!("  not feasible: {}", titles(&analysis.not_feasible));
    for (role, capacity) in &analysis.capacity_summary {
        println!(
            "  {:<10} {:>4}/{:<4} {:?}",
            role.label(),
            capacity.used,
            capacity.total,
            capacity.status,
        );
    }
    let recs = &analysis.recommendations;
    if !recs.move_to_next_quarter.is_empty() {
        println!("  move out:     {}", titles(&recs.move_to_next_quarter));
    }
    if !recs.reduce_scope.is_empty() {
        println!("  reduce scope: {}", titles(&recs.reduce_scope));
    }
    if !recs.break_into_milestones.is_empty() {
        println!("  milestones:   {}", titles(&recs.break_into_milestones));
    }
    if !recs.deprioritize_nice_to_have.is_empty() {
        println!("  deprioritize: {}", titles(&recs.deprioritize_nice_to_have));
    }
    println!();
}

fn print_talking_points(report: &PlanReport) {
    println!("=== TALKING POINTS ===");
    for point in &report.talking_points {
        println!("  [{}] {}", point.category, point.point);
    }
    println!();
}

fn titles(ships: &[capplan_core::model::Ship]) -> String {
    if ships.is_empty() {
        return "(none)".to_string();
    }
    ships
        .iter()
        .map(|s| s.title.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Comma-separated role names, case-insensitive. A typo is an error
/// rather than a silently empty scope.
fn parse_roles(raw: &str) -> Result<Vec<Role>> {
    raw.split(',')
        .map(|r| r.trim())
        .filter(|r| !r.is_empty())
        .map(|r| match r.to_lowercase().as_str() {
            "designer" => Ok(Role::Designer),
            "content" => Ok(Role::Content),
            "frontend" => Ok(Role::Frontend),
            other => bail!("unknown role: {other}"),
        })
        .collect()
}

fn arg_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.windows(2)
        .find(|w| w[0] == flag)
        .map(|w| w[1].as_str())
}
