//! Issue-tracker export ingestion tests: payload shapes and the field
//! heuristics.

use capplan_core::jira::{
    extract_issues, map_export, map_priority, map_status, normalize_quarter,
    parse_quarter_from_labels, IngestOptions,
};
use capplan_core::types::{OnePagerStatus, Priority, ShipStatus};
use serde_json::json;

fn opts(quarter: &str) -> IngestOptions {
    IngestOptions {
        quarter: quarter.to_string(),
        ..IngestOptions::default()
    }
}

/// The three accepted payload shapes all extract the same issues;
/// anything else is rejected with an error.
#[test]
fn payload_shapes() {
    let bare = json!([{ "key": "CORE-1" }]);
    let wrapped = json!({ "issues": [{ "key": "CORE-1" }] });
    let nested = json!({ "data": { "issues": [{ "key": "CORE-1" }] } });
    for payload in [&bare, &wrapped, &nested] {
        let issues = extract_issues(payload).unwrap();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].key, "CORE-1");
    }
    assert!(extract_issues(&json!({ "rows": [] })).is_err());
    assert!(extract_issues(&json!("nope")).is_err());
}

/// Epics and initiatives pass the type filter; stories only with
/// include_non_epics. Exports without types keep everything.
#[test]
fn epic_filter() {
    let payload = json!([
        { "key": "E-1", "issueType": "Epic" },
        { "key": "I-1", "issueType": "Initiative" },
        { "key": "S-1", "issueType": "Story" },
        { "key": "U-1" }
    ]);
    let ships = map_export(&payload, &opts("Q1 2026")).unwrap();
    let ids: Vec<&str> = ships.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, vec!["E-1", "I-1", "U-1"]);

    let mut all = opts("Q1 2026");
    all.include_non_epics = true;
    assert_eq!(map_export(&payload, &all).unwrap().len(), 4);
}

/// Status heuristics: review-ish strings win over progress-ish ones,
/// planning-ish strings map to Planned, everything unknown is Backlog.
#[test]
fn status_heuristics() {
    assert_eq!(map_status(Some("In Review")), ShipStatus::InReview);
    assert_eq!(map_status(Some("QA Testing")), ShipStatus::InReview);
    assert_eq!(map_status(Some("Ready for Dev")), ShipStatus::Planned);
    assert_eq!(map_status(Some("Planning")), ShipStatus::Planned);
    assert_eq!(map_status(Some("In Progress")), ShipStatus::Committed);
    assert_eq!(map_status(Some("Done")), ShipStatus::Committed);
    assert_eq!(map_status(Some("Weird Custom State")), ShipStatus::Backlog);
    assert_eq!(map_status(None), ShipStatus::Backlog);
}

/// Priority heuristics: explicit Pn tags first, then severity words.
#[test]
fn priority_heuristics() {
    assert_eq!(map_priority("P1 - Critical"), Some(Priority::P1));
    assert_eq!(map_priority("p3"), Some(Priority::P3));
    assert_eq!(map_priority("Blocker"), Some(Priority::P1));
    assert_eq!(map_priority("Highest"), Some(Priority::P1));
    assert_eq!(map_priority("High"), Some(Priority::P2));
    assert_eq!(map_priority("Medium"), Some(Priority::P3));
    assert_eq!(map_priority("Low"), Some(Priority::P4));
    assert_eq!(map_priority("Whenever"), None);
}

/// Quarter spellings all normalize to "Qn YYYY"; garbage passes through.
#[test]
fn quarter_normalization() {
    for raw in ["Q1 2026", "Q1-2026", "q1_2026", "Q12026", "2026Q1", "2026-Q1", "2026 q1"] {
        assert_eq!(normalize_quarter(raw), "Q1 2026", "raw: {raw}");
    }
    assert_eq!(normalize_quarter("next quarter"), "next quarter");
    assert_eq!(normalize_quarter("Q5 2026"), "Q5 2026");
}

/// The first quarter-shaped label wins; loose fix-version labels like
/// "2026-fy-Q3" also count.
#[test]
fn quarter_from_labels() {
    let labels = vec!["roadmap".to_string(), "Q2-2026".to_string(), "Q3 2026".to_string()];
    assert_eq!(parse_quarter_from_labels(&labels), Some("Q2 2026".to_string()));

    let loose = vec!["2026-fy-Q3".to_string()];
    assert_eq!(parse_quarter_from_labels(&loose), Some("Q3 2026".to_string()));

    assert_eq!(parse_quarter_from_labels(&["roadmap".to_string()]), None);
}

/// Full issue mapping: title fallback, label-derived quarter and area,
/// component-derived product, Pn→must-have, constructed browse URL.
#[test]
fn issue_field_mapping() {
    let payload = json!([{
        "key": "CORE-7",
        "summary": "Dashboard Redesign",
        "status": "In Progress",
        "priority": "P2 - High",
        "labels": ["area:Core", "Q1-2026", "onepager-approved"],
        "components": [{ "name": "Dashboard" }],
        "issueType": "Epic",
        "reporter": "Jane Doe"
    }]);
    let ships = map_export(&payload, &opts("Q4 2099")).unwrap();
    let ship = &ships[0];
    assert_eq!(ship.id, "CORE-7");
    assert_eq!(ship.title, "Dashboard Redesign");
    assert_eq!(ship.area, "Core");
    assert_eq!(ship.product, "Dashboard");
    assert_eq!(ship.target_quarter, "Q1 2026");
    assert_eq!(ship.status, ShipStatus::Committed);
    assert_eq!(ship.priority, Some(Priority::P2));
    assert_eq!(ship.must_have, Some(true));
    assert_eq!(ship.one_pager_status, Some(OnePagerStatus::Approved));
    assert_eq!(ship.pm_names, vec!["Jane Doe"]);
    assert_eq!(
        ship.jira_url.as_deref(),
        Some("https://jira.example.com/browse/CORE-7")
    );
}

/// Sparse issues still map: key becomes the title, the fallback
/// quarter applies, placeholders fill area and product, and no
/// priority means not-must-have.
#[test]
fn sparse_issue_gets_placeholders() {
    let payload = json!([{ "key": "X-1" }]);
    let ships = map_export(&payload, &opts("q3-2026")).unwrap();
    let ship = &ships[0];
    assert_eq!(ship.title, "X-1");
    assert_eq!(ship.target_quarter, "Q3 2026");
    assert_eq!(ship.area, "—");
    assert_eq!(ship.product, "—");
    assert_eq!(ship.status, ShipStatus::Backlog);
    assert_eq!(ship.priority, None);
    assert_eq!(ship.must_have, Some(false));
    assert_eq!(ship.one_pager_status, Some(OnePagerStatus::Missing));
    assert!(ship.tshirt_size_by_role.is_empty());
}
