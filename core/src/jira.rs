//! Jira export → Ship ingestion transform.
//!
//! One-way, offline, best-effort field mapping from an issue-tracker
//! export to the planner's Ship shape. Heuristics are deliberately
//! forgiving: unrecognized statuses land in Backlog, unrecognized
//! priorities stay unset, quarter labels in several spellings all
//! normalize to "Qn YYYY". Nothing here performs I/O — the runner
//! feeds it parsed JSON and writes the fixture out.

use crate::{
    model::Ship,
    types::{OnePagerStatus, Priority, Quarter, ShipStatus},
};
use anyhow::bail;
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JiraIssue {
    pub key: String,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub priority: Option<String>,
    #[serde(default)]
    pub area: Option<String>,
    #[serde(default)]
    pub product: Option<String>,
    #[serde(default)]
    pub one_pager_status: Option<String>,
    #[serde(default)]
    pub labels: Vec<String>,
    #[serde(default)]
    pub components: Vec<JiraComponent>,
    #[serde(default)]
    pub issue_type: Option<String>,
    #[serde(default)]
    pub reporter: Option<String>,
}

/// Components arrive either as bare strings or `{ "name": ... }`.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum JiraComponent {
    Named { name: String },
    Plain(String),
}

impl JiraComponent {
    fn name(&self) -> &str {
        match self {
            JiraComponent::Named { name } => name,
            JiraComponent::Plain(name) => name,
        }
    }
}

#[derive(Debug, Clone)]
pub struct IngestOptions {
    /// Fallback quarter when no label on the issue names one.
    pub quarter: Quarter,
    /// Keep stories/tasks too; default is epics and initiatives only.
    pub include_non_epics: bool,
    pub jira_base_url: String,
}

impl Default for IngestOptions {
    fn default() -> Self {
        Self {
            quarter: String::new(),
            include_non_epics: false,
            jira_base_url: "https://jira.example.com".to_string(),
        }
    }
}

/// Accepts the three export payload shapes: a bare issue array,
/// `{"issues": [...]}`, or `{"data": {"issues": [...]}}`.
pub fn extract_issues(payload: &Value) -> anyhow::Result<Vec<JiraIssue>> {
    let issues = if payload.is_array() {
        payload.clone()
    } else if let Some(issues) = payload.get("issues").filter(|v| v.is_array()) {
        issues.clone()
    } else if let Some(issues) = payload
        .get("data")
        .and_then(|d| d.get("issues"))
        .filter(|v| v.is_array())
    {
        issues.clone()
    } else {
        bail!(
            "Unsupported input JSON shape; expected an array of issues \
             or an object with {{ issues: [...] }}"
        );
    };
    Ok(serde_json::from_value(issues)?)
}

/// Map a full export to ships, filtering to epics/initiatives unless
/// told otherwise.
pub fn map_export(payload: &Value, opts: &IngestOptions) -> anyhow::Result<Vec<Ship>> {
    let issues = extract_issues(payload)?;
    let ships = issues
        .into_iter()
        .filter(|issue| opts.include_non_epics || is_epic_or_initiative(issue))
        .map(|issue| map_issue(&issue, opts))
        .collect();
    Ok(ships)
}

fn is_epic_or_initiative(issue: &JiraIssue) -> bool {
    match &issue.issue_type {
        // An export without issue types keeps everything.
        None => true,
        Some(t) => {
            let t = t.to_lowercase();
            t == "epic" || t == "initiative"
        }
    }
}

pub fn map_issue(issue: &JiraIssue, opts: &IngestOptions) -> Ship {
    let labels: Vec<String> = issue
        .labels
        .iter()
        .map(|l| l.trim().to_string())
        .filter(|l| !l.is_empty())
        .collect();
    let components: Vec<&str> = issue.components.iter().map(JiraComponent::name).collect();

    let (derived_area, derived_product) = derive_area_and_product(&labels, &components);
    let area = non_blank(issue.area.as_deref()).unwrap_or(derived_area);
    let product = non_blank(issue.product.as_deref()).unwrap_or(derived_product);

    let title = non_blank(issue.summary.as_deref())
        .or_else(|| non_blank(issue.title.as_deref()))
        .unwrap_or_else(|| issue.key.clone());

    let target_quarter = parse_quarter_from_labels(&labels)
        .unwrap_or_else(|| normalize_quarter(&opts.quarter));

    let one_pager_status = issue
        .one_pager_status
        .as_deref()
        .and_then(normalize_one_pager_status)
        .unwrap_or_else(|| one_pager_status_from_labels(&labels));

    let priority = issue.priority.as_deref().and_then(map_priority);
    let must_have = matches!(priority, Some(Priority::P1) | Some(Priority::P2));

    let jira_url = issue
        .link
        .clone()
        .or_else(|| issue.url.clone())
        .unwrap_or_else(|| {
            format!(
                "{}/browse/{}",
                opts.jira_base_url.trim_end_matches('/'),
                issue.key
            )
        });

    Ship {
        id: issue.key.clone(),
        jira_key: Some(issue.key.clone()),
        jira_url: Some(jira_url),
        title,
        area,
        product,
        pm_names: issue.reporter.clone().into_iter().collect(),
        target_quarter,
        tshirt_size_by_role: Default::default(),
        status: map_status(issue.status.as_deref()),
        priority,
        must_have: Some(must_have),
        one_pager_status: Some(one_pager_status),
    }
}

// ── Field heuristics ─────────────────────────────────────────────────

pub fn map_status(status: Option<&str>) -> ShipStatus {
    let s = status.unwrap_or("").to_lowercase();
    if ["in review", "review", "qa", "testing"].iter().any(|k| s.contains(k)) {
        return ShipStatus::InReview;
    }
    if ["planning", "planned", "ready"].iter().any(|k| s.contains(k)) {
        return ShipStatus::Planned;
    }
    if ["committed", "in progress", "doing", "implementing", "done", "closed"]
        .iter()
        .any(|k| s.contains(k))
    {
        return ShipStatus::Committed;
    }
    ShipStatus::Backlog
}

pub fn map_priority(priority: &str) -> Option<Priority> {
    let upper = priority.to_uppercase();
    for (tag, p) in [
        ("P1", Priority::P1),
        ("P2", Priority::P2),
        ("P3", Priority::P3),
        ("P4", Priority::P4),
    ] {
        if upper.contains(tag) {
            return Some(p);
        }
    }

    let lower = priority.to_lowercase();
    if ["highest", "blocker", "critical", "urgent"].iter().any(|k| lower.contains(k)) {
        return Some(Priority::P1);
    }
    if lower.contains("high") {
        return Some(Priority::P2);
    }
    if ["medium", "normal"].iter().any(|k| lower.contains(k)) {
        return Some(Priority::P3);
    }
    if lower.contains("low") {
        return Some(Priority::P4);
    }
    None
}

/// Normalize "Q1 2026", "Q1-2026", "q1_2026", "2026Q1", "2026-Q1" to
/// the canonical "Q1 2026". Anything unrecognized passes through.
pub fn normalize_quarter(raw: &str) -> Quarter {
    let raw = raw.trim();
    if let Some((q, year)) = parse_q_year(raw).or_else(|| parse_year_q(raw)) {
        return format!("Q{q} {year}");
    }
    raw.to_string()
}

/// First quarter-shaped label wins. Labels also allow the loose
/// "2026 ... Q1" form the tracker emits for fix-version labels.
pub fn parse_quarter_from_labels(labels: &[String]) -> Option<Quarter> {
    for label in labels {
        let l = label.trim();
        if let Some((q, year)) = parse_q_year(l).or_else(|| parse_year_q(l)) {
            return Some(format!("Q{q} {year}"));
        }
        if let Some((q, year)) = parse_loose_year_then_q(l) {
            return Some(format!("Q{q} {year}"));
        }
    }
    None
}

/// `Q1 2026` / `Q1-2026` / `Q1_2026` / `Q12026`.
fn parse_q_year(s: &str) -> Option<(char, &str)> {
    let rest = s.strip_prefix('Q').or_else(|| s.strip_prefix('q'))?;
    let mut chars = rest.chars();
    let q = chars.next().filter(|c| ('1'..='4').contains(c))?;
    let tail = chars.as_str();
    let year = tail.strip_prefix(['-', '_', ' ']).unwrap_or(tail);
    is_year(year).then_some((q, year))
}

/// `2026 Q1` / `2026-Q1` / `2026Q1`.
fn parse_year_q(s: &str) -> Option<(char, &str)> {
    let year = s.get(..4).filter(|y| is_year(y))?;
    let tail = &s[4..];
    let tail = tail.strip_prefix(['-', '_', ' ']).unwrap_or(tail);
    let rest = tail.strip_prefix('Q').or_else(|| tail.strip_prefix('q'))?;
    let mut chars = rest.chars();
    let q = chars.next().filter(|c| ('1'..='4').contains(c))?;
    chars.next().is_none().then_some((q, year))
}

/// `2026-fy-Q1` and similar: a year prefix with a trailing Q digit.
fn parse_loose_year_then_q(s: &str) -> Option<(char, &str)> {
    let year = s.get(..4).filter(|y| is_year(y))?;
    if s.len() < 6 {
        return None;
    }
    let upper = s.to_uppercase();
    let q_pos = upper.rfind('Q')?;
    let q = upper[q_pos + 1..].chars().next().filter(|c| ('1'..='4').contains(c))?;
    // Q must be the second-to-last character: "...Q3".
    (q_pos + 2 == upper.len()).then_some((q, year))
}

fn is_year(s: &str) -> bool {
    s.len() == 4 && s.chars().all(|c| c.is_ascii_digit())
}

pub fn normalize_one_pager_status(value: &str) -> Option<OnePagerStatus> {
    let v = value.trim().to_lowercase();
    if v.is_empty() {
        return None;
    }
    match v.as_str() {
        "approved" => Some(OnePagerStatus::Approved),
        "ready_for_review" | "ready for review" => Some(OnePagerStatus::ReadyForReview),
        "in_progress" | "in progress" => Some(OnePagerStatus::InProgress),
        "none" | "not started" | "n/a" | "-" | "null" => Some(OnePagerStatus::Missing),
        _ if v.contains("missing") => Some(OnePagerStatus::Missing),
        _ => None,
    }
}

fn one_pager_status_from_labels(labels: &[String]) -> OnePagerStatus {
    let normalized: Vec<String> = labels.iter().map(|l| l.to_lowercase()).collect();
    let has = |needle: &str| normalized.iter().any(|l| l.contains(needle));

    if has("onepager-approved") {
        OnePagerStatus::Approved
    } else if has("onepager-ready_for_review") {
        OnePagerStatus::ReadyForReview
    } else if has("onepager-in_progress") {
        OnePagerStatus::InProgress
    } else {
        OnePagerStatus::Missing
    }
}

/// Area from an `area:` label, product from the first component.
/// Placeholder dashes keep downstream grouping total.
fn derive_area_and_product(labels: &[String], components: &[&str]) -> (String, String) {
    let area = labels
        .iter()
        .find(|l| l.to_lowercase().starts_with("area:"))
        .map(|l| l.splitn(2, ':').nth(1).unwrap_or("").trim().to_string())
        .filter(|a| !a.is_empty())
        .unwrap_or_else(|| "—".to_string());

    let product = components
        .first()
        .map(|c| c.trim())
        .filter(|c| !c.is_empty())
        .map(String::from)
        .unwrap_or_else(|| "—".to_string());

    (area, product)
}

fn non_blank(s: Option<&str>) -> Option<String> {
    s.map(str::trim).filter(|s| !s.is_empty()).map(String::from)
}
