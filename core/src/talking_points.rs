//! Talking-point generator for the weekly prioritization conversation.
//!
//! Pure function over the current alerts and initiative mix. Rules run
//! in fixed order and append independently — no rule suppresses
//! another, and the three generic conversation starters always close
//! the list, so output length is at least 3.

use crate::{
    load::CapacityAlerts,
    scenario::{Designer, DesignReadiness, Initiative, InitiativePriority},
    types::TShirtSize,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TalkingPoint {
    pub category: String,
    pub point: String,
}

impl TalkingPoint {
    fn new(category: &str, point: String) -> Self {
        Self {
            category: category.to_string(),
            point,
        }
    }
}

pub fn generate_talking_points(
    initiatives: &[Initiative],
    _designers: &[Designer],
    selected_product: Option<&str>,
    capacity_alerts: &CapacityAlerts,
) -> Vec<TalkingPoint> {
    let mut points = Vec::new();

    // 1. Overloaded people.
    if !capacity_alerts.overloaded.is_empty() {
        points.push(TalkingPoint::new(
            "Critical Capacity",
            format!(
                "{} are overloaded. Immediate rebalancing required.",
                capacity_alerts.overloaded.join(", ")
            ),
        ));
    }

    // 2. Near-capacity people.
    if !capacity_alerts.near_capacity.is_empty() {
        points.push(TalkingPoint::new(
            "Capacity Warning",
            format!(
                "{} are near capacity. Monitor closely.",
                capacity_alerts.near_capacity.join(", ")
            ),
        ));
    }

    // 3. XL initiatives invite a scope conversation.
    let xl_names: Vec<&str> = initiatives
        .iter()
        .filter(|i| i.size == TShirtSize::XL)
        .map(|i| i.name.as_str())
        .collect();
    if !xl_names.is_empty() {
        points.push(TalkingPoint::new(
            "Scope Negotiation",
            format!(
                "Can we break {} into testable smaller pieces?",
                xl_names.join(", ")
            ),
        ));
    }

    // 4. Too many must-haves to do any of them well.
    let must_count = initiatives
        .iter()
        .filter(|i| i.priority == InitiativePriority::Must)
        .count();
    if must_count > 3 {
        points.push(TalkingPoint::new(
            "Priority Forcing",
            format!(
                "We have {must_count} Must-have initiatives. If we could only do 2-3 well, which ones?"
            ),
        ));
    }

    // 5. Product-scoped readiness gaps, only when a product filter is on.
    if let Some(product) = selected_product.filter(|p| !p.is_empty()) {
        let not_ready = initiatives
            .iter()
            .filter(|i| i.product == product)
            .filter(|i| i.design_readiness == DesignReadiness::NotReady)
            .count();
        if not_ready > 0 {
            points.push(TalkingPoint::new(
                "Design Readiness",
                format!("{not_ready} {product} initiatives lack clear design requirements."),
            ));
        }
    }

    // 6. Fixed conversation starters, always appended.
    points.push(TalkingPoint::new(
        "Timeline Reality",
        "What's the real consequence if this ships a quarter later?".to_string(),
    ));
    points.push(TalkingPoint::new(
        "Minimum Viable",
        "What's the minimum viable version that still delivers value?".to_string(),
    ));
    points.push(TalkingPoint::new(
        "Trade-off Clarity",
        "If we keep X, we need to move Y out. Are you aligned?".to_string(),
    ));

    points
}
