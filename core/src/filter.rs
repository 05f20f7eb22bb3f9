//! Planning scope: the quarter/area/product/role filters the UI holds.
//!
//! RULE: filters fail open. A missing or empty value means "no
//! filter"; an unknown value simply matches nothing. Filtering never
//! errors — the worst outcome of malformed input is unfiltered data.

use crate::{
    model::{Person, Ship},
    types::{Quarter, Role},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlanScope {
    #[serde(default)]
    pub quarter: Option<Quarter>,
    #[serde(default)]
    pub area: Option<String>,
    #[serde(default)]
    pub product: Option<String>,
    /// Empty = all roles.
    #[serde(default)]
    pub roles: Vec<Role>,
}

impl PlanScope {
    pub fn for_quarter(quarter: impl Into<Quarter>) -> Self {
        PlanScope {
            quarter: Some(quarter.into()),
            ..PlanScope::default()
        }
    }

    pub fn with_area(mut self, area: impl Into<String>) -> Self {
        self.area = non_empty(area.into());
        self
    }

    pub fn with_product(mut self, product: impl Into<String>) -> Self {
        self.product = non_empty(product.into());
        self
    }

    pub fn with_roles(mut self, roles: &[Role]) -> Self {
        self.roles = roles.to_vec();
        self
    }

    /// Ships in scope: quarter, area, and product must all pass.
    pub fn ships<'a>(&self, ships: &'a [Ship]) -> Vec<&'a Ship> {
        ships
            .iter()
            .filter(|s| self.matches_quarter(&s.target_quarter))
            .filter(|s| self.matches_area(&s.area))
            .filter(|s| self.matches_product(&s.product))
            .collect()
    }

    /// People in scope: area, product, and role selection must pass.
    /// The quarter filter does not apply to people — a person exists in
    /// every quarter; only their assignments are quarter-bound.
    pub fn people<'a>(&self, people: &'a [Person]) -> Vec<&'a Person> {
        people
            .iter()
            .filter(|p| self.matches_area(&p.area))
            .filter(|p| match (&self.product, &p.product) {
                (None, _) => true,
                (Some(want), Some(have)) => want == have,
                (Some(_), None) => false,
            })
            .filter(|p| self.roles.is_empty() || self.roles.contains(&p.role))
            .collect()
    }

    fn matches_quarter(&self, quarter: &str) -> bool {
        match &self.quarter {
            None => true,
            Some(q) if q.is_empty() => true,
            Some(q) => q == quarter,
        }
    }

    fn matches_area(&self, area: &str) -> bool {
        match &self.area {
            None => true,
            Some(a) if a.is_empty() => true,
            Some(a) => a == area,
        }
    }

    fn matches_product(&self, product: &str) -> bool {
        match &self.product {
            None => true,
            Some(p) if p.is_empty() => true,
            Some(p) => p == product,
        }
    }
}

fn non_empty(s: String) -> Option<String> {
    if s.trim().is_empty() {
        None
    } else {
        Some(s)
    }
}
