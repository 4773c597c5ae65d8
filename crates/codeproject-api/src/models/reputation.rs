//! Reputation totals and their per-type breakdown

use serde::Deserialize;
use url::Url;

/// Total reputation points plus the per-type breakdown.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Reputation {
    pub total_points: i32,
    pub reputation_types: Vec<ReputationType>,
    pub graph_url: Option<Url>,
}

/// Points, level, and designation in one reputation type.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReputationType {
    pub name: String,
    pub points: i32,
    pub level: String,
    pub designation: String,
}
