//! Domain types for the category forest.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A node in the category forest.
///
/// Categories form a forest through `parent_id` pointers; a node without a
/// parent is a root. A node either carries its own `emission_factor` or
/// relies on its children for emission estimates. `proportion` splits a
/// parent's spending across siblings when the parent has no direct factor.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    /// kg CO₂-equivalent per unit of currency spent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emission_factor: Option<f64>,
    /// Share of the parent's spending attributed to this node, in [0, 1].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proportion: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<NaiveDate>,
}

impl Category {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            parent_id: None,
            emission_factor: None,
            proportion: None,
            region: None,
            last_updated: None,
        }
    }

    pub fn child_of(mut self, parent_id: impl Into<String>) -> Self {
        self.parent_id = Some(parent_id.into());
        self
    }

    pub fn with_factor(mut self, emission_factor: f64) -> Self {
        self.emission_factor = Some(emission_factor);
        self
    }

    pub fn with_proportion(mut self, proportion: f64) -> Self {
        self.proportion = Some(proportion);
        self
    }

    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }
}
