use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A normalized transaction record, produced by the import layer.
///
/// `date` is `None` when the source record carried a value that could not be
/// parsed as a calendar date. Such transactions are rejected by every filter
/// and contribute no month to monthly aggregates.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    pub id: String,
    #[serde(default)]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub description: String,
    pub amount: f64,
    /// Category id; unresolvable references fall back to the
    /// miscellaneous/other category during analysis.
    pub category: String,
    pub account: String,
}

impl Transaction {
    pub fn new(
        id: impl Into<String>,
        date: NaiveDate,
        amount: f64,
        category: impl Into<String>,
        account: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            date: Some(date),
            description: String::new(),
            amount,
            category: category.into(),
            account: account.into(),
        }
    }

    /// Negative finite amounts are expenses; everything else is income or
    /// neutral and contributes no emissions.
    pub fn is_expense(&self) -> bool {
        self.amount.is_finite() && self.amount < 0.0
    }
}

/// Inclusive date bounds.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }
}

/// Filter state selected in the UI. Absent clauses match everything.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Filters {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_range: Option<DateRange>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account: Option<String>,
    /// Category ids or display names; a transaction matches when its category
    /// equals or descends from any entry.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<String>>,
}
