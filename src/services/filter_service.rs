//! Transaction filtering with ancestor-inclusive category matching.

use crate::domain::{Filters, Transaction};
use crate::registry::{CategoryRegistry, FALLBACK_CATEGORY_ID};

pub struct FilterService;

impl FilterService {
    /// Returns the transactions matching `filters`, preserving input order.
    /// All clauses are AND-ed; absent clauses match everything. Transactions
    /// without a well-formed date are always rejected, whatever the active
    /// filters.
    pub fn filter(
        registry: &CategoryRegistry,
        transactions: &[Transaction],
        filters: &Filters,
    ) -> Vec<Transaction> {
        transactions
            .iter()
            .filter(|tx| Self::matches(registry, tx, filters))
            .cloned()
            .collect()
    }

    fn matches(registry: &CategoryRegistry, tx: &Transaction, filters: &Filters) -> bool {
        let Some(date) = tx.date else {
            return false;
        };
        if let Some(range) = &filters.date_range {
            if !range.contains(date) {
                return false;
            }
        }
        if let Some(account) = &filters.account {
            if tx.account != *account {
                return false;
            }
        }
        if let Some(selected) = &filters.categories {
            if !selected.is_empty() && !Self::matches_category(registry, &tx.category, selected) {
                return false;
            }
        }
        true
    }

    /// A transaction matches when its category equals or descends from any
    /// selected category. A transaction whose category id is unknown to the
    /// registry matches only a selection that is literally the fallback
    /// node — a legacy compatibility rule, not a wildcard.
    fn matches_category(
        registry: &CategoryRegistry,
        tx_category: &str,
        selected: &[String],
    ) -> bool {
        let tx_node = registry.get(tx_category);
        selected.iter().any(|key| {
            let Some(filter_node) = registry.get(key).or_else(|| registry.get_by_name(key))
            else {
                // Unresolvable selections match nothing.
                return false;
            };
            match tx_node {
                Some(sub) => registry.is_under(sub, filter_node),
                None => filter_node.id == FALLBACK_CATEGORY_ID,
            }
        })
    }
}
