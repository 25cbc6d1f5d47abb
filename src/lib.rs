#![doc(test(attr(deny(warnings))))]

//! Footprint Core provides the category registry, category-aware transaction
//! filtering, and carbon footprint analytics behind a session-local personal
//! finance tracker. Callers hand in normalized transactions; persistence,
//! import, and presentation live outside this crate.

pub mod domain;
pub mod errors;
pub mod registry;
pub mod services;
pub mod utils;

use std::sync::Once;

pub use domain::{Category, DateRange, Filters, Transaction};
pub use errors::{RegistryError, Result};
pub use registry::{CategoryRegistry, FALLBACK_CATEGORY_ID};
pub use services::{
    CarbonAnalysis, CarbonBreakdown, CarbonCalculator, DedupService, FilterService,
    MonthlyFootprint, DEFAULT_REGION,
};

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Footprint Core tracing initialized.");
    });
}

/// Filters against the process-wide registry. See [`FilterService::filter`].
pub fn filter_transactions(transactions: &[Transaction], filters: &Filters) -> Vec<Transaction> {
    FilterService::filter(&registry::current(), transactions, filters)
}

/// Footprint analysis against the process-wide registry; pass
/// [`DEFAULT_REGION`] unless the user selected one.
pub fn analyze_footprint(transactions: &[Transaction], region: &str) -> CarbonAnalysis {
    CarbonCalculator::analyze(&registry::current(), transactions, region)
}

/// Single-transaction emission estimate against the process-wide registry.
pub fn calculate_transaction_emission(transaction: &Transaction, region: &str) -> f64 {
    CarbonCalculator::transaction_emission(&registry::current(), transaction, region)
}
