pub mod carbon_service;
pub mod dedup_service;
pub mod filter_service;

pub use carbon_service::{
    CarbonAnalysis, CarbonBreakdown, CarbonCalculator, MonthlyFootprint, DEFAULT_REGION,
};
pub use dedup_service::DedupService;
pub use filter_service::FilterService;
