use thiserror::Error;

/// Error type for registry construction and administrative updates.
///
/// Analytics paths (filtering, footprint analysis) never return errors;
/// malformed inputs degrade to zero-contribution or fallback-category
/// handling instead.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Unknown category: {0}")]
    UnknownCategory(String),
    #[error("Duplicate category id: {0}")]
    DuplicateCategory(String),
    #[error("Category `{id}` references missing parent `{parent}`")]
    DanglingParent { id: String, parent: String },
    #[error("Parent chain of `{0}` does not terminate at a root")]
    ParentCycle(String),
    #[error("Invalid emission factor {factor} for `{id}`")]
    InvalidFactor { id: String, factor: f64 },
    #[error("Invalid proportion {proportion} for `{id}`")]
    InvalidProportion { id: String, proportion: f64 },
    #[error("Fallback category `{0}` is missing from the registry")]
    MissingFallback(&'static str),
}

pub type Result<T> = std::result::Result<T, RegistryError>;
