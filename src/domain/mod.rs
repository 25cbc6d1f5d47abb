pub mod category;
pub mod transaction;

pub use category::Category;
pub use transaction::{DateRange, Filters, Transaction};
