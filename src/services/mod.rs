//! Engine stages
//!
//! Each stage takes an immutable input and returns a new value:
//! import → normalize → categorize → aggregate, with the workday calculator
//! feeding the report assembler separately.

pub mod aggregate;
pub mod category;
pub mod import;
pub mod normalize;
pub mod workdays;

pub use aggregate::{aggregate, Aggregator, LedgerAggregates, PersonTotals};
pub use category::{categorize, extract_category};
pub use import::{ColumnMapping, ImportService};
pub use normalize::{Normalizer, MAX_AMOUNT_UNITS};
pub use workdays::{weekday_count, working_hours, WORKDAY_HOURS};
