//! Input-contract types for ipolens. The analytics engine consumes nothing
//! that hasn't been parsed and validated here.

pub mod breakdown;
pub mod series;
pub mod snapshot;

pub use breakdown::{HeuristicsSummary, MetricBreakdownItem};
pub use series::Series;
pub use snapshot::{ReportSnapshot, SnapshotError};
