//! Hierarchical aggregator: grouped counts over one or two event fields,
//! optionally restricted to a set of revision indices and split by
//! deposit year.

pub mod aggregate;
pub mod filter;
pub mod types;

pub use aggregate::{aggregate, aggregate_by_year, rollup};
pub use filter::IndexFilter;
pub use types::{GroupOrder, Grouping, HierarchicalGroup, YearGrouping};
