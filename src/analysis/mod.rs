//! Sales CSV aggregation
//!
//! Parses the sales dataset in a single forward pass and computes the
//! overall total, per-category and per-product totals, and the top products.

pub mod aggregator;
pub mod reader;
pub mod totals;

pub use aggregator::{AggregateResult, ProductSales, SalesAggregator, aggregate_csv};
pub use reader::{SalesReader, SalesRecord};
pub use totals::OrderedTotals;
