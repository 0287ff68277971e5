use super::reader::{SalesReader, SalesRecord};
use super::totals::OrderedTotals;
use crate::error::ParseError;
use rust_decimal::Decimal;
use serde::Serialize;

/// Number of products reported in the ranking
pub const TOP_PRODUCT_COUNT: usize = 3;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductSales {
    pub product: String,
    pub amount: Decimal,
}

/// Totals computed from one sales dataset
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregateResult {
    pub total_sales: Decimal,
    pub category_sales: OrderedTotals,
    #[serde(skip)]
    pub product_sales: OrderedTotals,
    pub top_3_products: Vec<ProductSales>,
}

/// Single-pass accumulator for sales records
#[derive(Debug, Default)]
pub struct SalesAggregator {
    total_sales: Decimal,
    category_sales: OrderedTotals,
    product_sales: OrderedTotals,
    rows: u64,
}

impl SalesAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one record into the totals.
    ///
    /// A record that would overflow any total is rejected and leaves the
    /// aggregator unchanged.
    pub fn push(&mut self, record: &SalesRecord) -> Result<(), ParseError> {
        let overflow = || ParseError::SumOverflow { line: record.line };

        let total_sales = self
            .total_sales
            .checked_add(record.amount)
            .ok_or_else(overflow)?;
        if !self.category_sales.can_add(&record.category, record.amount)
            || !self.product_sales.can_add(&record.product, record.amount)
        {
            return Err(overflow());
        }

        self.total_sales = total_sales;
        self.category_sales
            .checked_add(&record.category, record.amount)
            .ok_or_else(overflow)?;
        self.product_sales
            .checked_add(&record.product, record.amount)
            .ok_or_else(overflow)?;
        self.rows += 1;
        Ok(())
    }

    pub fn rows(&self) -> u64 {
        self.rows
    }

    pub fn finish(self) -> AggregateResult {
        let top_3_products = self
            .product_sales
            .ranked()
            .into_iter()
            .take(TOP_PRODUCT_COUNT)
            .map(|(product, amount)| ProductSales { product, amount })
            .collect();

        AggregateResult {
            total_sales: self.total_sales,
            category_sales: self.category_sales,
            product_sales: self.product_sales,
            top_3_products,
        }
    }
}

/// Aggregate a sales CSV held in memory.
///
/// The first bad row aborts the whole computation.
pub fn aggregate_csv(data: &[u8]) -> Result<AggregateResult, ParseError> {
    let mut aggregator = SalesAggregator::new();

    for record in SalesReader::from_bytes(data)? {
        aggregator.push(&record?)?;
    }

    tracing::debug!(rows = aggregator.rows(), "Aggregated sales records");

    Ok(aggregator.finish())
}
