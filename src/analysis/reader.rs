use crate::error::ParseError;
use rust_decimal::Decimal;
use std::str::FromStr;

pub const AMOUNT_COLUMN: &str = "amount";
pub const CATEGORY_COLUMN: &str = "category";
pub const PRODUCT_COLUMN: &str = "product";

/// One row of the sales CSV
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SalesRecord {
    /// 1-based line in the source file
    pub line: u64,
    pub amount: Decimal,
    pub category: String,
    pub product: String,
}

/// Positions of the required columns within the header row
#[derive(Debug, Clone, Copy)]
struct ColumnLayout {
    amount: usize,
    category: usize,
    product: usize,
}

impl ColumnLayout {
    fn from_headers(headers: &csv::StringRecord) -> Result<Self, ParseError> {
        let find = |name: &str| {
            headers
                .iter()
                .position(|header| header == name)
                .ok_or_else(|| ParseError::MissingColumn(name.to_string()))
        };

        Ok(Self {
            amount: find(AMOUNT_COLUMN)?,
            category: find(CATEGORY_COLUMN)?,
            product: find(PRODUCT_COLUMN)?,
        })
    }
}

/// Streams `SalesRecord`s out of CSV text one row at a time.
///
/// Columns are located by header name, so their order does not matter.
/// Extra columns are ignored, and a row may stop short of them as long as
/// the required columns are present.
pub struct SalesReader<'a> {
    records: csv::StringRecordsIntoIter<&'a [u8]>,
    layout: ColumnLayout,
}

impl<'a> SalesReader<'a> {
    pub fn from_bytes(data: &'a [u8]) -> Result<Self, ParseError> {
        let text = std::str::from_utf8(data).map_err(|e| ParseError::Encoding(e.to_string()))?;

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(text.as_bytes());

        let headers = reader.headers().map_err(|e| malformed(&e))?;
        let layout = ColumnLayout::from_headers(headers)?;

        Ok(Self {
            records: reader.into_records(),
            layout,
        })
    }

    fn parse_record(&self, record: &csv::StringRecord) -> Result<SalesRecord, ParseError> {
        let line = record.position().map(|p| p.line()).unwrap_or_default();
        let field = |index: usize, column: &str| {
            record.get(index).ok_or_else(|| ParseError::MissingField {
                line,
                column: column.to_string(),
            })
        };

        let raw_amount = field(self.layout.amount, AMOUNT_COLUMN)?;
        let amount = parse_amount(raw_amount).ok_or_else(|| {
            let value = raw_amount.to_string();
            if is_numeric(raw_amount) {
                ParseError::AmountOutOfRange { line, value }
            } else {
                ParseError::InvalidAmount { line, value }
            }
        })?;

        Ok(SalesRecord {
            line,
            amount,
            category: field(self.layout.category, CATEGORY_COLUMN)?.to_string(),
            product: field(self.layout.product, PRODUCT_COLUMN)?.to_string(),
        })
    }
}

impl Iterator for SalesReader<'_> {
    type Item = Result<SalesRecord, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        let record = self.records.next()?;
        Some(
            record
                .map_err(|e| malformed(&e))
                .and_then(|record| self.parse_record(&record)),
        )
    }
}

/// Parse a decimal amount, accepting plain and scientific notation
pub fn parse_amount(value: &str) -> Option<Decimal> {
    if value.is_empty() {
        return None;
    }
    Decimal::from_str(value)
        .or_else(|_| Decimal::from_scientific(value))
        .ok()
}

// Finite numbers such as `1e30` that may still not fit in a `Decimal`
fn is_numeric(value: &str) -> bool {
    value.parse::<f64>().is_ok_and(f64::is_finite)
}

fn malformed(err: &csv::Error) -> ParseError {
    let line = err.position().map(|p| p.line()).unwrap_or_default();
    ParseError::Malformed {
        line,
        message: err.to_string(),
    }
}
