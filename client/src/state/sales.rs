//! Daily sales summary derived from a day's visit records.

#[cfg(test)]
#[path = "sales_test.rs"]
mod sales_test;

use crate::net::types::VisitRecord;

/// Totals shown above the sales table.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SalesSummary {
    /// Sum of prices in won, saturating; records without a price count as 0.
    pub total: i64,
    /// Number of visits.
    pub count: usize,
}

impl SalesSummary {
    pub fn from_records(records: &[VisitRecord]) -> Self {
        Self {
            total: records.iter().filter_map(|r| r.price).fold(0, i64::saturating_add),
            count: records.len(),
        }
    }
}
