//! Filter Engine
//!
//! Selects the records matching a region, a product and an inclusive date
//! range. Results borrow from the store and keep dataset order.

use chrono::NaiveDate;

use crate::models::{FilterCriteria, SalesRecord};

/// Return every record matching `region`, `product` and
/// `date_start <= date <= date_end`.
///
/// An inverted range, or a region/product absent from the data, yields an
/// empty result rather than an error.
pub fn filter<'a>(
    records: &'a [SalesRecord],
    region: &str,
    product: &str,
    date_start: NaiveDate,
    date_end: NaiveDate,
) -> Vec<&'a SalesRecord> {
    if date_start > date_end {
        return Vec::new();
    }

    records
        .iter()
        .filter(|r| r.region == region && r.product == product)
        .filter(|r| date_start <= r.date && r.date <= date_end)
        .collect()
}

pub fn apply<'a>(records: &'a [SalesRecord], criteria: &FilterCriteria) -> Vec<&'a SalesRecord> {
    filter(
        records,
        &criteria.region,
        &criteria.product,
        criteria.date_start,
        criteria.date_end,
    )
}
