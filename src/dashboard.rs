//! Interaction Controller
//!
//! Recomputes the three charts from the current widget values. Each call is
//! independent: nothing is remembered between invocations.

use chrono::NaiveDate;
use tracing::debug;

use crate::charts;
use crate::config::DataConfig;
use crate::filter;
use crate::models::{ChartsQuery, DashboardCharts, DashboardOptions, FilterCriteria};
use crate::store::SalesStore;
use crate::types::{AppError, AppResult};
use crate::utils::parse_date;

pub fn update_charts(store: &SalesStore, criteria: FilterCriteria) -> DashboardCharts {
    let subset = filter::apply(store.records(), &criteria);
    debug!(
        region = %criteria.region,
        product = %criteria.product,
        start = %criteria.date_start,
        end = %criteria.date_end,
        matched = subset.len(),
        "Charts recomputed"
    );

    let projected = charts::project(&subset);
    DashboardCharts {
        record_count: subset.len(),
        criteria,
        bar: projected.bar,
        line: projected.line,
        pie: projected.pie,
    }
}

/// Fill the gaps in a query: an absent region or product falls back to the
/// configured default, absent dates to the dataset's span. Values that are
/// present but blank are kept as-is and match nothing.
pub fn resolve_criteria(
    store: &SalesStore,
    defaults: &DataConfig,
    query: ChartsQuery,
) -> AppResult<FilterCriteria> {
    let region = query.region.unwrap_or_else(|| defaults.default_region.clone());
    let product = query.product.unwrap_or_else(|| defaults.default_product.clone());

    // MAX..MIN is an empty range: used for blank bounds and for a store with no span.
    let date_start = resolve_bound("start_date", query.start_date, store.min_date(), NaiveDate::MAX)?;
    let date_end = resolve_bound("end_date", query.end_date, store.max_date(), NaiveDate::MIN)?;

    Ok(FilterCriteria {
        region,
        product,
        date_start,
        date_end,
    })
}

pub fn options(store: &SalesStore, defaults: &DataConfig) -> DashboardOptions {
    DashboardOptions {
        regions: store.regions().to_vec(),
        products: store.products().to_vec(),
        min_date: store.min_date(),
        max_date: store.max_date(),
        default_region: defaults.default_region.clone(),
        default_product: defaults.default_product.clone(),
    }
}

fn resolve_bound(
    name: &str,
    value: Option<String>,
    fallback: Option<NaiveDate>,
    empty: NaiveDate,
) -> AppResult<NaiveDate> {
    match value {
        None => Ok(fallback.unwrap_or(empty)),
        Some(raw) if raw.trim().is_empty() => Ok(empty),
        Some(raw) => parse_date(&raw)
            .ok_or_else(|| AppError::InvalidRequest(format!("{name}: unparseable date '{raw}'"))),
    }
}
