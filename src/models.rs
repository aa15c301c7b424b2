use std::sync::Arc;

use chrono::NaiveDate;

use crate::charts::ChartSpec;
use crate::config::Config;
use crate::store::SalesStore;
use crate::types::AppResult;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<SalesStore>,
    pub config: Config,
}

impl AppState {
    pub fn new(store: SalesStore, config: Config) -> Self {
        Self {
            store: Arc::new(store),
            config,
        }
    }

    /// Load the dataset named by `config.data.path` and build the shared state.
    pub fn load(config: Config) -> AppResult<Self> {
        let store = SalesStore::load(&config.data.path)?;
        Ok(Self::new(store, config))
    }
}

/// One row of the sales dataset.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SalesRecord {
    pub date: NaiveDate,
    pub region: String,
    pub product: String,
    pub sales: f64,
}

impl SalesRecord {
    pub fn new(
        date: NaiveDate,
        region: impl Into<String>,
        product: impl Into<String>,
        sales: f64,
    ) -> Self {
        Self {
            date,
            region: region.into(),
            product: product.into(),
            sales,
        }
    }
}

/// The four values currently selected in the dashboard widgets.
/// Both date bounds are inclusive.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FilterCriteria {
    pub region: String,
    pub product: String,
    pub date_start: NaiveDate,
    pub date_end: NaiveDate,
}

impl FilterCriteria {
    pub fn new(
        region: impl Into<String>,
        product: impl Into<String>,
        date_start: NaiveDate,
        date_end: NaiveDate,
    ) -> Self {
        Self {
            region: region.into(),
            product: product.into(),
            date_start,
            date_end,
        }
    }

    pub fn matches(&self, record: &SalesRecord) -> bool {
        record.region == self.region
            && record.product == self.product
            && self.date_start <= record.date
            && record.date <= self.date_end
    }
}

// API Request/Response types

/// Query string of `GET /api/charts`. Every field is optional; missing values
/// fall back to the configured defaults and the dataset's date span.
#[derive(Debug, Default, serde::Deserialize)]
pub struct ChartsQuery {
    pub region: Option<String>,
    pub product: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

#[derive(Debug, Clone, serde::Serialize)]
pub struct DashboardCharts {
    pub criteria: FilterCriteria,
    pub record_count: usize,
    pub bar: ChartSpec,
    pub line: ChartSpec,
    pub pie: ChartSpec,
}

/// Initial widget values for the dashboard page
#[derive(Debug, Clone, serde::Serialize)]
pub struct DashboardOptions {
    pub regions: Vec<String>,
    pub products: Vec<String>,
    pub min_date: Option<NaiveDate>,
    pub max_date: Option<NaiveDate>,
    pub default_region: String,
    pub default_product: String,
}

#[derive(Debug, serde::Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
    pub records: usize,
}
