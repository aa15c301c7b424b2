//! Dataset Store
//!
//! Loads the sales table once at startup and keeps it in memory, read-only,
//! for the lifetime of the process. Handlers share it through `Arc`.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use chrono::NaiveDate;
use csv::{ReaderBuilder, StringRecord};
use indexmap::IndexSet;
use tracing::{debug, info};

use crate::models::SalesRecord;
use crate::utils::parse_date;

pub const DATE_COLUMN: &str = "Date";
pub const REGION_COLUMN: &str = "Region";
pub const PRODUCT_COLUMN: &str = "Product";
pub const SALES_COLUMN: &str = "Sales";

#[derive(Debug, thiserror::Error)]
pub enum DataLoadError {
    #[error("Failed to open {path}: {source}")]
    Open {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("Missing required column '{0}'")]
    MissingColumn(String),

    #[error("Row {row}: missing value for column '{column}'")]
    MissingValue { row: usize, column: &'static str },

    #[error("Row {row}: unparseable date '{value}'")]
    InvalidDate { row: usize, value: String },

    #[error("Row {row}: unparseable sales amount '{value}'")]
    InvalidSales { row: usize, value: String },
}

#[derive(Debug, Clone, Copy)]
struct ColumnIndices {
    date: usize,
    region: usize,
    product: usize,
    sales: usize,
}

impl ColumnIndices {
    fn from_headers(headers: &StringRecord) -> Result<Self, DataLoadError> {
        let find = |name: &str| {
            headers
                .iter()
                .position(|h| h == name)
                .ok_or_else(|| DataLoadError::MissingColumn(name.to_string()))
        };

        Ok(Self {
            date: find(DATE_COLUMN)?,
            region: find(REGION_COLUMN)?,
            product: find(PRODUCT_COLUMN)?,
            sales: find(SALES_COLUMN)?,
        })
    }
}

/// In-memory, immutable sales dataset.
#[derive(Debug, Clone, Default)]
pub struct SalesStore {
    records: Vec<SalesRecord>,
    regions: Vec<String>,
    products: Vec<String>,
    date_bounds: Option<(NaiveDate, NaiveDate)>,
}

impl SalesStore {
    /// Load the dataset from a CSV file on disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DataLoadError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| DataLoadError::Open {
            path: path.display().to_string(),
            source,
        })?;

        let store = Self::from_reader(file)?;
        info!(
            path = %path.display(),
            records = store.len(),
            regions = store.regions.len(),
            products = store.products.len(),
            "Sales dataset loaded"
        );
        Ok(store)
    }

    /// Parse CSV content from any reader. The header row is required; columns
    /// other than Date, Region, Product and Sales are ignored.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, DataLoadError> {
        // Short rows surface as `MissingValue` from `parse_row`.
        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);
        let columns = ColumnIndices::from_headers(rdr.headers()?)?;

        let mut records = Vec::new();
        for (idx, row) in rdr.records().enumerate() {
            let row = row?;
            records.push(parse_row(&row, columns, idx + 1)?);
        }

        debug!(rows = records.len(), "Parsed sales rows");
        Ok(Self::from_records(records))
    }

    pub fn from_records(records: Vec<SalesRecord>) -> Self {
        let regions: IndexSet<&str> = records.iter().map(|r| r.region.as_str()).collect();
        let products: IndexSet<&str> = records.iter().map(|r| r.product.as_str()).collect();

        let min = records.iter().map(|r| r.date).min();
        let max = records.iter().map(|r| r.date).max();
        let date_bounds = min.zip(max);

        let regions = regions.into_iter().map(str::to_string).collect();
        let products = products.into_iter().map(str::to_string).collect();

        Self {
            records,
            regions,
            products,
            date_bounds,
        }
    }

    pub fn records(&self) -> &[SalesRecord] {
        &self.records
    }

    /// Distinct regions in order of first appearance.
    pub fn regions(&self) -> &[String] {
        &self.regions
    }

    /// Distinct products in order of first appearance.
    pub fn products(&self) -> &[String] {
        &self.products
    }

    pub fn min_date(&self) -> Option<NaiveDate> {
        self.date_bounds.map(|(min, _)| min)
    }

    pub fn max_date(&self) -> Option<NaiveDate> {
        self.date_bounds.map(|(_, max)| max)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

fn parse_row(row: &StringRecord, columns: ColumnIndices, line: usize) -> Result<SalesRecord, DataLoadError> {
    let field = |idx: usize, column: &'static str| {
        row.get(idx)
            .ok_or(DataLoadError::MissingValue { row: line, column })
    };

    let raw_date = field(columns.date, DATE_COLUMN)?;
    let date = parse_date(raw_date).ok_or_else(|| DataLoadError::InvalidDate {
        row: line,
        value: raw_date.to_string(),
    })?;

    let raw_sales = field(columns.sales, SALES_COLUMN)?;
    let sales = raw_sales
        .trim()
        .parse::<f64>()
        .map_err(|_| DataLoadError::InvalidSales {
            row: line,
            value: raw_sales.to_string(),
        })?;

    Ok(SalesRecord {
        date,
        region: field(columns.region, REGION_COLUMN)?.to_string(),
        product: field(columns.product, PRODUCT_COLUMN)?.to_string(),
        sales,
    })
}
