//! Chart Projector
//!
//! Maps a filtered set of sales records into three renderer-agnostic chart
//! descriptions. The dashboard page turns each [`ChartSpec`] into a plot:
//! - **Bar**: sales per record over time, in filtered order
//! - **Line**: the same series, sorted by date
//! - **Pie**: total sales per region

use chrono::NaiveDate;
use indexmap::IndexMap;

use crate::models::SalesRecord;

pub const BAR_TITLE: &str = "Sales Over Time (Bar Chart)";
pub const LINE_TITLE: &str = "Sales Over Time (Line Chart)";
pub const PIE_TITLE: &str = "Sales Share by Region";

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    Bar,
    Line,
    Pie,
}

/// Which record fields feed which visual channel.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Encoding {
    Cartesian { x: String, y: String },
    Category { names: String, values: String },
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SeriesPoint {
    pub x: NaiveDate,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PieSlice {
    pub label: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type", content = "values", rename_all = "snake_case")]
pub enum ChartData {
    Series(Vec<SeriesPoint>),
    Slices(Vec<PieSlice>),
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub title: String,
    pub encoding: Encoding,
    pub data: ChartData,
}

impl ChartSpec {
    pub fn point_count(&self) -> usize {
        match &self.data {
            ChartData::Series(points) => points.len(),
            ChartData::Slices(slices) => slices.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.point_count() == 0
    }
}

pub struct ProjectedCharts {
    pub bar: ChartSpec,
    pub line: ChartSpec,
    pub pie: ChartSpec,
}

pub fn project(records: &[&SalesRecord]) -> ProjectedCharts {
    ProjectedCharts {
        bar: bar_chart(records),
        line: line_chart(records),
        pie: pie_chart(records),
    }
}

fn sales_over_time() -> Encoding {
    Encoding::Cartesian {
        x: "Date".to_string(),
        y: "Sales".to_string(),
    }
}

fn to_points<'a>(records: impl Iterator<Item = &'a SalesRecord>) -> Vec<SeriesPoint> {
    records
        .map(|r| SeriesPoint {
            x: r.date,
            y: r.sales,
        })
        .collect()
}

/// One bar per record. Records sharing a date stay separate entries.
pub fn bar_chart(records: &[&SalesRecord]) -> ChartSpec {
    ChartSpec {
        kind: ChartKind::Bar,
        title: BAR_TITLE.to_string(),
        encoding: sales_over_time(),
        data: ChartData::Series(to_points(records.iter().copied())),
    }
}

pub fn line_chart(records: &[&SalesRecord]) -> ChartSpec {
    let mut sorted = records.to_vec();
    // stable: equal dates keep filtered order
    sorted.sort_by_key(|r| r.date);

    ChartSpec {
        kind: ChartKind::Line,
        title: LINE_TITLE.to_string(),
        encoding: sales_over_time(),
        data: ChartData::Series(to_points(sorted.into_iter())),
    }
}

/// Sales summed per region. The records are already narrowed to a single
/// region by the filter, so in practice this is one slice.
pub fn pie_chart(records: &[&SalesRecord]) -> ChartSpec {
    let mut totals: IndexMap<&str, f64> = IndexMap::new();
    for record in records {
        *totals.entry(record.region.as_str()).or_insert(0.0) += record.sales;
    }

    let slices = totals
        .into_iter()
        .map(|(label, value)| PieSlice {
            label: label.to_string(),
            value,
        })
        .collect();

    ChartSpec {
        kind: ChartKind::Pie,
        title: PIE_TITLE.to_string(),
        encoding: Encoding::Category {
            names: "Region".to_string(),
            values: "Sales".to_string(),
        },
        data: ChartData::Slices(slices),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn series(spec: &ChartSpec) -> Vec<(NaiveDate, f64)> {
        match &spec.data {
            ChartData::Series(points) => points.iter().map(|p| (p.x, p.y)).collect(),
            ChartData::Slices(_) => panic!("expected series data"),
        }
    }

    #[test]
    fn test_scenario_projection() {
        let records = vec![
            SalesRecord::new(ymd(2023, 1, 1), "North-West Region", "Ream of Paper", 100.0),
            SalesRecord::new(ymd(2023, 1, 2), "North-West Region", "Ream of Paper", 150.0),
        ];
        let refs: Vec<&SalesRecord> = records.iter().collect();
        let charts = project(&refs);

        let expected = vec![(ymd(2023, 1, 1), 100.0), (ymd(2023, 1, 2), 150.0)];
        assert_eq!(series(&charts.bar), expected);
        assert_eq!(series(&charts.line), expected);
        assert_eq!(
            charts.pie.data,
            ChartData::Slices(vec![PieSlice {
                label: "North-West Region".to_string(),
                value: 250.0,
            }])
        );
    }

    #[test]
    fn test_empty_input_gives_empty_charts() {
        let charts = project(&[]);
        assert!(charts.bar.is_empty());
        assert!(charts.line.is_empty());
        assert!(charts.pie.is_empty());
        assert_eq!(charts.pie.kind, ChartKind::Pie);
    }

    #[test]
    fn test_bar_keeps_duplicates_and_order() {
        let records = vec![
            SalesRecord::new(ymd(2023, 1, 3), "East", "Pen", 3.0),
            SalesRecord::new(ymd(2023, 1, 1), "East", "Pen", 1.0),
            SalesRecord::new(ymd(2023, 1, 1), "East", "Pen", 2.0),
        ];
        let refs: Vec<&SalesRecord> = records.iter().collect();

        let bar = bar_chart(&refs);
        assert_eq!(
            series(&bar),
            vec![(ymd(2023, 1, 3), 3.0), (ymd(2023, 1, 1), 1.0), (ymd(2023, 1, 1), 2.0)]
        );
    }

    #[test]
    fn test_line_is_sorted_by_date() {
        let records = vec![
            SalesRecord::new(ymd(2023, 1, 3), "East", "Pen", 3.0),
            SalesRecord::new(ymd(2023, 1, 1), "East", "Pen", 1.0),
            SalesRecord::new(ymd(2023, 1, 1), "East", "Pen", 2.0),
        ];
        let refs: Vec<&SalesRecord> = records.iter().collect();

        let line = line_chart(&refs);
        assert_eq!(
            series(&line),
            vec![(ymd(2023, 1, 1), 1.0), (ymd(2023, 1, 1), 2.0), (ymd(2023, 1, 3), 3.0)]
        );
    }

    #[test]
    fn test_pie_groups_by_region_in_first_seen_order() {
        let records = vec![
            SalesRecord::new(ymd(2023, 1, 1), "West", "Pen", 5.0),
            SalesRecord::new(ymd(2023, 1, 1), "East", "Pen", 1.0),
            SalesRecord::new(ymd(2023, 1, 2), "West", "Pen", 5.0),
        ];
        let refs: Vec<&SalesRecord> = records.iter().collect();

        let pie = pie_chart(&refs);
        assert_eq!(pie.point_count(), 2);
        match pie.data {
            ChartData::Slices(slices) => {
                assert_eq!(slices[0].label, "West");
                assert_eq!(slices[0].value, 10.0);
                assert_eq!(slices[1].label, "East");
            }
            ChartData::Series(_) => panic!("expected slices"),
        }
    }

    #[test]
    fn test_spec_serialization_shape() {
        let records = vec![SalesRecord::new(ymd(2023, 1, 1), "East", "Pen", 1.5)];
        let refs: Vec<&SalesRecord> = records.iter().collect();

        let json = serde_json::to_value(bar_chart(&refs)).unwrap();
        assert_eq!(json["kind"], "bar");
        assert_eq!(json["title"], BAR_TITLE);
        assert_eq!(json["encoding"]["type"], "cartesian");
        assert_eq!(json["encoding"]["x"], "Date");
        assert_eq!(json["data"]["type"], "series");
        assert_eq!(json["data"]["values"][0]["x"], "2023-01-01");
        assert_eq!(json["data"]["values"][0]["y"], 1.5);
    }
}
