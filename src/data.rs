//! Placeholder data: literal KPI content and seedable synthetic datasets

use crate::error::{DashboardError, Result};
use crate::types::{AccentClass, CategoryValue, KpiCard, OrderStatus, RecordRow};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Numeric table handed to the area chart. Only the shape is contractual.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<f64>>,
}

impl Dataset {
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Values of one column, top to bottom.
    pub fn column(&self, idx: usize) -> impl Iterator<Item = f64> + '_ {
        self.rows.iter().filter_map(move |row| row.get(idx).copied())
    }

    /// Check the declared shape before the table reaches a chart.
    pub fn ensure_shape(&self, chart: &str, rows: usize, cols: usize) -> Result<()> {
        let ragged = self.rows.iter().any(|r| r.len() != self.columns.len());
        if self.row_count() != rows || self.column_count() != cols || ragged {
            return Err(DashboardError::ChartShape {
                chart: chart.to_string(),
                expected_rows: rows,
                expected_cols: cols,
                rows: self.row_count(),
                cols: self
                    .rows
                    .iter()
                    .map(Vec::len)
                    .find(|&n| n != self.columns.len())
                    .unwrap_or(self.column_count()),
            });
        }
        Ok(())
    }
}

/// Source of chart data. Implementations decide the values; callers rely on shape only.
pub trait DataSource {
    /// `rows` x `columns.len()` numeric table.
    fn trend(&mut self, rows: usize, columns: &[&str]) -> Dataset;

    /// One positive value per category.
    fn split(&mut self, categories: &[&str]) -> Vec<CategoryValue>;
}

/// Random placeholder data, reproducible when seeded.
pub struct SyntheticSource {
    rng: StdRng,
}

impl SyntheticSource {
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }
}

impl DataSource for SyntheticSource {
    fn trend(&mut self, rows: usize, columns: &[&str]) -> Dataset {
        // Random walk per column so the area chart reads as a trend
        let mut levels: Vec<f64> = columns.iter().map(|_| self.rng.gen_range(20.0..60.0)).collect();
        let rows = (0..rows)
            .map(|_| {
                levels
                    .iter_mut()
                    .map(|level| {
                        *level = (*level + self.rng.gen_range(-6.0..6.5)).max(0.0);
                        *level
                    })
                    .collect()
            })
            .collect();
        Dataset {
            columns: columns.iter().map(|c| c.to_string()).collect(),
            rows,
        }
    }

    fn split(&mut self, categories: &[&str]) -> Vec<CategoryValue> {
        categories
            .iter()
            .map(|c| CategoryValue::new(*c, self.rng.gen_range(5..100) as f64))
            .collect()
    }
}

// =============================================================================
// LITERAL CONTENT
// =============================================================================

pub const GROWTH_COLUMNS: [&str; 2] = ["Views", "Subscribers"];
pub const GROWTH_ROWS: usize = 20;
pub const SALES_COLUMNS: [&str; 2] = ["Revenue", "Orders"];
pub const CHANNELS: [&str; 5] = ["Online", "Retail", "Wholesale", "Partners", "Direct"];

pub fn overview_cards() -> [KpiCard; 4] {
    [
        KpiCard::new("YouTube Subs", "14.2K", AccentClass::Red)
            .delta("🔥 +120 Today")
            .icon(egui_phosphor::regular::YOUTUBE_LOGO),
        KpiCard::new("Instagram Reach", "45.2K", AccentClass::Purple)
            .delta("🚀 +15%")
            .icon(egui_phosphor::regular::INSTAGRAM_LOGO),
        KpiCard::new("Facebook Engmt", "8,900", AccentClass::Blue)
            .delta("-2% (Low)")
            .icon(egui_phosphor::regular::FACEBOOK_LOGO),
        KpiCard::new("Total Revenue", "$1,240", AccentClass::Green)
            .delta("💵 +$50")
            .icon(egui_phosphor::regular::CURRENCY_DOLLAR),
    ]
}

pub fn sales_cards() -> [KpiCard; 4] {
    [
        KpiCard::new("Monthly Revenue", "$48,250", AccentClass::Blue)
            .delta("+12.5%")
            .icon(egui_phosphor::regular::CURRENCY_DOLLAR)
            .progress(82.0),
        KpiCard::new("New Customers", "1,284", AccentClass::Green)
            .delta("+8.1%")
            .icon(egui_phosphor::regular::USERS)
            .progress(64.0),
        KpiCard::new("Orders Fulfilled", "3,912", AccentClass::Orange)
            .delta("+2.4%")
            .icon(egui_phosphor::regular::PACKAGE)
            .progress(95.0),
        KpiCard::new("Refund Rate", "1.8%", AccentClass::Red)
            .delta("-0.3%")
            .icon(egui_phosphor::regular::ARROW_COUNTER_CLOCKWISE)
            .progress(18.0),
    ]
}

pub fn audience_split() -> Vec<CategoryValue> {
    vec![
        CategoryValue::new("Male", 60.0),
        CategoryValue::new("Female", 35.0),
        CategoryValue::new("Other", 5.0),
    ]
}

pub const RECORDS: [RecordRow; 8] = [
    RecordRow { order_id: "#1001", customer: "Aarav Sharma", product: "Wireless Earbuds", amount: 59.99, status: OrderStatus::Delivered, date: "2024-05-02" },
    RecordRow { order_id: "#1002", customer: "Priya Patel", product: "Smart Watch", amount: 199.00, status: OrderStatus::Shipped, date: "2024-05-03" },
    RecordRow { order_id: "#1003", customer: "Rohan Mehta", product: "Laptop Stand", amount: 34.50, status: OrderStatus::Pending, date: "2024-05-03" },
    RecordRow { order_id: "#1004", customer: "Sneha Iyer", product: "Mechanical Keyboard", amount: 129.00, status: OrderStatus::Delivered, date: "2024-05-04" },
    RecordRow { order_id: "#1005", customer: "Vikram Singh", product: "USB-C Hub", amount: 45.00, status: OrderStatus::Cancelled, date: "2024-05-05" },
    RecordRow { order_id: "#1006", customer: "Ananya Gupta", product: "Noise Cancelling Headphones", amount: 249.99, status: OrderStatus::Shipped, date: "2024-05-06" },
    RecordRow { order_id: "#1007", customer: "Kabir Khan", product: "Webcam 1080p", amount: 69.00, status: OrderStatus::Delivered, date: "2024-05-07" },
    RecordRow { order_id: "#1008", customer: "Meera Nair", product: "Portable SSD", amount: 119.00, status: OrderStatus::Pending, date: "2024-05-08" },
];

/// Everything the pages draw from, regenerated once per render pass.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardData {
    pub growth: Dataset,
    pub audience: Vec<CategoryValue>,
    pub sales_trend: Dataset,
    pub channels: Vec<CategoryValue>,
    pub trend_days: usize,
}

impl DashboardData {
    pub fn generate(source: &mut dyn DataSource, trend_days: usize) -> Self {
        Self {
            growth: source.trend(GROWTH_ROWS, &GROWTH_COLUMNS),
            audience: audience_split(),
            sales_trend: source.trend(trend_days, &SALES_COLUMNS),
            channels: source.split(&CHANNELS),
            trend_days,
        }
    }

    /// Nothing to draw. Stands in while a failed pass shows the error panel.
    pub fn empty(trend_days: usize) -> Self {
        let empty = |columns: &[&str]| Dataset {
            columns: columns.iter().map(|c| c.to_string()).collect(),
            rows: Vec::new(),
        };
        Self {
            growth: empty(&GROWTH_COLUMNS),
            audience: Vec::new(),
            sales_trend: empty(&SALES_COLUMNS),
            channels: Vec::new(),
            trend_days,
        }
    }

    /// Shape checks for every chart input.
    pub fn validate(&self) -> Result<()> {
        self.growth
            .ensure_shape("Monthly Growth Trend", GROWTH_ROWS, GROWTH_COLUMNS.len())?;
        let trend_chart = format!("{}-day trend", self.trend_days);
        self.sales_trend
            .ensure_shape(&trend_chart, self.trend_days, SALES_COLUMNS.len())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thirty_day_trend_has_thirty_rows_two_columns() {
        let mut source = SyntheticSource::seeded(7);
        let data = source.trend(30, &SALES_COLUMNS);
        assert_eq!(data.row_count(), 30);
        assert_eq!(data.columns, vec!["Revenue".to_string(), "Orders".to_string()]);
        assert!(data.rows.iter().all(|r| r.len() == 2 && r.iter().all(|v| v.is_finite())));
        assert!(data.ensure_shape("30-day trend", 30, 2).is_ok());
    }

    #[test]
    fn seeded_sources_are_reproducible() {
        let a = SyntheticSource::seeded(42).trend(20, &GROWTH_COLUMNS);
        let b = SyntheticSource::seeded(42).trend(20, &GROWTH_COLUMNS);
        assert_eq!(a, b);
    }

    #[test]
    fn split_has_one_positive_value_per_category() {
        let split = SyntheticSource::seeded(1).split(&CHANNELS);
        assert_eq!(split.len(), CHANNELS.len());
        assert!((4..=7).contains(&split.len()));
        assert!(split.iter().all(|c| c.value > 0.0));
        assert_eq!(split[0].label, "Online");
    }

    #[test]
    fn ensure_shape_reports_mismatch() {
        let data = SyntheticSource::seeded(3).trend(12, &GROWTH_COLUMNS);
        let err = data.ensure_shape("growth", 20, 2).unwrap_err();
        assert_eq!(
            err,
            DashboardError::ChartShape {
                chart: "growth".into(),
                expected_rows: 20,
                expected_cols: 2,
                rows: 12,
                cols: 2,
            }
        );
    }

    #[test]
    fn validate_names_the_trend_by_its_length() {
        let mut source = SyntheticSource::seeded(9);
        let mut data = DashboardData::generate(&mut source, 7);
        assert!(data.validate().is_ok());

        data.sales_trend.rows.truncate(5);
        match data.validate().unwrap_err() {
            DashboardError::ChartShape { chart, expected_rows, rows, .. } => {
                assert_eq!(chart, "7-day trend");
                assert_eq!(expected_rows, 7);
                assert_eq!(rows, 5);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn empty_data_fails_validation() {
        let data = DashboardData::empty(90);
        assert_eq!(data.sales_trend.column_count(), SALES_COLUMNS.len());
        assert!(data.validate().is_err());
    }

    #[test]
    fn ensure_shape_catches_ragged_rows() {
        let mut data = SyntheticSource::seeded(3).trend(5, &GROWTH_COLUMNS);
        data.rows[2].pop();
        assert!(data.ensure_shape("growth", 5, 2).is_err());
    }

    #[test]
    fn generated_dashboard_data_validates() {
        let mut source = SyntheticSource::seeded(9);
        let data = DashboardData::generate(&mut source, 45);
        assert!(data.validate().is_ok());
        assert_eq!(data.sales_trend.row_count(), 45);
        assert_eq!(data.audience.len(), 3);
    }

    #[test]
    fn overview_cards_match_literals() {
        let cards = overview_cards();
        assert_eq!(cards[0].value, "14.2K");
        assert_eq!(cards[2].delta, Some("-2% (Low)"));
        assert!(cards.iter().all(|c| c.progress.is_none()));
    }
}
