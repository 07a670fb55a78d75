//! Common types and data structures

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Page selected from the sidebar navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Page {
    #[default]
    Overview,
    Sales,
    DataEntry,
    Records,
}

impl Page {
    pub const ALL: [Page; 4] = [Page::Overview, Page::Sales, Page::DataEntry, Page::Records];

    pub fn label(self) -> &'static str {
        match self {
            Page::Overview => "Overview",
            Page::Sales => "Sales",
            Page::DataEntry => "Data Entry",
            Page::Records => "Records",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Page::Overview => egui_phosphor::regular::GAUGE,
            Page::Sales => egui_phosphor::regular::CHART_LINE_UP,
            Page::DataEntry => egui_phosphor::regular::NOTE_PENCIL,
            Page::Records => egui_phosphor::regular::TABLE,
        }
    }
}

/// Color class of a KPI card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccentClass {
    Blue,
    Green,
    Orange,
    Red,
    Purple,
}

/// Literal KPI card content
#[derive(Debug, Clone, PartialEq)]
pub struct KpiCard {
    pub title: &'static str,
    pub value: &'static str,
    pub delta: Option<&'static str>,
    pub accent: AccentClass,
    pub icon: Option<&'static str>,
    pub progress: Option<f64>,
}

impl KpiCard {
    pub const fn new(title: &'static str, value: &'static str, accent: AccentClass) -> Self {
        Self {
            title,
            value,
            delta: None,
            accent,
            icon: None,
            progress: None,
        }
    }

    pub const fn delta(mut self, delta: &'static str) -> Self {
        self.delta = Some(delta);
        self
    }

    pub const fn icon(mut self, icon: &'static str) -> Self {
        self.icon = Some(icon);
        self
    }

    pub const fn progress(mut self, progress: f64) -> Self {
        self.progress = Some(progress);
        self
    }
}

/// Label/value pair for bar and pie charts
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryValue {
    pub label: String,
    pub value: f64,
}

impl CategoryValue {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// Order status in the records table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderStatus {
    Delivered,
    Shipped,
    Pending,
    Cancelled,
}

impl OrderStatus {
    pub fn label(self) -> &'static str {
        match self {
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Shipped => "Shipped",
            OrderStatus::Pending => "Pending",
            OrderStatus::Cancelled => "Cancelled",
        }
    }
}

/// Hard-coded records table row
#[derive(Debug, Clone, PartialEq)]
pub struct RecordRow {
    pub order_id: &'static str,
    pub customer: &'static str,
    pub product: &'static str,
    pub amount: f64,
    pub status: OrderStatus,
    pub date: &'static str,
}

/// Data entry form state; also the submitted value
#[derive(Debug, Clone, PartialEq)]
pub struct EntryForm {
    pub name: String,
    pub category: &'static str,
    pub quantity: u32,
    pub date: NaiveDate,
    pub notes: String,
}

impl EntryForm {
    pub const CATEGORIES: [&'static str; 4] = ["Electronics", "Clothing", "Groceries", "Other"];

    pub fn new(today: NaiveDate) -> Self {
        Self {
            name: String::new(),
            category: Self::CATEGORIES[0],
            quantity: 0,
            date: today,
            notes: String::new(),
        }
    }

    /// One-line confirmation shown after submit
    pub fn summary(&self) -> String {
        let name = self.name.trim();
        let name = if name.is_empty() { "Unnamed entry" } else { name };
        format!(
            "Saved '{}' ({}, qty {}) for {}",
            name,
            self.category,
            self.quantity,
            self.date.format("%Y-%m-%d")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_summary_formats_fields() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        let mut form = EntryForm::new(date);
        form.name = "  Laptop ".into();
        form.quantity = 3;
        assert_eq!(form.summary(), "Saved 'Laptop' (Electronics, qty 3) for 2024-03-09");
    }

    #[test]
    fn entry_summary_names_blank_entries() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let form = EntryForm::new(date);
        assert!(form.summary().starts_with("Saved 'Unnamed entry'"));
    }

    #[test]
    fn page_round_trips_through_json() {
        let json = serde_json::to_string(&Page::DataEntry).unwrap();
        assert_eq!(serde_json::from_str::<Page>(&json).unwrap(), Page::DataEntry);
    }
}
