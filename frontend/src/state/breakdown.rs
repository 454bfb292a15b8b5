//! Rendering model for a month's category totals: donut segments and
//! progress bars. Totals come from the service; nothing here aggregates
//! except the consistency check at the bottom.

use shared::{format_amount, Category, CategoryTotal, ExpenseRecord};
use std::collections::BTreeMap;

use super::month::MonthCursor;

/// Segments below this share (in percent) are drawn without a label
pub const LABEL_THRESHOLD_PERCENT: f64 = 3.0;

/// Largest per-category difference still treated as agreement
const DRIFT_TOLERANCE: f64 = 0.005;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub fn hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}

/// Shared by chart and bars so a category has the same color in both
pub const PALETTE: [Rgb; 5] = [
    Rgb(0xA1, 0xB5, 0x2D),
    Rgb(0x95, 0x00, 0xF5),
    Rgb(0xCF, 0xF5, 0x00),
    Rgb(0x76, 0x35, 0xA0),
    Rgb(0x6D, 0x75, 0x3B),
];

pub fn palette_color(index: usize) -> Rgb {
    PALETTE[index % PALETTE.len()]
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartSegment {
    pub category: String,
    /// Fraction of the month's total, 0.0-1.0
    pub share: f64,
    pub label: Option<String>,
    pub color: Rgb,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryBar {
    pub icon: &'static str,
    pub category: String,
    pub formatted_total: String,
    /// Rounded independently per row; rows need not sum to 100
    pub percent: u32,
    pub color: Rgb,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryBreakdown {
    pub total_sum: f64,
    pub segments: Vec<ChartSegment>,
    pub bars: Vec<CategoryBar>,
}

impl CategoryBreakdown {
    /// `None` when there is nothing to draw: no rows, or rows summing to zero
    pub fn from_totals(totals: &[CategoryTotal]) -> Option<Self> {
        let total_sum: f64 = totals.iter().map(|row| row.total).sum();
        if totals.is_empty() || total_sum <= 0.0 {
            return None;
        }

        let mut segments = Vec::with_capacity(totals.len());
        let mut bars = Vec::with_capacity(totals.len());
        for (index, row) in totals.iter().enumerate() {
            let share = (row.total / total_sum).clamp(0.0, 1.0);
            let percent = share * 100.0;
            let color = palette_color(index);
            let label = (percent >= LABEL_THRESHOLD_PERCENT).then(|| row.category.clone());

            segments.push(ChartSegment {
                category: row.category.clone(),
                share,
                label,
                color,
            });
            bars.push(CategoryBar {
                icon: Category::from_name(&row.category).icon(),
                category: row.category.clone(),
                formatted_total: format_amount(row.total),
                percent: percent.round() as u32,
                color,
            });
        }

        Some(Self {
            total_sum,
            segments,
            bars,
        })
    }
}

/// Sum the cached records of one month by raw category name
pub fn aggregate_locally(records: &[ExpenseRecord], month: MonthCursor) -> Vec<CategoryTotal> {
    let mut sums: BTreeMap<&str, f64> = BTreeMap::new();
    for record in records.iter().filter(|record| month.contains(record)) {
        *sums.entry(record.category.as_str()).or_insert(0.0) += record.amount;
    }
    sums.into_iter()
        .map(|(category, total)| CategoryTotal {
            category: category.to_string(),
            total,
        })
        .collect()
}

/// A category whose service total disagrees with the local sum
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryDrift {
    pub category: String,
    pub remote: f64,
    pub local: f64,
}

/// Compare service totals with a local re-aggregation of the same month
pub fn reconcile(remote: &[CategoryTotal], local: &[CategoryTotal]) -> Vec<CategoryDrift> {
    let mut merged: BTreeMap<&str, (f64, f64)> = BTreeMap::new();
    for row in remote {
        merged.entry(row.category.as_str()).or_insert((0.0, 0.0)).0 += row.total;
    }
    for row in local {
        merged.entry(row.category.as_str()).or_insert((0.0, 0.0)).1 += row.total;
    }

    merged
        .into_iter()
        .filter(|(_, (remote, local))| (remote - local).abs() > DRIFT_TOLERANCE)
        .map(|(category, (remote, local))| CategoryDrift {
            category: category.to_string(),
            remote,
            local,
        })
        .collect()
}
