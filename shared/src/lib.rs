use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, NaiveDateTime, Offset, TimeZone, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Currency symbol used for every rendered amount
pub const CURRENCY_SYMBOL: &str = "€";

/// A single expense as stored by the remote service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseRecord {
    /// Service-assigned identifier, unique per user
    pub id: i64,
    /// Free-text name extracted from the user's input
    pub name: String,
    /// Raw category name as reported by the service
    pub category: String,
    /// Creation timestamp (service writes RFC 3339 in UTC)
    #[serde(deserialize_with = "deserialize_expense_datetime")]
    pub datetime: DateTime<FixedOffset>,
    /// Non-negative amount in the account currency
    pub amount: f64,
}

impl ExpenseRecord {
    /// Calendar (year, month) of the timestamp in its own stored offset
    pub fn year_month(&self) -> (i32, u32) {
        let date = self.datetime.date_naive();
        (date.year(), date.month())
    }

    /// Enumerated category used for icons, degrading to `Other`
    pub fn category_kind(&self) -> Category {
        Category::from_name(&self.category)
    }
}

/// Fixed set of categories the UI knows icons for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Food,
    Transport,
    Shopping,
    Entertainment,
    Bills,
    Health,
    Travel,
    Other,
}

impl Category {
    pub const ALL: [Category; 8] = [
        Category::Food,
        Category::Transport,
        Category::Shopping,
        Category::Entertainment,
        Category::Bills,
        Category::Health,
        Category::Travel,
        Category::Other,
    ];

    /// Total lookup over arbitrary strings. Anything unrecognized is `Other`.
    pub fn from_name(name: &str) -> Self {
        let name = name.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|category| category.name().eq_ignore_ascii_case(name))
            .unwrap_or(Category::Other)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Category::Food => "Food",
            Category::Transport => "Transport",
            Category::Shopping => "Shopping",
            Category::Entertainment => "Entertainment",
            Category::Bills => "Bills",
            Category::Health => "Health",
            Category::Travel => "Travel",
            Category::Other => "Other",
        }
    }

    /// Font Awesome icon class
    pub fn icon(&self) -> &'static str {
        match self {
            Category::Food => "fa-cutlery",
            Category::Transport => "fa-bus",
            Category::Shopping => "fa-shopping-cart",
            Category::Entertainment => "fa-film",
            Category::Bills => "fa-bolt",
            Category::Health => "fa-heartbeat",
            Category::Travel => "fa-plane",
            Category::Other => "fa-tag",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Per-category sum for one month, aggregated by the service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryTotal {
    pub category: String,
    pub total: f64,
}

/// Request for turning free text into expenses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddExpensesRequest {
    #[serde(rename = "userInput")]
    pub user_input: String,
}

/// Response after submitting free text.
///
/// The service answers `{"error": ...}` with a 4xx/5xx status when it
/// could not process the text, and `{"status": "success",
/// "expenses_added": n}` otherwise.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AddExpensesResponse {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub expenses_added: Option<u32>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub details: Option<String>,
}

/// Response after deleting an expense; absence of `error` means success
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeleteExpenseResponse {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Response after ending the session
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LogoutResponse {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Format an amount with the fixed currency symbol and two decimals
pub fn format_amount(amount: f64) -> String {
    format!("{}{:.2}", CURRENCY_SYMBOL, amount)
}

/// English month name for 1-12
pub fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        12 => "December",
        _ => "January",
    }
}

/// Parse the timestamp shapes the service has been seen to produce:
/// RFC 3339, naive ISO 8601 (read as UTC), or a bare date.
pub fn parse_expense_datetime(raw: &str) -> Result<DateTime<FixedOffset>, String> {
    let raw = raw.trim();
    if let Ok(datetime) = DateTime::parse_from_rfc3339(raw) {
        return Ok(datetime);
    }

    let utc = Utc.fix();
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Ok(utc.from_utc_datetime(&naive));
        }
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| utc.from_utc_datetime(&naive))
        .ok_or_else(|| format!("Unrecognized expense timestamp: {}", raw))
}

fn deserialize_expense_datetime<'de, D>(deserializer: D) -> Result<DateTime<FixedOffset>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_expense_datetime(&raw).map_err(serde::de::Error::custom)
}
