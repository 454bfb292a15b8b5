use chrono::{DateTime, FixedOffset, NaiveDate};

/// Today's date on the user's clock
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Short date for list rows, e.g. "Mar 4"
pub fn format_short_date(datetime: &DateTime<FixedOffset>) -> String {
    datetime.format("%b %-d").to_string()
}
