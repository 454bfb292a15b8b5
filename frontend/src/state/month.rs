use chrono::{Datelike, NaiveDate};
use shared::{month_name, ExpenseRecord};
use std::fmt;

/// A calendar month selected by one of the views.
///
/// Ordering follows the calendar, so `min` against the current month is
/// the forward clamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthCursor {
    year: i32,
    month: u32,
}

impl MonthCursor {
    /// `month` is 1-12
    pub fn new(year: i32, month: u32) -> Option<Self> {
        (1..=12).contains(&month).then_some(Self { year, month })
    }

    /// The month a date falls in
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// Move by whole months in either direction, without clamping
    pub fn offset(&self, delta: i32) -> Self {
        let index = i64::from(self.year) * 12 + i64::from(self.month) - 1 + i64::from(delta);
        Self {
            year: index.div_euclid(12) as i32,
            month: index.rem_euclid(12) as u32 + 1,
        }
    }

    /// Move by `delta` months but never past the month containing `today`
    pub fn shifted(&self, delta: i32, today: NaiveDate) -> Self {
        self.offset(delta).min(Self::containing(today))
    }

    pub fn is_current(&self, today: NaiveDate) -> bool {
        *self >= Self::containing(today)
    }

    /// `YYYY-MM`
    pub fn key(&self) -> String {
        format!("{}-{:02}", self.year, self.month)
    }

    /// Zero-padded month number as the service expects it
    pub fn padded_month(&self) -> String {
        format!("{:02}", self.month)
    }

    /// e.g. "March 2025"
    pub fn label(&self) -> String {
        format!("{} {}", month_name(self.month), self.year)
    }

    /// Whether the record's own calendar month is this one
    pub fn contains(&self, record: &ExpenseRecord) -> bool {
        record.year_month() == (self.year, self.month)
    }
}

impl fmt::Display for MonthCursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn cursor(y: i32, m: u32) -> MonthCursor {
        MonthCursor::new(y, m).unwrap()
    }

    #[test]
    fn test_new_rejects_invalid_month() {
        assert!(MonthCursor::new(2024, 0).is_none());
        assert!(MonthCursor::new(2024, 13).is_none());
        assert!(MonthCursor::new(2024, 12).is_some());
    }

    #[test]
    fn test_containing_normalizes_day() {
        assert_eq!(MonthCursor::containing(date(2024, 2, 29)), cursor(2024, 2));
    }

    #[test]
    fn test_offset_crosses_year_boundaries() {
        assert_eq!(cursor(2024, 1).offset(-1), cursor(2023, 12));
        assert_eq!(cursor(2023, 12).offset(1), cursor(2024, 1));
        assert_eq!(cursor(2024, 3).offset(-27), cursor(2021, 12));
        assert_eq!(cursor(2024, 3).offset(0), cursor(2024, 3));
    }

    #[test]
    fn test_shifted_clamps_to_current_month() {
        let today = date(2025, 3, 18);
        assert_eq!(cursor(2025, 3).shifted(1, today), cursor(2025, 3));
        assert_eq!(cursor(2025, 1).shifted(5, today), cursor(2025, 3));
        assert_eq!(cursor(2025, 1).shifted(1, today), cursor(2025, 2));
    }

    #[test]
    fn test_shifted_has_no_lower_bound() {
        let today = date(2025, 3, 18);
        assert_eq!(cursor(2025, 3).shifted(-120, today), cursor(2015, 3));
    }

    #[test]
    fn test_positive_deltas_never_exceed_today() {
        let today = date(2025, 3, 18);
        let mut current = cursor(2019, 7);
        for delta in [1, 3, 12, 40, 1, 1, 7] {
            current = current.shifted(delta, today);
            assert!(current <= MonthCursor::containing(today));
        }
        assert_eq!(current, cursor(2024, 12));

        current = current.shifted(5, today);
        assert!(current.is_current(today));
    }

    #[test]
    fn test_formatting() {
        let march = cursor(2025, 3);
        assert_eq!(march.key(), "2025-03");
        assert_eq!(march.padded_month(), "03");
        assert_eq!(march.label(), "March 2025");
        assert_eq!(march.to_string(), "2025-03");
    }
}
