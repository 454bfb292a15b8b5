//! # Monthly View
//!
//! Two independent month cursors: one for the expense list, one for the
//! category statistics. The list is derived locally from the expense store;
//! the statistics are fetched from the service per month.
//!
//! Stats fetches carry a [`StatsTicket`]. A response is applied only while
//! its ticket is still the latest one issued for the stats cursor, so rapid
//! navigation shows the last month the user asked for, not whichever
//! response arrived last.

use chrono::NaiveDate;
use shared::{format_amount, CategoryTotal, ExpenseRecord};

use super::breakdown::CategoryBreakdown;
use super::month::MonthCursor;
use crate::services::date_utils::format_short_date;
use crate::services::ApiError;

/// Records whose own calendar month is `month`, in source order
pub fn filter_by_month(records: &[ExpenseRecord], month: MonthCursor) -> Vec<&ExpenseRecord> {
    records.iter().filter(|record| month.contains(record)).collect()
}

/// Newest first. The sort is stable, so equal timestamps keep source order.
pub fn sort_newest_first(records: &mut [&ExpenseRecord]) {
    records.sort_by(|a, b| b.datetime.cmp(&a.datetime));
}

pub fn no_expenses_message(month: MonthCursor) -> String {
    format!("No expenses yet for {}", month.label())
}

/// One rendered row of the expense list
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseLine {
    pub id: i64,
    pub icon: &'static str,
    pub name: String,
    pub category: String,
    pub amount: String,
    pub date: String,
}

impl From<&ExpenseRecord> for ExpenseLine {
    fn from(record: &ExpenseRecord) -> Self {
        Self {
            id: record.id,
            icon: record.category_kind().icon(),
            name: record.name.clone(),
            category: record.category.clone(),
            amount: format_amount(record.amount),
            date: format_short_date(&record.datetime),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ExpenseListView {
    /// Explicit placeholder, shown instead of an empty list
    Empty { message: String },
    Items(Vec<ExpenseLine>),
}

/// Fetch lifecycle of the stats cursor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchPhase {
    Idle,
    Fetching,
    Rendered,
    /// Last fetch failed; the previous breakdown stays visible
    Failed,
}

/// Identifies one issued stats fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatsTicket {
    pub month: MonthCursor,
    generation: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatsApply {
    Applied,
    /// The cursor moved on before this response arrived
    Discarded,
}

#[derive(Debug, Clone, PartialEq)]
pub enum StatsContent {
    /// Nothing fetched yet
    Pending,
    Empty { message: String },
    Chart(CategoryBreakdown),
}

#[derive(Debug, Clone, PartialEq)]
pub struct StatsView {
    pub phase: FetchPhase,
    pub content: StatsContent,
}

#[derive(Debug, Clone)]
struct AppliedStats {
    month: MonthCursor,
    totals: Vec<CategoryTotal>,
}

#[derive(Debug, Clone)]
pub struct MonthlyView {
    list_month: MonthCursor,
    stats_month: MonthCursor,
    stats_generation: u64,
    stats_phase: FetchPhase,
    applied: Option<AppliedStats>,
}

impl MonthlyView {
    /// Both cursors start at the month containing `today`
    pub fn new(today: NaiveDate) -> Self {
        let current = MonthCursor::containing(today);
        Self {
            list_month: current,
            stats_month: current,
            stats_generation: 0,
            stats_phase: FetchPhase::Idle,
            applied: None,
        }
    }

    pub fn list_month(&self) -> MonthCursor {
        self.list_month
    }

    pub fn stats_month(&self) -> MonthCursor {
        self.stats_month
    }

    pub fn stats_phase(&self) -> FetchPhase {
        self.stats_phase
    }

    pub fn change_month(&mut self, delta: i32, today: NaiveDate) -> MonthCursor {
        self.list_month = self.list_month.shifted(delta, today);
        log::info!("Expense list month: {}", self.list_month);
        self.list_month
    }

    /// Move the stats cursor and issue a ticket for the fetch it requires
    pub fn change_stats_month(&mut self, delta: i32, today: NaiveDate) -> StatsTicket {
        self.stats_month = self.stats_month.shifted(delta, today);
        log::info!("Statistics month: {}", self.stats_month);
        self.begin_stats_fetch()
    }

    pub fn begin_stats_fetch(&mut self) -> StatsTicket {
        self.stats_generation += 1;
        self.stats_phase = FetchPhase::Fetching;
        StatsTicket {
            month: self.stats_month,
            generation: self.stats_generation,
        }
    }

    fn is_latest(&self, ticket: &StatsTicket) -> bool {
        ticket.generation == self.stats_generation && ticket.month == self.stats_month
    }

    /// Apply a stats response if `ticket` is still the latest request.
    /// A failure for the latest request marks the view `Failed` and keeps
    /// what was rendered before.
    pub fn complete_stats_fetch(
        &mut self,
        ticket: StatsTicket,
        result: Result<Vec<CategoryTotal>, ApiError>,
    ) -> Result<StatsApply, ApiError> {
        if !self.is_latest(&ticket) {
            log::debug!("Discarding statistics for {} (cursor at {})", ticket.month, self.stats_month);
            return match result {
                Ok(_) => Ok(StatsApply::Discarded),
                Err(e) => Err(e),
            };
        }

        match result {
            Ok(totals) => {
                self.applied = Some(AppliedStats {
                    month: ticket.month,
                    totals,
                });
                self.stats_phase = FetchPhase::Rendered;
                Ok(StatsApply::Applied)
            }
            Err(e) => {
                self.stats_phase = FetchPhase::Failed;
                Err(e)
            }
        }
    }

    /// Totals currently rendered, with the month they belong to
    pub fn applied_totals(&self) -> Option<(MonthCursor, &[CategoryTotal])> {
        self.applied
            .as_ref()
            .map(|applied| (applied.month, applied.totals.as_slice()))
    }

    pub fn expense_list(&self, records: &[ExpenseRecord]) -> ExpenseListView {
        let mut matching = filter_by_month(records, self.list_month);
        if matching.is_empty() {
            return ExpenseListView::Empty {
                message: no_expenses_message(self.list_month),
            };
        }
        sort_newest_first(&mut matching);
        ExpenseListView::Items(matching.into_iter().map(ExpenseLine::from).collect())
    }

    pub fn stats_view(&self) -> StatsView {
        let content = match &self.applied {
            None => StatsContent::Pending,
            Some(applied) => match CategoryBreakdown::from_totals(&applied.totals) {
                Some(breakdown) => StatsContent::Chart(breakdown),
                None => StatsContent::Empty {
                    message: no_expenses_message(applied.month),
                },
            },
        };
        StatsView {
            phase: self.stats_phase,
            content,
        }
    }

    /// Back to the current month with nothing rendered; outstanding stats
    /// tickets become stale.
    pub fn reset(&mut self, today: NaiveDate) {
        let generation = self.stats_generation + 1;
        *self = Self::new(today);
        self.stats_generation = generation;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::test_support::{record, total};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn month(y: i32, m: u32) -> MonthCursor {
        MonthCursor::new(y, m).unwrap()
    }

    fn sample() -> Vec<ExpenseRecord> {
        vec![
            record(1, "Groceries", "Food", "2024-01-15T10:00:00+00:00", 42.0),
            record(2, "Train", "Transport", "2024-02-01T08:00:00+00:00", 12.5),
            record(3, "Cinema", "Entertainment", "2024-02-20T20:00:00+00:00", 9.0),
            record(4, "Cake", "Food", "2024-02-01T08:00:00+00:00", 4.0),
            record(5, "Late rent", "Bills", "2024-01-31T23:30:00+02:00", 450.0),
        ]
    }

    #[test]
    fn test_filter_matches_calendar_month_exactly() {
        let records = vec![
            record(1, "Jan", "Food", "2024-01-15T10:00:00+00:00", 1.0),
            record(2, "Feb", "Food", "2024-02-01T10:00:00+00:00", 1.0),
        ];
        let feb: Vec<i64> = filter_by_month(&records, month(2024, 2)).iter().map(|r| r.id).collect();
        let jan: Vec<i64> = filter_by_month(&records, month(2024, 1)).iter().map(|r| r.id).collect();
        assert_eq!(feb, vec![2]);
        assert_eq!(jan, vec![1]);
    }

    #[test]
    fn test_filter_uses_stored_offset_date() {
        let records = sample();
        let jan: Vec<i64> = filter_by_month(&records, month(2024, 1)).iter().map(|r| r.id).collect();
        assert_eq!(jan, vec![1, 5]);
    }

    #[test]
    fn test_filter_is_idempotent() {
        let records = sample();
        let once: Vec<ExpenseRecord> = filter_by_month(&records, month(2024, 2))
            .into_iter()
            .cloned()
            .collect();
        let twice: Vec<ExpenseRecord> = filter_by_month(&once, month(2024, 2))
            .into_iter()
            .cloned()
            .collect();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_filter_ignores_insertion_order() {
        let mut records = sample();
        records.reverse();
        let mut ids: Vec<i64> = filter_by_month(&records, month(2024, 2)).iter().map(|r| r.id).collect();
        ids.sort();
        assert_eq!(ids, vec![2, 3, 4]);
    }

    #[test]
    fn test_sort_is_descending_and_stable() {
        let records = sample();
        let mut feb = filter_by_month(&records, month(2024, 2));
        sort_newest_first(&mut feb);
        let ids: Vec<i64> = feb.iter().map(|r| r.id).collect();
        // 2 and 4 share a timestamp and keep their source order
        assert_eq!(ids, vec![3, 2, 4]);
    }

    #[test]
    fn test_expense_list_renders_lines() {
        let mut view = MonthlyView::new(date(2024, 2, 25));
        let records = sample();
        match view.expense_list(&records) {
            ExpenseListView::Items(lines) => {
                assert_eq!(lines.len(), 3);
                assert_eq!(
                    lines[0],
                    ExpenseLine {
                        id: 3,
                        icon: "fa-film",
                        name: "Cinema".to_string(),
                        category: "Entertainment".to_string(),
                        amount: "€9.00".to_string(),
                        date: "Feb 20".to_string(),
                    }
                );
            }
            other => panic!("expected items, got {:?}", other),
        }

        view.change_month(-2, date(2024, 2, 25));
        assert_eq!(
            view.expense_list(&records),
            ExpenseListView::Empty {
                message: "No expenses yet for December 2023".to_string()
            }
        );
    }

    #[test]
    fn test_unknown_category_line_uses_default_icon() {
        let view = MonthlyView::new(date(2024, 3, 1));
        let records = vec![record(9, "Course", "Education", "2024-03-01T10:00:00+00:00", 80.0)];
        let ExpenseListView::Items(lines) = view.expense_list(&records) else {
            panic!("expected items");
        };
        assert_eq!(lines[0].icon, "fa-tag");
        assert_eq!(lines[0].category, "Education");
    }

    #[test]
    fn test_cursors_are_independent_and_clamped() {
        let today = date(2024, 2, 10);
        let mut view = MonthlyView::new(today);

        view.change_month(-3, today);
        assert_eq!(view.list_month(), month(2023, 11));
        assert_eq!(view.stats_month(), month(2024, 2));

        view.change_stats_month(5, today);
        assert_eq!(view.stats_month(), month(2024, 2));
        view.change_month(1, today);
        assert_eq!(view.list_month(), month(2023, 12));
    }

    #[test]
    fn test_stats_state_machine() {
        let today = date(2024, 2, 10);
        let mut view = MonthlyView::new(today);
        assert_eq!(view.stats_phase(), FetchPhase::Idle);
        assert_eq!(view.stats_view().content, StatsContent::Pending);

        let ticket = view.begin_stats_fetch();
        assert_eq!(view.stats_phase(), FetchPhase::Fetching);

        let applied = view.complete_stats_fetch(ticket, Ok(vec![total("Food", 60.0), total("Transport", 40.0)]));
        assert_eq!(applied, Ok(StatsApply::Applied));
        assert_eq!(view.stats_phase(), FetchPhase::Rendered);
        assert!(matches!(view.stats_view().content, StatsContent::Chart(_)));

        let ticket = view.begin_stats_fetch();
        let failed = view.complete_stats_fetch(ticket, Err(ApiError::Network("offline".to_string())));
        assert!(failed.is_err());
        let stats = view.stats_view();
        assert_eq!(stats.phase, FetchPhase::Failed);
        assert!(matches!(stats.content, StatsContent::Chart(_)));
    }

    #[test]
    fn test_out_of_order_stats_responses_keep_last_intent() {
        let today = date(2024, 3, 10);
        let mut view = MonthlyView::new(today);

        let february = view.change_stats_month(-1, today);
        let january = view.change_stats_month(-1, today);

        assert_eq!(
            view.complete_stats_fetch(january, Ok(vec![total("Food", 10.0)])),
            Ok(StatsApply::Applied)
        );
        assert_eq!(
            view.complete_stats_fetch(february, Ok(vec![total("Bills", 99.0)])),
            Ok(StatsApply::Discarded)
        );

        let (applied_month, totals) = view.applied_totals().unwrap();
        assert_eq!(applied_month, month(2024, 1));
        assert_eq!(totals, &[total("Food", 10.0)]);
    }

    #[test]
    fn test_revisiting_a_month_still_discards_older_ticket() {
        let today = date(2024, 3, 10);
        let mut view = MonthlyView::new(today);

        let first_feb = view.change_stats_month(-1, today);
        view.change_stats_month(-1, today);
        let second_feb = view.change_stats_month(1, today);
        assert_eq!(first_feb.month, second_feb.month);

        assert_eq!(
            view.complete_stats_fetch(first_feb, Ok(vec![])),
            Ok(StatsApply::Discarded)
        );
        assert_eq!(view.stats_phase(), FetchPhase::Fetching);
        assert_eq!(
            view.complete_stats_fetch(second_feb, Ok(vec![])),
            Ok(StatsApply::Applied)
        );
    }

    #[test]
    fn test_zero_totals_render_placeholder() {
        let today = date(2024, 3, 10);
        let mut view = MonthlyView::new(today);
        let ticket = view.begin_stats_fetch();
        view.complete_stats_fetch(ticket, Ok(vec![total("Food", 0.0)])).unwrap();
        assert_eq!(
            view.stats_view().content,
            StatsContent::Empty {
                message: "No expenses yet for March 2024".to_string()
            }
        );
    }

    #[test]
    fn test_reset_invalidates_pending_ticket() {
        let today = date(2024, 3, 10);
        let mut view = MonthlyView::new(today);
        view.change_month(-4, today);
        let ticket = view.change_stats_month(0, today);

        view.reset(today);
        assert_eq!(view.list_month(), month(2024, 3));
        assert_eq!(view.stats_phase(), FetchPhase::Idle);
        assert_eq!(
            view.complete_stats_fetch(ticket, Ok(vec![total("Food", 1.0)])),
            Ok(StatsApply::Discarded)
        );
        assert_eq!(view.stats_view().content, StatsContent::Pending);
    }
}
