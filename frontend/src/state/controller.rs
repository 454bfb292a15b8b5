//! # Finance Controller
//!
//! Owns the expense store, both month cursors and the service handle for
//! one session. Cloning is cheap and every clone drives the same state,
//! which is how the Yew hooks share it across async callbacks. No borrow
//! of the inner state is held across an `.await`.

use chrono::NaiveDate;
use std::cell::RefCell;
use std::rc::Rc;

use super::breakdown::{aggregate_locally, reconcile};
use super::expense_store::{ExpenseStore, RefreshOutcome};
use super::month::MonthCursor;
use super::monthly_view::{
    ExpenseListView, FetchPhase, MonthlyView, StatsApply, StatsTicket, StatsView,
};
use super::submission::SubmitOutcome;
use crate::services::{ApiError, ExpenseService};

#[derive(Clone)]
pub struct FinanceController {
    service: Rc<dyn ExpenseService>,
    store: ExpenseStore,
    view: Rc<RefCell<MonthlyView>>,
}

impl PartialEq for FinanceController {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.view, &other.view)
    }
}

impl FinanceController {
    pub fn new(service: Rc<dyn ExpenseService>, today: NaiveDate) -> Self {
        Self {
            service,
            store: ExpenseStore::new(),
            view: Rc::new(RefCell::new(MonthlyView::new(today))),
        }
    }

    pub fn store(&self) -> &ExpenseStore {
        &self.store
    }

    pub fn list_month(&self) -> MonthCursor {
        self.view.borrow().list_month()
    }

    pub fn stats_month(&self) -> MonthCursor {
        self.view.borrow().stats_month()
    }

    pub fn stats_phase(&self) -> FetchPhase {
        self.view.borrow().stats_phase()
    }

    /// Re-fetch the expense list
    pub async fn refresh(&self) -> Result<RefreshOutcome, ApiError> {
        self.store.refresh(self.service.as_ref()).await
    }

    /// Re-fetch the expense list and, if it was applied, the stats month too
    pub async fn refresh_all(&self) -> Result<RefreshOutcome, ApiError> {
        let outcome = self.refresh().await?;
        if let RefreshOutcome::Applied { .. } = outcome {
            let _ = self.load_stats().await;
        }
        Ok(outcome)
    }

    /// Delete remotely and re-derive everything from the service
    pub async fn delete(&self, id: i64) -> Result<RefreshOutcome, ApiError> {
        let outcome = self.store.delete(self.service.as_ref(), id).await?;
        if let RefreshOutcome::Applied { .. } = outcome {
            let _ = self.load_stats().await;
        }
        Ok(outcome)
    }

    /// Send free text for extraction. Never refreshes by itself; callers
    /// schedule `refresh_all` when `should_refresh` says so.
    pub async fn submit(&self, text: &str) -> SubmitOutcome {
        let text = text.trim();
        if text.is_empty() {
            return SubmitOutcome::EmptyInput;
        }

        log::info!("Submitting expense text ({} chars)", text.chars().count());
        let outcome = SubmitOutcome::from_response(self.service.submit_expenses(text).await);
        match &outcome {
            SubmitOutcome::Added(count) => log::info!("Service added {} expense(s)", count),
            SubmitOutcome::NothingDetected => log::info!("No expenses detected in input"),
            SubmitOutcome::Rejected(error) => log::warn!("Service rejected input: {}", error),
            SubmitOutcome::Failed(e) => log::error!("Failed to submit expenses: {}", e),
            SubmitOutcome::EmptyInput => {}
        }
        outcome
    }

    pub fn change_month(&self, delta: i32, today: NaiveDate) -> MonthCursor {
        self.view.borrow_mut().change_month(delta, today)
    }

    /// Move the stats cursor without fetching; pair with `fetch_stats`
    pub fn move_stats_month(&self, delta: i32, today: NaiveDate) -> StatsTicket {
        self.view.borrow_mut().change_stats_month(delta, today)
    }

    pub async fn change_stats_month(&self, delta: i32, today: NaiveDate) -> Result<StatsApply, ApiError> {
        let ticket = self.move_stats_month(delta, today);
        self.fetch_stats(ticket).await
    }

    /// Fetch aggregates for the current stats month
    pub async fn load_stats(&self) -> Result<StatsApply, ApiError> {
        let ticket = self.view.borrow_mut().begin_stats_fetch();
        self.fetch_stats(ticket).await
    }

    pub async fn fetch_stats(&self, ticket: StatsTicket) -> Result<StatsApply, ApiError> {
        let month = ticket.month;
        let result = self
            .service
            .fetch_category_totals(month.year(), month.month())
            .await;

        let applied = self.view.borrow_mut().complete_stats_fetch(ticket, result);
        match &applied {
            Ok(StatsApply::Applied) => self.check_consistency(),
            Ok(StatsApply::Discarded) => {}
            Err(e) => log::error!("Failed to fetch category totals for {}: {}", month, e),
        }
        applied
    }

    /// Log, but never act on, disagreement between the service's totals and
    /// a local sum over the cached records
    fn check_consistency(&self) {
        let view = self.view.borrow();
        let Some((month, remote)) = view.applied_totals() else {
            return;
        };
        if self.store.is_empty() {
            return;
        }
        let local = self.store.with_all(|records| aggregate_locally(records, month));
        let drift = reconcile(remote, &local);
        if !drift.is_empty() {
            let categories: Vec<&str> = drift.iter().map(|d| d.category.as_str()).collect();
            log::warn!(
                "Category totals for {} differ from cached expenses in: {}",
                month,
                categories.join(", ")
            );
        }
    }

    pub fn expense_list(&self) -> ExpenseListView {
        let view = self.view.borrow();
        self.store.with_all(|records| view.expense_list(records))
    }

    pub fn stats_view(&self) -> StatsView {
        self.view.borrow().stats_view()
    }

    /// End the session remotely, then drop everything local regardless
    pub async fn logout(&self, today: NaiveDate) {
        if let Err(e) = self.service.logout().await {
            log::error!("Logout request failed: {}", e);
        }
        self.clear(today);
    }

    /// Empty the store, drop rendered stats and reset both cursors
    pub fn clear(&self, today: NaiveDate) {
        self.store.clear();
        self.view.borrow_mut().reset(today);
        log::info!("Cleared session state");
    }
}
