use async_trait::async_trait;
use shared::{parse_expense_datetime, AddExpensesResponse, CategoryTotal, ExpenseRecord};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use crate::services::{ApiError, ExpenseService};

pub fn record(id: i64, name: &str, category: &str, datetime: &str, amount: f64) -> ExpenseRecord {
    ExpenseRecord {
        id,
        name: name.to_string(),
        category: category.to_string(),
        datetime: parse_expense_datetime(datetime).unwrap(),
        amount,
    }
}

pub fn total(category: &str, total: f64) -> CategoryTotal {
    CategoryTotal {
        category: category.to_string(),
        total,
    }
}

/// In-memory stand-in for the expense service. Deletes remove the record
/// the way the real service would, so the next fetch reflects them.
#[derive(Default)]
pub struct MockService {
    expenses: RefCell<Vec<ExpenseRecord>>,
    totals: RefCell<HashMap<(i32, u32), Vec<CategoryTotal>>>,
    submit_result: RefCell<Option<Result<AddExpensesResponse, ApiError>>>,
    fetch_error: RefCell<Option<ApiError>>,
    delete_error: RefCell<Option<ApiError>>,
    totals_error: RefCell<Option<ApiError>>,
    fetch_count: Cell<usize>,
    deleted: RefCell<Vec<i64>>,
    submitted: RefCell<Vec<String>>,
    totals_requests: RefCell<Vec<(i32, u32)>>,
    logout_count: Cell<usize>,
}

impl MockService {
    pub fn with_expenses(expenses: Vec<ExpenseRecord>) -> Self {
        let service = Self::default();
        service.set_expenses(expenses);
        service
    }

    pub fn set_expenses(&self, expenses: Vec<ExpenseRecord>) {
        *self.expenses.borrow_mut() = expenses;
    }

    pub fn set_totals(&self, year: i32, month: u32, totals: Vec<CategoryTotal>) {
        self.totals.borrow_mut().insert((year, month), totals);
    }

    pub fn set_submit_result(&self, result: Result<AddExpensesResponse, ApiError>) {
        *self.submit_result.borrow_mut() = Some(result);
    }

    pub fn fail_fetch(&self, error: ApiError) {
        *self.fetch_error.borrow_mut() = Some(error);
    }

    pub fn fail_delete(&self, error: ApiError) {
        *self.delete_error.borrow_mut() = Some(error);
    }

    pub fn fail_totals(&self, error: ApiError) {
        *self.totals_error.borrow_mut() = Some(error);
    }

    pub fn fetch_count(&self) -> usize {
        self.fetch_count.get()
    }

    pub fn deleted_ids(&self) -> Vec<i64> {
        self.deleted.borrow().clone()
    }

    pub fn submitted(&self) -> Vec<String> {
        self.submitted.borrow().clone()
    }

    pub fn totals_requests(&self) -> Vec<(i32, u32)> {
        self.totals_requests.borrow().clone()
    }

    pub fn logout_count(&self) -> usize {
        self.logout_count.get()
    }
}

#[async_trait(?Send)]
impl ExpenseService for MockService {
    async fn fetch_expenses(&self) -> Result<Vec<ExpenseRecord>, ApiError> {
        self.fetch_count.set(self.fetch_count.get() + 1);
        if let Some(error) = self.fetch_error.borrow().clone() {
            return Err(error);
        }
        Ok(self.expenses.borrow().clone())
    }

    async fn submit_expenses(&self, user_input: &str) -> Result<AddExpensesResponse, ApiError> {
        self.submitted.borrow_mut().push(user_input.to_string());
        self.submit_result
            .borrow()
            .clone()
            .unwrap_or_else(|| Ok(AddExpensesResponse::default()))
    }

    async fn delete_expense(&self, id: i64) -> Result<(), ApiError> {
        self.deleted.borrow_mut().push(id);
        if let Some(error) = self.delete_error.borrow().clone() {
            return Err(error);
        }
        self.expenses.borrow_mut().retain(|record| record.id != id);
        Ok(())
    }

    async fn fetch_category_totals(&self, year: i32, month: u32) -> Result<Vec<CategoryTotal>, ApiError> {
        self.totals_requests.borrow_mut().push((year, month));
        if let Some(error) = self.totals_error.borrow().clone() {
            return Err(error);
        }
        Ok(self
            .totals
            .borrow()
            .get(&(year, month))
            .cloned()
            .unwrap_or_default())
    }

    async fn logout(&self) -> Result<(), ApiError> {
        self.logout_count.set(self.logout_count.get() + 1);
        Ok(())
    }
}
