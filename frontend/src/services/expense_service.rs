use async_trait::async_trait;
use shared::{AddExpensesResponse, CategoryTotal, ExpenseRecord};

use super::error::ApiError;

/// Remote operations the expense views depend on.
///
/// Futures are `?Send`: the client runs on the browser's single thread.
#[async_trait(?Send)]
pub trait ExpenseService {
    /// Complete expense list for the signed-in user
    async fn fetch_expenses(&self) -> Result<Vec<ExpenseRecord>, ApiError>;

    /// Hand free text to the extraction service. A response carrying
    /// `error` is still `Ok`; interpreting it is up to the caller.
    async fn submit_expenses(&self, user_input: &str) -> Result<AddExpensesResponse, ApiError>;

    async fn delete_expense(&self, id: i64) -> Result<(), ApiError>;

    /// Service-side category sums for one calendar month
    async fn fetch_category_totals(&self, year: i32, month: u32) -> Result<Vec<CategoryTotal>, ApiError>;

    async fn logout(&self) -> Result<(), ApiError>;
}
