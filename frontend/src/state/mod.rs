pub mod breakdown;
pub mod controller;
pub mod expense_store;
pub mod month;
pub mod monthly_view;
pub mod submission;

#[cfg(test)]
pub mod test_support;

pub use controller::FinanceController;
