pub mod api;
pub mod config;
pub mod date_utils;
pub mod error;
pub mod expense_service;
pub mod logging;

pub use api::ApiClient;
pub use config::AppConfig;
pub use error::ApiError;
pub use expense_service::ExpenseService;
