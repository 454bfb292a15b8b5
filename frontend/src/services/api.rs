use async_trait::async_trait;
use gloo::net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use shared::{
    AddExpensesRequest, AddExpensesResponse, CategoryTotal, DeleteExpenseResponse, ExpenseRecord,
    LogoutResponse,
};
use web_sys::RequestCredentials;

use super::error::ApiError;
use super::expense_service::ExpenseService;

/// API client for communicating with the expense service
#[derive(Clone, Debug, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    /// Create a client that talks to the page's own origin
    pub fn new() -> Self {
        Self::with_base_url(String::new())
    }

    /// Create a new API client with a custom base URL
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn expenses_url(&self) -> String {
        format!("{}/api/expenses", self.base_url)
    }

    pub fn expense_url(&self, id: i64) -> String {
        format!("{}/api/expenses/{}", self.base_url, id)
    }

    pub fn category_totals_url(&self, year: i32, month: u32) -> String {
        format!("{}/api/categories?year={}&month={:02}", self.base_url, year, month)
    }

    pub fn logout_url(&self) -> String {
        format!("{}/api/logout", self.base_url)
    }

    /// Session cookies ride along on every call
    fn with_session(builder: RequestBuilder) -> RequestBuilder {
        builder.credentials(RequestCredentials::Include)
    }

    async fn send(request: Request) -> Result<(u16, String), ApiError> {
        let response: Response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Ok((status, body))
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, ApiError> {
        let request = Self::with_session(Request::get(url))
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let (status, body) = Self::send(request).await?;
        decode_strict(status, &body)
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Decode a body that is only meaningful on a 2xx status
pub fn decode_strict<T: DeserializeOwned>(status: u16, body: &str) -> Result<T, ApiError> {
    if !is_success(status) {
        return Err(ApiError::Status {
            status,
            body: body.to_string(),
        });
    }
    Ok(serde_json::from_str(body)?)
}

/// Decode a body the service also sends with error statuses.
///
/// On a non-2xx status the body is accepted only if it parses and
/// `reports_error` recognizes the service's own `error` field; anything else
/// is a plain status failure.
pub fn decode_reported<T, F>(status: u16, body: &str, reports_error: F) -> Result<T, ApiError>
where
    T: DeserializeOwned,
    F: Fn(&T) -> bool,
{
    match serde_json::from_str::<T>(body) {
        Ok(parsed) if is_success(status) || reports_error(&parsed) => Ok(parsed),
        Ok(_) => Err(ApiError::Status {
            status,
            body: body.to_string(),
        }),
        Err(_) if !is_success(status) => Err(ApiError::Status {
            status,
            body: body.to_string(),
        }),
        Err(e) => Err(e.into()),
    }
}

#[async_trait(?Send)]
impl ExpenseService for ApiClient {
    async fn fetch_expenses(&self) -> Result<Vec<ExpenseRecord>, ApiError> {
        self.get_json(&self.expenses_url()).await
    }

    async fn submit_expenses(&self, user_input: &str) -> Result<AddExpensesResponse, ApiError> {
        let payload = AddExpensesRequest {
            user_input: user_input.to_string(),
        };
        let request = Self::with_session(Request::post(&self.expenses_url()))
            .json(&payload)
            .map_err(|e| ApiError::Network(format!("Failed to serialize request: {}", e)))?;
        let (status, body) = Self::send(request).await?;
        decode_reported(status, &body, |response: &AddExpensesResponse| {
            response.error.is_some()
        })
    }

    async fn delete_expense(&self, id: i64) -> Result<(), ApiError> {
        let request = Self::with_session(Request::delete(&self.expense_url(id)))
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let (status, body) = Self::send(request).await?;
        let response: DeleteExpenseResponse =
            decode_reported(status, &body, |response: &DeleteExpenseResponse| {
                response.error.is_some()
            })?;
        match response.error {
            Some(error) => Err(ApiError::Rejected(error)),
            None => Ok(()),
        }
    }

    async fn fetch_category_totals(&self, year: i32, month: u32) -> Result<Vec<CategoryTotal>, ApiError> {
        self.get_json(&self.category_totals_url(year, month)).await
    }

    async fn logout(&self) -> Result<(), ApiError> {
        let request = Self::with_session(Request::post(&self.logout_url()))
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let (status, body) = Self::send(request).await?;
        decode_strict::<LogoutResponse>(status, &body).map(|_| ())
    }
}
