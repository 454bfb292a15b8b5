use shared::AddExpensesResponse;

use crate::services::ApiError;

/// Result of handing free text to the extraction service
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Nothing to send; no request was made
    EmptyInput,
    Added(u32),
    NothingDetected,
    /// The service answered with its own `error`
    Rejected(String),
    Failed(ApiError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeTone {
    Success,
    Error,
}

impl NoticeTone {
    pub fn css_class(&self) -> &'static str {
        match self {
            NoticeTone::Success => "success-bg",
            NoticeTone::Error => "error-bg",
        }
    }
}

/// Message shown in place of the input's placeholder after a submit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputNotice {
    pub placeholder: &'static str,
    pub tone: NoticeTone,
}

impl SubmitOutcome {
    pub fn from_response(result: Result<AddExpensesResponse, ApiError>) -> Self {
        match result {
            Err(e) => SubmitOutcome::Failed(e),
            Ok(response) => match (response.error, response.expenses_added) {
                (Some(error), _) => SubmitOutcome::Rejected(error),
                (None, Some(added)) if added > 0 => SubmitOutcome::Added(added),
                (None, _) => SubmitOutcome::NothingDetected,
            },
        }
    }

    /// Only a successful add changes the service's data
    pub fn should_refresh(&self) -> bool {
        matches!(self, SubmitOutcome::Added(_))
    }

    /// The typed text is consumed by every attempt that reached the service
    pub fn clears_input(&self) -> bool {
        !matches!(self, SubmitOutcome::EmptyInput)
    }

    pub fn notice(&self) -> InputNotice {
        match self {
            SubmitOutcome::EmptyInput => InputNotice {
                placeholder: "Please enter an expense before submitting.",
                tone: NoticeTone::Error,
            },
            SubmitOutcome::Added(_) => InputNotice {
                placeholder: "Expense added successfully! Add another one...",
                tone: NoticeTone::Success,
            },
            SubmitOutcome::NothingDetected => InputNotice {
                placeholder: "No expenses were detected. Try again!",
                tone: NoticeTone::Error,
            },
            SubmitOutcome::Rejected(_) => InputNotice {
                placeholder: "Could not understand that expense. Try again!",
                tone: NoticeTone::Error,
            },
            SubmitOutcome::Failed(_) => InputNotice {
                placeholder: "Something went wrong. Please try again.",
                tone: NoticeTone::Error,
            },
        }
    }
}
