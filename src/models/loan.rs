//! Loan request model and processing outcome

use serde::{Deserialize, Serialize};

/// Pending loan request, queued in arrival order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanRequest {
    pub user_id: String,
    pub isbn: String,
}

impl LoanRequest {
    pub fn new(user_id: impl Into<String>, isbn: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            isbn: isbn.into(),
        }
    }
}

/// Result of processing the oldest pending request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoanOutcome {
    /// The book was available and is now on loan to the requester
    Granted { request: LoanRequest, title: String },
    /// The book is on loan already or no longer exists. The request is consumed.
    Refused { request: LoanRequest },
    /// Nothing was queued
    NoPendingRequests,
}

impl LoanOutcome {
    pub fn is_granted(&self) -> bool {
        matches!(self, LoanOutcome::Granted { .. })
    }
}

impl std::fmt::Display for LoanOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoanOutcome::Granted { request, title } => {
                write!(f, "Loan granted: {} gets {}", request.user_id, title)
            }
            LoanOutcome::Refused { .. } => write!(f, "The book is not available"),
            LoanOutcome::NoPendingRequests => write!(f, "No pending requests"),
        }
    }
}
