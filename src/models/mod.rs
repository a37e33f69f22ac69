//! Data models for the library catalog

pub mod book;
pub mod history;
pub mod loan;
pub mod user;

// Re-export commonly used types
pub use book::{Book, NewBook};
pub use history::HistoryEntry;
pub use loan::{LoanOutcome, LoanRequest};
pub use user::{NewUser, User};
