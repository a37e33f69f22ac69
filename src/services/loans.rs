//! Loan management service

use crate::{
    error::{AppError, AppResult},
    models::{Book, LoanOutcome, LoanRequest},
};

use super::Library;

impl Library {
    /// Queue a loan request after checking that both book and user exist.
    ///
    /// Duplicate requests are not suppressed here; see
    /// [`Library::has_pending_request`].
    pub fn request_loan(&mut self, user_id: &str, isbn: &str) -> AppResult<LoanRequest> {
        if self.find_book_by_isbn(isbn).is_none() {
            return Err(AppError::NotFound(format!("No book with ISBN {}", isbn)));
        }
        if self.find_user(user_id).is_none() {
            return Err(AppError::NotFound(format!("No user with ID {}", user_id)));
        }

        let request = LoanRequest::new(user_id, isbn);
        self.repository.loan_queue.enqueue(request.clone());
        self.log(format!("Loan requested: {} -> {}", user_id, isbn));
        tracing::info!("Loan requested: {} -> {}", user_id, isbn);
        Ok(request)
    }

    /// Process the oldest pending request.
    ///
    /// The request is consumed whatever the outcome; a refused request is not
    /// queued again.
    pub fn process_next_loan(&mut self) -> LoanOutcome {
        let Some(request) = self.repository.loan_queue.dequeue() else {
            tracing::debug!("No pending loan requests");
            return LoanOutcome::NoPendingRequests;
        };

        let granted_title = self
            .repository
            .books
            .find_mut(|b| b.isbn == request.isbn)
            .filter(|b| b.available)
            .map(|book| {
                book.available = false;
                book.title.clone()
            });

        match granted_title {
            Some(title) => {
                self.log(format!(
                    "Loan processed: {} got {}",
                    request.user_id, request.isbn
                ));
                tracing::info!("Loan granted: {} gets {}", request.user_id, title);
                LoanOutcome::Granted { request, title }
            }
            None => {
                self.log(format!(
                    "Loan failed: {} -> {}",
                    request.user_id, request.isbn
                ));
                tracing::warn!("Loan refused: {} -> {}", request.user_id, request.isbn);
                LoanOutcome::Refused { request }
            }
        }
    }

    /// Mark a book as returned
    pub fn return_book(&mut self, isbn: &str) -> AppResult<Book> {
        let book = self
            .repository
            .books
            .find_mut(|b| b.isbn == isbn)
            .ok_or_else(|| AppError::NotFound(format!("No book with ISBN {}", isbn)))?;
        book.available = true;
        let book = book.clone();

        self.log(format!("Book returned: {}", isbn));
        tracing::info!("Book returned: {} (ISBN {})", book.title, isbn);
        Ok(book)
    }

    pub fn has_pending_request(&self, user_id: &str, isbn: &str) -> bool {
        self.repository
            .loan_queue
            .iter()
            .any(|r| r.user_id == user_id && r.isbn == isbn)
    }

    /// Pending requests, oldest first
    pub fn pending_requests(&self) -> Vec<LoanRequest> {
        self.repository.loan_queue.iter().cloned().collect()
    }

    pub fn next_request(&self) -> Option<&LoanRequest> {
        self.repository.loan_queue.peek()
    }
}
