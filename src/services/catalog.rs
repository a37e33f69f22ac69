//! Catalog management: books and their removal cascade

use validator::Validate;

use crate::{
    algorithms::{binary_search, bubble_sort},
    error::{AppError, AppResult},
    models::{
        book::{title_sort_key, Book, NewBook},
        LoanRequest,
    },
};

use super::Library;

/// Everything a book removal will touch, computed before any mutation
#[derive(Debug)]
struct BookRemoval {
    isbn: String,
    title: String,
    /// Another record still carries this title, so graph and category
    /// entries keyed by it must stay
    title_shared: bool,
    pending_requests: usize,
}

impl Library {
    /// Add a book to the catalog and register it in the relation graph.
    ///
    /// Fields are trimmed first. Rejects blank fields and an ISBN that is
    /// already catalogued.
    pub fn add_book(&mut self, book: NewBook) -> AppResult<Book> {
        let book = book.trimmed();
        book.validate()?;

        if self.find_book_by_isbn(&book.isbn).is_some() {
            tracing::warn!("Rejected duplicate ISBN {}", book.isbn);
            return Err(AppError::Conflict(format!(
                "A book with ISBN {} already exists",
                book.isbn
            )));
        }

        let book = Book::from(book);
        self.repository.books.append(book.clone());
        self.repository.relations.add_node(&book.title);
        self.log(format!("Book added: {}", book.title));
        tracing::info!("Book added: {} (ISBN {})", book.title, book.isbn);
        Ok(book)
    }

    pub fn find_book_by_isbn(&self, isbn: &str) -> Option<&Book> {
        self.repository.books.find(|b| b.isbn == isbn)
    }

    pub fn find_book_by_title(&self, title: &str) -> Option<&Book> {
        self.repository.books.find(|b| b.title == title)
    }

    /// All books in catalog order
    pub fn list_books(&self) -> Vec<Book> {
        self.repository.books.to_vec()
    }

    pub fn book_count(&self) -> usize {
        self.repository.books.len()
    }

    /// Reorder the catalog by title (case-insensitive) using bubble sort
    pub fn sort_books_by_title(&mut self) {
        let books = self.repository.books.to_vec();
        let sorted = bubble_sort(&books, Book::title_key);
        self.repository.books = sorted.into_iter().collect();
        self.log("Books sorted by title");
        tracing::debug!("Sorted {} books by title", books.len());
    }

    /// Title lookup through binary search over a title-sorted copy of the
    /// catalog. Matching ignores case.
    pub fn find_book_by_title_sorted(&self, title: &str) -> Option<Book> {
        let sorted = bubble_sort(&self.repository.books.to_vec(), Book::title_key);
        binary_search(&sorted, &title_sort_key(title), Book::title_key).cloned()
    }

    /// Remove a book and every reference to it.
    ///
    /// As one unit: drops the record, deletes its relation-graph node and
    /// purges it from every neighbor, drops pending loan requests for the
    /// ISBN (keeping the others in order), and purges the title from every
    /// category. If the ISBN is unknown nothing is changed.
    pub fn remove_book(&mut self, isbn: &str) -> AppResult<Book> {
        let removal = self.stage_book_removal(isbn)?;
        self.commit_book_removal(removal)
    }

    fn stage_book_removal(&self, isbn: &str) -> AppResult<BookRemoval> {
        let book = self
            .find_book_by_isbn(isbn)
            .ok_or_else(|| AppError::NotFound(format!("No book with ISBN {}", isbn)))?;

        let title_shared = self
            .repository
            .books
            .iter()
            .filter(|b| b.title == book.title)
            .count()
            > 1;

        let pending_requests = self
            .repository
            .loan_queue
            .iter()
            .filter(|r| r.isbn == isbn)
            .count();

        Ok(BookRemoval {
            isbn: book.isbn.clone(),
            title: book.title.clone(),
            title_shared,
            pending_requests,
        })
    }

    fn commit_book_removal(&mut self, removal: BookRemoval) -> AppResult<Book> {
        // The only step that can miss; the rest below cannot fail
        let book = self
            .repository
            .books
            .remove(|b| b.isbn == removal.isbn)
            .ok_or_else(|| AppError::NotFound(format!("No book with ISBN {}", removal.isbn)))?;

        if !removal.title_shared {
            self.repository.relations.remove_node(&removal.title);
            self.repository.categories.remove_book(&removal.title);
        }

        let dropped = self
            .repository
            .loan_queue
            .retain(|r: &LoanRequest| r.isbn != removal.isbn);
        debug_assert_eq!(dropped, removal.pending_requests);

        self.log(format!("Book removed: {}", book.title));
        tracing::info!(
            "Book removed: {} (ISBN {}), {} pending request(s) dropped",
            book.title,
            book.isbn,
            dropped
        );
        Ok(book)
    }
}
