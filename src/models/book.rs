//! Book model and related types

use serde::{Deserialize, Serialize};
use unicode_normalization::UnicodeNormalization;
use validator::Validate;

/// Book record. Identity key is the ISBN.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub title: String,
    pub author: String,
    pub isbn: String,
    /// `false` while the book is out on loan
    #[serde(default = "default_available")]
    pub available: bool,
}

fn default_available() -> bool {
    true
}

impl Book {
    pub fn new(title: impl Into<String>, author: impl Into<String>, isbn: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            isbn: isbn.into(),
            available: true,
        }
    }

    pub fn status_label(&self) -> &'static str {
        if self.available {
            "Available"
        } else {
            "On loan"
        }
    }

    /// Key used when ordering books by title
    pub fn title_key(&self) -> String {
        title_sort_key(&self.title)
    }
}

impl std::fmt::Display for Book {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} by {} (ISBN:{}) - {}",
            self.title,
            self.author,
            self.isbn,
            self.status_label()
        )
    }
}

/// Case-insensitive, normalization-insensitive title key
pub fn title_sort_key(title: &str) -> String {
    title.nfkc().collect::<String>().to_lowercase()
}

/// Create book request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewBook {
    #[validate(length(min = 1, message = "Title cannot be empty"))]
    pub title: String,
    #[validate(length(min = 1, message = "Author cannot be empty"))]
    pub author: String,
    #[validate(length(min = 1, message = "ISBN cannot be empty"))]
    pub isbn: String,
}

impl NewBook {
    /// Build a request with surrounding whitespace stripped from every field
    pub fn new(title: &str, author: &str, isbn: &str) -> Self {
        Self {
            title: title.to_string(),
            author: author.to_string(),
            isbn: isbn.to_string(),
        }
        .trimmed()
    }

    /// Strip surrounding whitespace from every field. Requests built as
    /// struct literals or deserialized go through this before validation.
    pub fn trimmed(self) -> Self {
        Self {
            title: trim_owned(self.title),
            author: trim_owned(self.author),
            isbn: trim_owned(self.isbn),
        }
    }
}

/// Trim in place, reusing the allocation when nothing changes
pub(crate) fn trim_owned(value: String) -> String {
    if value.trim().len() == value.len() {
        value
    } else {
        value.trim().to_string()
    }
}

impl From<NewBook> for Book {
    fn from(new: NewBook) -> Self {
        Book::new(new.title, new.author, new.isbn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let mut book = Book::new("Dune", "Frank Herbert", "978-0441013593");
        assert_eq!(book.to_string(), "Dune by Frank Herbert (ISBN:978-0441013593) - Available");
        book.available = false;
        assert!(book.to_string().ends_with("On loan"));
    }

    #[test]
    fn test_title_sort_key() {
        assert_eq!(title_sort_key("Cien Años"), "cien años");
        // Composed and decomposed forms compare equal
        assert_eq!(title_sort_key("Cien An\u{0303}os"), title_sort_key("Cien Años"));
    }

    #[test]
    fn test_new_book_validation() {
        assert!(NewBook::new("Dune", "Herbert", "1").validate().is_ok());
        assert!(NewBook::new("   ", "Herbert", "1").validate().is_err());
        assert!(NewBook::new("Dune", "", "1").validate().is_err());
        assert!(NewBook::new("Dune", "Herbert", " ").validate().is_err());
    }

    #[test]
    fn test_trimmed_strips_literal_fields() {
        let request = NewBook {
            title: " Dune ".to_string(),
            author: "Herbert\n".to_string(),
            isbn: "  ".to_string(),
        }
        .trimmed();
        assert_eq!(request.title, "Dune");
        assert_eq!(request.author, "Herbert");
        assert!(request.isbn.is_empty());
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_missing_available_defaults_to_true() {
        let book: Book =
            serde_json::from_str(r#"{"title":"T","author":"A","isbn":"I"}"#).unwrap();
        assert!(book.available);
    }
}
