//! Category taxonomy operations

use crate::{
    collections::CategoryNode,
    error::{AppError, AppResult},
};

use super::Library;

impl Library {
    /// Create the category at `path`, along with any missing parents.
    /// The first segment must be the root category's name.
    pub fn add_category<S: AsRef<str>>(&mut self, path: &[S]) -> AppResult<()> {
        self.check_root(path)?;
        if self.repository.categories.add_path(path).is_none() {
            return Err(self.invalid_path(path));
        }

        let joined = join_path(path);
        self.log(format!("Category added: {}", joined));
        tracing::info!("Category added: {}", joined);
        Ok(())
    }

    /// File the book with `isbn` under the category at `path`, creating
    /// missing segments
    pub fn add_book_to_category<S: AsRef<str>>(&mut self, path: &[S], isbn: &str) -> AppResult<()> {
        let title = self
            .find_book_by_isbn(isbn)
            .map(|b| b.title.clone())
            .ok_or_else(|| AppError::NotFound(format!("No book with ISBN {}", isbn)))?;
        self.check_root(path)?;

        if !self.repository.categories.add_book(path, &title) {
            return Err(self.invalid_path(path));
        }

        let joined = join_path(path);
        self.log(format!("Book {} added to {}", title, joined));
        tracing::info!("Book {} filed under {}", title, joined);
        Ok(())
    }

    /// Delete the category at `path` and everything below it. The root
    /// cannot be removed.
    pub fn remove_category<S: AsRef<str>>(&mut self, path: &[S]) -> AppResult<CategoryNode> {
        self.check_root(path)?;
        if path.len() < 2 {
            return Err(AppError::BusinessRule(
                "The root category cannot be removed".to_string(),
            ));
        }

        let removed = self
            .repository
            .categories
            .remove_child(path)
            .ok_or_else(|| AppError::NotFound(format!("No category {}", join_path(path))))?;

        let joined = join_path(path);
        self.log(format!("Category removed: {}", joined));
        tracing::info!("Category removed: {} ({} node(s))", joined, removed.node_count());
        Ok(removed)
    }

    pub fn categories(&self) -> &CategoryNode {
        &self.repository.categories
    }

    pub fn find_category<S: AsRef<str>>(&self, path: &[S]) -> Option<&CategoryNode> {
        self.repository.categories.find(path)
    }

    fn check_root<S: AsRef<str>>(&self, path: &[S]) -> AppResult<()> {
        match path.first() {
            Some(first) if first.as_ref() == self.repository.categories.name => Ok(()),
            _ => {
                tracing::warn!("Rejected category path {}", join_path(path));
                Err(self.invalid_path(path))
            }
        }
    }

    fn invalid_path<S: AsRef<str>>(&self, path: &[S]) -> AppError {
        AppError::Validation(format!(
            "Invalid category path '{}': it must start with '{}'",
            join_path(path),
            self.repository.categories.name
        ))
    }
}

fn join_path<S: AsRef<str>>(path: &[S]) -> String {
    path.iter().map(|s| s.as_ref()).collect::<Vec<&str>>().join("/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collections::parse_category_path;
    use crate::models::NewBook;

    #[test]
    fn test_add_category_requires_root_prefix() {
        let mut lib = Library::new("Biblioteca");
        lib.add_category(&["Biblioteca", "Science", "Physics"]).unwrap();
        assert!(lib.find_category(&["Biblioteca", "Science", "Physics"]).is_some());

        let err = lib.add_category(&["Library", "Science"]).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert!(lib.add_category::<&str>(&[]).is_err());
        assert_eq!(lib.categories().node_count(), 3);
    }

    #[test]
    fn test_add_book_to_category() {
        let mut lib = Library::new("Biblioteca");
        lib.add_book(NewBook::new("Dune", "Herbert", "i1")).unwrap();

        let path = parse_category_path("Biblioteca/Fiction/SciFi");
        lib.add_book_to_category(&path, "i1").unwrap();

        let node = lib.find_category(&path).unwrap();
        assert_eq!(node.books, vec!["Dune".to_string()]);
        assert_eq!(
            lib.recent_history(1)[0].action,
            "Book Dune added to Biblioteca/Fiction/SciFi"
        );

        assert!(matches!(
            lib.add_book_to_category(&path, "nope"),
            Err(AppError::NotFound(_))
        ));
        assert!(matches!(
            lib.add_book_to_category(&["Other"], "i1"),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn test_remove_category() {
        let mut lib = Library::new("Biblioteca");
        lib.add_category(&["Biblioteca", "Science", "Physics"]).unwrap();

        let removed = lib.remove_category(&["Biblioteca", "Science"]).unwrap();
        assert_eq!(removed.name, "Science");
        assert!(lib.find_category(&["Biblioteca", "Science"]).is_none());

        assert!(matches!(
            lib.remove_category(&["Biblioteca"]),
            Err(AppError::BusinessRule(_))
        ));
        assert!(matches!(
            lib.remove_category(&["Biblioteca", "Science"]),
            Err(AppError::NotFound(_))
        ));
    }
}
