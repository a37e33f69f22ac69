//! Relations between books

use crate::{
    collections::RelationGraph,
    error::{AppError, AppResult},
};

use super::Library;

impl Library {
    /// Relate two catalogued books by title.
    ///
    /// Both titles must belong to a catalogued book and must differ.
    pub fn relate_books(&mut self, title_a: &str, title_b: &str) -> AppResult<()> {
        for title in [title_a, title_b] {
            if self.find_book_by_title(title).is_none() {
                return Err(AppError::NotFound(format!("No book titled {}", title)));
            }
        }
        if title_a == title_b {
            return Err(AppError::BusinessRule(
                "A book cannot be related to itself".to_string(),
            ));
        }

        self.repository.relations.add_edge(title_a, title_b);
        self.log(format!("Relation created: {} <-> {}", title_a, title_b));
        tracing::info!("Relation created: {} <-> {}", title_a, title_b);
        Ok(())
    }

    /// Drop the relation between two titles. Returns whether one existed.
    pub fn unrelate_books(&mut self, title_a: &str, title_b: &str) -> bool {
        let removed = self.repository.relations.remove_edge(title_a, title_b);
        if removed {
            self.log(format!("Relation removed: {} <-> {}", title_a, title_b));
            tracing::info!("Relation removed: {} <-> {}", title_a, title_b);
        }
        removed
    }

    /// Titles directly related to `title`
    pub fn related_books(&self, title: &str) -> Vec<String> {
        self.repository.relations.neighbors(title).into_iter().collect()
    }

    /// Titles two relations away from `title` that are not already related
    pub fn suggest_books(&self, title: &str) -> Vec<String> {
        self.repository
            .relations
            .related_by_two_steps(title)
            .into_iter()
            .collect()
    }

    pub fn relations(&self) -> &RelationGraph {
        &self.repository.relations
    }
}
