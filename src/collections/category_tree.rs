//! N-ary category tree
//!
//! Each node owns its children outright; there is no parent back-reference.
//! Paths are ordered name sequences whose first segment must be the name of
//! the node the lookup starts from, e.g. `["Biblioteca", "Science", "Physics"]`.

use serde::{Deserialize, Serialize};

/// A category with the titles filed under it and its subcategories
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryNode {
    pub name: String,
    #[serde(default)]
    pub books: Vec<String>,
    #[serde(default)]
    pub children: Vec<CategoryNode>,
}

impl CategoryNode {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            books: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Return the child called `name`, creating it if missing
    pub fn add_child(&mut self, name: &str) -> &mut CategoryNode {
        let index = match self.children.iter().position(|c| c.name == name) {
            Some(index) => index,
            None => {
                self.children.push(CategoryNode::new(name));
                self.children.len() - 1
            }
        };
        &mut self.children[index]
    }

    pub fn child(&self, name: &str) -> Option<&CategoryNode> {
        self.children.iter().find(|c| c.name == name)
    }

    /// Follow `path` starting at this node.
    ///
    /// Fails when the first segment is not this node's name or the path is
    /// empty; a single-segment path resolves to `self`.
    pub fn find<S: AsRef<str>>(&self, path: &[S]) -> Option<&CategoryNode> {
        let (first, rest) = path.split_first()?;
        if first.as_ref() != self.name {
            return None;
        }
        if rest.is_empty() {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(rest))
    }

    pub fn find_mut<S: AsRef<str>>(&mut self, path: &[S]) -> Option<&mut CategoryNode> {
        let (first, rest) = path.split_first()?;
        if first.as_ref() != self.name {
            return None;
        }
        if rest.is_empty() {
            return Some(self);
        }
        self.children
            .iter_mut()
            .find_map(|child| child.find_mut(rest))
    }

    /// Walk `path`, creating missing segments, and return the leaf.
    ///
    /// Returns `None` without touching the tree when the first segment does
    /// not match this node.
    pub fn add_path<S: AsRef<str>>(&mut self, path: &[S]) -> Option<&mut CategoryNode> {
        let (first, rest) = path.split_first()?;
        if first.as_ref() != self.name {
            return None;
        }
        let mut node = self;
        for part in rest {
            node = node.add_child(part.as_ref());
        }
        Some(node)
    }

    /// File `title` under the category at `path`, creating any missing
    /// segments. A title already filed at the leaf is not added twice.
    /// Returns `false` when the path does not start at this node.
    pub fn add_book<S: AsRef<str>>(&mut self, path: &[S], title: &str) -> bool {
        match self.add_path(path) {
            Some(leaf) => {
                if !leaf.books.iter().any(|b| b == title) {
                    leaf.books.push(title.to_string());
                }
                true
            }
            None => false,
        }
    }

    /// Purge `title` from this node and every descendant.
    ///
    /// A title may be filed in several branches, so the recursion always
    /// visits every child. Returns how many entries were removed.
    pub fn remove_book(&mut self, title: &str) -> usize {
        let before = self.books.len();
        self.books.retain(|b| b != title);
        let mut removed = before - self.books.len();
        for child in &mut self.children {
            removed += child.remove_book(title);
        }
        removed
    }

    /// Detach the subtree at `path`. The root itself cannot be removed, so the
    /// path needs at least two segments.
    pub fn remove_child<S: AsRef<str>>(&mut self, path: &[S]) -> Option<CategoryNode> {
        let (last, parent_path) = path.split_last()?;
        if parent_path.is_empty() {
            return None;
        }
        let parent = self.find_mut(parent_path)?;
        let index = parent
            .children
            .iter()
            .position(|c| c.name == last.as_ref())?;
        Some(parent.children.remove(index))
    }

    /// Whether `title` is filed anywhere in this subtree
    pub fn contains_book(&self, title: &str) -> bool {
        self.books.iter().any(|b| b == title)
            || self.children.iter().any(|c| c.contains_book(title))
    }

    /// Number of nodes in this subtree, including `self`
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(CategoryNode::node_count).sum::<usize>()
    }
}

/// Split a slash separated category path, e.g. `"Biblioteca/Science/Physics"`
pub fn parse_category_path(raw: &str) -> Vec<String> {
    raw.split('/')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
        .collect()
}
