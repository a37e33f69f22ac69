//! Undirected relation graph between book titles
//!
//! Adjacency is kept as an insertion-ordered map from title to the set of
//! related titles. Every edge is stored in both directions.

use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RelationGraph {
    adjacency: IndexMap<String, IndexSet<String>>,
}

impl RelationGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `title` with no relations; no-op when already present
    pub fn add_node(&mut self, title: &str) {
        if !self.adjacency.contains_key(title) {
            self.adjacency.insert(title.to_string(), IndexSet::new());
        }
    }

    /// Relate `a` and `b` in both directions, creating either node if missing.
    ///
    /// Self-loops are not rejected here.
    pub fn add_edge(&mut self, a: &str, b: &str) {
        self.add_node(a);
        self.add_node(b);
        if let Some(neighbors) = self.adjacency.get_mut(a) {
            neighbors.insert(b.to_string());
        }
        if let Some(neighbors) = self.adjacency.get_mut(b) {
            neighbors.insert(a.to_string());
        }
    }

    /// Drop the edge between `a` and `b`. Returns whether anything changed.
    pub fn remove_edge(&mut self, a: &str, b: &str) -> bool {
        let forward = self
            .adjacency
            .get_mut(a)
            .is_some_and(|neighbors| neighbors.shift_remove(b));
        let backward = self
            .adjacency
            .get_mut(b)
            .is_some_and(|neighbors| neighbors.shift_remove(a));
        forward || backward
    }

    /// Delete `title` and purge it from every other node's neighbor set.
    /// Returns whether the node existed.
    pub fn remove_node(&mut self, title: &str) -> bool {
        let existed = self.adjacency.shift_remove(title).is_some();
        for neighbors in self.adjacency.values_mut() {
            neighbors.shift_remove(title);
        }
        existed
    }

    /// Copy of the titles directly related to `title` (empty if unknown)
    pub fn neighbors(&self, title: &str) -> IndexSet<String> {
        self.adjacency.get(title).cloned().unwrap_or_default()
    }

    /// Titles exactly two hops away: neighbors of neighbors, minus the direct
    /// neighbors and `title` itself.
    pub fn related_by_two_steps(&self, title: &str) -> IndexSet<String> {
        let direct = self.neighbors(title);
        let mut related = IndexSet::new();
        for neighbor in &direct {
            let Some(second) = self.adjacency.get(neighbor) else {
                continue;
            };
            for candidate in second {
                if candidate != title && !direct.contains(candidate) {
                    related.insert(candidate.clone());
                }
            }
        }
        related
    }

    pub fn contains(&self, title: &str) -> bool {
        self.adjacency.contains_key(title)
    }

    pub fn nodes(&self) -> impl Iterator<Item = &str> {
        self.adjacency.keys().map(String::as_str)
    }

    /// Adjacency entries in node insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &IndexSet<String>)> {
        self.adjacency.iter().map(|(title, set)| (title.as_str(), set))
    }

    pub fn len(&self) -> usize {
        self.adjacency.len()
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Number of undirected edges (a self-loop counts once)
    pub fn edge_count(&self) -> usize {
        let (loops, others) = self.adjacency.iter().fold((0, 0), |(loops, others), (title, set)| {
            if set.contains(title) {
                (loops + 1, others + set.len() - 1)
            } else {
                (loops, others + set.len())
            }
        });
        loops + others / 2
    }

    /// Whether every edge is recorded in both directions
    pub fn is_symmetric(&self) -> bool {
        self.adjacency.iter().all(|(title, set)| {
            set.iter().all(|other| {
                self.adjacency
                    .get(other)
                    .is_some_and(|back| back.contains(title))
            })
        })
    }
}
