//! Storage layer: the five containers behind a library session

pub mod snapshot;

use crate::{
    collections::{ActionHistory, CategoryNode, LinkedList, RelationGraph, RequestQueue},
    models::{Book, HistoryEntry, LoanRequest, User},
};

pub use snapshot::Snapshot;

/// Owns one instance of every container. Cross-container consistency is the
/// job of [`crate::services::Library`]; nothing here knows about the others.
#[derive(Debug, Clone)]
pub struct Repository {
    pub books: LinkedList<Book>,
    pub users: LinkedList<User>,
    pub loan_queue: RequestQueue<LoanRequest>,
    pub history: ActionHistory<HistoryEntry>,
    pub categories: CategoryNode,
    pub relations: RelationGraph,
}

impl Repository {
    /// Empty containers with a category tree rooted at `root_category`
    pub fn new(root_category: &str) -> Self {
        Self {
            books: LinkedList::new(),
            users: LinkedList::new(),
            loan_queue: RequestQueue::new(),
            history: ActionHistory::new(),
            categories: CategoryNode::new(root_category),
            relations: RelationGraph::new(),
        }
    }

    /// Rebuild the containers from a decoded snapshot.
    ///
    /// A snapshot without a category tree gets a fresh root named
    /// `root_category`.
    pub fn from_snapshot(snapshot: Snapshot, root_category: &str) -> Self {
        Self {
            books: snapshot.books.into_iter().collect(),
            users: snapshot.users.into_iter().collect(),
            loan_queue: snapshot.loan_requests.into_iter().collect(),
            history: snapshot.history.into_iter().collect(),
            categories: snapshot
                .categories
                .unwrap_or_else(|| CategoryNode::new(root_category)),
            relations: snapshot.relations,
        }
    }

    pub fn to_snapshot(&self) -> Snapshot {
        Snapshot {
            books: self.books.to_vec(),
            users: self.users.to_vec(),
            history: self.history.iter().cloned().collect(),
            categories: Some(self.categories.clone()),
            relations: self.relations.clone(),
            loan_requests: self.loan_queue.iter().cloned().collect(),
        }
    }
}
