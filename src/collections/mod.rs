//! Hand-written containers backing the library session

pub mod category_tree;
pub mod linked_list;
pub mod queue;
pub mod relation_graph;
pub mod stack;

pub use category_tree::{parse_category_path, CategoryNode};
pub use linked_list::LinkedList;
pub use queue::RequestQueue;
pub use relation_graph::RelationGraph;
pub use stack::ActionHistory;
