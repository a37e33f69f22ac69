//! Smart Library
//!
//! Tracks a small library's books, users, loan requests, category taxonomy
//! and book relations on hand-written containers: a singly linked record
//! store, a FIFO request queue, a LIFO action history, an n-ary category tree
//! and an undirected relation graph. [`Library`] keeps them consistent.

pub mod algorithms;
pub mod collections;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};
pub use services::Library;
