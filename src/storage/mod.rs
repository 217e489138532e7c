//! Persistence layer for habitual.
//!
//! One JSON document holds the entire dataset; see [`Store`].

mod store;

pub use store::Store;
