//! Type-safe Key-Value storage for the STK storefront.
//!
//! Provides the browser-style "local storage" slot the cart is mirrored to:
//! a [`KvStore`] trait with in-memory and file-backed implementations, and a
//! [`Cache`] wrapper that adds automatic JSON serialization.
//!
//! # Example
//!
//! ```rust
//! use stk_cache::{Cache, MemoryStore};
//! use serde::{Serialize, Deserialize};
//!
//! #[derive(Serialize, Deserialize, PartialEq, Debug)]
//! struct Line {
//!     id: u32,
//!     quantity: u32,
//! }
//!
//! let mut cache = Cache::new(MemoryStore::new());
//!
//! // Store a value
//! cache.set("cart", &vec![Line { id: 1, quantity: 2 }]).unwrap();
//!
//! // Retrieve a value
//! let lines: Option<Vec<Line>> = cache.get("cart").unwrap();
//! assert_eq!(lines.unwrap()[0].quantity, 2);
//!
//! // Setting again replaces the whole value
//! cache.set("cart", &Vec::<Line>::new()).unwrap();
//! assert_eq!(cache.store().get_str("cart"), Some("[]"));
//! ```

mod error;
mod kv;

pub use error::CacheError;
pub use kv::{Cache, FileStore, KvStore, MemoryStore};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{Cache, CacheError, FileStore, KvStore, MemoryStore};
}
