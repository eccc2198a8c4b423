//! Product store.
//!
//! A single SQLite table of products, created on open and seeded with sample
//! rows when empty. After startup the table is only read.

mod error;
mod product;
mod sqlite;

pub use error::{StoreError, StoreResult};
pub use product::{NewProduct, Product, sample_products};
pub use sqlite::ProductStore;
