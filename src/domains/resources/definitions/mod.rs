//! Resource definitions module.
//!
//! Each resource is defined in its own file with its URI, metadata and a
//! `ResourceHandler` implementation.

pub mod products;

pub use products::ProductListResource;
