//! Product model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A product row.
///
/// `id` is assigned by SQLite on insert and never changes afterwards.
/// Serialized with PascalCase keys (`ID`, `CreatedAt`, ..., `Price`), which is
/// the shape clients of the product listing already consume.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Product {
    #[serde(rename = "ID")]
    pub id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
    pub code: String,
    pub price: f64,
}

/// A product that has not been inserted yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub code: &'static str,
    pub price: f64,
}

/// Products inserted into an empty store.
pub fn sample_products() -> [NewProduct; 2] {
    [
        NewProduct {
            code: "D42",
            price: 100.0,
        },
        NewProduct {
            code: "P99",
            price: 200.0,
        },
    ]
}
