//! SQLite-backed product store.

use chrono::Utc;
use rusqlite::{Connection, OpenFlags, params};
use std::path::Path;
use std::sync::{Mutex, MutexGuard, PoisonError};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use super::error::{StoreError, StoreResult};
use super::product::{Product, sample_products};

/// Bumped whenever `SCHEMA` changes shape.
const SCHEMA_VERSION: i64 = 1;

const SCHEMA: &str = "
    CREATE TABLE IF NOT EXISTS products (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        code TEXT NOT NULL,
        price REAL NOT NULL,
        created_at TEXT NOT NULL,
        updated_at TEXT NOT NULL,
        deleted_at TEXT
    );
    CREATE INDEX IF NOT EXISTS idx_products_deleted_at ON products (deleted_at);
";

/// Product store over a single SQLite connection.
///
/// The connection sits behind a mutex, so seeding and listing never overlap
/// even when the transport delivers requests concurrently.
pub struct ProductStore {
    conn: Mutex<Connection>,
}

impl ProductStore {
    /// Open (or create) the database at `path` and make sure the schema exists.
    pub fn open<P: AsRef<Path>>(path: P) -> StoreResult<Self> {
        let path = path.as_ref();
        info!("Opening product database at {}", path.display());

        let conn = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_WRITE
                | OpenFlags::SQLITE_OPEN_CREATE
                | OpenFlags::SQLITE_OPEN_URI
                | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )
        .map_err(StoreError::Connection)?;

        Self::with_connection(conn)
    }

    /// Open a private in-memory database.
    pub fn open_in_memory() -> StoreResult<Self> {
        let conn = Connection::open_in_memory().map_err(StoreError::Connection)?;
        Self::with_connection(conn)
    }

    fn with_connection(conn: Connection) -> StoreResult<Self> {
        migrate(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn lock(&self) -> MutexGuard<'_, Connection> {
        // A panic while holding the lock leaves the connection itself usable.
        self.conn.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Number of live (not soft-deleted) products.
    pub fn count(&self) -> StoreResult<usize> {
        let conn = self.lock();
        count_live(&conn).map_err(StoreError::Retrieval)
    }

    /// Insert the sample products if the table holds no live rows.
    ///
    /// Returns how many rows were inserted, zero when the store was already
    /// populated. The count and the inserts happen under one lock, in one
    /// transaction.
    pub fn seed_if_empty(&self) -> StoreResult<usize> {
        let mut conn = self.lock();

        let count = count_live(&conn).map_err(StoreError::Seed)?;
        if count > 0 {
            debug!("Product table already has {} rows, skipping seed", count);
            return Ok(0);
        }

        let tx = conn.transaction().map_err(StoreError::Seed)?;
        let now = Utc::now();
        let samples = sample_products();
        {
            let mut stmt = tx
                .prepare(
                    "INSERT INTO products (code, price, created_at, updated_at)
                     VALUES (?1, ?2, ?3, ?3)",
                )
                .map_err(StoreError::Seed)?;
            for product in &samples {
                stmt.execute(params![product.code, product.price, now])
                    .map_err(StoreError::Seed)?;
            }
        }
        tx.commit().map_err(StoreError::Seed)?;

        info!("Database seeded with {} sample products", samples.len());
        Ok(samples.len())
    }

    /// All live products ordered by id.
    pub fn list_all(&self, ct: &CancellationToken) -> StoreResult<Vec<Product>> {
        if ct.is_cancelled() {
            return Err(StoreError::Cancelled);
        }

        let conn = self.lock();
        let mut stmt = conn
            .prepare_cached(
                "SELECT id, code, price, created_at, updated_at, deleted_at
                 FROM products
                 WHERE deleted_at IS NULL
                 ORDER BY id ASC",
            )
            .map_err(StoreError::Retrieval)?;

        let rows = stmt
            .query_map([], |row| {
                Ok(Product {
                    id: row.get(0)?,
                    code: row.get(1)?,
                    price: row.get(2)?,
                    created_at: row.get(3)?,
                    updated_at: row.get(4)?,
                    deleted_at: row.get(5)?,
                })
            })
            .map_err(StoreError::Retrieval)?;

        rows.collect::<Result<Vec<_>, _>>()
            .map_err(StoreError::Retrieval)
    }
}

fn migrate(conn: &Connection) -> StoreResult<()> {
    conn.execute_batch(SCHEMA).map_err(StoreError::Migration)?;

    let version: i64 = conn
        .query_row("PRAGMA user_version", [], |r| r.get(0))
        .map_err(StoreError::Migration)?;
    if version < SCHEMA_VERSION {
        conn.pragma_update(None, "user_version", SCHEMA_VERSION)
            .map_err(StoreError::Migration)?;
        info!("Product schema migrated to version {}", SCHEMA_VERSION);
    }
    Ok(())
}

fn count_live(conn: &Connection) -> rusqlite::Result<usize> {
    conn.query_row(
        "SELECT COUNT(*) FROM products WHERE deleted_at IS NULL",
        [],
        |r| r.get(0),
    )
}
