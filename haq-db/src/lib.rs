//! In-memory SQLite database layer for the HAQ indicator dataset.
//!
//! This crate loads the indicator CSV into an in-memory SQLite database and
//! exposes typed query methods for the dashboard's chart components and the
//! command line tool.
//!
//! # Architecture
//!
//! - `Rc<RefCell<Connection>>` wrapper for interior mutability in single-threaded WASM
//! - In-memory SQLite via `rusqlite` (compiles to WASM via `wasm32-unknown-unknown`)
//! - CSV text is fetched at runtime by the dashboard, read from disk by the CLI
//! - Typed query methods returning serializable structs from [`models`]
//!
//! # Usage
//!
//! ```rust
//! use haq_db::Database;
//!
//! let db = Database::new().unwrap();
//! db.load_indicators("location_name,year_id,indicator_name,val,haq_index_age_type\n\
//!                     India,2019,HAQ Index,41.2,\n").unwrap();
//!
//! let lookup = db.query_haq_lookup("2019").unwrap();
//! assert_eq!(lookup.get("India"), Some(&41.2));
//! ```
//!
//! # Ordering
//!
//! Rows keep their CSV position in the `id` column. Every query that can
//! see duplicates orders by `id`, so "first match" and "last write wins"
//! are both defined relative to dataset order.

pub mod schema;
mod loader;
mod queries;
pub mod models;

use rusqlite::Connection;
use std::cell::RefCell;
use std::rc::Rc;

/// In-memory SQLite database holding the indicator table.
///
/// This struct is cheaply cloneable (via `Rc`) and suitable for sharing
/// across Dioxus components in a single-threaded WASM environment.
#[derive(Clone)]
pub struct Database {
    conn: Rc<RefCell<Connection>>,
}

impl Database {
    /// Create a new in-memory database with the schema applied.
    ///
    /// The database is empty after creation; use
    /// [`load_indicators`](Self::load_indicators) to populate it.
    pub fn new() -> anyhow::Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch(schema::create_schema())?;
        Ok(Self {
            conn: Rc::new(RefCell::new(conn)),
        })
    }
}

impl PartialEq for Database {
    /// Two handles are equal when they share the same connection.
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.conn, &other.conn)
    }
}
