//! SQLite storage for resource tables.
//!
//! [`Database`] owns one connection and provisions a table for every
//! [`ResourceKind`](crate::resources::ResourceKind) when opened. All reads
//! and writes go through the generic [`Repository`].

use std::path::Path;

use rusqlite::Connection;

use crate::{
    error::{DatabaseResultExt, Result},
    schema::Resource,
};

pub mod migrations;
pub mod repository;

pub use repository::Repository;

/// Database connection and operations handler.
pub struct Database {
    connection: Connection,
}

impl Database {
    /// Opens (or creates) the database file and provisions the schema.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = Connection::open(path).db_context("Failed to open database connection")?;
        Self::with_connection(connection)
    }

    /// Opens a private in-memory database with the schema provisioned.
    pub fn open_in_memory() -> Result<Self> {
        let connection =
            Connection::open_in_memory().db_context("Failed to open in-memory database")?;
        Self::with_connection(connection)
    }

    fn with_connection(connection: Connection) -> Result<Self> {
        let db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }

    /// CRUD access to the table of `R`.
    pub fn repository<R: Resource>(&self) -> Repository<'_, R> {
        Repository::new(self)
    }

    pub(crate) fn connection(&self) -> &Connection {
        &self.connection
    }
}
