pub mod db;
pub mod error;
pub mod migrate;
pub mod paths;
pub mod snapshot;

use crate::error::{Result, StoreError};
use addrbook_core::AddressBook;
use rusqlite::Connection;
use std::path::Path;

pub struct Store {
    conn: Connection,
}

impl Store {
    pub fn open(path: &Path) -> Result<Self> {
        let conn = db::open(path)?;
        Ok(Self { conn })
    }

    pub fn open_in_memory() -> Result<Self> {
        let conn = db::open_in_memory()?;
        Ok(Self { conn })
    }

    pub fn migrate(&self) -> Result<()> {
        migrate::run_migrations(&self.conn)
    }

    pub fn schema_version(&self) -> Result<i64> {
        migrate::schema_version(&self.conn)
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    pub fn load_book(&self) -> Result<AddressBook> {
        snapshot::load_book(&self.conn)
    }

    pub fn save_book(&self, book: &AddressBook) -> Result<()> {
        snapshot::save_book(&self.conn, book)
    }

    pub fn record_count(&self) -> Result<i64> {
        snapshot::count_records(&self.conn)
    }

    /// Closes the connection and deletes the database file at `path`.
    pub fn discard(self, path: &Path) -> Result<()> {
        self.conn
            .close()
            .map_err(|(_conn, err)| StoreError::Sql(err))?;
        db::remove_files(path)
    }
}
