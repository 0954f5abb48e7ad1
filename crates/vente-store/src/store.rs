// ABOUTME: The Store handle owning the SQLite connection, plus open/close and schema setup.
// ABOUTME: Entity operations live in sibling modules as additional impl blocks on Store.

use std::path::Path;

use rusqlite::Connection;
use thiserror::Error;

/// Errors that can occur during storage operations.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

/// Table definitions. Every statement is idempotent and never drops data.
const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS categorie (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    nom VARCHAR(80) NOT NULL,
    description VARCHAR(120)
);

CREATE TABLE IF NOT EXISTS article (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    nom VARCHAR(80) NOT NULL,
    description VARCHAR(120),
    prix REAL NOT NULL,
    quantite INTEGER NOT NULL,
    categorie_id INTEGER NOT NULL,
    FOREIGN KEY (categorie_id) REFERENCES categorie(id)
);

CREATE TABLE IF NOT EXISTS commande (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    date DATETIME NOT NULL,
    client VARCHAR(80) NOT NULL
);

CREATE TABLE IF NOT EXISTS article_commande (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    article_id INTEGER NOT NULL,
    commande_id INTEGER NOT NULL,
    FOREIGN KEY (article_id) REFERENCES article(id),
    FOREIGN KEY (commande_id) REFERENCES commande(id) ON DELETE CASCADE
);
";

/// The storage layer: one SQLite connection holding the four vente tables.
///
/// A Store is opened once at process start and closed on shutdown. It is not
/// `Sync`; callers share it behind a mutex.
pub struct Store {
    pub(crate) conn: Connection,
}

impl Store {
    /// Open or create the database at the given path and create any missing tables.
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        let conn = Connection::open(path)?;
        conn.execute_batch("PRAGMA journal_mode=WAL;")?;
        tracing::info!(path = %path.display(), "opened database");
        Self::init(conn)
    }

    /// Open a private in-memory database with the full schema.
    pub fn open_in_memory() -> Result<Self, StoreError> {
        Self::init(Connection::open_in_memory()?)
    }

    fn init(conn: Connection) -> Result<Self, StoreError> {
        conn.execute_batch("PRAGMA foreign_keys=ON;")?;
        conn.execute_batch(SCHEMA)?;
        tracing::debug!("schema ready");
        Ok(Self { conn })
    }

    /// Close the underlying connection, reporting any error SQLite raises while doing so.
    pub fn close(self) -> Result<(), StoreError> {
        self.conn.close().map_err(|(_, e)| StoreError::Sqlite(e))?;
        tracing::info!("database closed");
        Ok(())
    }
}
