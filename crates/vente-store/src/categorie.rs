// ABOUTME: Category CRUD on the categorie table.

use rusqlite::{OptionalExtension, Row, params};
use vente_core::{Categorie, CategorieFields};

use crate::store::{Store, StoreError};

fn categorie_from_row(row: &Row<'_>) -> rusqlite::Result<Categorie> {
    Ok(Categorie {
        id: row.get(0)?,
        nom: row.get(1)?,
        description: row.get(2)?,
    })
}

impl Store {
    /// Insert a new category and return its id.
    pub fn create_categorie(&self, fields: &CategorieFields) -> Result<i64, StoreError> {
        self.conn.execute(
            "INSERT INTO categorie (nom, description) VALUES (?1, ?2)",
            params![fields.nom, fields.description],
        )?;
        let id = self.conn.last_insert_rowid();
        tracing::info!(id, "categorie created");
        Ok(id)
    }

    pub fn get_categorie(&self, id: i64) -> Result<Option<Categorie>, StoreError> {
        let categorie = self
            .conn
            .query_row(
                "SELECT id, nom, description FROM categorie WHERE id = ?1",
                params![id],
                categorie_from_row,
            )
            .optional()?;
        Ok(categorie)
    }

    pub fn list_categories(&self) -> Result<Vec<Categorie>, StoreError> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, nom, description FROM categorie ORDER BY id")?;
        let categories = stmt
            .query_map([], categorie_from_row)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(categories)
    }

    /// Overwrite every field of a category. Returns `None` if no row has this id.
    pub fn update_categorie(
        &self,
        id: i64,
        fields: &CategorieFields,
    ) -> Result<Option<Categorie>, StoreError> {
        let changed = self.conn.execute(
            "UPDATE categorie SET nom = ?1, description = ?2 WHERE id = ?3",
            params![fields.nom, fields.description, id],
        )?;
        if changed == 0 {
            return Ok(None);
        }
        tracing::info!(id, "categorie updated");
        self.get_categorie(id)
    }

    /// Delete a category and return it as it was. Returns `None` if no row has this id.
    pub fn delete_categorie(&self, id: i64) -> Result<Option<Categorie>, StoreError> {
        let Some(categorie) = self.get_categorie(id)? else {
            return Ok(None);
        };
        self.conn
            .execute("DELETE FROM categorie WHERE id = ?1", params![id])?;
        tracing::info!(id, "categorie deleted");
        Ok(Some(categorie))
    }
}
