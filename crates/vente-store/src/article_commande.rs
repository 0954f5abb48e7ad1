// ABOUTME: Order line CRUD on the article_commande association table.

use rusqlite::{OptionalExtension, Row, params};
use vente_core::{ArticleCommande, ArticleCommandeFields};

use crate::store::{Store, StoreError};

fn article_commande_from_row(row: &Row<'_>) -> rusqlite::Result<ArticleCommande> {
    Ok(ArticleCommande {
        id: row.get(0)?,
        article_id: row.get(1)?,
        commande_id: row.get(2)?,
    })
}

impl Store {
    /// Insert a new order line and return its id.
    pub fn create_article_commande(
        &self,
        fields: &ArticleCommandeFields,
    ) -> Result<i64, StoreError> {
        self.conn.execute(
            "INSERT INTO article_commande (article_id, commande_id) VALUES (?1, ?2)",
            params![fields.article_id, fields.commande_id],
        )?;
        let id = self.conn.last_insert_rowid();
        tracing::info!(id, "article_commande created");
        Ok(id)
    }

    pub fn get_article_commande(&self, id: i64) -> Result<Option<ArticleCommande>, StoreError> {
        let ligne = self
            .conn
            .query_row(
                "SELECT id, article_id, commande_id FROM article_commande WHERE id = ?1",
                params![id],
                article_commande_from_row,
            )
            .optional()?;
        Ok(ligne)
    }

    pub fn list_article_commandes(&self) -> Result<Vec<ArticleCommande>, StoreError> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, article_id, commande_id FROM article_commande ORDER BY id")?;
        let lignes = stmt
            .query_map([], article_commande_from_row)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(lignes)
    }

    /// Overwrite both links of an order line. Returns `None` if no row has this id.
    pub fn update_article_commande(
        &self,
        id: i64,
        fields: &ArticleCommandeFields,
    ) -> Result<Option<ArticleCommande>, StoreError> {
        let changed = self.conn.execute(
            "UPDATE article_commande SET article_id = ?1, commande_id = ?2 WHERE id = ?3",
            params![fields.article_id, fields.commande_id, id],
        )?;
        if changed == 0 {
            return Ok(None);
        }
        tracing::info!(id, "article_commande updated");
        self.get_article_commande(id)
    }

    /// Delete an order line and return it as it was. Returns `None` if no row has this id.
    pub fn delete_article_commande(
        &self,
        id: i64,
    ) -> Result<Option<ArticleCommande>, StoreError> {
        let Some(ligne) = self.get_article_commande(id)? else {
            return Ok(None);
        };
        self.conn
            .execute("DELETE FROM article_commande WHERE id = ?1", params![id])?;
        tracing::info!(id, "article_commande deleted");
        Ok(Some(ligne))
    }
}
