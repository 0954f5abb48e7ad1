// ABOUTME: Article CRUD on the article table, plus case-insensitive name search.
// ABOUTME: Also exports the row mapper reused by the order/article join.

use rusqlite::{OptionalExtension, Row, params};
use vente_core::{Article, ArticleFields};

use crate::store::{Store, StoreError};

/// Map the first six columns (id, nom, description, prix, quantite, categorie_id) to an Article.
pub(crate) fn article_from_row(row: &Row<'_>) -> rusqlite::Result<Article> {
    Ok(Article {
        id: row.get(0)?,
        nom: row.get(1)?,
        description: row.get(2)?,
        prix: row.get(3)?,
        quantite: row.get(4)?,
        categorie_id: row.get(5)?,
    })
}

impl Store {
    /// Insert a new article and return its id.
    pub fn create_article(&self, fields: &ArticleFields) -> Result<i64, StoreError> {
        self.conn.execute(
            "INSERT INTO article (nom, description, prix, quantite, categorie_id)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                fields.nom,
                fields.description,
                fields.prix,
                fields.quantite,
                fields.categorie_id,
            ],
        )?;
        let id = self.conn.last_insert_rowid();
        tracing::info!(id, "article created");
        Ok(id)
    }

    pub fn get_article(&self, id: i64) -> Result<Option<Article>, StoreError> {
        let article = self
            .conn
            .query_row(
                "SELECT id, nom, description, prix, quantite, categorie_id
                 FROM article WHERE id = ?1",
                params![id],
                article_from_row,
            )
            .optional()?;
        Ok(article)
    }

    pub fn list_articles(&self) -> Result<Vec<Article>, StoreError> {
        let mut stmt = self.conn.prepare(
            "SELECT id, nom, description, prix, quantite, categorie_id
             FROM article ORDER BY id",
        )?;
        let articles = stmt
            .query_map([], article_from_row)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(articles)
    }

    /// Articles whose name contains `keyword`, ignoring case.
    ///
    /// SQLite's `lower()` only folds ASCII letters, so accented capitals
    /// match only themselves. An empty keyword matches every article;
    /// callers reject it before getting here.
    pub fn search_articles(&self, keyword: &str) -> Result<Vec<Article>, StoreError> {
        let mut stmt = self.conn.prepare(
            "SELECT id, nom, description, prix, quantite, categorie_id
             FROM article WHERE instr(lower(nom), lower(?1)) > 0 ORDER BY id",
        )?;
        let articles = stmt
            .query_map(params![keyword], article_from_row)?
            .collect::<Result<Vec<_>, _>>()?;
        tracing::debug!(keyword, matches = articles.len(), "article search");
        Ok(articles)
    }

    /// Overwrite every field of an article. Returns `None` if no row has this id.
    pub fn update_article(
        &self,
        id: i64,
        fields: &ArticleFields,
    ) -> Result<Option<Article>, StoreError> {
        let changed = self.conn.execute(
            "UPDATE article
             SET nom = ?1, description = ?2, prix = ?3, quantite = ?4, categorie_id = ?5
             WHERE id = ?6",
            params![
                fields.nom,
                fields.description,
                fields.prix,
                fields.quantite,
                fields.categorie_id,
                id,
            ],
        )?;
        if changed == 0 {
            return Ok(None);
        }
        tracing::info!(id, "article updated");
        self.get_article(id)
    }

    /// Delete an article and return it as it was. Returns `None` if no row has this id.
    pub fn delete_article(&self, id: i64) -> Result<Option<Article>, StoreError> {
        let Some(article) = self.get_article(id)? else {
            return Ok(None);
        };
        self.conn
            .execute("DELETE FROM article WHERE id = ?1", params![id])?;
        tracing::info!(id, "article deleted");
        Ok(Some(article))
    }
}
