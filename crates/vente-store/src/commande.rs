// ABOUTME: Order CRUD on the commande table, assembling each order's articles by explicit join.
// ABOUTME: Deleting an order removes its order lines through the ON DELETE CASCADE key.

use std::collections::HashMap;

use chrono::NaiveDateTime;
use rusqlite::{OptionalExtension, Row, params};
use vente_core::{Article, Commande, CommandeFields};

use crate::article::article_from_row;
use crate::store::{Store, StoreError};

/// The commande row on its own, before articles are attached.
struct CommandeRow {
    id: i64,
    date: NaiveDateTime,
    client: String,
}

impl CommandeRow {
    fn with_articles(self, articles: Vec<Article>) -> Commande {
        Commande {
            id: self.id,
            date: self.date,
            client: self.client,
            articles,
        }
    }
}

fn commande_from_row(row: &Row<'_>) -> rusqlite::Result<CommandeRow> {
    Ok(CommandeRow {
        id: row.get(0)?,
        date: row.get(1)?,
        client: row.get(2)?,
    })
}

impl Store {
    /// Insert a new order and return its id. If `fields.article` is set, the
    /// order is created with one line linking that article. The order row and
    /// its line are committed together or not at all.
    pub fn create_commande(&self, fields: &CommandeFields) -> Result<i64, StoreError> {
        let tx = self.conn.unchecked_transaction()?;
        tx.execute(
            "INSERT INTO commande (date, client) VALUES (?1, ?2)",
            params![fields.date, fields.client],
        )?;
        let id = tx.last_insert_rowid();
        if let Some(article_id) = fields.article {
            self.ensure_line(id, article_id)?;
        }
        tx.commit()?;
        tracing::info!(id, "commande created");
        Ok(id)
    }

    pub fn get_commande(&self, id: i64) -> Result<Option<Commande>, StoreError> {
        let row = self
            .conn
            .query_row(
                "SELECT id, date, client FROM commande WHERE id = ?1",
                params![id],
                commande_from_row,
            )
            .optional()?;

        match row {
            Some(row) => {
                let articles = self.articles_for_commande(id)?;
                Ok(Some(row.with_articles(articles)))
            }
            None => Ok(None),
        }
    }

    /// All orders, each with its articles. Lines for every order are fetched
    /// in a single join and grouped by order id.
    pub fn list_commandes(&self) -> Result<Vec<Commande>, StoreError> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, date, client FROM commande ORDER BY id")?;
        let rows = stmt
            .query_map([], commande_from_row)?
            .collect::<Result<Vec<_>, _>>()?;

        let mut stmt = self.conn.prepare(
            "SELECT a.id, a.nom, a.description, a.prix, a.quantite, a.categorie_id, ac.commande_id
             FROM article_commande ac
             JOIN article a ON a.id = ac.article_id
             ORDER BY ac.id",
        )?;
        let lines = stmt.query_map([], |row| Ok((row.get::<_, i64>(6)?, article_from_row(row)?)))?;

        let mut by_commande: HashMap<i64, Vec<Article>> = HashMap::new();
        for line in lines {
            let (commande_id, article) = line?;
            by_commande.entry(commande_id).or_default().push(article);
        }

        Ok(rows
            .into_iter()
            .map(|row| {
                let articles = by_commande.remove(&row.id).unwrap_or_default();
                row.with_articles(articles)
            })
            .collect())
    }

    /// Overwrite the date and client of an order. Returns `None` if no row has this id.
    /// If `fields.article` is set, a line linking that article is added unless one exists.
    /// A failed link leaves the order exactly as it was.
    pub fn update_commande(
        &self,
        id: i64,
        fields: &CommandeFields,
    ) -> Result<Option<Commande>, StoreError> {
        let tx = self.conn.unchecked_transaction()?;
        let changed = tx.execute(
            "UPDATE commande SET date = ?1, client = ?2 WHERE id = ?3",
            params![fields.date, fields.client, id],
        )?;
        if changed == 0 {
            return Ok(None);
        }
        if let Some(article_id) = fields.article {
            self.ensure_line(id, article_id)?;
        }
        tx.commit()?;
        tracing::info!(id, "commande updated");
        self.get_commande(id)
    }

    /// Delete an order and its lines, returning the order as it was.
    /// Returns `None` if no row has this id.
    pub fn delete_commande(&self, id: i64) -> Result<Option<Commande>, StoreError> {
        let Some(commande) = self.get_commande(id)? else {
            return Ok(None);
        };
        self.conn
            .execute("DELETE FROM commande WHERE id = ?1", params![id])?;
        tracing::info!(id, "commande deleted");
        Ok(Some(commande))
    }

    /// Articles linked to one order, one entry per order line, in line order.
    pub fn articles_for_commande(&self, commande_id: i64) -> Result<Vec<Article>, StoreError> {
        let mut stmt = self.conn.prepare(
            "SELECT a.id, a.nom, a.description, a.prix, a.quantite, a.categorie_id
             FROM article_commande ac
             JOIN article a ON a.id = ac.article_id
             WHERE ac.commande_id = ?1
             ORDER BY ac.id",
        )?;
        let articles = stmt
            .query_map(params![commande_id], article_from_row)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(articles)
    }

    fn ensure_line(&self, commande_id: i64, article_id: i64) -> Result<(), StoreError> {
        let inserted = self.conn.execute(
            "INSERT INTO article_commande (article_id, commande_id)
             SELECT ?1, ?2
             WHERE NOT EXISTS (
                 SELECT 1 FROM article_commande WHERE article_id = ?1 AND commande_id = ?2
             )",
            params![article_id, commande_id],
        )?;
        if inserted > 0 {
            tracing::debug!(commande_id, article_id, "linked article to commande");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use vente_core::{ArticleFields, CategorieFields};

    fn at(day: u32, hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 5, day)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }

    /// Store with one category and two articles; returns the article ids.
    fn seeded_store() -> (Store, i64, i64) {
        let store = Store::open_in_memory().unwrap();
        let categorie_id = store
            .create_categorie(&CategorieFields {
                nom: Some("Papeterie".to_string()),
                description: None,
            })
            .unwrap();
        let mut ids = Vec::new();
        for nom in ["Cahier", "Stylo"] {
            ids.push(
                store
                    .create_article(&ArticleFields {
                        nom: Some(nom.to_string()),
                        description: None,
                        prix: Some(2.0),
                        quantite: Some(100),
                        categorie_id: Some(categorie_id),
                    })
                    .unwrap(),
            );
        }
        (store, ids[0], ids[1])
    }

    fn commande_fields(client: &str, article: Option<i64>) -> CommandeFields {
        CommandeFields {
            date: Some(at(3, 10)),
            client: Some(client.to_string()),
            article,
        }
    }

    #[test]
    fn create_without_article_has_empty_list() {
        let (store, _, _) = seeded_store();
        let id = store.create_commande(&commande_fields("Martin", None)).unwrap();

        let commande = store.get_commande(id).unwrap().unwrap();
        assert_eq!(commande.client, "Martin");
        assert_eq!(commande.date, at(3, 10));
        assert!(commande.articles.is_empty());
    }

    #[test]
    fn create_with_article_links_it() {
        let (store, cahier, _) = seeded_store();
        let id = store
            .create_commande(&commande_fields("Bernard", Some(cahier)))
            .unwrap();

        let commande = store.get_commande(id).unwrap().unwrap();
        assert_eq!(commande.articles.len(), 1);
        assert_eq!(commande.articles[0].nom, "Cahier");
    }

    #[test]
    fn missing_client_is_rejected() {
        let (store, _, _) = seeded_store();
        let fields = CommandeFields {
            date: Some(at(1, 8)),
            client: None,
            article: None,
        };
        assert!(store.create_commande(&fields).is_err());
    }

    #[test]
    fn update_does_not_duplicate_existing_line() {
        let (store, cahier, stylo) = seeded_store();
        let id = store
            .create_commande(&commande_fields("Petit", Some(cahier)))
            .unwrap();

        store
            .update_commande(id, &commande_fields("Petit", Some(cahier)))
            .unwrap()
            .unwrap();
        let updated = store
            .update_commande(id, &commande_fields("Petit-Durand", Some(stylo)))
            .unwrap()
            .unwrap();

        assert_eq!(updated.client, "Petit-Durand");
        let noms: Vec<&str> = updated.articles.iter().map(|a| a.nom.as_str()).collect();
        assert_eq!(noms, vec!["Cahier", "Stylo"]);
    }

    #[test]
    fn list_groups_articles_per_commande() {
        let (store, cahier, stylo) = seeded_store();
        let first = store
            .create_commande(&commande_fields("Leroy", Some(cahier)))
            .unwrap();
        let second = store.create_commande(&commande_fields("Moreau", None)).unwrap();
        store
            .update_commande(first, &commande_fields("Leroy", Some(stylo)))
            .unwrap();

        let commandes = store.list_commandes().unwrap();
        assert_eq!(commandes.len(), 2);

        let first = commandes.iter().find(|c| c.id == first).unwrap();
        assert_eq!(first.articles.len(), 2);
        let second = commandes.iter().find(|c| c.id == second).unwrap();
        assert!(second.articles.is_empty());
    }

    #[test]
    fn delete_removes_lines_and_returns_previous_state() {
        let (store, cahier, _) = seeded_store();
        let id = store
            .create_commande(&commande_fields("Girard", Some(cahier)))
            .unwrap();

        let removed = store.delete_commande(id).unwrap().unwrap();
        assert_eq!(removed.articles.len(), 1);
        assert!(store.get_commande(id).unwrap().is_none());
        assert!(store.list_article_commandes().unwrap().is_empty());
        assert!(store.delete_commande(id).unwrap().is_none());
    }

    #[test]
    fn failed_link_on_create_leaves_no_commande() {
        let (store, cahier, _) = seeded_store();
        let result = store.create_commande(&commande_fields("Fantome", Some(cahier + 999)));
        assert!(matches!(result, Err(StoreError::Sqlite(_))));
        assert!(store.list_commandes().unwrap().is_empty());
        assert!(store.list_article_commandes().unwrap().is_empty());
    }

    #[test]
    fn failed_link_on_update_keeps_previous_row() {
        let (store, cahier, _) = seeded_store();
        let id = store
            .create_commande(&commande_fields("Avant", Some(cahier)))
            .unwrap();

        let changed = CommandeFields {
            date: Some(at(20, 18)),
            client: Some("Apres".to_string()),
            article: Some(cahier + 999),
        };
        assert!(store.update_commande(id, &changed).is_err());

        let commande = store.get_commande(id).unwrap().unwrap();
        assert_eq!(commande.client, "Avant");
        assert_eq!(commande.date, at(3, 10));
        assert_eq!(commande.articles.len(), 1);
    }

    #[test]
    fn update_unknown_id_yields_none() {
        let (store, _, _) = seeded_store();
        assert!(
            store
                .update_commande(7, &commande_fields("Personne", None))
                .unwrap()
                .is_none()
        );
    }
}
