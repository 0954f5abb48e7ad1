// ABOUTME: Defines the Article record, a sellable item with price and stock quantity.
// ABOUTME: Each article belongs to exactly one category through categorie_id.

use serde::{Deserialize, Serialize};

/// A stored article. Serialized fields: id, nom, description, prix, quantite, categorie_id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    pub id: i64,
    pub nom: String,
    pub description: Option<String>,
    pub prix: f64,
    pub quantite: i64,
    pub categorie_id: i64,
}

/// Field values supplied when creating or overwriting an article.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArticleFields {
    pub nom: Option<String>,
    pub description: Option<String>,
    pub prix: Option<f64>,
    pub quantite: Option<i64>,
    pub categorie_id: Option<i64>,
}
