// ABOUTME: Defines the Commande record, a client purchase with its linked articles.
// ABOUTME: The article list is assembled by the store from order lines, never stored inline.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::article::Article;

/// A stored order together with the articles linked to it through order lines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Commande {
    pub id: i64,
    pub date: NaiveDateTime,
    pub client: String,
    pub articles: Vec<Article>,
}

/// Field values supplied when creating or overwriting an order.
///
/// `article` is an optional article id. When set, the store makes sure an
/// order line links that article to the order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CommandeFields {
    pub date: Option<NaiveDateTime>,
    pub client: Option<String>,
    pub article: Option<i64>,
}
