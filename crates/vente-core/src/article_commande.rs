// ABOUTME: Defines the ArticleCommande record, one line linking an article to an order.
// ABOUTME: Serializes as id, article_id, commande_id.

use serde::{Deserialize, Serialize};

/// A stored order line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArticleCommande {
    pub id: i64,
    pub article_id: i64,
    pub commande_id: i64,
}

/// Field values supplied when creating or overwriting an order line.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArticleCommandeFields {
    pub article_id: Option<i64>,
    pub commande_id: Option<i64>,
}
