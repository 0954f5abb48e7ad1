// ABOUTME: Defines the Categorie record, a named grouping for articles.
// ABOUTME: Serializes with the fixed field set id, nom, description.

use serde::{Deserialize, Serialize};

/// A stored category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Categorie {
    pub id: i64,
    pub nom: String,
    pub description: Option<String>,
}

/// Field values supplied when creating or overwriting a category.
/// Every field is optional here; the store enforces which ones are required.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategorieFields {
    pub nom: Option<String>,
    pub description: Option<String>,
}
