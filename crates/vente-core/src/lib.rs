// ABOUTME: Core library for vente, containing the domain records shared by store and server.
// ABOUTME: Defines categories, articles, orders, order lines and query parameter parsing.

pub mod article;
pub mod article_commande;
pub mod categorie;
pub mod commande;
pub mod params;

pub use article::{Article, ArticleFields};
pub use article_commande::{ArticleCommande, ArticleCommandeFields};
pub use categorie::{Categorie, CategorieFields};
pub use commande::{Commande, CommandeFields};
pub use params::ParamError;
