pub mod error;
pub mod store;
pub mod types;

pub use error::ArticleError;
pub use store::ArticleStore;
pub use types::{Article, ArticleUpdate, NewArticle};
