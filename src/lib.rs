pub mod article;
pub mod error;
pub mod http;

pub use article::{Article, ArticleStore};
pub use error::RestError;
