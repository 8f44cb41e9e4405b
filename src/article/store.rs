use std::collections::HashMap;

use chrono::Utc;
use uuid::Uuid;

use crate::article::error::ArticleError;
use crate::article::types::{Article, ArticleUpdate, NewArticle};

/// In-memory keyed collection of articles. The store exclusively owns every
/// record; callers only ever receive clones, so no references survive across
/// calls. State lives in process memory and is lost on restart.
#[derive(Debug, Default)]
pub struct ArticleStore {
    articles: HashMap<Uuid, Article>,
}

impl ArticleStore {
    pub fn new() -> Self {
        Self {
            articles: HashMap::new(),
        }
    }

    /// Validates all fields, then inserts a new record with a fresh v4 id
    /// and both timestamps set to the same instant.
    pub fn create(&mut self, new: NewArticle) -> Result<Article, ArticleError> {
        new.validate()?;

        let now = Utc::now();
        let article = Article {
            id: Uuid::new_v4(),
            title: new.title,
            content: new.content,
            author: new.author,
            created_at: now,
            updated_at: now,
        };

        self.articles.insert(article.id, article.clone());
        Ok(article)
    }

    /// All current records. Iteration order is not meaningful.
    pub fn list(&self) -> Vec<Article> {
        self.articles.values().cloned().collect()
    }

    pub fn get(&self, id: &Uuid) -> Result<Article, ArticleError> {
        self.articles.get(id).cloned().ok_or(ArticleError::NotFound)
    }

    /// Merges the supplied fields onto the stored record. Only supplied
    /// fields are validated or changed; `updated_at` is refreshed on every
    /// successful call, even when the payload is empty. A validation failure
    /// leaves the record completely untouched.
    pub fn update(&mut self, id: &Uuid, update: ArticleUpdate) -> Result<Article, ArticleError> {
        update.validate()?;

        let article = self.articles.get_mut(id).ok_or(ArticleError::NotFound)?;

        if let Some(title) = update.title {
            article.title = title;
        }
        if let Some(content) = update.content {
            article.content = content;
        }
        if let Some(author) = update.author {
            article.author = author;
        }
        article.updated_at = Utc::now();

        Ok(article.clone())
    }

    /// Removes the record. v4 ids are never reassigned, so a removed id
    /// stays invalid for lookup forever.
    pub fn remove(&mut self, id: &Uuid) -> Result<(), ArticleError> {
        self.articles
            .remove(id)
            .map(|_| ())
            .ok_or(ArticleError::NotFound)
    }

    pub fn len(&self) -> usize {
        self.articles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::article::types::{AUTHOR_MAX_CHARS, TITLE_MAX_CHARS};

    fn new_article() -> NewArticle {
        NewArticle {
            title: "Test Article".to_string(),
            content: "This is a test article content".to_string(),
            author: "Test Author".to_string(),
        }
    }

    #[test]
    fn create_assigns_unique_ids_and_equal_timestamps() {
        let mut store = ArticleStore::new();

        let first = store.create(new_article()).unwrap();
        let second = store.create(new_article()).unwrap();

        assert_ne!(first.id, second.id);
        assert_eq!(first.created_at, first.updated_at);
        assert_eq!(second.created_at, second.updated_at);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn create_rejects_invalid_fields_without_inserting() {
        let mut store = ArticleStore::new();

        let cases = [
            NewArticle {
                title: String::new(),
                ..new_article()
            },
            NewArticle {
                title: "x".repeat(TITLE_MAX_CHARS + 1),
                ..new_article()
            },
            NewArticle {
                content: String::new(),
                ..new_article()
            },
            NewArticle {
                author: String::new(),
                ..new_article()
            },
            NewArticle {
                author: "x".repeat(AUTHOR_MAX_CHARS + 1),
                ..new_article()
            },
        ];

        for case in cases {
            let err = store.create(case).unwrap_err();
            assert!(matches!(err, ArticleError::Validation { .. }));
        }

        assert!(store.is_empty());
    }

    #[test]
    fn create_accepts_fields_at_the_length_limits() {
        let mut store = ArticleStore::new();

        let article = store
            .create(NewArticle {
                title: "x".repeat(TITLE_MAX_CHARS),
                content: "y".to_string(),
                author: "z".repeat(AUTHOR_MAX_CHARS),
            })
            .unwrap();

        assert_eq!(article.title.len(), TITLE_MAX_CHARS);
        assert_eq!(article.author.len(), AUTHOR_MAX_CHARS);
    }

    #[test]
    fn unknown_id_is_not_found() {
        let mut store = ArticleStore::new();
        let id = Uuid::new_v4();

        assert_eq!(store.get(&id).unwrap_err(), ArticleError::NotFound);
        assert_eq!(
            store.update(&id, ArticleUpdate::default()).unwrap_err(),
            ArticleError::NotFound
        );
        assert_eq!(store.remove(&id).unwrap_err(), ArticleError::NotFound);
    }

    #[test]
    fn partial_update_changes_only_supplied_fields() {
        let mut store = ArticleStore::new();
        let created = store.create(new_article()).unwrap();

        let updated = store
            .update(
                &created.id,
                ArticleUpdate {
                    title: Some("Updated Title".to_string()),
                    content: Some("Updated content".to_string()),
                    author: None,
                },
            )
            .unwrap();

        assert_eq!(updated.title, "Updated Title");
        assert_eq!(updated.content, "Updated content");
        assert_eq!(updated.author, created.author);
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.created_at, created.created_at);
        assert!(updated.updated_at >= created.updated_at);
    }

    #[test]
    fn empty_update_still_refreshes_updated_at() {
        let mut store = ArticleStore::new();
        let created = store.create(new_article()).unwrap();

        let updated = store
            .update(&created.id, ArticleUpdate::default())
            .unwrap();

        assert_eq!(updated.title, created.title);
        assert_eq!(updated.content, created.content);
        assert_eq!(updated.author, created.author);
        assert!(updated.updated_at >= created.updated_at);
    }

    #[test]
    fn failed_update_validation_leaves_record_untouched() {
        let mut store = ArticleStore::new();
        let created = store.create(new_article()).unwrap();

        let err = store
            .update(
                &created.id,
                ArticleUpdate {
                    title: Some(String::new()),
                    content: Some("Updated content".to_string()),
                    author: None,
                },
            )
            .unwrap_err();
        assert!(matches!(err, ArticleError::Validation { .. }));

        let stored = store.get(&created.id).unwrap();
        assert_eq!(stored.title, created.title);
        assert_eq!(stored.content, created.content);
        assert_eq!(stored.updated_at, created.updated_at);
    }

    #[test]
    fn remove_then_get_is_not_found() {
        let mut store = ArticleStore::new();
        let created = store.create(new_article()).unwrap();

        store.remove(&created.id).unwrap();

        assert_eq!(store.get(&created.id).unwrap_err(), ArticleError::NotFound);
        assert!(store.is_empty());
    }

    #[test]
    fn len_tracks_creates_minus_removes() {
        let mut store = ArticleStore::new();

        let a = store.create(new_article()).unwrap();
        let _b = store.create(new_article()).unwrap();
        let c = store.create(new_article()).unwrap();
        assert_eq!(store.len(), 3);
        assert_eq!(store.list().len(), 3);

        store.remove(&a.id).unwrap();
        store.remove(&c.id).unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(store.list().len(), 1);
    }
}
