//! Catalog repository contract and in-memory registry.
//!
//! # Responsibility
//! - Hold every author, magazine, and article of one catalog.
//! - Maintain the three article collections (global registry, author list,
//!   magazine list) as one unit on insert.
//!
//! # Invariants
//! - Registries preserve registration order and only grow.
//! - `insert_article` either appends to all three collections or to none.
//! - Ids are unique per entity kind within one repository.

use crate::model::article::Article;
use crate::model::author::Author;
use crate::model::ids::{ArticleId, AuthorId, MagazineId};
use crate::model::magazine::Magazine;
use std::collections::HashMap;
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for catalog storage operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoError {
    DuplicateId(Uuid),
    AuthorNotFound(AuthorId),
    MagazineNotFound(MagazineId),
    ArticleNotFound(ArticleId),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateId(id) => write!(f, "id already registered: {id}"),
            Self::AuthorNotFound(id) => write!(f, "author not found: {id}"),
            Self::MagazineNotFound(id) => write!(f, "magazine not found: {id}"),
            Self::ArticleNotFound(id) => write!(f, "article not found: {id}"),
        }
    }
}

impl Error for RepoError {}

/// Storage contract for the explicit catalog registry.
pub trait CatalogRepository {
    fn insert_author(&mut self, author: Author) -> RepoResult<AuthorId>;
    fn insert_magazine(&mut self, magazine: Magazine) -> RepoResult<MagazineId>;
    /// Registers `article` and appends it to both endpoints' lists.
    fn insert_article(&mut self, article: Article) -> RepoResult<ArticleId>;

    fn author(&self, id: AuthorId) -> Option<&Author>;
    fn author_mut(&mut self, id: AuthorId) -> Option<&mut Author>;
    fn magazine(&self, id: MagazineId) -> Option<&Magazine>;
    fn magazine_mut(&mut self, id: MagazineId) -> Option<&mut Magazine>;
    fn article(&self, id: ArticleId) -> Option<&Article>;
    fn article_mut(&mut self, id: ArticleId) -> Option<&mut Article>;

    /// Author ids in registration order.
    fn author_ids(&self) -> &[AuthorId];
    /// Magazine ids in registration order.
    fn magazine_ids(&self) -> &[MagazineId];
    /// Article ids in creation order.
    fn article_ids(&self) -> &[ArticleId];
}

/// Process-local registry backed by ordered id lists and hash indexes.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalogRepository {
    authors: HashMap<AuthorId, Author>,
    magazines: HashMap<MagazineId, Magazine>,
    articles: HashMap<ArticleId, Article>,
    author_order: Vec<AuthorId>,
    magazine_order: Vec<MagazineId>,
    article_order: Vec<ArticleId>,
}

impl InMemoryCatalogRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CatalogRepository for InMemoryCatalogRepository {
    fn insert_author(&mut self, author: Author) -> RepoResult<AuthorId> {
        let id = author.id();
        if self.authors.contains_key(&id) {
            return Err(RepoError::DuplicateId(id.as_uuid()));
        }
        self.authors.insert(id, author);
        self.author_order.push(id);
        Ok(id)
    }

    fn insert_magazine(&mut self, magazine: Magazine) -> RepoResult<MagazineId> {
        let id = magazine.id();
        if self.magazines.contains_key(&id) {
            return Err(RepoError::DuplicateId(id.as_uuid()));
        }
        self.magazines.insert(id, magazine);
        self.magazine_order.push(id);
        Ok(id)
    }

    fn insert_article(&mut self, article: Article) -> RepoResult<ArticleId> {
        let id = article.id();
        if self.articles.contains_key(&id) {
            return Err(RepoError::DuplicateId(id.as_uuid()));
        }
        // Resolve both endpoints before the first append.
        let author_id = article.author();
        let magazine_id = article.magazine();
        if !self.authors.contains_key(&author_id) {
            return Err(RepoError::AuthorNotFound(author_id));
        }
        let magazine = self
            .magazines
            .get_mut(&magazine_id)
            .ok_or(RepoError::MagazineNotFound(magazine_id))?;

        magazine.push_article(id);
        if let Some(author) = self.authors.get_mut(&author_id) {
            author.push_article(id);
        }
        self.articles.insert(id, article);
        self.article_order.push(id);
        Ok(id)
    }

    fn author(&self, id: AuthorId) -> Option<&Author> {
        self.authors.get(&id)
    }

    fn author_mut(&mut self, id: AuthorId) -> Option<&mut Author> {
        self.authors.get_mut(&id)
    }

    fn magazine(&self, id: MagazineId) -> Option<&Magazine> {
        self.magazines.get(&id)
    }

    fn magazine_mut(&mut self, id: MagazineId) -> Option<&mut Magazine> {
        self.magazines.get_mut(&id)
    }

    fn article(&self, id: ArticleId) -> Option<&Article> {
        self.articles.get(&id)
    }

    fn article_mut(&mut self, id: ArticleId) -> Option<&mut Article> {
        self.articles.get_mut(&id)
    }

    fn author_ids(&self) -> &[AuthorId] {
        &self.author_order
    }

    fn magazine_ids(&self) -> &[MagazineId] {
        &self.magazine_order
    }

    fn article_ids(&self) -> &[ArticleId] {
        &self.article_order
    }
}
