//! Article domain model (the author/magazine join record).
//!
//! # Invariants
//! - `title` length stays within `[5, 50]` characters and never changes.
//! - `author` and `magazine` always name entities registered in the owning
//!   catalog; the catalog service checks this before assigning.

use crate::model::ids::{ArticleId, AuthorId, MagazineId};
use crate::model::validation::{validate_title, ImmutableFieldError, ValidationError};

/// Links exactly one author to exactly one magazine under a fixed title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    id: ArticleId,
    author: AuthorId,
    magazine: MagazineId,
    title: String,
}

impl Article {
    /// Creates an unregistered article.
    ///
    /// Only the title is checked here; endpoint membership is the catalog's
    /// concern.
    pub fn new(
        author: AuthorId,
        magazine: MagazineId,
        title: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let title = title.into();
        validate_title(&title)?;
        Ok(Self {
            id: ArticleId::new(),
            author,
            magazine,
            title,
        })
    }

    pub fn id(&self) -> ArticleId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Always fails: titles cannot change after construction.
    pub fn set_title(&mut self, _title: impl Into<String>) -> Result<(), ImmutableFieldError> {
        Err(ImmutableFieldError {
            entity: "article",
            field: "title",
        })
    }

    pub fn author(&self) -> AuthorId {
        self.author
    }

    pub fn magazine(&self) -> MagazineId {
        self.magazine
    }

    pub(crate) fn set_author(&mut self, author: AuthorId) {
        self.author = author;
    }

    pub(crate) fn set_magazine(&mut self, magazine: MagazineId) {
        self.magazine = magazine;
    }
}
