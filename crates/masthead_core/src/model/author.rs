//! Author domain model.
//!
//! # Invariants
//! - `name` is non-blank and fixed after construction.
//! - `articles` is a back-reference list in registration order; it is only
//!   appended to by the catalog repository.

use crate::model::ids::{ArticleId, AuthorId};
use crate::model::validation::{validate_author_name, ImmutableFieldError, ValidationError};

/// A named participant who writes articles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Author {
    id: AuthorId,
    name: String,
    articles: Vec<ArticleId>,
}

impl Author {
    /// Creates an author with a generated id and no articles.
    ///
    /// # Errors
    /// - `ValidationError::BlankAuthorName` when `name` is blank after trim.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        Self::with_id(AuthorId::new(), name)
    }

    /// Creates an author with a caller-provided id.
    pub fn with_id(id: AuthorId, name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        validate_author_name(&name)?;
        Ok(Self {
            id,
            name,
            articles: Vec::new(),
        })
    }

    pub fn id(&self) -> AuthorId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Always fails: author names cannot change after construction.
    pub fn set_name(&mut self, _name: impl Into<String>) -> Result<(), ImmutableFieldError> {
        Err(ImmutableFieldError {
            entity: "author",
            field: "name",
        })
    }

    /// Article ids written by this author, in registration order.
    pub fn articles(&self) -> &[ArticleId] {
        &self.articles
    }

    pub(crate) fn push_article(&mut self, article: ArticleId) {
        self.articles.push(article);
    }
}
