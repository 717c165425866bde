//! Magazine domain model.
//!
//! # Invariants
//! - `name` length stays within `[2, 16]` characters at all times.
//! - `category` stays non-blank at all times.
//! - A rejected setter call leaves the previous value in place.

use crate::model::ids::{ArticleId, MagazineId};
use crate::model::validation::{validate_category, validate_magazine_name, ValidationError};

/// A named, categorized publication.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Magazine {
    id: MagazineId,
    name: String,
    category: String,
    articles: Vec<ArticleId>,
}

impl Magazine {
    /// Creates a magazine with a generated id and no articles.
    ///
    /// # Errors
    /// - `ValidationError::MagazineNameLength` for names outside `[2, 16]`.
    /// - `ValidationError::BlankCategory` for a blank category.
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Self::with_id(MagazineId::new(), name, category)
    }

    /// Creates a magazine with a caller-provided id.
    pub fn with_id(
        id: MagazineId,
        name: impl Into<String>,
        category: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        let category = category.into();
        validate_magazine_name(&name)?;
        validate_category(&category)?;
        Ok(Self {
            id,
            name,
            category,
            articles: Vec::new(),
        })
    }

    pub fn id(&self) -> MagazineId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    /// Replaces the name after re-validating it.
    pub fn set_name(&mut self, name: impl Into<String>) -> Result<(), ValidationError> {
        let name = name.into();
        validate_magazine_name(&name)?;
        self.name = name;
        Ok(())
    }

    /// Replaces the category after re-validating it.
    pub fn set_category(&mut self, category: impl Into<String>) -> Result<(), ValidationError> {
        let category = category.into();
        validate_category(&category)?;
        self.category = category;
        Ok(())
    }

    /// Article ids published here, in registration order.
    pub fn articles(&self) -> &[ArticleId] {
        &self.articles
    }

    pub fn article_count(&self) -> usize {
        self.articles.len()
    }

    pub(crate) fn push_article(&mut self, article: ArticleId) {
        self.articles.push(article);
    }
}
