//! Catalog use-case service.
//!
//! # Responsibility
//! - Provide the only mutation entry points for the relationship graph.
//! - Validate article endpoints against the registry before registering.
//! - Expose read views and catalog-wide aggregates.
//!
//! # Invariants
//! - A failed `create_article` leaves every collection untouched.
//! - Article construction checks title, then author, then magazine.
//! - Reassigning an article's author or magazine does not rewrite any
//!   endpoint's article list (known inconsistency).

use crate::model::article::Article;
use crate::model::author::Author;
use crate::model::ids::{ArticleId, AuthorId, MagazineId};
use crate::model::magazine::Magazine;
use crate::model::validation::{ImmutableFieldError, ValidationError};
use crate::repo::catalog_repo::{CatalogRepository, InMemoryCatalogRepository, RepoError};
use crate::service::views::{AuthorView, MagazineView};
use log::{debug, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type CatalogResult<T> = Result<T, CatalogError>;

/// Service error for catalog use-cases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// A field value or endpoint reference was rejected.
    Validation(ValidationError),
    /// Article title was rejected; the article was not created.
    Construction(ValidationError),
    /// Write attempted on a field fixed at construction.
    ImmutableField(ImmutableFieldError),
    /// Addressed author does not exist.
    AuthorNotFound(AuthorId),
    /// Addressed magazine does not exist.
    MagazineNotFound(MagazineId),
    /// Addressed article does not exist.
    ArticleNotFound(ArticleId),
    /// Registry-level failure.
    Repo(RepoError),
}

impl Display for CatalogError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Construction(err) => write!(f, "cannot construct article: {err}"),
            Self::ImmutableField(err) => write!(f, "{err}"),
            Self::AuthorNotFound(id) => write!(f, "author not found: {id}"),
            Self::MagazineNotFound(id) => write!(f, "magazine not found: {id}"),
            Self::ArticleNotFound(id) => write!(f, "article not found: {id}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for CatalogError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Construction(err) => Some(err),
            Self::ImmutableField(err) => Some(err),
            Self::Repo(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ValidationError> for CatalogError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<ImmutableFieldError> for CatalogError {
    fn from(value: ImmutableFieldError) -> Self {
        Self::ImmutableField(value)
    }
}

impl From<RepoError> for CatalogError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::AuthorNotFound(id) => Self::AuthorNotFound(id),
            RepoError::MagazineNotFound(id) => Self::MagazineNotFound(id),
            RepoError::ArticleNotFound(id) => Self::ArticleNotFound(id),
            other => Self::Repo(other),
        }
    }
}

/// Catalog service facade over a registry implementation.
pub struct CatalogService<R: CatalogRepository> {
    repo: R,
}

impl CatalogService<InMemoryCatalogRepository> {
    /// Creates a service over a fresh, empty in-memory registry.
    pub fn in_memory() -> Self {
        Self::new(InMemoryCatalogRepository::new())
    }
}

impl Default for CatalogService<InMemoryCatalogRepository> {
    fn default() -> Self {
        Self::in_memory()
    }
}

impl<R: CatalogRepository> CatalogService<R> {
    /// Creates a service using the provided registry implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Registers a new author.
    pub fn create_author(&mut self, name: impl Into<String>) -> CatalogResult<AuthorId> {
        let author = Author::new(name)?;
        let id = self.repo.insert_author(author)?;
        debug!("event=author_create module=service status=ok author={id}");
        Ok(id)
    }

    /// Registers a new magazine; it takes part in `top_publisher` from now on.
    pub fn create_magazine(
        &mut self,
        name: impl Into<String>,
        category: impl Into<String>,
    ) -> CatalogResult<MagazineId> {
        let magazine = Magazine::new(name, category)?;
        let id = self.repo.insert_magazine(magazine)?;
        debug!("event=magazine_create module=service status=ok magazine={id}");
        Ok(id)
    }

    /// Creates an article and links it into the registry and both endpoints.
    ///
    /// # Errors
    /// - `CatalogError::Construction` when the title length is outside `[5, 50]`.
    /// - `CatalogError::Validation(UnknownAuthor)` for an unregistered author.
    /// - `CatalogError::Validation(UnknownMagazine)` for an unregistered magazine.
    pub fn create_article(
        &mut self,
        author: AuthorId,
        magazine: MagazineId,
        title: impl Into<String>,
    ) -> CatalogResult<ArticleId> {
        let article = Article::new(author, magazine, title).map_err(CatalogError::Construction)?;
        self.ensure_author(author)?;
        self.ensure_magazine(magazine)?;

        let id = self.repo.insert_article(article)?;
        debug!(
            "event=article_create module=service status=ok article={id} author={author} magazine={magazine}"
        );
        Ok(id)
    }

    /// Author-side factory: `author` writes `title` for `magazine`.
    ///
    /// Same contract as `create_article`.
    pub fn add_article(
        &mut self,
        author: AuthorId,
        magazine: MagazineId,
        title: impl Into<String>,
    ) -> CatalogResult<ArticleId> {
        self.create_article(author, magazine, title)
    }

    /// Always fails once the author exists: names are fixed at construction.
    pub fn rename_author(&mut self, id: AuthorId, name: impl Into<String>) -> CatalogResult<()> {
        let author = self
            .repo
            .author_mut(id)
            .ok_or(CatalogError::AuthorNotFound(id))?;
        author.set_name(name)?;
        Ok(())
    }

    /// Renames a magazine; the old name stays on validation failure.
    pub fn rename_magazine(
        &mut self,
        id: MagazineId,
        name: impl Into<String>,
    ) -> CatalogResult<()> {
        let magazine = self
            .repo
            .magazine_mut(id)
            .ok_or(CatalogError::MagazineNotFound(id))?;
        magazine.set_name(name)?;
        Ok(())
    }

    /// Changes a magazine's category; the old value stays on validation failure.
    pub fn set_magazine_category(
        &mut self,
        id: MagazineId,
        category: impl Into<String>,
    ) -> CatalogResult<()> {
        let magazine = self
            .repo
            .magazine_mut(id)
            .ok_or(CatalogError::MagazineNotFound(id))?;
        magazine.set_category(category)?;
        Ok(())
    }

    /// Always fails once the article exists: titles are fixed at construction.
    pub fn set_article_title(
        &mut self,
        id: ArticleId,
        title: impl Into<String>,
    ) -> CatalogResult<()> {
        let article = self
            .repo
            .article_mut(id)
            .ok_or(CatalogError::ArticleNotFound(id))?;
        article.set_title(title)?;
        Ok(())
    }

    /// Points an article at another registered author.
    ///
    /// Neither the previous nor the new author's article list is updated.
    pub fn set_article_author(&mut self, id: ArticleId, author: AuthorId) -> CatalogResult<()> {
        // A missing article is reported before an unknown author.
        if self.repo.article(id).is_none() {
            return Err(CatalogError::ArticleNotFound(id));
        }
        self.ensure_author(author)?;
        let article = self
            .repo
            .article_mut(id)
            .ok_or(CatalogError::ArticleNotFound(id))?;
        let previous = article.author();
        article.set_author(author);
        warn!(
            "event=article_reassign module=service status=ok field=author article={id} from={previous} to={author} endpoint_lists=unchanged"
        );
        Ok(())
    }

    /// Points an article at another registered magazine.
    ///
    /// Neither magazine's article list is updated.
    pub fn set_article_magazine(
        &mut self,
        id: ArticleId,
        magazine: MagazineId,
    ) -> CatalogResult<()> {
        // A missing article is reported before an unknown magazine.
        if self.repo.article(id).is_none() {
            return Err(CatalogError::ArticleNotFound(id));
        }
        self.ensure_magazine(magazine)?;
        let article = self
            .repo
            .article_mut(id)
            .ok_or(CatalogError::ArticleNotFound(id))?;
        let previous = article.magazine();
        article.set_magazine(magazine);
        warn!(
            "event=article_reassign module=service status=ok field=magazine article={id} from={previous} to={magazine} endpoint_lists=unchanged"
        );
        Ok(())
    }

    pub fn author(&self, id: AuthorId) -> Option<AuthorView<'_, R>> {
        self.repo
            .author(id)
            .map(|author| AuthorView::new(&self.repo, author))
    }

    pub fn magazine(&self, id: MagazineId) -> Option<MagazineView<'_, R>> {
        self.repo
            .magazine(id)
            .map(|magazine| MagazineView::new(&self.repo, magazine))
    }

    pub fn article(&self, id: ArticleId) -> Option<&Article> {
        self.repo.article(id)
    }

    /// Every registered author, in registration order.
    pub fn authors(&self) -> Vec<AuthorView<'_, R>> {
        self.repo
            .author_ids()
            .iter()
            .filter_map(|id| self.author(*id))
            .collect()
    }

    /// Every registered magazine, in registration order.
    pub fn magazines(&self) -> Vec<MagazineView<'_, R>> {
        self.repo
            .magazine_ids()
            .iter()
            .filter_map(|id| self.magazine(*id))
            .collect()
    }

    /// Every article ever created, in creation order.
    pub fn articles(&self) -> Vec<&Article> {
        self.repo
            .article_ids()
            .iter()
            .filter_map(|id| self.repo.article(*id))
            .collect()
    }

    /// Magazine with the most articles; the earliest registered wins ties.
    ///
    /// Returns `None` when no magazine is registered.
    pub fn top_publisher(&self) -> Option<MagazineView<'_, R>> {
        let mut top: Option<MagazineView<'_, R>> = None;
        for magazine in self.magazines() {
            let replace = match top {
                Some(current) => magazine.article_count() > current.article_count(),
                None => true,
            };
            if replace {
                top = Some(magazine);
            }
        }
        top
    }

    fn ensure_author(&self, id: AuthorId) -> CatalogResult<()> {
        if self.repo.author(id).is_none() {
            return Err(ValidationError::UnknownAuthor(id).into());
        }
        Ok(())
    }

    fn ensure_magazine(&self, id: MagazineId) -> CatalogResult<()> {
        if self.repo.magazine(id).is_none() {
            return Err(ValidationError::UnknownMagazine(id).into());
        }
        Ok(())
    }
}
