//! Read views carrying the derived relationship queries.
//!
//! # Responsibility
//! - Resolve id lists against the catalog registry.
//! - Compute contributor/topic/title aggregates on demand.
//!
//! # Invariants
//! - Views borrow the catalog immutably; nothing is cached.
//! - "Distinct" results keep first-seen order and compare entities by id.
//! - Queries documented as returning `None` never return `Some(vec![])`.

use crate::model::article::Article;
use crate::model::author::Author;
use crate::model::ids::{ArticleId, AuthorId, MagazineId};
use crate::model::magazine::Magazine;
use crate::repo::catalog_repo::CatalogRepository;
use std::collections::{HashMap, HashSet};
use std::fmt::{Debug, Formatter};

/// Minimum number of articles an author needs in one magazine, exclusive.
const CONTRIBUTING_AUTHOR_THRESHOLD: usize = 2;

/// Author plus the catalog it belongs to.
pub struct AuthorView<'a, R: CatalogRepository> {
    repo: &'a R,
    author: &'a Author,
}

impl<'a, R: CatalogRepository> AuthorView<'a, R> {
    pub(crate) fn new(repo: &'a R, author: &'a Author) -> Self {
        Self { repo, author }
    }

    pub fn id(&self) -> AuthorId {
        self.author.id()
    }

    pub fn name(&self) -> &'a str {
        self.author.name()
    }

    /// Articles written by this author, in registration order.
    pub fn articles(&self) -> Vec<&'a Article> {
        resolve_articles(self.repo, self.author.articles())
    }

    /// Distinct magazines this author has published in.
    pub fn magazines(&self) -> Vec<MagazineView<'a, R>> {
        let repo = self.repo;
        let mut seen = HashSet::new();
        self.articles()
            .into_iter()
            .map(Article::magazine)
            .filter(|id| seen.insert(*id))
            .filter_map(|id| repo.magazine(id))
            .map(|magazine| MagazineView::new(repo, magazine))
            .collect()
    }

    /// Distinct categories across this author's magazines.
    ///
    /// Returns `None` when the author has no articles.
    pub fn topic_areas(&self) -> Option<Vec<&'a str>> {
        let mut seen = HashSet::new();
        let categories = self
            .magazines()
            .into_iter()
            .map(|magazine| magazine.category())
            .filter(|category| seen.insert(*category))
            .collect::<Vec<_>>();
        non_empty(categories)
    }
}

/// Magazine plus the catalog it belongs to.
pub struct MagazineView<'a, R: CatalogRepository> {
    repo: &'a R,
    magazine: &'a Magazine,
}

impl<'a, R: CatalogRepository> MagazineView<'a, R> {
    pub(crate) fn new(repo: &'a R, magazine: &'a Magazine) -> Self {
        Self { repo, magazine }
    }

    pub fn id(&self) -> MagazineId {
        self.magazine.id()
    }

    pub fn name(&self) -> &'a str {
        self.magazine.name()
    }

    pub fn category(&self) -> &'a str {
        self.magazine.category()
    }

    pub fn article_count(&self) -> usize {
        self.magazine.article_count()
    }

    /// Articles published here, in registration order.
    pub fn articles(&self) -> Vec<&'a Article> {
        resolve_articles(self.repo, self.magazine.articles())
    }

    /// Distinct authors with at least one article here.
    pub fn contributors(&self) -> Vec<AuthorView<'a, R>> {
        let mut seen = HashSet::new();
        self.articles()
            .into_iter()
            .map(Article::author)
            .filter(|id| seen.insert(*id))
            .filter_map(|id| self.author_view(id))
            .collect()
    }

    /// Titles of every article here, in registration order.
    ///
    /// Returns `None` when the magazine has no articles.
    pub fn article_titles(&self) -> Option<Vec<&'a str>> {
        let titles = self
            .articles()
            .into_iter()
            .map(Article::title)
            .collect::<Vec<_>>();
        non_empty(titles)
    }

    /// Authors with more than two articles here.
    ///
    /// Returns `None` when no author qualifies.
    pub fn contributing_authors(&self) -> Option<Vec<AuthorView<'a, R>>> {
        let mut order = Vec::new();
        let mut counts: HashMap<AuthorId, usize> = HashMap::new();
        for article in self.articles() {
            let count = counts.entry(article.author()).or_insert_with(|| {
                order.push(article.author());
                0
            });
            *count += 1;
        }

        let authors = order
            .into_iter()
            .filter(|id| counts.get(id).copied().unwrap_or(0) > CONTRIBUTING_AUTHOR_THRESHOLD)
            .filter_map(|id| self.author_view(id))
            .collect::<Vec<_>>();
        non_empty(authors)
    }

    fn author_view(&self, id: AuthorId) -> Option<AuthorView<'a, R>> {
        let repo = self.repo;
        repo.author(id).map(|author| AuthorView::new(repo, author))
    }
}

fn resolve_articles<'a, R: CatalogRepository>(
    repo: &'a R,
    ids: &[ArticleId],
) -> Vec<&'a Article> {
    ids.iter().filter_map(|id| repo.article(*id)).collect()
}

fn non_empty<T>(items: Vec<T>) -> Option<Vec<T>> {
    if items.is_empty() {
        None
    } else {
        Some(items)
    }
}

// Hand-written so views stay `Copy` without bounding `R`.

impl<R: CatalogRepository> Clone for AuthorView<'_, R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R: CatalogRepository> Copy for AuthorView<'_, R> {}

impl<R: CatalogRepository> PartialEq for AuthorView<'_, R> {
    fn eq(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}

impl<R: CatalogRepository> Eq for AuthorView<'_, R> {}

impl<R: CatalogRepository> Debug for AuthorView<'_, R> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("AuthorView").field(self.author).finish()
    }
}

impl<R: CatalogRepository> Clone for MagazineView<'_, R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R: CatalogRepository> Copy for MagazineView<'_, R> {}

impl<R: CatalogRepository> PartialEq for MagazineView<'_, R> {
    fn eq(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}

impl<R: CatalogRepository> Eq for MagazineView<'_, R> {}

impl<R: CatalogRepository> Debug for MagazineView<'_, R> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("MagazineView").field(self.magazine).finish()
    }
}
