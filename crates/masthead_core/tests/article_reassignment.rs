//! Reassigning an article's endpoints does not touch any article list.
//!
//! These tests pin the known inconsistency: after reassignment the article
//! reports the new endpoint while the old endpoint still lists it.

use masthead_core::{ArticleId, CatalogError, CatalogService, ValidationError};

#[test]
fn reassigning_author_leaves_both_author_lists_unchanged() {
    let mut catalog = CatalogService::in_memory();
    let original = catalog.create_author("Original writer").unwrap();
    let replacement = catalog.create_author("Replacement writer").unwrap();
    let magazine = catalog.create_magazine("TechMag", "Technology").unwrap();
    let article = catalog
        .create_article(original, magazine, "Shared byline")
        .unwrap();

    catalog.set_article_author(article, replacement).unwrap();

    assert_eq!(catalog.article(article).unwrap().author(), replacement);
    assert_eq!(catalog.author(original).unwrap().articles().len(), 1);
    assert!(catalog.author(replacement).unwrap().articles().is_empty());
    // Contributors follow the article's current author.
    let contributors = catalog
        .magazine(magazine)
        .unwrap()
        .contributors()
        .iter()
        .map(|author| author.id())
        .collect::<Vec<_>>();
    assert_eq!(contributors, vec![replacement]);
}

#[test]
fn reassigning_magazine_leaves_both_magazine_lists_unchanged() {
    let mut catalog = CatalogService::in_memory();
    let author = catalog.create_author("Writer").unwrap();
    let tech = catalog.create_magazine("TechMag", "Technology").unwrap();
    let health = catalog.create_magazine("HealthDigest", "Health").unwrap();
    let article = catalog.create_article(author, tech, "Moved piece").unwrap();

    catalog.set_article_magazine(article, health).unwrap();

    assert_eq!(catalog.article(article).unwrap().magazine(), health);
    assert_eq!(catalog.magazine(tech).unwrap().article_count(), 1);
    assert_eq!(catalog.magazine(health).unwrap().article_count(), 0);
    assert_eq!(
        catalog.author(author).unwrap().topic_areas(),
        Some(vec!["Health"])
    );
}

#[test]
fn reassignment_rejects_unregistered_targets() {
    let mut catalog = CatalogService::in_memory();
    let author = catalog.create_author("Writer").unwrap();
    let magazine = catalog.create_magazine("TechMag", "Technology").unwrap();
    let article = catalog.create_article(author, magazine, "Anchored").unwrap();

    let mut other = CatalogService::in_memory();
    let stranger = other.create_author("Stranger").unwrap();
    let elsewhere = other.create_magazine("Elsewhere", "Travel").unwrap();

    assert_eq!(
        catalog.set_article_author(article, stranger).unwrap_err(),
        CatalogError::Validation(ValidationError::UnknownAuthor(stranger))
    );
    assert_eq!(
        catalog.set_article_magazine(article, elsewhere).unwrap_err(),
        CatalogError::Validation(ValidationError::UnknownMagazine(elsewhere))
    );
    let stored = catalog.article(article).unwrap();
    assert_eq!(stored.author(), author);
    assert_eq!(stored.magazine(), magazine);

    let missing = ArticleId::new();
    assert_eq!(
        catalog.set_article_author(missing, author).unwrap_err(),
        CatalogError::ArticleNotFound(missing)
    );
}

#[test]
fn missing_article_is_reported_before_unknown_target() {
    let mut catalog = CatalogService::in_memory();
    let mut other = CatalogService::in_memory();
    let stranger = other.create_author("Stranger").unwrap();
    let elsewhere = other.create_magazine("Elsewhere", "Travel").unwrap();

    let missing = ArticleId::new();
    assert_eq!(
        catalog.set_article_author(missing, stranger).unwrap_err(),
        CatalogError::ArticleNotFound(missing)
    );
    assert_eq!(
        catalog.set_article_magazine(missing, elsewhere).unwrap_err(),
        CatalogError::ArticleNotFound(missing)
    );
}
