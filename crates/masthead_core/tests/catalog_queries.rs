use masthead_core::{AuthorId, CatalogService, InMemoryCatalogRepository, MagazineId};
use std::collections::HashSet;

struct Scenario {
    catalog: CatalogService<InMemoryCatalogRepository>,
    author1: AuthorId,
    author2: AuthorId,
    tech: MagazineId,
    health: MagazineId,
}

fn reference_scenario() -> Scenario {
    let mut catalog = CatalogService::in_memory();
    let author1 = catalog.create_author("Maliik salal").unwrap();
    let author2 = catalog.create_author("Ashow kamau").unwrap();
    let tech = catalog.create_magazine("TechMag", "Technology").unwrap();
    let health = catalog.create_magazine("HealthDigest", "Health").unwrap();

    catalog.add_article(author1, tech, "The Future of Rust").unwrap();
    catalog.add_article(author1, tech, "Compilers Without Tears").unwrap();
    catalog.add_article(author1, health, "Sleep and Memory").unwrap();
    catalog.add_article(author2, health, "Eating for Focus").unwrap();
    catalog.add_article(author2, tech, "Edge Computing Basics").unwrap();

    Scenario {
        catalog,
        author1,
        author2,
        tech,
        health,
    }
}

#[test]
fn reference_scenario_aggregates() {
    let scenario = reference_scenario();
    let catalog = &scenario.catalog;

    let topics = catalog
        .author(scenario.author1)
        .unwrap()
        .topic_areas()
        .unwrap()
        .into_iter()
        .collect::<HashSet<_>>();
    assert_eq!(topics, HashSet::from(["Technology", "Health"]));

    let contributors = catalog
        .magazine(scenario.tech)
        .unwrap()
        .contributors()
        .iter()
        .map(|author| author.id())
        .collect::<HashSet<_>>();
    assert_eq!(
        contributors,
        HashSet::from([scenario.author1, scenario.author2])
    );

    let top = catalog.top_publisher().unwrap();
    assert_eq!(top.id(), scenario.tech);
    assert_eq!(top.article_count(), 3);
    assert_eq!(catalog.articles().len(), 5);
}

#[test]
fn contributors_lists_each_author_once() {
    let mut catalog = CatalogService::in_memory();
    let author = catalog.create_author("Repeat writer").unwrap();
    let magazine = catalog.create_magazine("TechMag", "Technology").unwrap();
    catalog.add_article(author, magazine, "First column").unwrap();
    catalog.add_article(author, magazine, "Second column").unwrap();

    let contributors = catalog
        .magazine(magazine)
        .unwrap()
        .contributors()
        .iter()
        .map(|contributor| contributor.id())
        .collect::<Vec<_>>();
    assert_eq!(contributors, vec![author]);
}

#[test]
fn reference_scenario_contributors_have_no_duplicates() {
    let scenario = reference_scenario();
    let contributors = scenario
        .catalog
        .magazine(scenario.tech)
        .unwrap()
        .contributors()
        .iter()
        .map(|author| author.id())
        .collect::<Vec<_>>();
    assert_eq!(contributors, vec![scenario.author1, scenario.author2]);
}

#[test]
fn author_magazines_are_distinct() {
    let scenario = reference_scenario();
    let magazines = scenario
        .catalog
        .author(scenario.author1)
        .unwrap()
        .magazines()
        .iter()
        .map(|magazine| magazine.id())
        .collect::<Vec<_>>();
    assert_eq!(magazines.len(), 2);
    assert!(magazines.contains(&scenario.tech));
    assert!(magazines.contains(&scenario.health));
}

#[test]
fn topic_areas_is_none_without_articles_and_deduplicated_otherwise() {
    let mut catalog = CatalogService::in_memory();
    let author = catalog.create_author("Quiet author").unwrap();
    assert_eq!(catalog.author(author).unwrap().topic_areas(), None);
    assert!(catalog.author(author).unwrap().magazines().is_empty());

    let weekly = catalog.create_magazine("TechWeekly", "Technology").unwrap();
    let monthly = catalog.create_magazine("TechMonthly", "Technology").unwrap();
    catalog.add_article(author, weekly, "First technical piece").unwrap();
    catalog.add_article(author, weekly, "Second technical piece").unwrap();
    catalog.add_article(author, monthly, "Third technical piece").unwrap();

    assert_eq!(
        catalog.author(author).unwrap().topic_areas(),
        Some(vec!["Technology"])
    );
}

#[test]
fn article_titles_is_none_for_empty_magazine_and_ordered_otherwise() {
    let mut catalog = CatalogService::in_memory();
    let magazine = catalog.create_magazine("Quarterly", "Culture").unwrap();
    assert_eq!(catalog.magazine(magazine).unwrap().article_titles(), None);
    assert!(catalog.magazine(magazine).unwrap().contributors().is_empty());

    let author = catalog.create_author("Essayist").unwrap();
    catalog.add_article(author, magazine, "Winter essay").unwrap();
    catalog.add_article(author, magazine, "Spring essay").unwrap();
    catalog.add_article(author, magazine, "Autumn essay").unwrap();

    assert_eq!(
        catalog.magazine(magazine).unwrap().article_titles(),
        Some(vec!["Winter essay", "Spring essay", "Autumn essay"])
    );
}

#[test]
fn contributing_authors_requires_more_than_two_articles() {
    let mut catalog = CatalogService::in_memory();
    let magazine = catalog.create_magazine("TechMag", "Technology").unwrap();
    let prolific = catalog.create_author("Prolific").unwrap();
    let steady = catalog.create_author("Steady").unwrap();

    for title in ["Part one of three", "Part two of three"] {
        catalog.add_article(prolific, magazine, title).unwrap();
        catalog.add_article(steady, magazine, title).unwrap();
    }
    assert!(catalog
        .magazine(magazine)
        .unwrap()
        .contributing_authors()
        .is_none());

    catalog
        .add_article(prolific, magazine, "Part three of three")
        .unwrap();
    let contributing = catalog
        .magazine(magazine)
        .unwrap()
        .contributing_authors()
        .unwrap()
        .iter()
        .map(|author| author.id())
        .collect::<Vec<_>>();
    assert_eq!(contributing, vec![prolific]);
}

#[test]
fn contributing_authors_counts_per_magazine() {
    let scenario = reference_scenario();
    // author1 has three articles overall but only two in TechMag.
    assert!(scenario
        .catalog
        .magazine(scenario.tech)
        .unwrap()
        .contributing_authors()
        .is_none());
    assert!(scenario
        .catalog
        .magazine(scenario.health)
        .unwrap()
        .contributing_authors()
        .is_none());
}

#[test]
fn top_publisher_is_none_without_magazines() {
    let catalog = CatalogService::in_memory();
    assert!(catalog.top_publisher().is_none());
}

#[test]
fn top_publisher_prefers_first_registered_on_tie() {
    let mut catalog = CatalogService::in_memory();
    let first = catalog.create_magazine("First", "News").unwrap();
    let second = catalog.create_magazine("Second", "News").unwrap();
    assert_eq!(catalog.top_publisher().unwrap().id(), first);

    let author = catalog.create_author("Reporter").unwrap();
    catalog.add_article(author, second, "Second scoop").unwrap();
    assert_eq!(catalog.top_publisher().unwrap().id(), second);

    catalog.add_article(author, first, "First scoop").unwrap();
    assert_eq!(catalog.top_publisher().unwrap().id(), first);
}

#[test]
fn catalogs_are_isolated() {
    let scenario = reference_scenario();
    let fresh = CatalogService::in_memory();
    assert!(fresh.articles().is_empty());
    assert!(fresh.magazines().is_empty());
    assert!(fresh.author(scenario.author1).is_none());
    assert_eq!(scenario.catalog.authors().len(), 2);
}
