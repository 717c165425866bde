//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `masthead_core` linkage and logging bootstrap.
//! - Replay the reference author/magazine scenario and print the aggregates.
//!
//! Output is deterministic; ids are never printed.

use log::{error, info};
use masthead_core::{CatalogResult, CatalogService, InMemoryCatalogRepository, MagazineView};
use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(err) = masthead_core::init_logging(masthead_core::default_log_level(), None) {
        eprintln!("logging disabled: {err}");
    }

    println!("masthead_core ping={}", masthead_core::ping());
    println!("masthead_core version={}", masthead_core::core_version());

    match run_scenario() {
        Ok(()) => {
            info!("event=scenario_run module=cli status=ok");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("event=scenario_run module=cli status=error error={err}");
            eprintln!("scenario failed: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run_scenario() -> CatalogResult<()> {
    let mut catalog = CatalogService::in_memory();

    let author1 = catalog.create_author("Maliik salal")?;
    let author2 = catalog.create_author("Ashow kamau")?;
    let tech = catalog.create_magazine("TechMag", "Technology")?;
    let health = catalog.create_magazine("HealthDigest", "Health")?;

    catalog.add_article(author1, tech, "The Future of Rust")?;
    catalog.add_article(author1, tech, "Compilers Without Tears")?;
    catalog.add_article(author1, health, "Sleep and Memory")?;
    catalog.add_article(author2, health, "Eating for Focus")?;
    catalog.add_article(author2, tech, "Edge Computing Basics")?;

    for author in catalog.authors() {
        let topics = author
            .topic_areas()
            .map(|topics| topics.join(", "))
            .unwrap_or_else(|| "none".to_string());
        println!(
            "author name={:?} articles={} topics=[{}]",
            author.name(),
            author.articles().len(),
            topics
        );
    }

    for magazine in catalog.magazines() {
        print_magazine(magazine);
    }

    match catalog.top_publisher() {
        Some(top) => println!("top_publisher={:?}", top.name()),
        None => println!("top_publisher=none"),
    }
    Ok(())
}

fn print_magazine(magazine: MagazineView<'_, InMemoryCatalogRepository>) {
    let contributors = magazine
        .contributors()
        .iter()
        .map(|author| author.name())
        .collect::<Vec<_>>()
        .join(", ");
    let titles = magazine
        .article_titles()
        .map(|titles| titles.join(" | "))
        .unwrap_or_else(|| "none".to_string());
    println!(
        "magazine name={:?} category={:?} contributors=[{}] titles=[{}]",
        magazine.name(),
        magazine.category(),
        contributors,
        titles
    );
}
