use anyhow::Result;
use shelfrank_core::catalog::{BookRepository, Catalog};
use shelfrank_core::config::Config;
use std::path::{Path, PathBuf};

use super::ui;

pub fn handle_books(
    catalog_path: Option<PathBuf>,
    config_path: Option<&Path>,
    category: Option<String>,
    categories_only: bool,
) -> Result<()> {
    let config = Config::load_from(config_path)?;
    let catalog_path = catalog_path.unwrap_or_else(|| PathBuf::from(&config.catalog.path));
    let catalog = Catalog::load(&catalog_path)?;

    if categories_only {
        ui::print_header("Categories");
        for category in catalog.categories() {
            println!("{}", category);
        }
        return Ok(());
    }

    let books = match &category {
        Some(cat) => catalog.fetch_by_category(cat),
        None => catalog.fetch_all(),
    };

    ui::print_header(&format!("Books ({})", books.len()));
    let headers = vec![
        "Id".to_string(),
        "Title".to_string(),
        "Author".to_string(),
        "Category".to_string(),
        "Rating".to_string(),
        "Borrowers".to_string(),
        "Condition".to_string(),
    ];
    let rows: Vec<Vec<String>> = books
        .iter()
        .map(|b| {
            vec![
                b.id.to_string(),
                b.title.clone(),
                b.author.clone(),
                b.category.clone(),
                format!("{:.1}", b.rating),
                b.borrower_count.to_string(),
                b.condition.clone(),
            ]
        })
        .collect();
    ui::print_table(&headers, &rows);

    Ok(())
}
