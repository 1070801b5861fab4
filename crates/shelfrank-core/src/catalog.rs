use crate::models::BookRecord;
use anyhow::{Context, Result};
use std::path::Path;

/// Source of book records. The engine never cares how the records are
/// stored; anything that can hand over a list qualifies.
pub trait BookRepository {
    fn fetch_all(&self) -> Vec<BookRecord>;
    fn fetch_by_category(&self, category: &str) -> Vec<BookRecord>;
    /// Distinct category labels, sorted.
    fn categories(&self) -> Vec<String>;
}

/// In-memory repository, loadable from a JSON or YAML catalog file.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    books: Vec<BookRecord>,
}

impl Catalog {
    pub fn new(books: Vec<BookRecord>) -> Self {
        Self { books }
    }

    /// Load a catalog file; the format is picked by extension
    /// (`.yml`/`.yaml` for YAML, anything else is parsed as JSON).
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read catalog {}", path.display()))?;
        let books: Vec<BookRecord> = match path.extension().and_then(|e| e.to_str()) {
            Some("yml") | Some("yaml") => serde_yaml::from_str(&content)
                .with_context(|| format!("invalid YAML catalog {}", path.display()))?,
            _ => serde_json::from_str(&content)
                .with_context(|| format!("invalid JSON catalog {}", path.display()))?,
        };
        Ok(Self::new(books))
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}

impl BookRepository for Catalog {
    fn fetch_all(&self) -> Vec<BookRecord> {
        self.books.clone()
    }

    fn fetch_by_category(&self, category: &str) -> Vec<BookRecord> {
        self.books
            .iter()
            .filter(|b| b.category.eq_ignore_ascii_case(category))
            .cloned()
            .collect()
    }

    fn categories(&self) -> Vec<String> {
        let mut categories: Vec<String> = self.books.iter().map(|b| b.category.clone()).collect();
        categories.sort();
        categories.dedup();
        categories
    }
}
