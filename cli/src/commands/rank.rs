use anyhow::{anyhow, Context, Result};
use shelfrank_core::catalog::{BookRepository, Catalog};
use shelfrank_core::config::Config;
use shelfrank_core::{RankingEngine, ScoreResult, WeightVector};
use std::path::{Path, PathBuf};

use super::ui;

pub fn handle_rank(
    catalog_path: Option<PathBuf>,
    config_path: Option<&Path>,
    category: Option<String>,
    top: Option<usize>,
    weight_overrides: Vec<String>,
    matrix: bool,
    json: bool,
) -> Result<()> {
    let config = Config::load_from(config_path)?;
    let catalog_path = catalog_path.unwrap_or_else(|| PathBuf::from(&config.catalog.path));
    let catalog = Catalog::load(&catalog_path)?;

    let books = match &category {
        Some(cat) => catalog.fetch_by_category(cat),
        None => catalog.fetch_all(),
    };
    tracing::debug!(count = books.len(), category = ?category, "loaded books");

    let mut weights: WeightVector = config.weights.to_weight_vector();
    for override_spec in &weight_overrides {
        let (key, value) = parse_weight_override(override_spec)?;
        weights.set(&key, value);
    }

    let engine = RankingEngine::default();
    let results = match engine.rank(&books, &weights) {
        Ok(results) => results,
        Err(e) => {
            ui::print_error(&e.to_string());
            return Err(e.into());
        }
    };

    let shown = top.unwrap_or(results.len()).min(results.len());
    let results = &results[..shown];

    if json {
        println!("{}", serde_json::to_string_pretty(results)?);
        return Ok(());
    }

    if matrix {
        print_decision_matrix(&engine, results);
        print_normalized_matrix(&engine, results);
    }
    print_final_ranking(results);

    Ok(())
}

fn parse_weight_override(spec: &str) -> Result<(String, f64)> {
    let (key, value) = spec
        .split_once('=')
        .ok_or_else(|| anyhow!("expected KEY=VALUE, got '{}'", spec))?;
    let value: f64 = value
        .parse()
        .with_context(|| format!("invalid weight value in '{}'", spec))?;
    Ok((key.trim().to_string(), value))
}

fn print_decision_matrix(engine: &RankingEngine, results: &[ScoreResult]) {
    ui::print_header("Decision Matrix (tiers)");
    let mut headers = vec!["Title".to_string()];
    headers.extend(engine.criteria().iter().map(|c| c.name.clone()));
    let rows: Vec<Vec<String>> = results
        .iter()
        .map(|r| {
            let mut row = vec![r.book.title.clone()];
            row.extend(
                engine
                    .criteria()
                    .iter()
                    .map(|c| r.tiers.get(&c.key).copied().unwrap_or_default().to_string()),
            );
            row
        })
        .collect();
    ui::print_table(&headers, &rows);
}

fn print_normalized_matrix(engine: &RankingEngine, results: &[ScoreResult]) {
    ui::print_header("Normalized Matrix");
    let mut headers = vec!["Title".to_string()];
    headers.extend(engine.criteria().iter().map(|c| c.name.clone()));
    headers.push("Final".to_string());
    let rows: Vec<Vec<String>> = results
        .iter()
        .map(|r| {
            let mut row = vec![r.book.title.clone()];
            row.extend(engine.criteria().iter().map(|c| {
                format!("{:.4}", r.normalized.get(&c.key).copied().unwrap_or_default())
            }));
            row.push(format!("{:.4}", r.final_score));
            row
        })
        .collect();
    ui::print_table(&headers, &rows);
}

fn print_final_ranking(results: &[ScoreResult]) {
    ui::print_header("Ranking");
    let headers = vec![
        "Rank".to_string(),
        "Title".to_string(),
        "Author".to_string(),
        "Category".to_string(),
        "Final Score".to_string(),
    ];
    let rows: Vec<Vec<String>> = results
        .iter()
        .map(|r| {
            vec![
                r.rank.to_string(),
                r.book.title.clone(),
                r.book.author.clone(),
                r.book.category.clone(),
                format!("{:.4}", r.final_score),
            ]
        })
        .collect();
    ui::print_table(&headers, &rows);
}
