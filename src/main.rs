// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::fs;
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use glean::{
    render, search_page, to_html, DocumentStore, RenderedResults, SearchConfig, SearchContext,
};

mod cli;
use cli::{display, Cli, Commands};

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = Cli::parse();
    let outcome = match cli.command {
        Commands::Search {
            store,
            query,
            config,
            limit,
            json,
        } => run_search(&store, &query, config.as_deref(), limit, json),
        Commands::Html {
            store,
            query,
            config,
        } => run_html(&store, &query, config.as_deref()),
        Commands::Inspect { store } => run_inspect(&store),
    };

    if let Err(e) = outcome {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}

fn load_context(store: &Path, config: Option<&Path>) -> Result<SearchContext> {
    let config = match config {
        Some(path) => {
            let json = fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            SearchConfig::from_json(&json)
                .with_context(|| format!("parsing config {}", path.display()))?
        }
        None => SearchConfig::default(),
    };

    let start = Instant::now();
    let documents = DocumentStore::from_path(store)
        .with_context(|| format!("loading store {}", store.display()))?;
    let context = SearchContext::new(documents, config);
    tracing::info!(
        documents = context.store().len(),
        elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
        "indexed store"
    );
    Ok(context)
}

fn run_search(
    store: &Path,
    query: &str,
    config: Option<&Path>,
    limit: usize,
    json: bool,
) -> Result<()> {
    let context = load_context(store, config)?;

    let start = Instant::now();
    let mut results = context.get_results(query)?;
    let total = results.len();
    results.truncate(limit);
    let elapsed = start.elapsed();

    if json {
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }

    let rendered = render(&results, context.store(), context.config())?;
    display::section_top(&format!("{} of {} results for \"{}\"", rendered.len(), total, query));
    match &rendered {
        RenderedResults::NoResults => println!("  No results found."),
        RenderedResults::Results(items) => {
            for (i, item) in items.iter().enumerate() {
                display::print_result(i + 1, item);
            }
        }
    }
    display::section_bot();
    println!(
        "{}",
        display::styled(&[display::DIM], &format!("{:.2} ms", elapsed.as_secs_f64() * 1000.0))
    );
    Ok(())
}

fn run_html(store: &Path, query: &str, config: Option<&Path>) -> Result<()> {
    let context = load_context(store, config)?;
    println!("{}", to_html(&search_page(query, &context)));
    Ok(())
}

fn run_inspect(store: &Path) -> Result<()> {
    let context = load_context(store, None)?;
    let index = context.index();

    display::section_top(&store.display().to_string());
    println!("  documents   {}", index.len());
    println!("  vocabulary  {}", index.vocabulary().len());
    display::print_field_stats(&index.field_stats());
    display::section_bot();
    Ok(())
}
