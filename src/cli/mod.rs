// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the glean command-line interface.
//!
//! Three subcommands over a site's document store: `search` to run a query
//! the way the search box would, `html` to print the result list markup, and
//! `inspect` to see what the index contains.

pub mod display;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "glean",
    about = "Client-side search for a static site's document store",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run a query and print highlighted results
    Search {
        /// Document store (JSON or the generated `window.store = ...` script)
        store: PathBuf,

        /// Search query, as typed into the search box
        query: String,

        /// JSON file overriding boosts and snippet lengths
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Maximum number of results to print
        #[arg(short, long, default_value = "10")]
        limit: usize,

        /// Print match records as JSON instead
        #[arg(long)]
        json: bool,
    },

    /// Print the result list HTML for a query
    Html {
        /// Document store
        store: PathBuf,

        /// Search query
        query: String,

        /// JSON file overriding boosts and snippet lengths
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Show document count, vocabulary size and per-field statistics
    Inspect {
        /// Document store
        store: PathBuf,
    },
}
