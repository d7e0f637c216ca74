// src/cli/dispatch.rs
//! Command dispatch logic extracted from the binary.

use std::path::Path;
use std::str::FromStr;

use anyhow::Result;
use colored::Colorize;

use crate::model::ProfileId;
use crate::render;
use crate::store::ProfileStore;

use super::args::{Commands, OutputFormat};

/// Executes the parsed command.
///
/// # Errors
/// Returns error if loading the profile universe or running the query
/// fails.
pub fn execute(command: Commands) -> Result<()> {
    match command {
        Commands::Cluster {
            file,
            root,
            depth,
            format,
        } => handle_cluster(&file, &root, depth, format),
        Commands::Suggest {
            file,
            profile,
            max,
            gender,
            min_age,
            max_age,
            format,
        } => handle_suggest(&file, &profile, max, gender.as_deref(), min_age, max_age, format),
        Commands::Validate { file } => handle_validate(&file),
    }
}

fn handle_cluster(file: &Path, root: &str, depth: usize, format: OutputFormat) -> Result<()> {
    let store = ProfileStore::load_csv(file)?;
    let root_id = ProfileId::from_str(root)?;
    let forest = store.build_cluster(root_id, depth)?;

    match format {
        OutputFormat::Text => print!("{}", render::render_forest(&store, &forest, root_id)?),
        OutputFormat::Json => {
            let report = render::forest_report(&store, &forest, root_id)?;
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    Ok(())
}

fn handle_suggest(
    file: &Path,
    profile: &str,
    max: Option<usize>,
    gender: Option<&str>,
    min_age: Option<u32>,
    max_age: Option<u32>,
    format: OutputFormat,
) -> Result<()> {
    let store = ProfileStore::load_csv(file)?;
    let profile_id = ProfileId::from_str(profile)?;
    let suggestions = store.suggest_connections(profile_id, max, gender, min_age, max_age)?;

    match format {
        OutputFormat::Text => print!("{}", render::render_suggestions(&suggestions)),
        OutputFormat::Json => {
            let rows = render::suggestion_rows(&suggestions);
            println!("{}", serde_json::to_string_pretty(&rows)?);
        }
    }

    Ok(())
}

fn handle_validate(file: &Path) -> Result<()> {
    let store = ProfileStore::load_csv(file)?;

    let mut edge_count = 0;
    for id in store.ids() {
        edge_count += store.get(id)?.friends().len();
    }

    println!(
        "{} {} profiles, {} symmetric friendships",
        "✅".green(),
        store.len(),
        edge_count / 2
    );

    Ok(())
}
