// src/render.rs
//! Text and JSON rendering of forests and suggestion lists.
//! Graphical display is out of scope; callers get strings.

use std::collections::HashMap;
use std::fmt::Write as _;

use colored::Colorize;
use serde::Serialize;

use crate::cluster::Forest;
use crate::error::Result;
use crate::model::ProfileId;
use crate::store::ProfileStore;
use crate::suggest::Suggestion;

/// Serializable view of a built forest.
#[derive(Debug, Serialize)]
pub struct ForestReport {
    pub root: ProfileId,
    pub claimed: usize,
    pub unreached: usize,
    pub edges: Vec<ForestEdgeRow>,
}

#[derive(Debug, Serialize)]
pub struct ForestEdgeRow {
    pub child: ProfileId,
    pub child_name: String,
    pub parent: ProfileId,
    pub parent_name: String,
    pub strength: u32,
}

/// Serializable view of one ranked suggestion.
#[derive(Debug, Serialize)]
pub struct SuggestionRow {
    pub id: ProfileId,
    pub name: String,
    pub age: u32,
    pub gender: String,
    pub strength: u32,
    pub age_diff: u32,
}

/// Builds the JSON-friendly report for a forest.
///
/// # Errors
/// Returns `NotFound` if an edge references a profile missing from the
/// store snapshot.
pub fn forest_report(store: &ProfileStore, forest: &Forest, root: ProfileId) -> Result<ForestReport> {
    let mut edges = Vec::new();
    for edge in forest.edges() {
        edges.push(ForestEdgeRow {
            child: edge.child,
            child_name: store.get(edge.child)?.name().to_string(),
            parent: edge.parent,
            parent_name: store.get(edge.parent)?.name().to_string(),
            strength: edge.strength,
        });
    }

    Ok(ForestReport {
        root,
        claimed: edges.len(),
        // The root itself is always self-parented.
        unreached: forest.unclaimed().saturating_sub(1),
        edges,
    })
}

/// Renders the tree rooted at `root` as indented text with per-edge
/// strengths.
///
/// # Errors
/// Returns `NotFound` if an edge references a profile missing from the
/// store snapshot.
pub fn render_forest(store: &ProfileStore, forest: &Forest, root: ProfileId) -> Result<String> {
    let mut children: HashMap<ProfileId, Vec<(ProfileId, u32)>> = HashMap::new();
    for edge in forest.edges() {
        children
            .entry(edge.parent)
            .or_default()
            .push((edge.child, edge.strength));
    }

    let mut out = String::new();
    let root_name = store.get(root)?.name();
    let _ = writeln!(out, "{}", root_name.cyan().bold());
    render_subtree(store, &children, root, 1, &mut out)?;

    let report_unreached = forest.unclaimed().saturating_sub(1);
    if report_unreached > 0 {
        let _ = writeln!(
            out,
            "{}",
            format!("({report_unreached} profiles not reached)").dimmed()
        );
    }

    Ok(out)
}

fn render_subtree(
    store: &ProfileStore,
    children: &HashMap<ProfileId, Vec<(ProfileId, u32)>>,
    node: ProfileId,
    depth: usize,
    out: &mut String,
) -> Result<()> {
    let Some(kids) = children.get(&node) else {
        return Ok(());
    };

    for &(child, strength) in kids {
        let name = store.get(child)?.name();
        let indent = "  ".repeat(depth);
        let _ = writeln!(
            out,
            "{indent}{} {name} {}",
            "└─".dimmed(),
            format!("[{strength}]").yellow()
        );
        render_subtree(store, children, child, depth + 1, out)?;
    }

    Ok(())
}

/// Builds the JSON-friendly rows for a suggestion list.
#[must_use]
pub fn suggestion_rows(suggestions: &[Suggestion]) -> Vec<SuggestionRow> {
    suggestions
        .iter()
        .map(|s| SuggestionRow {
            id: s.profile().id(),
            name: s.profile().name().to_string(),
            age: s.profile().age(),
            gender: s.profile().gender().to_string(),
            strength: s.strength(),
            age_diff: s.age_diff(),
        })
        .collect()
}

/// Renders a ranked suggestion list as numbered text lines.
#[must_use]
pub fn render_suggestions(suggestions: &[Suggestion]) -> String {
    if suggestions.is_empty() {
        return format!("{}\n", "No suggestions found.".dimmed());
    }

    let mut out = String::new();
    for (i, s) in suggestions.iter().enumerate() {
        let _ = writeln!(
            out,
            "{:>3}. {} {}  (age {}, {})",
            i + 1,
            s.profile().name().cyan().bold(),
            format!("[strength {}]", s.strength()).yellow(),
            s.profile().age(),
            s.profile().gender()
        );
    }
    out
}
