//! Print the detail view for one movie

use std::path::PathBuf;

use anyhow::Result;
use colored::Colorize;

use crate::browse::{detail_path, resolve};
use crate::config::MarqueeConfig;
use crate::db::Database;
use crate::images::make_image_path;

/// Resolve `id` against the listing and print its details
pub fn cmd_show(db: &Database, id: &str, offline: Option<PathBuf>) -> Result<()> {
    let config = MarqueeConfig::load()?;
    let source = super::build_source(&config, offline)?;
    let query = super::load_listing(db, &config, source, false)?;

    let Some(movie) = resolve(Some(id), query.items()) else {
        println!(
            "{} No movie with id '{}' in the current listing",
            "!".yellow(),
            id
        );
        return Ok(());
    };

    println!();
    println!("{}", movie.title.bold());
    let mut meta = Vec::new();
    if let Some(year) = movie.release_year() {
        meta.push(year.to_string());
    }
    if let Some(vote) = movie.vote_average.filter(|v| *v > 0.0) {
        meta.push(format!("{vote:.1}/10"));
    }
    if !meta.is_empty() {
        println!("{}", meta.join("  ·  ").dimmed());
    }
    println!();
    if !movie.overview.is_empty() {
        println!("{}", movie.overview);
        println!();
    }
    if movie.backdrop().is_some() {
        println!(
            "  {} {}",
            "Backdrop:".dimmed(),
            make_image_path(movie.backdrop(), None)
        );
    }
    println!("  {} {}", "Route:".dimmed(), detail_path(movie.id));
    Ok(())
}
