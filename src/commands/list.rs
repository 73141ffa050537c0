//! Print the listing as a table

use std::path::PathBuf;

use anyhow::{Result, bail};
use colored::Colorize;
use comfy_table::{Table, presets::UTF8_BORDERS_ONLY};

use crate::browse::{PageCycler, banner};
use crate::config::MarqueeConfig;
use crate::db::Database;
use crate::models::Movie;

/// Print the banner movie and row page `page` (1-based)
pub fn cmd_list(db: &Database, page: usize, refresh: bool, offline: Option<PathBuf>) -> Result<()> {
    let config = MarqueeConfig::load()?;
    let source = super::build_source(&config, offline)?;
    let query = super::load_listing(db, &config, source, refresh)?;

    let items = query.items().unwrap_or_default();
    let Some(featured) = banner(items) else {
        println!("{} Nothing is playing right now.", "!".yellow());
        return Ok(());
    };

    let pager = PageCycler::new(config.browse.page_size);
    let page_count = pager.page_count(items);
    if page == 0 || page > page_count.max(1) {
        bail!("Page {} is out of range (1-{})", page, page_count.max(1));
    }

    println!();
    println!("{}", "Now Playing".bold());
    println!(
        "  {} {}",
        featured.title.cyan().bold(),
        featured
            .release_year()
            .map(|y| format!("({y})"))
            .unwrap_or_default()
            .dimmed()
    );
    if !featured.overview.is_empty() {
        println!("  {}", featured.overview);
    }
    println!();

    println!("{}", format!("Page {}/{}", page, page_count.max(1)).bold());
    println!("{}", movie_table(pager.page(items, page - 1)));

    if query.from_cache() {
        println!("{} Served from cache (use --refresh to fetch again)", ">".cyan());
    }
    Ok(())
}

fn movie_table(movies: &[Movie]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["ID", "Title", "Year", "Rating"]);

    for movie in movies {
        table.add_row(vec![
            movie.id.to_string(),
            movie.title.clone(),
            movie.release_year().unwrap_or("-").to_string(),
            movie
                .vote_average
                .map(|v| format!("{v:.1}"))
                .unwrap_or_else(|| "-".to_string()),
        ]);
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_movie_table_rows() {
        let mut movie = Movie::new(550, "Fight Club", "");
        movie.release_date = Some("1999-10-15".to_string());
        movie.vote_average = Some(8.43);

        let rendered = movie_table(&[movie, Movie::new(13, "Forrest Gump", "")]).to_string();
        assert!(rendered.contains("Fight Club"));
        assert!(rendered.contains("1999"));
        assert!(rendered.contains("8.4"));
        assert!(rendered.contains("Forrest Gump"));
    }
}
