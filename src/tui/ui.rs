//! UI rendering for the TUI
//!
//! The screen is a scrolling document: a banner for the first movie, then a
//! row of boxes paged through the rest. The detail overlay and help are drawn
//! on top.

mod helpers;
mod overlays;

use std::time::Instant;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::app::App;
use super::theme::Theme;
use crate::models::Movie;
use helpers::{DocumentLayout, ROW_HEIGHT, box_rects, format_rating, place, slide, truncate};
use overlays::{detail_area, render_detail_overlay, render_help_overlay, render_loading};

/// Main render function
pub fn render(frame: &mut Frame, app: &mut App) {
    let now = Instant::now();
    let theme = app.theme();
    let area = frame.area();
    app.set_viewport(area.width, area.height);

    // Main layout: document, footer
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Document
            Constraint::Length(1), // Footer
        ])
        .split(area);
    let body = chunks[0];

    frame.render_widget(
        Block::default().style(Style::default().bg(theme.background)),
        area,
    );

    if app.is_loading() {
        app.set_max_scroll(0);
        app.last_banner_area = None;
        app.last_box_areas.clear();
        render_loading(frame, &theme, app.query.error(), body);
    } else {
        let layout = DocumentLayout::new(body.height);
        app.set_max_scroll(layout.max_scroll(body.height));
        app.last_banner_area = render_banner(frame, app, &theme, &layout, body);
        app.last_box_areas = render_row(frame, app, &theme, &layout, body, now);
    }

    render_footer(frame, app, &theme, chunks[1]);

    // Render overlays (in order of priority)
    let scroll_y = app.viewport.scroll_y;
    app.last_overlay_area = app.overlay_view().and_then(|view| {
        let overlay_area = detail_area(body, view.anchor, scroll_y)?;
        render_detail_overlay(frame, &view, &theme, overlay_area);
        Some(overlay_area)
    });

    if app.show_help {
        render_help_overlay(frame, &theme, area);
    }
}

/// Draw the banner and return its on-screen area
fn render_banner(
    frame: &mut Frame,
    app: &App,
    theme: &Theme,
    layout: &DocumentLayout,
    body: Rect,
) -> Option<Rect> {
    let area = place(body, 0, layout.banner_height, app.viewport.scroll_y)?;

    let mut lines = Vec::new();
    match app.banner() {
        Some(movie) => {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                movie.title.clone(),
                Style::default()
                    .fg(theme.highlight)
                    .add_modifier(Modifier::BOLD),
            )));
            let mut meta = Vec::new();
            if let Some(year) = movie.release_year() {
                meta.push(Span::styled(year.to_owned(), Style::default().fg(theme.subtext)));
                meta.push(Span::raw("  "));
            }
            if let Some(rating) = format_rating(movie.vote_average) {
                meta.push(Span::styled(rating, Style::default().fg(theme.accent)));
            }
            lines.push(Line::from(meta));
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                movie.overview.clone(),
                Style::default().fg(theme.text),
            )));
        }
        None => {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                "Nothing is playing right now",
                Style::default().fg(theme.subtext),
            )));
        }
    }

    let banner = Paragraph::new(Text::from(lines))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.border))
                .title(Span::styled(
                    " Now Playing ",
                    Style::default().fg(theme.accent).bold(),
                ))
                .title_bottom(Span::styled(
                    " click or Space for the next page ",
                    Style::default().fg(theme.subtext),
                ))
                .style(Style::default().bg(theme.background)),
        )
        .wrap(Wrap { trim: true });

    frame.render_widget(banner, area);
    Some(area)
}

/// Draw the paged row and return the clickable box areas
fn render_row(
    frame: &mut Frame,
    app: &App,
    theme: &Theme,
    layout: &DocumentLayout,
    body: Rect,
    now: Instant,
) -> Vec<(Rect, i64)> {
    let Some(items) = app.items() else {
        return Vec::new();
    };
    let scroll_y = app.viewport.scroll_y;
    let pager = app.browse.pager();
    let page_count = pager.page_count(items);

    if let Some(label_area) = place(body, layout.banner_height, 1, scroll_y) {
        let label = Line::from(vec![
            Span::styled(" Page ", Style::default().fg(theme.subtext)),
            Span::styled(
                format!("{}/{}", pager.index() + 1, page_count.max(1)),
                Style::default().fg(theme.text),
            ),
        ]);
        frame.render_widget(Paragraph::new(label), label_area);
    }

    let Some(row) = place(body, layout.row_top, ROW_HEIGHT, scroll_y) else {
        return Vec::new();
    };

    let selected_id = app.route_match().map(|m| m.item_id);
    let focused = app.focus.selected(app.visible().len());

    match app.browse.transition().offsets(now, row.width) {
        Some(offsets) => {
            let exiting = pager.page(items, offsets.exiting_page);
            draw_page(frame, exiting, row, offsets.exiting_x, pager.page_size(), None, None, theme);
            let entering = pager.page(items, offsets.entering_page);
            draw_page(
                frame,
                entering,
                row,
                offsets.entering_x,
                pager.page_size(),
                focused,
                selected_id.as_deref(),
                theme,
            )
        }
        None => draw_page(
            frame,
            app.visible(),
            row,
            0,
            pager.page_size(),
            focused,
            selected_id.as_deref(),
            theme,
        ),
    }
}

#[allow(clippy::too_many_arguments)]
fn draw_page(
    frame: &mut Frame,
    movies: &[Movie],
    row: Rect,
    dx: i32,
    page_size: usize,
    focused: Option<usize>,
    selected_id: Option<&str>,
    theme: &Theme,
) -> Vec<(Rect, i64)> {
    let mut hits = Vec::new();
    for (i, (slot, movie)) in box_rects(row, movies.len(), page_size)
        .into_iter()
        .zip(movies)
        .enumerate()
    {
        let Some(area) = slide(slot, dx, row) else {
            continue;
        };
        let is_selected = selected_id == Some(movie.id.to_string().as_str());
        render_box(frame, movie, area, focused == Some(i), is_selected, theme);
        hits.push((area, movie.id));
    }
    hits
}

fn render_box(
    frame: &mut Frame,
    movie: &Movie,
    area: Rect,
    focused: bool,
    selected: bool,
    theme: &Theme,
) {
    let border = if selected {
        theme.highlight
    } else if focused {
        theme.accent
    } else {
        theme.border
    };
    let inner_width = area.width.saturating_sub(2) as usize;

    let mut lines = vec![Line::from(Span::styled(
        truncate(&movie.title, inner_width * 2),
        Style::default().fg(theme.text).bold(),
    ))];
    let meta = [
        movie.release_year().map(str::to_owned),
        format_rating(movie.vote_average),
    ]
    .into_iter()
    .flatten()
    .collect::<Vec<_>>()
    .join(" ");
    if !meta.is_empty() {
        lines.push(Line::from(Span::styled(
            truncate(&meta, inner_width),
            Style::default().fg(theme.subtext),
        )));
    }

    let widget = Paragraph::new(Text::from(lines))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border))
                .style(Style::default().bg(theme.surface)),
        )
        .wrap(Wrap { trim: true });

    frame.render_widget(widget, area);
}

fn render_footer(frame: &mut Frame, app: &App, theme: &Theme, area: Rect) {
    // Show status message if present (takes priority)
    if let Some(status) = &app.status_message {
        let color = if status.is_error { theme.error } else { theme.accent };
        let footer = Paragraph::new(Line::from(vec![
            Span::styled(" ", Style::default()),
            Span::styled(&status.text, Style::default().fg(color)),
        ]))
        .style(Style::default().bg(theme.surface));

        frame.render_widget(footer, area);
        return;
    }

    let mut spans = if app.is_overlay_open() {
        vec![
            Span::styled(" Esc", Style::default().fg(theme.accent)),
            Span::styled(" close ", Style::default().fg(theme.subtext)),
            Span::styled(" Backspace", Style::default().fg(theme.accent)),
            Span::styled(" back ", Style::default().fg(theme.subtext)),
            Span::styled(" j/k", Style::default().fg(theme.accent)),
            Span::styled(" scroll ", Style::default().fg(theme.subtext)),
        ]
    } else {
        vec![
            Span::styled(" Space", Style::default().fg(theme.accent)),
            Span::styled(" next page ", Style::default().fg(theme.subtext)),
            Span::styled(" h/l", Style::default().fg(theme.accent)),
            Span::styled(" focus ", Style::default().fg(theme.subtext)),
            Span::styled(" Enter", Style::default().fg(theme.accent)),
            Span::styled(" details ", Style::default().fg(theme.subtext)),
            Span::styled(" r", Style::default().fg(theme.accent)),
            Span::styled(" refresh ", Style::default().fg(theme.subtext)),
            Span::styled(" ?", Style::default().fg(theme.accent)),
            Span::styled(" help", Style::default().fg(theme.subtext)),
        ]
    };

    if app.query.is_fetching() {
        spans.push(Span::styled(" │ ", Style::default().fg(theme.border)));
        spans.push(Span::styled("fetching…", Style::default().fg(theme.subtext)));
    } else if app.query.from_cache() {
        spans.push(Span::styled(" │ ", Style::default().fg(theme.border)));
        spans.push(Span::styled("cached", Style::default().fg(theme.subtext)));
    }

    let footer = Paragraph::new(Line::from(spans)).style(Style::default().bg(theme.surface));
    frame.render_widget(footer, area);
}
