//! Overlay rendering
//!
//! This module handles rendering of overlay widgets: movie details, help and
//! the loading indicator.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use super::super::theme::Theme;
use super::helpers::{centered_rect, format_rating};
use crate::browse::OverlayView;
use crate::images::make_image_path;

/// Image size requested for the overlay backdrop
const OVERLAY_IMAGE_SIZE: &str = "w500";

/// Smallest overlay width in columns
const MIN_OVERLAY_WIDTH: u16 = 30;

/// Screen area for the detail overlay
///
/// The overlay starts `anchor - scroll_y` rows into the body, takes 40% of
/// the width (at least [`MIN_OVERLAY_WIDTH`]) and 80% of the height, and is
/// clipped to the body.
pub fn detail_area(body: Rect, anchor: u16, scroll_y: u16) -> Option<Rect> {
    let offset = anchor.saturating_sub(scroll_y);
    if offset >= body.height {
        return None;
    }
    let width = (body.width * 2 / 5).max(MIN_OVERLAY_WIDTH).min(body.width);
    let height = (body.height * 4 / 5).min(body.height - offset).max(1);
    Some(Rect {
        x: body.x + (body.width - width) / 2,
        y: body.y + offset,
        width,
        height,
    })
}

/// Render the movie detail overlay
///
/// An unresolved movie still gets the frame, with an empty body.
pub fn render_detail_overlay(frame: &mut Frame, view: &OverlayView<'_>, theme: &Theme, area: Rect) {
    let mut lines = Vec::new();
    let mut title = String::from(" Details ");

    if let Some(movie) = view.movie {
        title = format!(" {} ", movie.title);

        let mut meta = Vec::new();
        if let Some(year) = movie.release_year() {
            meta.push(Span::styled(year.to_owned(), Style::default().fg(theme.subtext)));
        }
        if let Some(rating) = format_rating(movie.vote_average) {
            if !meta.is_empty() {
                meta.push(Span::styled("  ·  ", Style::default().fg(theme.border)));
            }
            meta.push(Span::styled(rating, Style::default().fg(theme.accent)));
        }

        lines.push(Line::from(Span::styled(
            movie.title.clone(),
            Style::default()
                .fg(theme.highlight)
                .add_modifier(Modifier::BOLD),
        )));
        if !meta.is_empty() {
            lines.push(Line::from(meta));
        }
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            movie.overview.clone(),
            Style::default().fg(theme.text),
        )));

        if movie.backdrop().is_some() {
            let url = make_image_path(movie.backdrop(), Some(OVERLAY_IMAGE_SIZE));
            lines.push(Line::from(""));
            lines.push(Line::from(vec![
                Span::styled("Backdrop: ", Style::default().fg(theme.subtext)),
                Span::styled(url, Style::default().fg(theme.border)),
            ]));
        }
    }

    let overlay = Paragraph::new(Text::from(lines))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.accent))
                .title(Span::styled(title, Style::default().fg(theme.accent).bold()))
                .title_bottom(Span::styled(" Esc close ", Style::default().fg(theme.subtext)))
                .style(Style::default().bg(theme.overlay)),
        )
        .wrap(Wrap { trim: true });

    frame.render_widget(Clear, area);
    frame.render_widget(overlay, area);
}

fn key_line<'a>(key: &'a str, description: &'a str, theme: &Theme) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("  {key:<12}"), Style::default().fg(theme.accent)),
        Span::styled(description, Style::default().fg(theme.text)),
    ])
}

fn section_line<'a>(title: &'a str, theme: &Theme) -> Line<'a> {
    Line::from(Span::styled(title, Style::default().fg(theme.highlight).bold()))
}

/// Render the help overlay
pub fn render_help_overlay(frame: &mut Frame, theme: &Theme, area: Rect) {
    let popup_area = centered_rect(60, 80, area);

    let help_text = vec![
        section_line("Browsing", theme),
        key_line("Space/n/]", "Next page", theme),
        key_line("h/l ←/→", "Move focus in the row", theme),
        key_line("g/G", "First/last box", theme),
        key_line("Enter", "Open details", theme),
        key_line("j/k ↓/↑", "Scroll", theme),
        Line::from(""),
        section_line("Details", theme),
        key_line("Esc/q", "Close", theme),
        key_line("Backspace", "History back", theme),
        Line::from(""),
        section_line("Mouse", theme),
        key_line("Banner", "Next page", theme),
        key_line("Box", "Open details", theme),
        key_line("Outside", "Close details", theme),
        key_line("Wheel", "Scroll", theme),
        Line::from(""),
        section_line("General", theme),
        key_line("r", "Refresh listing", theme),
        key_line("t", "Cycle theme", theme),
        key_line("?", "Toggle help", theme),
        key_line("q", "Quit", theme),
    ];

    let help = Paragraph::new(Text::from(help_text))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.accent))
                .title(Span::styled(" Help ", Style::default().fg(theme.accent).bold()))
                .style(Style::default().bg(theme.overlay)),
        )
        .wrap(Wrap { trim: false });

    frame.render_widget(Clear, popup_area);
    frame.render_widget(help, popup_area);
}

/// Render the loader shown until the listing arrives
pub fn render_loading(frame: &mut Frame, theme: &Theme, failed: Option<&str>, area: Rect) {
    let popup_area = centered_rect(50, 30, area);

    let lines = match failed {
        Some(reason) => vec![
            Line::from(""),
            Line::from(Span::styled(
                "Could not load movies",
                Style::default().fg(theme.error).bold(),
            )),
            Line::from(""),
            Line::from(Span::styled(reason, Style::default().fg(theme.subtext))),
            Line::from(""),
            Line::from(Span::styled("Press r to retry", Style::default().fg(theme.subtext))),
        ],
        None => vec![
            Line::from(""),
            Line::from(Span::styled("Loading...", Style::default().fg(theme.accent).bold())),
            Line::from(""),
            Line::from(Span::styled("Please wait", Style::default().fg(theme.subtext))),
        ],
    };

    let popup = Paragraph::new(Text::from(lines))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.border))
                .style(Style::default().bg(theme.background)),
        )
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    frame.render_widget(Clear, popup_area);
    frame.render_widget(popup, popup_area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_area_tracks_anchor() {
        let body = Rect::new(0, 0, 100, 40);

        let area = detail_area(body, 2, 0).unwrap();
        assert_eq!(area, Rect::new(30, 2, 40, 32));

        // Anchor follows scroll, so the screen position is the same
        assert_eq!(detail_area(body, 12, 10), Some(area));
    }

    #[test]
    fn test_detail_area_narrow_and_clipped() {
        let narrow = Rect::new(0, 0, 50, 10);
        let area = detail_area(narrow, 4, 0).unwrap();
        assert_eq!(area.width, 30);
        assert_eq!(area.x, 10);
        assert_eq!(area.height, 6);

        assert_eq!(detail_area(narrow, 10, 0), None);
    }
}
