//! Application state for the TUI

mod focus;


use std::time::Instant;

use ratatui::layout::{Position, Rect};
use tracing::{debug, info};

pub use focus::RowFocus;

use crate::browse::{
    BrowseState, MemoryHistory, Navigator, OverlayController, OverlayView, RouteMatch, Viewport,
    banner, resolve,
};
use crate::config::MarqueeConfig;
use crate::db::Database;
use crate::models::Movie;
use crate::source::{Query, QueryEvent};

use super::theme::{Theme, ThemeVariant};

/// Status message to display temporarily
#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub is_error: bool,
}

/// Main application state
pub struct App {
    pub running: bool,
    pub config: MarqueeConfig,

    // Listing
    pub query: Query,

    // Paging and navigation
    pub browse: BrowseState,
    pub history: MemoryHistory,
    pub overlay: OverlayController,
    pub focus: RowFocus,

    // Document viewport, refreshed on every render
    pub viewport: Viewport,
    pub max_scroll: u16,

    // UI state
    pub show_help: bool,
    pub theme_variant: ThemeVariant,
    pub status_message: Option<StatusMessage>,

    // Mouse hit areas from the last render
    pub last_banner_area: Option<Rect>,
    pub last_box_areas: Vec<(Rect, i64)>,
    pub last_overlay_area: Option<Rect>,
}

impl App {
    pub fn new(config: MarqueeConfig, query: Query, history: MemoryHistory) -> Self {
        let browse = BrowseState::new(
            config.browse.page_size,
            config.browse.transition(),
            config.browse.gate_timeout(),
        );
        let overlay = OverlayController::new(config.browse.overlay_offset);
        let theme_variant = ThemeVariant::from_config_theme(config.tui.theme);

        Self {
            running: true,
            config,
            query,
            browse,
            history,
            overlay,
            focus: RowFocus::default(),
            viewport: Viewport::default(),
            max_scroll: 0,
            show_help: false,
            theme_variant,
            status_message: None,
            last_banner_area: None,
            last_box_areas: Vec::new(),
            last_overlay_area: None,
        }
    }

    /// Quit the application
    pub fn quit(&mut self) {
        self.running = false;
    }

    /// Get the current theme
    pub fn theme(&self) -> Theme {
        self.theme_variant.theme()
    }

    /// Cycle to the next theme
    pub fn cycle_theme(&mut self) {
        self.theme_variant = self.theme_variant.next();
        self.set_status(format!("Theme: {}", self.theme_variant.display_name()), false);
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    // ==================== Listing ====================

    /// Loaded movies, `None` while loading
    pub fn items(&self) -> Option<&[Movie]> {
        self.query.items()
    }

    /// Whether the loader should be shown instead of the page
    pub fn is_loading(&self) -> bool {
        self.query.is_loading() || self.query.data().is_none()
    }

    pub fn banner(&self) -> Option<&Movie> {
        self.items().and_then(banner)
    }

    /// Movies on the current page
    pub fn visible(&self) -> &[Movie] {
        self.items().map(|items| self.browse.visible(items)).unwrap_or(&[])
    }

    /// Pick up a finished fetch, if any
    pub fn poll_query(&mut self, db: Option<&Database>) {
        match self.query.poll(db) {
            Some(QueryEvent::Loaded) => {
                let count = self.items().map(<[Movie]>::len).unwrap_or(0);
                self.browse.clamp(count);
                info!(count, "listing ready");
                self.set_status(format!("Loaded {count} movies"), false);
            }
            Some(QueryEvent::Failed(e)) => {
                self.set_status(format!("Fetch failed: {}", e.short()), true);
            }
            None => {}
        }
    }

    /// Fetch the listing again, keeping what is shown meanwhile
    pub fn refresh(&mut self) {
        if self.query.is_fetching() {
            return;
        }
        self.query.refetch();
        self.set_status("Refreshing…", false);
    }

    // ==================== Paging ====================

    /// Advance to the next page unless a slide is still running
    pub fn advance_page(&mut self, now: Instant) -> bool {
        let accepted = match self.query.items() {
            Some(items) => self.browse.advance(Some(items), now),
            None => false,
        };
        if accepted {
            self.focus.first();
        }
        accepted
    }

    /// Drive animations and the gate fallback
    pub fn tick(&mut self, now: Instant) {
        self.browse.tick(now);
    }

    pub fn is_animating(&self) -> bool {
        self.browse.is_animating()
    }

    pub fn focus_next(&mut self) {
        let len = self.visible().len();
        self.focus.next(len);
    }

    pub fn focus_prev(&mut self) {
        let len = self.visible().len();
        self.focus.prev(len);
    }

    pub fn focus_first(&mut self) {
        self.focus.first();
    }

    pub fn focus_last(&mut self) {
        let len = self.visible().len();
        self.focus.last(len);
    }

    /// Movie whose box has keyboard focus
    pub fn focused_movie(&self) -> Option<&Movie> {
        let visible = self.visible();
        self.focus.selected(visible.len()).and_then(|i| visible.get(i))
    }

    // ==================== Overlay ====================

    /// Detail route for the current location
    pub fn route_match(&self) -> Option<RouteMatch> {
        self.history.route_match()
    }

    pub fn is_overlay_open(&self) -> bool {
        self.route_match().is_some()
    }

    /// Movie the overlay shows, `None` when closed or unresolved
    pub fn selected_movie(&self) -> Option<&Movie> {
        let route = self.route_match()?;
        resolve(Some(&route.item_id), self.items())
    }

    /// Overlay content for rendering
    pub fn overlay_view(&self) -> Option<OverlayView<'_>> {
        self.overlay.view(&self.history, self.items(), &self.viewport)
    }

    pub fn open(&mut self, id: i64) {
        self.overlay.open(&mut self.history, id);
    }

    /// Open the overlay for the focused box
    pub fn open_focused(&mut self) {
        if let Some(id) = self.focused_movie().map(|m| m.id) {
            self.open(id);
        }
    }

    pub fn close_overlay(&mut self) {
        self.overlay.close(&mut self.history);
    }

    /// History back; returns false at the first entry
    pub fn back(&mut self) -> bool {
        self.history.back()
    }

    // ==================== Viewport ====================

    /// Record the terminal size used by the current render
    pub fn set_viewport(&mut self, width: u16, height: u16) {
        self.viewport.width = width;
        self.viewport.height = height;
    }

    /// Record how far the document can scroll
    pub fn set_max_scroll(&mut self, max_scroll: u16) {
        self.max_scroll = max_scroll;
        self.viewport.scroll_y = self.viewport.scroll_y.min(max_scroll);
    }

    pub fn scroll_down(&mut self) {
        if self.viewport.scroll_y < self.max_scroll {
            self.viewport.scroll_y += 1;
        }
    }

    pub fn scroll_up(&mut self) {
        self.viewport.scroll_y = self.viewport.scroll_y.saturating_sub(1);
    }

    // ==================== Mouse ====================

    /// Left click at a screen position
    ///
    /// With the overlay open, a click outside it closes it. Otherwise a click
    /// on the banner advances the page and a click on a box opens its details.
    pub fn click(&mut self, x: u16, y: u16, now: Instant) {
        let pos = Position::new(x, y);

        if self.is_overlay_open() {
            let inside = self.last_overlay_area.is_some_and(|area| area.contains(pos));
            if !inside {
                self.close_overlay();
            }
            return;
        }

        if self.last_banner_area.is_some_and(|area| area.contains(pos)) {
            self.advance_page(now);
            return;
        }

        let hit = self
            .last_box_areas
            .iter()
            .position(|(area, _)| area.contains(pos));
        if let Some(index) = hit {
            let id = self.last_box_areas[index].1;
            debug!(id, "box clicked");
            let len = self.visible().len();
            if let Some(slot) = self.visible().iter().position(|m| m.id == id) {
                self.focus.select(slot, len);
            }
            self.open(id);
        }
    }

    // ==================== Status ====================

    pub fn set_status(&mut self, text: impl Into<String>, is_error: bool) {
        self.status_message = Some(StatusMessage {
            text: text.into(),
            is_error,
        });
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}
