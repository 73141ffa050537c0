//! Event handling for the TUI

use anyhow::Result;
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use std::time::{Duration, Instant};

use super::app::App;

const POLL_TIMEOUT: Duration = Duration::from_millis(100);

/// Poll faster while a slide is running so frames keep coming
const ANIMATION_POLL_TIMEOUT: Duration = Duration::from_millis(16);

/// Handle all input events
pub fn handle_events(app: &mut App) -> Result<()> {
    let timeout = if app.is_animating() {
        ANIMATION_POLL_TIMEOUT
    } else {
        POLL_TIMEOUT
    };
    if event::poll(timeout)? {
        let now = Instant::now();
        match event::read()? {
            Event::Key(key) => handle_key_event(app, key, now),
            Event::Mouse(mouse) => handle_mouse_event(app, mouse, now),
            Event::Resize(_, _) => {} // Terminal will redraw automatically
            _ => {}
        }
    }
    Ok(())
}

pub(crate) fn handle_key_event(app: &mut App, key: KeyEvent, now: Instant) {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.quit();
        return;
    }

    // Handle overlays (help, then details)
    if app.show_help {
        if matches!(
            key.code,
            KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q')
        ) {
            app.show_help = false;
        }
        return;
    }

    // Clear status message on any key press
    app.clear_status();

    if app.is_overlay_open() {
        handle_overlay_keys(app, key);
        return;
    }

    handle_normal_mode(app, key, now);
}

fn handle_overlay_keys(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => app.close_overlay(),
        KeyCode::Backspace => {
            app.back();
        }
        KeyCode::Char('j') | KeyCode::Down => app.scroll_down(),
        KeyCode::Char('k') | KeyCode::Up => app.scroll_up(),
        KeyCode::Char('?') => app.toggle_help(),
        _ => {}
    }
}

fn handle_normal_mode(app: &mut App, key: KeyEvent, now: Instant) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.quit(),

        // Paging
        KeyCode::Char(' ') | KeyCode::Char('n') | KeyCode::Char(']') => {
            app.advance_page(now);
        }

        // Row focus
        KeyCode::Char('l') | KeyCode::Right | KeyCode::Tab => app.focus_next(),
        KeyCode::Char('h') | KeyCode::Left | KeyCode::BackTab => app.focus_prev(),
        KeyCode::Char('g') | KeyCode::Home => app.focus_first(),
        KeyCode::Char('G') | KeyCode::End => app.focus_last(),
        KeyCode::Enter => app.open_focused(),
        KeyCode::Backspace => {
            app.back();
        }

        // Scrolling
        KeyCode::Char('j') | KeyCode::Down => app.scroll_down(),
        KeyCode::Char('k') | KeyCode::Up => app.scroll_up(),

        KeyCode::Char('r') => app.refresh(),
        KeyCode::Char('t') => app.cycle_theme(),
        KeyCode::Char('?') => app.toggle_help(),
        _ => {}
    }
}

fn handle_mouse_event(app: &mut App, mouse: MouseEvent, now: Instant) {
    if app.show_help {
        if let MouseEventKind::Down(_) = mouse.kind {
            app.show_help = false;
        }
        return;
    }

    match mouse.kind {
        MouseEventKind::ScrollUp => app.scroll_up(),
        MouseEventKind::ScrollDown => app.scroll_down(),
        MouseEventKind::Down(MouseButton::Left) => app.click(mouse.column, mouse.row, now),
        _ => {}
    }
}
