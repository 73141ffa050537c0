//! Theme support for the TUI
//!
//! Themes are plain values handed to every render function; nothing looks a
//! color up from global state.

use ratatui::style::Color;

use crate::config::TuiTheme;

/// A complete color theme for the TUI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub name: &'static str,
    pub background: Color, // Page background
    pub surface: Color,    // Boxes in the row
    pub border: Color,     // Box borders, separators
    pub overlay: Color,    // Detail overlay background
    pub text: Color,
    pub subtext: Color, // Overviews, hints
    pub accent: Color,  // Titles, focus
    pub highlight: Color,
    pub error: Color,
}

/// Available theme variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeVariant {
    #[default]
    Cinema,
    Noir,
    Matinee,
}

impl ThemeVariant {
    /// Get the theme for this variant
    pub fn theme(&self) -> Theme {
        match self {
            Self::Cinema => CINEMA,
            Self::Noir => NOIR,
            Self::Matinee => MATINEE,
        }
    }

    /// Cycle to the next theme
    pub fn next(&self) -> Self {
        match self {
            Self::Cinema => Self::Noir,
            Self::Noir => Self::Matinee,
            Self::Matinee => Self::Cinema,
        }
    }

    /// Convert from config TuiTheme
    pub fn from_config_theme(theme: TuiTheme) -> Self {
        match theme {
            TuiTheme::Cinema => Self::Cinema,
            TuiTheme::Noir => Self::Noir,
            TuiTheme::Matinee => Self::Matinee,
        }
    }

    /// Convert to config TuiTheme
    pub fn to_config_theme(&self) -> TuiTheme {
        match self {
            Self::Cinema => TuiTheme::Cinema,
            Self::Noir => TuiTheme::Noir,
            Self::Matinee => TuiTheme::Matinee,
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        self.theme().name
    }
}

// ============================================================================
// Theme Definitions
// ============================================================================

/// Cinema - black with marquee red
pub const CINEMA: Theme = Theme {
    name: "Cinema",
    background: Color::Rgb(0, 0, 0),
    surface: Color::Rgb(24, 24, 24),
    border: Color::Rgb(64, 64, 64),
    overlay: Color::Rgb(47, 47, 47),
    text: Color::Rgb(235, 235, 235),
    subtext: Color::Rgb(160, 160, 160),
    accent: Color::Rgb(229, 9, 20),
    highlight: Color::Rgb(255, 255, 255),
    error: Color::Rgb(255, 99, 71),
};

/// Noir - grayscale
pub const NOIR: Theme = Theme {
    name: "Noir",
    background: Color::Rgb(12, 12, 14),
    surface: Color::Rgb(30, 30, 34),
    border: Color::Rgb(80, 80, 88),
    overlay: Color::Rgb(40, 40, 46),
    text: Color::Rgb(220, 220, 220),
    subtext: Color::Rgb(140, 140, 140),
    accent: Color::Rgb(200, 200, 200),
    highlight: Color::Rgb(255, 255, 255),
    error: Color::Rgb(200, 80, 80),
};

/// Matinee - warm light theme
pub const MATINEE: Theme = Theme {
    name: "Matinee",
    background: Color::Rgb(250, 244, 232),
    surface: Color::Rgb(238, 228, 208),
    border: Color::Rgb(190, 170, 140),
    overlay: Color::Rgb(245, 236, 218),
    text: Color::Rgb(60, 44, 30),
    subtext: Color::Rgb(120, 100, 80),
    accent: Color::Rgb(176, 48, 32),
    highlight: Color::Rgb(20, 20, 20),
    error: Color::Rgb(190, 30, 30),
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_visits_every_variant() {
        let mut variant = ThemeVariant::default();
        let mut seen = vec![variant];
        for _ in 0..2 {
            variant = variant.next();
            seen.push(variant);
        }
        assert_eq!(seen, vec![ThemeVariant::Cinema, ThemeVariant::Noir, ThemeVariant::Matinee]);
        assert_eq!(variant.next(), ThemeVariant::Cinema);
    }

    #[test]
    fn test_config_round_trip() {
        for variant in [ThemeVariant::Cinema, ThemeVariant::Noir, ThemeVariant::Matinee] {
            assert_eq!(ThemeVariant::from_config_theme(variant.to_config_theme()), variant);
        }
    }
}
