//! Theme resolution: Light/Dark selection to color tokens
//!
//! The content area is themed from a single two-valued switch. Every token the
//! renderer needs comes out of [`resolve`] as one record, so adding a chart
//! never means hunting for a stray color variable. Sidebar and header chrome
//! stay branded and use [`BRAND`] regardless of the selection.

use crate::error::{DashboardError, Result};
use std::fmt;
use std::str::FromStr;

/// Theme selection for the content area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub const ALL: [ThemeMode; 2] = [ThemeMode::Light, ThemeMode::Dark];

    pub fn label(self) -> &'static str {
        match self {
            ThemeMode::Light => "Light",
            ThemeMode::Dark => "Dark",
        }
    }

    pub fn is_dark(self) -> bool {
        self == ThemeMode::Dark
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ThemeMode {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            _ => Err(DashboardError::invalid_theme(s)),
        }
    }
}

/// Resolved color tokens for the content area. Values are CSS color literals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorPalette {
    pub main_background: &'static str,
    pub text_color: &'static str,
    pub card_background: &'static str,
    pub card_shadow: &'static str,
    pub card_border: &'static str,
    pub chart_text_color: &'static str,
    pub bar_color: &'static str,
    pub grid_line_color: &'static str,
}

impl ColorPalette {
    /// (token name, value) pairs, in declaration order.
    pub fn tokens(&self) -> [(&'static str, &'static str); 8] {
        [
            ("main_background", self.main_background),
            ("text_color", self.text_color),
            ("card_background", self.card_background),
            ("card_shadow", self.card_shadow),
            ("card_border", self.card_border),
            ("chart_text_color", self.chart_text_color),
            ("bar_color", self.bar_color),
            ("grid_line_color", self.grid_line_color),
        ]
    }
}

const LIGHT: ColorPalette = ColorPalette {
    main_background: "#F5F7FA",
    text_color: "#1F2937",
    card_background: "#FFFFFF",
    card_shadow: "rgba(0, 0, 0, 0.08)",
    card_border: "#E2E8F0",
    chart_text_color: "black",
    bar_color: "#0A4DA2",
    grid_line_color: "#E5E7EB",
};

const DARK: ColorPalette = ColorPalette {
    main_background: "#042f66",
    text_color: "white",
    card_background: "#0A3D7A",
    card_shadow: "rgba(0, 0, 0, 0.45)",
    card_border: "#1E5AA8",
    chart_text_color: "white",
    bar_color: "#4FC3F7",
    grid_line_color: "rgba(255, 255, 255, 0.15)",
};

/// Theme-invariant chrome colors (sidebar, header).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrandPalette {
    pub sidebar_background: &'static str,
    pub header_background: &'static str,
    pub text: &'static str,
    pub text_muted: &'static str,
    pub nav_active: &'static str,
}

pub const BRAND: BrandPalette = BrandPalette {
    sidebar_background: "#0A4DA2",
    header_background: "#083D82",
    text: "white",
    text_muted: "#BFD4F2",
    nav_active: "#1565C0",
};

/// Palette for a theme selection.
pub fn resolve(selection: ThemeMode) -> ColorPalette {
    match selection {
        ThemeMode::Light => LIGHT,
        ThemeMode::Dark => DARK,
    }
}

/// Palette for a raw selection label such as "Dark".
pub fn resolve_named(label: &str) -> Result<ColorPalette> {
    label.parse::<ThemeMode>().map(resolve)
}

/// Outcome of a selection event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeChange {
    Unchanged,
    Rerender,
}

impl ThemeChange {
    pub fn needs_rerender(self) -> bool {
        self == ThemeChange::Rerender
    }
}

/// Session-scoped theme selection. Never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ThemeState {
    current: ThemeMode,
}

impl ThemeState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> ThemeMode {
        self.current
    }

    pub fn palette(&self) -> ColorPalette {
        resolve(self.current)
    }

    /// Apply a user selection. Re-selecting the current theme is a no-op.
    pub fn apply(&mut self, selection: ThemeMode) -> ThemeChange {
        if selection == self.current {
            return ThemeChange::Unchanged;
        }
        self.current = selection;
        ThemeChange::Rerender
    }

    /// Apply a selection given by label. An invalid label leaves the state untouched.
    pub fn apply_named(&mut self, label: &str) -> Result<ThemeChange> {
        let selection = label.parse()?;
        Ok(self.apply(selection))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_is_deterministic() {
        for mode in ThemeMode::ALL {
            assert_eq!(resolve(mode), resolve(mode));
        }
        assert_ne!(resolve(ThemeMode::Light), resolve(ThemeMode::Dark));
    }

    #[test]
    fn resolve_named_rejects_unknown_theme() {
        let err = resolve_named("Solarized").unwrap_err();
        assert_eq!(err, DashboardError::InvalidTheme("Solarized".into()));
        assert!(resolve_named("").is_err());
    }

    #[test]
    fn resolve_named_accepts_labels() {
        assert_eq!(resolve_named("Dark").unwrap(), resolve(ThemeMode::Dark));
        assert_eq!(resolve_named(" light ").unwrap(), resolve(ThemeMode::Light));
    }

    #[test]
    fn initial_state_is_light() {
        let state = ThemeState::new();
        assert_eq!(state.current(), ThemeMode::Light);
        assert_eq!(state.palette().main_background, "#F5F7FA");
    }

    #[test]
    fn dark_selection_switches_palette() {
        let mut state = ThemeState::new();
        assert_eq!(state.apply(ThemeMode::Dark), ThemeChange::Rerender);
        assert_eq!(state.current(), ThemeMode::Dark);
        let palette = state.palette();
        assert_eq!(palette.main_background, "#042f66");
        assert_eq!(palette.chart_text_color, "white");
    }

    #[test]
    fn transitions_signal_rerender_only_on_change() {
        let mut state = ThemeState::new();
        assert!(state.apply(ThemeMode::Dark).needs_rerender());
        assert!(state.apply(ThemeMode::Light).needs_rerender());
        assert_eq!(state.current(), ThemeMode::Light);

        assert!(state.apply(ThemeMode::Dark).needs_rerender());
        assert_eq!(state.apply(ThemeMode::Dark), ThemeChange::Unchanged);
        assert_eq!(state.current(), ThemeMode::Dark);
    }

    #[test]
    fn invalid_label_leaves_state_untouched() {
        let mut state = ThemeState::new();
        state.apply(ThemeMode::Dark);
        assert!(state.apply_named("Sepia").is_err());
        assert_eq!(state.current(), ThemeMode::Dark);
        assert_eq!(state.apply_named("dark").unwrap(), ThemeChange::Unchanged);
    }

    #[test]
    fn reselecting_by_label_needs_no_rerender() {
        let mut state = ThemeState::new();
        assert!(!state.apply_named("Light").unwrap().needs_rerender());
        assert!(state.apply_named("Dark").unwrap().needs_rerender());
        assert!(!state.apply_named("DARK").unwrap().needs_rerender());
    }
}
