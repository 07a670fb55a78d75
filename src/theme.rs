//! Centralized visual constants and egui styling for Analytics Pro
//! Palette tokens come from `palette`; this module turns them into egui colors,
//! visuals and frames.

use crate::error::{DashboardError, Result};
use crate::palette::{BrandPalette, ColorPalette, ThemeMode};
use crate::types::AccentClass;
use egui::Color32;

// =============================================================================
// COLORS - Accent classes
// =============================================================================
pub const ACCENT_BLUE: Color32 = Color32::from_rgb(0x1e, 0x88, 0xe5);
pub const ACCENT_GREEN: Color32 = Color32::from_rgb(0x43, 0xa0, 0x47);
pub const ACCENT_ORANGE: Color32 = Color32::from_rgb(0xfb, 0x8c, 0x00);
pub const ACCENT_RED: Color32 = Color32::from_rgb(0xe5, 0x39, 0x35);
pub const ACCENT_PURPLE: Color32 = Color32::from_rgb(0x8e, 0x24, 0xaa);

pub fn accent_color(class: AccentClass) -> Color32 {
    match class {
        AccentClass::Blue => ACCENT_BLUE,
        AccentClass::Green => ACCENT_GREEN,
        AccentClass::Orange => ACCENT_ORANGE,
        AccentClass::Red => ACCENT_RED,
        AccentClass::Purple => ACCENT_PURPLE,
    }
}

// =============================================================================
// COLORS - Delta indicators
// =============================================================================
pub const DELTA_UP: Color32 = Color32::from_rgb(0x21, 0xc3, 0x54);
pub const DELTA_DOWN: Color32 = Color32::from_rgb(0xff, 0x2b, 0x2b);

/// Card border while the pointer is over a KPI card
pub const CARD_HOVER_BORDER: Color32 = Color32::from_rgb(0xff, 0x4b, 0x4b);

// =============================================================================
// COLORS - Chart series
// =============================================================================
pub const SERIES_RED: &str = "#FF4B4B";
pub const SERIES_BLUE: &str = "#00B4D8";
pub const PIE_COLORS: [&str; 7] = [
    "#0A4DA2", "#00B4D8", "#FF4B4B", "#FBBF24", "#34D399", "#8E24AA", "#FB923C",
];

// =============================================================================
// TYPOGRAPHY - Font Sizes
// =============================================================================
pub const FONT_TITLE: f32 = 26.0;
pub const FONT_SUBTITLE: f32 = 15.0;
pub const FONT_HEADING: f32 = 17.0;
pub const FONT_KPI_VALUE: f32 = 28.0;
pub const FONT_BODY: f32 = 14.0;
pub const FONT_LABEL: f32 = 13.0;
pub const FONT_SMALL: f32 = 11.0;

// =============================================================================
// DIMENSIONS - Layout
// =============================================================================
pub const SIDEBAR_WIDTH: f32 = 230.0;
pub const HEADER_HEIGHT: f32 = 86.0;
pub const CHART_HEIGHT: f32 = 280.0;
pub const KPI_CARD_HEIGHT: f32 = 118.0;
pub const PROGRESS_HEIGHT: f32 = 6.0;
pub const NAV_ITEM_HEIGHT: f32 = 34.0;
pub const ROW_HEIGHT: f32 = 30.0;

// =============================================================================
// CORNER RADIUS
// =============================================================================
pub const RADIUS_SMALL: f32 = 3.0;
pub const RADIUS_DEFAULT: f32 = 6.0;
pub const RADIUS_LARGE: f32 = 10.0;

// =============================================================================
// STROKE WIDTHS
// =============================================================================
pub const STROKE_DEFAULT: f32 = 1.0;
pub const STROKE_THICK: f32 = 2.0;

// =============================================================================
// SPACING
// =============================================================================
pub const SPACING_SM: f32 = 4.0;
pub const SPACING_MD: f32 = 8.0;
pub const SPACING_LG: f32 = 12.0;
pub const SPACING_XL: f32 = 16.0;
pub const SPACING_XXL: f32 = 24.0;

// =============================================================================
// COLOR PARSING
// =============================================================================

/// Parse a CSS color literal: `#rgb`, `#rrggbb`, `#rrggbbaa`, `rgb(..)`,
/// `rgba(..)` or one of a few names.
pub fn parse_color(value: &str) -> Option<Color32> {
    let v = value.trim();
    if let Some(hex) = v.strip_prefix('#') {
        return parse_hex(hex);
    }
    let lower = v.to_ascii_lowercase();
    if let Some(args) = lower
        .strip_prefix("rgba(")
        .or_else(|| lower.strip_prefix("rgb("))
        .and_then(|rest| rest.strip_suffix(')'))
    {
        return parse_rgb_args(args);
    }
    match lower.as_str() {
        "white" => Some(Color32::WHITE),
        "black" => Some(Color32::BLACK),
        "grey" | "gray" => Some(Color32::from_rgb(0x80, 0x80, 0x80)),
        "transparent" => Some(Color32::TRANSPARENT),
        _ => None,
    }
}

fn parse_hex(hex: &str) -> Option<Color32> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    match hex.len() {
        3 => {
            let nib = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).ok().map(|n| n * 17);
            Some(Color32::from_rgb(nib(0)?, nib(1)?, nib(2)?))
        }
        6 => Some(Color32::from_rgb(byte(0)?, byte(2)?, byte(4)?)),
        8 => Some(Color32::from_rgba_unmultiplied(
            byte(0)?,
            byte(2)?,
            byte(4)?,
            byte(6)?,
        )),
        _ => None,
    }
}

fn parse_rgb_args(args: &str) -> Option<Color32> {
    let parts: Vec<&str> = args.split(',').map(str::trim).collect();
    let channel = |s: &str| s.parse::<u8>().ok();
    match parts.as_slice() {
        [r, g, b] => Some(Color32::from_rgb(channel(r)?, channel(g)?, channel(b)?)),
        [r, g, b, a] => {
            let alpha: f32 = a.parse().ok()?;
            if !(0.0..=1.0).contains(&alpha) {
                return None;
            }
            Some(Color32::from_rgba_unmultiplied(
                channel(r)?,
                channel(g)?,
                channel(b)?,
                (alpha * 255.0).round() as u8,
            ))
        }
        _ => None,
    }
}

fn token(name: &str, value: &str) -> Result<Color32> {
    parse_color(value).ok_or_else(|| DashboardError::invalid_color(name, value))
}

// =============================================================================
// RESOLVED COLORS
// =============================================================================

/// Content-area palette parsed into egui colors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThemeColors {
    pub mode: ThemeMode,
    pub background: Color32,
    pub text: Color32,
    pub text_muted: Color32,
    pub card_fill: Color32,
    pub card_shadow: Color32,
    pub card_border: Color32,
    pub chart_text: Color32,
    pub bar: Color32,
    pub grid: Color32,
}

impl ThemeColors {
    pub fn from_palette(mode: ThemeMode, palette: &ColorPalette) -> Result<Self> {
        let text = token("text_color", palette.text_color)?;
        Ok(Self {
            mode,
            background: token("main_background", palette.main_background)?,
            text,
            text_muted: text.gamma_multiply(0.65),
            card_fill: token("card_background", palette.card_background)?,
            card_shadow: token("card_shadow", palette.card_shadow)?,
            card_border: token("card_border", palette.card_border)?,
            chart_text: token("chart_text_color", palette.chart_text_color)?,
            bar: token("bar_color", palette.bar_color)?,
            grid: token("grid_line_color", palette.grid_line_color)?,
        })
    }

    /// Stock egui colors, used when a palette could not be applied.
    pub fn from_visuals(mode: ThemeMode) -> Self {
        let visuals = if mode.is_dark() {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        };
        let text = visuals.text_color();
        Self {
            mode,
            background: visuals.panel_fill,
            text,
            text_muted: text.gamma_multiply(0.65),
            card_fill: visuals.window_fill,
            card_shadow: visuals.window_shadow.color,
            card_border: visuals.window_stroke.color,
            chart_text: text,
            bar: visuals.selection.bg_fill,
            grid: visuals.widgets.noninteractive.bg_stroke.color,
        }
    }
}

/// Sidebar/header chrome parsed into egui colors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BrandColors {
    pub sidebar: Color32,
    pub header: Color32,
    pub text: Color32,
    pub text_muted: Color32,
    pub nav_active: Color32,
}

impl BrandColors {
    pub fn from_brand(brand: &BrandPalette) -> Result<Self> {
        Ok(Self {
            sidebar: token("sidebar_background", brand.sidebar_background)?,
            header: token("header_background", brand.header_background)?,
            text: token("chrome_text", brand.text)?,
            text_muted: token("chrome_text_muted", brand.text_muted)?,
            nav_active: token("nav_active", brand.nav_active)?,
        })
    }
}

/// Parse a list of series colors, e.g. for a chart call.
pub fn series_colors(values: &[&str]) -> Result<Vec<Color32>> {
    values
        .iter()
        .enumerate()
        .map(|(i, v)| token(&format!("series[{}]", i), v))
        .collect()
}

// =============================================================================
// HELPER - Apply global visuals
// =============================================================================
pub fn apply_visuals(ctx: &egui::Context, colors: &ThemeColors) {
    // Pin egui's theme so the OS preference never swaps our visuals out
    let (egui_theme, mut visuals) = if colors.mode.is_dark() {
        (egui::Theme::Dark, egui::Visuals::dark())
    } else {
        (egui::Theme::Light, egui::Visuals::light())
    };
    ctx.set_theme(egui_theme);
    visuals.panel_fill = colors.background;
    visuals.window_fill = colors.card_fill;
    visuals.extreme_bg_color = if colors.mode.is_dark() {
        lighten(colors.background, 0.06)
    } else {
        Color32::WHITE
    };
    visuals.faint_bg_color = colors.card_fill;
    visuals.override_text_color = Some(colors.text);
    visuals.hyperlink_color = colors.bar;
    visuals.selection.bg_fill = colors.bar.gamma_multiply(0.5);
    visuals.window_stroke = egui::Stroke::new(STROKE_DEFAULT, colors.card_border);
    visuals.window_corner_radius = egui::CornerRadius::same(RADIUS_LARGE as u8);
    visuals.menu_corner_radius = egui::CornerRadius::same(RADIUS_DEFAULT as u8);
    visuals.widgets.noninteractive.bg_stroke =
        egui::Stroke::new(STROKE_DEFAULT, colors.card_border);
    visuals.widgets.inactive.corner_radius = RADIUS_DEFAULT.into();
    visuals.widgets.hovered.corner_radius = RADIUS_DEFAULT.into();
    visuals.widgets.active.corner_radius = RADIUS_DEFAULT.into();
    visuals.interact_cursor = Some(egui::CursorIcon::PointingHand);
    visuals.popup_shadow = egui::epaint::Shadow {
        offset: [0, 4],
        blur: 12,
        spread: 0,
        color: colors.card_shadow,
    };
    ctx.set_visuals(visuals);

    ctx.style_mut(|style| {
        style.interaction.selectable_labels = false;
        style.spacing.item_spacing = egui::vec2(8.0, 6.0);
        style.spacing.button_padding = egui::vec2(12.0, 6.0);
        style.spacing.scroll.bar_width = 6.0;
        style.spacing.scroll.floating = false;
    });
}

// =============================================================================
// HELPER - Frames
// =============================================================================
pub fn card_frame(colors: &ThemeColors) -> egui::Frame {
    egui::Frame::new()
        .fill(colors.card_fill)
        .stroke(card_stroke(colors, false))
        .corner_radius(RADIUS_LARGE)
        .inner_margin(egui::Margin::symmetric(20, 15))
        .shadow(card_shadow(colors, false))
}

/// Card border; switches to the highlight color under the pointer.
pub fn card_stroke(colors: &ThemeColors, hovered: bool) -> egui::Stroke {
    let color = if hovered { CARD_HOVER_BORDER } else { colors.card_border };
    egui::Stroke::new(STROKE_DEFAULT, color)
}

/// Drop shadow under a card, lifted further while hovered.
pub fn card_shadow(colors: &ThemeColors, hovered: bool) -> egui::epaint::Shadow {
    let (offset_y, blur) = if hovered { (6, 14) } else { (4, 6) };
    egui::epaint::Shadow {
        offset: [0, offset_y],
        blur,
        spread: 0,
        color: colors.card_shadow,
    }
}

pub fn sidebar_frame(brand: &BrandColors) -> egui::Frame {
    egui::Frame::new()
        .fill(brand.sidebar)
        .inner_margin(egui::Margin::symmetric(14, 18))
}

pub fn header_frame(brand: &BrandColors) -> egui::Frame {
    egui::Frame::new()
        .fill(brand.header)
        .inner_margin(egui::Margin::symmetric(SPACING_XXL as i8, SPACING_LG as i8))
}

pub fn content_frame(colors: &ThemeColors) -> egui::Frame {
    egui::Frame::new()
        .fill(colors.background)
        .inner_margin(egui::Margin::same(SPACING_XXL as i8))
}

// =============================================================================
// HELPER - Buttons
// =============================================================================

/// Primary action button in the palette's bar color
pub fn button_primary(text: impl Into<String>, colors: &ThemeColors) -> egui::Button<'static> {
    egui::Button::new(egui::RichText::new(text.into()).color(Color32::WHITE))
        .fill(colors.bar)
        .corner_radius(RADIUS_DEFAULT)
}

/// Sidebar navigation entry. Returns true if clicked.
pub fn nav_item(ui: &mut egui::Ui, brand: &BrandColors, icon: &str, label: &str, active: bool) -> bool {
    let w = ui.available_width();
    let (rect, response) =
        ui.allocate_exact_size(egui::vec2(w, NAV_ITEM_HEIGHT), egui::Sense::click());
    let fill = if active {
        brand.nav_active
    } else if response.hovered() {
        lighten(brand.sidebar, 0.08)
    } else {
        Color32::TRANSPARENT
    };
    if response.hovered() {
        ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
    }
    let painter = ui.painter();
    painter.rect_filled(rect, RADIUS_DEFAULT, fill);
    painter.text(
        rect.left_center() + egui::vec2(10.0, 0.0),
        egui::Align2::LEFT_CENTER,
        format!("{}  {}", icon, label),
        egui::FontId::proportional(FONT_BODY),
        if active { brand.text } else { brand.text_muted },
    );
    response.clicked()
}

// =============================================================================
// HELPER - Segmented toggle (pill-style)
// =============================================================================

/// Two-segment Light/Dark selector on the branded sidebar.
/// Returns the label of the clicked segment, whether or not it is the current one.
pub fn theme_toggle(ui: &mut egui::Ui, brand: &BrandColors, current: ThemeMode) -> Option<&'static str> {
    let height = 29.0;
    let rounding = 4.0;
    let total_width = ui.available_width().min(180.0);
    let half = total_width / 2.0;

    let (rect, response) =
        ui.allocate_exact_size(egui::vec2(total_width, height), egui::Sense::click());
    let painter = ui.painter();

    // Layer 1: container
    painter.rect_filled(rect, rounding + 2.0, lighten(brand.sidebar, 0.1));

    let left_rect = egui::Rect::from_min_max(rect.min, egui::pos2(rect.min.x + half, rect.max.y));
    let right_rect = egui::Rect::from_min_max(egui::pos2(rect.min.x + half, rect.min.y), rect.max);
    let left_active = current == ThemeMode::Light;
    let active_rect = if left_active { left_rect } else { right_rect };

    // Layer 2: active segment inset 2px
    painter.rect_filled(active_rect.shrink(2.0), rounding, brand.nav_active);

    let (left_color, right_color) = if left_active {
        (brand.text, brand.text_muted)
    } else {
        (brand.text_muted, brand.text)
    };
    let labels = ThemeMode::ALL.map(ThemeMode::label);
    painter.text(
        left_rect.center(),
        egui::Align2::CENTER_CENTER,
        format!("{} {}", egui_phosphor::regular::SUN, labels[0]),
        egui::FontId::proportional(FONT_LABEL),
        left_color,
    );
    painter.text(
        right_rect.center(),
        egui::Align2::CENTER_CENTER,
        format!("{} {}", egui_phosphor::regular::MOON, labels[1]),
        egui::FontId::proportional(FONT_LABEL),
        right_color,
    );

    if response.hovered() {
        ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
    }

    if response.clicked() {
        if let Some(pos) = response.interact_pointer_pos() {
            return Some(if pos.x < rect.min.x + half { labels[0] } else { labels[1] });
        }
    }
    None
}

pub fn lighten(c: Color32, amount: f32) -> Color32 {
    let r = (c.r() as f32 + (255.0 - c.r() as f32) * amount) as u8;
    let g = (c.g() as f32 + (255.0 - c.g() as f32) * amount) as u8;
    let b = (c.b() as f32 + (255.0 - c.b() as f32) * amount) as u8;
    Color32::from_rgb(r, g, b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::{resolve, BRAND};

    #[test]
    fn parses_supported_literals() {
        assert_eq!(parse_color("#F5F7FA"), Some(Color32::from_rgb(0xf5, 0xf7, 0xfa)));
        assert_eq!(parse_color("#fff"), Some(Color32::WHITE));
        assert_eq!(parse_color("white"), Some(Color32::WHITE));
        assert_eq!(parse_color("rgb(1, 2, 3)"), Some(Color32::from_rgb(1, 2, 3)));
        assert_eq!(
            parse_color("rgba(0, 0, 0, 0.5)"),
            Some(Color32::from_rgba_unmultiplied(0, 0, 0, 128))
        );
    }

    #[test]
    fn rejects_malformed_literals() {
        assert_eq!(parse_color("#12345"), None);
        assert_eq!(parse_color("#zzzzzz"), None);
        assert_eq!(parse_color("rgba(0, 0, 0, 2)"), None);
        assert_eq!(parse_color("rgb(300, 0, 0)"), None);
        assert_eq!(parse_color("chartreuse-ish"), None);
    }

    #[test]
    fn every_palette_token_parses() {
        for mode in ThemeMode::ALL {
            let palette = resolve(mode);
            for (name, value) in palette.tokens() {
                assert!(parse_color(value).is_some(), "{} {} = {}", mode, name, value);
            }
            assert!(ThemeColors::from_palette(mode, &palette).is_ok());
        }
        assert!(BrandColors::from_brand(&BRAND).is_ok());
        assert!(series_colors(&PIE_COLORS).is_ok());
    }

    #[test]
    fn bad_token_reports_its_name() {
        let mut palette = resolve(ThemeMode::Light);
        palette.bar_color = "not-a-color";
        let err = ThemeColors::from_palette(ThemeMode::Light, &palette).unwrap_err();
        assert_eq!(err, DashboardError::invalid_color("bar_color", "not-a-color"));
    }

    #[test]
    fn hovered_card_switches_border_and_lifts_shadow() {
        let colors = ThemeColors::from_palette(ThemeMode::Light, &resolve(ThemeMode::Light)).unwrap();
        assert_eq!(card_stroke(&colors, false).color, Color32::from_rgb(0xe2, 0xe8, 0xf0));
        assert_eq!(card_stroke(&colors, true).color, CARD_HOVER_BORDER);
        assert_eq!(parse_color(SERIES_RED), Some(CARD_HOVER_BORDER));
        assert!(card_shadow(&colors, true).blur > card_shadow(&colors, false).blur);
    }

    #[test]
    fn dark_chart_text_is_white() {
        let colors = ThemeColors::from_palette(ThemeMode::Dark, &resolve(ThemeMode::Dark)).unwrap();
        assert_eq!(colors.chart_text, Color32::WHITE);
        assert_eq!(colors.background, Color32::from_rgb(0x04, 0x2f, 0x66));
    }
}
