//! Reusable UI components
//!
//! KPI cards are formatted into a [`CardFragment`] first, which is pure and
//! testable, then painted with the active theme colors.

use crate::theme::{self, ThemeColors};
use crate::types::{AccentClass, KpiCard};
use eframe::egui;

/// Trend direction of a card delta
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeltaDirection {
    Up,
    Down,
    Neutral,
}

impl DeltaDirection {
    /// Leading `-` (or unicode minus) means down, empty means neutral, anything else up.
    pub fn of(delta: &str) -> Self {
        match delta.trim_start().chars().next() {
            None => DeltaDirection::Neutral,
            Some('-') | Some('−') => DeltaDirection::Down,
            Some(_) => DeltaDirection::Up,
        }
    }

    pub fn arrow(self) -> &'static str {
        match self {
            DeltaDirection::Up => egui_phosphor::regular::ARROW_UP,
            DeltaDirection::Down => egui_phosphor::regular::ARROW_DOWN,
            DeltaDirection::Neutral => "",
        }
    }
}

/// Progress bar portion of a card
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressFragment {
    /// Clamped to [0, 100]
    pub percent: f64,
    /// Bar width, e.g. "95%"
    pub width: String,
    /// Caption, e.g. "Target (95%)"
    pub label: String,
}

impl ProgressFragment {
    pub fn new(progress: f64) -> Self {
        let percent = if progress.is_nan() {
            0.0
        } else {
            progress.clamp(0.0, 100.0)
        };
        let text = format_percent(percent);
        Self {
            percent,
            width: format!("{}%", text),
            label: format!("Target ({}%)", text),
        }
    }

    pub fn fraction(&self) -> f32 {
        (self.percent / 100.0) as f32
    }
}

fn format_percent(p: f64) -> String {
    if p.fract() == 0.0 {
        format!("{:.0}", p)
    } else {
        format!("{:.1}", p)
    }
}

/// Display-ready KPI card
#[derive(Debug, Clone, PartialEq)]
pub struct CardFragment {
    pub title: String,
    pub value: String,
    pub delta: Option<(String, DeltaDirection)>,
    pub accent: AccentClass,
    pub icon: Option<String>,
    pub progress: Option<ProgressFragment>,
}

impl CardFragment {
    pub fn new(card: &KpiCard) -> Self {
        Self {
            title: card.title.to_string(),
            value: card.value.to_string(),
            delta: card
                .delta
                .filter(|d| !d.trim().is_empty())
                .map(|d| (d.to_string(), DeltaDirection::of(d))),
            accent: card.accent,
            icon: card.icon.map(str::to_string),
            progress: card.progress.map(ProgressFragment::new),
        }
    }
}

/// Paint a KPI card filling the available width. The border and shadow follow
/// the pointer, so the frame is painted after its contents are laid out.
pub fn render_card(ui: &mut egui::Ui, card: &CardFragment, colors: &ThemeColors) -> egui::Response {
    let accent = theme::accent_color(card.accent);
    let mut prepared = theme::card_frame(colors).begin(ui);
    card_contents(&mut prepared.content_ui, card, accent, colors);
    let response = prepared.allocate_space(ui);

    let hovered = response.contains_pointer();
    prepared.frame.stroke = theme::card_stroke(colors, hovered);
    prepared.frame.shadow = theme::card_shadow(colors, hovered);
    prepared.paint(ui);

    // Accent strip on the left edge
    let rect = response.rect;
    let strip = egui::Rect::from_min_size(rect.min, egui::vec2(4.0, rect.height()));
    ui.painter().rect_filled(
        strip,
        egui::CornerRadius {
            nw: theme::RADIUS_LARGE as u8,
            sw: theme::RADIUS_LARGE as u8,
            ne: 0,
            se: 0,
        },
        accent,
    );
    response
}

fn card_contents(ui: &mut egui::Ui, card: &CardFragment, accent: egui::Color32, colors: &ThemeColors) {
    ui.set_min_height(theme::KPI_CARD_HEIGHT - 30.0);
    ui.set_width(ui.available_width());
    ui.horizontal(|ui| {
        if let Some(icon) = &card.icon {
            ui.label(egui::RichText::new(icon).size(theme::FONT_HEADING).color(accent));
        }
        ui.label(
            egui::RichText::new(&card.title)
                .size(theme::FONT_LABEL)
                .color(colors.text_muted),
        );
    });
    ui.label(
        egui::RichText::new(&card.value)
            .size(theme::FONT_KPI_VALUE)
            .strong()
            .color(colors.text),
    );
    if let Some((text, direction)) = &card.delta {
        let color = match direction {
            DeltaDirection::Up => theme::DELTA_UP,
            DeltaDirection::Down => theme::DELTA_DOWN,
            DeltaDirection::Neutral => colors.text_muted,
        };
        ui.label(
            egui::RichText::new(format!("{} {}", direction.arrow(), text))
                .size(theme::FONT_LABEL)
                .color(color),
        );
    }
    if let Some(progress) = &card.progress {
        ui.add_space(theme::SPACING_SM);
        progress_bar(ui, progress, accent, colors);
    }
}

fn progress_bar(ui: &mut egui::Ui, progress: &ProgressFragment, fill: egui::Color32, colors: &ThemeColors) {
    let w = ui.available_width();
    let (rect, response) =
        ui.allocate_exact_size(egui::vec2(w, theme::PROGRESS_HEIGHT), egui::Sense::hover());
    let painter = ui.painter();
    painter.rect_filled(rect, theme::RADIUS_SMALL, colors.grid);
    let filled = egui::Rect::from_min_size(
        rect.min,
        egui::vec2(rect.width() * progress.fraction(), rect.height()),
    );
    painter.rect_filled(filled, theme::RADIUS_SMALL, fill);
    response.on_hover_text(format!("width: {}", progress.width));
    ui.label(
        egui::RichText::new(&progress.label)
            .size(theme::FONT_SMALL)
            .color(colors.text_muted),
    );
}

/// Section subheader with an optional emoji/icon prefix
pub fn section_header(ui: &mut egui::Ui, text: &str, colors: &ThemeColors) {
    ui.label(
        egui::RichText::new(text)
            .size(theme::FONT_HEADING)
            .strong()
            .color(colors.text),
    );
    ui.add_space(theme::SPACING_SM);
}

/// Thin horizontal rule in the grid color
pub fn divider(ui: &mut egui::Ui, colors: &ThemeColors) {
    ui.add_space(theme::SPACING_MD);
    let w = ui.available_width();
    let (rect, _) = ui.allocate_exact_size(egui::vec2(w, 1.0), egui::Sense::hover());
    ui.painter().rect_filled(rect, 0.0, colors.grid);
    ui.add_space(theme::SPACING_MD);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_95_renders_width_and_label() {
        let card = KpiCard::new("Orders", "3,912", AccentClass::Orange).progress(95.0);
        let fragment = CardFragment::new(&card);
        let progress = fragment.progress.unwrap();
        assert_eq!(progress.width, "95%");
        assert!(progress.label.contains("(95%)"));
    }

    #[test]
    fn progress_is_clamped() {
        assert_eq!(ProgressFragment::new(140.0).width, "100%");
        assert_eq!(ProgressFragment::new(-5.0).width, "0%");
        assert_eq!(ProgressFragment::new(f64::NAN).percent, 0.0);
        assert_eq!(ProgressFragment::new(f64::INFINITY).percent, 100.0);
    }

    #[test]
    fn fractional_progress_keeps_one_decimal() {
        let p = ProgressFragment::new(42.3);
        assert_eq!(p.width, "42.3%");
        assert!((p.fraction() - 0.423).abs() < 1e-6);
    }

    #[test]
    fn delta_direction_follows_sign() {
        assert_eq!(DeltaDirection::of("-2% (Low)"), DeltaDirection::Down);
        assert_eq!(DeltaDirection::of(" −0.3%"), DeltaDirection::Down);
        assert_eq!(DeltaDirection::of("🔥 +120 Today"), DeltaDirection::Up);
        assert_eq!(DeltaDirection::of("+15%"), DeltaDirection::Up);
        assert_eq!(DeltaDirection::of("  "), DeltaDirection::Neutral);
    }

    #[test]
    fn blank_delta_is_dropped() {
        let card = KpiCard::new("Revenue", "$1,240", AccentClass::Green).delta("  ");
        let fragment = CardFragment::new(&card);
        assert_eq!(fragment.delta, None);
        assert_eq!(fragment.progress, None);
    }
}
