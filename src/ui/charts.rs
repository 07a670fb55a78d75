//! Area, bar and pie charts painted directly with the egui painter
//!
//! Callers validate dataset shape first (`Dataset::ensure_shape`); these
//! functions only draw.

use crate::data::Dataset;
use crate::theme::{self, ThemeColors};
use crate::types::CategoryValue;
use eframe::egui::{self, Color32, Pos2, Rect, Stroke};

const MARGIN_LEFT: f32 = 44.0;
const MARGIN_RIGHT: f32 = 8.0;
const MARGIN_TOP: f32 = 26.0;
const MARGIN_BOTTOM: f32 = 22.0;
const GRID_LINES: usize = 4;

/// (min, max) over all values, always including zero. Never a zero-width span.
pub fn value_range(values: impl IntoIterator<Item = f64>) -> (f64, f64) {
    let (lo, hi) = values
        .into_iter()
        .filter(|v| v.is_finite())
        .fold((0.0_f64, 0.0_f64), |(lo, hi), v| (lo.min(v), hi.max(v)));
    if hi - lo < f64::EPSILON {
        (lo, lo + 1.0)
    } else {
        (lo, hi)
    }
}

/// Share of the total per slice. Negative values count as zero.
pub fn pie_fractions(items: &[CategoryValue]) -> Vec<f32> {
    let total: f64 = items.iter().map(|c| c.value.max(0.0)).sum();
    if total <= 0.0 {
        return vec![0.0; items.len()];
    }
    items
        .iter()
        .map(|c| (c.value.max(0.0) / total) as f32)
        .collect()
}

fn plot_rect(rect: Rect) -> Rect {
    Rect::from_min_max(
        egui::pos2(rect.min.x + MARGIN_LEFT, rect.min.y + MARGIN_TOP),
        egui::pos2(rect.max.x - MARGIN_RIGHT, rect.max.y - MARGIN_BOTTOM),
    )
}

fn format_tick(v: f64) -> String {
    if v.abs() >= 1000.0 {
        format!("{:.1}k", v / 1000.0)
    } else {
        format!("{:.0}", v)
    }
}

fn paint_grid(painter: &egui::Painter, plot: Rect, range: (f64, f64), colors: &ThemeColors) {
    let (lo, hi) = range;
    for i in 0..=GRID_LINES {
        let t = i as f32 / GRID_LINES as f32;
        let y = plot.max.y - t * plot.height();
        painter.line_segment(
            [egui::pos2(plot.min.x, y), egui::pos2(plot.max.x, y)],
            Stroke::new(theme::STROKE_DEFAULT, colors.grid),
        );
        painter.text(
            egui::pos2(plot.min.x - 6.0, y),
            egui::Align2::RIGHT_CENTER,
            format_tick(lo + (hi - lo) * t as f64),
            egui::FontId::proportional(theme::FONT_SMALL),
            colors.chart_text,
        );
    }
}

fn paint_legend(painter: &egui::Painter, rect: Rect, entries: &[(&str, Color32)], colors: &ThemeColors) {
    let mut x = rect.min.x + MARGIN_LEFT;
    let y = rect.min.y + MARGIN_TOP / 2.0 - 2.0;
    for (label, color) in entries {
        let swatch = Rect::from_center_size(egui::pos2(x + 5.0, y), egui::vec2(10.0, 10.0));
        painter.rect_filled(swatch, 2.0, *color);
        let text_rect = painter.text(
            egui::pos2(x + 14.0, y),
            egui::Align2::LEFT_CENTER,
            *label,
            egui::FontId::proportional(theme::FONT_SMALL),
            colors.chart_text,
        );
        x = text_rect.max.x + 14.0;
    }
}

/// Stacked-free area chart: one filled series per dataset column.
pub fn area_chart(ui: &mut egui::Ui, data: &Dataset, series: &[Color32], colors: &ThemeColors, height: f32) {
    let (rect, response) = ui.allocate_exact_size(
        egui::vec2(ui.available_width(), height),
        egui::Sense::hover(),
    );
    if !ui.is_rect_visible(rect) {
        return;
    }
    let painter = ui.painter_at(rect);
    let plot = plot_rect(rect);
    let range = value_range(data.rows.iter().flatten().copied());
    paint_grid(&painter, plot, range, colors);

    let n = data.row_count();
    let x_at = |i: usize| {
        if n <= 1 {
            plot.center().x
        } else {
            plot.min.x + plot.width() * i as f32 / (n - 1) as f32
        }
    };
    let y_at = |v: f64| plot.max.y - ((v - range.0) / (range.1 - range.0)) as f32 * plot.height();
    let baseline = y_at(range.0.max(0.0).min(range.1));

    for (col, name) in data.columns.iter().enumerate() {
        let color = series.get(col).copied().unwrap_or(colors.bar);
        let points: Vec<Pos2> = data
            .column(col)
            .enumerate()
            .map(|(i, v)| egui::pos2(x_at(i), y_at(v)))
            .collect();
        // Each segment's trapezoid down to the baseline is convex
        for pair in points.windows(2) {
            painter.add(egui::Shape::convex_polygon(
                vec![
                    pair[0],
                    pair[1],
                    egui::pos2(pair[1].x, baseline),
                    egui::pos2(pair[0].x, baseline),
                ],
                color.gamma_multiply(0.35),
                Stroke::NONE,
            ));
        }
        painter.add(egui::Shape::line(points, Stroke::new(theme::STROKE_THICK, color)));
        tracing::trace!(series = %name, rows = n, "Painted area series");
    }

    for i in [0, n / 2, n.saturating_sub(1)] {
        if i < n {
            painter.text(
                egui::pos2(x_at(i), plot.max.y + 4.0),
                egui::Align2::CENTER_TOP,
                format!("{}", i + 1),
                egui::FontId::proportional(theme::FONT_SMALL),
                colors.chart_text,
            );
        }
    }

    let legend: Vec<(&str, Color32)> = data
        .columns
        .iter()
        .enumerate()
        .map(|(i, c)| (c.as_str(), series.get(i).copied().unwrap_or(colors.bar)))
        .collect();
    paint_legend(&painter, rect, &legend, colors);

    if let Some(pos) = response.hover_pos() {
        if n > 0 && plot.x_range().contains(pos.x) {
            let idx = (((pos.x - plot.min.x) / plot.width()) * (n.max(2) - 1) as f32).round() as usize;
            let idx = idx.min(n - 1);
            painter.line_segment(
                [egui::pos2(x_at(idx), plot.min.y), egui::pos2(x_at(idx), plot.max.y)],
                Stroke::new(theme::STROKE_DEFAULT, colors.chart_text.gamma_multiply(0.4)),
            );
            let text = data
                .columns
                .iter()
                .zip(&data.rows[idx])
                .map(|(c, v)| format!("{}: {:.1}", c, v))
                .collect::<Vec<_>>()
                .join("\n");
            response.on_hover_text_at_pointer(format!("#{}\n{}", idx + 1, text));
        }
    }
}

/// Vertical bar chart in a single color.
pub fn bar_chart(ui: &mut egui::Ui, items: &[CategoryValue], color: Color32, colors: &ThemeColors, height: f32) {
    let (rect, _) = ui.allocate_exact_size(
        egui::vec2(ui.available_width(), height),
        egui::Sense::hover(),
    );
    if !ui.is_rect_visible(rect) || items.is_empty() {
        return;
    }
    let painter = ui.painter_at(rect);
    let plot = plot_rect(rect);
    let range = value_range(items.iter().map(|c| c.value));
    paint_grid(&painter, plot, range, colors);

    let slot = plot.width() / items.len() as f32;
    let bar_w = slot * 0.6;
    let y_at = |v: f64| plot.max.y - ((v - range.0) / (range.1 - range.0)) as f32 * plot.height();
    let zero = y_at(0.0_f64.clamp(range.0, range.1));

    for (i, item) in items.iter().enumerate() {
        let cx = plot.min.x + slot * (i as f32 + 0.5);
        let top = y_at(item.value);
        let bar = Rect::from_min_max(
            egui::pos2(cx - bar_w / 2.0, top.min(zero)),
            egui::pos2(cx + bar_w / 2.0, top.max(zero)),
        );
        painter.rect_filled(bar, theme::RADIUS_SMALL, color);
        painter.text(
            egui::pos2(cx, bar.min.y - 2.0),
            egui::Align2::CENTER_BOTTOM,
            format_tick(item.value),
            egui::FontId::proportional(theme::FONT_SMALL),
            colors.chart_text,
        );
        painter.text(
            egui::pos2(cx, plot.max.y + 4.0),
            egui::Align2::CENTER_TOP,
            &item.label,
            egui::FontId::proportional(theme::FONT_SMALL),
            colors.chart_text,
        );
    }
}

/// Pie chart with a legend on the right.
pub fn pie_chart(ui: &mut egui::Ui, items: &[CategoryValue], series: &[Color32], colors: &ThemeColors, height: f32) {
    let (rect, _) = ui.allocate_exact_size(
        egui::vec2(ui.available_width(), height),
        egui::Sense::hover(),
    );
    if !ui.is_rect_visible(rect) || items.is_empty() {
        return;
    }
    let painter = ui.painter_at(rect);
    let legend_w = (rect.width() * 0.4).min(160.0);
    let radius = ((rect.width() - legend_w).min(rect.height()) / 2.0 - theme::SPACING_MD).max(8.0);
    let center = egui::pos2(rect.min.x + radius + theme::SPACING_MD, rect.center().y);

    let color_of = |i: usize| {
        if series.is_empty() {
            colors.bar
        } else {
            series[i % series.len()]
        }
    };

    let mut start = -std::f32::consts::FRAC_PI_2;
    let fractions = pie_fractions(items);
    for (i, fraction) in fractions.iter().enumerate() {
        let sweep = fraction * std::f32::consts::TAU;
        let steps = ((sweep / 0.05).ceil() as usize).max(1);
        let color = color_of(i);
        for s in 0..steps {
            let a0 = start + sweep * s as f32 / steps as f32;
            let a1 = start + sweep * (s + 1) as f32 / steps as f32;
            painter.add(egui::Shape::convex_polygon(
                vec![
                    center,
                    center + radius * egui::vec2(a0.cos(), a0.sin()),
                    center + radius * egui::vec2(a1.cos(), a1.sin()),
                ],
                color,
                Stroke::NONE,
            ));
        }
        start += sweep;
    }
    // Donut hole
    painter.circle_filled(center, radius * 0.45, colors.card_fill);

    let mut y = rect.center().y - items.len() as f32 * 10.0;
    let x = rect.max.x - legend_w;
    for (i, (item, fraction)) in items.iter().zip(&fractions).enumerate() {
        painter.rect_filled(
            Rect::from_center_size(egui::pos2(x + 5.0, y), egui::vec2(10.0, 10.0)),
            2.0,
            color_of(i),
        );
        painter.text(
            egui::pos2(x + 14.0, y),
            egui::Align2::LEFT_CENTER,
            format!("{} ({:.0}%)", item.label, fraction * 100.0),
            egui::FontId::proportional(theme::FONT_SMALL),
            colors.chart_text,
        );
        y += 20.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_range_includes_zero() {
        assert_eq!(value_range([3.0, 9.0, 5.0]), (0.0, 9.0));
        assert_eq!(value_range([-2.0, 4.0]), (-2.0, 4.0));
    }

    #[test]
    fn value_range_never_collapses() {
        assert_eq!(value_range([]), (0.0, 1.0));
        assert_eq!(value_range([0.0, 0.0]), (0.0, 1.0));
        assert_eq!(value_range([f64::NAN]), (0.0, 1.0));
    }

    #[test]
    fn pie_fractions_sum_to_one() {
        let items = vec![
            CategoryValue::new("Male", 60.0),
            CategoryValue::new("Female", 35.0),
            CategoryValue::new("Other", 5.0),
        ];
        let f = pie_fractions(&items);
        assert!((f.iter().sum::<f32>() - 1.0).abs() < 1e-5);
        assert!((f[0] - 0.6).abs() < 1e-6);
    }

    #[test]
    fn pie_fractions_handle_empty_total() {
        let items = vec![CategoryValue::new("A", 0.0), CategoryValue::new("B", -3.0)];
        assert_eq!(pie_fractions(&items), vec![0.0, 0.0]);
    }

    #[test]
    fn ticks_abbreviate_thousands() {
        assert_eq!(format_tick(1500.0), "1.5k");
        assert_eq!(format_tick(42.4), "42");
    }
}
