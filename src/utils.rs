//! Utility functions

use crate::constants::DATA_DIR_NAME;
use chrono::{DateTime, Local};
use std::path::PathBuf;

// Lightning bolt on the brand blue — window/taskbar icon
pub const ICON_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 64 64"><rect width="64" height="64" rx="14" fill="#0A4DA2"/><path d="M36 6 14 36h14l-4 22 24-32H34z" fill="#FBBF24"/></svg>"##;

/// Rasterize the icon SVG to a square straight-alpha RGBA image.
pub fn rasterize_icon(size: u32) -> Option<(Vec<u8>, u32, u32)> {
    let tree = resvg::usvg::Tree::from_str(ICON_SVG, &resvg::usvg::Options::default()).ok()?;
    let scale = size as f32 / tree.size().width();
    let mut pixmap = resvg::tiny_skia::Pixmap::new(size, size)?;
    resvg::render(
        &tree,
        resvg::usvg::Transform::from_scale(scale, scale),
        &mut pixmap.as_mut(),
    );
    Some((premul_to_straight(&pixmap), size, size))
}

fn premul_to_straight(pixmap: &resvg::tiny_skia::Pixmap) -> Vec<u8> {
    pixmap
        .pixels()
        .iter()
        .flat_map(|p| {
            let a = p.alpha();
            if a == 0 {
                [0, 0, 0, 0]
            } else {
                let r = (p.red() as u16 * 255 / a as u16) as u8;
                let g = (p.green() as u16 * 255 / a as u16) as u8;
                let b = (p.blue() as u16 * 255 / a as u16) as u8;
                [r, g, b, a]
            }
        })
        .collect()
}

/// Get the app data directory (settings, logs)
pub fn get_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DATA_DIR_NAME)
}

/// Footer timestamp, e.g. "Updated: 14:03:27"
pub fn format_updated(at: DateTime<Local>) -> String {
    format!("Updated: {}", at.format("%H:%M:%S"))
}

/// Currency with thousands separators, e.g. 1240.5 -> "$1,240.50"
pub fn format_currency(amount: f64) -> String {
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = (cents / 100).to_string();
    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    let sign = if amount < 0.0 { "-" } else { "" };
    format!("{}${}.{:02}", sign, grouped, cents % 100)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn icon_rasterizes_to_requested_size() {
        let (pixels, w, h) = rasterize_icon(32).unwrap();
        assert_eq!((w, h), (32, 32));
        assert_eq!(pixels.len(), 32 * 32 * 4);
        // Center of the bolt is opaque
        assert!(pixels.chunks(4).any(|p| p[3] == 255));
    }

    #[test]
    fn currency_groups_thousands() {
        assert_eq!(format_currency(59.99), "$59.99");
        assert_eq!(format_currency(1240.0), "$1,240.00");
        assert_eq!(format_currency(1234567.5), "$1,234,567.50");
        assert_eq!(format_currency(-45.0), "-$45.00");
    }

    #[test]
    fn updated_uses_wall_clock_time() {
        let at = Local.with_ymd_and_hms(2024, 5, 1, 9, 5, 7).unwrap();
        assert_eq!(format_updated(at), "Updated: 09:05:07");
    }
}
