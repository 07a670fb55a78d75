//! App module - contains the main application state and logic

mod form;
mod sidebar;
mod views;

use crate::constants::TREND_DAYS_RANGE;
use crate::data::{DashboardData, DataSource, SyntheticSource};
use crate::error::{DashboardError, Result};
use crate::palette::{self, ThemeState, BRAND};
use crate::settings::Settings;
use crate::theme::{self, BrandColors, ThemeColors};
use crate::types::{EntryForm, Page};
use chrono::{DateTime, Local};
use eframe::egui;
use std::path::PathBuf;
use tracing::{debug, error, info};

// ============================================================================
// RENDER PASS
// ============================================================================

/// Everything derived from theme state and the data source for one render pass.
pub(crate) struct RenderPass {
    pub(crate) colors: ThemeColors,
    pub(crate) data: DashboardData,
    pub(crate) growth_series: Vec<egui::Color32>,
    pub(crate) channel_series: Vec<egui::Color32>,
    pub(crate) rendered_at: DateTime<Local>,
}

impl RenderPass {
    pub(crate) fn build(
        theme_state: &ThemeState,
        source: &mut dyn DataSource,
        trend_days: usize,
    ) -> Result<Self> {
        let palette = theme_state.palette();
        let colors = ThemeColors::from_palette(theme_state.current(), &palette)?;
        let data = DashboardData::generate(source, trend_days);
        data.validate()?;
        Ok(Self {
            colors,
            data,
            growth_series: theme::series_colors(&[theme::SERIES_RED, theme::SERIES_BLUE])?,
            channel_series: theme::series_colors(&theme::PIE_COLORS)?,
            rendered_at: Local::now(),
        })
    }

    /// Stock colors and no data, shown behind the error panel.
    pub(crate) fn placeholder(theme_state: &ThemeState, trend_days: usize) -> Self {
        Self {
            colors: ThemeColors::from_visuals(theme_state.current()),
            data: DashboardData::empty(trend_days),
            growth_series: Vec::new(),
            channel_series: Vec::new(),
            rendered_at: Local::now(),
        }
    }

    /// First pass at startup. A failure still yields a pass so the window opens
    /// on the error panel.
    pub(crate) fn first(
        theme_state: &ThemeState,
        source: &mut dyn DataSource,
        trend_days: usize,
    ) -> (Self, Option<DashboardError>) {
        match Self::build(theme_state, source, trend_days) {
            Ok(pass) => (pass, None),
            Err(e) => {
                error!(error = %e, "Initial render pass failed");
                (Self::placeholder(theme_state, trend_days), Some(e))
            }
        }
    }
}

// ============================================================================
// APP STATE
// ============================================================================

pub struct App {
    pub(crate) theme_state: ThemeState,
    pub(crate) brand: BrandColors,
    pub(crate) page: Page,
    pub(crate) source: Box<dyn DataSource>,
    pub(crate) pass: RenderPass,
    pub(crate) render_error: Option<DashboardError>,
    pub(crate) needs_render: bool,
    // Data entry
    pub(crate) form: EntryForm,
    pub(crate) last_submission: Option<String>,
    // Settings
    pub(crate) start_page: Page,
    pub(crate) data_seed: Option<u64>,
    pub(crate) trend_days: usize,
    pub(crate) show_footer: bool,
    pub(crate) window_pos: Option<egui::Pos2>,
    pub(crate) window_size: Option<egui::Vec2>,
    pub(crate) needs_center: bool,
    pub(crate) data_dir: PathBuf,
}

// ============================================================================
// APP INITIALIZATION & HELPERS
// ============================================================================

impl App {
    pub fn new(cc: &eframe::CreationContext<'_>, settings: Settings, data_dir: PathBuf) -> Result<Self> {
        // Add Phosphor icons font
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        let mut source: Box<dyn DataSource> = match settings.data_seed {
            Some(seed) => {
                debug!(seed, "Using seeded data source");
                Box::new(SyntheticSource::seeded(seed))
            }
            None => Box::new(SyntheticSource::from_entropy()),
        };

        let theme_state = ThemeState::new();
        let (pass, render_error) = RenderPass::first(&theme_state, source.as_mut(), settings.trend_days);
        theme::apply_visuals(&cc.egui_ctx, &pass.colors);

        Ok(Self {
            theme_state,
            brand: BrandColors::from_brand(&BRAND)?,
            page: settings.start_page,
            source,
            pass,
            render_error,
            needs_render: false,
            form: EntryForm::new(Local::now().date_naive()),
            last_submission: None,
            start_page: settings.start_page,
            data_seed: settings.data_seed,
            trend_days: settings.trend_days,
            show_footer: settings.show_footer,
            window_pos: None,
            window_size: None,
            needs_center: false,
            data_dir,
        })
    }

    pub fn save_settings(&self) {
        let settings = Settings {
            window_x: self.window_pos.map(|p| p.x),
            window_y: self.window_pos.map(|p| p.y),
            window_w: self.window_size.map(|s| s.x),
            window_h: self.window_size.map(|s| s.y),
            start_page: self.start_page,
            data_seed: self.data_seed,
            trend_days: self.trend_days,
            show_footer: self.show_footer,
        };
        settings.save(&self.data_dir);
    }

    /// Schedule a full re-render at the end of this frame.
    pub(crate) fn request_render(&mut self, reason: &'static str) {
        debug!(reason, "Render requested");
        self.needs_render = true;
    }

    /// Selection event from the theme toggle.
    pub(crate) fn on_theme_selected(&mut self, label: &str) {
        let change = palette::resolve_named(label).and_then(|resolved| {
            debug!(tokens = ?resolved.tokens(), "Resolved palette");
            self.theme_state.apply_named(label)
        });
        match change {
            Ok(change) if change.needs_rerender() => {
                info!(theme = %self.theme_state.current(), "Theme changed");
                self.request_render("theme changed");
            }
            Ok(_) => {}
            Err(e) => {
                error!(error = %e, "Theme selection rejected");
                self.render_error = Some(e);
            }
        }
    }

    pub(crate) fn navigate(&mut self, page: Page) {
        if page != self.page {
            info!(from = ?self.page, to = ?page, "Navigated");
            self.page = page;
            self.request_render("navigation");
        }
    }

    pub(crate) fn set_trend_days(&mut self, days: usize) {
        let (min, max) = TREND_DAYS_RANGE;
        let days = days.clamp(min, max);
        if days != self.trend_days {
            self.trend_days = days;
            self.request_render("trend length changed");
        }
    }

    /// Re-resolve palette and regenerate data. A failure replaces the whole page.
    pub(crate) fn render_pass(&mut self, ctx: &egui::Context) {
        match RenderPass::build(&self.theme_state, self.source.as_mut(), self.trend_days) {
            Ok(pass) => {
                theme::apply_visuals(ctx, &pass.colors);
                self.pass = pass;
                self.render_error = None;
            }
            Err(e) => {
                error!(error = %e, "Render pass failed");
                self.render_error = Some(e);
            }
        }
    }
}

// ============================================================================
// MAIN UPDATE LOOP
// ============================================================================

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Track window position/size for saving on exit
        ctx.input(|i| {
            if let Some(rect) = i.viewport().outer_rect {
                self.window_pos = Some(rect.min);
            }
            if let Some(rect) = i.viewport().inner_rect {
                self.window_size = Some(rect.size());
            }
        });

        // Center window on first launch
        if self.needs_center {
            self.needs_center = false;
            if let Some(cmd) = egui::ViewportCommand::center_on_screen(ctx) {
                ctx.send_viewport_cmd(cmd);
            }
        }

        // Chrome first (must be added BEFORE CentralPanel)
        self.render_header(ctx);
        self.render_sidebar(ctx);

        egui::CentralPanel::default()
            .frame(theme::content_frame(&self.pass.colors))
            .show(ctx, |ui| {
                if let Some(err) = self.render_error.clone() {
                    if views::error_panel(ui, &err, &self.pass.colors) {
                        info!("Retrying render after error");
                        self.render_error = None;
                        self.request_render("retry");
                    }
                    return;
                }
                egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        match self.page {
                            Page::Overview => self.render_overview(ui),
                            Page::Sales => self.render_sales(ui),
                            Page::DataEntry => self.render_data_entry(ui),
                            Page::Records => self.render_records(ui),
                        }
                        if self.show_footer {
                            self.render_footer(ui);
                        }
                    });
            });

        if self.needs_render {
            self.needs_render = false;
            self.render_pass(ctx);
            ctx.request_repaint();
        }
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        info!("Analytics Pro shutting down");
        self.save_settings();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::SALES_COLUMNS;
    use crate::palette::ThemeMode;
    use egui::Color32;

    #[test]
    fn pass_follows_theme_state() {
        let mut state = ThemeState::new();
        let mut source = SyntheticSource::seeded(5);
        let light = RenderPass::build(&state, &mut source, 30).unwrap();
        assert_eq!(light.colors.background, Color32::from_rgb(0xf5, 0xf7, 0xfa));

        state.apply(ThemeMode::Dark);
        let dark = RenderPass::build(&state, &mut source, 30).unwrap();
        assert_eq!(dark.colors.background, Color32::from_rgb(0x04, 0x2f, 0x66));
        assert_eq!(dark.colors.chart_text, Color32::WHITE);
    }

    #[test]
    fn pass_regenerates_data_with_declared_shape() {
        let state = ThemeState::new();
        let mut source = SyntheticSource::seeded(5);
        let first = RenderPass::build(&state, &mut source, 30).unwrap();
        let second = RenderPass::build(&state, &mut source, 30).unwrap();
        assert_eq!(first.data.sales_trend.row_count(), 30);
        assert_eq!(first.data.sales_trend.column_count(), SALES_COLUMNS.len());
        assert_ne!(first.data.growth, second.data.growth);
        assert_eq!(first.growth_series.len(), 2);
    }

    struct BrokenSource;

    impl DataSource for BrokenSource {
        fn trend(&mut self, rows: usize, columns: &[&str]) -> crate::data::Dataset {
            crate::data::Dataset {
                columns: columns.iter().map(|c| c.to_string()).collect(),
                rows: vec![vec![1.0; columns.len()]; rows / 2],
            }
        }

        fn split(&mut self, categories: &[&str]) -> Vec<crate::types::CategoryValue> {
            categories
                .iter()
                .map(|c| crate::types::CategoryValue::new(*c, 1.0))
                .collect()
        }
    }

    #[test]
    fn malformed_source_aborts_pass() {
        let state = ThemeState::new();
        let err = RenderPass::build(&state, &mut BrokenSource, 30).err().unwrap();
        assert!(matches!(err, DashboardError::ChartShape { rows: 10, .. }));
    }

    #[test]
    fn failed_first_pass_still_yields_a_pass() {
        let mut state = ThemeState::new();
        state.apply(ThemeMode::Dark);
        let (pass, err) = RenderPass::first(&state, &mut BrokenSource, 30);
        assert!(matches!(err, Some(DashboardError::ChartShape { .. })));
        assert_eq!(pass.colors.mode, ThemeMode::Dark);
        assert_eq!(pass.data.sales_trend.row_count(), 0);
        assert!(pass.growth_series.is_empty());

        let (pass, err) = RenderPass::first(&state, &mut SyntheticSource::seeded(1), 30);
        assert!(err.is_none());
        assert_eq!(pass.data.sales_trend.row_count(), 30);
    }
}
