//! Branded chrome: header bar and navigation sidebar
//!
//! Both use the theme-invariant brand colors; only the content area follows
//! the Light/Dark selection.

use super::App;
use crate::constants::*;
use crate::theme;
use crate::types::Page;
use eframe::egui;

impl App {
    pub(crate) fn render_header(&mut self, ctx: &egui::Context) {
        let brand = self.brand;
        egui::TopBottomPanel::top("header")
            .exact_height(theme::HEADER_HEIGHT)
            .show_separator_line(false)
            .frame(theme::header_frame(&brand))
            .show(ctx, |ui| {
                ui.horizontal_centered(|ui| {
                    ui.vertical(|ui| {
                        ui.label(
                            egui::RichText::new(HEADER_TITLE)
                                .size(theme::FONT_TITLE)
                                .strong()
                                .color(brand.text),
                        );
                        ui.label(
                            egui::RichText::new(format!("{}  ·  {}", HEADER_SUBTITLE, self.page.label()))
                                .size(theme::FONT_SUBTITLE)
                                .color(brand.text_muted),
                        );
                    });
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let refresh = egui::Button::new(
                            egui::RichText::new(format!("{}  Refresh", egui_phosphor::regular::ARROWS_CLOCKWISE))
                                .color(brand.text),
                        )
                        .fill(brand.nav_active)
                        .corner_radius(theme::RADIUS_DEFAULT);
                        if ui.add(refresh).on_hover_text("Regenerate placeholder data").clicked() {
                            self.request_render("refresh");
                        }
                    });
                });
            });
    }

    pub(crate) fn render_sidebar(&mut self, ctx: &egui::Context) {
        let brand = self.brand;
        egui::SidePanel::left("nav_panel")
            .exact_width(theme::SIDEBAR_WIDTH)
            .resizable(false)
            .show_separator_line(false)
            .frame(theme::sidebar_frame(&brand))
            .show(ctx, |ui| {
                ui.label(
                    egui::RichText::new(format!("{}  {}", egui_phosphor::regular::LIGHTNING, APP_NAME))
                        .size(theme::FONT_HEADING)
                        .strong()
                        .color(brand.text),
                );
                ui.add_space(theme::SPACING_XXL);

                caption(ui, "MENU", brand.text_muted);
                let mut chosen = None;
                for page in Page::ALL {
                    if theme::nav_item(ui, &brand, page.icon(), page.label(), page == self.page) {
                        chosen = Some(page);
                    }
                }
                if let Some(page) = chosen {
                    self.navigate(page);
                }

                ui.add_space(theme::SPACING_XXL);
                caption(ui, "THEME", brand.text_muted);
                if let Some(label) = theme::theme_toggle(ui, &brand, self.theme_state.current()) {
                    self.on_theme_selected(label);
                }

                ui.with_layout(egui::Layout::bottom_up(egui::Align::Min), |ui| {
                    ui.label(
                        egui::RichText::new(format!("v{}", APP_VERSION))
                            .size(theme::FONT_SMALL)
                            .color(brand.text_muted),
                    );
                });
            });
    }
}

fn caption(ui: &mut egui::Ui, text: &str, color: egui::Color32) {
    ui.label(egui::RichText::new(text).size(theme::FONT_SMALL).color(color));
    ui.add_space(theme::SPACING_SM);
}
