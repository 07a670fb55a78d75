//! Page rendering (overview, sales, records, footer, error panel)

use super::App;
use crate::constants::STATUS_ONLINE;
use crate::data::{self, RECORDS};
use crate::error::DashboardError;
use crate::theme::{self, ThemeColors};
use crate::types::{KpiCard, OrderStatus};
use crate::ui::charts;
use crate::ui::components::{self, CardFragment};
use crate::utils::{format_currency, format_updated};
use eframe::egui;

const TREND_PRESETS: [usize; 3] = [7, 30, 90];

impl App {
    pub(crate) fn render_overview(&mut self, ui: &mut egui::Ui) {
        let colors = self.pass.colors;
        kpi_row(ui, &data::overview_cards(), &colors);
        ui.add_space(theme::SPACING_XXL);

        let pass = &self.pass;
        split_row(
            ui,
            |ui| {
                chart_panel(ui, "📈 Monthly Growth Trend", &colors, |ui| {
                    charts::area_chart(ui, &pass.data.growth, &pass.growth_series, &colors, theme::CHART_HEIGHT);
                });
            },
            |ui| {
                chart_panel(ui, "🎯 Audience Split", &colors, |ui| {
                    charts::bar_chart(ui, &pass.data.audience, colors.bar, &colors, theme::CHART_HEIGHT);
                });
            },
        );
    }

    pub(crate) fn render_sales(&mut self, ui: &mut egui::Ui) {
        let colors = self.pass.colors;
        kpi_row(ui, &data::sales_cards(), &colors);
        ui.add_space(theme::SPACING_XXL);

        let mut preset = None;
        let pass = &self.pass;
        let trend_days = pass.data.trend_days;
        split_row(
            ui,
            |ui| {
                chart_panel(ui, &format!("📊 {}-day trend", trend_days), &colors, |ui| {
                    ui.horizontal(|ui| {
                        for days in TREND_PRESETS {
                            if ui
                                .selectable_label(days == trend_days, format!("{}d", days))
                                .clicked()
                            {
                                preset = Some(days);
                            }
                        }
                    });
                    charts::area_chart(ui, &pass.data.sales_trend, &pass.growth_series, &colors, theme::CHART_HEIGHT);
                });
            },
            |ui| {
                chart_panel(ui, "🧭 Channel Mix", &colors, |ui| {
                    charts::pie_chart(ui, &pass.data.channels, &pass.channel_series, &colors, theme::CHART_HEIGHT);
                });
            },
        );

        if let Some(days) = preset {
            self.set_trend_days(days);
        }
    }

    pub(crate) fn render_records(&mut self, ui: &mut egui::Ui) {
        use egui_extras::{Column, TableBuilder};

        let colors = self.pass.colors;
        components::section_header(ui, "🗂 Recent Orders", &colors);
        theme::card_frame(&colors).show(ui, |ui| {
            ui.set_width(ui.available_width());
            TableBuilder::new(ui)
                .striped(true)
                .resizable(false)
                .vscroll(false)
                .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
                .column(Column::exact(70.0))
                .column(Column::remainder())
                .column(Column::remainder())
                .column(Column::exact(100.0))
                .column(Column::exact(100.0))
                .column(Column::exact(100.0))
                .header(theme::ROW_HEIGHT, |mut header| {
                    for title in ["ORDER", "CUSTOMER", "PRODUCT", "AMOUNT", "STATUS", "DATE"] {
                        header.col(|ui| {
                            ui.label(
                                egui::RichText::new(title)
                                    .size(theme::FONT_SMALL)
                                    .strong()
                                    .color(colors.text_muted),
                            );
                        });
                    }
                })
                .body(|mut body| {
                    for record in RECORDS.iter() {
                        body.row(theme::ROW_HEIGHT, |mut row| {
                            row.col(|ui| {
                                ui.label(record.order_id);
                            });
                            row.col(|ui| {
                                ui.label(record.customer);
                            });
                            row.col(|ui| {
                                ui.label(record.product);
                            });
                            row.col(|ui| {
                                ui.label(format_currency(record.amount));
                            });
                            row.col(|ui| {
                                ui.label(
                                    egui::RichText::new(record.status.label())
                                        .color(status_color(record.status)),
                                );
                            });
                            row.col(|ui| {
                                ui.label(record.date);
                            });
                        });
                    }
                });
        });
    }

    pub(crate) fn render_footer(&self, ui: &mut egui::Ui) {
        let colors = &self.pass.colors;
        components::divider(ui, colors);
        ui.vertical_centered(|ui| {
            ui.label(
                egui::RichText::new(format!("{} | {}", STATUS_ONLINE, format_updated(self.pass.rendered_at)))
                    .size(theme::FONT_LABEL)
                    .color(colors.text_muted),
            );
        });
    }
}

/// Equal-width row of KPI cards
fn kpi_row(ui: &mut egui::Ui, cards: &[KpiCard], colors: &ThemeColors) {
    ui.columns(cards.len(), |cols| {
        for (col, card) in cols.iter_mut().zip(cards) {
            components::render_card(col, &CardFragment::new(card), colors);
        }
    });
}

/// Two panels side by side, 2:1 width
fn split_row(ui: &mut egui::Ui, left: impl FnOnce(&mut egui::Ui), right: impl FnOnce(&mut egui::Ui)) {
    let gap = theme::SPACING_XL;
    let avail = ui.available_width() - gap;
    ui.horizontal_top(|ui| {
        ui.spacing_mut().item_spacing.x = gap;
        ui.allocate_ui(egui::vec2(avail * 2.0 / 3.0, 0.0), |ui| {
            ui.set_width(avail * 2.0 / 3.0);
            left(ui);
        });
        ui.allocate_ui(egui::vec2(avail / 3.0, 0.0), |ui| {
            ui.set_width(avail / 3.0);
            right(ui);
        });
    });
}

fn chart_panel(ui: &mut egui::Ui, title: &str, colors: &ThemeColors, add_contents: impl FnOnce(&mut egui::Ui)) {
    theme::card_frame(colors).show(ui, |ui| {
        ui.set_width(ui.available_width());
        components::section_header(ui, title, colors);
        add_contents(ui);
    });
}

fn status_color(status: OrderStatus) -> egui::Color32 {
    match status {
        OrderStatus::Delivered => theme::ACCENT_GREEN,
        OrderStatus::Shipped => theme::ACCENT_BLUE,
        OrderStatus::Pending => theme::ACCENT_ORANGE,
        OrderStatus::Cancelled => theme::ACCENT_RED,
    }
}

/// Full-page replacement shown when a render pass fails. Returns true on retry.
pub(crate) fn error_panel(ui: &mut egui::Ui, err: &DashboardError, colors: &ThemeColors) -> bool {
    let mut retry = false;
    ui.vertical_centered(|ui| {
        ui.add_space(ui.available_height() / 4.0);
        ui.label(
            egui::RichText::new(egui_phosphor::regular::WARNING_CIRCLE)
                .size(48.0)
                .color(theme::DELTA_DOWN),
        );
        ui.add_space(theme::SPACING_MD);
        ui.label(
            egui::RichText::new("This page could not be rendered")
                .size(theme::FONT_HEADING)
                .strong()
                .color(colors.text),
        );
        ui.label(egui::RichText::new(err.to_string()).color(colors.text_muted));
        ui.add_space(theme::SPACING_LG);
        if ui.add(theme::button_primary("Try again", colors)).clicked() {
            retry = true;
        }
    });
    retry
}
