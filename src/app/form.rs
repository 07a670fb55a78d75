//! Data entry form. Submissions are echoed back and logged, never stored.

use super::App;
use crate::theme;
use crate::types::EntryForm;
use crate::ui::components;
use eframe::egui;
use tracing::info;

impl App {
    pub(crate) fn render_data_entry(&mut self, ui: &mut egui::Ui) {
        let colors = self.pass.colors;
        components::section_header(ui, "📝 New Entry", &colors);

        let mut submitted = false;
        theme::card_frame(&colors).show(ui, |ui| {
            ui.set_width(ui.available_width().min(560.0));
            egui::Grid::new("entry_form")
                .num_columns(2)
                .spacing([theme::SPACING_XL, theme::SPACING_LG])
                .show(ui, |ui| {
                    ui.label("Product name");
                    ui.add(
                        egui::TextEdit::singleline(&mut self.form.name)
                            .hint_text("e.g. Wireless Earbuds")
                            .desired_width(300.0),
                    );
                    ui.end_row();

                    ui.label("Category");
                    egui::ComboBox::from_id_salt("entry_category")
                        .selected_text(self.form.category)
                        .width(300.0)
                        .show_ui(ui, |ui| {
                            for category in EntryForm::CATEGORIES {
                                ui.selectable_value(&mut self.form.category, category, category);
                            }
                        });
                    ui.end_row();

                    ui.label("Quantity");
                    ui.add(egui::DragValue::new(&mut self.form.quantity).range(0..=100_000));
                    ui.end_row();

                    ui.label("Date");
                    ui.add(egui_extras::DatePickerButton::new(&mut self.form.date).id_salt("entry_date"));
                    ui.end_row();

                    ui.label("Notes");
                    ui.add(
                        egui::TextEdit::multiline(&mut self.form.notes)
                            .desired_rows(3)
                            .desired_width(300.0),
                    );
                    ui.end_row();
                });

            ui.add_space(theme::SPACING_LG);
            let label = format!("{}  Submit", egui_phosphor::regular::CHECK);
            if ui.add(theme::button_primary(label, &colors)).clicked() {
                submitted = true;
            }
            if let Some(summary) = &self.last_submission {
                ui.add_space(theme::SPACING_SM);
                ui.label(egui::RichText::new(summary).color(theme::DELTA_UP));
            }
        });

        if submitted {
            self.submit_entry();
        }
    }

    pub(crate) fn submit_entry(&mut self) {
        info!(
            name = %self.form.name.trim(),
            category = self.form.category,
            quantity = self.form.quantity,
            date = %self.form.date,
            "Entry submitted"
        );
        self.last_submission = Some(self.form.summary());
        self.request_render("form submitted");
    }
}
