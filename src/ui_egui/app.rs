//! Demo window hosting the date picker.
//!
//! Shows the picker, the selected date underneath, and buttons to jump to
//! today and toggle a mark on the selected day. Picker notifications arrive
//! through a channel and are drained once per frame.

use std::sync::mpsc::{channel, Receiver};

use anyhow::{Context, Result};
use egui::Vec2;

use super::date_picker::DatePickerWidget;
use super::theme::PickerTheme;
use crate::models::settings::PickerSettings;
use crate::services::labels::EnglishLabels;
use crate::services::layout::LayoutMetrics;
use crate::services::picker::{DatePicker, PickerEvent, SystemClock};
use crate::utils::date::short_date;

/// Room around the picker for the panel margin and the controls below it
const WINDOW_PADDING: Vec2 = Vec2::new(32.0, 96.0);

pub struct PickerDemoApp {
    picker: DatePicker,
    theme: PickerTheme,
    labels: EnglishLabels,
    events: Receiver<PickerEvent>,
    selected_label: String,
}

impl PickerDemoApp {
    pub fn new(cc: &eframe::CreationContext<'_>, settings: &PickerSettings) -> Result<Self> {
        cc.egui_ctx.set_visuals(egui::Visuals::light());

        let mut picker = DatePicker::from_settings(settings, SystemClock)
            .context("Failed to create date picker from settings")?;
        let (tx, rx) = channel();
        picker.set_listener(tx);

        let selected_label = short_date(picker.date_value().date());
        Ok(Self {
            picker,
            theme: PickerTheme::from_appearance(&settings.appearance),
            labels: EnglishLabels,
            events: rx,
            selected_label,
        })
    }

    /// Window size that fits the picker's natural size
    pub fn window_size(settings: &PickerSettings) -> Vec2 {
        // Six rows is the tallest a month can get
        let metrics = LayoutMetrics::from(&settings.layout);
        let size = metrics.preferred_size(6);
        Vec2::new(size.width, size.height) + WINDOW_PADDING
    }

    fn drain_events(&mut self, ctx: &egui::Context) {
        while let Ok(event) = self.events.try_recv() {
            match event {
                PickerEvent::DateSelected(date_value) => {
                    self.selected_label = short_date(date_value.date());
                }
                PickerEvent::PreferredSizeChanged(size) => {
                    let inner = Vec2::new(size.width, size.height) + WINDOW_PADDING;
                    ctx.send_viewport_cmd(egui::ViewportCommand::InnerSize(inner));
                }
            }
        }
    }
}

impl eframe::App for PickerDemoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add(DatePickerWidget::new(
                &mut self.picker,
                &self.theme,
                &self.labels,
            ));

            ui.separator();
            ui.horizontal(|ui| {
                ui.label(&self.selected_label);

                if ui.button("Today").clicked() {
                    if let Err(e) = self.picker.jump_to_today() {
                        log::warn!("Could not jump to today: {}", e);
                    }
                }

                let selected = self.picker.selected_date();
                let mark_text = if self.picker.is_marked(selected) {
                    "Unmark"
                } else {
                    "Mark"
                };
                if ui.button(mark_text).clicked() {
                    if self.picker.is_marked(selected) {
                        self.picker.unmark_date(selected);
                    } else {
                        self.picker.mark_date(selected);
                    }
                }
            });
        });

        self.drain_events(ctx);
    }
}
