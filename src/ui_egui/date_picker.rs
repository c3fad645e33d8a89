//! Month-grid date picker widget.
//!
//! Draws a [`DatePicker`] on the frames computed by its layout metrics and
//! feeds pointer input back: hover toggles the highlight, a click selects the
//! day, and the arrow buttons page between months. State changes are applied
//! after painting, so the next frame shows the rebuilt grid.

use egui::{Align2, Button, FontId, Pos2, Rect, Response, Sense, Stroke, Ui, Vec2, Widget};

use super::theme::PickerTheme;
use crate::models::calendar_date::CalendarDate;
use crate::services::labels::CalendarLabels;
use crate::services::layout::Frame;
use crate::services::picker::{DatePicker, Direction};

/// Diameter of the selection circle relative to the cell side
const CIRCLE_RATIO: f32 = 0.9;
const MARK_RADIUS: f32 = 2.0;
const MARK_GAP: f32 = 3.0;

enum PickerAction {
    Navigate(Direction),
    Select(usize),
    Highlight(CalendarDate, bool),
}

pub struct DatePickerWidget<'a> {
    picker: &'a mut DatePicker,
    theme: &'a PickerTheme,
    labels: &'a dyn CalendarLabels,
    font_size: f32,
    title_font_size: f32,
}

impl<'a> DatePickerWidget<'a> {
    pub fn new(
        picker: &'a mut DatePicker,
        theme: &'a PickerTheme,
        labels: &'a dyn CalendarLabels,
    ) -> Self {
        Self {
            picker,
            theme,
            labels,
            font_size: 12.0,
            title_font_size: 13.0,
        }
    }

    pub fn font_size(mut self, size: f32) -> Self {
        self.font_size = size;
        self
    }

    pub fn title_font_size(mut self, size: f32) -> Self {
        self.title_font_size = size;
        self
    }
}

fn to_rect(origin: Pos2, frame: Frame) -> Rect {
    Rect::from_min_size(
        origin + Vec2::new(frame.x, frame.y),
        Vec2::new(frame.width, frame.height),
    )
}

impl Widget for DatePickerWidget<'_> {
    fn ui(self, ui: &mut Ui) -> Response {
        let metrics = self.picker.metrics();
        let size = self.picker.preferred_size();
        let (rect, response) =
            ui.allocate_exact_size(Vec2::new(size.width, size.height), Sense::hover());
        let origin = rect.min;
        let mut actions = Vec::new();

        if let Some(background) = self.theme.background {
            ui.painter().rect_filled(rect, 0.0, background);
        }

        // Navigation buttons
        if ui
            .put(to_rect(origin, metrics.back_button_frame()), Button::new("<"))
            .on_hover_text("Previous month")
            .clicked()
        {
            actions.push(PickerAction::Navigate(Direction::Back));
        }
        if ui
            .put(to_rect(origin, metrics.forward_button_frame()), Button::new(">"))
            .on_hover_text("Next month")
            .clicked()
        {
            actions.push(PickerAction::Navigate(Direction::Forward));
        }

        let painter = ui.painter().clone();

        painter.text(
            to_rect(origin, metrics.title_frame()).center(),
            Align2::CENTER_CENTER,
            self.picker.month_title(self.labels),
            FontId::proportional(self.title_font_size),
            self.theme.text,
        );

        let headers = self.labels.weekday_headers(self.picker.week_start());
        for (frame, symbol) in metrics.weekday_label_frames().iter().zip(headers.iter()) {
            painter.text(
                to_rect(origin, *frame).center(),
                Align2::CENTER_CENTER,
                symbol,
                FontId::proportional(self.font_size),
                self.theme.text,
            );
        }

        // One click target over the whole grid, resolved to a cell by hit test
        let cells = self.picker.cells();
        let grid_rect = to_rect(origin, metrics.grid_frame(self.picker.rows()));
        let grid_response = ui.interact(grid_rect, response.id.with("cells"), Sense::click());
        let under_pointer = grid_response.hover_pos().and_then(|pos| {
            let local = pos - origin;
            metrics.hit_test(cells, local.x, local.y)
        });
        if grid_response.clicked() {
            if let Some(index) = under_pointer {
                actions.push(PickerAction::Select(index));
            }
        }

        for ((index, cell), frame) in cells.iter().enumerate().zip(metrics.cell_frames(cells)) {
            let cell_rect = to_rect(origin, frame);
            let hovered = under_pointer == Some(index);
            if hovered != cell.is_highlighted {
                actions.push(PickerAction::Highlight(cell.date, hovered));
            }

            let style = self.theme.cell_style(cell);
            let center = cell_rect.center();
            let radius = cell_rect.height() * CIRCLE_RATIO / 2.0;
            if let Some(fill) = style.fill {
                painter.circle_filled(center, radius, fill);
            }
            if let Some(stroke) = style.stroke {
                painter.circle_stroke(center, radius, Stroke::new(1.0, stroke));
            }
            painter.text(
                center,
                Align2::CENTER_CENTER,
                cell.date.day(),
                FontId::proportional(self.font_size),
                style.text,
            );
            if let Some(mark) = style.mark {
                let mark_center = Pos2::new(
                    center.x,
                    center.y - self.font_size / 2.0 - MARK_GAP - MARK_RADIUS,
                );
                painter.circle_filled(mark_center, MARK_RADIUS, mark);
            }
        }

        if !actions.is_empty() {
            ui.ctx().request_repaint();
        }

        for action in actions {
            let result = match action {
                PickerAction::Navigate(direction) => self.picker.navigate_month(direction),
                PickerAction::Select(index) => self.picker.select_cell(index),
                PickerAction::Highlight(date, flag) => {
                    self.picker.set_highlighted(date, flag);
                    Ok(())
                }
            };
            if let Err(e) = result {
                log::warn!("Date picker action failed: {}", e);
            }
        }

        response
    }
}
