//! Date range input widget

use chrono::NaiveDate;
use egui::{Response, Ui};
use egui_extras::DatePickerButton;

/// Start/end date pickers with a reset-to-full-range button
pub struct DateRange<'a> {
    start: &'a mut NaiveDate,
    end: &'a mut NaiveDate,
    bounds: Option<(NaiveDate, NaiveDate)>,
}

impl<'a> DateRange<'a> {
    /// Create a new date range widget
    pub fn new(start: &'a mut NaiveDate, end: &'a mut NaiveDate) -> Self {
        Self {
            start,
            end,
            bounds: None,
        }
    }

    /// Full dataset range, used by the reset button
    pub fn bounds(mut self, bounds: Option<(NaiveDate, NaiveDate)>) -> Self {
        self.bounds = bounds;
        self
    }

    /// Show the widget
    pub fn show(self, ui: &mut Ui) -> Response {
        let mut changed = false;

        let mut response = ui
            .horizontal(|ui| {
                ui.label("From");
                changed |= ui
                    .add(DatePickerButton::new(&mut *self.start).id_salt("date_range_start"))
                    .changed();

                ui.label("to");
                changed |= ui
                    .add(DatePickerButton::new(&mut *self.end).id_salt("date_range_end"))
                    .changed();

                if let Some((min, max)) = self.bounds {
                    let full = *self.start == min && *self.end == max;
                    if ui
                        .add_enabled(!full, egui::Button::new("↺").small())
                        .on_hover_text("Full date range")
                        .clicked()
                    {
                        *self.start = min;
                        *self.end = max;
                        changed = true;
                    }
                }
            })
            .response;

        if changed {
            response.mark_changed();
        }
        response
    }
}
