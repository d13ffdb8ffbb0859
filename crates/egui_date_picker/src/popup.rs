use chrono::{Datelike as _, NaiveDate};
use egui::{Align, Button, Grid, Id, Layout, RichText, ScrollArea, Sense, Stroke, Ui, Vec2};

use crate::calendar::{
    DayCell, MONTH_NAMES, WEEKDAY_LABELS, month_from_index, month_grid, year_range,
};
use crate::state::DatePickerState;

pub(crate) const POPOVER_WIDTH: f32 = 224.0;
const CELL_SIZE: Vec2 = Vec2::splat(24.0);
const CELL_SPACING: f32 = 2.0;
const LIST_MAX_HEIGHT: f32 = 192.0;

/// Marks the header toggles as dropdowns.
pub(crate) const DROPDOWN_ICON: &str = "⏷";

/// The contents of the popover: month and year selectors, weekday header and the day grid.
pub(crate) struct DatePickerPopup<'a> {
    pub state: &'a mut DatePickerState,
    pub id: Id,
    pub today: NaiveDate,
    pub first_year: i32,
}

impl DatePickerPopup<'_> {
    pub fn show(mut self, ui: &mut Ui) {
        ui.set_min_width(POPOVER_WIDTH);
        ui.set_max_width(POPOVER_WIDTH);

        self.header(ui);

        if self.state.is_month_list_open() {
            self.month_list(ui);
        } else if self.state.is_year_list_open() {
            self.year_list(ui);
        }

        ui.add_space(4.0);
        self.day_grid(ui);
    }

    fn header(&mut self, ui: &mut Ui) {
        let visible = self.state.visible_month();
        ui.horizontal(|ui| {
            if ui
                .selectable_label(
                    self.state.is_month_list_open(),
                    format!("{} {DROPDOWN_ICON}", visible.month_name()),
                )
                .clicked()
            {
                self.state.toggle_month_list();
            }

            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                if ui
                    .selectable_label(
                        self.state.is_year_list_open(),
                        format!("{} {DROPDOWN_ICON}", visible.year()),
                    )
                    .clicked()
                {
                    self.state.toggle_year_list();
                }
            });
        });
    }

    fn month_list(&mut self, ui: &mut Ui) {
        let current = self.state.visible_month().month() as usize - 1;
        ScrollArea::vertical()
            .id_salt(self.id.with("month_list"))
            .max_height(LIST_MAX_HEIGHT)
            .auto_shrink([false, true])
            .show(ui, |ui| {
                for (index, name) in MONTH_NAMES.iter().enumerate() {
                    if ui.selectable_label(index == current, *name).clicked() {
                        if let Some(month) = month_from_index(index) {
                            self.state.select_month(month);
                        }
                    }
                }
            });
    }

    fn year_list(&mut self, ui: &mut Ui) {
        let current = self.state.visible_month().year();
        ScrollArea::vertical()
            .id_salt(self.id.with("year_list"))
            .max_height(LIST_MAX_HEIGHT)
            .auto_shrink([false, true])
            .show(ui, |ui| {
                for year in year_range(self.first_year, self.today.year()) {
                    if ui
                        .selectable_label(year == current, year.to_string())
                        .clicked()
                    {
                        self.state.select_year(year);
                    }
                }
            });
    }

    fn day_grid(&mut self, ui: &mut Ui) {
        let cells = month_grid(self.state.visible_month(), self.state.selected(), self.today);
        let mut picked = None;

        Grid::new(self.id.with("day_grid"))
            .num_columns(WEEKDAY_LABELS.len())
            .spacing([CELL_SPACING, CELL_SPACING])
            .min_col_width(CELL_SIZE.x)
            .show(ui, |ui| {
                for name in WEEKDAY_LABELS {
                    ui.vertical_centered(|ui| {
                        ui.label(RichText::new(name).small().weak());
                    });
                }
                ui.end_row();

                for (index, cell) in cells.enumerate() {
                    match cell {
                        DayCell::Blank => {
                            ui.allocate_exact_size(CELL_SIZE, Sense::hover());
                        }
                        DayCell::Day {
                            date,
                            is_today,
                            is_selected,
                        } => {
                            if day_button(ui, date, is_today, is_selected).clicked() {
                                picked = Some(date);
                            }
                        }
                    }
                    if (index + 1) % WEEKDAY_LABELS.len() == 0 {
                        ui.end_row();
                    }
                }
            });

        if let Some(date) = picked {
            self.state.select_day(date);
        }
    }
}

fn day_button(ui: &mut Ui, date: NaiveDate, is_today: bool, is_selected: bool) -> egui::Response {
    let visuals = ui.visuals();
    let mut text = RichText::new(date.day().to_string()).small();
    if is_selected {
        text = text.color(visuals.selection.stroke.color);
    }

    let mut button = Button::new(text)
        .min_size(CELL_SIZE)
        .corner_radius(CELL_SIZE.x / 2.0)
        .frame(is_today || is_selected);

    if is_selected {
        button = button.fill(visuals.selection.bg_fill);
    } else if is_today {
        button = button
            .fill(visuals.faint_bg_color)
            .stroke(Stroke::new(1.0, visuals.selection.bg_fill));
    }

    ui.add(button)
}
