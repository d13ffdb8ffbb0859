//! Demo app for `egui_date_picker`.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

use eframe::egui;
use egui_date_picker::{DatePicker, DatePickerState};

fn main() -> eframe::Result {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([420.0, 420.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Date picker",
        options,
        Box::new(|_cc| Ok(Box::<DemoApp>::default())),
    )
}

#[derive(Default)]
struct DemoApp {}

impl eframe::App for DemoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Date picker");
            ui.add_space(8.0);

            egui::Grid::new("pickers")
                .num_columns(3)
                .spacing([12.0, 8.0])
                .show(ui, |ui| {
                    picker_row(ui, "Check-in", "check_in");
                    picker_row(ui, "Check-out", "check_out");
                });
        });
    }
}

fn picker_row(ui: &mut egui::Ui, label: &str, id_salt: &str) {
    ui.label(label);

    if ui.add(DatePicker::new().id_salt(id_salt)).changed() {
        log::info!("{label} changed");
    }

    let id = DatePicker::state_id(ui, Some(id_salt));
    let selected = DatePickerState::load(ui.ctx(), id).and_then(|state| state.selected());
    match selected {
        Some(date) => ui.monospace(date.to_string()),
        None => ui.weak("nothing picked"),
    };
    ui.end_row();
}
