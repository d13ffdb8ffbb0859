use chrono::NaiveDate;
use egui_date_picker::{DatePicker, DatePickerState, FixedClock, Overlay, YearMonth};
use egui_kittest::Harness;
use egui_kittest::kittest::Queryable as _;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn today() -> NaiveDate {
    date(2026, 10, 19)
}

#[derive(Default)]
struct Page {
    state: Option<DatePickerState>,
    changed: bool,
}

impl Page {
    fn state(&self) -> &DatePickerState {
        self.state.as_ref().expect("the picker has been shown")
    }
}

fn unchanged(picker: DatePicker<'_>) -> DatePicker<'_> {
    picker
}

fn harness_with(configure: fn(DatePicker<'_>) -> DatePicker<'_>) -> Harness<'static, Page> {
    Harness::new_ui_state(
        move |ui, page: &mut Page| {
            let _ = ui.button("Elsewhere");

            let clock = FixedClock(today());
            let picker = DatePicker::new().id_salt("picker").clock(&clock);
            let response = ui.add(configure(picker));
            page.changed |= response.changed();

            let id = DatePicker::state_id(ui, Some("picker"));
            page.state = DatePickerState::load(ui.ctx(), id);
        },
        Page::default(),
    )
}

fn harness() -> Harness<'static, Page> {
    harness_with(unchanged)
}

fn open(harness: &mut Harness<'_, Page>) {
    harness.get_by_label_contains("Pick a date").click();
    harness.run();
    assert_eq!(harness.state().state().overlay(), Overlay::Open);
}

#[test]
fn shows_placeholder_until_a_day_is_picked() {
    let mut harness = harness();
    harness.run();

    harness.get_by_label("📆 Pick a date");
    let state = harness.state().state();
    assert_eq!(state.selected(), None);
    assert_eq!(state.overlay(), Overlay::Closed);
    assert_eq!(state.visible_month(), YearMonth::new(2026, 10).unwrap());
    assert!(harness.query_by_label("19").is_none(), "popover is closed");
}

#[test]
fn trigger_toggles_the_popover() {
    let mut harness = harness();
    harness.run();

    open(&mut harness);
    harness.get_by_label("October ⏷");
    harness.get_by_label("2026 ⏷");
    harness.get_by_label("Su");
    harness.get_by_label("31");

    harness.get_by_label_contains("Pick a date").click();
    harness.run();
    assert_eq!(harness.state().state().overlay(), Overlay::Closed);
    assert!(harness.query_by_label("31").is_none());
}

#[test]
fn picking_a_day_shows_long_date_and_closes() {
    let mut harness = harness();
    harness.run();
    open(&mut harness);

    harness.get_by_label("15").click();
    harness.run();

    let page = harness.state();
    assert_eq!(page.state().selected(), Some(date(2026, 10, 15)));
    assert_eq!(page.state().overlay(), Overlay::Closed);
    assert!(page.changed, "response should report the change");
    harness.get_by_label("📆 October 15, 2026");
    assert!(harness.query_by_label("15").is_none());
}

#[test]
fn month_and_year_lists_exclude_each_other() {
    let mut harness = harness();
    harness.run();
    open(&mut harness);

    harness.get_by_label("October ⏷").click();
    harness.run();
    assert_eq!(harness.state().state().overlay(), Overlay::MonthList);
    harness.get_by_label("March");

    harness.get_by_label("2026 ⏷").click();
    harness.run();
    assert_eq!(harness.state().state().overlay(), Overlay::YearList);
    assert!(!harness.state().state().is_month_list_open());
    assert!(harness.query_by_label("March").is_none());
    harness.get_by_label("2025");

    harness.get_by_label("October ⏷").click();
    harness.run();
    assert_eq!(harness.state().state().overlay(), Overlay::MonthList);
    assert!(!harness.state().state().is_year_list_open());
    assert!(harness.query_by_label("2025").is_none());
}

#[test]
fn changing_month_keeps_the_selected_date() {
    let mut harness = harness();
    harness.run();
    open(&mut harness);
    harness.get_by_label("3").click();
    harness.run();

    harness.get_by_label_contains("October 3, 2026").click();
    harness.run();
    harness.get_by_label("October ⏷").click();
    harness.run();
    harness.get_by_label("April").click();
    harness.run();

    let state = harness.state().state();
    assert_eq!(state.visible_month(), YearMonth::new(2026, 4).unwrap());
    assert_eq!(state.selected(), Some(date(2026, 10, 3)));
    assert_eq!(state.overlay(), Overlay::Open);
    harness.get_by_label("📆 October 3, 2026");
    harness.get_by_label("April ⏷");
    assert!(harness.query_by_label("31").is_none(), "April is shown, not October");
    harness.get_by_label("30");
}

#[test]
fn changing_year_keeps_the_month() {
    let mut harness = harness();
    harness.run();
    open(&mut harness);

    harness.get_by_label("2026 ⏷").click();
    harness.run();
    harness.get_by_label("2024").click();
    harness.run();

    let state = harness.state().state();
    assert_eq!(state.visible_month(), YearMonth::new(2024, 10).unwrap());
    assert_eq!(state.overlay(), Overlay::Open);
    assert_eq!(state.selected(), None);
    harness.get_by_label("2024 ⏷");
    harness.get_by_label("October ⏷");
}

#[test]
fn year_list_spans_first_year_to_this_year() {
    let mut harness = harness();
    harness.run();
    open(&mut harness);
    harness.get_by_label("2026 ⏷").click();
    harness.run();

    assert!(harness.query_by_label("2027").is_none());
    harness.get_by_label("1900");
    assert!(harness.query_by_label("1899").is_none());
}

#[test]
fn first_year_limits_the_year_list() {
    fn recent(picker: DatePicker<'_>) -> DatePicker<'_> {
        picker.first_year(2020)
    }

    let mut harness = harness_with(recent);
    harness.run();
    open(&mut harness);
    harness.get_by_label("2026 ⏷").click();
    harness.run();

    harness.get_by_label("2020");
    assert!(harness.query_by_label("2019").is_none());
}

#[test]
fn clicking_outside_closes_every_overlay() {
    let mut harness = harness();
    harness.run();
    open(&mut harness);
    harness.get_by_label("October ⏷").click();
    harness.run();
    assert_eq!(harness.state().state().overlay(), Overlay::MonthList);

    harness.get_by_label("Elsewhere").click();
    harness.run();

    let state = harness.state().state();
    assert!(!state.is_any_open());
    assert_eq!(state.selected(), None);
    assert!(harness.query_by_label("March").is_none());
}

#[test]
fn clicking_inside_the_popover_keeps_it_open() {
    let mut harness = harness();
    harness.run();
    open(&mut harness);

    harness.get_by_label("Su").click();
    harness.run();

    assert_eq!(harness.state().state().overlay(), Overlay::Open);
}

#[test]
fn escape_closes_every_overlay() {
    let mut harness = harness();
    harness.run();
    open(&mut harness);
    harness.get_by_label("2026 ⏷").click();
    harness.run();

    harness.key_press(egui::Key::Escape);
    harness.run();

    assert_eq!(harness.state().state().overlay(), Overlay::Closed);
    assert!(!harness.state().state().is_any_open());
}

#[test]
fn closing_from_the_trigger_also_closes_the_lists() {
    let mut harness = harness();
    harness.run();
    open(&mut harness);
    harness.get_by_label("2026 ⏷").click();
    harness.run();

    harness.get_by_label_contains("Pick a date").click();
    harness.run();

    assert!(!harness.state().state().is_any_open());
}

#[test]
fn custom_format_and_placeholder() {
    fn compact(picker: DatePicker<'_>) -> DatePicker<'_> {
        picker
            .placeholder("Due date")
            .format("%Y-%m-%d")
            .show_icon(false)
    }

    let mut harness = harness_with(compact);
    harness.run();
    harness.get_by_label("Due date").click();
    harness.run();
    harness.get_by_label("7").click();
    harness.run();

    harness.get_by_label("2026-10-07");
}

#[test]
fn initial_month_is_shown_first() {
    fn january(picker: DatePicker<'_>) -> DatePicker<'_> {
        picker.initial_month(YearMonth::new(2000, 1).unwrap())
    }

    let mut harness = harness_with(january);
    harness.run();
    open(&mut harness);

    harness.get_by_label("January ⏷");
    harness.get_by_label("2000 ⏷");
    assert_eq!(
        harness.state().state().visible_month(),
        YearMonth::new(2000, 1).unwrap()
    );
}

#[test]
fn pickers_with_different_ids_are_independent() {
    #[derive(Default)]
    struct Pair {
        start: Option<DatePickerState>,
        end: Option<DatePickerState>,
    }

    let mut harness = Harness::new_ui_state(
        |ui, pair: &mut Pair| {
            let clock = FixedClock(today());
            ui.horizontal(|ui| {
                ui.add(DatePicker::new().id_salt("start").placeholder("Start").clock(&clock));
                ui.add(DatePicker::new().id_salt("end").placeholder("End").clock(&clock));

                let start_id = DatePicker::state_id(ui, Some("start"));
                let end_id = DatePicker::state_id(ui, Some("end"));
                pair.start = DatePickerState::load(ui.ctx(), start_id);
                pair.end = DatePickerState::load(ui.ctx(), end_id);
            });
        },
        Pair::default(),
    );
    harness.run();

    harness.get_by_label_contains("Start").click();
    harness.run();
    assert!(harness.state().start.as_ref().unwrap().is_popover_open());
    assert!(!harness.state().end.as_ref().unwrap().is_popover_open());

    // Opening the second picker is a click outside the first one.
    harness.get_by_label_contains("End").click();
    harness.run();
    assert!(!harness.state().start.as_ref().unwrap().is_popover_open());
    assert!(harness.state().end.as_ref().unwrap().is_popover_open());
}

#[test]
fn header_toggles_are_marked_as_dropdowns() {
    let mut harness = harness();
    harness.run();
    open(&mut harness);

    assert!(harness.query_by_label("October").is_none());
    harness.get_by_label("October ⏷").click();
    harness.run();

    // The list entry is the plain month name, the header keeps its marker.
    harness.get_by_label("October");
    harness.get_by_label("October ⏷");
    harness.get_by_label("2026 ⏷");
}
