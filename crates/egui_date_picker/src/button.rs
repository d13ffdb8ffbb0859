use egui::{Area, Button, Frame, Id, Key, Order, RichText, Ui, UiKind, Widget, vec2};

use crate::calendar::{DEFAULT_FIRST_YEAR, YearMonth};
use crate::clock::{Clock, SystemClock};
use crate::format::{LONG_DATE_FORMAT, format_date};
use crate::popup::DatePickerPopup;
use crate::state::DatePickerState;

const TRIGGER_MIN_WIDTH: f32 = 192.0;
const POPOVER_GAP: f32 = 8.0;

/// A button showing the picked date, which opens a calendar popover when clicked.
///
/// The picked date lives inside the widget. Read it back with [`DatePickerState::load`]
/// using [`DatePicker::state_id`], or watch for [`egui::Response::changed`].
///
/// ```
/// # egui::__run_test_ui(|ui| {
/// ui.add(egui_date_picker::DatePicker::new().id_salt("birthday"));
/// # });
/// ```
#[must_use = "You should put this widget in a ui with `ui.add(widget);`"]
pub struct DatePicker<'a> {
    id_salt: Option<&'a str>,
    placeholder: String,
    format: String,
    show_icon: bool,
    first_year: i32,
    initial_month: Option<YearMonth>,
    clock: &'a dyn Clock,
}

impl Default for DatePicker<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> DatePicker<'a> {
    pub fn new() -> Self {
        Self {
            id_salt: None,
            placeholder: "Pick a date".to_owned(),
            format: LONG_DATE_FORMAT.to_owned(),
            show_icon: true,
            first_year: DEFAULT_FIRST_YEAR,
            initial_month: None,
            clock: &SystemClock,
        }
    }

    /// Add id source.
    /// Must be set if multiple date pickers are in the same Ui.
    #[inline]
    pub fn id_salt(mut self, id_salt: &'a str) -> Self {
        self.id_salt = Some(id_salt);
        self
    }

    /// Text shown on the button before a date is picked. (Default: `Pick a date`)
    #[inline]
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Change the format shown on the button. (Default: `%B %-d, %Y`)
    /// See [`chrono::format::strftime`] for valid formats.
    #[inline]
    pub fn format(mut self, format: impl Into<String>) -> Self {
        self.format = format.into();
        self
    }

    /// Show the calendar icon on the button. (Default: true)
    #[inline]
    pub fn show_icon(mut self, show_icon: bool) -> Self {
        self.show_icon = show_icon;
        self
    }

    /// The oldest year in the year list. The newest one is always the current year. (Default: 1900)
    #[inline]
    pub fn first_year(mut self, first_year: i32) -> Self {
        self.first_year = first_year;
        self
    }

    /// The month shown the first time the popover opens. (Default: the current month)
    #[inline]
    pub fn initial_month(mut self, initial_month: YearMonth) -> Self {
        self.initial_month = Some(initial_month);
        self
    }

    /// Where "today" comes from. (Default: [`SystemClock`])
    #[inline]
    pub fn clock(mut self, clock: &'a dyn Clock) -> Self {
        self.clock = clock;
        self
    }

    /// The id the state of this picker is stored under, when added to `ui`.
    pub fn state_id(ui: &Ui, id_salt: Option<&str>) -> Id {
        ui.make_persistent_id(id_salt)
    }
}

impl Widget for DatePicker<'_> {
    fn ui(self, ui: &mut Ui) -> egui::Response {
        let id = Self::state_id(ui, self.id_salt);
        let today = self.clock.today();

        let initial_state = DatePickerState::load(ui.ctx(), id).unwrap_or_else(|| {
            let state = DatePickerState::new(today);
            match self.initial_month {
                Some(month) => state.with_visible_month(month),
                None => state,
            }
        });
        let mut state = initial_state.clone();

        let label = match state.selected() {
            Some(date) => format_date(date, &self.format),
            None => self.placeholder.clone(),
        };
        let label = if self.show_icon {
            format!("📆 {label}")
        } else {
            label
        };
        let mut text = RichText::new(label);
        if state.selected().is_none() {
            text = text.color(ui.visuals().weak_text_color());
        }

        let visuals = ui.visuals().widgets.open;
        let mut button = Button::new(text).min_size(vec2(TRIGGER_MIN_WIDTH, 0.0));
        if state.is_popover_open() {
            button = button.fill(visuals.weak_bg_fill).stroke(visuals.bg_stroke);
        }
        let mut button_response = ui.add(button);
        if button_response.clicked() {
            state.toggle_popover();
        }

        if state.is_popover_open() {
            let pos = button_response.rect.left_bottom() + vec2(0.0, POPOVER_GAP);
            let area_response = Area::new(id.with("popover"))
                .kind(UiKind::Picker)
                .order(Order::Foreground)
                .fixed_pos(pos)
                .show(ui.ctx(), |ui| {
                    Frame::popup(ui.style()).show(ui, |ui| {
                        DatePickerPopup {
                            state: &mut state,
                            id,
                            today,
                            first_year: self.first_year,
                        }
                        .show(ui);
                    });
                })
                .response;

            let pressed_outside = ui.input(|i| {
                i.events.iter().any(|event| {
                    matches!(
                        event,
                        egui::Event::PointerButton { pos, pressed: true, .. }
                            if !button_response.rect.contains(*pos)
                                && !area_response.rect.contains(*pos)
                    )
                })
            });
            let escape = ui.input(|i| i.key_pressed(Key::Escape));
            if pressed_outside || escape {
                state.dismiss();
            }
        }

        if state.selected() != initial_state.selected() {
            button_response.mark_changed();
        }
        if state != initial_state {
            log::trace!("Date picker {id:?} is now {:?}", state.overlay());
            ui.ctx().request_repaint();
        }
        state.store(ui.ctx(), id);

        button_response
    }
}
