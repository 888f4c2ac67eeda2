//! Browser-side collaborators for the booking widget: signals the step panels
//! render from, a timer-backed scheduler and a random roll.

use std::time::Duration;

use booking_core::host::{FormValues, PageHost, Roll, Scheduler};
use booking_core::{BookingStep, BookingSummary, CalendarCell, ConfirmationSummary, TextNode};
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct BookingFields {
    pub first_name: RwSignal<String>,
    pub last_name: RwSignal<String>,
    pub email: RwSignal<String>,
    pub company: RwSignal<String>,
    pub message: RwSignal<String>,
}

impl BookingFields {
    pub fn new() -> Self {
        Self {
            first_name: RwSignal::new(String::new()),
            last_name: RwSignal::new(String::new()),
            email: RwSignal::new(String::new()),
            company: RwSignal::new(String::new()),
            message: RwSignal::new(String::new()),
        }
    }

    fn entries(&self) -> [(&'static str, RwSignal<String>); 5] {
        [
            ("first-name", self.first_name),
            ("last-name", self.last_name),
            ("email", self.email),
            ("company", self.company),
            ("message", self.message),
        ]
    }

    pub fn values(&self) -> FormValues {
        self.entries()
            .into_iter()
            .map(|(name, signal)| (name.to_string(), signal.get_untracked()))
            .collect()
    }

    pub fn clear(&self) {
        for (_, signal) in self.entries() {
            signal.set(String::new());
        }
    }
}

impl Default for BookingFields {
    fn default() -> Self {
        Self::new()
    }
}

/// Everything the booking panels display. The widget writes, the views read.
#[derive(Clone, Copy)]
pub struct BookingView {
    pub step: RwSignal<BookingStep>,
    pub month_label: RwSignal<String>,
    pub cells: RwSignal<Vec<CalendarCell>>,
    pub date_label: RwSignal<String>,
    pub slots: RwSignal<Vec<String>>,
    pub summary: RwSignal<Option<BookingSummary>>,
    pub confirmation: RwSignal<Option<ConfirmationSummary>>,
    pub pending: RwSignal<bool>,
    pub error: RwSignal<Option<TextNode>>,
    pub fields: BookingFields,
}

impl BookingView {
    pub fn new() -> Self {
        Self {
            step: RwSignal::new(BookingStep::default()),
            month_label: RwSignal::new(String::new()),
            cells: RwSignal::new(Vec::new()),
            date_label: RwSignal::new(String::new()),
            slots: RwSignal::new(Vec::new()),
            summary: RwSignal::new(None),
            confirmation: RwSignal::new(None),
            pending: RwSignal::new(false),
            error: RwSignal::new(None),
            fields: BookingFields::new(),
        }
    }

    pub fn is_visible(&self, step: BookingStep) -> bool {
        self.step.get() == step
    }
}

impl Default for BookingView {
    fn default() -> Self {
        Self::new()
    }
}

impl PageHost for BookingView {
    fn show_step(&mut self, step: BookingStep) {
        self.step.set(step);
    }

    fn form_values(&self, _form_id: &str) -> FormValues {
        self.fields.values()
    }

    fn reset_form(&mut self, _form_id: &str) {
        self.fields.clear();
    }

    fn display_calendar(&mut self, month_label: &str, cells: &[CalendarCell]) {
        self.month_label.set(month_label.to_string());
        self.cells.set(cells.to_vec());
    }

    fn display_time_slots(&mut self, date_label: &str, slots: &[String]) {
        self.date_label.set(date_label.to_string());
        self.slots.set(slots.to_vec());
    }

    fn display_booking_summary(&mut self, summary: &BookingSummary) {
        self.summary.set(Some(summary.clone()));
    }

    fn display_confirmation(&mut self, summary: &ConfirmationSummary) {
        self.confirmation.set(Some(summary.clone()));
    }

    fn set_submit_pending(&mut self, pending: bool) {
        self.pending.set(pending);
    }

    fn display_error(&mut self, message: Option<&TextNode>) {
        self.error.set(message.cloned());
    }
}

/// Defers callbacks with `setTimeout`.
#[derive(Clone, Copy, Default)]
pub struct TimeoutScheduler;

impl Scheduler for TimeoutScheduler {
    fn after(&self, delay: Duration, callback: Box<dyn FnOnce() + 'static>) {
        set_timeout(callback, delay);
    }
}

#[derive(Clone, Copy, Default)]
pub struct BrowserRoll;

impl Roll for BrowserRoll {
    #[cfg(feature = "hydrate")]
    fn roll(&self) -> f64 {
        js_sys::Math::random()
    }

    // Submissions only happen in the browser.
    #[cfg(not(feature = "hydrate"))]
    fn roll(&self) -> f64 {
        1.0
    }
}
