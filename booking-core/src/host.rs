//! Collaborators the booking widget drives. The widget never touches a
//! rendering surface directly; the page supplies these.

use std::collections::HashMap;
use std::time::Duration;

use crate::calendar::CalendarCell;
use crate::i18n::TextNode;
use crate::widget::{BookingStep, BookingSummary, ConfirmationSummary};

pub type FormValues = HashMap<String, String>;

pub trait PageHost {
    /// Makes exactly one step panel visible.
    fn show_step(&mut self, step: BookingStep);

    fn form_values(&self, form_id: &str) -> FormValues;

    fn reset_form(&mut self, form_id: &str);

    fn display_calendar(&mut self, _month_label: &str, _cells: &[CalendarCell]) {}

    fn display_time_slots(&mut self, _date_label: &str, _slots: &[String]) {}

    fn display_booking_summary(&mut self, _summary: &BookingSummary) {}

    fn display_confirmation(&mut self, _summary: &ConfirmationSummary) {}

    fn set_submit_pending(&mut self, _pending: bool) {}

    fn display_error(&mut self, _message: Option<&TextNode>) {}
}

/// One-shot deferred callbacks, used for simulated network latency.
pub trait Scheduler {
    fn after(&self, delay: Duration, callback: Box<dyn FnOnce() + 'static>);
}

/// Source of uniform values in `[0, 1)` for simulated failures. A submission
/// fails when the roll is below the configured failure rate.
pub trait Roll {
    fn roll(&self) -> f64;
}

/// Never produces a failing roll.
#[derive(Debug, Clone, Copy, Default)]
pub struct NeverFail;

impl Roll for NeverFail {
    fn roll(&self) -> f64 {
        1.0
    }
}
