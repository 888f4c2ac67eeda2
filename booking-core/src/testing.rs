//! In-memory collaborators for driving the booking flow without a page.

use std::cell::{Ref, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;
use std::time::Duration;

use crate::calendar::CalendarCell;
use crate::host::{FormValues, PageHost, Roll, Scheduler};
use crate::i18n::TextNode;
use crate::widget::{BookingStep, BookingSummary, ConfirmationSummary};

#[derive(Debug, Default)]
pub struct HostLog {
    pub steps: Vec<BookingStep>,
    pub form: FormValues,
    pub resets: Vec<String>,
    pub month_label: String,
    pub cells: Vec<CalendarCell>,
    pub date_label: String,
    pub slots: Vec<String>,
    pub summary: Option<BookingSummary>,
    pub confirmation: Option<ConfirmationSummary>,
    pub pending: bool,
    pub pending_changes: usize,
    pub error: Option<TextNode>,
}

/// Records everything the widget pushes to the page. Clones share the log.
#[derive(Debug, Clone, Default)]
pub struct RecordingHost(Rc<RefCell<HostLog>>);

impl RecordingHost {
    pub fn log(&self) -> Ref<'_, HostLog> {
        self.0.borrow()
    }

    pub fn visible_step(&self) -> Option<BookingStep> {
        self.0.borrow().steps.last().copied()
    }

    pub fn fill(&self, field: &str, value: &str) {
        self.0
            .borrow_mut()
            .form
            .insert(field.to_string(), value.to_string());
    }
}

impl PageHost for RecordingHost {
    fn show_step(&mut self, step: BookingStep) {
        self.0.borrow_mut().steps.push(step);
    }

    fn form_values(&self, _form_id: &str) -> FormValues {
        self.0.borrow().form.clone()
    }

    fn reset_form(&mut self, form_id: &str) {
        let mut log = self.0.borrow_mut();
        log.form.clear();
        log.resets.push(form_id.to_string());
    }

    fn display_calendar(&mut self, month_label: &str, cells: &[CalendarCell]) {
        let mut log = self.0.borrow_mut();
        log.month_label = month_label.to_string();
        log.cells = cells.to_vec();
    }

    fn display_time_slots(&mut self, date_label: &str, slots: &[String]) {
        let mut log = self.0.borrow_mut();
        log.date_label = date_label.to_string();
        log.slots = slots.to_vec();
    }

    fn display_booking_summary(&mut self, summary: &BookingSummary) {
        self.0.borrow_mut().summary = Some(summary.clone());
    }

    fn display_confirmation(&mut self, summary: &ConfirmationSummary) {
        self.0.borrow_mut().confirmation = Some(summary.clone());
    }

    fn set_submit_pending(&mut self, pending: bool) {
        let mut log = self.0.borrow_mut();
        log.pending = pending;
        log.pending_changes += 1;
    }

    fn display_error(&mut self, message: Option<&TextNode>) {
        self.0.borrow_mut().error = message.cloned();
    }
}

type Deferred = (Duration, Box<dyn FnOnce()>);

/// Holds deferred callbacks until [`ManualScheduler::advance`] moves the
/// clock past their due time.
#[derive(Clone, Default)]
pub struct ManualScheduler {
    now: Rc<RefCell<Duration>>,
    queue: Rc<RefCell<Vec<Deferred>>>,
}

impl ManualScheduler {
    pub fn pending(&self) -> usize {
        self.queue.borrow().len()
    }

    pub fn advance(&self, by: Duration) {
        let target = *self.now.borrow() + by;
        loop {
            let next = {
                let mut queue = self.queue.borrow_mut();
                let due = queue
                    .iter()
                    .enumerate()
                    .filter(|(_, (at, _))| *at <= target)
                    .min_by_key(|(_, (at, _))| *at)
                    .map(|(index, _)| index);
                due.map(|index| queue.remove(index))
            };
            match next {
                Some((at, callback)) => {
                    *self.now.borrow_mut() = at;
                    callback();
                }
                None => break,
            }
        }
        *self.now.borrow_mut() = target;
    }
}

impl Scheduler for ManualScheduler {
    fn after(&self, delay: Duration, callback: Box<dyn FnOnce() + 'static>) {
        let at = *self.now.borrow() + delay;
        self.queue.borrow_mut().push((at, callback));
    }
}

/// Replays scripted rolls, then never fails.
#[derive(Debug, Default)]
pub struct SequenceRoll(RefCell<VecDeque<f64>>);

impl SequenceRoll {
    pub fn new(rolls: impl IntoIterator<Item = f64>) -> Self {
        Self(RefCell::new(rolls.into_iter().collect()))
    }
}

impl Roll for SequenceRoll {
    fn roll(&self) -> f64 {
        self.0.borrow_mut().pop_front().unwrap_or(1.0)
    }
}
