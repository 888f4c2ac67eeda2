use std::cell::RefCell;
use std::rc::{Rc, Weak};

use tracing::debug;

use crate::calendar::MonthDirection;
use crate::error::BookingError;
use crate::host::{PageHost, Roll, Scheduler};
use crate::i18n::Translator;
use crate::widget::{
    BookingForm, BookingStep, BookingSummary, BookingWidget, SubmissionOutcome, SubmissionTicket,
    BOOKING_FORM_ID,
};

struct Inner {
    widget: BookingWidget,
    host: Box<dyn PageHost>,
    translator: Box<dyn Translator>,
    roll: Box<dyn Roll>,
}

/// A booking widget wired to its page. Handles are cheap to clone and are
/// meant to be captured by the page's event callbacks; all of them run on one
/// thread, so the state is shared through `Rc<RefCell<_>>`.
#[derive(Clone)]
pub struct BookingSession {
    inner: Rc<RefCell<Inner>>,
    scheduler: Rc<dyn Scheduler>,
}

impl BookingSession {
    pub fn new(
        widget: BookingWidget,
        host: impl PageHost + 'static,
        translator: impl Translator + 'static,
        scheduler: impl Scheduler + 'static,
        roll: impl Roll + 'static,
    ) -> Self {
        let mut host: Box<dyn PageHost> = Box::new(host);
        widget.render(host.as_mut());

        Self {
            inner: Rc::new(RefCell::new(Inner {
                widget,
                host,
                translator: Box::new(translator),
                roll: Box::new(roll),
            })),
            scheduler: Rc::new(scheduler),
        }
    }

    pub fn with_widget<R>(&self, f: impl FnOnce(&BookingWidget) -> R) -> R {
        f(&self.inner.borrow().widget)
    }

    pub fn current_step(&self) -> BookingStep {
        self.with_widget(BookingWidget::current_step)
    }

    pub fn navigate_month(&self, direction: MonthDirection) {
        let inner = &mut *self.inner.borrow_mut();
        inner.widget.navigate_month(direction, inner.host.as_mut());
    }

    pub fn select_date(&self, day: u32) -> Result<(), BookingError> {
        let inner = &mut *self.inner.borrow_mut();
        inner.widget.select_date(day, inner.host.as_mut())
    }

    pub fn select_time(&self, slot: &str) -> Result<BookingSummary, BookingError> {
        let inner = &mut *self.inner.borrow_mut();
        inner.widget.select_time(slot, inner.host.as_mut())
    }

    pub fn back(&self) -> Result<BookingStep, BookingError> {
        let inner = &mut *self.inner.borrow_mut();
        inner.widget.back(inner.host.as_mut())
    }

    /// Starts the simulated submission. Repeated calls while one is pending
    /// are rejected with [`BookingError::SubmissionInFlight`].
    pub fn submit_booking(&self, form: BookingForm) -> Result<(), BookingError> {
        let ticket = {
            let inner = &mut *self.inner.borrow_mut();
            inner
                .widget
                .begin_submission(form, inner.host.as_mut(), inner.translator.as_ref())?
        };

        let weak = Rc::downgrade(&self.inner);
        self.scheduler.after(
            ticket.delay,
            Box::new(move || complete(weak, ticket)),
        );
        Ok(())
    }

    /// Submits whatever the page's details form currently holds.
    pub fn submit_form(&self) -> Result<(), BookingError> {
        let parsed = {
            let inner = &mut *self.inner.borrow_mut();
            if inner.widget.is_submitting() {
                return Err(BookingError::SubmissionInFlight);
            }
            let values = inner.host.form_values(BOOKING_FORM_ID);
            BookingForm::from_values(&values).map_err(|err| {
                inner
                    .widget
                    .report_error(&err, inner.host.as_mut(), inner.translator.as_ref());
                err
            })
        };
        self.submit_booking(parsed?)
    }

    pub fn reset(&self) {
        let inner = &mut *self.inner.borrow_mut();
        inner.widget.reset(inner.host.as_mut());
    }
}

fn complete(weak: Weak<RefCell<Inner>>, ticket: SubmissionTicket) {
    let Some(inner) = weak.upgrade() else {
        debug!("booking session dropped before submission completed");
        return;
    };
    let inner = &mut *inner.borrow_mut();
    let roll = inner.roll.roll();
    let outcome = inner.widget.complete_submission(
        ticket,
        roll,
        inner.host.as_mut(),
        inner.translator.as_ref(),
    );
    if outcome == SubmissionOutcome::Stale {
        debug!("ignoring stale booking submission");
    }
}
