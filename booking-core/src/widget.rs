use std::collections::BTreeSet;
use std::time::Duration;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::calendar::{
    format_long_date, format_weekday_date, render_grid, CalendarCell, MonthDirection, YearMonth,
};
use crate::config::WidgetConfig;
use crate::error::BookingError;
use crate::host::{FormValues, PageHost};
use crate::i18n::{Localized, TextNode, Translator};

pub const BOOKING_FORM_ID: &str = "booking-form";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BookingStep {
    #[default]
    Date,
    Time,
    Details,
    Success,
}

impl BookingStep {
    pub const ALL: [BookingStep; 4] = [
        BookingStep::Date,
        BookingStep::Time,
        BookingStep::Details,
        BookingStep::Success,
    ];

    pub fn panel_id(self) -> &'static str {
        match self {
            BookingStep::Date => "date-step",
            BookingStep::Time => "time-step",
            BookingStep::Details => "details-step",
            BookingStep::Success => "success-step",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingState {
    pub viewed_month: YearMonth,
    /// Full date of the picked day, so the summary keeps the month it was
    /// picked in even if the grid is navigated afterwards.
    pub selected_date: Option<NaiveDate>,
    pub selected_time_slot: Option<String>,
    pub current_step: BookingStep,
}

impl BookingState {
    pub fn selected_day(&self) -> Option<u32> {
        self.selected_date.map(|date| date.day())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub company: Option<String>,
    pub message: Option<String>,
}

impl BookingForm {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            company: None,
            message: None,
        }
    }

    pub fn with_company(mut self, company: impl Into<String>) -> Self {
        self.company = Some(company.into());
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Reads the details form as the page reports it. Field names match the
    /// form's input names.
    pub fn from_values(values: &FormValues) -> Result<Self, BookingError> {
        let required = |key: &'static str| {
            values
                .get(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .ok_or(BookingError::MissingField(key))
        };
        let optional = |key: &str| {
            values
                .get(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        Ok(Self {
            first_name: required("first-name")?,
            last_name: required("last-name")?,
            email: required("email")?,
            company: optional("company"),
            message: optional("message"),
        })
    }

    pub fn validate(&self) -> Result<(), BookingError> {
        for (field, value) in [
            ("first-name", &self.first_name),
            ("last-name", &self.last_name),
            ("email", &self.email),
        ] {
            if value.trim().is_empty() {
                return Err(BookingError::MissingField(field));
            }
        }
        Ok(())
    }

    fn company(&self) -> Option<&str> {
        self.company
            .as_deref()
            .map(str::trim)
            .filter(|company| !company.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingSubmission {
    pub form: BookingForm,
    pub date: NaiveDate,
    pub time_slot: String,
}

/// Shown on the details step: "June 9, 2025" / "9:00 AM - Central European Time".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingSummary {
    pub date: String,
    pub time: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryLine {
    pub label: TextNode,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfirmationSummary {
    pub lines: Vec<SummaryLine>,
}

impl ConfirmationSummary {
    fn new(submission: &BookingSubmission, timezone_abbreviation: &str) -> Self {
        let line = |en: &str, de: &str, value: String| SummaryLine {
            label: TextNode::localized(Localized::new(en, de)),
            value,
        };

        let form = &submission.form;
        let mut lines = vec![
            line("Date", "Datum", format_weekday_date(submission.date)),
            line(
                "Time",
                "Uhrzeit",
                format!("{} ({})", submission.time_slot, timezone_abbreviation),
            ),
            line(
                "Attendee",
                "Teilnehmer",
                format!("{} {}", form.first_name.trim(), form.last_name.trim()),
            ),
            line("Email", "E-Mail", form.email.trim().to_string()),
        ];
        if let Some(company) = form.company() {
            lines.push(line("Company", "Unternehmen", company.to_string()));
        }

        Self { lines }
    }

    /// Looks a line up by its English label.
    pub fn line(&self, label: &str) -> Option<&SummaryLine> {
        self.lines.iter().find(|line| {
            line.label
                .variants
                .as_ref()
                .map_or(line.label.text == label, |v| v.en == label)
        })
    }

    pub fn localize(&mut self, translator: &dyn Translator) {
        let mut labels: Vec<TextNode> = self.lines.iter().map(|l| l.label.clone()).collect();
        translator.localize(&mut labels);
        for (line, label) in self.lines.iter_mut().zip(labels) {
            line.label = label;
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmissionTicket {
    id: u64,
    pub delay: Duration,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Confirmed(ConfirmationSummary),
    Failed,
    /// The ticket no longer matches the in-flight submission, e.g. after a reset.
    Stale,
}

#[derive(Debug, Clone)]
struct PendingSubmission {
    id: u64,
    submission: BookingSubmission,
}

/// Consultation booking flow: date, then time, then attendee details, then a
/// confirmation. Owns all booking state; the page only renders what it is told.
#[derive(Debug, Clone)]
pub struct BookingWidget {
    config: WidgetConfig,
    available_days: BTreeSet<u32>,
    today: NaiveDate,
    state: BookingState,
    pending: Option<PendingSubmission>,
    next_ticket: u64,
}

impl BookingWidget {
    pub fn new(config: WidgetConfig, today: NaiveDate) -> Result<Self, BookingError> {
        config.validate()?;
        Ok(Self {
            available_days: config.available_day_set(),
            config,
            today,
            state: BookingState {
                viewed_month: YearMonth::of(today),
                selected_date: None,
                selected_time_slot: None,
                current_step: BookingStep::Date,
            },
            pending: None,
            next_ticket: 0,
        })
    }

    pub fn with_viewed_month(mut self, month: YearMonth) -> Self {
        self.state.viewed_month = month;
        self
    }

    pub fn config(&self) -> &WidgetConfig {
        &self.config
    }

    pub fn state(&self) -> &BookingState {
        &self.state
    }

    pub fn current_step(&self) -> BookingStep {
        self.state.current_step
    }

    pub fn viewed_month(&self) -> YearMonth {
        self.state.viewed_month
    }

    pub fn selected_day(&self) -> Option<u32> {
        self.state.selected_day()
    }

    pub fn selected_time_slot(&self) -> Option<&str> {
        self.state.selected_time_slot.as_deref()
    }

    pub fn is_submitting(&self) -> bool {
        self.pending.is_some()
    }

    /// Pushes the initial view to the page.
    pub fn render(&self, host: &mut dyn PageHost) {
        host.show_step(self.state.current_step);
        self.display_calendar(host);
        if self.state.current_step == BookingStep::Time {
            self.display_time_slots(host);
        }
        if let Some(summary) = self.booking_summary() {
            host.display_booking_summary(&summary);
        }
    }

    pub fn navigate_month(&mut self, direction: MonthDirection, host: &mut dyn PageHost) {
        let month = self.state.viewed_month.step(direction);
        debug!(from = %self.state.viewed_month, to = %month, "navigating calendar");
        self.state.viewed_month = month;
        self.display_calendar(host);
    }

    pub fn render_calendar_grid(&self) -> Vec<CalendarCell> {
        let month = self.state.viewed_month;
        render_grid(
            month,
            &self.available_days,
            self.config.today.day_in(month, self.today),
        )
    }

    pub fn is_available(&self, day: u32) -> bool {
        self.available_days.contains(&day) && day <= self.state.viewed_month.days_in_month()
    }

    pub fn select_date(&mut self, day: u32, host: &mut dyn PageHost) -> Result<(), BookingError> {
        self.expect_step(BookingStep::Date, BookingStep::Time)?;
        if !self.is_available(day) {
            return Err(BookingError::DayUnavailable(day));
        }
        let date = self
            .state
            .viewed_month
            .date(day)
            .ok_or(BookingError::DayUnavailable(day))?;

        self.state.selected_date = Some(date);
        self.state.selected_time_slot = None;
        self.display_time_slots(host);
        self.transition(BookingStep::Time, host);
        Ok(())
    }

    pub fn render_time_slots(&self) -> &[String] {
        &self.config.time_slots
    }

    pub fn select_time(
        &mut self,
        slot: &str,
        host: &mut dyn PageHost,
    ) -> Result<BookingSummary, BookingError> {
        self.expect_step(BookingStep::Time, BookingStep::Details)?;
        if self.state.selected_date.is_none() {
            return Err(BookingError::StepSkipped {
                from: BookingStep::Date,
                to: BookingStep::Details,
            });
        }
        let slot = self
            .config
            .time_slots
            .iter()
            .find(|s| s.as_str() == slot)
            .cloned()
            .ok_or_else(|| BookingError::UnknownTimeSlot(slot.to_string()))?;

        self.state.selected_time_slot = Some(slot);
        let summary = self.booking_summary().ok_or(BookingError::StepSkipped {
            from: BookingStep::Time,
            to: BookingStep::Details,
        })?;

        host.display_booking_summary(&summary);
        host.display_error(None);
        self.transition(BookingStep::Details, host);
        Ok(summary)
    }

    /// Steps back one panel without touching the selection.
    pub fn back(&mut self, host: &mut dyn PageHost) -> Result<BookingStep, BookingError> {
        let target = match self.state.current_step {
            BookingStep::Time => BookingStep::Date,
            BookingStep::Details if self.pending.is_some() => {
                return Err(BookingError::SubmissionInFlight)
            }
            BookingStep::Details => BookingStep::Time,
            from @ BookingStep::Date => {
                return Err(BookingError::StepSkipped { from, to: from })
            }
            from @ BookingStep::Success => {
                return Err(BookingError::StepSkipped {
                    from,
                    to: BookingStep::Details,
                })
            }
        };

        match target {
            BookingStep::Date => self.display_calendar(host),
            _ => self.display_time_slots(host),
        }
        self.transition(target, host);
        Ok(target)
    }

    pub fn booking_summary(&self) -> Option<BookingSummary> {
        let date = self.state.selected_date?;
        let slot = self.state.selected_time_slot.as_ref()?;
        Some(BookingSummary {
            date: format_long_date(date),
            time: format!("{} - {}", slot, self.config.timezone_label),
        })
    }

    /// Validates the attendee details and marks the submission as in flight.
    /// The caller is expected to wait `ticket.delay` and then call
    /// [`BookingWidget::complete_submission`].
    pub fn begin_submission(
        &mut self,
        form: BookingForm,
        host: &mut dyn PageHost,
        translator: &dyn Translator,
    ) -> Result<SubmissionTicket, BookingError> {
        if self.pending.is_some() {
            return Err(BookingError::SubmissionInFlight);
        }
        self.expect_step(BookingStep::Details, BookingStep::Success)?;

        if let Err(err) = form.validate() {
            show_error(&err, host, translator);
            return Err(err);
        }

        let (date, time_slot) = match (&self.state.selected_date, &self.state.selected_time_slot) {
            (Some(date), Some(slot)) => (*date, slot.clone()),
            _ => {
                return Err(BookingError::StepSkipped {
                    from: BookingStep::Date,
                    to: BookingStep::Success,
                })
            }
        };

        let id = self.next_ticket;
        self.next_ticket += 1;
        self.pending = Some(PendingSubmission {
            id,
            submission: BookingSubmission {
                form,
                date,
                time_slot,
            },
        });

        host.display_error(None);
        host.set_submit_pending(true);
        debug!(ticket = id, "booking submission pending");

        Ok(SubmissionTicket {
            id,
            delay: Duration::from_millis(self.config.submit_delay_ms),
        })
    }

    pub fn complete_submission(
        &mut self,
        ticket: SubmissionTicket,
        roll: f64,
        host: &mut dyn PageHost,
        translator: &dyn Translator,
    ) -> SubmissionOutcome {
        let pending = match self.pending.take() {
            Some(pending) if pending.id == ticket.id => pending,
            other => {
                self.pending = other;
                return SubmissionOutcome::Stale;
            }
        };
        host.set_submit_pending(false);

        if roll < self.config.failure_rate {
            warn!(ticket = ticket.id, "simulated booking failure");
            show_error(&BookingError::SubmissionFailed, host, translator);
            return SubmissionOutcome::Failed;
        }

        let submission = pending.submission;
        let mut summary = ConfirmationSummary::new(&submission, &self.config.timezone_abbreviation);
        summary.localize(translator);
        host.display_confirmation(&summary);
        self.transition(BookingStep::Success, host);

        info!(
            date = %submission.date,
            time = %submission.time_slot,
            "consultation booked"
        );
        SubmissionOutcome::Confirmed(summary)
    }

    pub fn reset(&mut self, host: &mut dyn PageHost) {
        self.state.selected_date = None;
        self.state.selected_time_slot = None;
        if self.pending.take().is_some() {
            host.set_submit_pending(false);
        }
        host.reset_form(BOOKING_FORM_ID);
        host.display_error(None);
        self.transition(BookingStep::Date, host);
        self.display_calendar(host);
    }

    /// Renders the inline message for `err`, if it has one.
    pub fn report_error(
        &self,
        err: &BookingError,
        host: &mut dyn PageHost,
        translator: &dyn Translator,
    ) {
        show_error(err, host, translator);
    }

    fn expect_step(&self, expected: BookingStep, to: BookingStep) -> Result<(), BookingError> {
        if self.state.current_step == expected {
            Ok(())
        } else {
            Err(BookingError::StepSkipped {
                from: self.state.current_step,
                to,
            })
        }
    }

    fn transition(&mut self, to: BookingStep, host: &mut dyn PageHost) {
        debug!(from = ?self.state.current_step, to = ?to, "booking step");
        self.state.current_step = to;
        host.show_step(to);
    }

    fn display_calendar(&self, host: &mut dyn PageHost) {
        host.display_calendar(
            &self.state.viewed_month.to_string(),
            &self.render_calendar_grid(),
        );
    }

    fn display_time_slots(&self, host: &mut dyn PageHost) {
        let label = self
            .state
            .selected_date
            .map(format_long_date)
            .unwrap_or_default();
        host.display_time_slots(&label, &self.config.time_slots);
    }
}

fn show_error(err: &BookingError, host: &mut dyn PageHost, translator: &dyn Translator) {
    if let Some(message) = err.user_message() {
        let mut nodes = [TextNode::localized(message)];
        translator.localize(&mut nodes);
        host.display_error(Some(&nodes[0]));
    }
}
