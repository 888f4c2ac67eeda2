//! End-to-end booking flow through a session wired to in-memory collaborators.

use std::time::Duration;

use booking_core::testing::{ManualScheduler, RecordingHost, SequenceRoll};
use booking_core::{
    BookingError, BookingForm, BookingSession, BookingStep, BookingWidget, CalendarCell, Language,
    MonthDirection, NeverFail, TodayPolicy, WidgetConfig, YearMonth,
};
use chrono::NaiveDate;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 2).unwrap()
}

fn widget_in(year: i32, month: u32) -> BookingWidget {
    BookingWidget::new(WidgetConfig::default(), today())
        .unwrap()
        .with_viewed_month(YearMonth::new(year, month).unwrap())
}

struct Harness {
    session: BookingSession,
    host: RecordingHost,
    scheduler: ManualScheduler,
}

fn harness_with(widget: BookingWidget, language: Language, roll: SequenceRoll) -> Harness {
    let host = RecordingHost::default();
    let scheduler = ManualScheduler::default();
    let session = BookingSession::new(widget, host.clone(), language, scheduler.clone(), roll);
    Harness {
        session,
        host,
        scheduler,
    }
}

fn harness() -> Harness {
    harness_with(widget_in(2025, 6), Language::En, SequenceRoll::default())
}

fn ada() -> BookingForm {
    BookingForm::new("Ada", "Lovelace", "ada@x.com")
}

// ============================================================================
// Calendar
// ============================================================================

#[test]
fn test_grid_size_matches_weekday_offset_and_month_length() {
    let mut month = YearMonth::new(2023, 1).unwrap();
    for _ in 0..48 {
        let widget = widget_in(month.year, month.month);
        let cells = widget.render_calendar_grid();
        let blanks = cells.iter().take_while(|c| **c == CalendarCell::Blank).count() as u32;
        let first = NaiveDate::from_ymd_opt(month.year, month.month, 1).unwrap();

        assert_eq!(blanks, chrono::Datelike::weekday(&first).num_days_from_sunday());
        let days = month.days_in_month();
        assert!(NaiveDate::from_ymd_opt(month.year, month.month, days).is_some());
        assert!(NaiveDate::from_ymd_opt(month.year, month.month, days + 1).is_none());
        assert_eq!(cells.len() as u32, blanks + days);
        month = month.step(MonthDirection::Next);
    }
}

#[test]
fn test_initial_render_pushes_date_step_and_calendar() {
    let h = harness();
    let log = h.host.log();
    assert_eq!(log.steps, vec![BookingStep::Date]);
    assert_eq!(log.month_label, "June 2025");
    assert_eq!(log.cells.len(), 30);
}

#[test]
fn test_twelve_next_clicks_wrap_to_next_january() {
    let h = harness_with(widget_in(2025, 1), Language::En, SequenceRoll::default());
    for _ in 0..12 {
        h.session.navigate_month(MonthDirection::Next);
    }
    assert_eq!(
        h.session.with_widget(|w| w.viewed_month()),
        YearMonth::new(2026, 1).unwrap()
    );
    assert_eq!(h.host.log().month_label, "January 2026");
}

#[test]
fn test_demo_today_marks_same_day_every_month() {
    let config = WidgetConfig {
        today: TodayPolicy::DemoDay(5),
        ..WidgetConfig::default()
    };
    let widget = BookingWidget::new(config, today())
        .unwrap()
        .with_viewed_month(YearMonth::new(2025, 9).unwrap());

    let today_days: Vec<u32> = widget
        .render_calendar_grid()
        .iter()
        .filter_map(CalendarCell::as_day)
        .filter(|c| c.today)
        .map(|c| c.day)
        .collect();
    assert_eq!(today_days, vec![5]);
}

// ============================================================================
// Selection and steps
// ============================================================================

#[test]
fn test_select_date_then_time_shows_cet_summary() {
    let h = harness();

    h.session.select_date(9).unwrap();
    assert_eq!(h.session.current_step(), BookingStep::Time);
    assert_eq!(h.host.log().date_label, "June 9, 2025");
    assert_eq!(h.host.log().slots.len(), 12);

    let summary = h.session.select_time("9:00 AM").unwrap();
    assert_eq!(h.session.current_step(), BookingStep::Details);
    assert_eq!(summary.date, "June 9, 2025");
    assert_eq!(summary.time, "9:00 AM - Central European Time");
    assert_eq!(h.host.log().summary.as_ref(), Some(&summary));
    assert_eq!(h.host.visible_step(), Some(BookingStep::Details));
}

#[test]
fn test_unavailable_days_cannot_be_selected() {
    let h = harness();
    for day in [1, 10, 31] {
        assert_eq!(h.session.select_date(day), Err(BookingError::DayUnavailable(day)));
    }
    assert_eq!(h.session.current_step(), BookingStep::Date);
    assert_eq!(h.session.with_widget(|w| w.selected_day()), None);
}

#[test]
fn test_reselecting_after_back_drops_stale_time() {
    let h = harness();
    h.session.select_date(9).unwrap();
    h.session.select_time("10:30 AM").unwrap();
    h.session.back().unwrap();
    h.session.back().unwrap();
    assert_eq!(h.session.with_widget(|w| w.selected_time_slot().map(String::from)), Some("10:30 AM".into()));

    h.session.select_date(13).unwrap();

    h.session.with_widget(|w| {
        assert_eq!(w.selected_day(), Some(13));
        assert_eq!(w.selected_time_slot(), None);
        assert_eq!(w.booking_summary(), None);
    });
}

#[test]
fn test_details_cannot_be_reached_without_time() {
    let h = harness();
    h.session.select_date(9).unwrap();
    assert!(matches!(
        h.session.submit_booking(ada()),
        Err(BookingError::StepSkipped { from: BookingStep::Time, .. })
    ));
}

// ============================================================================
// Submission
// ============================================================================

#[test]
fn test_submit_succeeds_after_delay_and_omits_empty_company() {
    let h = harness();
    h.session.select_date(9).unwrap();
    h.session.select_time("9:00 AM").unwrap();

    h.session.submit_booking(ada()).unwrap();
    assert!(h.host.log().pending);
    assert_eq!(h.session.current_step(), BookingStep::Details);

    h.scheduler.advance(Duration::from_millis(1999));
    assert_eq!(h.session.current_step(), BookingStep::Details);

    h.scheduler.advance(Duration::from_millis(1));
    assert_eq!(h.session.current_step(), BookingStep::Success);

    let log = h.host.log();
    assert!(!log.pending);
    assert_eq!(log.pending_changes, 2);
    let confirmation = log.confirmation.as_ref().unwrap();
    assert_eq!(confirmation.line("Date").unwrap().value, "Monday, June 9, 2025");
    assert_eq!(confirmation.line("Time").unwrap().value, "9:00 AM (CET)");
    assert_eq!(confirmation.line("Attendee").unwrap().value, "Ada Lovelace");
    assert_eq!(confirmation.line("Email").unwrap().value, "ada@x.com");
    assert!(confirmation.line("Company").is_none());
    assert_eq!(confirmation.lines.len(), 4);
}

#[test]
fn test_company_line_is_rendered_and_localized() {
    let h = harness_with(widget_in(2025, 6), Language::De, SequenceRoll::default());
    h.session.select_date(16).unwrap();
    h.session.select_time("2:30 PM").unwrap();
    h.session
        .submit_booking(ada().with_company("Analytical Engines Ltd"))
        .unwrap();
    h.scheduler.advance(Duration::from_secs(2));

    let log = h.host.log();
    let confirmation = log.confirmation.as_ref().unwrap();
    let company = confirmation.line("Company").unwrap();
    assert_eq!(company.label.text, "Unternehmen");
    assert_eq!(company.value, "Analytical Engines Ltd");
}

#[test]
fn test_double_submit_is_rejected_while_pending() {
    let h = harness();
    h.session.select_date(9).unwrap();
    h.session.select_time("9:00 AM").unwrap();

    h.session.submit_booking(ada()).unwrap();
    assert_eq!(h.session.submit_booking(ada()), Err(BookingError::SubmissionInFlight));
    assert_eq!(h.session.back(), Err(BookingError::SubmissionInFlight));
    assert_eq!(h.scheduler.pending(), 1);

    h.scheduler.advance(Duration::from_secs(2));
    assert_eq!(h.session.current_step(), BookingStep::Success);
}

#[test]
fn test_simulated_failure_stays_on_details_with_generic_error() {
    let config = WidgetConfig {
        failure_rate: 0.1,
        ..WidgetConfig::default()
    };
    let widget = BookingWidget::new(config, today())
        .unwrap()
        .with_viewed_month(YearMonth::new(2025, 6).unwrap());
    let h = harness_with(widget, Language::En, SequenceRoll::new([0.05, 0.9]));
    h.session.select_date(9).unwrap();
    h.session.select_time("9:00 AM").unwrap();

    h.session.submit_booking(ada()).unwrap();
    h.scheduler.advance(Duration::from_secs(2));
    assert_eq!(h.session.current_step(), BookingStep::Details);
    assert_eq!(
        h.host.log().error.as_ref().map(|e| e.text.clone()),
        Some("Sorry, something went wrong. Please try again.".to_string())
    );

    // user resubmits manually
    h.session.submit_booking(ada()).unwrap();
    assert_eq!(h.host.log().error, None);
    h.scheduler.advance(Duration::from_secs(2));
    assert_eq!(h.session.current_step(), BookingStep::Success);
}

#[test]
fn test_submit_form_reads_host_values_and_reports_missing_fields() {
    let h = harness();
    h.session.select_date(9).unwrap();
    h.session.select_time("9:00 AM").unwrap();
    h.host.fill("first-name", "Ada");
    h.host.fill("email", "ada@x.com");

    assert_eq!(h.session.submit_form(), Err(BookingError::MissingField("last-name")));
    assert_eq!(
        h.host.log().error.as_ref().map(|e| e.text.clone()),
        Some("Please fill in your last name.".to_string())
    );
    assert_eq!(h.scheduler.pending(), 0);

    h.host.fill("last-name", "Lovelace");
    h.session.submit_form().unwrap();
    h.scheduler.advance(Duration::from_secs(2));
    assert_eq!(h.session.current_step(), BookingStep::Success);
}

#[test]
fn test_reset_after_success_returns_to_date_and_clears_form() {
    let h = harness();
    h.session.select_date(9).unwrap();
    h.session.select_time("9:00 AM").unwrap();
    h.host.fill("first-name", "Ada");
    h.session.submit_booking(ada()).unwrap();
    h.scheduler.advance(Duration::from_secs(2));

    h.session.reset();

    assert_eq!(h.session.current_step(), BookingStep::Date);
    h.session.with_widget(|w| {
        assert_eq!(w.selected_day(), None);
        assert_eq!(w.selected_time_slot(), None);
    });
    let log = h.host.log();
    assert_eq!(log.resets, vec!["booking-form".to_string()]);
    assert!(log.form.is_empty());
    assert_eq!(log.steps.last(), Some(&BookingStep::Date));
}

#[test]
fn test_dropped_session_ignores_late_callback() {
    let h = harness_with(widget_in(2025, 6), Language::En, SequenceRoll::default());
    h.session.select_date(9).unwrap();
    h.session.select_time("9:00 AM").unwrap();
    h.session.submit_booking(ada()).unwrap();

    let Harness { session, host, scheduler } = h;
    drop(session);
    scheduler.advance(Duration::from_secs(2));

    assert!(host.log().confirmation.is_none());
}

#[test]
fn test_never_fail_roll_is_usable_with_session() {
    let host = RecordingHost::default();
    let scheduler = ManualScheduler::default();
    let session = BookingSession::new(widget_in(2025, 6), host.clone(), Language::En, scheduler.clone(), NeverFail);
    session.select_date(30).unwrap();
    session.select_time("3:30 PM").unwrap();
    session.submit_booking(ada()).unwrap();
    scheduler.advance(Duration::from_secs(5));
    assert_eq!(session.current_step(), BookingStep::Success);
}
