//! Headless pieces of the ProTrainers Academy site: the consultation booking
//! flow and the small bits of site logic that do not need a browser.

pub mod calendar;
pub mod config;
pub mod contact;
pub mod counter;
pub mod error;
pub mod host;
pub mod i18n;
pub mod session;
pub mod site;
pub mod testing;
pub mod widget;

// Re-export commonly used types
pub use calendar::{CalendarCell, DayCell, MonthDirection, YearMonth};
pub use config::{ContactConfig, TodayPolicy, WidgetConfig};
pub use error::BookingError;
pub use host::{FormValues, NeverFail, PageHost, Roll, Scheduler};
pub use i18n::{Language, Localized, TextNode, Translator};
pub use session::BookingSession;
pub use widget::{
    BookingForm, BookingState, BookingStep, BookingSummary, BookingWidget, ConfirmationSummary,
    SubmissionOutcome, BOOKING_FORM_ID,
};
