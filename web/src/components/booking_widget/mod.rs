pub mod calendar_grid;
pub mod details_form;
pub mod success_panel;
pub mod time_slot_picker;
pub mod widget;

pub use calendar_grid::CalendarGrid;
pub use details_form::DetailsForm;
pub use success_panel::SuccessPanel;
pub use time_slot_picker::TimeSlotPicker;
pub use widget::BookingWidget;

use booking_core::BookingSession;
use leptos::prelude::*;

/// Handle the step panels use to drive the session. The session is shared
/// through `Rc`, so it lives in thread-local arena storage.
pub type SessionHandle = StoredValue<BookingSession, LocalStorage>;
