use booking_core::{BookingSession, BookingStep, WidgetConfig};
use chrono::NaiveDate;
use leptos::prelude::*;

use super::{CalendarGrid, DetailsForm, SuccessPanel, TimeSlotPicker};
use crate::components::error::ErrorView;
use crate::components::localized::use_i18n;
use crate::host::{BookingView, BrowserRoll, TimeoutScheduler};

/// Four-step consultation booking. All state lives in the session; the panels
/// render the signals it writes and forward clicks back to it.
///
/// `today` comes from the server so the hydrated grid matches the rendered one.
#[component]
pub fn BookingWidget(config: WidgetConfig, today: NaiveDate) -> impl IntoView {
    let i18n = use_i18n();
    let booking_view = BookingView::new();

    let widget = match booking_core::BookingWidget::new(config, today) {
        Ok(widget) => widget,
        Err(e) => {
            leptos::logging::error!("Invalid booking config: {}", e);
            return view! { <ErrorView/> }.into_any();
        }
    };
    let session = StoredValue::new_local(BookingSession::new(
        widget,
        booking_view,
        i18n,
        TimeoutScheduler,
        BrowserRoll,
    ));

    let panel = move |step: BookingStep| {
        let id = step.panel_id();
        (
            id,
            format!("{}-heading", id),
            move || !booking_view.is_visible(step),
        )
    };
    let (date_id, date_heading, date_hidden) = panel(BookingStep::Date);
    let (time_id, time_heading, time_hidden) = panel(BookingStep::Time);
    let (details_id, details_heading, details_hidden) = panel(BookingStep::Details);
    let (success_id, success_heading, success_hidden) = panel(BookingStep::Success);

    view! {
        <div class="calendar-container booking-steps">
            <section
                id=date_id
                class="booking-step"
                class:hidden=date_hidden
                role="region"
                aria-labelledby=date_heading.clone()
            >
                <CalendarGrid session=session booking_view=booking_view heading_id=date_heading.clone()/>
            </section>
            <section
                id=time_id
                class="booking-step"
                class:hidden=time_hidden
                role="region"
                aria-labelledby=time_heading.clone()
            >
                <TimeSlotPicker session=session booking_view=booking_view heading_id=time_heading.clone()/>
            </section>
            <section
                id=details_id
                class="booking-step"
                class:hidden=details_hidden
                role="region"
                aria-labelledby=details_heading.clone()
            >
                <DetailsForm session=session booking_view=booking_view heading_id=details_heading.clone()/>
            </section>
            <section
                id=success_id
                class="booking-step"
                class:hidden=success_hidden
                role="region"
                aria-labelledby=success_heading.clone()
            >
                <SuccessPanel session=session booking_view=booking_view heading_id=success_heading.clone()/>
            </section>
        </div>
    }
    .into_any()
}
