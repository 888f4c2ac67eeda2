use booking_core::{CalendarCell, DayCell, MonthDirection};
use leptos::prelude::*;
use thaw::*;

use super::SessionHandle;
use crate::components::localized::{use_i18n, T};
use crate::host::BookingView;

const WEEKDAYS_EN: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];
const WEEKDAYS_DE: [&str; 7] = ["So", "Mo", "Di", "Mi", "Do", "Fr", "Sa"];

#[component]
pub fn CalendarGrid(
    session: SessionHandle,
    booking_view: BookingView,
    heading_id: String,
) -> impl IntoView {
    let i18n = use_i18n();

    let navigate = move |direction: MonthDirection| {
        session.with_value(|s| s.navigate_month(direction));
    };

    let weekdays = move || {
        let names = match i18n.current() {
            booking_core::Language::En => WEEKDAYS_EN,
            booking_core::Language::De => WEEKDAYS_DE,
        };
        names
            .into_iter()
            .map(|name| view! { <div class="calendar-weekday">{name}</div> })
            .collect_view()
    };

    view! {
        <h3 id=heading_id class="booking-step-title">
            <T en="Select a Date" de="Datum auswählen"/>
        </h3>
        <div class="calendar-header">
            <Button
                class="calendar-nav prev-month"
                appearance=ButtonAppearance::Subtle
                on_click=move |_| navigate(MonthDirection::Prev)
            >
                "‹"
            </Button>
            <h4 class="calendar-month" aria-live="polite">
                {move || booking_view.month_label.get()}
            </h4>
            <Button
                class="calendar-nav next-month"
                appearance=ButtonAppearance::Subtle
                on_click=move |_| navigate(MonthDirection::Next)
            >
                "›"
            </Button>
        </div>
        <div class="calendar-weekdays">{weekdays}</div>
        <div class="calendar-grid" role="grid">
            {move || {
                booking_view
                    .cells
                    .get()
                    .into_iter()
                    .map(|cell| match cell {
                        CalendarCell::Blank => {
                            view! { <div class="calendar-day empty"></div> }.into_any()
                        }
                        CalendarCell::Day(day) => view! { <DayButton session=session day=day/> }.into_any(),
                    })
                    .collect_view()
            }}
        </div>
    }
}

#[component]
fn DayButton(session: SessionHandle, day: DayCell) -> impl IntoView {
    let number = day.day;
    let class = format!(
        "calendar-day{}{}",
        if day.available { " available" } else { " unavailable" },
        if day.today { " today" } else { "" },
    );

    let on_click = move |_| {
        if let Err(e) = session.with_value(|s| s.select_date(number)) {
            leptos::logging::warn!("Date selection rejected: {}", e);
        }
    };

    view! {
        <button
            type="button"
            id=day.id
            class=class
            aria-label=day.aria_label
            disabled=!day.selectable
            on:click=on_click
        >
            {number}
        </button>
    }
}
