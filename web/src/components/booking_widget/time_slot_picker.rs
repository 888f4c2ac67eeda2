use leptos::prelude::*;
use thaw::*;

use super::SessionHandle;
use crate::components::localized::T;
use crate::host::BookingView;

#[component]
pub fn TimeSlotPicker(
    session: SessionHandle,
    booking_view: BookingView,
    heading_id: String,
) -> impl IntoView {
    let back = move |_| {
        if let Err(e) = session.with_value(|s| s.back()) {
            leptos::logging::warn!("Back navigation rejected: {}", e);
        }
    };

    view! {
        <h3 id=heading_id class="booking-step-title">
            <T en="Select a Time" de="Uhrzeit auswählen"/>
        </h3>
        <p class="selected-date-display">{move || booking_view.date_label.get()}</p>
        <div class="time-slots-grid">
            {move || {
                booking_view
                    .slots
                    .get()
                    .into_iter()
                    .map(|slot| {
                        let label = slot.clone();
                        view! {
                            <button
                                type="button"
                                class="time-slot"
                                on:click=move |_| {
                                    if let Err(e) = session.with_value(|s| s.select_time(&slot)) {
                                        leptos::logging::warn!("Time selection rejected: {}", e);
                                    }
                                }
                            >
                                {label}
                            </button>
                        }
                    })
                    .collect_view()
            }}
        </div>
        <p class="timezone-note">
            <T en="All times are shown in Central European Time." de="Alle Zeiten in mitteleuropäischer Zeit."/>
        </p>
        <div class="booking-step-actions">
            <Button appearance=ButtonAppearance::Secondary on_click=back>
                <T en="Back" de="Zurück"/>
            </Button>
        </div>
    }
}
