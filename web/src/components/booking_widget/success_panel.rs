use leptos::prelude::*;
use thaw::*;

use super::SessionHandle;
use crate::components::localized::{use_i18n, T};
use crate::host::BookingView;

#[component]
pub fn SuccessPanel(
    session: SessionHandle,
    booking_view: BookingView,
    heading_id: String,
) -> impl IntoView {
    let i18n = use_i18n();

    let lines = move || {
        booking_view.confirmation.get().map(|confirmation| {
            confirmation
                .lines
                .into_iter()
                .map(|line| {
                    view! {
                        <li class="confirmation-line">
                            <strong>{i18n.node(&line.label)}": "</strong>
                            <span>{line.value}</span>
                        </li>
                    }
                })
                .collect_view()
        })
    };

    view! {
        <div class="success-icon">"✓"</div>
        <h3 id=heading_id class="booking-step-title">
            <T en="Consultation Scheduled!" de="Beratung Vereinbart!"/>
        </h3>
        <p class="confirmation-text">
            <T
                en="We have sent a confirmation to your email address."
                de="Wir haben Ihnen eine Bestätigung per E-Mail gesendet."
            />
        </p>
        <ul class="confirmation-summary">{lines}</ul>
        <Button
            appearance=ButtonAppearance::Primary
            on_click=move |_| session.with_value(|s| s.reset())
        >
            <T en="Book Another Consultation" de="Weitere Beratung Buchen"/>
        </Button>
    }
}
