use booking_core::BOOKING_FORM_ID;
use leptos::prelude::*;
use thaw::*;

use super::SessionHandle;
use crate::components::error::InlineError;
use crate::components::localized::T;
use crate::host::BookingView;

#[component]
pub fn DetailsForm(
    session: SessionHandle,
    booking_view: BookingView,
    heading_id: String,
) -> impl IntoView {
    let fields = booking_view.fields;
    let pending = booking_view.pending;

    let back = move |_| {
        if let Err(e) = session.with_value(|s| s.back()) {
            leptos::logging::warn!("Back navigation rejected: {}", e);
        }
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        // validation errors are already shown inline by the widget
        if let Err(e) = session.with_value(|s| s.submit_form()) {
            leptos::logging::log!("Booking not submitted: {}", e);
        }
    };

    let summary = move || booking_view.summary.get();

    view! {
        <h3 id=heading_id class="booking-step-title">
            <T en="Your Details" de="Ihre Angaben"/>
        </h3>
        <div class="booking-summary">
            <p class="summary-date">{move || summary().map(|s| s.date)}</p>
            <p class="summary-time">{move || summary().map(|s| s.time)}</p>
        </div>
        <form id=BOOKING_FORM_ID class="booking-details-form" on:submit=on_submit>
            <div class="form-row">
                <div class="form-group">
                    <label for="first-name"><T en="First Name *" de="Vorname *"/></label>
                    <Input id="first-name" value=fields.first_name/>
                </div>
                <div class="form-group">
                    <label for="last-name"><T en="Last Name *" de="Nachname *"/></label>
                    <Input id="last-name" value=fields.last_name/>
                </div>
            </div>
            <div class="form-group">
                <label for="email"><T en="Email Address *" de="E-Mail-Adresse *"/></label>
                <Input id="email" input_type=InputType::Email value=fields.email/>
            </div>
            <div class="form-group">
                <label for="company"><T en="Company" de="Unternehmen"/></label>
                <Input id="company" value=fields.company/>
            </div>
            <div class="form-group">
                <label for="message"><T en="Message" de="Nachricht"/></label>
                <Textarea id="message" value=fields.message/>
            </div>

            <InlineError error=booking_view.error/>

            <div class="booking-step-actions">
                <Button
                    appearance=ButtonAppearance::Secondary
                    disabled=Signal::derive(move || pending.get())
                    on_click=back
                >
                    <T en="Back" de="Zurück"/>
                </Button>
                <Button
                    button_type=ButtonType::Submit
                    appearance=ButtonAppearance::Primary
                    disabled=Signal::derive(move || pending.get())
                    loading=pending
                >
                    {move || if pending.get() {
                        view! { <T en="Scheduling..." de="Wird geplant..."/> }.into_any()
                    } else {
                        view! { <T en="Schedule Consultation" de="Beratung Vereinbaren"/> }.into_any()
                    }}
                </Button>
            </div>
        </form>
    }
}
