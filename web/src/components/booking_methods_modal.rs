use booking_core::site::BookingMethod;
use leptos::prelude::*;
use thaw::*;

use super::localized::{use_i18n, T};

/// Alternatives to the booking widget: Calendly, an email request or a call.
#[component]
pub fn BookingMethodsModal(show: RwSignal<bool>) -> impl IntoView {
    let i18n = use_i18n();
    let close = move || show.set(false);

    let methods = BookingMethod::ALL
        .into_iter()
        .map(|method| {
            let label = method.label();
            let target = method.opens_new_tab().then_some("_blank");
            let rel = method.opens_new_tab().then_some("noopener noreferrer");
            let class = if method == BookingMethod::Calendly {
                "booking-method btn-primary"
            } else {
                "booking-method btn-secondary"
            };
            view! {
                <a
                    class=class
                    href=method.href()
                    target=target
                    rel=rel
                    on:click=move |_| {
                        leptos::logging::log!("booking method chosen: {:?}", method);
                        close();
                    }
                >
                    {move || i18n.text(&label)}
                </a>
            }
        })
        .collect_view();

    view! {
        <div
            class=move || if show.get() { "booking-modal-overlay show" } else { "booking-modal-overlay" }
            on:click=move |_| close()
        >
            <div class="booking-modal" on:click=|ev| ev.stop_propagation()>
                <div class="modal-header">
                    <h2><T en="Schedule Your Consultation" de="Beratungstermin Vereinbaren"/></h2>
                    <Button
                        appearance=ButtonAppearance::Subtle
                        on_click=move |_| close()
                        class="close-button"
                    >
                        "×"
                    </Button>
                </div>
                <p class="modal-subtitle">
                    <T en="Choose your preferred booking method:" de="Wählen Sie Ihre bevorzugte Buchungsmethode:"/>
                </p>
                <div class="booking-methods">{methods}</div>
                <Button appearance=ButtonAppearance::Transparent on_click=move |_| close()>
                    <T en="Close" de="Schließen"/>
                </Button>
            </div>
        </div>
    }
}
