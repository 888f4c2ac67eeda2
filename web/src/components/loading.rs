use booking_core::Localized;
use leptos::prelude::*;
use thaw::{Spinner, SpinnerSize};

use super::localized::use_i18n;

#[component]
pub fn LoadingView(#[prop(optional)] message: Option<Localized>) -> impl IntoView {
    let i18n = use_i18n();
    let message = message.unwrap_or_else(|| Localized::new("Loading, please wait...", "Wird geladen, bitte warten..."));

    view! {
        <div class="loading-container">
            <Spinner size=SpinnerSize::Large />
            <p class="loading-message">{move || i18n.text(&message)}</p>
        </div>
    }
}
