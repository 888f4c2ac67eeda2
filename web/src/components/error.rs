use booking_core::{Localized, TextNode};
use leptos::prelude::*;
use thaw::{MessageBar, MessageBarIntent};

use super::localized::use_i18n;

#[component]
pub fn ErrorView(#[prop(optional)] message: Option<Localized>) -> impl IntoView {
    let i18n = use_i18n();
    let message = message.unwrap_or_else(|| {
        Localized::new(
            "An error occurred. Please try again.",
            "Ein Fehler ist aufgetreten. Bitte versuchen Sie es erneut.",
        )
    });

    view! {
        <MessageBar intent=MessageBarIntent::Error>
            {move || i18n.text(&message)}
        </MessageBar>
    }
}

/// Renders an optional inline error pushed by a widget, in the active language.
#[component]
pub fn InlineError(error: RwSignal<Option<TextNode>>) -> impl IntoView {
    let i18n = use_i18n();

    move || {
        error.get().map(|node| {
            view! {
                <div class="form-error" role="alert">
                    <MessageBar intent=MessageBarIntent::Error>
                        {i18n.node(&node)}
                    </MessageBar>
                </div>
            }
        })
    }
}
