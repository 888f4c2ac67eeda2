use leptos::prelude::*;

use crate::i18n::I18n;

pub fn use_i18n() -> I18n {
    expect_context::<crate::app::AppContext>().i18n
}

/// Text with an English and a German rendering, switched with the site language.
#[component]
pub fn T(en: &'static str, de: &'static str) -> impl IntoView {
    let i18n = use_i18n();
    move || match i18n.current() {
        booking_core::Language::En => en,
        booking_core::Language::De => de,
    }
}
