use booking_core::site::Page;
use leptos::prelude::*;
use leptos_meta::{Meta, Title};

use super::localized::use_i18n;

/// Document title and description for a page, plus a page-view log entry.
#[component]
pub fn PageMeta(page: Page) -> impl IntoView {
    let i18n = use_i18n();

    Effect::new(move |_| {
        leptos::logging::log!("page view: {}", page.id());
    });

    view! {
        <Title text=page.title()/>
        <Meta
            name="description"
            content=move || page.meta_description(i18n.current())
        />
    }
}
