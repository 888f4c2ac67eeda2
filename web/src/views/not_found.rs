use booking_core::site::Page;
use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::T;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="page page--not-found">
            <div class="not-found__code">"404"</div>
            <h1><T en="Page Not Found" de="Seite Nicht Gefunden"/></h1>
            <p>
                <T
                    en="The page you're looking for doesn't exist or may have been moved."
                    de="Die gesuchte Seite existiert nicht oder wurde verschoben."
                />
            </p>
            <A href=Page::Home.path() attr:class="btn-primary">
                <T en="Back to Home" de="Zurück zur Startseite"/>
            </A>
        </div>
    }
}
