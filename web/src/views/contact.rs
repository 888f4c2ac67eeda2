use booking_core::site::Page;
use booking_core::Localized;
use leptos::prelude::*;
use thaw::*;

use crate::components::{
    BookingMethodsModal, BookingWidget, ContactFormView, ErrorView, LoadingView, PageMeta, T,
};
use crate::server::get_site_config;

#[component]
pub fn ContactPage() -> impl IntoView {
    let site_config = Resource::new(|| (), |_| get_site_config());
    let show_methods = RwSignal::new(false);

    view! {
        <PageMeta page=Page::Contact/>
        <div class="page page--contact">
            <h1><T en="Book Your Free Consultation" de="Buchen Sie Ihre Kostenlose Beratung"/></h1>

            <Suspense fallback=move || view! {
                <LoadingView message=Localized::new("Loading calendar...", "Kalender wird geladen...")/>
            }>
                {move || {
                    site_config.get().map(|result| match result {
                        Ok(config) => view! {
                            <div class="contact-layout">
                                <section class="contact-layout__booking">
                                    <BookingWidget config=config.booking today=config.today/>
                                    <Button
                                        appearance=ButtonAppearance::Secondary
                                        on_click=move |_| show_methods.set(true)
                                    >
                                        <T en="Other Ways to Book" de="Weitere Buchungsmöglichkeiten"/>
                                    </Button>
                                </section>
                                <section class="contact-layout__message">
                                    <h2><T en="Send Us a Message" de="Schreiben Sie Uns"/></h2>
                                    <ContactFormView config=config.contact/>
                                </section>
                            </div>
                        }.into_any(),
                        Err(e) => {
                            leptos::logging::error!("Failed to load site config: {}", e);
                            view! {
                                <ErrorView message=Localized::new(
                                    "Online booking is unavailable right now.",
                                    "Die Online-Buchung ist derzeit nicht verfügbar.",
                                )/>
                            }.into_any()
                        }
                    })
                }}
            </Suspense>

            <BookingMethodsModal show=show_methods/>
        </div>
    }
}
