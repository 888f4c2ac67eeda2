use booking_core::site::Page;
use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::{AnimatedCounter, PageMeta, T};

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <PageMeta page=Page::Home/>
        <div class="page page--home">
            <section class="hero">
                <h1 class="hero__title">
                    <T
                        en="Corporate Training That Sticks"
                        de="Unternehmensschulungen mit Nachhaltiger Wirkung"
                    />
                </h1>
                <p class="hero__subtitle">
                    <T
                        en="Expert trainers, a proven method and measurable results for your team."
                        de="Erfahrene Trainer, eine bewährte Methode und messbare Ergebnisse für Ihr Team."
                    />
                </p>
                <div class="hero__actions">
                    <A href=Page::Contact.path() attr:class="btn-primary">
                        <T en="Book a Free Consultation" de="Kostenlose Beratung Buchen"/>
                    </A>
                    <A href=Page::Method.path() attr:class="btn-secondary">
                        <T en="Our Method" de="Unsere Methode"/>
                    </A>
                </div>
            </section>

            <section id="outcomes" class="outcomes">
                <h2><T en="Proven Outcomes" de="Nachgewiesene Ergebnisse"/></h2>
                <div class="outcomes__grid">
                    <div class="outcome">
                        <AnimatedCounter target=94/>
                        <p><T en="Participant satisfaction" de="Teilnehmerzufriedenheit"/></p>
                    </div>
                    <div class="outcome">
                        <AnimatedCounter target=87/>
                        <p><T en="Knowledge retention after 90 days" de="Wissenserhalt nach 90 Tagen"/></p>
                    </div>
                    <div class="outcome">
                        <AnimatedCounter target=78/>
                        <p><T en="Measured productivity gains" de="Gemessene Produktivitätssteigerung"/></p>
                    </div>
                </div>
            </section>
        </div>
    }
}
