use booking_core::site::Page;
use leptos::prelude::*;

use crate::components::{PageMeta, T};

#[component]
pub fn MethodPage() -> impl IntoView {
    view! {
        <PageMeta page=Page::Method/>
        <div class="page page--method">
            <h1><T en="The ProTrainers Method" de="Die ProTrainers Methode"/></h1>
            <ol class="method-steps">
                <li>
                    <h3><T en="Analyse" de="Analyse"/></h3>
                    <p>
                        <T
                            en="We assess your team's skills and goals before designing anything."
                            de="Wir analysieren die Kompetenzen und Ziele Ihres Teams, bevor wir etwas entwickeln."
                        />
                    </p>
                </li>
                <li>
                    <h3><T en="Design" de="Konzeption"/></h3>
                    <p>
                        <T
                            en="Programs are tailored to your industry and learning culture."
                            de="Programme werden auf Ihre Branche und Lernkultur zugeschnitten."
                        />
                    </p>
                </li>
                <li>
                    <h3><T en="Deliver" de="Durchführung"/></h3>
                    <p>
                        <T
                            en="Interactive sessions, on site or online."
                            de="Interaktive Trainings, vor Ort oder online."
                        />
                    </p>
                </li>
                <li>
                    <h3><T en="Measure" de="Messung"/></h3>
                    <p>
                        <T
                            en="Follow-up reviews track retention and results."
                            de="Nachbetrachtungen messen Wissenserhalt und Ergebnisse."
                        />
                    </p>
                </li>
            </ol>
        </div>
    }
}
