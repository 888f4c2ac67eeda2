use booking_core::site::Page;
use leptos::prelude::*;

use crate::components::{PageMeta, T};

struct Trainer {
    name: &'static str,
    focus_en: &'static str,
    focus_de: &'static str,
}

static TRAINERS: [Trainer; 3] = [
    Trainer {
        name: "Dr. Katrin Weber",
        focus_en: "Leadership and change management",
        focus_de: "Führung und Veränderungsmanagement",
    },
    Trainer {
        name: "Michael Hoffmann",
        focus_en: "Sales and negotiation",
        focus_de: "Vertrieb und Verhandlung",
    },
    Trainer {
        name: "Sarah Klein",
        focus_en: "Communication and presentation skills",
        focus_de: "Kommunikation und Präsentationstechniken",
    },
];

#[component]
pub fn TrainersPage() -> impl IntoView {
    let cards = TRAINERS
        .iter()
        .map(|trainer| {
            view! {
                <article class="trainer-card">
                    <h3>{trainer.name}</h3>
                    <p><T en=trainer.focus_en de=trainer.focus_de/></p>
                </article>
            }
        })
        .collect_view();

    view! {
        <PageMeta page=Page::Trainers/>
        <div class="page page--trainers">
            <h1><T en="Our Expert Trainers" de="Unsere Experten-Trainer"/></h1>
            <p class="page__lead">
                <T
                    en="Certified professionals with years of industry experience."
                    de="Zertifizierte Fachleute mit langjähriger Branchenerfahrung."
                />
            </p>
            <div class="trainer-grid">{cards}</div>
        </div>
    }
}
