use booking_core::site::Page;
use leptos::prelude::*;

use crate::components::{PageMeta, T};

#[component]
pub fn ResourcesPage() -> impl IntoView {
    view! {
        <PageMeta page=Page::Resources/>
        <div class="page page--resources">
            <h1><T en="Training Resources" de="Schulungsressourcen"/></h1>
            <ul class="resource-list">
                <li class="resource">
                    <h3><T en="Leadership Toolkit" de="Führungs-Toolkit"/></h3>
                    <p><T en="Checklists and templates for new managers." de="Checklisten und Vorlagen für neue Führungskräfte."/></p>
                </li>
                <li class="resource">
                    <h3><T en="Training ROI Guide" de="Leitfaden zum Schulungs-ROI"/></h3>
                    <p><T en="How to measure the return on your training budget." de="So messen Sie die Rendite Ihres Schulungsbudgets."/></p>
                </li>
                <li class="resource">
                    <h3><T en="Webinar Archive" de="Webinar-Archiv"/></h3>
                    <p><T en="Recordings of our monthly expert sessions." de="Aufzeichnungen unserer monatlichen Expertenrunden."/></p>
                </li>
            </ul>
        </div>
    }
}
