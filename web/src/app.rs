use booking_core::site::{Page, SITE_NAME};
use leptos::prelude::*;
use leptos_meta::{provide_meta_context, MetaTags, Stylesheet, Title};
use leptos_router::{
    components::{Route, Router, Routes},
    hooks::{use_location, use_navigate},
    path, StaticSegment,
};
use thaw::ssr::SSRMountStyleProvider;
use thaw::*;

use crate::components::Navbar;
use crate::i18n::I18n;
use crate::views::{
    contact::ContactPage, home::HomePage, method::MethodPage, not_found::NotFoundPage,
    resources::ResourcesPage, trainers::TrainersPage,
};

/// State shared by every page.
#[derive(Clone, Copy)]
pub struct AppContext {
    pub i18n: I18n,
    pub mobile_menu_open: RwSignal<bool>,
}

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <SSRMountStyleProvider>
            <!DOCTYPE html>
            <html lang="en">
                <head>
                    <meta charset="utf-8"/>
                    <meta name="viewport" content="width=device-width, initial-scale=1"/>
                    <AutoReload options=options.clone() />
                    <HydrationScripts options/>
                    <MetaTags/>
                </head>
                <body>
                    <App/>
                </body>
            </html>
        </SSRMountStyleProvider>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    let i18n = I18n::new();
    i18n.install();
    provide_context(AppContext {
        i18n,
        mobile_menu_open: RwSignal::new(false),
    });

    view! {
        // id=leptos means cargo-leptos will hot-reload this stylesheet
        <Stylesheet id="leptos" href="/pkg/protrainers-web.css"/>

        // pages override this with their own titles
        <Title text=SITE_NAME/>

        <ConfigProvider>
            <Router>
                <LegacyHashRedirect/>
                <Navbar/>
                <main>
                    <Routes fallback=|| view! { <NotFoundPage/> }>
                        <Route path=StaticSegment("") view=HomePage/>
                        <Route path=path!("/trainers") view=TrainersPage/>
                        <Route path=path!("/method") view=MethodPage/>
                        <Route path=path!("/resources") view=ResourcesPage/>
                        <Route path=path!("/contact") view=ContactPage/>
                    </Routes>
                </main>
            </Router>
        </ConfigProvider>
    }
}

/// Old links addressed pages as `/#contact`; send them to the routed page.
#[component]
fn LegacyHashRedirect() -> impl IntoView {
    let location = use_location();
    let (pathname, hash) = (location.pathname, location.hash);
    let navigate = use_navigate();

    Effect::new(move |_| {
        let hash = hash.get();
        if pathname.get() == "/" && hash.len() > 1 {
            navigate(Page::from_hash(&hash).path(), Default::default());
        }
    });
}
