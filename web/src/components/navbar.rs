use booking_core::site::{mobile_menu_open_after_resize, Page, SITE_NAME};
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

use crate::app::AppContext;

#[component]
pub fn Navbar() -> impl IntoView {
    let AppContext {
        i18n,
        mobile_menu_open,
    } = expect_context::<AppContext>();
    let pathname = use_location().pathname;

    let active_page = move || Page::from_path(&pathname.get());

    // any navigation closes the mobile menu
    Effect::new(move |_| {
        pathname.track();
        mobile_menu_open.set(false);
    });

    Effect::new(move |_| {
        let handle = window_event_listener(leptos::ev::resize, move |_| {
            let width = window()
                .inner_width()
                .ok()
                .and_then(|w| w.as_f64())
                .unwrap_or_default();
            let open = mobile_menu_open.get_untracked();
            if open != mobile_menu_open_after_resize(open, width) {
                mobile_menu_open.set(false);
            }
        });
        on_cleanup(move || handle.remove());
    });

    let links = move |extra_class: &'static str| {
        Page::ALL
            .into_iter()
            .map(|page| {
                let label = page.nav_label();
                let class = move || {
                    if active_page() == Some(page) {
                        format!("navbar__link navbar__link--active {}", extra_class)
                    } else {
                        format!("navbar__link {}", extra_class)
                    }
                };
                view! {
                    <A href=page.path() attr:class=class>
                        {move || i18n.text(&label)}
                    </A>
                }
            })
            .collect_view()
    };

    let language_toggle = move |extra_class: &'static str| {
        view! {
            <button
                type="button"
                class=format!("language-toggle {}", extra_class)
                aria-label="Toggle language"
                on:click=move |_| i18n.toggle()
            >
                {move || i18n.current().toggle_label()}
            </button>
        }
    };

    view! {
        <nav class="navbar">
            <div class="navbar__container">
                <div class="navbar__brand">
                    <A href="/" attr:class="navbar__logo">
                        {SITE_NAME}
                    </A>
                </div>

                <div class="navbar__links">
                    {links("")}
                    {language_toggle("")}
                </div>

                <button
                    type="button"
                    class="navbar__menu-toggle"
                    aria-label="Toggle menu"
                    aria-expanded=move || mobile_menu_open.get().to_string()
                    on:click=move |_| mobile_menu_open.update(|open| *open = !*open)
                >
                    "☰"
                </button>
            </div>

            <div class="navbar__mobile" class:hidden=move || !mobile_menu_open.get()>
                {links("navbar__link--mobile")}
                {language_toggle("language-toggle--mobile")}
            </div>
        </nav>
    }
}
