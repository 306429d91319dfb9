//! Site chrome: header navigation and the page layout wrapper.
//!
//! Links depend on the session: visitors see login/register, signed-in users
//! see the gallery, admins additionally see the dashboard.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::state::auth::Session;
use crate::util::auth::{ADMIN_PATH, GALLERY_PATH, LOGIN_PATH, REGISTER_PATH};

#[component]
pub fn Header() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();

    // The router's navigate closure is not `Send`; keep it in local storage so
    // the `Show` children below stay `Send + Sync`.
    let navigate = StoredValue::new_local(use_navigate());
    let on_logout = move |_| {
        session.update(Session::logout);
        navigate.with_value(|nav| nav(LOGIN_PATH, NavigateOptions::default()));
    };

    let username = move || session.with(|s| s.user().map(|u| u.username.clone()).unwrap_or_default());

    view! {
        <header class="site-header">
            <div class="site-header__inner">
                <A href="/" attr:class="site-header__brand">
                    "Image "
                    <span class="site-header__brand-accent">"Factory"</span>
                </A>
                <nav class="site-header__nav">
                    <Show
                        when=move || session.with(Session::is_authenticated)
                        fallback=|| {
                            view! {
                                <A href=LOGIN_PATH attr:class="site-header__link">"Log in"</A>
                                <A href=REGISTER_PATH attr:class="site-header__link">"Register"</A>
                            }
                        }
                    >
                        <A href=GALLERY_PATH attr:class="site-header__link">"Gallery"</A>
                        <Show when=move || session.with(Session::is_admin)>
                            <A href=ADMIN_PATH attr:class="site-header__link">"Admin"</A>
                        </Show>
                        <span class="site-header__user">{username}</span>
                        <button class="btn site-header__logout" type="button" on:click=on_logout>
                            "Log out"
                        </button>
                    </Show>
                </nav>
            </div>
        </header>
    }
}

/// Header plus a content area for the routed page.
#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <Header/>
        <main class="site-main">{children()}</main>
    }
}
