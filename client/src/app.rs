//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::components::header::Layout;
use crate::config::{API_BASE_URL_META, ApiConfig};
use crate::pages::{admin::AdminDashboardPage, gallery::GalleryPage, login::LoginPage, register::RegisterPage};
use crate::state::auth::Session;
use crate::state::mutations::MutationQueue;
use crate::util::auth::{GALLERY_PATH, Protected};
use crate::util::session_storage;

/// HTML shell rendered on the server for SSR + hydration.
///
/// The API base URL is embedded as a `<meta>` tag for the hydrated client.
pub fn shell(options: LeptosOptions, config: ApiConfig) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name=API_BASE_URL_META content=config.base_url().to_owned()/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session and mutation queue contexts, restores a previous
/// login from tab storage, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    if use_context::<ApiConfig>().is_none() {
        provide_context(ApiConfig::default());
    }

    let session = RwSignal::new(Session::default());
    provide_context(session);
    provide_context(MutationQueue::default());

    // Effects only run in the browser, so SSR renders the restoring state.
    Effect::new(move || {
        session.set(Session::restored(session_storage::load()));
    });
    Effect::new(move || {
        session.with(|s| {
            if !s.restoring {
                session_storage::store(s.current());
            }
        });
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/image-factory.css"/>
        <Title text="Image Factory"/>

        <Router>
            <Layout>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("register") view=RegisterPage/>
                    <Route
                        path=StaticSegment("gallery")
                        view=|| view! { <Protected><GalleryPage/></Protected> }
                    />
                    <Route
                        path=StaticSegment("admin")
                        view=|| view! { <Protected require_admin=true><AdminDashboardPage/></Protected> }
                    />
                    <Route path=StaticSegment("") view=|| view! { <Redirect path=GALLERY_PATH/> }/>
                </Routes>
            </Layout>
        </Router>
    }
}
