//! Registration page. A successful sign-up logs the new account in.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::config::ApiConfig;
use crate::net::api::ApiClient;
use crate::net::types::RegisterRequest;
use crate::state::auth::Session;
use crate::util::auth::{GALLERY_PATH, LOGIN_PATH};

pub(crate) const REGISTER_FAILED: &str = "Registration failed";
pub const MIN_PASSWORD_LEN: usize = 6;

/// Raw form values as typed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegisterForm {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm: String,
}

/// Check the form before any request is made.
pub fn validate_register_input(form: &RegisterForm) -> Result<RegisterRequest, &'static str> {
    let username = form.username.trim();
    let email = form.email.trim();
    if username.is_empty() || email.is_empty() || form.password.is_empty() {
        return Err("All fields are required.");
    }
    if form.password != form.confirm {
        return Err("Passwords do not match.");
    }
    if form.password.chars().count() < MIN_PASSWORD_LEN {
        return Err("Password must be at least 6 characters.");
    }
    Ok(RegisterRequest {
        username: username.to_owned(),
        email: email.to_owned(),
        password: form.password.clone(),
    })
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let form = RwSignal::new(RegisterForm::default());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let config = StoredValue::new(use_context::<ApiConfig>().unwrap_or_default());

    let navigate = use_navigate();
    Effect::new(move || {
        if session.with(Session::is_authenticated) {
            navigate(GALLERY_PATH, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let account = match form.with(validate_register_input) {
            Ok(account) => account,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Creating account...".to_owned());

        let client = config.with_value(|c| ApiClient::new(c, None));
        leptos::task::spawn_local(async move {
            match crate::net::auth::register(&client, &account).await {
                Ok(auth) => {
                    let _ = info.try_set(String::new());
                    let _ = session.try_update(|s| s.login(auth.user, auth.token));
                }
                Err(e) => {
                    leptos::logging::warn!("registration failed: {e}");
                    let _ = info.try_set(e.user_message(REGISTER_FAILED));
                }
            }
            let _ = busy.try_set(false);
        });
    };

    let field = move |kind: &'static str,
                      placeholder: &'static str,
                      read: fn(&RegisterForm) -> String,
                      write: fn(&mut RegisterForm, String)| {
        view! {
            <input
                class="login-input"
                type=kind
                placeholder=placeholder
                prop:value=move || form.with(read)
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    form.update(|f| write(f, value));
                }
            />
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Register"</h1>
                <form class="login-form" on:submit=on_submit>
                    {field("text", "Username", |f| f.username.clone(), |f, v| f.username = v)}
                    {field("email", "Email", |f| f.email.clone(), |f, v| f.email = v)}
                    {field("password", "Password", |f| f.password.clone(), |f, v| f.password = v)}
                    {field("password", "Confirm password", |f| f.confirm.clone(), |f, v| f.confirm = v)}
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Register"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
                <div class="login-divider"></div>
                <p class="login-card__subtitle">
                    "Already registered? "
                    <A href=LOGIN_PATH>"Login"</A>
                </p>
            </div>
        </div>
    }
}
