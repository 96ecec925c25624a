//! Registration page.
//!
//! Field rules mirror the backend's request binding (username required,
//! email shaped, password of at least eight characters) so obvious mistakes
//! never cost a round trip.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use session::RegisterRequest;

use crate::state::auth::AuthContext;
use crate::util::auth::install_authed_redirect;

pub(crate) const MIN_PASSWORD_LEN: usize = 8;

/// Raw form values as typed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct RegisterForm {
    pub username: String,
    pub email: String,
    pub password: String,
    pub company_name: String,
    pub phone_number: String,
}

fn optional_field(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}

/// Validate the form and build the wire request.
pub(crate) fn validate_register_input(form: &RegisterForm) -> Result<RegisterRequest, &'static str> {
    let username = form.username.trim();
    if username.is_empty() {
        return Err("Enter a username.");
    }
    let email = form.email.trim();
    if email.is_empty() || !email.contains('@') {
        return Err("Enter a valid email address.");
    }
    if form.password.chars().count() < MIN_PASSWORD_LEN {
        return Err("Password must be at least 8 characters.");
    }
    Ok(RegisterRequest {
        username: username.to_owned(),
        email: email.to_owned(),
        password: form.password.clone(),
        company_name: optional_field(&form.company_name),
        phone_number: optional_field(&form.phone_number),
    })
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let auth = AuthContext::expect();
    let navigate = use_navigate();
    install_authed_redirect(auth.state, navigate.clone());

    let form = RwSignal::new(RegisterForm::default());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let request = match form.with(validate_register_input) {
            Ok(request) => request,
            Err(msg) => {
                error.set(Some(msg.to_owned()));
                return;
            }
        };
        busy.set(true);
        error.set(None);

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match auth.register(request).await {
                    Ok(route) => navigate(route.path(), Default::default()),
                    Err(e) => {
                        log::warn!("registration failed: {e}");
                        error.set(Some(e.message));
                    }
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = request;
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Create Account"</h1>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="auth-input"
                        type="text"
                        placeholder="Username"
                        prop:value=move || form.with(|f| f.username.clone())
                        on:input=move |ev| form.update(|f| f.username = event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || form.with(|f| f.email.clone())
                        on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="password"
                        placeholder="Password (8+ characters)"
                        autocomplete="new-password"
                        prop:value=move || form.with(|f| f.password.clone())
                        on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="text"
                        placeholder="Company name (optional)"
                        prop:value=move || form.with(|f| f.company_name.clone())
                        on:input=move |ev| form.update(|f| f.company_name = event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="tel"
                        placeholder="Phone number (optional)"
                        prop:value=move || form.with(|f| f.phone_number.clone())
                        on:input=move |ev| form.update(|f| f.phone_number = event_target_value(&ev))
                    />
                    <button class="auth-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Creating account..." } else { "Register" }}
                    </button>
                </form>
                <Show when=move || error.get().is_some()>
                    <p class="auth-message auth-message--error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <p class="auth-card__switch">
                    "Already registered? "
                    <a href="/login">"Sign in"</a>
                </p>
            </div>
        </div>
    }
}
