//! Dashboard page: account overview for the signed-in user.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated landing route. It renders whatever the session
//! provider holds, offers clipboard copy of the app id and access token, and
//! hosts the profile edit form. Anonymous visitors are sent to `/login` once
//! restore has settled.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use session::User;

use crate::components::copy_card::CopyCard;
use crate::components::profile_form::ProfileForm;
use crate::state::auth::AuthContext;
use crate::util::auth::install_unauth_redirect;

pub(crate) fn welcome_heading(user: &User) -> String {
    format!("Welcome, {}!", user.username)
}

/// Label/value pairs for the account information panel. Optional profile
/// fields only appear when set.
pub(crate) fn account_rows(user: &User) -> Vec<(&'static str, String)> {
    let mut rows = vec![("Email", user.email.clone())];
    if let Some(company) = &user.company_name {
        rows.push(("Company Name", company.clone()));
    }
    if let Some(phone) = &user.phone_number {
        rows.push(("Phone Number", phone.clone()));
    }
    rows.push(("Account Created", user.created_on().to_owned()));
    rows
}

/// Placeholder text while there is no user to show.
pub(crate) fn placeholder_text(loading: bool) -> &'static str {
    if loading { "Loading..." } else { "Redirecting to login..." }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = AuthContext::expect();
    install_unauth_redirect(auth.state, use_navigate());

    let editing = RwSignal::new(false);

    // Logout flips the session to anonymous; the redirect effect above then
    // navigates to `/login`.
    let on_logout = move |_: leptos::ev::MouseEvent| {
        auth.logout();
    };

    view! {
        <Show
            when=move || auth.user().is_some()
            fallback=move || {
                view! {
                    <div class="dashboard-page">
                        <p>{move || placeholder_text(auth.loading())}</p>
                    </div>
                }
            }
        >
            {move || auth.user().map(|user| account_view(user, editing, on_logout))}
        </Show>
    }
}

fn account_view(
    user: User,
    editing: RwSignal<bool>,
    on_logout: impl Fn(leptos::ev::MouseEvent) + 'static,
) -> impl IntoView {
    let heading = welcome_heading(&user);
    let rows = account_rows(&user)
        .into_iter()
        .map(|(label, value)| {
            view! {
                <div class="dashboard-page__row">
                    <dt>{label}</dt>
                    <dd>{value}</dd>
                </div>
            }
        })
        .collect::<Vec<_>>();
    let app_id = user.app_id.clone();
    let token = user.token.clone();

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header">
                <h1>{heading}</h1>
                <button class="btn btn--danger" on:click=on_logout>
                    "Logout"
                </button>
            </header>

            <div class="dashboard-page__cards">
                <CopyCard title="Your App ID" value=app_id button_label="Copy App ID"/>
                <CopyCard title="Your Token" value=token button_label="Copy Token"/>
            </div>

            <section class="dashboard-page__account">
                <div class="dashboard-page__account-header">
                    <h2>"Account Information"</h2>
                    <button class="btn" on:click=move |_| editing.update(|e| *e = !*e)>
                        {move || if editing.get() { "Close" } else { "Edit Profile" }}
                    </button>
                </div>
                <dl class="dashboard-page__rows">{rows}</dl>
                <Show when=move || editing.get()>
                    <ProfileForm user=user.clone() on_saved=Callback::new(move |()| editing.set(false))/>
                </Show>
            </section>
        </div>
    }
}
