//! Inline profile editor for the signed-in user.
//!
//! The backend ignores blank fields on update, so the form only sends values
//! that are non-blank and differ from the current profile. Clearing an
//! optional field is therefore not expressible here.

#[cfg(test)]
#[path = "profile_form_test.rs"]
mod profile_form_test;

use leptos::prelude::*;
use session::{UpdateProfileRequest, User};

use crate::state::auth::AuthContext;

/// Editable copy of the profile fields.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct ProfileDraft {
    pub username: String,
    pub email: String,
    pub company_name: String,
    pub phone_number: String,
}

impl ProfileDraft {
    pub(crate) fn from_user(user: &User) -> Self {
        Self {
            username: user.username.clone(),
            email: user.email.clone(),
            company_name: user.company_name.clone().unwrap_or_default(),
            phone_number: user.phone_number.clone().unwrap_or_default(),
        }
    }
}

fn changed(draft: &str, current: Option<&str>) -> Option<String> {
    let draft = draft.trim();
    (!draft.is_empty() && Some(draft) != current).then(|| draft.to_owned())
}

/// Diff the draft against the current profile.
pub(crate) fn build_profile_update(draft: &ProfileDraft, current: &User) -> UpdateProfileRequest {
    UpdateProfileRequest {
        username: changed(&draft.username, Some(&current.username)),
        email: changed(&draft.email, Some(&current.email)),
        company_name: changed(&draft.company_name, current.company_name.as_deref()),
        phone_number: changed(&draft.phone_number, current.phone_number.as_deref()),
    }
}

#[component]
pub fn ProfileForm(user: User, on_saved: Callback<()>) -> impl IntoView {
    let auth = AuthContext::expect();
    let draft = RwSignal::new(ProfileDraft::from_user(&user));
    let message = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let request = draft.with(|d| build_profile_update(d, &user));
        if request.is_empty() {
            message.set(Some("Nothing to update.".to_owned()));
            return;
        }
        busy.set(true);
        message.set(None);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match auth.update_profile(request).await {
                Ok(_) => on_saved.run(()),
                Err(e) => {
                    log::warn!("profile update failed: {e}");
                    message.set(Some(e.message));
                }
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (auth, request, on_saved);
    };

    view! {
        <form class="profile-form" on:submit=on_submit>
            <label class="profile-form__label">
                "Username"
                <input
                    class="profile-form__input"
                    type="text"
                    prop:value=move || draft.with(|d| d.username.clone())
                    on:input=move |ev| draft.update(|d| d.username = event_target_value(&ev))
                />
            </label>
            <label class="profile-form__label">
                "Email"
                <input
                    class="profile-form__input"
                    type="email"
                    prop:value=move || draft.with(|d| d.email.clone())
                    on:input=move |ev| draft.update(|d| d.email = event_target_value(&ev))
                />
            </label>
            <label class="profile-form__label">
                "Company Name"
                <input
                    class="profile-form__input"
                    type="text"
                    prop:value=move || draft.with(|d| d.company_name.clone())
                    on:input=move |ev| draft.update(|d| d.company_name = event_target_value(&ev))
                />
            </label>
            <label class="profile-form__label">
                "Phone Number"
                <input
                    class="profile-form__input"
                    type="tel"
                    prop:value=move || draft.with(|d| d.phone_number.clone())
                    on:input=move |ev| draft.update(|d| d.phone_number = event_target_value(&ev))
                />
            </label>
            <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                {move || if busy.get() { "Saving..." } else { "Save" }}
            </button>
            <Show when=move || message.get().is_some()>
                <p class="profile-form__message">{move || message.get().unwrap_or_default()}</p>
            </Show>
        </form>
    }
}
