//! Card showing a sensitive value with a copy-to-clipboard button.

use leptos::prelude::*;

use crate::util::clipboard;

/// Titled card with a word-wrapped value and a copy button. The button label
/// switches to "Copied" after a successful click.
#[component]
pub fn CopyCard(title: &'static str, value: String, button_label: &'static str) -> impl IntoView {
    let copied = RwSignal::new(false);
    let shown = value.clone();

    let on_copy = move |_| {
        clipboard::copy_text(&value);
        copied.set(true);
    };

    view! {
        <div class="copy-card">
            <h3 class="copy-card__title">{title}</h3>
            <p class="copy-card__value">{shown}</p>
            <button class="btn btn--small" on:click=on_copy>
                {move || if copied.get() { "Copied" } else { button_label }}
            </button>
        </div>
    }
}
