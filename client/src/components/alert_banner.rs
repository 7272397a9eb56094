//! Inline success/error banner shown above forms and tables.

use leptos::prelude::*;

/// Banner that is hidden while `message` is empty.
#[component]
pub fn AlertBanner(#[prop(into)] message: Signal<String>, #[prop(optional)] success: bool) -> impl IntoView {
    view! {
        <Show when=move || !message.get().is_empty()>
            <div class="alert" class:alert--success=success class:alert--error=!success role="alert">
                {move || message.get()}
            </div>
        </Show>
    }
}
