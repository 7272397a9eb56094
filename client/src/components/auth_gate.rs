//! Route wrapper that keeps protected content behind the session guard.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every signed-in-only page wraps its body in [`ProtectedPage`]. While the
//! startup check runs the wrapper shows a neutral placeholder; once settled it
//! either renders the body or renders nothing and redirects to `/login`.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::session::Session;
use crate::util::auth::{GateView, install_unauth_redirect, protected_view};

/// Render `children` only for a signed-in user.
#[component]
pub fn ProtectedPage(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<Session>();
    let auth = *session.store();
    install_unauth_redirect(auth, use_navigate());

    let gate = Memo::new(move |_| protected_view(&auth.get()));

    move || match gate.get() {
        GateView::Loading => view! { <div class="page-loading">"로딩 중..."</div> }.into_any(),
        GateView::Hidden => ().into_any(),
        GateView::Content => children().into_any(),
    }
}
