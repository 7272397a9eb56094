//! Root application component with routing and the session context.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::net::api::HttpApi;
use crate::pages::{
    home::HomePage, login::LoginPage, member_add::MemberAddPage, member_search::MemberSearchPage,
    register::RegisterPage, sales::SalesPage,
};
use crate::state::auth::AuthState;
use crate::state::session::{Session, SessionGuard};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="ko">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
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
/// Owns the one [`Session`] for the page lifetime and starts its first
/// profile check in the browser.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    let session: Session = SessionGuard::new(HttpApi::from_build_env(), auth);
    provide_context(session.clone());

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        session.initialize().await;
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = session;

    view! {
        <Stylesheet id="leptos" href="/pkg/rosehair.css"/>
        <Title text="로즈헤어 미용실 회원관리"/>

        <Router>
            <Routes fallback=|| "페이지를 찾을 수 없습니다.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>
                <Route path=(StaticSegment("members"), StaticSegment("add")) view=MemberAddPage/>
                <Route path=(StaticSegment("members"), StaticSegment("search")) view=MemberSearchPage/>
                <Route path=StaticSegment("sales") view=SalesPage/>
            </Routes>
        </Router>
    }
}
