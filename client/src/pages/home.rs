//! Landing page: shortcuts to the three salon workflows.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::auth_gate::ProtectedPage;
use crate::state::session::Session;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <ProtectedPage>
            <HomeContent/>
        </ProtectedPage>
    }
}

#[component]
fn HomeContent() -> impl IntoView {
    let session = expect_context::<Session>();
    let busy = RwSignal::new(false);

    let auth = *session.store();
    let greeting = move || {
        auth.get()
            .user()
            .map(|user| format!("{}님, 환영합니다.", user.display_name))
            .unwrap_or_default()
    };

    // The protected gate redirects to `/login` once the guard is signed out.
    let on_logout = move |_| {
        if busy.get_untracked() {
            return;
        }
        busy.set(true);
        let session = session.clone();
        leptos::task::spawn_local(async move {
            session.logout().await;
        });
    };

    view! {
        <div class="page">
            <header class="page__header">
                <h1 class="page__title">"로즈헤어 회원관리"</h1>
                <div class="page__actions">
                    <span class="page__greeting">{greeting}</span>
                    <button class="button" on:click=on_logout disabled=move || busy.get()>
                        "로그아웃"
                    </button>
                </div>
            </header>
            <nav class="menu-grid">
                <A href="/members/add" attr:class="menu-card">
                    <span class="menu-card__title">"회원 등록"</span>
                    <span class="menu-card__text">"새 고객을 등록합니다."</span>
                </A>
                <A href="/members/search" attr:class="menu-card">
                    <span class="menu-card__title">"회원 검색"</span>
                    <span class="menu-card__text">"고객을 찾고 방문 기록을 관리합니다."</span>
                </A>
                <A href="/sales" attr:class="menu-card">
                    <span class="menu-card__title">"매출 조회"</span>
                    <span class="menu-card__text">"날짜별 매출을 확인합니다."</span>
                </A>
            </nav>
        </div>
    }
}
