//! Login page: staff id + password, signed in through the session guard.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::components::alert_banner::AlertBanner;
use crate::net::types::Credentials;
use crate::state::session::Session;
use crate::util::auth::install_authed_redirect;

pub const USERNAME_MAX_CHARS: usize = 12;
pub const PASSWORD_MIN_CHARS: usize = 4;
pub const PASSWORD_MAX_CHARS: usize = 12;

pub(crate) const LOGIN_FAILED: &str = "로그인에 실패했습니다.";
pub(crate) const MISSING_FIELDS: &str = "아이디와 비밀번호를 입력하세요.";
pub(crate) const USERNAME_TOO_LONG: &str = "아이디는 12자 이하여야 합니다.";
pub(crate) const PASSWORD_LENGTH: &str = "비밀번호는 4자 이상 12자 이하여야 합니다.";

pub(crate) fn check_username(username: &str) -> Result<(), &'static str> {
    if username.chars().count() > USERNAME_MAX_CHARS {
        return Err(USERNAME_TOO_LONG);
    }
    Ok(())
}

pub(crate) fn check_password(password: &str) -> Result<(), &'static str> {
    let len = password.chars().count();
    if !(PASSWORD_MIN_CHARS..=PASSWORD_MAX_CHARS).contains(&len) {
        return Err(PASSWORD_LENGTH);
    }
    Ok(())
}

pub(crate) fn validate_login_input(username: &str, password: &str) -> Result<Credentials, &'static str> {
    let username = username.trim();
    if username.is_empty() || password.is_empty() {
        return Err(MISSING_FIELDS);
    }
    check_username(username)?;
    check_password(password)?;
    Ok(Credentials::new(username, password))
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<Session>();
    let auth = *session.store();
    // Also covers a successful submit: the guard turns authenticated and this
    // effect leaves for `/`.
    install_authed_redirect(auth, use_navigate());

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() || !auth.get_untracked().is_ready() {
            return;
        }
        error.set(String::new());
        let credentials = match validate_login_input(&username.get_untracked(), &password.get_untracked()) {
            Ok(credentials) => credentials,
            Err(msg) => {
                error.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);

        let session = session.clone();
        leptos::task::spawn_local(async move {
            if let Err(e) = session.login(&credentials).await {
                error.set(e.user_message(LOGIN_FAILED));
                busy.set(false);
            }
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1 class="auth-card__brand">"로즈헤어"</h1>
                <p class="auth-card__subtitle">"로그인"</p>
                <form class="form" on:submit=on_submit>
                    <AlertBanner message=error/>
                    <label class="form__label" for="username">"아이디"</label>
                    <input
                        id="username"
                        class="form__input"
                        type="text"
                        required
                        maxlength="12"
                        placeholder="아이디를 입력하세요"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    <label class="form__label" for="password">"비밀번호"</label>
                    <input
                        id="password"
                        class="form__input"
                        type="password"
                        required
                        minlength="4"
                        maxlength="12"
                        placeholder="비밀번호를 입력하세요"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="button button--primary" type="submit" disabled=move || busy.get() || !auth.get().is_ready()>
                        {move || if busy.get() { "로그인 중..." } else { "로그인" }}
                    </button>
                </form>
                <p class="auth-card__footer">
                    "계정이 없으신가요? "
                    <A href="/register">"회원가입"</A>
                </p>
            </div>
        </div>
    }
}
