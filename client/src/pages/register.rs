//! Staff registration page.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use std::time::Duration;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::components::alert_banner::AlertBanner;
use crate::net::api::SalonApi;
use crate::net::types::Registration;
use crate::pages::login::{check_password, check_username};
use crate::state::session::Session;
use crate::util::auth::{LOGIN_PATH, install_authed_redirect};
use crate::util::browser::pause;

const REGISTER_FAILED: &str = "회원가입에 실패했습니다.";
const REGISTERED: &str = "회원가입이 완료되었습니다. 로그인 페이지로 이동합니다.";
pub(crate) const MISSING_FIELDS: &str = "모든 항목을 입력하세요.";
pub(crate) const PASSWORD_MISMATCH: &str = "비밀번호가 일치하지 않습니다.";

const REDIRECT_DELAY: Duration = Duration::from_secs(2);

/// Check the form in display order: required fields, confirmation, password
/// length, then id length. Name and id are trimmed; the password is taken as
/// typed.
pub(crate) fn validate_registration(
    name: &str,
    username: &str,
    password: &str,
    confirm: &str,
) -> Result<Registration, &'static str> {
    let (name, username) = (name.trim(), username.trim());
    if name.is_empty() || username.is_empty() || password.is_empty() {
        return Err(MISSING_FIELDS);
    }
    if password != confirm {
        return Err(PASSWORD_MISMATCH);
    }
    check_password(password)?;
    check_username(username)?;
    Ok(Registration {
        name: name.to_owned(),
        username: username.to_owned(),
        password: password.to_owned(),
    })
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let session = expect_context::<Session>();
    let navigate = use_navigate();
    install_authed_redirect(*session.store(), navigate.clone());

    let name = RwSignal::new(String::new());
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let notice = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        error.set(String::new());
        notice.set(String::new());
        let registration = match validate_registration(
            &name.get_untracked(),
            &username.get_untracked(),
            &password.get_untracked(),
            &confirm.get_untracked(),
        ) {
            Ok(registration) => registration,
            Err(msg) => {
                error.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);

        let session = session.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match session.api().register(&registration).await {
                Ok(()) => {
                    notice.set(REGISTERED.to_owned());
                    pause(REDIRECT_DELAY).await;
                    navigate(LOGIN_PATH, NavigateOptions::default());
                }
                Err(e) => {
                    error.set(e.user_message(REGISTER_FAILED));
                    busy.set(false);
                }
            }
        });
    };

    let text_input = move |id: &'static str, label: &'static str, kind: &'static str, value: RwSignal<String>| {
        view! {
            <label class="form__label" for=id>{label}</label>
            <input
                id=id
                class="form__input"
                type=kind
                required
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1 class="auth-card__brand">"로즈헤어"</h1>
                <p class="auth-card__subtitle">"회원가입"</p>
                <form class="form" on:submit=on_submit>
                    <AlertBanner message=error/>
                    <AlertBanner message=notice success=true/>
                    {text_input("name", "이름", "text", name)}
                    {text_input("username", "아이디 (12자 이하)", "text", username)}
                    {text_input("password", "비밀번호 (4~12자)", "password", password)}
                    {text_input("confirm", "비밀번호 확인", "password", confirm)}
                    <button class="button button--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "가입 중..." } else { "회원가입" }}
                    </button>
                </form>
                <p class="auth-card__footer">
                    "이미 계정이 있으신가요? "
                    <A href="/login">"로그인"</A>
                </p>
            </div>
        </div>
    }
}
