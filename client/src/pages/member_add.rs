//! New-customer form.

#[cfg(test)]
#[path = "member_add_test.rs"]
mod member_add_test;

use std::time::Duration;

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::alert_banner::AlertBanner;
use crate::components::auth_gate::ProtectedPage;
use crate::net::api::SalonApi;
use crate::net::types::{NewMember, non_blank};
use crate::state::notice::TimedNotice;
use crate::state::session::Session;
use crate::util::browser::pause;

pub const FIELD_MAX_CHARS: usize = 50;

const ADD_FAILED: &str = "회원 등록에 실패했습니다.";
const ADDED: &str = "회원이 등록되었습니다.";
pub(crate) const MISSING_NAME: &str = "이름을 입력하세요.";
pub(crate) const NAME_TOO_LONG: &str = "이름은 50자 이하여야 합니다.";
pub(crate) const PHONE_TOO_LONG: &str = "전화번호는 50자 이하여야 합니다.";

const NOTICE_DURATION: Duration = Duration::from_secs(3);

pub(crate) fn validate_new_member(name: &str, phone: &str) -> Result<NewMember, &'static str> {
    let name = non_blank(name).ok_or(MISSING_NAME)?;
    if name.chars().count() > FIELD_MAX_CHARS {
        return Err(NAME_TOO_LONG);
    }
    let phone = non_blank(phone);
    if phone.as_ref().is_some_and(|p| p.chars().count() > FIELD_MAX_CHARS) {
        return Err(PHONE_TOO_LONG);
    }
    Ok(NewMember { name, phone })
}

#[component]
pub fn MemberAddPage() -> impl IntoView {
    view! {
        <ProtectedPage>
            <MemberAddForm/>
        </ProtectedPage>
    }
}

#[component]
fn MemberAddForm() -> impl IntoView {
    let session = expect_context::<Session>();

    let name = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let notice = RwSignal::new(TimedNotice::default());
    let notice_text = Signal::derive(move || notice.with(|n| n.text().to_owned()));
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        error.set(String::new());
        notice.update(TimedNotice::clear);
        let member = match validate_new_member(&name.get_untracked(), &phone.get_untracked()) {
            Ok(member) => member,
            Err(msg) => {
                error.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);

        let session = session.clone();
        leptos::task::spawn_local(async move {
            let result = session.authorized(session.api().add_member(&member)).await;
            busy.set(false);
            match result {
                Ok(()) => {
                    name.set(String::new());
                    phone.set(String::new());
                    let mut ticket = 0;
                    notice.update(|n| ticket = n.show(ADDED));
                    pause(NOTICE_DURATION).await;
                    notice.update(|n| n.expire(ticket));
                }
                Err(e) => error.set(e.user_message(ADD_FAILED)),
            }
        });
    };

    view! {
        <div class="page">
            <header class="page__header">
                <h1 class="page__title">"회원 등록"</h1>
                <A href="/" attr:class="button">"홈으로"</A>
            </header>
            <form class="form form--card" on:submit=on_submit>
                <AlertBanner message=error/>
                <AlertBanner message=notice_text success=true/>
                <label class="form__label" for="member-name">"이름"</label>
                <input
                    id="member-name"
                    class="form__input"
                    type="text"
                    required
                    maxlength="50"
                    placeholder="고객 이름"
                    prop:value=move || name.get()
                    on:input=move |ev| name.set(event_target_value(&ev))
                />
                <label class="form__label" for="member-phone">"전화번호"</label>
                <input
                    id="member-phone"
                    class="form__input"
                    type="tel"
                    maxlength="50"
                    placeholder="010-0000-0000"
                    prop:value=move || phone.get()
                    on:input=move |ev| phone.set(event_target_value(&ev))
                />
                <button class="button button--primary" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "등록 중..." } else { "등록" }}
                </button>
            </form>
        </div>
    }
}
