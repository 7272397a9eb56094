//! Member search with per-member visit history and inline visit entry.
//!
//! SYSTEM CONTEXT
//! ==============
//! Search results, the open history, and the open entry form all live in one
//! [`MemberSearchState`] signal. The result list re-renders only when the
//! results change, so typing into the entry form keeps input focus.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::alert_banner::AlertBanner;
use crate::components::auth_gate::ProtectedPage;
use crate::components::visit_table::{TimeColumn, VisitTable};
use crate::net::api::SalonApi;
use crate::net::types::{Member, MemberQuery};
use crate::state::members::{DraftField, MemberSearchState};
use crate::state::session::Session;
use crate::util::format::{format_join_date, text_cell, visits_label};

const SEARCH_FAILED: &str = "회원 검색에 실패했습니다.";
const RECORDS_FAILED: &str = "방문 기록 조회에 실패했습니다.";
const SAVE_FAILED: &str = "방문 기록 등록에 실패했습니다.";
const SAVED: &str = "방문 기록이 등록되었습니다.";

#[component]
pub fn MemberSearchPage() -> impl IntoView {
    view! {
        <ProtectedPage>
            <MemberSearch/>
        </ProtectedPage>
    }
}

#[component]
fn MemberSearch() -> impl IntoView {
    let session = expect_context::<Session>();

    let name = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let state = RwSignal::new(MemberSearchState::default());
    let last_query = RwSignal::new(MemberQuery::default());
    let searched = RwSignal::new(false);
    let busy = RwSignal::new(false);
    let saving = RwSignal::new(false);
    let error = RwSignal::new(String::new());
    let notice = RwSignal::new(String::new());

    let results = Memo::new(move |_| state.with(|s| s.results.clone()));
    let query_blank = move || MemberQuery::from_input(&name.get(), &phone.get()).is_empty();

    let on_search = {
        let session = session.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            let query = MemberQuery::from_input(&name.get_untracked(), &phone.get_untracked());
            if query.is_empty() || busy.get_untracked() {
                return;
            }
            error.set(String::new());
            notice.set(String::new());
            busy.set(true);

            let session = session.clone();
            leptos::task::spawn_local(async move {
                let result = session.authorized(session.api().search_members(&query)).await;
                busy.set(false);
                match result {
                    Ok(members) => {
                        state.set(MemberSearchState { results: members, ..MemberSearchState::default() });
                        last_query.set(query);
                        searched.set(true);
                    }
                    Err(e) => error.set(e.user_message(SEARCH_FAILED)),
                }
            });
        }
    };

    let on_clear = move |_| {
        name.set(String::new());
        phone.set(String::new());
        state.set(MemberSearchState::default());
        last_query.set(MemberQuery::default());
        searched.set(false);
        error.set(String::new());
        notice.set(String::new());
    };

    let on_records = {
        let session = session.clone();
        Callback::new(move |member_id: i64| {
            if state.with_untracked(|s| s.records_open_for(member_id)) {
                state.update(MemberSearchState::hide_records);
                return;
            }
            error.set(String::new());
            let session = session.clone();
            leptos::task::spawn_local(async move {
                match session.authorized(session.api().visit_records_for_member(member_id)).await {
                    Ok(records) => state.update(|s| s.show_records(member_id, records)),
                    Err(e) => error.set(e.user_message(RECORDS_FAILED)),
                }
            });
        })
    };

    let on_entry = Callback::new(move |member_id: i64| {
        notice.set(String::new());
        state.update(|s| s.toggle_entry(member_id));
    });

    let on_save = Callback::new(move |member_id: i64| {
        if saving.get_untracked() {
            return;
        }
        let Some(draft) = state.with_untracked(|s| s.draft.clone()).filter(|d| d.member_id == member_id) else {
            return;
        };
        error.set(String::new());
        notice.set(String::new());
        let record = match draft.to_request() {
            Ok(record) => record,
            Err(msg) => {
                error.set(msg.to_owned());
                return;
            }
        };
        saving.set(true);

        let session = session.clone();
        leptos::task::spawn_local(async move {
            let result = session.authorized(session.api().create_visit_record(&record)).await;
            saving.set(false);
            if let Err(e) = result {
                error.set(e.user_message(SAVE_FAILED));
                return;
            }
            notice.set(SAVED.to_owned());
            state.update(MemberSearchState::reset_draft);

            let query = last_query.get_untracked();
            if !query.is_empty() {
                match session.authorized(session.api().search_members(&query)).await {
                    Ok(members) => state.update(|s| s.results = members),
                    Err(e) => error.set(e.user_message(SEARCH_FAILED)),
                }
            }
            if state.with_untracked(|s| s.records_open_for(member_id)) {
                match session.authorized(session.api().visit_records_for_member(member_id)).await {
                    Ok(records) => state.update(|s| s.show_records(member_id, records)),
                    Err(e) => error.set(e.user_message(RECORDS_FAILED)),
                }
            }
        });
    });

    let result_rows = move || {
        results
            .get()
            .into_iter()
            .map(|member| {
                view! {
                    <MemberRow
                        member=member
                        state=state
                        saving=saving
                        on_records=on_records
                        on_entry=on_entry
                        on_save=on_save
                    />
                }
            })
            .collect_view()
    };

    view! {
        <div class="page">
            <header class="page__header">
                <h1 class="page__title">"회원 검색"</h1>
                <A href="/" attr:class="button">"홈으로"</A>
            </header>
            <form class="search-bar" on:submit=on_search>
                <input
                    class="form__input"
                    type="text"
                    placeholder="이름"
                    prop:value=move || name.get()
                    on:input=move |ev| name.set(event_target_value(&ev))
                />
                <input
                    class="form__input"
                    type="text"
                    placeholder="전화번호"
                    prop:value=move || phone.get()
                    on:input=move |ev| phone.set(event_target_value(&ev))
                />
                <button class="button button--primary" type="submit" disabled=move || busy.get() || query_blank()>
                    {move || if busy.get() { "검색 중..." } else { "검색" }}
                </button>
                <button class="button" type="button" on:click=on_clear>"초기화"</button>
            </form>
            <AlertBanner message=error/>
            <AlertBanner message=notice success=true/>
            <Show
                when=move || !results.with(Vec::is_empty)
                fallback=move || {
                    view! {
                        <Show when=move || searched.get()>
                            <p class="empty-state">"검색 결과가 없습니다."</p>
                        </Show>
                    }
                }
            >
                <table class="member-table">
                    <thead>
                        <tr>
                            <th>"이름"</th>
                            <th>"전화번호"</th>
                            <th>"방문 횟수"</th>
                            <th>"가입일"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>{result_rows}</tbody>
                </table>
            </Show>
        </div>
    }
}

/// One result row plus its expandable history and entry form.
#[component]
fn MemberRow(
    member: Member,
    state: RwSignal<MemberSearchState>,
    #[prop(into)] saving: Signal<bool>,
    on_records: Callback<i64>,
    on_entry: Callback<i64>,
    on_save: Callback<i64>,
) -> impl IntoView {
    let id = member.id;
    let records_open = Memo::new(move |_| state.with(|s| s.records_open_for(id)));
    let entry_open = Memo::new(move |_| state.with(|s| s.entry_open_for(id)));
    let can_submit = move || state.with(|s| s.draft.as_ref().is_some_and(|d| d.member_id == id && d.can_submit()));

    let history = move || {
        let records = state.with(|s| s.records.clone());
        if records.is_empty() {
            view! { <p class="empty-state">"방문 기록이 없습니다."</p> }.into_any()
        } else {
            view! { <VisitTable records=records time_column=TimeColumn::DateTime footer_total=None/> }.into_any()
        }
    };

    view! {
        <tr class="member-table__row">
            <td>{member.name.clone()}</td>
            <td>{text_cell(member.phone.as_deref())}</td>
            <td>{visits_label(member.total_visits)}</td>
            <td>{format_join_date(member.create_at.as_deref())}</td>
            <td class="member-table__actions">
                <button class="button button--small" on:click=move |_| on_records.run(id)>
                    {move || if records_open.get() { "기록 닫기" } else { "방문 기록" }}
                </button>
                <button class="button button--small" on:click=move |_| on_entry.run(id)>
                    {move || if entry_open.get() { "입력 취소" } else { "기록 추가" }}
                </button>
            </td>
        </tr>
        <Show when=move || entry_open.get()>
            <tr class="member-table__detail">
                <td colspan="5">
                    <form
                        class="visit-form"
                        on:submit=move |ev: leptos::ev::SubmitEvent| {
                            ev.prevent_default();
                            on_save.run(id);
                        }
                    >
                        {draft_input(state, DraftField::Treatment, "text", "시술 내용 (필수)")}
                        {draft_input(state, DraftField::Price, "number", "가격")}
                        {draft_input(state, DraftField::VisitedAt, "datetime-local", "방문 일시")}
                        {draft_input(state, DraftField::Memo, "text", "메모")}
                        <button
                            class="button button--primary"
                            type="submit"
                            disabled=move || saving.get() || !can_submit()
                        >
                            {move || if saving.get() { "저장 중..." } else { "저장" }}
                        </button>
                    </form>
                </td>
            </tr>
        </Show>
        <Show when=move || records_open.get()>
            <tr class="member-table__detail">
                <td colspan="5">{history}</td>
            </tr>
        </Show>
    }
}

fn draft_input(
    state: RwSignal<MemberSearchState>,
    field: DraftField,
    kind: &'static str,
    placeholder: &'static str,
) -> impl IntoView {
    view! {
        <input
            class="form__input"
            type=kind
            min=(field == DraftField::Price).then_some("0")
            placeholder=placeholder
            prop:value=move || {
                state.with(|s| s.draft.as_ref().map(|d| d.field(field).to_owned()).unwrap_or_default())
            }
            on:input=move |ev| {
                let value = event_target_value(&ev);
                state.update(|s| {
                    if let Some(draft) = &mut s.draft {
                        draft.set_field(field, value);
                    }
                });
            }
        />
    }
}
