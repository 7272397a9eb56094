//! Daily sales: one day's visit records with totals.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::alert_banner::AlertBanner;
use crate::components::auth_gate::ProtectedPage;
use crate::components::visit_table::{TimeColumn, VisitTable};
use crate::net::api::SalonApi;
use crate::net::types::VisitRecord;
use crate::state::sales::SalesSummary;
use crate::state::session::Session;
use crate::util::browser::today_iso;
use crate::util::format::{format_sales_date, format_won};

const SALES_FAILED: &str = "매출 조회에 실패했습니다.";

#[component]
pub fn SalesPage() -> impl IntoView {
    view! {
        <ProtectedPage>
            <Sales/>
        </ProtectedPage>
    }
}

#[component]
fn Sales() -> impl IntoView {
    let session = expect_context::<Session>();

    let date = RwSignal::new(String::new());
    let records = RwSignal::new(Vec::<VisitRecord>::new());
    let loading = RwSignal::new(false);
    let error = RwSignal::new(String::new());

    let summary = Memo::new(move |_| records.with(|r| SalesSummary::from_records(r)));

    // Effects only run in the browser, where the local clock is available.
    Effect::new(move || {
        if date.get_untracked().is_empty() {
            date.set(today_iso());
        }
    });

    Effect::new(move || {
        let day = date.get();
        if day.is_empty() {
            return;
        }
        error.set(String::new());
        loading.set(true);
        let session = session.clone();
        leptos::task::spawn_local(async move {
            let result = session.authorized(session.api().visit_records_on(&day)).await;
            // A later date change may have superseded this request.
            if date.get_untracked() != day {
                return;
            }
            loading.set(false);
            match result {
                Ok(list) => records.set(list),
                Err(e) => {
                    records.set(Vec::new());
                    error.set(e.user_message(SALES_FAILED));
                }
            }
        });
    });

    let table = move || {
        let list = records.get();
        if list.is_empty() {
            view! { <p class="empty-state">"해당 날짜의 방문 기록이 없습니다."</p> }.into_any()
        } else {
            let total = summary.get_untracked().total;
            view! { <VisitTable records=list time_column=TimeColumn::TimeOnly footer_total=Some(total)/> }.into_any()
        }
    };

    view! {
        <div class="page">
            <header class="page__header">
                <h1 class="page__title">"매출 조회"</h1>
                <A href="/" attr:class="button">"홈으로"</A>
            </header>
            <div class="sales-toolbar">
                <input
                    class="form__input"
                    type="date"
                    prop:value=move || date.get()
                    on:change=move |ev| date.set(event_target_value(&ev))
                />
                <span class="sales-toolbar__date">{move || format_sales_date(&date.get())}</span>
            </div>
            <AlertBanner message=error/>
            <div class="summary-grid">
                <div class="summary-card">
                    <span class="summary-card__label">"총 매출"</span>
                    <span class="summary-card__value">{move || format_won(summary.get().total)}</span>
                </div>
                <div class="summary-card">
                    <span class="summary-card__label">"방문 건수"</span>
                    <span class="summary-card__value">{move || format!("{}건", summary.get().count)}</span>
                </div>
            </div>
            <Show when=move || !loading.get() fallback=|| view! { <div class="page-loading">"로딩 중..."</div> }>
                {table}
            </Show>
        </div>
    }
}
