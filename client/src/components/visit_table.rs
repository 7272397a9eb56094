//! Table of visit records, shared by member history and daily sales.

use leptos::prelude::*;

use crate::net::types::VisitRecord;
use crate::util::format::{format_visit_datetime, format_visit_time, format_won, price_cell, text_cell};

/// How the first column renders `visitedAt`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimeColumn {
    /// Full date and time, for a member's history.
    DateTime,
    /// Time of day only, for a single day's sales.
    TimeOnly,
}

impl TimeColumn {
    fn header(self) -> &'static str {
        match self {
            Self::DateTime => "날짜",
            Self::TimeOnly => "시간",
        }
    }

    fn format(self, raw: Option<&str>) -> String {
        match self {
            Self::DateTime => format_visit_datetime(raw),
            Self::TimeOnly => format_visit_time(raw),
        }
    }
}

/// Visit rows with an optional totals footer.
#[component]
pub fn VisitTable(records: Vec<VisitRecord>, time_column: TimeColumn, footer_total: Option<i64>) -> impl IntoView {
    let rows = records
        .into_iter()
        .map(|record| {
            view! {
                <tr>
                    <td>{time_column.format(record.visited_at.as_deref())}</td>
                    <td>{text_cell(record.treatment.as_deref())}</td>
                    <td class="visit-table__price">{price_cell(record.price)}</td>
                    <td>{text_cell(record.memo.as_deref())}</td>
                </tr>
            }
        })
        .collect_view();

    view! {
        <div class="visit-table__wrap">
            <table class="visit-table">
                <thead>
                    <tr>
                        <th>{time_column.header()}</th>
                        <th>"시술 내용"</th>
                        <th>"가격"</th>
                        <th>"메모"</th>
                    </tr>
                </thead>
                <tbody>{rows}</tbody>
                {footer_total
                    .map(|total| {
                        view! {
                            <tfoot>
                                <tr class="visit-table__total">
                                    <td colspan="2">"합계"</td>
                                    <td>{format_won(total)}</td>
                                    <td></td>
                                </tr>
                            </tfoot>
                        }
                    })}
            </table>
        </div>
    }
}
