//! Korean-locale display formatting for prices, counts, and timestamps.
//!
//! Backend timestamps are shown as wall-clock time: the leading
//! `YYYY-MM-DDTHH:MM` is formatted and any offset suffix is ignored.
//! Values that do not parse render as `-`.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use time::macros::format_description;
use time::{Date, PrimitiveDateTime, Weekday};

/// Placeholder for absent values.
pub const DASH: &str = "-";

/// `12345` -> `"12,345원"`.
pub fn format_won(amount: i64) -> String {
    format!("{}원", group_thousands(amount))
}

/// Price cell text; absent or zero prices show a dash.
pub fn price_cell(price: Option<i64>) -> String {
    match price {
        Some(amount) if amount != 0 => format_won(amount),
        _ => DASH.to_owned(),
    }
}

/// Text cell; absent or empty values show a dash.
pub fn text_cell(value: Option<&str>) -> String {
    match value {
        Some(text) if !text.is_empty() => text.to_owned(),
        _ => DASH.to_owned(),
    }
}

/// `Some(3)` -> `"3회"`; unknown counts read as zero.
pub fn visits_label(total_visits: Option<i64>) -> String {
    format!("{}회", total_visits.unwrap_or(0))
}

/// Member join date, e.g. `"2024. 3. 2."`.
pub fn format_join_date(raw: Option<&str>) -> String {
    raw.and_then(parse_date)
        .map_or_else(|| DASH.to_owned(), |d| format!("{}. {}. {}.", d.year(), u8::from(d.month()), d.day()))
}

/// Visit history timestamp, e.g. `"2024. 05. 01. 오후 02:30"`.
pub fn format_visit_datetime(raw: Option<&str>) -> String {
    raw.and_then(parse_wall_clock).map_or_else(
        || DASH.to_owned(),
        |dt| {
            format!(
                "{}. {:02}. {:02}. {}",
                dt.year(),
                u8::from(dt.month()),
                dt.day(),
                clock_12h(dt.hour(), dt.minute())
            )
        },
    )
}

/// Time of day for the sales table, e.g. `"오전 09:05"`.
pub fn format_visit_time(raw: Option<&str>) -> String {
    raw.and_then(parse_wall_clock)
        .map_or_else(|| DASH.to_owned(), |dt| clock_12h(dt.hour(), dt.minute()))
}

/// Sales header date, e.g. `"2024년 5월 1일 수요일"`.
pub fn format_sales_date(raw: &str) -> String {
    parse_date(raw).map_or_else(
        || DASH.to_owned(),
        |d| format!("{}년 {}월 {}일 {}", d.year(), u8::from(d.month()), d.day(), weekday_name(d.weekday())),
    )
}

fn group_thousands(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if amount < 0 {
        grouped.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

fn clock_12h(hour: u8, minute: u8) -> String {
    let period = if hour < 12 { "오전" } else { "오후" };
    let hour = match hour % 12 {
        0 => 12,
        h => h,
    };
    format!("{period} {hour:02}:{minute:02}")
}

fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Monday => "월요일",
        Weekday::Tuesday => "화요일",
        Weekday::Wednesday => "수요일",
        Weekday::Thursday => "목요일",
        Weekday::Friday => "금요일",
        Weekday::Saturday => "토요일",
        Weekday::Sunday => "일요일",
    }
}

fn parse_date(raw: &str) -> Option<Date> {
    let head = raw.trim().get(..10)?;
    Date::parse(head, format_description!("[year]-[month]-[day]")).ok()
}

fn parse_wall_clock(raw: &str) -> Option<PrimitiveDateTime> {
    let head = raw.trim().get(..16)?.replacen(' ', "T", 1);
    PrimitiveDateTime::parse(&head, format_description!("[year]-[month]-[day]T[hour]:[minute]")).ok()
}
