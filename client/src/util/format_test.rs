use super::*;

#[test]
fn format_won_groups_thousands() {
    assert_eq!(format_won(0), "0원");
    assert_eq!(format_won(900), "900원");
    assert_eq!(format_won(15000), "15,000원");
    assert_eq!(format_won(1_234_567), "1,234,567원");
    assert_eq!(format_won(-45000), "-45,000원");
}

#[test]
fn price_cell_dashes_missing_and_zero() {
    assert_eq!(price_cell(None), "-");
    assert_eq!(price_cell(Some(0)), "-");
    assert_eq!(price_cell(Some(80000)), "80,000원");
}

#[test]
fn text_cell_dashes_missing_and_empty() {
    assert_eq!(text_cell(None), "-");
    assert_eq!(text_cell(Some("")), "-");
    assert_eq!(text_cell(Some("커트")), "커트");
}

#[test]
fn visits_label_defaults_to_zero() {
    assert_eq!(visits_label(None), "0회");
    assert_eq!(visits_label(Some(12)), "12회");
}

#[test]
fn join_date_uses_unpadded_korean_style() {
    assert_eq!(format_join_date(Some("2024-03-02T10:15:00.000Z")), "2024. 3. 2.");
    assert_eq!(format_join_date(Some("garbage")), "-");
    assert_eq!(format_join_date(None), "-");
}

#[test]
fn visit_datetime_pads_and_uses_12_hour_clock() {
    assert_eq!(format_visit_datetime(Some("2024-05-01T14:30:00")), "2024. 05. 01. 오후 02:30");
    assert_eq!(format_visit_datetime(Some("2024-05-01T00:05")), "2024. 05. 01. 오전 12:05");
    assert_eq!(format_visit_datetime(Some("2024-05-01 09:00:00")), "2024. 05. 01. 오전 09:00");
    assert_eq!(format_visit_datetime(Some("2024-05-01")), "-");
}

#[test]
fn visit_time_handles_noon_and_morning() {
    assert_eq!(format_visit_time(Some("2024-05-01T12:00:00")), "오후 12:00");
    assert_eq!(format_visit_time(Some("2024-05-01T09:05:00")), "오전 09:05");
    assert_eq!(format_visit_time(None), "-");
}

#[test]
fn sales_date_spells_out_weekday() {
    assert_eq!(format_sales_date("2024-05-01"), "2024년 5월 1일 수요일");
    assert_eq!(format_sales_date("2024-12-29"), "2024년 12월 29일 일요일");
    assert_eq!(format_sales_date(""), "-");
}
