use super::*;

#[test]
fn validate_new_member_trims_and_drops_blank_phone() {
    assert_eq!(
        validate_new_member("  김민지 ", "   "),
        Ok(NewMember { name: "김민지".to_owned(), phone: None })
    );
}

#[test]
fn validate_new_member_keeps_phone() {
    let member = validate_new_member("김민지", " 010-1234-5678 ").unwrap();
    assert_eq!(member.phone.as_deref(), Some("010-1234-5678"));
}

#[test]
fn validate_new_member_requires_name() {
    assert_eq!(validate_new_member("", "010"), Err(MISSING_NAME));
    assert_eq!(validate_new_member("  ", ""), Err(MISSING_NAME));
}

#[test]
fn validate_new_member_limits_field_lengths() {
    let long = "가".repeat(FIELD_MAX_CHARS + 1);
    let max = "가".repeat(FIELD_MAX_CHARS);
    assert!(validate_new_member(&max, &max).is_ok());
    assert_eq!(validate_new_member(&long, ""), Err(NAME_TOO_LONG));
    assert_eq!(validate_new_member("김민지", &long), Err(PHONE_TOO_LONG));
}
