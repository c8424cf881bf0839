use super::*;

#[test]
fn valid_input_builds_request() {
    let request = validate_change_password("secret1", "secret22", "secret22").unwrap();
    assert_eq!(request.current_password, "secret1");
    assert_eq!(request.new_password, "secret22");
}

#[test]
fn missing_fields_are_rejected() {
    assert_eq!(validate_change_password("", "secret22", "secret22"), Err("Vui lòng nhập đầy đủ thông tin."));
    assert_eq!(validate_change_password("secret1", "secret22", ""), Err("Vui lòng nhập đầy đủ thông tin."));
}

#[test]
fn short_new_password_is_rejected() {
    assert_eq!(validate_change_password("secret1", "abc", "abc"), Err("Mật khẩu mới phải có ít nhất 6 ký tự."));
}

#[test]
fn length_counts_characters_not_bytes() {
    assert!(validate_change_password("secret1", "mậtkh", "mậtkh").is_err());
    assert!(validate_change_password("secret1", "mậtkhẩu", "mậtkhẩu").is_ok());
}

#[test]
fn unchanged_password_is_rejected() {
    assert_eq!(
        validate_change_password("secret1", "secret1", "secret1"),
        Err("Mật khẩu mới phải khác mật khẩu hiện tại.")
    );
}

#[test]
fn mismatched_confirmation_is_rejected() {
    assert_eq!(validate_change_password("secret1", "secret22", "secret23"), Err("Xác nhận mật khẩu không khớp."));
}
