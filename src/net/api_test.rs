use super::*;

// =============================================================
// error_detail
// =============================================================

#[test]
fn error_detail_extracts_backend_message() {
    let body = r#"{"detail":"Invalid credentials"}"#;
    assert_eq!(error_detail(body, "Authentication failed"), "Invalid credentials");
}

#[test]
fn error_detail_falls_back_on_missing_field() {
    let body = r#"{"error":"nope"}"#;
    assert_eq!(error_detail(body, "Authentication failed"), "Authentication failed");
}

#[test]
fn error_detail_falls_back_on_invalid_json() {
    assert_eq!(error_detail("<html>502</html>", "Checkout failed"), "Checkout failed");
}

#[test]
fn error_detail_falls_back_on_non_string_detail() {
    let body = r#"{"detail":{"code":400}}"#;
    assert_eq!(error_detail(body, "Checkout failed"), "Checkout failed");
}
