use super::*;

#[test]
fn mask_key_hides_alphanumerics_keeps_separators() {
    assert_eq!(mask_key("CC-AB12-CD34-EF56-7890"), "**-****-****-****-****");
}

#[test]
fn mask_key_empty_is_empty() {
    assert_eq!(mask_key(""), "");
}

#[test]
fn display_date_strips_time_component() {
    assert_eq!(display_date("2026-03-14T08:00:00Z"), "2026-03-14");
}

#[test]
fn display_date_passes_through_bare_dates() {
    assert_eq!(display_date("2026-03-14"), "2026-03-14");
}
