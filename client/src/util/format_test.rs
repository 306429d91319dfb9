use super::*;

#[test]
fn display_date_keeps_calendar_day() {
    assert_eq!(display_date("2024-04-01T09:30:00.000Z"), "2024-04-01");
}

#[test]
fn display_date_uses_offset_local_day() {
    assert_eq!(display_date("2023-12-31T23:59:59+02:00"), "2023-12-31");
}

#[test]
fn display_date_passes_through_garbage() {
    assert_eq!(display_date("yesterday"), "yesterday");
}

#[test]
fn caption_prefers_description() {
    assert_eq!(caption(Some(" sunset ")), "sunset");
}

#[test]
fn caption_falls_back_when_blank() {
    assert_eq!(caption(Some("   ")), "Untitled image");
    assert_eq!(caption(None), "Untitled image");
}
