use super::*;

#[test]
fn save_then_read_round_trips() {
    clear();
    save("abc.def.ghi");
    assert_eq!(read(), Some("abc.def.ghi".to_owned()));
    clear();
}

#[test]
fn save_overwrites_existing_credential() {
    clear();
    save("first");
    save("second");
    assert_eq!(read(), Some("second".to_owned()));
    clear();
}

#[test]
fn read_on_empty_store_is_none() {
    clear();
    assert_eq!(read(), None);
}

#[test]
fn clear_is_idempotent() {
    save("tok");
    clear();
    assert_eq!(read(), None);
    clear();
    assert_eq!(read(), None);
}
