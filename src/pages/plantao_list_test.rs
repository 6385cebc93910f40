use super::*;

fn page_with(number: i64, last: bool) -> Page<Plantao> {
    Page { number, last, ..Page::default() }
}

#[test]
fn first_page_has_no_previous() {
    assert!(!can_prev(0));
    assert!(can_prev(1));
}

#[test]
fn last_page_has_no_next() {
    assert!(!can_next(&page_with(3, true)));
    assert!(can_next(&page_with(0, false)));
}
