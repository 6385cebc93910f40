use super::*;

#[test]
fn default_sidebar_is_expanded() {
    let state = UiState::default();
    assert!(!state.sidebar_collapsed);
    assert_eq!(state.page_title, "Dashboard");
}

#[test]
fn toggle_sidebar_flips_both_ways() {
    let mut state = UiState::default();
    state.toggle_sidebar();
    assert!(state.sidebar_collapsed);
    state.toggle_sidebar();
    assert!(!state.sidebar_collapsed);
}
