use super::*;

#[test]
fn site_b_entry_comes_first() {
    assert_eq!(MenuEntry::ALL[0], MenuEntry::SiteB);
    assert_eq!(MenuEntry::SiteB.label(), "Go to Site B");
}

#[test]
fn site_b_entry_runs_an_action() {
    assert_eq!(MenuEntry::SiteB.href(), None);
}

#[test]
fn placeholder_entry_is_inert_link() {
    assert_eq!(MenuEntry::Placeholder.label(), "Other Site (Placeholder)");
    assert_eq!(MenuEntry::Placeholder.href(), Some("#"));
}

#[test]
fn dropdown_class_reflects_open_state() {
    assert_eq!(dropdown_class(false), "dropdown");
    assert_eq!(dropdown_class(true), "dropdown dropdown--open");
}
