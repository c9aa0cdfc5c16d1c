#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn read_preference_is_light_in_non_hydrate_tests() {
    assert_eq!(read_preference(), Theme::Light);
}

#[test]
fn toggle_alternates_light_and_dark() {
    let first = toggle(Theme::Light);
    let second = toggle(first);
    let third = toggle(second);
    assert_eq!(first, Theme::Dark);
    assert_eq!(second, Theme::Light);
    assert_eq!(third, Theme::Dark);
}

#[test]
fn apply_is_noop_but_callable() {
    apply(Theme::Light);
    apply(Theme::Dark);
}
