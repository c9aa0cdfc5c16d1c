#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn current_year_is_unknown_outside_browser() {
    assert_eq!(date::current_year(), None);
}

#[test]
fn timer_set_is_inert_outside_browser() {
    let mut timers = timers::TimerSet::default();
    timers.schedule(10, || panic!("timers never fire natively"));
    assert!(timers.is_empty());
    timers.cancel_all();
    assert_eq!(timers.len(), 0);
}

#[test]
fn node_values_fall_in_range() {
    use crate::state::list::{VALUE_MAX, VALUE_MIN};
    for _ in 0..500 {
        let value = random::node_value();
        assert!((VALUE_MIN..=VALUE_MAX).contains(&value), "{value}");
    }
}

#[test]
fn scroll_lock_and_reveal_are_callable() {
    scroll_lock::set_locked(true);
    scroll_lock::set_locked(false);
    reveal::install();
}

#[test]
fn reveal_uses_expected_observer_options() {
    assert!((reveal::THRESHOLD - 0.1).abs() < f64::EPSILON);
    assert_eq!(reveal::ROOT_MARGIN, "0px 0px -50px 0px");
    assert_eq!(reveal::FORCE_REVEAL_MS, 500);
}
