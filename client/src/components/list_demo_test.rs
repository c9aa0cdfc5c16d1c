use super::*;

use crate::state::list::{DEFAULT_VALUES, VALUE_MAX, VALUE_MIN};

fn with_driver(test: impl FnOnce(RwSignal<ListState>, ListDriver)) {
    let owner = Owner::new();
    owner.with(|| {
        let list = RwSignal::new(ListState::default());
        test(list, ListDriver::new(list));
    });
}

#[test]
fn driver_append_grows_list_by_one_in_range() {
    with_driver(|list, driver| {
        driver.append();
        let values = list.with_untracked(|s| s.values().to_vec());
        assert_eq!(values.len(), 4);
        assert_eq!(&values[..3], &DEFAULT_VALUES);
        assert!((VALUE_MIN..=VALUE_MAX).contains(&values[3]));
    });
}

#[test]
fn driver_remove_marks_last_box_leaving() {
    with_driver(|list, driver| {
        driver.remove_last();
        let nodes = list.with_untracked(ListState::nodes);
        assert_eq!(nodes.len(), 3);
        assert_eq!(nodes[2].mark, crate::state::list::NodeMark::Leaving);

        // A second removal settles the first one.
        driver.remove_last();
        assert_eq!(list.with_untracked(|s| s.values().to_vec()), vec![10, 20]);
    });
}

#[test]
fn driver_remove_on_empty_is_noop() {
    with_driver(|list, driver| {
        list.set(ListState::default());
        for _ in 0..4 {
            driver.remove_last();
        }
        assert!(list.with_untracked(ListState::is_empty));
        driver.remove_last();
        assert!(list.with_untracked(ListState::is_empty));
    });
}

#[test]
fn driver_traverse_keeps_values_and_reset_restores_default() {
    with_driver(|list, driver| {
        driver.append();
        driver.traverse();
        assert_eq!(list.with_untracked(ListState::len), 4);

        driver.reset();
        assert_eq!(list.with_untracked(|s| s.values().to_vec()), DEFAULT_VALUES.to_vec());
    });
}
