//! Browser clock helpers.

/// Current calendar year in the browser's local time zone.
pub fn current_year() -> Option<u32> {
    #[cfg(feature = "hydrate")]
    {
        let year = js_sys::Date::new_0().get_full_year();
        (year > 0).then_some(year)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}
