//! Background scroll lock while the modal is open.

/// Lock or unlock scrolling of `<body>`.
pub fn set_locked(locked: bool) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) {
            let _ = body
                .style()
                .set_property("overflow", if locked { "hidden" } else { "auto" });
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = locked;
    }
}
