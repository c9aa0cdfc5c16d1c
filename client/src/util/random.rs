//! Value source for appended demo nodes.

use crate::state::list::{VALUE_MAX, VALUE_MIN};

/// Pseudo-random node value in `VALUE_MIN..=VALUE_MAX`.
pub fn node_value() -> u32 {
    #[cfg(feature = "hydrate")]
    {
        let span = f64::from(VALUE_MAX - VALUE_MIN + 1);
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let offset = (js_sys::Math::random() * span).floor() as u32;
        (VALUE_MIN + offset).min(VALUE_MAX)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        rand::random_range(VALUE_MIN..=VALUE_MAX)
    }
}
