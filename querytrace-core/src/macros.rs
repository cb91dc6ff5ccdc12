//! Binding construction macros.
//!
//! # Examples
//!
//! ```rust
//! use querytrace_core::{bindings, BindingKey, Binding, ParamType};
//!
//! // Positional bindings
//! let b = bindings![1, "Dune", None::<i64>];
//! assert_eq!(b.len(), 3);
//! assert_eq!(b.get(&BindingKey::Position(1)), Some(&Binding::new("Dune")));
//!
//! // Named bindings, optionally typed
//! let b = bindings! {
//!     ":title" => "Dune",
//!     ":year" => ("1965", ParamType::Integer),
//! };
//! assert_eq!(b.get_named(":year"), Some(&Binding::typed("1965", ParamType::Integer)));
//! ```

/// Build a [`Bindings`](crate::Bindings) collection.
///
/// # Syntax
///
/// - `bindings![]` - Empty collection
/// - `bindings![v1, v2, ...]` - Positional bindings `0, 1, ...`
/// - `bindings!{k1 => v1, k2 => v2, ...}` - Keyed bindings
///
/// Values are anything convertible into a [`Binding`](crate::Binding),
/// including `(value, ParamType)` pairs.
#[macro_export]
macro_rules! bindings {
    () => {
        $crate::bindings::Bindings::new()
    };

    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut bindings = $crate::bindings::Bindings::new();
        $(
            bindings.insert($key, $value);
        )+
        bindings
    }};

    ($($value:expr),+ $(,)?) => {{
        let mut bindings = $crate::bindings::Bindings::new();
        $(
            bindings.push($value);
        )+
        bindings
    }};
}
