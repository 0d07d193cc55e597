/// Builds a [`crate::Value`] from a JSON-like literal.
///
/// ```rust
/// use ::interpolate::{value, Value};
///
/// let v = value!({
///     "name": "Alice",
///     "age": -5,
///     "tags": ["admin", "user"],
///     "active": true,
///     "manager": null
/// });
/// assert!(v.is_object());
/// assert_eq!(value!(-3.3), Value::from(-3.3));
/// ```
///
/// Arbitrary expressions are allowed in value position and are converted
/// through [`crate::to_value`]; anything that fails to serialize becomes
/// [`crate::Value::Null`].
#[macro_export]
macro_rules! value {
    // Internal array muncher: one element per step, structured forms before
    // the expression fallback so the parser never commits to a bad expr.
    (@array $vec:ident ()) => {};
    (@array $vec:ident ( null $(, $($rest:tt)*)? )) => {
        $vec.push($crate::Value::Null);
        $crate::value!(@array $vec ( $($($rest)*)? ));
    };
    (@array $vec:ident ( true $(, $($rest:tt)*)? )) => {
        $vec.push($crate::Value::Bool(true));
        $crate::value!(@array $vec ( $($($rest)*)? ));
    };
    (@array $vec:ident ( false $(, $($rest:tt)*)? )) => {
        $vec.push($crate::Value::Bool(false));
        $crate::value!(@array $vec ( $($($rest)*)? ));
    };
    (@array $vec:ident ( [ $($inner:tt)* ] $(, $($rest:tt)*)? )) => {
        $vec.push($crate::value!([ $($inner)* ]));
        $crate::value!(@array $vec ( $($($rest)*)? ));
    };
    (@array $vec:ident ( { $($inner:tt)* } $(, $($rest:tt)*)? )) => {
        $vec.push($crate::value!({ $($inner)* }));
        $crate::value!(@array $vec ( $($($rest)*)? ));
    };
    (@array $vec:ident ( $elem:expr , $($rest:tt)* )) => {
        $vec.push($crate::value!($elem));
        $crate::value!(@array $vec ( $($rest)* ));
    };
    (@array $vec:ident ( $elem:expr )) => {
        $vec.push($crate::value!($elem));
    };

    // Internal object muncher: keys are literals, values take the same
    // forms as array elements.
    (@object $map:ident ()) => {};
    (@object $map:ident ( $key:literal : null $(, $($rest:tt)*)? )) => {
        $map.insert($key.to_string(), $crate::Value::Null);
        $crate::value!(@object $map ( $($($rest)*)? ));
    };
    (@object $map:ident ( $key:literal : true $(, $($rest:tt)*)? )) => {
        $map.insert($key.to_string(), $crate::Value::Bool(true));
        $crate::value!(@object $map ( $($($rest)*)? ));
    };
    (@object $map:ident ( $key:literal : false $(, $($rest:tt)*)? )) => {
        $map.insert($key.to_string(), $crate::Value::Bool(false));
        $crate::value!(@object $map ( $($($rest)*)? ));
    };
    (@object $map:ident ( $key:literal : [ $($inner:tt)* ] $(, $($rest:tt)*)? )) => {
        $map.insert($key.to_string(), $crate::value!([ $($inner)* ]));
        $crate::value!(@object $map ( $($($rest)*)? ));
    };
    (@object $map:ident ( $key:literal : { $($inner:tt)* } $(, $($rest:tt)*)? )) => {
        $map.insert($key.to_string(), $crate::value!({ $($inner)* }));
        $crate::value!(@object $map ( $($($rest)*)? ));
    };
    (@object $map:ident ( $key:literal : $value:expr , $($rest:tt)* )) => {
        $map.insert($key.to_string(), $crate::value!($value));
        $crate::value!(@object $map ( $($rest)* ));
    };
    (@object $map:ident ( $key:literal : $value:expr )) => {
        $map.insert($key.to_string(), $crate::value!($value));
    };

    // Public entry points.
    (null) => {
        $crate::Value::Null
    };
    (true) => {
        $crate::Value::Bool(true)
    };
    (false) => {
        $crate::Value::Bool(false)
    };
    ([ $($tt:tt)* ]) => {{
        #[allow(unused_mut)]
        let mut vec: ::std::vec::Vec<$crate::Value> = ::std::vec::Vec::new();
        $crate::value!(@array vec ( $($tt)* ));
        $crate::Value::Array(vec)
    }};
    ({ $($tt:tt)* }) => {{
        #[allow(unused_mut)]
        let mut map = $crate::Map::new();
        $crate::value!(@object map ( $($tt)* ));
        $crate::Value::Object(map)
    }};
    ($other:expr) => {
        $crate::to_value(&$other).unwrap_or($crate::Value::Null)
    };
}

/// Builds an interpolation context [`crate::Map`] from key-value literals.
///
/// Values take the same forms as in [`value!`], so contexts nest naturally.
///
/// ```rust
/// use ::interpolate::{context, interpolate, Value};
///
/// let ctx = context! {
///     "person": { "name": "Alice" },
///     "age": 30
/// };
/// let result = interpolate("{{person.name}} is {{age}}", &ctx).unwrap();
/// assert_eq!(result, Value::from("Alice is 30"));
/// ```
#[macro_export]
macro_rules! context {
    () => {
        $crate::Map::new()
    };

    ( $($tt:tt)+ ) => {{
        let mut map = $crate::Map::new();
        $crate::value!(@object map ( $($tt)+ ));
        map
    }};
}
