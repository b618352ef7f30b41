/// Builds a [`PropertyMap`](crate::PropertyMap) of initial properties.
///
/// Names and values are kept as written; constructors uppercase the names and
/// encode the values when the map is applied.
///
/// # Examples
///
/// ```rust
/// use icalgen::{props, Component};
///
/// let event = Component::event_with(props! {
///     "summary" => "Release party",
///     "location" => "Roof terrace",
/// });
/// assert_eq!(event.get_property("SUMMARY", ""), "Release party");
/// ```
#[macro_export]
macro_rules! props {
    // Handle empty map
    () => {
        $crate::PropertyMap::new()
    };

    ($($name:expr => $value:expr),+ $(,)?) => {{
        let mut map = $crate::PropertyMap::new();
        $(
            map.insert(::std::string::ToString::to_string(&$name), ::std::string::ToString::to_string(&$value));
        )+
        map
    }};
}
