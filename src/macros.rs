/// Builds a [`Schema`](crate::Schema) from a literal description.
///
/// Three forms are accepted:
///
/// - `schema!()` for an empty schema and `schema!(auto)` for auto-detection
/// - `schema!("ab:c")` for getopt shorthand
/// - `schema! { "names" => params, ... }` where `params` is either a string
///   literal or an array of parameter strings
///
/// # Examples
///
/// ```rust
/// use get_options::{parse, schema, Value};
///
/// let schema = schema! {
///     "-v, --verbose" => "",
///     "-s, --set-size" => ["<width=\\d+>", "<height=\\d+>"],
///     "-o" => "<file>",
/// };
///
/// let parsed = parse(["-vs", "640", "480"], &schema).unwrap();
/// assert_eq!(parsed.options.get("verbose"), Some(&Value::Flag));
/// assert_eq!(parsed.options.get("setSize"), Some(&Value::from(vec!["640", "480"])));
/// ```
#[macro_export]
macro_rules! schema {
    // Internal: add one entry
    (@entry $schema:ident, $names:literal, []) => {
        $schema.option($names, "")
    };
    (@entry $schema:ident, $names:literal, [ $($param:expr),+ $(,)? ]) => {
        $schema.option_params($names, [$($param),+])
    };
    (@entry $schema:ident, $names:literal, $params:literal) => {
        $schema.option($names, $params)
    };

    () => {
        $crate::Schema::new()
    };

    (auto) => {
        $crate::Schema::auto()
    };

    ($shorthand:literal) => {
        $crate::Schema::shorthand($shorthand)
    };

    ($( $names:literal => $params:tt ),+ $(,)?) => {{
        let schema = $crate::Schema::new();
        $(
            let schema = $crate::schema!(@entry schema, $names, $params);
        )+
        schema
    }};
}
