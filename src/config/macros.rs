/// Configuration macro for config definitions with embedded defaults
///
/// `config_struct!` declares field name, type, and default value in one place
/// and generates:
/// - The struct with public fields
/// - The `Default` implementation
/// - Serde support with `#[serde(default)]`, so a partial TOML table fills
///   every missing key from the defaults
/// - A `FIELDS` list of accepted keys, used to flag typos in config files
///
/// # Example
/// ```
/// terkode::config_struct! {
///     pub struct MonitorConfig {
///         refresh_interval_secs: u64 = 30,
///     }
/// }
///
/// assert_eq!(MonitorConfig::default().refresh_interval_secs, 30);
/// assert_eq!(MonitorConfig::FIELDS, &["refresh_interval_secs"]);
/// ```
#[macro_export]
macro_rules! config_struct {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[$field_meta:meta])*
                $field_name:ident: $field_type:ty = $default_value:expr
            ),*
            $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
        #[serde(default)]
        $vis struct $name {
            $(
                $(#[$field_meta])*
                pub $field_name: $field_type,
            )*
        }

        impl $name {
            /// Keys accepted in this table
            pub const FIELDS: &'static [&'static str] = &[$(stringify!($field_name)),*];
        }

        impl Default for $name {
            fn default() -> Self {
                Self {
                    $(
                        $field_name: $default_value,
                    )*
                }
            }
        }
    };
}
