/// A macro to give a closed, label-keyed enum its string conversions.
///
/// Generates `as_str`, a strict `FromStr` that rejects unknown labels with the
/// given error constructor, a permissive `from_label` that falls back to the
/// given default variant, `ALL`, and `Display`.
///
/// # Arguments
/// * `$name`: The enum to implement conversions for.
/// * `$default`: The variant `from_label` returns for an unrecognized label.
/// * `$err`: An `AppError` tuple variant taking the error message.
/// * `$variant => $label`: Every variant paired with its wire label.
///
/// # Example
/// ```rust,ignore
/// labelled_enum!(Sex, default = Female, error = AppError::InvalidInput, {
///     Male => "male",
///     Female => "female",
/// });
/// ```
macro_rules! labelled_enum {
    ($name:ident, default = $default:ident, error = $err:path, { $($variant:ident => $label:literal),+ $(,)? }) => {
        impl $name {
            /// Every variant, in declaration order
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Wire label of this variant
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }

            /// Parses a label, falling back to the default variant when unrecognized
            pub fn from_label(label: &str) -> Self {
                label.parse().unwrap_or($name::$default)
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::error::AppError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($label => Ok($name::$variant),)+
                    other => Err($err(format!(
                        "unknown {} '{}', expected one of: {}",
                        stringify!($name),
                        other,
                        [$($label),+].join(", ")
                    ))),
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}
