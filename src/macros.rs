/// Generate `ALL`, `as_str`, `Display`, `From<T> for String` and
/// `TryFrom<String> for T` for a closed vocabulary enum whose serialized form
/// is its display label.
///
/// The enum must carry `#[serde(into = "String", try_from = "String")]` and
/// derive `Clone`. Unknown labels are rejected.
macro_rules! label_enum {
    ($name:ident { $($variant:ident => $label:literal),+ $(,)? }) => {
        impl $name {
            /// Every variant in declaration order
            pub const ALL: &'static [$name] = &[$($name::$variant,)+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $label,)+
                }
            }

            pub fn from_label(s: &str) -> Option<Self> {
                match s {
                    $($label => Some($name::$variant),)+
                    _ => None,
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl From<$name> for String {
            fn from(v: $name) -> Self {
                v.as_str().to_string()
            }
        }

        impl TryFrom<String> for $name {
            type Error = String;

            fn try_from(s: String) -> Result<Self, Self::Error> {
                $name::from_label(&s).ok_or_else(|| format!("unknown {}: {s}", stringify!($name)))
            }
        }
    };
}
