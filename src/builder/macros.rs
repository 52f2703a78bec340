//! Macros for declaring state and event identifiers.

/// Generate a fieldless enum usable as a state or event identifier.
///
/// Each variant is paired with the label used by `Display`, which is what
/// shows up in logs and DOT diagrams.
///
/// # Example
///
/// ```
/// use statenest::fsm_ids;
///
/// fsm_ids! {
///     pub enum Phone {
///         OffHook => "off-hook",
///         Ringing => "ringing",
///         Connected => "connected",
///     }
/// }
///
/// assert_eq!(Phone::OffHook.to_string(), "off-hook");
/// assert_eq!(Phone::Ringing.as_str(), "ringing");
/// ```
#[macro_export]
macro_rules! fsm_ids {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => $label:literal
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $name {
            /// Label used for display.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $label),*
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}
