// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Helper macros shared by the model types.

/// Give a fieldless enum a stable lowercase label.
///
/// Expands to an inherent `as_str` and a `Display` impl that writes it, so
/// the label used in logs and on the command line cannot drift from the
/// one used in rendered reports.
///
/// ```ignore
/// crate::labels! {
///     SuiteKind {
///         Api => "api",
///         Stability => "stability",
///     }
/// }
/// ```
#[macro_export]
macro_rules! labels {
    ($name:ident { $( $variant:ident => $label:literal ),+ $(,)? }) => {
        impl $name {
            pub fn as_str(self) -> &'static str {
                match self {
                    $( $name::$variant => $label, )+
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
