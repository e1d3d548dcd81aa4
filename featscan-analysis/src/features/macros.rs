//! `define_feature!` macro for reducing boilerplate per detector.

/// Define a unit-struct feature detector.
///
/// The generated `detect` rejects anonymous nodes and nodes whose kind is not
/// listed before running the body.
///
/// Usage:
/// ```ignore
/// define_feature!(
///     /// `() => x`
///     ArrowFunction, "arrow-function", EsEdition::Es2015, ["arrow_function"],
///     "Arrow function expressions",
///     |ctx| Some(Finding::at(&ctx.node))
/// );
/// ```
#[macro_export]
macro_rules! define_feature {
    (
        $(#[$meta:meta])*
        $name:ident, $id:literal, $edition:expr, [$($kind:literal),+ $(,)?], $description:literal,
        |$ctx:ident| $body:expr
    ) => {
        $(#[$meta])*
        pub struct $name;

        impl $crate::features::traits::FeatureDetector for $name {
            fn id(&self) -> &str {
                $id
            }

            fn edition(&self) -> $crate::features::traits::EsEdition {
                $edition
            }

            fn description(&self) -> &str {
                $description
            }

            fn node_kinds(&self) -> &[&str] {
                &[$($kind),+]
            }

            fn detect(
                &self,
                $ctx: &$crate::features::traits::NodeContext<'_, '_>,
            ) -> Option<$crate::features::traits::Finding> {
                if !$ctx.node.is_named() || !matches!($ctx.node.kind(), $($kind)|+) {
                    return None;
                }
                $body
            }
        }
    };
}
