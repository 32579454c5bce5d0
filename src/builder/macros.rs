//! Macros for ergonomic automaton construction.

/// Generate a state identifier enum with its `StateId` implementation.
///
/// The enum derives `Clone`, `Copy`, `PartialEq`, `Eq`, `Hash`, `Debug`,
/// `Serialize` and `Deserialize`, and names each variant after itself.
/// The calling crate needs `serde` with the `derive` feature.
///
/// # Example
///
/// ```
/// use pushdown::core::StateId;
/// use pushdown::state_id;
///
/// state_id! {
///     pub enum BossPhase {
///         Dormant,
///         Awake,
///         Enraged,
///     }
/// }
///
/// assert_eq!(BossPhase::Enraged.name(), "Enraged");
/// ```
#[macro_export]
macro_rules! state_id {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            Debug,
            serde::Serialize,
            serde::Deserialize
        )]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::StateId for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }
        }
    };
}
