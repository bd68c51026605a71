//! Enumeration metadata
//!
//! A labelled enumeration attaches its descriptions at definition time as a
//! static table, normally with strum's `#[strum(message = "...")]` attribute:
//!
//! ```rust
//! use enum_select::Describe;
//! use strum::{EnumIter, EnumMessage, IntoStaticStr};
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumMessage, IntoStaticStr)]
//! enum Size {
//!     #[strum(message = "Small cup")]
//!     Small = 1,
//!     Large = 2,
//! }
//!
//! impl Describe for Size {
//!     const ENUM_NAME: &'static str = "Size";
//!
//!     fn value(self) -> i32 {
//!         self as i32
//!     }
//!
//!     fn declared_label(self) -> Option<&'static str> {
//!         self.get_message()
//!     }
//! }
//!
//! assert_eq!(Size::Small.resolve_label(), "Small cup");
//! assert_eq!(Size::Large.resolve_label(), "Large");
//! ```

use std::hash::Hash;

use strum::IntoEnumIterator;

/// A closed, integer-backed enumeration with optional per-value labels.
///
/// `IntoEnumIterator` supplies declaration order and `Into<&'static str>`
/// supplies the symbolic name.
pub trait Describe:
    IntoEnumIterator + Into<&'static str> + Copy + Eq + Hash + Send + Sync + 'static
{
    /// Type name used in error messages.
    const ENUM_NAME: &'static str;

    /// Integer backing value.
    fn value(self) -> i32;

    /// Label declared on the variant, if any.
    fn declared_label(self) -> Option<&'static str>;

    /// Symbolic variant name.
    fn name(self) -> &'static str {
        self.into()
    }

    /// Declared label, falling back to the symbolic name. Uncached.
    fn resolve_label(self) -> &'static str {
        self.declared_label().unwrap_or_else(|| self.name())
    }

    /// Cached label via the process-wide lookup.
    fn description(self) -> &'static str {
        crate::lookup::description(self)
    }

    /// All values in declaration order.
    fn variants() -> Vec<Self> {
        Self::iter().collect()
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    //! Small enumerations shared by the unit tests.

    use strum::{EnumIter, EnumMessage, IntoEnumIterator, IntoStaticStr};

    use super::Describe;

    /// Mixed labelled and unlabelled values.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumMessage, IntoStaticStr)]
    pub enum Drink {
        #[strum(message = "Hot coffee")]
        Coffee = 10,
        Tea = 20,
        #[strum(message = "Sparkling water")]
        Water = 30,
    }

    impl Describe for Drink {
        const ENUM_NAME: &'static str = "Drink";

        fn value(self) -> i32 {
            self as i32
        }

        fn declared_label(self) -> Option<&'static str> {
            self.get_message()
        }
    }

    /// Two values share a label; a third is labelled with another's name.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumMessage, IntoStaticStr)]
    pub enum Shade {
        #[strum(message = "Grey")]
        Ash = 1,
        #[strum(message = "Grey")]
        Slate = 2,
        #[strum(message = "Ash")]
        Smoke = 3,
    }

    impl Describe for Shade {
        const ENUM_NAME: &'static str = "Shade";

        fn value(self) -> i32 {
            self as i32
        }

        fn declared_label(self) -> Option<&'static str> {
            self.get_message()
        }
    }

    /// No declared values at all.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub enum Nothing {}

    impl IntoEnumIterator for Nothing {
        type Iterator = std::iter::Empty<Nothing>;

        fn iter() -> Self::Iterator {
            std::iter::empty()
        }
    }

    impl From<Nothing> for &'static str {
        fn from(value: Nothing) -> Self {
            match value {}
        }
    }

    impl Describe for Nothing {
        const ENUM_NAME: &'static str = "Nothing";

        fn value(self) -> i32 {
            match self {}
        }

        fn declared_label(self) -> Option<&'static str> {
            match self {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::{Drink, Nothing, Shade};
    use super::*;

    #[test]
    fn test_resolve_label_prefers_declared_label() {
        assert_eq!(Drink::Coffee.resolve_label(), "Hot coffee");
        assert_eq!(Drink::Water.resolve_label(), "Sparkling water");
    }

    #[test]
    fn test_resolve_label_falls_back_to_name() {
        assert_eq!(Drink::Tea.declared_label(), None);
        assert_eq!(Drink::Tea.resolve_label(), "Tea");
    }

    #[test]
    fn test_variants_in_declaration_order() {
        assert_eq!(
            Drink::variants(),
            vec![Drink::Coffee, Drink::Tea, Drink::Water]
        );
        assert_eq!(
            Shade::variants().iter().map(|s| s.value()).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
    }

    #[test]
    fn test_value_and_name() {
        assert_eq!(Drink::Water.value(), 30);
        assert_eq!(Drink::Water.name(), "Water");
    }

    #[test]
    fn test_empty_enumeration_has_no_variants() {
        assert!(Nothing::variants().is_empty());
    }
}
