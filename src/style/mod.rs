mod cascade;
mod declaration_block;
mod errors;
mod lookup;
mod properties;
mod property_set;
mod provider;
pub(crate) mod values;

pub use self::cascade::Cascade;
pub use self::declaration_block::DeclarationBlock;
pub use self::errors::{PropertyParseError, PropertyParseErrorKind};
pub use self::lookup::{CascadeLookup, ComputeValue};
pub use self::properties::{style_structs, ComputedValues, LonghandDeclaration, LonghandId};
pub use self::property_set::{PropertySet, PropertyUniverse};
pub use self::provider::{NamedColors, StyleProvider};
pub use self::values::{CssWideKeyword, Display, FontSize, ForegroundColor, Length, Opacity};

/// The lookup filled by [`Cascade`]: winning declarations with the source location
/// they were parsed at.
pub type StyleLookup<'a> =
    CascadeLookup<'a, LonghandId, LonghandDeclaration, cssparser::SourceLocation>;
