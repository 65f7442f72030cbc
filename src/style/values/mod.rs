use crate::style::errors::PropertyParseError;
use crate::style::properties::ComputedValues;
use crate::style::provider::StyleProvider;
use cssparser::Parser;

mod box_;
mod color;
mod effects;
mod fonts;
mod generic;
mod length;

pub(super) use self::generic::*;
pub use self::{box_::*, color::*, effects::*, fonts::*, length::*};

pub(crate) trait Parse: Sized {
    fn parse<'i, 't>(parser: &mut Parser<'i, 't>) -> Result<Self, PropertyParseError<'i>>;
}

/// What a specified value is computed against.
pub struct CascadeContext<'a> {
    /// The parent style, or the root defaults when there is no parent.
    pub inherited: &'a ComputedValues,
    /// The style being computed, holding every property with a lower id.
    pub this: &'a ComputedValues,
    pub provider: &'a dyn StyleProvider,
}

pub trait SpecifiedValue {
    type SpecifiedValue;
}

pub trait FromSpecified: SpecifiedValue {
    fn from_specified(specified: &Self::SpecifiedValue, context: &CascadeContext) -> Self;
}

/// <https://drafts.csswg.org/css-cascade-4/#defaulting-keywords>
#[derive(Copy, Clone, Debug, Eq, Parse, PartialEq)]
pub enum CssWideKeyword {
    Inherit,
    Initial,
    Unset,
}
