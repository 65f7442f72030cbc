use super::{CascadeContext, FromSpecified, Parse, SpecifiedValue};
use crate::style::errors::PropertyParseError;
use cssparser::Parser;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Number(pub f32);

impl Parse for Number {
    fn parse<'i, 't>(parser: &mut Parser<'i, 't>) -> Result<Self, PropertyParseError<'i>> {
        Ok(Number(parser.expect_number()?))
    }
}

/// <https://drafts.csswg.org/css-color/#transparency>
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Opacity(pub f32);

impl From<f32> for Opacity {
    fn from(value: f32) -> Self {
        Opacity(value)
    }
}

impl SpecifiedValue for Opacity {
    type SpecifiedValue = Number;
}

/// Out-of-range values are valid, and clamped when computed.
impl FromSpecified for Opacity {
    fn from_specified(specified: &Number, _context: &CascadeContext) -> Self {
        Opacity(specified.0.max(0.).min(1.))
    }
}
