use super::{CascadeContext, FromSpecified, Parse, SpecifiedValue};
use crate::primitives::{CssPx, Length as EuclidLength};
use crate::style::errors::{PropertyParseError, PropertyParseErrorKind};
use cssparser::{Parser, Token};

pub type Length = EuclidLength<CssPx>;

/// <https://drafts.csswg.org/css-values/#lengths>
#[derive(Clone, Debug, PartialEq)]
pub enum SpecifiedLength {
    Absolute(Length),
    Em(f32),
}

impl SpecifiedLength {
    fn is_negative(&self) -> bool {
        match *self {
            SpecifiedLength::Absolute(length) => length.get() < 0.,
            SpecifiedLength::Em(value) => value < 0.,
        }
    }
}

impl Parse for SpecifiedLength {
    fn parse<'i, 't>(parser: &mut Parser<'i, 't>) -> Result<Self, PropertyParseError<'i>> {
        match parser.next()? {
            Token::Dimension { value, unit, .. } => match_ignore_ascii_case!(unit,
                "px" => Ok(SpecifiedLength::Absolute(Length::new(*value))),
                "pt" => Ok(SpecifiedLength::Absolute(Length::new(*value * 4. / 3.))),
                "em" => Ok(SpecifiedLength::Em(*value)),
                _ => {
                    let u = unit.clone();
                    Err(parser.new_custom_error(PropertyParseErrorKind::UnknownUnit(u)))
                }
            ),
            Token::Number { value, .. } if *value == 0. => {
                Ok(SpecifiedLength::Absolute(Length::new(0.)))
            }
            token => {
                let t = token.clone();
                Err(parser.new_unexpected_token_error(t))
            }
        }
    }
}

impl SpecifiedValue for Length {
    type SpecifiedValue = SpecifiedLength;
}

/// `em` is relative to the font size being computed, not the parent’s.
impl FromSpecified for Length {
    fn from_specified(s: &SpecifiedLength, context: &CascadeContext) -> Self {
        match *s {
            SpecifiedLength::Absolute(px) => px,
            SpecifiedLength::Em(value) => {
                Length::new(context.this.font.font_size.0.get() * value)
            }
        }
    }
}

/// A length that parsing rejects when negative, as for `padding`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct NonNegativeLength(pub Length);

#[derive(Clone, Debug, PartialEq)]
pub struct SpecifiedNonNegativeLength(pub SpecifiedLength);

impl From<Length> for NonNegativeLength {
    fn from(l: Length) -> Self {
        NonNegativeLength(l)
    }
}

impl Parse for SpecifiedNonNegativeLength {
    fn parse<'i, 't>(parser: &mut Parser<'i, 't>) -> Result<Self, PropertyParseError<'i>> {
        let length = SpecifiedLength::parse(parser)?;
        if length.is_negative() {
            return Err(parser.new_custom_error(PropertyParseErrorKind::Other));
        }
        Ok(SpecifiedNonNegativeLength(length))
    }
}

impl SpecifiedValue for NonNegativeLength {
    type SpecifiedValue = SpecifiedNonNegativeLength;
}

impl FromSpecified for NonNegativeLength {
    fn from_specified(s: &SpecifiedNonNegativeLength, context: &CascadeContext) -> Self {
        NonNegativeLength(Length::from_specified(&s.0, context))
    }
}
