use super::{CascadeContext, FromSpecified, Length, Parse, SpecifiedLength, SpecifiedValue};
use crate::style::errors::{PropertyParseError, PropertyParseErrorKind};
use cssparser::{Parser, Token};

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FontSize(pub Length);

impl From<Length> for FontSize {
    fn from(l: Length) -> Self {
        FontSize(l)
    }
}

/// <https://drafts.csswg.org/css-fonts/#font-size-prop>
#[derive(Clone, Debug, PartialEq)]
pub enum SpecifiedFontSize {
    Length(SpecifiedLength),
    Percentage(f32),
}

impl Parse for SpecifiedFontSize {
    fn parse<'i, 't>(parser: &mut Parser<'i, 't>) -> Result<Self, PropertyParseError<'i>> {
        let size = if let Ok(length) = parser.r#try(SpecifiedLength::parse) {
            SpecifiedFontSize::Length(length)
        } else {
            match parser.next()? {
                Token::Percentage { unit_value, .. } => SpecifiedFontSize::Percentage(*unit_value),
                token => {
                    let t = token.clone();
                    return Err(parser.new_unexpected_token_error(t));
                }
            }
        };
        let negative = match size {
            SpecifiedFontSize::Length(SpecifiedLength::Absolute(l)) => l.get() < 0.,
            SpecifiedFontSize::Length(SpecifiedLength::Em(value)) => value < 0.,
            SpecifiedFontSize::Percentage(value) => value < 0.,
        };
        if negative {
            return Err(parser.new_custom_error(PropertyParseErrorKind::Other));
        }
        Ok(size)
    }
}

impl SpecifiedValue for FontSize {
    type SpecifiedValue = SpecifiedFontSize;
}

/// Relative sizes are relative to the parent’s font size.
impl FromSpecified for FontSize {
    fn from_specified(s: &SpecifiedFontSize, context: &CascadeContext) -> Self {
        let inherited = context.inherited.font.font_size.0.get();
        FontSize(match *s {
            SpecifiedFontSize::Length(SpecifiedLength::Absolute(px)) => px,
            SpecifiedFontSize::Length(SpecifiedLength::Em(value)) => Length::new(inherited * value),
            SpecifiedFontSize::Percentage(value) => Length::new(inherited * value),
        })
    }
}
