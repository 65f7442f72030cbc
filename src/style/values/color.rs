use super::{CascadeContext, FromSpecified, Parse, SpecifiedValue};
use crate::style::errors::PropertyParseError;
use cssparser::{Color, CowRcStr, Parser, Token, RGBA};

pub const BLACK: RGBA = RGBA {
    red: 0,
    green: 0,
    blue: 0,
    alpha: 255,
};

pub const TRANSPARENT: RGBA = RGBA {
    red: 0,
    green: 0,
    blue: 0,
    alpha: 0,
};

/// A CSS color, or a `@name` reference resolved by the style provider.
#[derive(Clone, Debug, PartialEq)]
pub enum SpecifiedColor {
    Color(Color),
    Named(String),
}

impl Parse for SpecifiedColor {
    fn parse<'i, 't>(parser: &mut Parser<'i, 't>) -> Result<Self, PropertyParseError<'i>> {
        let named = parser.r#try(|parser| -> Result<CowRcStr<'i>, PropertyParseError<'i>> {
            match parser.next()? {
                Token::AtKeyword(name) => Ok(name.clone()),
                token => {
                    let t = token.clone();
                    Err(parser.new_unexpected_token_error(t))
                }
            }
        });
        if let Ok(name) = named {
            return Ok(SpecifiedColor::Named(String::from(&*name)));
        }
        Ok(SpecifiedColor::Color(Color::parse(parser)?))
    }
}

impl SpecifiedColor {
    /// `None` for `currentColor`.
    fn to_rgba(&self, context: &CascadeContext, fallback: RGBA) -> Option<RGBA> {
        match *self {
            SpecifiedColor::Color(Color::RGBA(rgba)) => Some(rgba),
            SpecifiedColor::Color(Color::CurrentColor) => None,
            SpecifiedColor::Named(ref name) => Some(
                context.provider.named_color(name).unwrap_or_else(|| {
                    log::warn!("unknown named color @{}", name);
                    fallback
                }),
            ),
        }
    }
}

/// The computed `color` property.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ForegroundColor(pub RGBA);

impl From<RGBA> for ForegroundColor {
    fn from(rgba: RGBA) -> Self {
        ForegroundColor(rgba)
    }
}

impl SpecifiedValue for ForegroundColor {
    type SpecifiedValue = SpecifiedColor;
}

/// `currentColor` in `color` is the parent’s color.
impl FromSpecified for ForegroundColor {
    fn from_specified(specified: &SpecifiedColor, context: &CascadeContext) -> Self {
        ForegroundColor(
            specified
                .to_rgba(context, BLACK)
                .unwrap_or(context.inherited.text.color.0),
        )
    }
}

impl SpecifiedValue for RGBA {
    type SpecifiedValue = SpecifiedColor;
}

/// Other color properties compute `currentColor` to this style’s own `color`.
impl FromSpecified for RGBA {
    fn from_specified(specified: &SpecifiedColor, context: &CascadeContext) -> Self {
        specified
            .to_rgba(context, TRANSPARENT)
            .unwrap_or(context.this.text.color.0)
    }
}
