use cssparser::{CowRcStr, ParseError};

pub type PropertyParseError<'i> = ParseError<'i, PropertyParseErrorKind<'i>>;

#[derive(Debug)]
pub enum PropertyParseErrorKind<'i> {
    UnknownProperty(CowRcStr<'i>),
    UnknownUnit(CowRcStr<'i>),
    Other,
}
