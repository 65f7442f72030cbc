/// <https://drafts.csswg.org/css-display-3/#the-display-properties>
#[derive(Copy, Clone, Debug, Eq, Parse, PartialEq, SpecifiedAsComputed)]
pub enum Display {
    Inline,
    Block,
    InlineBlock,
    None,
}

impl Display {
    pub const INITIAL: Self = Display::Inline;
}
