use crate::style::errors::{PropertyParseError, PropertyParseErrorKind};
use crate::style::properties::{property_data_by_name, LonghandDeclaration, PropertyData};
use crate::style::values::{CssWideKeyword, Parse};
use crate::style::StyleLookup;
use cssparser::{AtRuleParser, ParseError, Parser, ParserInput, SourceLocation};
use cssparser::{CowRcStr, DeclarationListParser, DeclarationParser};
use std::iter::repeat;

/// The longhand declarations of one rule or `style` attribute, in source order.
#[derive(Default)]
pub struct DeclarationBlock {
    declarations: Vec<LonghandDeclaration>,
    locations: Vec<SourceLocation>,
    important: smallbitvec::SmallBitVec,
    any_important: bool,
    any_normal: bool,
}

impl DeclarationBlock {
    /// Invalid declarations are dropped, as CSS error recovery requires.
    pub fn parse(parser: &mut Parser) -> Self {
        let mut iter = DeclarationListParser::new(
            parser,
            LonghandDeclarationParser {
                block: DeclarationBlock::default(),
            },
        );
        while let Some(result) = iter.next() {
            if let Err((error, source)) = result {
                log::warn!(
                    "dropped declaration {:?} at {}:{}: {:?}",
                    source,
                    error.location.line,
                    error.location.column,
                    error.kind
                );
            }
            debug_assert_eq!(
                iter.parser.block.declarations.len(),
                iter.parser.block.important.len()
            );
        }
        debug_assert_eq!(
            iter.parser.block.any_normal,
            !iter.parser.block.important.all_true()
        );
        debug_assert_eq!(
            iter.parser.block.any_important,
            !iter.parser.block.important.all_false()
        );
        iter.parser.block
    }

    pub fn parse_str(css: &str) -> Self {
        let mut input = ParserInput::new(css);
        let mut parser = Parser::new(&mut input);
        Self::parse(&mut parser)
    }

    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    /// Declarations with their source location and importance.
    pub fn iter(&self) -> impl Iterator<Item = (&LonghandDeclaration, &SourceLocation, bool)> {
        self.declarations
            .iter()
            .zip(&self.locations)
            .zip(&self.important)
            .map(|((declaration, location), important)| (declaration, location, important))
    }

    pub(super) fn cascade_normal<'a>(&'a self, lookup: &mut StyleLookup<'a>) {
        self.cascade(false, self.any_normal, lookup)
    }

    pub(super) fn cascade_important<'a>(&'a self, lookup: &mut StyleLookup<'a>) {
        self.cascade(true, self.any_important, lookup)
    }

    /// Within a block, the last declaration of a property wins.
    fn cascade<'a>(&'a self, important: bool, any: bool, lookup: &mut StyleLookup<'a>) {
        if any {
            for index in (0..self.declarations.len()).rev() {
                if self.important.get(index) != Some(important) {
                    continue;
                }
                let declaration = &self.declarations[index];
                let id = declaration.id();
                if lookup.is_missing(id) {
                    lookup.set(id, Some(&self.locations[index]), declaration)
                }
            }
        }
    }
}

struct LonghandDeclarationParser {
    block: DeclarationBlock,
}

impl LonghandDeclarationParser {
    /// Pushes the longhands of one declaration and returns its importance.
    /// On error the caller truncates what was pushed.
    fn parse_longhands<'i, 't>(
        &mut self,
        data: &PropertyData,
        parser: &mut Parser<'i, 't>,
    ) -> Result<bool, PropertyParseError<'i>> {
        if let Ok(keyword) = parser.r#try(CssWideKeyword::parse) {
            for &longhand in data.longhands {
                self.block
                    .declarations
                    .push(LonghandDeclaration::CssWide(longhand, keyword));
            }
        } else {
            (data.parse)(parser, &mut self.block.declarations)?
        }
        let important = parser.r#try(cssparser::parse_important).is_ok();
        parser.expect_exhausted()?;
        Ok(important)
    }
}

impl<'i> DeclarationParser<'i> for LonghandDeclarationParser {
    type Declaration = ();
    type Error = PropertyParseErrorKind<'i>;

    fn parse_value<'t>(
        &mut self,
        name: CowRcStr<'i>,
        parser: &mut Parser<'i, 't>,
    ) -> Result<Self::Declaration, ParseError<'i, Self::Error>> {
        let data = match property_data_by_name(&name) {
            Some(data) => data,
            None => {
                return Err(parser.new_custom_error(PropertyParseErrorKind::UnknownProperty(name)))
            }
        };
        let location = parser.current_source_location();
        let previous_len = self.block.declarations.len();
        match self.parse_longhands(data, parser) {
            Ok(important) => {
                let count = self.block.declarations.len() - previous_len;
                assert!(count > 0);
                self.block.locations.extend(repeat(location).take(count));
                self.block.important.extend(repeat(important).take(count));
                *if important {
                    &mut self.block.any_important
                } else {
                    &mut self.block.any_normal
                } = true;
                Ok(())
            }
            Err(error) => {
                self.block.declarations.truncate(previous_len);
                Err(error)
            }
        }
    }
}

impl<'i> AtRuleParser<'i> for LonghandDeclarationParser {
    type PreludeNoBlock = ();
    type PreludeBlock = ();
    type AtRule = ();
    type Error = PropertyParseErrorKind<'i>;
}
