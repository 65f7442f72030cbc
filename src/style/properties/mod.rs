use crate::style::errors::PropertyParseError;
use crate::style::lookup::ComputeValue;
use crate::style::provider::StyleProvider;
use crate::style::values::{CssWideKeyword, FontSize};
use cssparser::{Parser, SourceLocation};
use std::rc::Rc;

#[macro_use]
mod macros;
mod definitions;

pub(super) use self::definitions::property_data_by_name;
pub use self::definitions::{style_structs, ComputedValues, LonghandDeclaration, LonghandId};

type FnParseProperty = for<'i, 't> fn(
    &mut Parser<'i, 't>,
    &mut Vec<LonghandDeclaration>,
) -> Result<(), PropertyParseError<'i>>;

pub struct PropertyData {
    pub(in crate::style) longhands: &'static [LonghandId],
    pub(in crate::style) parse: FnParseProperty,
}

impl ComputedValues {
    /// Inherited properties from `parent_style`, initial values for the rest.
    pub fn anonymous_inheriting_from(parent_style: &Self) -> Rc<Self> {
        Rc::new(Self::new_inheriting_from(parent_style, &Self::initial()))
    }

    /// What a style without a parent inherits and `em`s from.
    pub(in crate::style) fn root(provider: &dyn StyleProvider) -> Rc<Self> {
        let mut root = Self::initial();
        if let Some(font_size) = provider.default_font_size() {
            Rc::make_mut(&mut Rc::make_mut(&mut root).font).font_size = FontSize(font_size);
        }
        root
    }
}

/// Declared values are computed against the parent style. Missing properties behave
/// like `unset`: inherited properties take the parent’s value, others their initial value.
impl<'p> ComputeValue<LonghandId, LonghandDeclaration, SourceLocation, dyn StyleProvider + 'p>
    for ComputedValues
{
    fn compute_value(
        &mut self,
        provider: &(dyn StyleProvider + 'p),
        parent_style: Option<&Self>,
        id: LonghandId,
        value: Option<&LonghandDeclaration>,
        section: Option<&SourceLocation>,
    ) {
        // `Cascade::finish` passes the root as parent, so this is only hit by direct callers.
        let root;
        let inherited = match parent_style {
            Some(parent_style) => parent_style,
            None => {
                root = Self::root(provider);
                &*root
            }
        };
        match value {
            Some(declaration) => {
                debug_assert_eq!(declaration.id(), id);
                match section {
                    Some(location) => log::trace!(
                        "{}: declared at {}:{}",
                        id.name(),
                        location.line,
                        location.column
                    ),
                    None => log::trace!("{}: declared", id.name()),
                }
                declaration.cascade_into(self, inherited, provider)
            }
            None => {
                log::trace!("{}: missing", id.name());
                id.cascade_css_wide_keyword_into(CssWideKeyword::Unset, self, inherited)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::property_set::PropertyUniverse;

    #[test]
    fn ids_are_dense_and_ordered() {
        assert_eq!(LonghandId::COUNT, 13);
        for index in 0..LonghandId::COUNT {
            assert_eq!(LonghandId::from_index(index).index(), index);
        }
        assert_eq!(LonghandId::from_index(0), LonghandId::font_size);
        assert_eq!(LonghandId::from_index(1), LonghandId::color);
    }

    #[test]
    fn names_and_inheritance() {
        assert_eq!(LonghandId::background_color.name(), "background-color");
        assert!(LonghandId::font_size.is_inherited());
        assert!(LonghandId::color.is_inherited());
        assert!(!LonghandId::margin_left.is_inherited());
        assert!(!LonghandId::display.is_inherited());
    }

    #[test]
    fn lookup_by_name() {
        let margin = property_data_by_name("MARGIN").map(|data| data.longhands);
        assert_eq!(
            margin,
            Some(
                &[
                    LonghandId::margin_top,
                    LonghandId::margin_right,
                    LonghandId::margin_bottom,
                    LonghandId::margin_left,
                ][..]
            )
        );
        assert!(property_data_by_name("border").is_none());
    }
}
