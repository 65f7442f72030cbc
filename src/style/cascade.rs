use crate::style::declaration_block::DeclarationBlock;
use crate::style::lookup::CascadeLookup;
use crate::style::properties::{ComputedValues, LonghandId};
use crate::style::property_set::PropertySet;
use crate::style::provider::StyleProvider;
use crate::style::StyleLookup;
use smallvec::SmallVec;
use std::rc::Rc;

/// The declaration blocks that apply to one element, and how they combine.
///
/// Blocks are pushed in increasing precedence: user agent rules, then author rules
/// sorted by specificity, then the `style` attribute.
#[derive(Default)]
pub struct Cascade<'a> {
    matching: SmallVec<[&'a DeclarationBlock; 32]>,
}

impl<'a> Cascade<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, block: &'a DeclarationBlock) {
        self.matching.push(block)
    }

    /// Picks the winning declaration of every relevant property.
    ///
    /// `!important` declarations win over normal ones.
    /// Otherwise the block pushed last wins.
    pub fn lookup(&self, relevant: Option<&PropertySet<LonghandId>>) -> StyleLookup<'a> {
        let mut lookup = CascadeLookup::new(relevant);
        for &block in self.matching.iter().rev() {
            block.cascade_important(&mut lookup)
        }
        for &block in self.matching.iter().rev() {
            block.cascade_normal(&mut lookup)
        }
        lookup
    }

    /// Properties outside of `relevant` keep their initial value.
    pub fn finish(
        self,
        provider: &dyn StyleProvider,
        parent_style: Option<&ComputedValues>,
        relevant: Option<&PropertySet<LonghandId>>,
    ) -> Rc<ComputedValues> {
        let lookup = self.lookup(relevant);
        let root;
        let parent_style = match parent_style {
            Some(parent_style) => parent_style,
            None => {
                root = ComputedValues::root(provider);
                &*root
            }
        };
        let mut style = ComputedValues::clone(&ComputedValues::initial());
        lookup.resolve(provider, &mut style, Some(parent_style));
        Rc::new(style)
    }
}
