use cssparser::RGBA;
use style_lookup::style::{ForegroundColor, Length};
use style_lookup::{
    Cascade, CascadeLookup, ComputeValue, ComputedValues, DeclarationBlock, LonghandId,
    PropertySet, PropertyUniverse, StyleLookup, StyleProvider,
};

#[test]
fn set_and_resolve_by_hand() {
    let block = DeclarationBlock::parse_str("color: red");
    let (declaration, location, important) = block.iter().next().unwrap();
    assert!(!important);

    let mut lookup: StyleLookup = CascadeLookup::new(None);
    assert!(lookup.is_missing(LonghandId::color));
    lookup.set(LonghandId::color, Some(location), declaration);
    assert!(!lookup.is_missing(LonghandId::color));
    assert!(lookup.is_missing(LonghandId::font_size));

    let mut style = ComputedValues::clone(&ComputedValues::initial());
    let provider: &dyn StyleProvider = &();
    lookup.resolve(provider, &mut style, None);
    assert_eq!(style.text.color, ForegroundColor(RGBA::new(255, 0, 0, 255)));
    assert_eq!(style.font.font_size.0, Length::new(16.));
}

#[test]
fn cascade_only_fills_what_was_declared() {
    let user_agent = DeclarationBlock::parse_str("display: block; margin: 1em");
    let author = DeclarationBlock::parse_str("margin-top: 0");
    let mut cascade = Cascade::new();
    cascade.push(&user_agent);
    cascade.push(&author);

    let lookup = cascade.lookup(None);
    let declared: Vec<_> = (0..LonghandId::COUNT)
        .map(LonghandId::from_index)
        .filter(|&id| !lookup.is_missing(id))
        .collect();
    assert_eq!(
        declared,
        [
            LonghandId::margin_top,
            LonghandId::margin_right,
            LonghandId::margin_bottom,
            LonghandId::margin_left,
            LonghandId::display,
        ]
    );
}

/// A target that records what it was asked to compute.
#[derive(Default)]
struct Trace(Vec<(LonghandId, bool)>);

impl ComputeValue<LonghandId, DeclarationBlock, (), ()> for Trace {
    fn compute_value(
        &mut self,
        _provider: &(),
        _parent_style: Option<&Self>,
        id: LonghandId,
        value: Option<&DeclarationBlock>,
        _section: Option<&()>,
    ) {
        self.0.push((id, value.is_some()))
    }
}

#[test]
fn targets_other_than_computed_values() {
    let block = DeclarationBlock::default();
    let relevant: PropertySet<LonghandId> = vec![LonghandId::opacity, LonghandId::color]
        .into_iter()
        .collect();
    let mut lookup = CascadeLookup::new(Some(&relevant));
    lookup.set(LonghandId::opacity, None, &block);

    let mut trace = Trace::default();
    lookup.resolve(&(), &mut trace, None);
    assert_eq!(
        trace.0,
        [(LonghandId::color, false), (LonghandId::opacity, true)]
    );
}
