use crate::style::property_set::{PropertySet, PropertyUniverse};

/// Converts a winning declaration (or its absence) into a computed value.
///
/// Implemented by the style being built. `value` and `section` are both `None`
/// for a property that is relevant but was never declared: the implementation is
/// expected to inherit or default it.
pub trait ComputeValue<Id, V, S, P: ?Sized> {
    fn compute_value(
        &mut self,
        provider: &P,
        parent_style: Option<&Self>,
        id: Id,
        value: Option<&V>,
        section: Option<&S>,
    );
}

/// The winning declaration of each property, for one style computation.
///
/// Values and sections are borrowed, not copied, and must outlive the lookup.
/// A property can be `set` at most once, and only while it is missing.
pub struct CascadeLookup<'a, Id, V, S> {
    missing: PropertySet<Id>,
    values: Box<[Option<Winner<'a, V, S>>]>,
}

struct Winner<'a, V, S> {
    value: &'a V,
    section: Option<&'a S>,
}

impl<'a, Id, V, S> CascadeLookup<'a, Id, V, S>
where
    Id: PropertyUniverse,
{
    /// Properties outside of `relevant` are never missing, and `resolve` skips them.
    pub fn new(relevant: Option<&PropertySet<Id>>) -> Self {
        CascadeLookup {
            missing: PropertySet::new(relevant),
            values: (0..Id::COUNT).map(|_| None).collect(),
        }
    }

    pub fn is_missing(&self, id: Id) -> bool {
        self.missing.is_missing(id)
    }

    /// Records the winning declaration for `id`.
    ///
    /// Panics if `id` is not missing: it either already has a winner,
    /// or was filtered out as irrelevant.
    pub fn set(&mut self, id: Id, section: Option<&'a S>, value: &'a V) {
        assert!(
            self.missing.is_missing(id),
            "{:?} already has a winning declaration or is not relevant",
            id
        );
        self.missing.clear(id);
        self.values[id.index()] = Some(Winner { value, section });
    }

    /// Computes every relevant property into `style`, in increasing id order.
    pub fn resolve<T, P>(self, provider: &P, style: &mut T, parent_style: Option<&T>)
    where
        T: ComputeValue<Id, V, S, P>,
        P: ?Sized,
    {
        let mut computed = 0;
        for (index, slot) in self.values.iter().enumerate() {
            let id = Id::from_index(index);
            if slot.is_some() || self.missing.is_missing(id) {
                let (value, section) = match slot {
                    Some(winner) => (Some(winner.value), winner.section),
                    None => (None, None),
                };
                style.compute_value(provider, parent_style, id, value, section);
                computed += 1;
            }
            // else not a relevant property
        }
        log::debug!(
            "resolved {} properties, {} irrelevant",
            computed,
            Id::COUNT - computed
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::property_set::tests::Abc;

    #[derive(Debug, PartialEq)]
    struct Call {
        id: Abc,
        value: Option<&'static str>,
        section: Option<u32>,
        with_parent: bool,
    }

    #[derive(Default)]
    struct Recorder {
        calls: Vec<Call>,
    }

    impl ComputeValue<Abc, &'static str, u32, ()> for Recorder {
        fn compute_value(
            &mut self,
            _provider: &(),
            parent_style: Option<&Self>,
            id: Abc,
            value: Option<&&'static str>,
            section: Option<&u32>,
        ) {
            self.calls.push(Call {
                id,
                value: value.copied(),
                section: section.copied(),
                with_parent: parent_style.is_some(),
            })
        }
    }

    fn call(id: Abc, value: Option<&'static str>, section: Option<u32>) -> Call {
        Call {
            id,
            value,
            section,
            with_parent: false,
        }
    }

    #[test]
    fn unfiltered_resolves_every_property_in_order() {
        let value_a = "a";
        let section: u32 = 12;
        let mut lookup = CascadeLookup::new(None);
        lookup.set(Abc::A, Some(&section), &value_a);

        let mut style = Recorder::default();
        lookup.resolve(&(), &mut style, None);
        assert_eq!(
            style.calls,
            [
                call(Abc::A, Some("a"), Some(12)),
                call(Abc::B, None, None),
                call(Abc::C, None, None),
            ]
        );
    }

    #[test]
    fn irrelevant_properties_are_skipped() {
        let value_a = "a";
        let relevant: PropertySet<Abc> = vec![Abc::A].into_iter().collect();
        let mut lookup = CascadeLookup::<_, _, u32>::new(Some(&relevant));
        assert!(lookup.is_missing(Abc::A));
        assert!(!lookup.is_missing(Abc::B));
        assert!(!lookup.is_missing(Abc::C));
        lookup.set(Abc::A, None, &value_a);

        let mut style = Recorder::default();
        lookup.resolve(&(), &mut style, None);
        assert_eq!(style.calls, [call(Abc::A, Some("a"), None)]);
    }

    #[test]
    fn irrelevant_and_unset_resolves_nothing() {
        let lookup = CascadeLookup::<Abc, &'static str, u32>::new(Some(&PropertySet::empty()));
        let mut style = Recorder::default();
        lookup.resolve(&(), &mut style, None);
        assert!(style.calls.is_empty());
    }

    #[test]
    fn set_in_any_order() {
        let (b, c) = ("b", "c");
        let mut lookup = CascadeLookup::<_, _, u32>::new(None);
        lookup.set(Abc::C, None, &c);
        assert!(lookup.is_missing(Abc::B));
        lookup.set(Abc::B, None, &b);
        assert!(!lookup.is_missing(Abc::B));
        assert!(!lookup.is_missing(Abc::C));
        assert!(lookup.is_missing(Abc::A));

        let parent = Recorder::default();
        let mut style = Recorder::default();
        lookup.resolve(&(), &mut style, Some(&parent));
        let ids: Vec<_> = style.calls.iter().map(|call| call.id).collect();
        assert_eq!(ids, [Abc::A, Abc::B, Abc::C]);
        assert!(style.calls.iter().all(|call| call.with_parent));
        assert_eq!(style.calls[2].value, Some("c"));
    }

    #[test]
    fn no_filter_is_a_filter_with_everything() {
        let everything: PropertySet<Abc> = vec![Abc::A, Abc::B, Abc::C].into_iter().collect();
        let resolve = |relevant: Option<&PropertySet<Abc>>| {
            let lookup = CascadeLookup::<_, &'static str, u32>::new(relevant);
            let mut style = Recorder::default();
            lookup.resolve(&(), &mut style, None);
            style.calls
        };
        assert_eq!(resolve(None), resolve(Some(&everything)));
    }

    #[test]
    #[should_panic(expected = "already has a winning declaration")]
    fn double_set_fails_fast() {
        let (first, second) = ("first", "second");
        let mut lookup = CascadeLookup::<_, _, u32>::new(None);
        lookup.set(Abc::B, None, &first);
        lookup.set(Abc::B, None, &second);
    }

    #[test]
    fn double_set_keeps_the_first_winner() {
        use std::panic::{catch_unwind, AssertUnwindSafe};

        let (first, second) = ("first", "second");
        let (first_section, second_section): (u32, u32) = (1, 2);
        let mut lookup = CascadeLookup::new(None);
        lookup.set(Abc::B, Some(&first_section), &first);
        let result = catch_unwind(AssertUnwindSafe(|| {
            lookup.set(Abc::B, Some(&second_section), &second)
        }));
        assert!(result.is_err());
        assert!(!lookup.is_missing(Abc::B));

        let mut style = Recorder::default();
        lookup.resolve(&(), &mut style, None);
        assert_eq!(style.calls[1], call(Abc::B, Some("first"), Some(1)));
    }

    #[test]
    #[should_panic(expected = "not relevant")]
    fn setting_an_irrelevant_property_fails_fast() {
        let value = "value";
        let mut lookup = CascadeLookup::<_, _, u32>::new(Some(&PropertySet::empty()));
        lookup.set(Abc::A, None, &value);
    }
}
