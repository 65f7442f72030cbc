use smallbitvec::SmallBitVec;
use std::fmt;
use std::iter::FromIterator;
use std::marker::PhantomData;

/// A fixed, enumerated set of style properties.
///
/// Indices are dense: every value in `0..COUNT` maps to exactly one property.
pub trait PropertyUniverse: Copy + fmt::Debug {
    const COUNT: usize;

    fn index(self) -> usize;

    /// Panics if `index >= COUNT`.
    fn from_index(index: usize) -> Self;
}

/// One bit per property of `Id`.
///
/// Inside a lookup a set bit means the property is still missing a winning
/// declaration. As a relevance filter, a set bit means the property may apply at all.
#[derive(Clone, PartialEq, Eq)]
pub struct PropertySet<Id> {
    bits: SmallBitVec,
    universe: PhantomData<Id>,
}

impl<Id: PropertyUniverse> PropertySet<Id> {
    /// A copy of `relevant`, or every property if there is no filter.
    pub fn new(relevant: Option<&Self>) -> Self {
        match relevant {
            Some(relevant) => relevant.clone(),
            None => Self::all(),
        }
    }

    pub fn all() -> Self {
        Self::from_bits(SmallBitVec::from_elem(Id::COUNT, true))
    }

    pub fn empty() -> Self {
        Self::from_bits(SmallBitVec::from_elem(Id::COUNT, false))
    }

    fn from_bits(bits: SmallBitVec) -> Self {
        PropertySet {
            bits,
            universe: PhantomData,
        }
    }

    pub fn is_missing(&self, id: Id) -> bool {
        self.bits.get(self.checked_index(id)) == Some(true)
    }

    pub fn insert(&mut self, id: Id) {
        let index = self.checked_index(id);
        self.bits.set(index, true)
    }

    pub fn clear(&mut self, id: Id) {
        let index = self.checked_index(id);
        self.bits.set(index, false)
    }

    pub fn is_empty(&self) -> bool {
        self.bits.all_false()
    }

    pub fn iter<'a>(&'a self) -> impl Iterator<Item = Id> + 'a {
        self.bits
            .iter()
            .enumerate()
            .filter(|&(_, bit)| bit)
            .map(|(index, _)| Id::from_index(index))
    }

    fn checked_index(&self, id: Id) -> usize {
        let index = id.index();
        assert!(
            index < self.bits.len(),
            "property {:?} has index {} outside of a universe of {}",
            id,
            index,
            self.bits.len()
        );
        index
    }
}

impl<Id: PropertyUniverse> FromIterator<Id> for PropertySet<Id> {
    fn from_iter<I: IntoIterator<Item = Id>>(iter: I) -> Self {
        let mut set = Self::empty();
        for id in iter {
            set.insert(id)
        }
        set
    }
}

impl<Id: PropertyUniverse> fmt::Debug for PropertySet<Id> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    #[derive(Copy, Clone, Debug, PartialEq, Eq)]
    pub(crate) enum Abc {
        A,
        B,
        C,
    }

    impl PropertyUniverse for Abc {
        const COUNT: usize = 3;

        fn index(self) -> usize {
            self as usize
        }

        fn from_index(index: usize) -> Self {
            [Abc::A, Abc::B, Abc::C][index]
        }
    }

    #[test]
    fn unfiltered_is_all_missing() {
        let set = PropertySet::<Abc>::new(None);
        assert!(set.is_missing(Abc::A));
        assert!(set.is_missing(Abc::B));
        assert!(set.is_missing(Abc::C));
        assert_eq!(set, PropertySet::all());
    }

    #[test]
    fn filtered_copies_relevant() {
        let relevant: PropertySet<Abc> = vec![Abc::B].into_iter().collect();
        let set = PropertySet::new(Some(&relevant));
        assert!(!set.is_missing(Abc::A));
        assert!(set.is_missing(Abc::B));
        assert!(!set.is_missing(Abc::C));
        assert_eq!(set.iter().collect::<Vec<_>>(), [Abc::B]);
    }

    #[test]
    fn clear_is_idempotent() {
        let mut set = PropertySet::<Abc>::all();
        set.clear(Abc::C);
        set.clear(Abc::C);
        assert!(!set.is_missing(Abc::C));
        assert_eq!(set.iter().collect::<Vec<_>>(), [Abc::A, Abc::B]);
        set.clear(Abc::A);
        set.clear(Abc::B);
        assert!(set.is_empty());
        assert_eq!(format!("{:?}", set), "{}");
    }

    #[derive(Copy, Clone, Debug)]
    struct Lying;

    impl PropertyUniverse for Lying {
        const COUNT: usize = 1;

        fn index(self) -> usize {
            7
        }

        fn from_index(_: usize) -> Self {
            Lying
        }
    }

    #[test]
    #[should_panic(expected = "outside of a universe of 1")]
    fn out_of_range_index_fails_fast() {
        PropertySet::<Lying>::all().is_missing(Lying);
    }
}
