//! Turns the winning declarations of a CSS cascade into computed styles.
//!
//! The core is [`CascadeLookup`]: a table with one slot per longhand property and a
//! [`PropertySet`] of the properties that are still missing. Callers `set` the winning
//! declaration of each property they found one for, then `resolve` the lookup into a
//! target style. Resolving consumes the lookup.
//!
//! [`Cascade`] drives a lookup from parsed [`DeclarationBlock`]s, and [`ComputedValues`]
//! is the computed style it produces.

pub mod primitives;
pub mod style;

pub use crate::style::{
    Cascade, CascadeLookup, ComputeValue, ComputedValues, DeclarationBlock, LonghandDeclaration,
    LonghandId, NamedColors, PropertySet, PropertyUniverse, StyleLookup, StyleProvider,
};

#[macro_use]
extern crate cssparser;

#[macro_use]
extern crate style_lookup_internal_proc_macros;

/*

## Specifications

Cascade:
    https://drafts.csswg.org/css-cascade-4/#cascading
    https://drafts.csswg.org/css-cascade-4/#defaulting-keywords

Values and units:
    https://drafts.csswg.org/css-values-3/#lengths

*/
