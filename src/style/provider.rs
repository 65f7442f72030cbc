use crate::style::values::Length;
use cssparser::RGBA;
use std::collections::HashMap;

/// Settings a style is computed against, beyond its own declarations.
pub trait StyleProvider {
    /// Resolves `@name` color references.
    fn named_color(&self, _name: &str) -> Option<RGBA> {
        None
    }

    /// The font size of a style without a parent, in place of the initial value.
    fn default_font_size(&self) -> Option<Length> {
        None
    }
}

/// Provides nothing: `@name` colors never resolve and the root font size is initial.
impl StyleProvider for () {}

/// A table of named colors, like a theme’s `@define-color` set.
#[derive(Clone, Debug, Default)]
pub struct NamedColors {
    colors: HashMap<String, RGBA>,
    font_size: Option<Length>,
}

impl NamedColors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Names are case-sensitive.
    pub fn with_color(mut self, name: &str, color: RGBA) -> Self {
        self.colors.insert(name.to_owned(), color);
        self
    }

    pub fn with_font_size(mut self, font_size: Length) -> Self {
        self.font_size = Some(font_size);
        self
    }
}

impl StyleProvider for NamedColors {
    fn named_color(&self, name: &str) -> Option<RGBA> {
        self.colors.get(name).cloned()
    }

    fn default_font_size(&self) -> Option<Length> {
        self.font_size
    }
}
