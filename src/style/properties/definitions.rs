use super::PropertyData;
use crate::style::values::*;
use cssparser::RGBA;

// Properties are computed in this order:
// `font-size` and `color` must come first, other values are relative to them.
properties! {
    inherited struct font {
        font_size { "font-size", FontSize, initial = Length::new(16.) }
    }

    inherited struct text {
        color { "color", ForegroundColor, initial = BLACK }
    }

    reset struct background {
        background_color { "background-color", RGBA, initial = TRANSPARENT }
    }

    reset struct effects {
        opacity { "opacity", Opacity, initial = Opacity(1.) }
    }

    reset struct margin {
        margin_top { "margin-top", Length, initial = Length::new(0.) }
        margin_right { "margin-right", Length, initial = Length::new(0.) }
        margin_bottom { "margin-bottom", Length, initial = Length::new(0.) }
        margin_left { "margin-left", Length, initial = Length::new(0.) }
    }

    reset struct padding {
        padding_top { "padding-top", NonNegativeLength, initial = Length::new(0.) }
        padding_right { "padding-right", NonNegativeLength, initial = Length::new(0.) }
        padding_bottom { "padding-bottom", NonNegativeLength, initial = Length::new(0.) }
        padding_left { "padding-left", NonNegativeLength, initial = Length::new(0.) }
    }

    reset struct box_ {
        display { "display", Display, initial = Display::INITIAL }
    }

    @shorthands {
        "margin" => FourSides<SpecifiedLength> {
            top: margin_top,
            right: margin_right,
            bottom: margin_bottom,
            left: margin_left,
        }
        "padding" => FourSides<SpecifiedNonNegativeLength> {
            top: padding_top,
            right: padding_right,
            bottom: padding_bottom,
            left: padding_left,
        }
    }
}
