macro_rules! is_inherited {
    (inherited) => {
        true
    };
    (reset) => {
        false
    };
}

macro_rules! properties {
    (
        $(
            $inherited: ident struct $struct_name: ident {
                $(
                    $ident: ident {
                        $name: expr,
                        $ValueType: ty,
                        initial = $initial_value: expr
                    }
                )+
            }
        )+
        @shorthands {
            $(
                $shorthand_name: tt => $ShorthandType: ty {
                    $(
                        $shorthand_field: ident: $longhand_ident: ident,
                    )+
                }
            )+
        }
    ) => {
        use std::rc::Rc;

        /// Every longhand property, in the order they are computed.
        #[derive(Copy, Clone, Debug, Eq, Hash, PartialEq)]
        #[allow(non_camel_case_types)]
        pub enum LonghandId {
            $($(
                $ident,
            )+)+
        }

        impl LonghandId {
            const ALL: &'static [LonghandId] = &[
                $($(
                    LonghandId::$ident,
                )+)+
            ];

            pub fn name(self) -> &'static str {
                match self {
                    $($(
                        LonghandId::$ident => $name,
                    )+)+
                }
            }

            pub fn is_inherited(self) -> bool {
                match self {
                    $($(
                        LonghandId::$ident => is_inherited!($inherited),
                    )+)+
                }
            }

            pub(in crate::style) fn cascade_css_wide_keyword_into(
                self,
                keyword: crate::style::values::CssWideKeyword,
                computed: &mut ComputedValues,
                inherited: &ComputedValues,
            ) {
                match self {
                    $($(
                        LonghandId::$ident => {
                            use crate::style::values::CssWideKeyword;
                            let is_initial = match keyword {
                                CssWideKeyword::Initial => true,
                                CssWideKeyword::Inherit => false,
                                CssWideKeyword::Unset => !is_inherited!($inherited),
                            };
                            Rc::make_mut(&mut computed.$struct_name).$ident =
                            if is_initial {
                                From::from($initial_value)
                            } else {
                                inherited.$struct_name.$ident.clone()
                            };
                        }
                    )+)+
                }
            }
        }

        impl crate::style::property_set::PropertyUniverse for LonghandId {
            const COUNT: usize = LonghandId::ALL.len();

            fn index(self) -> usize {
                self as usize
            }

            fn from_index(index: usize) -> Self {
                LonghandId::ALL[index]
            }
        }

        /// A parsed declaration of a single longhand.
        #[derive(Clone, Debug)]
        #[allow(non_camel_case_types)]
        pub enum LonghandDeclaration {
            $($(
                $ident(<$ValueType as crate::style::values::SpecifiedValue>::SpecifiedValue),
            )+)+
            CssWide(LonghandId, crate::style::values::CssWideKeyword)
        }

        impl LonghandDeclaration {
            pub fn id(&self) -> LonghandId {
                match *self {
                    $($(
                        LonghandDeclaration::$ident(_) => LonghandId::$ident,
                    )+)+
                    LonghandDeclaration::CssWide(id, _) => id,
                }
            }

            pub(in crate::style) fn cascade_into(
                &self,
                computed: &mut ComputedValues,
                inherited: &ComputedValues,
                provider: &dyn crate::style::provider::StyleProvider,
            ) {
                match *self {
                    $($(
                        LonghandDeclaration::$ident(ref value) => {
                            let value = crate::style::values::FromSpecified::from_specified(
                                value,
                                &crate::style::values::CascadeContext {
                                    inherited,
                                    this: computed,
                                    provider,
                                },
                            );
                            Rc::make_mut(&mut computed.$struct_name).$ident = value
                        }
                    )+)+
                    LonghandDeclaration::CssWide(longhand, keyword) => {
                        longhand.cascade_css_wide_keyword_into(keyword, computed, inherited)
                    }
                }
            }
        }

        /// A computed style. Style structs are shared between styles until written to.
        #[derive(Clone, Debug)]
        pub struct ComputedValues {
            $(
                pub $struct_name: Rc<style_structs::$struct_name>,
            )+
        }

        pub mod style_structs {
            use super::*;
            $(
                #[allow(non_camel_case_types)]
                #[derive(Clone, Debug, PartialEq)]
                pub struct $struct_name {
                    $(
                        pub $ident: $ValueType,
                    )+
                }
            )+
        }

        // XXX: if we ever replace Rc with Arc for style structs,
        // replace thread_local! with lazy_static! here.
        thread_local! {
            static INITIAL_VALUES: Rc<ComputedValues> = Rc::new(ComputedValues {
                $(
                    $struct_name: Rc::new(
                        style_structs::$struct_name {
                            $(
                                $ident: From::from($initial_value),
                            )+
                        }
                    ),
                )+
            });
        }

        impl ComputedValues {
            pub fn initial() -> Rc<Self> {
                INITIAL_VALUES.with(|initial| initial.clone())
            }

            pub(crate) fn new_inheriting_from(inherited: &Self, initial: &Self) -> Self {
                macro_rules! select {
                    (inherited) => { inherited };
                    (reset) => { initial };
                }
                ComputedValues {
                    $(
                        $struct_name: Rc::clone(&select!($inherited).$struct_name),
                    )+
                }
            }
        }

        ascii_case_insensitive_phf_map! {
            property_data_by_name -> PropertyData = {
                $($(
                    $name => PropertyData {
                        longhands: &[LonghandId::$ident],
                        parse: |parser, declarations| {
                            let v = crate::style::values::Parse::parse(parser)?;
                            declarations.push(LonghandDeclaration::$ident(v));
                            Ok(())
                        },
                    },
                )+)+
                $(
                    $shorthand_name => PropertyData {
                        longhands: &[
                            $(
                                LonghandId::$longhand_ident,
                            )+
                        ],
                        parse: |parser, declarations| {
                            let value: $ShorthandType = crate::style::values::Parse::parse(parser)?;
                            $(
                                declarations.push(
                                    LonghandDeclaration::$longhand_ident(value.$shorthand_field)
                                );
                            )+
                            Ok(())
                        },
                    },
                )+
            }
        }
    }
}
