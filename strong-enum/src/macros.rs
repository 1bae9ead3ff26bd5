/// Declares the tags of an enum together with its [`StrongEnum`](crate::StrongEnum) type.
///
/// Each case becomes a [`tag!`](crate::tag) unit struct and the enum name
/// becomes an alias for `StrongEnum<scalar, type_list![cases...]>`. On top of
/// what [`StrongEnum`](crate::StrongEnum) offers, the generated type
/// converts from each of its tags with [`From`] and compares with them in
/// both directions with `==` and `!=`.
///
/// ```
/// use strong_enum::strong_enum;
///
/// strong_enum! {
///     /// Direction of a transfer.
///     pub enum Direction: u8 {
///         Upload = 0x01,
///         Download = 0x02,
///     }
/// }
///
/// let dir: Direction = Download.into();
/// assert!(dir == Download);
/// assert!(Upload != dir);
/// assert_eq!(0x02, dir.value());
/// assert_eq!(Ok(dir), Direction::from_value(0x02));
/// assert!(Direction::from_value(0x03).is_err());
/// ```
///
/// Tags of another enum, and raw scalars, cannot be compared with it:
///
/// ```compile_fail
/// use strong_enum::strong_enum;
///
/// strong_enum! {
///     enum Direction: u8 { Upload = 0x01, Download = 0x02 }
/// }
/// strong_enum! {
///     enum Mode: u8 { Fast = 0x01 }
/// }
///
/// let _ = Direction::new(Upload) == Fast;
/// ```
///
/// ```compile_fail
/// use strong_enum::strong_enum;
///
/// strong_enum! {
///     enum Direction: u8 { Upload = 0x01, Download = 0x02 }
/// }
///
/// let _ = Direction::new(Upload) == 0x01;
/// ```
///
/// ```compile_fail
/// use strong_enum::strong_enum;
///
/// strong_enum! {
///     enum Direction: u8 { Upload = 0x01, Download = 0x02 }
/// }
/// strong_enum! {
///     enum Mode: u8 { Fast = 0x01 }
/// }
///
/// let _: Direction = Fast.into();
/// ```
#[macro_export]
macro_rules! strong_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident : $t:ty {
            $(
                $(#[$tag_meta:meta])*
                $tag:ident = $value:expr
            ),+ $(,)?
        }
    ) => {
        $crate::tag! {
            $(
                $(#[$tag_meta])*
                $vis struct $tag: $t = $value;
            )+
        }

        $(#[$meta])*
        $vis type $name = $crate::StrongEnum<$t, $crate::type_list![$($tag),+]>;

        $(
            impl ::core::convert::From<$tag> for $name {
                #[inline]
                fn from(tag: $tag) -> $name {
                    <$name>::new(tag)
                }
            }

            impl ::core::cmp::PartialEq<$tag> for $name {
                #[inline]
                fn eq(&self, other: &$tag) -> bool {
                    self.is(*other)
                }
            }

            impl ::core::cmp::PartialEq<$name> for $tag {
                #[inline]
                fn eq(&self, other: &$name) -> bool {
                    other.is(*self)
                }
            }
        )+
    };
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use crate::error::InvalidEnumValue;
    use crate::tag::Tag;

    crate::strong_enum! {
        enum TestEnum: i32 {
            EnumValue1 = 1,
            EnumValue2 = 2,
        }
    }

    #[test]
    fn operators_against_tags() {
        let ev1 = TestEnum::from(EnumValue1);
        let ev2: TestEnum = EnumValue2.into();
        assert!(ev1 == EnumValue1);
        assert!(EnumValue1 == ev1);
        assert!(ev1 != EnumValue2);
        assert!(EnumValue2 != ev1);
        assert!(ev2 == EnumValue2);
        assert!(ev1 != ev2);
    }

    #[rstest]
    #[case::first(1, TestEnum::from(EnumValue1))]
    #[case::second(2, TestEnum::from(EnumValue2))]
    fn from_value(#[case] raw: i32, #[case] expected: TestEnum) {
        assert_eq!(Ok(expected), TestEnum::from_value(raw));
    }

    #[rstest]
    #[case::past_end(3)]
    #[case::zero(0)]
    #[case::negative(-1)]
    fn from_value_invalid(#[case] raw: i32) {
        assert_eq!(Err(InvalidEnumValue(raw)), TestEnum::from_value(raw));
    }

    #[test]
    fn tag_values() {
        assert_eq!(1, EnumValue1::VALUE);
        assert_eq!(2, EnumValue2::VALUE);
    }

    crate::strong_enum! {
        enum Single: u8 { Only = 9 }
    }

    #[test]
    fn single_case() {
        assert!(Single::from_value(9).unwrap() == Only);
        assert!(Single::from_value(8).is_err());
    }
}
