use std::fmt;

/// A zero sized marker type carrying a single constant.
///
/// Tags are the cases of a [`StrongEnum`](crate::StrongEnum). Their identity
/// is nominal: two tags declared separately are different types even when
/// they carry the same value.
pub trait Tag: Copy + fmt::Debug + 'static {
    /// Scalar type of the carried constant.
    type Value: Copy + 'static;

    /// The carried constant.
    const VALUE: Self::Value;
}

/// Generic tag carrying an `i32`.
///
/// All uses of `IntValue<N>` with the same `N` are the same type, so prefer
/// [`tag!`](crate::tag) when cases need their own identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct IntValue<const N: i32>;

impl<const N: i32> Tag for IntValue<N> {
    type Value = i32;
    const VALUE: i32 = N;
}

/// Generic tag carrying a `u8`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct ByteValue<const N: u8>;

impl<const N: u8> Tag for ByteValue<N> {
    type Value = u8;
    const VALUE: u8 = N;
}

/// Declares one or more nominal tag types.
///
/// ```
/// use strong_enum::{tag, Tag};
///
/// tag! {
///     /// Spare slot.
///     pub struct Spare: u16 = 0xffff;
///     struct Unused: u16 = 0xffff;
/// }
///
/// assert_eq!(Spare::VALUE, Unused::VALUE);
/// ```
#[macro_export]
macro_rules! tag {
    ($(
        $(#[$meta:meta])*
        $vis:vis struct $name:ident : $t:ty = $value:expr;
    )+) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
            $vis struct $name;

            impl $crate::Tag for $name {
                type Value = $t;
                const VALUE: $t = $value;
            }
        )+
    };
}
