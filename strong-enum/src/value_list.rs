use crate::tag::Tag;
use crate::type_list::{sealed, Cons, Nil};

/// Runtime membership of a value among the constants carried by a list of
/// [`Tag`]s.
///
/// Tags are checked left to right and the first match wins. The value only
/// has to be comparable with each tag's scalar, not of the same type.
pub trait ValueList<V: ?Sized>: sealed::Sealed {
    /// Returns `true` if `value` equals the constant of any tag in the list.
    fn contains_value(value: &V) -> bool;
}

impl<V: ?Sized> ValueList<V> for Nil {
    #[inline]
    fn contains_value(_value: &V) -> bool {
        false
    }
}

impl<V, H, Tail> ValueList<V> for Cons<H, Tail>
where
    V: ?Sized + PartialEq<H::Value>,
    H: Tag,
    Tail: ValueList<V>,
{
    #[inline]
    fn contains_value(value: &V) -> bool {
        value.eq(&H::VALUE) || Tail::contains_value(value)
    }
}

/// Returns `true` if `value` equals the constant of any tag in `L`.
///
/// ```
/// use strong_enum::{contains_value, type_list, IntValue};
///
/// type L = type_list![IntValue<1>, IntValue<2>];
/// assert!(contains_value::<L, _>(&2));
/// assert!(!contains_value::<L, _>(&3));
/// ```
#[inline]
pub fn contains_value<L, V>(value: &V) -> bool
where
    L: ValueList<V>,
    V: ?Sized,
{
    L::contains_value(value)
}
