use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

use tracing::trace;

use crate::error::InvalidEnumValue;
use crate::tag::Tag;
use crate::type_list::Contains;
use crate::value_list::ValueList;

/// An enum-like value made of a scalar `V` restricted to the constants of
/// the tags in the list `L`.
///
/// The scalar can only be read back with [`value`](Self::value). An
/// instance is built either from one of its tags, checked at compile time,
/// or from a raw scalar with [`from_value`](Self::from_value), checked at
/// run time.
///
/// ```
/// use strong_enum::{tag, type_list, StrongEnum};
///
/// tag! {
///     struct A: i32 = 1;
///     struct B: i32 = 2;
/// }
/// type E = StrongEnum<i32, type_list![A, B]>;
///
/// let a = E::new(A);
/// assert_eq!(1, a.value());
/// assert_eq!(Ok(a), E::from_value(1));
/// assert!(E::from_value(3).is_err());
/// assert!(a.is(A));
/// assert!(!a.is(B));
/// ```
///
/// A tag from outside the list is rejected by the compiler, both when
/// constructing and when comparing:
///
/// ```compile_fail
/// use strong_enum::{tag, type_list, StrongEnum};
///
/// tag! {
///     struct A: i32 = 1;
///     struct Other: i32 = 1;
/// }
/// type E = StrongEnum<i32, type_list![A]>;
///
/// let _ = E::new(Other);
/// ```
///
/// ```compile_fail
/// use strong_enum::{tag, type_list, StrongEnum};
///
/// tag! {
///     struct A: i32 = 1;
///     struct Other: i32 = 1;
/// }
/// type E = StrongEnum<i32, type_list![A]>;
///
/// let _ = E::new(A).is(Other);
/// ```
///
/// The same goes for a generic tag carrying a valid value but not listed:
///
/// ```compile_fail
/// use strong_enum::{tag, type_list, IntValue, StrongEnum};
///
/// tag! {
///     struct A: i32 = 1;
/// }
/// type E = StrongEnum<i32, type_list![A]>;
///
/// let _ = E::new(IntValue::<1>);
/// ```
///
/// and there is no way to wrap a raw scalar without the check:
///
/// ```compile_fail
/// use strong_enum::{tag, type_list, StrongEnum};
///
/// tag! {
///     struct A: i32 = 1;
/// }
/// type E = StrongEnum<i32, type_list![A]>;
///
/// let _ = E { value: 1, _list: std::marker::PhantomData };
/// ```
pub struct StrongEnum<V, L> {
    value: V,
    _list: PhantomData<fn() -> L>,
}

/// A [`StrongEnum`] over `i32`.
pub type StrongIntEnum<L> = StrongEnum<i32, L>;

/// A [`StrongEnum`] over `u8`.
pub type StrongByteEnum<L> = StrongEnum<u8, L>;

impl<V: Copy, L> StrongEnum<V, L> {
    /// Builds an instance from a tag of the list.
    #[inline]
    pub fn new<T, I>(tag: T) -> Self
    where
        T: Tag<Value = V>,
        L: Contains<T, I>,
    {
        let _ = tag;
        Self::of::<T, I>()
    }

    /// Same as [`new`](Self::new) but usable in constant expressions.
    ///
    /// ```
    /// use strong_enum::{tag, type_list, StrongEnum};
    ///
    /// tag! {
    ///     struct A: u8 = 0x10;
    ///     struct B: u8 = 0x20;
    /// }
    /// type E = StrongEnum<u8, type_list![A, B]>;
    ///
    /// const DEFAULT: E = E::of::<B, _>();
    /// assert_eq!(0x20, DEFAULT.value());
    /// ```
    #[inline]
    pub const fn of<T, I>() -> Self
    where
        T: Tag<Value = V>,
        L: Contains<T, I>,
    {
        StrongEnum {
            value: T::VALUE,
            _list: PhantomData,
        }
    }

    /// Validates a raw scalar against the values of the list.
    ///
    /// This is the way in for values coming from outside the program, such
    /// as decoded input.
    pub fn from_value(value: V) -> Result<Self, InvalidEnumValue<V>>
    where
        V: fmt::Debug,
        L: ValueList<V>,
    {
        if !L::contains_value(&value) {
            trace!(?value, "raw value is not one of the enum values");
            return Err(InvalidEnumValue(value));
        }
        Ok(StrongEnum {
            value,
            _list: PhantomData,
        })
    }

    /// The underlying scalar.
    #[inline]
    pub const fn value(&self) -> V {
        self.value
    }

    /// Returns `true` if this instance holds the value of `tag`.
    #[inline]
    pub fn is<T, I>(&self, tag: T) -> bool
    where
        T: Tag<Value = V>,
        V: PartialEq,
        L: Contains<T, I>,
    {
        let _ = tag;
        self.value == T::VALUE
    }
}

impl<V: Clone, L> Clone for StrongEnum<V, L> {
    fn clone(&self) -> Self {
        StrongEnum {
            value: self.value.clone(),
            _list: PhantomData,
        }
    }
}

impl<V: Copy, L> Copy for StrongEnum<V, L> {}

impl<V: PartialEq, L> PartialEq for StrongEnum<V, L> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<V: Eq, L> Eq for StrongEnum<V, L> {}

impl<V: Hash, L> Hash for StrongEnum<V, L> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state)
    }
}

impl<V: fmt::Debug, L> fmt::Debug for StrongEnum<V, L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("StrongEnum").field(&self.value).finish()
    }
}
