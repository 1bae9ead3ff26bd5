//! Heterogeneous type-level lists and compile-time membership.
//!
//! A list is either [`Nil`] or a [`Cons`] of a head type and a tail list.
//! Lists are never instantiated, they only exist as type parameters. Write
//! them with [`type_list!`](crate::type_list):
//!
//! ```
//! use strong_enum::{type_list, Cons, Nil};
//!
//! type L = type_list![bool, char];
//! let _: Option<Cons<bool, Cons<char, Nil>>> = None::<L>;
//! ```
//!
//! Membership is a trait bound. A list implements [`Contains<T, I>`] for
//! every `T` it names, where the position index `I` is left for the compiler
//! to infer:
//!
//! ```
//! use strong_enum::{type_list, Contains};
//!
//! fn member<L: Contains<T, I>, T, I>() {}
//!
//! member::<type_list![bool, char, i32, i64], i32, _>();
//! ```
//!
//! Asking for a type that is not in the list does not compile:
//!
//! ```compile_fail
//! use strong_enum::{type_list, Contains};
//!
//! fn member<L: Contains<T, I>, T, I>() {}
//!
//! member::<type_list![bool, char, i32, i64], String, _>();
//! ```
use std::any::TypeId;
use std::marker::PhantomData;

pub(crate) mod sealed {
    pub trait Sealed {}

    pub trait Member<T, I> {}
}

/// The empty list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Nil;

/// A list made of the head `H` followed by the list `T`.
pub struct Cons<H, T>(PhantomData<(fn() -> H, fn() -> T)>);

/// Position index: the element is the head of the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Here;

/// Position index: the element is somewhere in the tail, at index `I`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct There<I>(PhantomData<I>);

/// Builds a [`Cons`] list type out of a comma separated list of types.
///
/// `type_list![]` is [`Nil`].
#[macro_export]
macro_rules! type_list {
    () => { $crate::Nil };
    ($head:ty $(, $tail:ty)* $(,)?) => {
        $crate::Cons<$head, $crate::type_list![$($tail),*]>
    };
}

/// Proof that `T` is one of the elements of this list.
///
/// The index `I` only exists to keep the two recursive impls apart and is
/// always inferred. A list naming the same type twice leaves the index
/// ambiguous and so cannot prove membership of that type.
///
/// This trait is sealed: membership follows from the list alone.
#[diagnostic::on_unimplemented(
    message = "`{T}` is not a member of the type list `{Self}`",
    label = "`{T}` is not listed here"
)]
pub trait Contains<T, I>: sealed::Member<T, I> {}

impl<L, T, I> Contains<T, I> for L where L: sealed::Member<T, I> {}

impl<T, Tail> sealed::Member<T, Here> for Cons<T, Tail> {}

impl<T, H, Tail, I> sealed::Member<T, There<I>> for Cons<H, Tail> where Tail: sealed::Member<T, I> {}

/// Operations available on every list.
pub trait TypeList: sealed::Sealed {
    /// Number of elements.
    const LEN: usize;

    /// Returns `true` if `T` is exactly one of the elements.
    ///
    /// Only type identity counts, a type that merely converts into an
    /// element is not a member. Every comparison is between constants so the
    /// whole call folds to a literal once monomorphized.
    fn contains_type<T: ?Sized + 'static>() -> bool;
}

impl sealed::Sealed for Nil {}

impl TypeList for Nil {
    const LEN: usize = 0;

    #[inline]
    fn contains_type<T: ?Sized + 'static>() -> bool {
        false
    }
}

impl<H, Tail: sealed::Sealed> sealed::Sealed for Cons<H, Tail> {}

impl<H: 'static, Tail: TypeList> TypeList for Cons<H, Tail> {
    const LEN: usize = Tail::LEN + 1;

    #[inline]
    fn contains_type<T: ?Sized + 'static>() -> bool {
        TypeId::of::<T>() == TypeId::of::<H>() || Tail::contains_type::<T>()
    }
}

/// Returns `true` if `T` is one of the elements of the list `L`.
///
/// ```
/// use strong_enum::{contains_type, type_list};
///
/// assert!(contains_type::<bool, type_list![bool, char, i32, i64]>());
/// assert!(!contains_type::<String, type_list![bool, char, i32, i64]>());
/// assert!(!contains_type::<bool, type_list![]>());
/// ```
#[inline]
pub fn contains_type<T: ?Sized + 'static, L: TypeList>() -> bool {
    L::contains_type::<T>()
}
