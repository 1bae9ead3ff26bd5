// SPDX-FileCopyrightText: 2024 griff
//
// SPDX-License-Identifier: EUPL-1.2 or MIT

//! Enum-like wrappers around a scalar that can only hold declared values.
//!
//! A [`StrongEnum<V, L>`] holds a `V` that is guaranteed to equal the
//! constant of one of the [`Tag`] types listed in `L`. Raw scalars cannot be
//! wrapped without going through [`StrongEnum::from_value`], which checks the
//! value at run time. Tags are checked by the compiler, so constructing from
//! or comparing with a tag outside the list does not compile.
//!
//! ```
//! use strong_enum::strong_enum;
//!
//! strong_enum! {
//!     pub enum MyEnum: i32 {
//!         A = 0,
//!         B = 1,
//!         C = 2,
//!     }
//! }
//!
//! let b: MyEnum = B.into();
//! assert!(b == B);
//! assert_eq!(1, b.value());
//!
//! // Values coming from outside must be validated.
//! assert_eq!(Ok(b), MyEnum::from_value(1));
//! assert_eq!("invalid enum value 7", MyEnum::from_value(7).unwrap_err().to_string());
//! ```
//!
//! # Features
//!
//! * `serde`: `Serialize` and `Deserialize` for [`StrongEnum`] as its bare
//!   scalar, validating on deserialization.

mod error;
mod macros;
#[cfg(feature = "serde")]
mod serde;
mod strong;
mod tag;
pub mod type_list;
mod value_list;

pub use self::error::InvalidEnumValue;
pub use self::strong::{StrongByteEnum, StrongEnum, StrongIntEnum};
pub use self::tag::{ByteValue, IntValue, Tag};
pub use self::type_list::{contains_type, Cons, Contains, Here, Nil, There, TypeList};
pub use self::value_list::{contains_value, ValueList};
