//! [`serde`] support: a strong enum is written as its bare scalar and is
//! validated with [`StrongEnum::from_value`] when read back.
use std::fmt;

use ::serde::de::Error as _;
use ::serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::strong::StrongEnum;
use crate::value_list::ValueList;

impl<V, L> Serialize for StrongEnum<V, L>
where
    V: Copy + Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.value().serialize(serializer)
    }
}

impl<'de, V, L> Deserialize<'de> for StrongEnum<V, L>
where
    V: Copy + fmt::Debug + Deserialize<'de>,
    L: ValueList<V>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = V::deserialize(deserializer)?;
        StrongEnum::from_value(value).map_err(D::Error::custom)
    }
}
