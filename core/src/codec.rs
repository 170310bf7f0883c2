//! Serde support: a variant is the pair `[index, value]`.
//!
//! ```
//! use oneof_core::{Alternatives, Variant};
//!
//! let variant = Variant::<Alternatives![i32, String]>::new("abc");
//! let json = serde_json::to_string(&variant).unwrap();
//! assert_eq!(json, r#"[1,"abc"]"#);
//!
//! let back: Variant<Alternatives![i32, String]> = serde_json::from_str(&json).unwrap();
//! assert_eq!(back, variant);
//! ```

use std::fmt;
use std::marker::PhantomData;

use oneof_types::{Chain, End, Storage};
use serde::de::{self, SeqAccess, Unexpected, Visitor};
use serde::ser::{self, SerializeTuple};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::variant::Variant;

/// Serializes the live cell of a chain as one tuple element.
pub trait SerializeActive: Storage {
    fn serialize_active<S: SerializeTuple>(&self, tuple: &mut S) -> Result<(), S::Error>;
}

impl SerializeActive for End {
    fn serialize_active<S: SerializeTuple>(&self, _tuple: &mut S) -> Result<(), S::Error> {
        match *self {}
    }
}

impl<H: Serialize, T: SerializeActive> SerializeActive for Chain<H, T> {
    fn serialize_active<S: SerializeTuple>(&self, tuple: &mut S) -> Result<(), S::Error> {
        match self {
            Chain::Here(value) => tuple.serialize_element(value),
            Chain::Next(rest) => rest.serialize_active(tuple),
        }
    }
}

/// Deserializes the next sequence element as the alternative at `position`.
pub trait DeserializeAt<'de>: Storage {
    /// `Ok(None)` when the sequence has no element left.
    fn deserialize_at<A: SeqAccess<'de>>(
        position: usize,
        seq: &mut A,
    ) -> Result<Option<Self>, A::Error>;
}

impl<'de> DeserializeAt<'de> for End {
    fn deserialize_at<A: SeqAccess<'de>>(
        position: usize,
        _seq: &mut A,
    ) -> Result<Option<Self>, A::Error> {
        Err(de::Error::custom(format_args!(
            "alternative position {position} is out of range"
        )))
    }
}

impl<'de, H: Deserialize<'de>, T: DeserializeAt<'de>> DeserializeAt<'de> for Chain<H, T> {
    fn deserialize_at<A: SeqAccess<'de>>(
        position: usize,
        seq: &mut A,
    ) -> Result<Option<Self>, A::Error> {
        match position.checked_sub(1) {
            None => Ok(seq.next_element::<H>()?.map(Chain::Here)),
            Some(rest) => Ok(T::deserialize_at(rest, seq)?.map(Chain::Next)),
        }
    }
}

impl<L: SerializeActive> Serialize for Variant<L> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let Some(chain) = self.chain() else {
            return Err(ser::Error::custom("cannot serialize a valueless variant"));
        };
        let mut tuple = serializer.serialize_tuple(2)?;
        tuple.serialize_element(&chain.position())?;
        chain.serialize_active(&mut tuple)?;
        tuple.end()
    }
}

struct VariantVisitor<L>(PhantomData<L>);

impl<'de, L: DeserializeAt<'de>> Visitor<'de> for VariantVisitor<L> {
    type Value = Variant<L>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "an [index, value] pair with index below {}", L::LEN)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let index: usize = seq
            .next_element()?
            .ok_or_else(|| de::Error::invalid_length(0, &self))?;
        if index >= L::LEN {
            let unexpected = Unexpected::Unsigned(u64::try_from(index).unwrap_or(u64::MAX));
            return Err(de::Error::invalid_value(unexpected, &self));
        }
        let chain = L::deserialize_at(index, &mut seq)?
            .ok_or_else(|| de::Error::invalid_length(1, &self))?;
        tracing::trace!(index, "deserialized variant");
        Ok(Variant::from_chain(chain))
    }
}

impl<'de, L: DeserializeAt<'de>> Deserialize<'de> for Variant<L> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_tuple(2, VariantVisitor(PhantomData))
    }
}
