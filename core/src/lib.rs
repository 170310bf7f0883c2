//! A closed-alternative variant container.
//!
//! [`Variant<L>`] holds exactly one value whose type is one of the alternatives of
//! the list `L`. Which alternative a source becomes is decided at compile time:
//! an exact match (the type itself, or a reference to it, which is cloned) or a
//! single declared [`Implicit`] conversion. Ambiguous and unmatched sources are
//! rejected by the compiler.
//!
//! ```
//! use oneof_core::{Alternatives, Variant};
//!
//! type Value = Alternatives![i32, String, f64];
//!
//! let mut value = Variant::<Value>::default();
//! assert_eq!(value.index(), Some(0));
//!
//! value.assign(6.0_f64);
//! assert_eq!(value.get_at::<2>(), Some(&6.0));
//!
//! value.assign("abc");
//! assert_eq!(value.get_as::<String, _>().map(String::as_str), Some("abc"));
//! ```
//!
//! The type-level machinery lives in `oneof-types` and is re-exported here.
//!
//! # Features
//!
//! - `serde` (default): `Serialize` / `Deserialize` for `Variant` as `[index, value]`.

#[cfg(feature = "serde")]
mod codec;
mod variant;

#[cfg(feature = "serde")]
pub use codec::{DeserializeAt, SerializeActive};
pub use oneof_types::{
    AccessError, Admit, AlternativeInfo, Alternatives, At, Capture, Captured, Category, Chain,
    Convert, Converting, End, Exact, Here, Implicit, Locate, Owned, Place, Position, Rank,
    Resolve, Shared, Storage, There, Unique, ordinal_of, rank_of,
};
pub use variant::Variant;
