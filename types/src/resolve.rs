//! Alternative resolution: which alternative does a source value become?
//!
//! A source `U` is classified against every alternative `A_i` of a list:
//!
//! - **Exact**: `U` is `A_i`, or a `&A_i` / `&mut A_i` (borrowed sources are cloned).
//! - **Convertible**: `U: Implicit<A_i>`.
//! - **Incompatible**: anything else.
//!
//! Each classification that succeeds is one candidate *route*: a type-level
//! witness carrying the rank, the capture category and the position. The route
//! parameter of [`Resolve`] is left for the compiler to infer, and inference only
//! succeeds when exactly one candidate exists. Everything else is a compile error:
//!
//! ```
//! use oneof_types::{Alternatives, ordinal_of};
//!
//! assert_eq!(ordinal_of::<Alternatives![f64, i32], i32, _>(), 1);
//! assert_eq!(ordinal_of::<Alternatives![i32, f64, u32], u32, _>(), 2);
//! assert_eq!(ordinal_of::<Alternatives![i32, String], &str, _>(), 1);
//! ```
//!
//! The same type listed twice:
//!
//! ```compile_fail
//! use oneof_types::{Alternatives, ordinal_of};
//!
//! let _ = ordinal_of::<Alternatives![i32, f64, i32], i32, _>();
//! ```
//!
//! A source that converts to more than one alternative:
//!
//! ```compile_fail
//! use oneof_types::{Alternatives, Implicit, ordinal_of};
//!
//! struct Celsius(f64);
//! struct Kelvin(f64);
//! struct Reading(f64);
//!
//! impl Implicit<Celsius> for Reading {
//!     fn convert(self) -> Celsius {
//!         Celsius(self.0)
//!     }
//! }
//!
//! impl Implicit<Kelvin> for Reading {
//!     fn convert(self) -> Kelvin {
//!         Kelvin(self.0 + 273.15)
//!     }
//! }
//!
//! let _ = ordinal_of::<Alternatives![Celsius, Kelvin], Reading, _>();
//! ```
//!
//! A source that matches nothing:
//!
//! ```compile_fail
//! use oneof_types::{Alternatives, ordinal_of};
//!
//! let _ = ordinal_of::<Alternatives![i32, f64], String, _>();
//! ```
//!
//! An exact match does not override a declared conversion to another alternative
//! of the same list; both are candidates and the list is rejected:
//!
//! ```compile_fail
//! use oneof_types::{Alternatives, ordinal_of};
//!
//! // `&str` is `Implicit<String>`, and also exactly `&str`.
//! let _ = ordinal_of::<Alternatives![&'static str, String], &'static str, _>();
//! ```

use std::marker::PhantomData;

use crate::capture::{Capture, Captured, Category, Converting, Owned, Place, Shared, Unique};
use crate::storage::{Chain, Storage};

/// How a source matched its alternative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rank {
    Exact,
    Convertible,
}

/// A declared implicit conversion from `Self` into the alternative `T`.
///
/// Rust performs no implicit conversions, so a source only ranks as convertible
/// when this trait says so. There is no reflexive impl; a type always matches
/// itself exactly.
#[diagnostic::on_unimplemented(message = "`{Self}` has no implicit conversion into `{T}`")]
pub trait Implicit<T> {
    fn convert(self) -> T;
}

impl Implicit<String> for &str {
    fn convert(self) -> String {
        self.to_owned()
    }
}

impl<T: Clone> Implicit<Vec<T>> for &[T] {
    fn convert(self) -> Vec<T> {
        self.to_vec()
    }
}

/// Position marker: the head of the list.
pub enum Here {}

/// Position marker: one past `P`.
pub struct There<P>(PhantomData<P>);

/// Numeric value of a position marker.
pub trait Position {
    const INDEX: usize;
}

impl Position for Here {
    const INDEX: usize = 0;
}

impl<P: Position> Position for There<P> {
    const INDEX: usize = P::INDEX + 1;
}

/// Route marker: exact match at `P`, captured with category `C`.
pub struct Exact<C, P>(PhantomData<(C, P)>);

/// Route marker: implicit conversion into the alternative at `P`.
pub struct Convert<P>(PhantomData<P>);

/// `T` occurs exactly at position `P` of the list.
#[diagnostic::on_unimplemented(
    message = "`{T}` is not an alternative of `{Self}`",
    label = "`{T}` must appear exactly once in the alternative list"
)]
pub trait Locate<T, P>: Storage {
    /// Walk to `P` and place the captured value there.
    fn embed<C: Place<T>>(captured: C) -> Self;

    fn project(&self) -> Option<&T>;

    fn project_mut(&mut self) -> Option<&mut T>;

    fn extract(self) -> Result<T, Self>;
}

impl<H, T: Storage> Locate<H, Here> for Chain<H, T> {
    #[inline]
    fn embed<C: Place<H>>(captured: C) -> Self {
        Chain::Here(captured.place())
    }

    #[inline]
    fn project(&self) -> Option<&H> {
        match self {
            Chain::Here(value) => Some(value),
            Chain::Next(_) => None,
        }
    }

    #[inline]
    fn project_mut(&mut self) -> Option<&mut H> {
        match self {
            Chain::Here(value) => Some(value),
            Chain::Next(_) => None,
        }
    }

    fn extract(self) -> Result<H, Self> {
        match self {
            Chain::Here(value) => Ok(value),
            other @ Chain::Next(_) => Err(other),
        }
    }
}

impl<H, T, U, P> Locate<U, There<P>> for Chain<H, T>
where
    T: Locate<U, P>,
{
    #[inline]
    fn embed<C: Place<U>>(captured: C) -> Self {
        Chain::Next(T::embed(captured))
    }

    #[inline]
    fn project(&self) -> Option<&U> {
        match self {
            Chain::Next(rest) => rest.project(),
            Chain::Here(_) => None,
        }
    }

    #[inline]
    fn project_mut(&mut self) -> Option<&mut U> {
        match self {
            Chain::Next(rest) => rest.project_mut(),
            Chain::Here(_) => None,
        }
    }

    fn extract(self) -> Result<U, Self> {
        match self {
            Chain::Next(rest) => rest.extract().map_err(Chain::Next),
            other @ Chain::Here(_) => Err(other),
        }
    }
}

/// `U` converts implicitly into the alternative at position `P`.
pub trait Admit<U, P>: Storage {
    type Target;

    fn embed(captured: Captured<U, Converting>) -> Self;
}

impl<H, T: Storage, U: Implicit<H>> Admit<U, Here> for Chain<H, T> {
    type Target = H;

    #[inline]
    fn embed(captured: Captured<U, Converting>) -> Self {
        Chain::Here(captured.place())
    }
}

impl<H, T, U, P> Admit<U, There<P>> for Chain<H, T>
where
    T: Admit<U, P>,
{
    type Target = T::Target;

    #[inline]
    fn embed(captured: Captured<U, Converting>) -> Self {
        Chain::Next(T::embed(captured))
    }
}

/// A source `U` resolves to exactly one alternative of `Self` along route `R`.
///
/// `R` is never written by hand; leave it as `_` and let inference find the
/// unique route.
#[diagnostic::on_unimplemented(
    message = "`{U}` does not resolve to an alternative of `{Self}`",
    label = "no alternative matches `{U}` exactly or through `Implicit`",
    note = "a source resolves when it is exactly one alternative (or a reference to it), or implicitly converts to exactly one"
)]
pub trait Resolve<U, R>: Storage {
    /// The alternative `U` is stored as.
    type Target;
    const INDEX: usize;
    const RANK: Rank;
    const CATEGORY: Category;

    /// Capture `source` and construct the chain with it in cell `INDEX`.
    fn inject(source: U) -> Self;
}

impl<L, T, P> Resolve<T, Exact<Owned, P>> for L
where
    L: Locate<T, P>,
    P: Position,
{
    type Target = T;
    const INDEX: usize = P::INDEX;
    const RANK: Rank = Rank::Exact;
    const CATEGORY: Category = Owned::CATEGORY;

    #[inline]
    fn inject(source: T) -> Self {
        L::embed(Captured::<T, Owned>::new(source))
    }
}

impl<'a, L, T, P> Resolve<&'a T, Exact<Shared, P>> for L
where
    L: Locate<T, P>,
    T: Clone,
    P: Position,
{
    type Target = T;
    const INDEX: usize = P::INDEX;
    const RANK: Rank = Rank::Exact;
    const CATEGORY: Category = Shared::CATEGORY;

    #[inline]
    fn inject(source: &'a T) -> Self {
        L::embed(Captured::<&'a T, Shared>::new(source))
    }
}

impl<'a, L, T, P> Resolve<&'a mut T, Exact<Unique, P>> for L
where
    L: Locate<T, P>,
    T: Clone,
    P: Position,
{
    type Target = T;
    const INDEX: usize = P::INDEX;
    const RANK: Rank = Rank::Exact;
    const CATEGORY: Category = Unique::CATEGORY;

    #[inline]
    fn inject(source: &'a mut T) -> Self {
        L::embed(Captured::<&'a mut T, Unique>::new(source))
    }
}

impl<L, U, P> Resolve<U, Convert<P>> for L
where
    L: Admit<U, P>,
    P: Position,
{
    type Target = L::Target;
    const INDEX: usize = P::INDEX;
    const RANK: Rank = Rank::Convertible;
    const CATEGORY: Category = Converting::CATEGORY;

    #[inline]
    fn inject(source: U) -> Self {
        L::embed(Captured::new(source))
    }
}

/// The ordinal a source of type `U` resolves to in the list `L`.
#[must_use]
pub const fn ordinal_of<L, U, R>() -> usize
where
    L: Resolve<U, R>,
{
    L::INDEX
}

/// The rank a source of type `U` resolves with in the list `L`.
#[must_use]
pub const fn rank_of<L, U, R>() -> Rank
where
    L: Resolve<U, R>,
{
    L::RANK
}
