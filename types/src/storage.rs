//! The storage chain: a right-recursive native enum holding one live alternative.
//!
//! `Alternatives![A, B, C]` expands to `Chain<A, Chain<B, Chain<C, End>>>`. A value
//! of that type is exactly one of `Here(A)`, `Next(Here(B))` or
//! `Next(Next(Here(C)))`, so the single-live-cell invariant holds by construction
//! and the derived `Clone` copies the live cell and nothing else.
//!
//! The chain depth of the live cell is its position. The compiler folds the nested
//! discriminants into one tag, so reading the position is a single switch.

use std::any::type_name;
use std::fmt;
use std::mem::{needs_drop, size_of};

use crate::catalog::AlternativeInfo;

/// One link of an alternative list: either the alternative `H` is live, or the
/// live value sits somewhere in the rest of the list `T`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Chain<H, T> {
    Here(H),
    Next(T),
}

/// Terminator of an alternative list. Uninhabited: a chain can never be "at the end".
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum End {}

/// Common operations on every alternative list.
pub trait Storage: Sized {
    /// Number of alternatives in the list.
    const LEN: usize;

    /// Position of the live cell.
    fn position(&self) -> usize;

    /// Static metadata for the alternative at `position`, or `None` past the end.
    fn describe(position: usize) -> Option<AlternativeInfo>;
}

impl Storage for End {
    const LEN: usize = 0;

    fn position(&self) -> usize {
        match *self {}
    }

    fn describe(_position: usize) -> Option<AlternativeInfo> {
        None
    }
}

impl<H, T: Storage> Storage for Chain<H, T> {
    const LEN: usize = T::LEN + 1;

    #[inline]
    fn position(&self) -> usize {
        match self {
            Chain::Here(_) => 0,
            Chain::Next(rest) => rest.position() + 1,
        }
    }

    fn describe(position: usize) -> Option<AlternativeInfo> {
        match position.checked_sub(1) {
            None => Some(AlternativeInfo {
                position: 0,
                type_name: type_name::<H>(),
                needs_drop: needs_drop::<H>(),
                size: size_of::<H>(),
            }),
            Some(rest) => T::describe(rest).map(|info| AlternativeInfo {
                position: info.position + 1,
                ..info
            }),
        }
    }
}

// Debug shows only the live value; the chain shape is an implementation detail.
impl<H: fmt::Debug, T: fmt::Debug> fmt::Debug for Chain<H, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Chain::Here(value) => value.fmt(f),
            Chain::Next(rest) => rest.fmt(f),
        }
    }
}

impl fmt::Debug for End {
    fn fmt(&self, _f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {}
    }
}
