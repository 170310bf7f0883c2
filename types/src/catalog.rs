//! Position → alternative lookup.
//!
//! [`At<K>`] names the alternative stored at position `K` and gives checked access
//! to that cell. Positions past the end of the list have no impl, so asking for one
//! is a compile error. Each link peels one position off `K`, so the compiler
//! reports the failure at the innermost link (`End` with a smaller position),
//! and the diagnostic names neither:
//!
//! ```compile_fail
//! use oneof_types::{Alternatives, At};
//!
//! // Only position 0 exists.
//! let _: Option<&<Alternatives![i32] as At<1>>::Output> = None;
//! ```

use crate::storage::{Chain, Storage};

/// Static description of one alternative of a list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlternativeInfo {
    pub position: usize,
    pub type_name: &'static str,
    /// `false` for alternatives with no drop glue; tearing those down is a no-op.
    pub needs_drop: bool,
    pub size: usize,
}

/// The alternative at position `K`.
#[diagnostic::on_unimplemented(
    message = "alternative position is out of range for this list",
    label = "the alternative list is shorter than the requested position"
)]
pub trait At<const K: usize>: Storage {
    type Output;

    /// The cell at `K` if it is the live one.
    fn cell(&self) -> Option<&Self::Output>;

    fn cell_mut(&mut self) -> Option<&mut Self::Output>;

    /// Move the value out of cell `K`, or hand the chain back if another cell is live.
    fn extract(self) -> Result<Self::Output, Self>;
}

impl<H, T: Storage> At<0> for Chain<H, T> {
    type Output = H;

    #[inline]
    fn cell(&self) -> Option<&H> {
        match self {
            Chain::Here(value) => Some(value),
            Chain::Next(_) => None,
        }
    }

    #[inline]
    fn cell_mut(&mut self) -> Option<&mut H> {
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

// Const generic arithmetic (`K - 1`) is not available on stable, so each depth
// peels one link explicitly.
macro_rules! impl_at {
    ($($k:literal => $prev:literal),* $(,)?) => {$(
        impl<H, T: At<$prev>> At<$k> for Chain<H, T> {
            type Output = <T as At<$prev>>::Output;

            #[inline]
            fn cell(&self) -> Option<&Self::Output> {
                match self {
                    Chain::Next(rest) => <T as At<$prev>>::cell(rest),
                    Chain::Here(_) => None,
                }
            }

            #[inline]
            fn cell_mut(&mut self) -> Option<&mut Self::Output> {
                match self {
                    Chain::Next(rest) => <T as At<$prev>>::cell_mut(rest),
                    Chain::Here(_) => None,
                }
            }

            fn extract(self) -> Result<Self::Output, Self> {
                match self {
                    Chain::Next(rest) => <T as At<$prev>>::extract(rest).map_err(Chain::Next),
                    other @ Chain::Here(_) => Err(other),
                }
            }
        }
    )*};
}

impl_at!(
    1 => 0,
    2 => 1,
    3 => 2,
    4 => 3,
    5 => 4,
    6 => 5,
    7 => 6,
    8 => 7,
    9 => 8,
    10 => 9,
    11 => 10,
    12 => 11,
    13 => 12,
    14 => 13,
    15 => 14,
);
