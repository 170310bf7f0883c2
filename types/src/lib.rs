//! Type-level machinery for oneof.
//!
//! This crate holds the pieces a closed-alternative container is built from, with
//! no IO, no logging and no runtime type information:
//!
//! - **`storage`**: the [`Chain`] / [`End`] list that holds exactly one live value
//! - **`catalog`**: position → alternative lookup ([`At`]) and per-position metadata
//! - **`resolve`**: source type → unique alternative ([`Resolve`]), rejected at
//!   compile time when ambiguous or unmatched
//! - **`capture`**: ownership-preserving transport of a source into its cell
//!
//! Alternative lists are written with [`Alternatives!`]:
//!
//! ```
//! use oneof_types::{Alternatives, At, Chain, End, Resolve, Storage};
//!
//! type Shape = Alternatives![i32, String, f64];
//!
//! let cell = <Shape as Resolve<f64, _>>::inject(6.0);
//! assert_eq!(cell.position(), 2);
//! assert_eq!(<Shape as At<2>>::cell(&cell), Some(&6.0));
//! assert_eq!(Shape::LEN, 3);
//! # let _: Chain<i32, Chain<String, Chain<f64, End>>> = cell;
//! ```

mod capture;
mod catalog;
mod error;
mod resolve;
mod storage;

pub use capture::{Capture, Captured, Category, Converting, Owned, Place, Shared, Unique};
pub use catalog::{AlternativeInfo, At};
pub use error::AccessError;
pub use resolve::{
    Admit, Convert, Exact, Here, Implicit, Locate, Position, Rank, Resolve, There, ordinal_of,
    rank_of,
};
pub use storage::{Chain, End, Storage};

/// Spell an alternative list: `Alternatives![A, B, C]` is
/// `Chain<A, Chain<B, Chain<C, End>>>`.
#[macro_export]
macro_rules! Alternatives {
    () => { $crate::End };
    ($head:ty $(,)?) => { $crate::Chain<$head, $crate::End> };
    ($head:ty, $($rest:ty),+ $(,)?) => {
        $crate::Chain<$head, $crate::Alternatives![$($rest),+]>
    };
}
