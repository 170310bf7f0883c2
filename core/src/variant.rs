//! The `Variant` container.
//!
//! A `Variant<L>` owns at most one storage chain of the alternative list `L`. The
//! active index is never stored; it is the depth of the live cell, so index and
//! cell cannot disagree. `None` is the valueless state, reachable only when
//! constructing the value of an [`assign`](Variant::assign) panicked after the old
//! value was already destroyed.

use std::any::type_name;
use std::fmt;
use std::hint::unreachable_unchecked;
use std::mem;

use oneof_types::{
    AccessError, AlternativeInfo, At, Category, Chain, Locate, Position, Rank, Resolve, Storage,
};

/// A value that is exactly one of the alternatives in `L`.
///
/// Comparison and hashing follow the storage chain: a valueless variant sorts
/// before every value, otherwise variants order by index, then by value.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Variant<L> {
    storage: Option<L>,
}

impl<L: Storage> Variant<L> {
    /// Number of alternatives.
    pub const LEN: usize = L::LEN;

    /// Construct from `value`, stored as the one alternative it resolves to.
    ///
    /// The route `R` is inferred. Sources that match no alternative, or more
    /// than one, do not compile.
    ///
    /// ```
    /// use oneof_core::{Alternatives, Variant};
    ///
    /// let number = Variant::<Alternatives![f64, i32]>::new(7_i32);
    /// assert_eq!(number.index(), Some(1));
    ///
    /// let text = Variant::<Alternatives![i32, String]>::new("abc");
    /// assert_eq!(text.get_at::<1>().map(String::as_str), Some("abc"));
    /// ```
    pub fn new<U, R>(value: U) -> Self
    where
        L: Resolve<U, R>,
    {
        let storage = L::inject(value);
        let route = Route::of::<L, U, R>();
        tracing::trace!(
            index = route.index,
            rank = ?route.rank,
            category = ?route.category,
            alternative = route.alternative,
            "constructed variant"
        );
        Self {
            storage: Some(storage),
        }
    }

    /// Replace the held value with `value`.
    ///
    /// The current value is dropped before the new one is constructed. If that
    /// construction panics (a `Clone` or `Implicit::convert` of the source), the
    /// panic propagates and the variant is left valueless.
    pub fn assign<U, R>(&mut self, value: U)
    where
        L: Resolve<U, R>,
    {
        let route = Route::of::<L, U, R>();
        let previous = self.index();
        drop(self.storage.take());

        let guard = ValuelessGuard { previous, route };
        let storage = L::inject(value);
        mem::forget(guard);

        tracing::trace!(
            ?previous,
            index = route.index,
            rank = ?route.rank,
            category = ?route.category,
            alternative = route.alternative,
            "assigned variant"
        );
        self.storage = Some(storage);
    }

    /// Position of the held alternative, `None` when valueless.
    #[must_use]
    pub fn index(&self) -> Option<usize> {
        self.storage.as_ref().map(Storage::position)
    }

    #[must_use]
    pub const fn is_valueless(&self) -> bool {
        self.storage.is_none()
    }

    /// Catalog entry of the held alternative.
    #[must_use]
    pub fn alternative(&self) -> Option<AlternativeInfo> {
        self.storage
            .as_ref()
            .and_then(|storage| L::describe(storage.position()))
    }

    #[must_use]
    pub fn get_at<const K: usize>(&self) -> Option<&<L as At<K>>::Output>
    where
        L: At<K>,
    {
        self.storage.as_ref().and_then(<L as At<K>>::cell)
    }

    #[must_use]
    pub fn get_at_mut<const K: usize>(&mut self) -> Option<&mut <L as At<K>>::Output>
    where
        L: At<K>,
    {
        self.storage.as_mut().and_then(<L as At<K>>::cell_mut)
    }

    /// Like [`get_at`](Self::get_at), but says why the alternative is unavailable.
    pub fn try_get_at<const K: usize>(&self) -> Result<&<L as At<K>>::Output, AccessError>
    where
        L: At<K>,
    {
        let storage = self.storage.as_ref().ok_or(AccessError::Valueless)?;
        <L as At<K>>::cell(storage)
            .ok_or_else(|| AccessError::inactive::<L>(K, storage.position()))
    }

    /// Alternative `K`, without checking that it is the live one.
    ///
    /// # Safety
    ///
    /// The variant must hold alternative `K`. Anything else is undefined behavior.
    #[must_use]
    pub unsafe fn get_at_unchecked<const K: usize>(&self) -> &<L as At<K>>::Output
    where
        L: At<K>,
    {
        match self.get_at::<K>() {
            Some(value) => value,
            // SAFETY: the caller guarantees alternative `K` is live.
            None => unsafe { unreachable_unchecked() },
        }
    }

    /// The held value if it is a `T`. `P` is inferred.
    #[must_use]
    pub fn get_as<T, P>(&self) -> Option<&T>
    where
        L: Locate<T, P>,
    {
        self.storage.as_ref().and_then(<L as Locate<T, P>>::project)
    }

    #[must_use]
    pub fn get_as_mut<T, P>(&mut self) -> Option<&mut T>
    where
        L: Locate<T, P>,
    {
        self.storage
            .as_mut()
            .and_then(<L as Locate<T, P>>::project_mut)
    }

    pub fn try_get_as<T, P>(&self) -> Result<&T, AccessError>
    where
        L: Locate<T, P>,
        P: Position,
    {
        let storage = self.storage.as_ref().ok_or(AccessError::Valueless)?;
        <L as Locate<T, P>>::project(storage)
            .ok_or_else(|| AccessError::inactive::<L>(P::INDEX, storage.position()))
    }

    #[must_use]
    pub fn holds<T, P>(&self) -> bool
    where
        L: Locate<T, P>,
    {
        self.get_as::<T, P>().is_some()
    }

    /// Move alternative `K` out, or get the variant back unchanged.
    pub fn into_at<const K: usize>(self) -> Result<<L as At<K>>::Output, Self>
    where
        L: At<K>,
    {
        match self.storage {
            Some(storage) => <L as At<K>>::extract(storage).map_err(Self::from_chain),
            None => Err(Self { storage: None }),
        }
    }

    pub fn into_as<T, P>(self) -> Result<T, Self>
    where
        L: Locate<T, P>,
    {
        match self.storage {
            Some(storage) => <L as Locate<T, P>>::extract(storage).map_err(Self::from_chain),
            None => Err(Self { storage: None }),
        }
    }

    #[cfg_attr(not(feature = "serde"), allow(dead_code))]
    pub(crate) const fn chain(&self) -> Option<&L> {
        self.storage.as_ref()
    }

    pub(crate) const fn from_chain(storage: L) -> Self {
        Self {
            storage: Some(storage),
        }
    }
}

impl<H: Default, T: Storage> Default for Variant<Chain<H, T>> {
    /// Alternative 0, default-constructed.
    fn default() -> Self {
        tracing::trace!(
            index = 0,
            alternative = type_name::<H>(),
            "default-constructed variant"
        );
        Self {
            storage: Some(Chain::Here(H::default())),
        }
    }
}

impl<L: Storage + fmt::Debug> fmt::Debug for Variant<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.storage {
            Some(storage) => f
                .debug_struct("Variant")
                .field("index", &storage.position())
                .field("value", storage)
                .finish(),
            None => f.write_str("Variant(<valueless>)"),
        }
    }
}

/// Where a source of type `U` lands in `L`, for log fields.
#[derive(Clone, Copy)]
struct Route {
    index: usize,
    rank: Rank,
    category: Category,
    alternative: &'static str,
}

impl Route {
    fn of<L: Resolve<U, R>, U, R>() -> Self {
        Self {
            index: L::INDEX,
            rank: L::RANK,
            category: L::CATEGORY,
            alternative: type_name::<L::Target>(),
        }
    }
}

/// Armed while `assign` constructs the new value; only dropped on unwind.
struct ValuelessGuard {
    previous: Option<usize>,
    route: Route,
}

impl Drop for ValuelessGuard {
    fn drop(&mut self) {
        tracing::warn!(
            previous = ?self.previous,
            target = self.route.index,
            alternative = self.route.alternative,
            "constructing the assigned value panicked; variant is valueless"
        );
    }
}
