//! Forwarding capture: carry a source value to its cell without losing how it was
//! passed.
//!
//! The resolver decides *where* a value goes; the capture remembers *how* it
//! arrived. An owned value is moved into its cell, a borrowed one is cloned (the
//! copy constructor of the alternative), a converting source runs its
//! [`Implicit`](crate::Implicit) conversion. Nothing happens until the storage walk
//! reaches the target cell and calls [`Place::place`], which consumes the handle.

use std::marker::PhantomData;

use crate::resolve::Implicit;

/// Ownership category of a captured source, as seen at the call site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// The caller gave up the value; it is moved into the cell.
    Owned,
    /// A read-only borrow; the cell receives a clone.
    Shared,
    /// A mutable borrow; the cell receives a clone and the source is left as is.
    Unique,
    /// The source was consumed by an `Implicit` conversion, whatever its form.
    Converted,
}

/// Category marker: the source is an owned `T`.
pub enum Owned {}
/// Category marker: the source is a `&T`.
pub enum Shared {}
/// Category marker: the source is a `&mut T`.
pub enum Unique {}
/// Category marker: the source is an owned value converted through `Implicit`.
pub enum Converting {}

/// Maps a category marker to its runtime [`Category`].
pub trait Capture {
    const CATEGORY: Category;
}

impl Capture for Owned {
    const CATEGORY: Category = Category::Owned;
}

impl Capture for Shared {
    const CATEGORY: Category = Category::Shared;
}

impl Capture for Unique {
    const CATEGORY: Category = Category::Unique;
}

impl Capture for Converting {
    const CATEGORY: Category = Category::Converted;
}

/// A source value in transit to its cell.
#[must_use = "a captured value does nothing until it is placed"]
pub struct Captured<S, C> {
    source: S,
    category: PhantomData<C>,
}

impl<S, C: Capture> Captured<S, C> {
    #[inline]
    pub fn new(source: S) -> Self {
        Self {
            source,
            category: PhantomData,
        }
    }

    #[must_use]
    pub const fn category(&self) -> Category {
        C::CATEGORY
    }
}

/// Final placement of a captured value as a `T`.
pub trait Place<T> {
    fn place(self) -> T;
}

impl<T> Place<T> for Captured<T, Owned> {
    #[inline]
    fn place(self) -> T {
        self.source
    }
}

impl<T: Clone> Place<T> for Captured<&T, Shared> {
    #[inline]
    fn place(self) -> T {
        self.source.clone()
    }
}

impl<T: Clone> Place<T> for Captured<&mut T, Unique> {
    #[inline]
    fn place(self) -> T {
        T::clone(self.source)
    }
}

impl<U: Implicit<T>, T> Place<T> for Captured<U, Converting> {
    #[inline]
    fn place(self) -> T {
        self.source.convert()
    }
}
