//! Owned or borrowed digit regions.
//!
//! A [`Buffer`] dereferences to a slice regardless of who owns the memory, so
//! arithmetic code never cares whether a number lives in its own allocation,
//! in an arena slice, or in a window of another number's storage.

use std::fmt;
use std::ops::{Deref, DerefMut, Range};

#[cfg(debug_assertions)]
use std::sync::atomic::{AtomicU64, Ordering};

#[cfg(debug_assertions)]
static NEXT_ORIGIN: AtomicU64 = AtomicU64::new(1);

/// Identity of the allocation a buffer was carved from.
///
/// Debug builds tag each fresh allocation with a distinct id so tests can
/// check which storage a view points into. Release builds carry no data and
/// every origin compares equal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Origin {
    #[cfg(debug_assertions)]
    id: u64,
}

impl Origin {
    /// A new, never seen before origin.
    #[must_use]
    pub fn fresh() -> Self {
        Self {
            #[cfg(debug_assertions)]
            id: NEXT_ORIGIN.fetch_add(1, Ordering::Relaxed),
        }
    }
}

enum Storage<'a, T> {
    Owned(Vec<T>),
    View(&'a mut [T]),
}

/// A contiguous region of elements, owned or borrowed.
pub struct Buffer<'a, T> {
    storage: Storage<'a, T>,
    origin: Origin,
}

impl<T: Default + Clone> Buffer<'static, T> {
    /// Allocate `len` default-valued elements.
    #[must_use]
    pub fn zeroed(len: usize) -> Self {
        Self::owned(vec![T::default(); len])
    }
}

impl<T> Buffer<'static, T> {
    /// Take ownership of an existing vector.
    #[must_use]
    pub fn owned(data: Vec<T>) -> Self {
        Self {
            storage: Storage::Owned(data),
            origin: Origin::fresh(),
        }
    }
}

impl<'a, T> Buffer<'a, T> {
    /// Borrow caller storage. The buffer gets a fresh origin.
    #[must_use]
    pub fn view(data: &'a mut [T]) -> Self {
        Self {
            storage: Storage::View(data),
            origin: Origin::fresh(),
        }
    }

    /// Borrow a sub-range of this buffer. The view keeps this buffer's origin.
    pub fn sub_view(&mut self, range: Range<usize>) -> Buffer<'_, T> {
        let origin = self.origin;
        Buffer {
            storage: Storage::View(&mut self[range]),
            origin,
        }
    }

    /// Whether this buffer owns its allocation.
    #[must_use]
    pub fn is_owned(&self) -> bool {
        matches!(self.storage, Storage::Owned(_))
    }

    /// The allocation this buffer belongs to.
    #[must_use]
    pub fn origin(&self) -> Origin {
        self.origin
    }
}

impl<T> Deref for Buffer<'_, T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        match &self.storage {
            Storage::Owned(v) => v,
            Storage::View(s) => s,
        }
    }
}

impl<T> DerefMut for Buffer<'_, T> {
    fn deref_mut(&mut self) -> &mut [T] {
        match &mut self.storage {
            Storage::Owned(v) => v,
            Storage::View(s) => s,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Buffer<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Buffer")
            .field("owned", &self.is_owned())
            .field("len", &self.len())
            .finish_non_exhaustive()
    }
}
