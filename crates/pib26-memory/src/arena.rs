//! Bump arena for digit storage.
//!
//! Numbers built as views over arena slices are released all at once when the
//! arena is reset or dropped.

use bumpalo::Bump;

/// Bump arena handing out zero-filled slices for digit buffers.
pub struct DigitArena {
    bump: Bump,
}

impl DigitArena {
    /// Create a new arena with default capacity.
    #[must_use]
    pub fn new() -> Self {
        Self { bump: Bump::new() }
    }

    /// Create a new arena with the given initial capacity in bytes.
    #[must_use]
    pub fn with_capacity(bytes: usize) -> Self {
        Self {
            bump: Bump::with_capacity(bytes),
        }
    }

    /// Allocate a default-filled slice of `len` elements.
    ///
    /// Digits default to zero, so the slice is ready to back an empty number.
    pub fn alloc_slice<T: Default + Copy>(&self, len: usize) -> &mut [T] {
        self.bump.alloc_slice_fill_default(len)
    }

    /// Reset the arena, releasing every slice at once.
    pub fn reset(&mut self) {
        self.bump.reset();
    }

    /// Number of bytes currently reserved by the arena.
    #[must_use]
    pub fn allocated_bytes(&self) -> usize {
        self.bump.allocated_bytes()
    }
}

impl Default for DigitArena {
    fn default() -> Self {
        Self::new()
    }
}
