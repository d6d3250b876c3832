use alloc::vec::Vec;
use core::ops::Range;

use log::{debug, trace};

use crate::config::{next_capacity, INITIAL_CAPACITY};
use crate::error::SlackVecError;
use crate::iter::Elements;

/// A double-ended vector of fixed-size elements stored as opaque bytes.
///
/// The backing store holds `capacity` slots. Logical elements occupy the slots
/// `start..start + size`; the slots before them are front slack and the slots
/// after them are back slack. The element size is supplied on every call and
/// must stay the same for the whole lifetime of one vector.
///
/// Any slice obtained from an accessor is only valid until the next mutating
/// call: growth, shifting and release all move or free the backing store.
#[derive(Debug, Clone, Default)]
pub struct ByteVec {
    pub(crate) buf: Vec<u8>,
    pub(crate) capacity: usize,
    pub(crate) start: usize,
    pub(crate) size: usize,
}

impl ByteVec {
    /// Creates an empty vector. Nothing is allocated until the first growth.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            buf: Vec::new(),
            capacity: 0,
            start: 0,
            size: 0,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.size
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Total number of allocated slots, including front and back slack.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of unused slots before the first element.
    #[must_use]
    pub fn front_slack(&self) -> usize {
        self.start
    }

    /// Number of unused slots after the last element.
    #[must_use]
    pub fn back_slack(&self) -> usize {
        self.capacity - self.start - self.size
    }

    /// Base address of the backing store.
    ///
    /// Only meaningful for identity comparisons; the pointer is dangling
    /// while nothing is allocated.
    #[must_use]
    pub fn as_ptr(&self) -> *const u8 {
        self.buf.as_ptr()
    }

    /// Checks the structural invariants against `element_size`.
    ///
    /// Every public entry point calls this before touching the backing store.
    ///
    /// # Errors
    ///
    /// - `InvalidArgument` if `element_size` is zero
    /// - `InvalidHandle` if `start + size` exceeds the capacity, or the backing
    ///   store length does not match `capacity * element_size`
    pub fn validate(&self, element_size: usize) -> Result<(), SlackVecError> {
        if element_size == 0 {
            return Err(SlackVecError::InvalidArgument {
                parameter: "element_size",
                value: element_size,
            });
        }

        match self.start.checked_add(self.size) {
            Some(end) if end <= self.capacity => {}
            _ => {
                return Err(SlackVecError::InvalidHandle {
                    reason: "start + size exceeds capacity",
                })
            }
        }

        if self.capacity == 0 {
            if !self.buf.is_empty() {
                return Err(SlackVecError::InvalidHandle {
                    reason: "zero capacity with a live backing store",
                });
            }
        } else if self.capacity.checked_mul(element_size) != Some(self.buf.len()) {
            return Err(SlackVecError::InvalidHandle {
                reason: "backing store does not match capacity for this element size",
            });
        }

        Ok(())
    }

    /// Byte range of `count` logical elements starting at logical `index`.
    ///
    /// Callers must have validated the vector and the range.
    pub(crate) fn byte_range(&self, index: usize, count: usize, element_size: usize) -> Range<usize> {
        let first = (self.start + index) * element_size;
        first..first + count * element_size
    }

    /// Returns the bytes of all logical elements.
    ///
    /// # Errors
    ///
    /// Returns the error reported by [`ByteVec::validate`].
    pub fn as_bytes(&self, element_size: usize) -> Result<&[u8], SlackVecError> {
        self.validate(element_size)?;
        Ok(&self.buf[self.byte_range(0, self.size, element_size)])
    }

    /// Returns the bytes of all logical elements for in-place modification.
    ///
    /// # Errors
    ///
    /// Returns the error reported by [`ByteVec::validate`].
    pub fn as_bytes_mut(&mut self, element_size: usize) -> Result<&mut [u8], SlackVecError> {
        self.validate(element_size)?;
        let range = self.byte_range(0, self.size, element_size);
        Ok(&mut self.buf[range])
    }

    /// Gets the element at `index`.
    ///
    /// Returns `None` if the index is out of bounds or the vector fails validation.
    #[must_use]
    pub fn get(&self, index: usize, element_size: usize) -> Option<&[u8]> {
        self.validate(element_size).ok()?;
        if index >= self.size {
            return None;
        }
        self.buf.get(self.byte_range(index, 1, element_size))
    }

    /// Gets the element at `index` for in-place modification.
    ///
    /// Returns `None` if the index is out of bounds or the vector fails validation.
    pub fn get_mut(&mut self, index: usize, element_size: usize) -> Option<&mut [u8]> {
        self.validate(element_size).ok()?;
        if index >= self.size {
            return None;
        }
        let range = self.byte_range(index, 1, element_size);
        self.buf.get_mut(range)
    }

    #[must_use]
    pub fn first(&self, element_size: usize) -> Option<&[u8]> {
        self.get(0, element_size)
    }

    #[must_use]
    pub fn last(&self, element_size: usize) -> Option<&[u8]> {
        self.get(self.size.checked_sub(1)?, element_size)
    }

    /// Returns a double-ended iterator over the elements.
    ///
    /// # Errors
    ///
    /// Returns the error reported by [`ByteVec::validate`].
    pub fn iter(&self, element_size: usize) -> Result<Elements<'_>, SlackVecError> {
        Ok(Elements::new(self.as_bytes(element_size)?, element_size))
    }

    /// Ensures at least `additional` free slots after the last element.
    ///
    /// An empty allocation jumps to `INITIAL_CAPACITY`; after that the capacity
    /// grows by half of itself until the request fits. Front slack is not
    /// counted as free space. `reserve(0, _)` never allocates.
    ///
    /// # Errors
    ///
    /// - `CapacityOverflow` if any growth step or the byte size overflows;
    ///   nothing is allocated in that case
    /// - `AllocationFailure` if the allocator refuses the request
    ///
    /// The vector is unchanged on failure.
    pub fn reserve(&mut self, additional: usize, element_size: usize) -> Result<(), SlackVecError> {
        self.validate(element_size)?;
        if additional <= self.back_slack() {
            return Ok(());
        }

        let overflow = SlackVecError::CapacityOverflow {
            requested: additional,
            element_size,
        };
        let required = (self.start + self.size)
            .checked_add(additional)
            .ok_or_else(|| overflow.clone())?;

        let mut new_capacity = if self.capacity == 0 {
            INITIAL_CAPACITY
        } else {
            self.capacity
        };
        while new_capacity < required {
            new_capacity = next_capacity(new_capacity).ok_or_else(|| overflow.clone())?;
        }

        self.grow_to(new_capacity, element_size)
    }

    /// Grows the capacity by exactly `additional` slots.
    pub(crate) fn grow_by(&mut self, additional: usize, element_size: usize) -> Result<(), SlackVecError> {
        let new_capacity =
            self.capacity
                .checked_add(additional)
                .ok_or(SlackVecError::CapacityOverflow {
                    requested: additional,
                    element_size,
                })?;
        self.grow_to(new_capacity, element_size)
    }

    /// Reallocates the backing store to hold `new_capacity` slots.
    ///
    /// Existing bytes keep their offsets, so `start` stays valid.
    fn grow_to(&mut self, new_capacity: usize, element_size: usize) -> Result<(), SlackVecError> {
        let bytes = new_capacity
            .checked_mul(element_size)
            .filter(|bytes| isize::try_from(*bytes).is_ok())
            .ok_or(SlackVecError::CapacityOverflow {
                requested: new_capacity,
                element_size,
            })?;

        let additional_bytes = bytes.saturating_sub(self.buf.len());
        self.buf
            .try_reserve_exact(additional_bytes)
            .map_err(|_| SlackVecError::AllocationFailure { bytes })?;

        trace!(
            "growing vector from {} to {} slots of {} bytes",
            self.capacity,
            new_capacity,
            element_size
        );
        self.buf.resize(bytes, 0);
        self.capacity = new_capacity;
        Ok(())
    }

    /// Frees the backing store and returns to the zero state.
    pub fn release(&mut self) {
        if self.capacity > 0 {
            debug!("releasing vector of {} slots", self.capacity);
        }
        *self = Self::new();
    }
}
