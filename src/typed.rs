use alloc::vec::Vec;
use core::cmp::Ordering;
use core::fmt;
use core::marker::PhantomData;
use core::mem;

use bytemuck::Pod;

use crate::buffer::ByteVec;
use crate::error::SlackVecError;
use crate::iter::{Elements, Iter};

/// A typed double-ended vector backed by a [`ByteVec`].
///
/// Fixes the element size to `size_of::<T>()` and forwards every call to the
/// byte engine. Values are stored unaligned and read back by copy, so `T`
/// must be plain old data. Zero-sized types are rejected with
/// `InvalidArgument` on every fallible call.
pub struct SlackVec<T> {
    raw: ByteVec,
    _phantom: PhantomData<T>,
}

impl<T: Pod> SlackVec<T> {
    const ELEMENT_SIZE: usize = mem::size_of::<T>();

    #[must_use]
    pub const fn new() -> Self {
        Self {
            raw: ByteVec::new(),
            _phantom: PhantomData,
        }
    }

    /// Creates a vector with room for at least `capacity` elements.
    ///
    /// # Errors
    ///
    /// Same as [`SlackVec::reserve`].
    pub fn with_capacity(capacity: usize) -> Result<Self, SlackVecError> {
        let mut vec = Self::new();
        vec.reserve(capacity)?;
        Ok(vec)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.raw.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.raw.capacity()
    }

    #[must_use]
    pub fn front_slack(&self) -> usize {
        self.raw.front_slack()
    }

    #[must_use]
    pub fn back_slack(&self) -> usize {
        self.raw.back_slack()
    }

    /// The underlying byte vector.
    #[must_use]
    pub fn as_raw(&self) -> &ByteVec {
        &self.raw
    }

    /// Ensures room for `additional` more elements at the back.
    ///
    /// # Errors
    ///
    /// Same as [`ByteVec::reserve`].
    pub fn reserve(&mut self, additional: usize) -> Result<(), SlackVecError> {
        self.raw.reserve(additional, Self::ELEMENT_SIZE)
    }

    /// Reclaims slack so that the capacity matches the length.
    ///
    /// # Errors
    ///
    /// Same as [`ByteVec::shrink_to_fit`].
    pub fn shrink_to_fit(&mut self) -> Result<(), SlackVecError> {
        self.raw.shrink_to_fit(Self::ELEMENT_SIZE)
    }

    /// Frees the backing store and returns to the empty state.
    pub fn release(&mut self) {
        self.raw.release();
    }

    /// Drops every element but keeps the allocation.
    pub fn clear(&mut self) {
        self.raw.clear();
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<T> {
        self.raw
            .get(index, Self::ELEMENT_SIZE)
            .map(bytemuck::pod_read_unaligned)
    }

    #[must_use]
    pub fn first(&self) -> Option<T> {
        self.get(0)
    }

    #[must_use]
    pub fn last(&self) -> Option<T> {
        self.get(self.len().checked_sub(1)?)
    }

    /// Replaces the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns `OutOfRange` if `index` is not below the length.
    pub fn set(&mut self, index: usize, value: T) -> Result<(), SlackVecError> {
        self.raw
            .assign(index, bytemuck::bytes_of(&value), Self::ELEMENT_SIZE)
    }

    /// Overwrites the elements starting at `index` with `values`.
    ///
    /// # Errors
    ///
    /// Same as [`ByteVec::assign`].
    pub fn assign(&mut self, index: usize, values: &[T]) -> Result<(), SlackVecError> {
        self.raw.validate(Self::ELEMENT_SIZE)?;
        self.raw
            .assign(index, bytemuck::cast_slice(values), Self::ELEMENT_SIZE)
    }

    /// Appends `value`.
    ///
    /// # Errors
    ///
    /// Returns `CapacityOverflow` or `AllocationFailure` if the vector cannot grow.
    pub fn push(&mut self, value: T) -> Result<(), SlackVecError> {
        self.raw.push(bytemuck::bytes_of(&value), Self::ELEMENT_SIZE)
    }

    /// Appends all of `values`.
    ///
    /// # Errors
    ///
    /// Same as [`SlackVec::push`].
    pub fn push_slice(&mut self, values: &[T]) -> Result<(), SlackVecError> {
        self.raw.validate(Self::ELEMENT_SIZE)?;
        self.raw
            .push(bytemuck::cast_slice(values), Self::ELEMENT_SIZE)
    }

    /// Prepends `value`.
    ///
    /// # Errors
    ///
    /// Same as [`SlackVec::push`].
    pub fn unshift(&mut self, value: T) -> Result<(), SlackVecError> {
        self.raw
            .unshift(bytemuck::bytes_of(&value), Self::ELEMENT_SIZE)
    }

    /// Prepends all of `values`, keeping their order.
    ///
    /// # Errors
    ///
    /// Same as [`SlackVec::push`].
    pub fn unshift_slice(&mut self, values: &[T]) -> Result<(), SlackVecError> {
        self.raw.validate(Self::ELEMENT_SIZE)?;
        self.raw
            .unshift(bytemuck::cast_slice(values), Self::ELEMENT_SIZE)
    }

    /// Inserts `value` before `index`.
    ///
    /// # Errors
    ///
    /// Returns `OutOfRange` if `index` is greater than the length, otherwise the
    /// errors of [`SlackVec::push`].
    pub fn insert(&mut self, index: usize, value: T) -> Result<(), SlackVecError> {
        self.raw
            .insert(index, bytemuck::bytes_of(&value), Self::ELEMENT_SIZE)
    }

    /// Inserts all of `values` before `index`.
    ///
    /// # Errors
    ///
    /// Same as [`SlackVec::insert`].
    pub fn insert_slice(&mut self, index: usize, values: &[T]) -> Result<(), SlackVecError> {
        self.raw.validate(Self::ELEMENT_SIZE)?;
        self.raw
            .insert(index, bytemuck::cast_slice(values), Self::ELEMENT_SIZE)
    }

    /// Removes and returns the last element.
    ///
    /// Returns `None` if the vector is empty.
    pub fn pop(&mut self) -> Option<T> {
        let mut value = T::zeroed();
        self.raw
            .pop(1, Some(bytemuck::bytes_of_mut(&mut value)), Self::ELEMENT_SIZE)
            .ok()?;
        Some(value)
    }

    /// Removes the last `out.len()` elements and copies them into `out`.
    ///
    /// # Errors
    ///
    /// Returns `OutOfRange` if `out` is longer than the vector.
    pub fn pop_into(&mut self, out: &mut [T]) -> Result<(), SlackVecError> {
        self.raw.validate(Self::ELEMENT_SIZE)?;
        self.raw.pop(
            out.len(),
            Some(bytemuck::cast_slice_mut(out)),
            Self::ELEMENT_SIZE,
        )
    }

    /// Removes and returns the first element.
    ///
    /// Returns `None` if the vector is empty.
    pub fn shift(&mut self) -> Option<T> {
        let mut value = T::zeroed();
        self.raw
            .shift(1, Some(bytemuck::bytes_of_mut(&mut value)), Self::ELEMENT_SIZE)
            .ok()?;
        Some(value)
    }

    /// Removes the first `out.len()` elements and copies them into `out`.
    ///
    /// # Errors
    ///
    /// Returns `OutOfRange` if `out` is longer than the vector.
    pub fn shift_into(&mut self, out: &mut [T]) -> Result<(), SlackVecError> {
        self.raw.validate(Self::ELEMENT_SIZE)?;
        self.raw.shift(
            out.len(),
            Some(bytemuck::cast_slice_mut(out)),
            Self::ELEMENT_SIZE,
        )
    }

    /// Removes and returns the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns `OutOfRange` if `index` is not below the length.
    pub fn remove(&mut self, index: usize) -> Result<T, SlackVecError> {
        let mut value = T::zeroed();
        self.raw.remove(
            index,
            1,
            Some(bytemuck::bytes_of_mut(&mut value)),
            Self::ELEMENT_SIZE,
        )?;
        Ok(value)
    }

    /// Removes `out.len()` elements starting at `index` and copies them into `out`.
    ///
    /// # Errors
    ///
    /// Returns `OutOfRange` if the range does not fit in the vector.
    pub fn remove_into(&mut self, index: usize, out: &mut [T]) -> Result<(), SlackVecError> {
        self.raw.validate(Self::ELEMENT_SIZE)?;
        self.raw.remove(
            index,
            out.len(),
            Some(bytemuck::cast_slice_mut(out)),
            Self::ELEMENT_SIZE,
        )
    }

    /// Removes `len` elements starting at `index`.
    ///
    /// # Errors
    ///
    /// Returns `OutOfRange` if the range does not fit in the vector.
    pub fn remove_range(&mut self, index: usize, len: usize) -> Result<(), SlackVecError> {
        self.raw.remove(index, len, None, Self::ELEMENT_SIZE)
    }

    /// Exchanges the elements at `first` and `second`.
    ///
    /// # Errors
    ///
    /// Returns `OutOfRange` if either index is not below the length.
    pub fn swap(&mut self, first: usize, second: usize) -> Result<(), SlackVecError> {
        self.raw.swap(first, second, Self::ELEMENT_SIZE)
    }

    /// Sorts the elements with `compare`. Not stable.
    ///
    /// # Errors
    ///
    /// Same as [`ByteVec::sort_by`].
    pub fn sort_by<F>(&mut self, mut compare: F) -> Result<(), SlackVecError>
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        self.raw.sort_by(Self::ELEMENT_SIZE, |a, b| {
            let a: T = bytemuck::pod_read_unaligned(a);
            let b: T = bytemuck::pod_read_unaligned(b);
            compare(&a, &b)
        })
    }

    /// Sorts the elements in ascending order. Not stable.
    ///
    /// # Errors
    ///
    /// Same as [`ByteVec::sort_by`].
    pub fn sort(&mut self) -> Result<(), SlackVecError>
    where
        T: Ord,
    {
        self.sort_by(T::cmp)
    }

    /// Returns a double-ended iterator over copies of the elements.
    #[must_use]
    pub fn iter(&self) -> Iter<'_, T> {
        let data = self.raw.as_bytes(Self::ELEMENT_SIZE).unwrap_or(&[]);
        Iter::new(Elements::new(data, Self::ELEMENT_SIZE))
    }

    #[must_use]
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().collect()
    }
}

impl<T: Pod> Default for SlackVec<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for SlackVec<T> {
    fn clone(&self) -> Self {
        Self {
            raw: self.raw.clone(),
            _phantom: PhantomData,
        }
    }
}

impl<T: Pod + fmt::Debug> fmt::Debug for SlackVec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: Pod> TryFrom<&[T]> for SlackVec<T> {
    type Error = SlackVecError;

    fn try_from(values: &[T]) -> Result<Self, Self::Error> {
        let mut vec = Self::new();
        vec.push_slice(values)?;
        Ok(vec)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_sized_elements_are_rejected() {
        let mut vec: SlackVec<()> = SlackVec::new();
        assert_eq!(
            vec.push(()),
            Err(SlackVecError::InvalidArgument {
                parameter: "element_size",
                value: 0
            })
        );
        assert!(vec.push_slice(&[(), ()]).is_err());
        assert_eq!(vec.pop(), None);
        assert_eq!(vec.iter().count(), 0);
    }

    #[test]
    fn test_values_survive_unaligned_storage() {
        let mut vec: SlackVec<u64> = SlackVec::new();
        vec.push(u64::MAX).unwrap();
        vec.push(7).unwrap();
        vec.shift().unwrap();
        vec.unshift(3).unwrap();
        assert_eq!(vec.to_vec(), [3, 7]);
    }
}
