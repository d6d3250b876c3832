use crate::buffer::ByteVec;
use crate::error::SlackVecError;

impl ByteVec {
    /// Removes `len` elements starting at logical `index`.
    ///
    /// If `out` is given, the removed bytes are copied into it first; it must
    /// be exactly `len * element_size` bytes long. Removing from the front only
    /// advances `start`, removing from the back only shrinks `size`, and a
    /// removal in the middle moves the suffix backwards. Freed slots are kept
    /// as slack until [`ByteVec::shrink_to_fit`].
    ///
    /// # Errors
    ///
    /// - `OutOfRange` if `index + len` exceeds the size
    /// - `InvalidArgument` if `out` has the wrong length
    ///
    /// The vector is unchanged on failure.
    pub fn remove(
        &mut self,
        index: usize,
        len: usize,
        out: Option<&mut [u8]>,
        element_size: usize,
    ) -> Result<(), SlackVecError> {
        self.validate(element_size)?;
        if len > self.size || index > self.size - len {
            return Err(SlackVecError::OutOfRange {
                index,
                len,
                size: self.size,
            });
        }
        if let Some(out) = &out {
            if out.len() != len * element_size {
                return Err(SlackVecError::InvalidArgument {
                    parameter: "out",
                    value: out.len(),
                });
            }
        }

        if len == 0 {
            return Ok(());
        }

        if let Some(out) = out {
            out.copy_from_slice(&self.buf[self.byte_range(index, len, element_size)]);
        }

        self.size -= len;
        if index == 0 {
            self.start += len;
        } else if index < self.size {
            let suffix = self.byte_range(index + len, self.size - index, element_size);
            self.buf
                .copy_within(suffix, (self.start + index) * element_size);
        }

        Ok(())
    }

    /// Removes the last `count` elements, optionally copying them into `out`.
    ///
    /// # Errors
    ///
    /// Returns `OutOfRange` if `count` exceeds the size, otherwise the errors
    /// of [`ByteVec::remove`].
    pub fn pop(
        &mut self,
        count: usize,
        out: Option<&mut [u8]>,
        element_size: usize,
    ) -> Result<(), SlackVecError> {
        self.validate(element_size)?;
        let index = self
            .size
            .checked_sub(count)
            .ok_or(SlackVecError::OutOfRange {
                index: 0,
                len: count,
                size: self.size,
            })?;
        self.remove(index, count, out, element_size)
    }

    /// Removes the first `count` elements, optionally copying them into `out`.
    ///
    /// # Errors
    ///
    /// Same as [`ByteVec::remove`] at index 0.
    pub fn shift(
        &mut self,
        count: usize,
        out: Option<&mut [u8]>,
        element_size: usize,
    ) -> Result<(), SlackVecError> {
        self.remove(0, count, out, element_size)
    }

    /// Drops every element but keeps the allocation.
    pub fn clear(&mut self) {
        self.start = 0;
        self.size = 0;
    }
}
