use crate::buffer::ByteVec;
use crate::error::SlackVecError;

fn element_count(values: &[u8], element_size: usize) -> Result<usize, SlackVecError> {
    if values.len() % element_size != 0 {
        return Err(SlackVecError::InvalidArgument {
            parameter: "values",
            value: values.len(),
        });
    }
    Ok(values.len() / element_size)
}

impl ByteVec {
    /// Opens room for `count` elements at `index` and returns it.
    ///
    /// The size already includes the new elements. The returned bytes hold
    /// stale data and should be overwritten by the caller.
    ///
    /// # Errors
    ///
    /// - `OutOfRange` if `index` is greater than the size
    /// - `CapacityOverflow` or `AllocationFailure` if the vector cannot grow
    ///
    /// The vector is unchanged on failure.
    pub fn insert_with(
        &mut self,
        index: usize,
        count: usize,
        element_size: usize,
    ) -> Result<&mut [u8], SlackVecError> {
        self.validate(element_size)?;
        if index > self.size {
            return Err(SlackVecError::OutOfRange {
                index,
                len: count,
                size: self.size,
            });
        }
        if count == 0 {
            return Ok(&mut self.buf[0..0]);
        }

        self.create_hole(index, count, element_size)?;
        self.size += count;
        let range = self.byte_range(index, count, element_size);
        Ok(&mut self.buf[range])
    }

    /// Inserts the elements in `values` before `index`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `values` is not a whole number of
    /// elements, otherwise the errors of [`ByteVec::insert_with`].
    pub fn insert(&mut self, index: usize, values: &[u8], element_size: usize) -> Result<(), SlackVecError> {
        self.validate(element_size)?;
        let count = element_count(values, element_size)?;
        self.insert_with(index, count, element_size)?
            .copy_from_slice(values);
        Ok(())
    }

    /// Appends the elements in `values`.
    ///
    /// # Errors
    ///
    /// Same as [`ByteVec::insert`].
    pub fn push(&mut self, values: &[u8], element_size: usize) -> Result<(), SlackVecError> {
        self.insert(self.size, values, element_size)
    }

    /// Appends room for `count` elements and returns it.
    ///
    /// # Errors
    ///
    /// Same as [`ByteVec::insert_with`].
    pub fn push_with(&mut self, count: usize, element_size: usize) -> Result<&mut [u8], SlackVecError> {
        self.insert_with(self.size, count, element_size)
    }

    /// Prepends the elements in `values`.
    ///
    /// # Errors
    ///
    /// Same as [`ByteVec::insert`].
    pub fn unshift(&mut self, values: &[u8], element_size: usize) -> Result<(), SlackVecError> {
        self.insert(0, values, element_size)
    }

    /// Prepends room for `count` elements and returns it.
    ///
    /// # Errors
    ///
    /// Same as [`ByteVec::insert_with`].
    pub fn unshift_with(&mut self, count: usize, element_size: usize) -> Result<&mut [u8], SlackVecError> {
        self.insert_with(0, count, element_size)
    }

    /// Overwrites existing elements starting at `index` with `values`.
    ///
    /// # Errors
    ///
    /// - `InvalidArgument` if `values` is not a whole number of elements
    /// - `OutOfRange` if `index` is not below the size or the values do not
    ///   fit before the end
    pub fn assign(&mut self, index: usize, values: &[u8], element_size: usize) -> Result<(), SlackVecError> {
        self.validate(element_size)?;
        let count = element_count(values, element_size)?;
        if index >= self.size || self.size - index < count {
            return Err(SlackVecError::OutOfRange {
                index,
                len: count,
                size: self.size,
            });
        }

        let range = self.byte_range(index, count, element_size);
        self.buf[range].copy_from_slice(values);
        Ok(())
    }
}
