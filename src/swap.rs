use alloc::vec::Vec;
use core::cmp::Ordering;

use crate::buffer::ByteVec;
use crate::config::SWAP_SCRATCH_SIZE;
use crate::error::SlackVecError;

impl ByteVec {
    /// Exchanges the elements at `first` and `second`.
    ///
    /// Bytes are moved through a fixed on-stack scratch area, chunk by chunk,
    /// so elements of any size are swapped without allocating.
    ///
    /// # Errors
    ///
    /// Returns `OutOfRange` if either index is not below the size.
    pub fn swap(&mut self, first: usize, second: usize, element_size: usize) -> Result<(), SlackVecError> {
        self.validate(element_size)?;
        for index in [first, second] {
            if index >= self.size {
                return Err(SlackVecError::OutOfRange {
                    index,
                    len: 1,
                    size: self.size,
                });
            }
        }
        if first == second {
            return Ok(());
        }

        let a = self.byte_range(first, 1, element_size).start;
        let b = self.byte_range(second, 1, element_size).start;
        let mut scratch = [0u8; SWAP_SCRATCH_SIZE];
        let mut offset = 0;
        while offset < element_size {
            let n = (element_size - offset).min(SWAP_SCRATCH_SIZE);
            let chunk = &mut scratch[..n];
            chunk.copy_from_slice(&self.buf[a + offset..a + offset + n]);
            self.buf.copy_within(b + offset..b + offset + n, a + offset);
            self.buf[b + offset..b + offset + n].copy_from_slice(chunk);
            offset += n;
        }

        Ok(())
    }

    /// Sorts the elements with `compare`. The order of equal elements is not
    /// preserved.
    ///
    /// The permutation is computed by the core unstable sort and then applied
    /// through a temporary copy of the elements.
    ///
    /// # Errors
    ///
    /// Returns `AllocationFailure` if the temporary buffers cannot be allocated.
    pub fn sort_by<F>(&mut self, element_size: usize, mut compare: F) -> Result<(), SlackVecError>
    where
        F: FnMut(&[u8], &[u8]) -> Ordering,
    {
        self.validate(element_size)?;
        if self.size < 2 {
            return Ok(());
        }

        let live = self.byte_range(0, self.size, element_size);
        let data = &self.buf[live.clone()];

        let mut order = Vec::new();
        order
            .try_reserve_exact(self.size)
            .map_err(|_| SlackVecError::AllocationFailure {
                bytes: self.size * core::mem::size_of::<usize>(),
            })?;
        order.extend(0..self.size);
        order.sort_unstable_by(|&x, &y| {
            compare(
                element(data, x, element_size),
                element(data, y, element_size),
            )
        });

        let mut sorted = Vec::new();
        sorted
            .try_reserve_exact(data.len())
            .map_err(|_| SlackVecError::AllocationFailure { bytes: data.len() })?;
        for i in order {
            sorted.extend_from_slice(element(data, i, element_size));
        }

        self.buf[live].copy_from_slice(&sorted);
        Ok(())
    }
}

fn element(data: &[u8], index: usize, element_size: usize) -> &[u8] {
    &data[index * element_size..(index + 1) * element_size]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_swap_small_elements() {
        let mut vec = ByteVec::new();
        vec.push(b"aabbcc", 2).unwrap();
        vec.swap(0, 2, 2).unwrap();
        assert_eq!(vec.as_bytes(2).unwrap(), b"ccbbaa");
    }

    #[test]
    fn test_swap_elements_larger_than_scratch() {
        let size = SWAP_SCRATCH_SIZE * 2 + 5;
        let mut data = Vec::new();
        data.extend(core::iter::repeat(1u8).take(size));
        data.extend((0..size).map(|i| i as u8));

        let mut vec = ByteVec::new();
        vec.push(&data, size).unwrap();
        vec.swap(1, 0, size).unwrap();

        let bytes = vec.as_bytes(size).unwrap();
        assert_eq!(&bytes[..size], &data[size..]);
        assert_eq!(&bytes[size..], &data[..size]);
    }

    #[test]
    fn test_swap_same_index() {
        let mut vec = ByteVec::new();
        vec.push(b"ab", 1).unwrap();
        vec.swap(1, 1, 1).unwrap();
        assert_eq!(vec.as_bytes(1).unwrap(), b"ab");
    }

    #[test]
    fn test_sort_respects_start_offset() {
        let mut vec = ByteVec::new();
        vec.push(b"xdcab", 1).unwrap();
        vec.shift(1, None, 1).unwrap();
        vec.sort_by(1, |a, b| a.cmp(b)).unwrap();
        assert_eq!(vec.as_bytes(1).unwrap(), b"abcd");
        assert_eq!(vec.front_slack(), 1);
    }
}
