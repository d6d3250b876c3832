use core::cmp;

use log::debug;

use crate::buffer::ByteVec;
use crate::config::INITIAL_CAPACITY;
use crate::error::SlackVecError;

impl ByteVec {
    /// Reclaims slack so that `capacity == len`.
    ///
    /// An empty vector releases its backing store. Otherwise, once the capacity
    /// exceeds `INITIAL_CAPACITY`, the elements are moved to offset 0 and the
    /// allocation is shrunk to `max(len, INITIAL_CAPACITY)` slots. Calling it
    /// again right away does nothing.
    ///
    /// # Errors
    ///
    /// Returns the error reported by [`ByteVec::validate`].
    pub fn shrink_to_fit(&mut self, element_size: usize) -> Result<(), SlackVecError> {
        self.validate(element_size)?;

        if self.size == 0 {
            self.release();
            return Ok(());
        }

        if self.size < self.capacity && self.capacity > INITIAL_CAPACITY {
            if self.start > 0 {
                let live = self.byte_range(0, self.size, element_size);
                self.buf.copy_within(live, 0);
                self.start = 0;
            }

            debug!(
                "shrinking vector from {} to {} slots",
                self.capacity, self.size
            );
            self.buf.truncate(self.size * element_size);
            self.buf
                .shrink_to(cmp::max(self.size, INITIAL_CAPACITY) * element_size);
            self.capacity = self.size;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shrink_empty_releases() {
        let mut vec = ByteVec::new();
        vec.reserve(10, 4).unwrap();
        vec.shrink_to_fit(4).unwrap();
        assert_eq!(vec.capacity(), 0);
        assert!(vec.buf.is_empty());
    }

    #[test]
    fn test_shrink_relocates_to_front() {
        let mut vec = ByteVec::new();
        vec.push(b"abcdefghijkl", 1).unwrap();
        vec.shift(9, None, 1).unwrap();
        vec.shrink_to_fit(1).unwrap();
        assert_eq!(vec.capacity(), 3);
        assert_eq!(vec.front_slack(), 0);
        assert_eq!(vec.as_bytes(1).unwrap(), b"jkl");
        assert!(vec.buf.capacity() >= INITIAL_CAPACITY);
    }

    #[test]
    fn test_shrink_keeps_small_allocation() {
        let mut vec = ByteVec::new();
        vec.push(b"abc", 1).unwrap();
        vec.shrink_to_fit(1).unwrap();
        assert_eq!(vec.capacity(), INITIAL_CAPACITY);
    }

    #[test]
    fn test_shrink_twice_is_stable() {
        let mut vec = ByteVec::new();
        vec.push(&[7u8; 40], 1).unwrap();
        vec.pop(30, None, 1).unwrap();
        vec.shrink_to_fit(1).unwrap();
        let ptr = vec.as_ptr();
        let capacity = vec.capacity();
        vec.shrink_to_fit(1).unwrap();
        assert_eq!(vec.as_ptr(), ptr);
        assert_eq!(vec.capacity(), capacity);
    }
}
