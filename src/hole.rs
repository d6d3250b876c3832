use log::{trace, warn};

use crate::buffer::ByteVec;
use crate::config::{next_hole_step, INITIAL_CAPACITY};
use crate::error::SlackVecError;

impl ByteVec {
    /// Opens a gap of `len` uninitialised slots at logical `index`.
    ///
    /// The gap is placed using whichever slack is cheapest to consume:
    /// front slack at index 0, back slack at the end, and otherwise the
    /// prefix is moved backwards and, only if that is not enough, the
    /// suffix forwards. `size` is not changed; the caller fills the gap
    /// and accounts for it.
    pub(crate) fn create_hole(
        &mut self,
        index: usize,
        len: usize,
        element_size: usize,
    ) -> Result<(), SlackVecError> {
        if len == 0 {
            return Err(SlackVecError::InvalidArgument {
                parameter: "len",
                value: len,
            });
        }
        if index > self.size {
            return Err(SlackVecError::OutOfRange {
                index,
                len,
                size: self.size,
            });
        }
        let new_size = self
            .size
            .checked_add(len)
            .ok_or(SlackVecError::CapacityOverflow {
                requested: len,
                element_size,
            })?;

        if new_size > self.capacity {
            self.grow_for_hole(len, element_size)?;
        }

        self.place_hole(index, len, element_size);
        Ok(())
    }

    /// Grows the capacity so that `len` more elements fit.
    ///
    /// The step starts at half the capacity and is widened until it covers
    /// `len`. If widening overflows the step becomes exactly `len`. A refused
    /// allocation is retried with half the step, never going below `len`.
    fn grow_for_hole(&mut self, len: usize, element_size: usize) -> Result<(), SlackVecError> {
        let mut step = if self.capacity == 0 {
            INITIAL_CAPACITY
        } else {
            (self.capacity / 2).max(1)
        };

        while step < len {
            if let Some(next) = next_hole_step(step) {
                step = next;
            } else {
                trace!("hole step overflowed, growing by exactly {len} slots");
                step = len;
                break;
            }
        }

        loop {
            match self.grow_by(step, element_size) {
                Ok(()) => return Ok(()),
                Err(err) => {
                    if step > len && step / 2 < len {
                        step = len;
                    } else {
                        step /= 2;
                        if step < len {
                            return Err(err);
                        }
                    }
                    warn!("growing vector for a hole failed ({err}), retrying with {step} slots");
                }
            }
        }
    }

    /// Moves elements so that slots `index..index + len` are free.
    ///
    /// Requires `size + len <= capacity`.
    fn place_hole(&mut self, index: usize, len: usize, element_size: usize) {
        if index == 0 && self.start >= len {
            self.start -= len;
            return;
        }
        if index == self.size && self.back_slack() >= len {
            return;
        }

        // Appending past a full back, or not enough front slack: compact to the
        // physical beginning. Otherwise borrow exactly `len` slots from the front.
        let shift_back = if index == self.size || len > self.start {
            self.start
        } else {
            len
        };

        let old_start = self.start;
        self.start -= shift_back;
        if shift_back > 0 && index > 0 {
            let prefix = old_start * element_size..(old_start + index) * element_size;
            self.buf.copy_within(prefix, self.start * element_size);
        }

        if index < self.size && len > shift_back {
            let forward = len - shift_back;
            let suffix = (old_start + index) * element_size..(old_start + self.size) * element_size;
            self.buf
                .copy_within(suffix, (old_start + index + forward) * element_size);
        }
    }
}
