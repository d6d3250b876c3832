use core::marker::PhantomData;

use bytemuck::Pod;

use crate::typed::SlackVec;

/// Iterator over the raw elements of a `ByteVec`
///
/// This iterator implements `Clone`.
#[derive(Clone, Debug)]
pub struct Elements<'a> {
    data: &'a [u8],
    element_size: usize,
    front: usize,
    back: usize,
}

impl<'a> Elements<'a> {
    pub(crate) fn new(data: &'a [u8], element_size: usize) -> Self {
        let back = if element_size == 0 {
            0
        } else {
            data.len() / element_size
        };
        Self {
            data,
            element_size,
            front: 0,
            back,
        }
    }

    fn element(&self, index: usize) -> Option<&'a [u8]> {
        let start = index * self.element_size;
        self.data.get(start..start + self.element_size)
    }
}

impl<'a> Iterator for Elements<'a> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        let result = self.element(self.front);
        self.front += 1;
        result
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl DoubleEndedIterator for Elements<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        self.element(self.back)
    }
}

impl ExactSizeIterator for Elements<'_> {}

/// Iterator over the values of a `SlackVec`
///
/// Values are read out of the byte arena by copy.
#[derive(Clone, Debug)]
pub struct Iter<'a, T> {
    elements: Elements<'a>,
    _phantom: PhantomData<T>,
}

impl<'a, T: Pod> Iter<'a, T> {
    pub(crate) fn new(elements: Elements<'a>) -> Self {
        Self {
            elements,
            _phantom: PhantomData,
        }
    }
}

impl<T: Pod> Iterator for Iter<'_, T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.elements.next().map(bytemuck::pod_read_unaligned)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.elements.size_hint()
    }
}

impl<T: Pod> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.elements.next_back().map(bytemuck::pod_read_unaligned)
    }
}

impl<T: Pod> ExactSizeIterator for Iter<'_, T> {}

impl<'a, T: Pod> IntoIterator for &'a SlackVec<T> {
    type Item = T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
