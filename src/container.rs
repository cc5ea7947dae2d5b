use crate::error::{Error, Result};

/// An ordered collection that grows at the tail and supports indexed reads.
///
/// Index 0 is the earliest appended element still held; `len() - 1` is the
/// most recent. Required methods are the minimal mutation/query surface;
/// everything else is provided on top of them.
pub trait Container {
    type Item;

    fn append(&mut self, item: Self::Item);

    fn len(&self) -> usize;

    /// Reads the element at `index` without removing it.
    ///
    /// # Errors
    /// Returns [`Error::OutOfBounds`] unless `index < self.len()`.
    fn get(&self, index: usize) -> Result<&Self::Item>;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether the tail element equals `item`. False when empty.
    fn ends_with(&self, item: &Self::Item) -> bool
    where
        Self::Item: PartialEq,
    {
        let len = self.len();
        len >= 1 && self.get(len - 1).ok() == Some(item)
    }

    /// Arithmetic mean of all elements.
    ///
    /// # Errors
    /// Returns [`Error::Empty`] when the container holds no elements.
    #[allow(clippy::cast_precision_loss)]
    fn average(&self) -> Result<f64>
    where
        Self::Item: Copy + Into<f64>,
    {
        if self.is_empty() {
            return Err(Error::Empty);
        }
        let mut sum = 0.0;
        for index in 0..self.len() {
            sum += (*self.get(index)?).into();
        }
        Ok(sum / self.len() as f64)
    }

    /// Reads the elements at each of `indices`, in iteration order.
    ///
    /// # Errors
    /// Returns [`Error::OutOfBounds`] at the first index that is not less
    /// than `self.len()`.
    fn items_at<I>(&self, indices: I) -> Result<Vec<&Self::Item>>
    where
        I: IntoIterator<Item = usize>,
    {
        let mut result = Vec::new();
        for index in indices {
            result.push(self.get(index)?);
        }
        Ok(result)
    }
}

/// A container whose trailing sub-sequences are containers of the same
/// kind, over the same element type.
pub trait SuffixableContainer: Container {
    type Suffix: SuffixableContainer<Item = Self::Item>;

    /// Returns a new container holding the last `size` elements, in their
    /// original relative order. The receiver is not mutated.
    ///
    /// # Errors
    /// Returns [`Error::OutOfBounds`] when `size > self.len()`.
    fn suffix(&self, size: usize) -> Result<Self::Suffix>;
}

impl<T> Container for Vec<T> {
    type Item = T;

    fn append(&mut self, item: T) {
        self.push(item);
    }

    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn get(&self, index: usize) -> Result<&T> {
        self.as_slice().get(index).ok_or(Error::OutOfBounds {
            index,
            len: Vec::len(self),
        })
    }
}

/// True iff the two containers hold equal elements in the same order.
/// The containers may be of different kinds as long as their element
/// types match.
#[must_use]
pub fn all_items_match<C1, C2>(first: &C1, second: &C2) -> bool
where
    C1: Container,
    C2: Container<Item = C1::Item>,
    C1::Item: PartialEq,
{
    if first.len() != second.len() {
        return false;
    }
    for index in 0..first.len() {
        if first.get(index).ok() != second.get(index).ok() {
            return false;
        }
    }
    true
}
