use crate::{
    container::{Container, SuffixableContainer},
    error::{Error, Result},
};
use smallvec::SmallVec;

/// Stacks this small stay on the caller's stack frame.
const INLINE: usize = 4;

/// A generic last-in-first-out container.
///
/// Index 0 is the bottom (earliest pushed, not yet popped); the highest
/// valid index is the top. Elements leave only through [`Stack::pop`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stack<T> {
    items: SmallVec<[T; INLINE]>,
}

impl<T> Stack<T> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            items: SmallVec::new(),
        }
    }

    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    /// Removes and returns the top element.
    ///
    /// # Errors
    /// Returns [`Error::Empty`] when the stack holds no elements.
    pub fn pop(&mut self) -> Result<T> {
        self.items.pop().ok_or(Error::Empty)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Reads the element at `index` without removing it.
    ///
    /// # Errors
    /// Returns [`Error::OutOfBounds`] unless `index < self.len()`.
    pub fn get(&self, index: usize) -> Result<&T> {
        self.items.get(index).ok_or(Error::OutOfBounds {
            index,
            len: self.items.len(),
        })
    }

    /// The top element, or `None` when the stack is empty.
    #[must_use]
    pub fn top(&self) -> Option<&T> {
        self.items.last()
    }

    /// Bottom-to-top iterator.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// # Safety
    /// `index` must be less than `self.len()`.
    #[cfg(feature = "unsafe")]
    #[must_use]
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        self.items.get_unchecked(index)
    }
}

impl<T: PartialEq> Stack<T> {
    /// Whether the top element equals `item`. False when empty.
    #[must_use]
    pub fn is_top(&self, item: &T) -> bool {
        self.top() == Some(item)
    }
}

impl<T: Clone> Stack<T> {
    /// Returns a new stack holding the last `size` elements, bottom-to-top
    /// order preserved. The receiver is not mutated.
    ///
    /// # Errors
    /// Returns [`Error::OutOfBounds`] when `size > self.len()`.
    pub fn suffix(&self, size: usize) -> Result<Self> {
        let len = self.items.len();
        if size > len {
            return Err(Error::OutOfBounds { index: size, len });
        }
        let mut result = Self::new();
        for item in &self.items[len - size..] {
            result.push(item.clone());
        }
        Ok(result)
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for Stack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> IntoIterator for Stack<T> {
    type Item = T;
    type IntoIter = smallvec::IntoIter<[T; INLINE]>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Stack<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T> Container for Stack<T> {
    type Item = T;

    fn append(&mut self, item: T) {
        self.push(item);
    }

    fn len(&self) -> usize {
        Stack::len(self)
    }

    fn get(&self, index: usize) -> Result<&T> {
        Stack::get(self, index)
    }
}

impl<T: Clone> SuffixableContainer for Stack<T> {
    type Suffix = Self;

    fn suffix(&self, size: usize) -> Result<Self> {
        Stack::suffix(self, size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_tracks_pushes() {
        let mut stack = Stack::new();
        for n in 1..=10 {
            stack.push(n);
            assert_eq!(stack.len(), n);
        }
    }

    #[test]
    fn push_pop_round_trip() {
        let mut stack: Stack<&str> = ["a", "b"].into_iter().collect();
        let before = stack.len();
        stack.push("c");
        assert_eq!(stack.pop(), Ok("c"));
        assert_eq!(stack.len(), before);
    }

    #[test]
    fn reads_are_idempotent() {
        let stack: Stack<i32> = [4, 5, 6].into_iter().collect();
        assert_eq!(stack.get(1), stack.get(1));
        assert_eq!(stack.top(), stack.top());
        assert_eq!(stack.top(), Some(&6));
    }

    #[test]
    fn suffix_preserves_order() {
        let stack: Stack<char> = ['a', 'b', 'c', 'd'].into_iter().collect();
        let expected: Stack<char> = ['c', 'd'].into_iter().collect();
        assert_eq!(stack.suffix(2), Ok(expected));
        // The receiver is untouched.
        assert_eq!(stack.len(), 4);
    }

    #[test]
    fn suffix_bounds() {
        let stack: Stack<i32> = [1, 2].into_iter().collect();
        assert_eq!(stack.suffix(0), Ok(Stack::new()));
        assert_eq!(stack.suffix(2), Ok(stack.clone()));
        assert_eq!(
            stack.suffix(3),
            Err(Error::OutOfBounds { index: 3, len: 2 })
        );
    }

    #[test]
    fn empty_stack_operations() {
        let mut stack = Stack::<i32>::new();
        assert_eq!(stack.len(), 0);
        assert_eq!(stack.top(), None);
        assert_eq!(stack.pop(), Err(Error::Empty));
        assert!(!stack.is_top(&1));
    }

    #[test]
    fn out_of_range_get() {
        let stack: Stack<i32> = [1, 2, 3].into_iter().collect();
        assert_eq!(
            stack.get(5),
            Err(Error::OutOfBounds { index: 5, len: 3 })
        );
    }

    #[test]
    fn is_top_matches_tail_only() {
        let mut stack = Stack::new();
        stack.push("bottom");
        stack.push("top");
        assert!(stack.is_top(&"top"));
        assert!(!stack.is_top(&"bottom"));
    }
}
