use std::fmt;

use util::collections::Array;

use crate::{Error, Result};

/// Capacity of a stack created without an explicit one.
pub const DEFAULT_CAPACITY: usize = 10;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Options {
    pub capacity: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
        }
    }
}

/// Fixed capacity, last-in first-out stack.
///
/// Slots `[0, count)` hold the live elements from bottom to top. Every slot at or above `count`
/// is `None`, so a popped element is never retained by the stack.
#[derive(Clone)]
pub struct BoundedStack<T> {
    slots: Array<Option<T>>,
    count: usize,
}

impl<T> BoundedStack<T> {
    /// Create an empty stack. Fails with [Error::InvalidCapacity] if `capacity` is below one,
    /// including negative values that do not fit in a usize.
    pub fn new(capacity: impl TryInto<usize>) -> Result<Self> {
        match capacity.try_into() {
            Ok(capacity) if capacity > 0 => Ok(Self::with_capacity(capacity)),
            _ => Err(Error::InvalidCapacity),
        }
    }

    pub fn with_options(options: Options) -> Result<Self> {
        Self::new(options.capacity)
    }

    fn with_capacity(capacity: usize) -> Self {
        debug_assert!(capacity > 0);
        log::trace!("new stack, capacity = {capacity}");
        Self {
            slots: Array::new(capacity, || None),
            count: 0,
        }
    }

    /// Push `value` on top of the stack. On overflow the value is dropped and the stack is left
    /// untouched; use [BoundedStack::try_push] to get it back.
    pub fn push(&mut self, value: T) -> Result<()> {
        self.try_push(value).map_err(|_| Error::StackFull {
            capacity: self.capacity(),
        })
    }

    /// Push `value` on top of the stack, handing it back if the stack is full.
    pub fn try_push(&mut self, value: T) -> std::result::Result<(), T> {
        if self.is_full() {
            return Err(value);
        }
        self.slots[self.count] = Some(value);
        self.count += 1;
        log::trace!("push, size = {}", self.count);
        Ok(())
    }

    /// Remove the top element and return it.
    pub fn pop(&mut self) -> Result<T> {
        let Some(top) = self.count.checked_sub(1) else {
            return Err(Error::StackEmpty);
        };
        let value = self.slots[top].take().ok_or(Error::StackEmpty)?;
        self.count = top;
        log::trace!("pop, size = {}", self.count);
        Ok(value)
    }

    /// Borrow the top element without removing it.
    pub fn peek(&self) -> Result<&T> {
        self.count
            .checked_sub(1)
            .and_then(|top| self.slots[top].as_ref())
            .ok_or(Error::StackEmpty)
    }

    /// Drop every element. The capacity is unchanged.
    pub fn clear(&mut self) {
        self.slots.as_mut_slice()[..self.count]
            .iter_mut()
            .for_each(|slot| *slot = None);
        self.count = 0;
        log::trace!("clear");
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn is_full(&self) -> bool {
        self.count == self.capacity()
    }

    /// Number of elements on the stack.
    pub fn size(&self) -> usize {
        self.count
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of pushes left before the stack is full.
    pub fn remaining(&self) -> usize {
        self.capacity() - self.count
    }

    /// Iterate the elements from bottom to top.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.slots.as_slice()[..self.count].iter().flatten()
    }

    /// Render the elements from bottom to top, separated by `;`. Empty stacks render as `""`.
    pub fn list(&self) -> String
    where
        T: fmt::Display,
    {
        self.to_string()
    }
}

impl<T> Default for BoundedStack<T> {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}

impl<T: fmt::Display> fmt::Display for BoundedStack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, value) in self.iter().enumerate() {
            if index > 0 {
                f.write_str(";")?;
            }
            write!(f, "{value}")?;
        }
        Ok(())
    }
}

impl<T: fmt::Debug> fmt::Debug for BoundedStack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoundedStack")
            .field("capacity", &self.capacity())
            .field("elements", &self.iter().collect::<Vec<_>>())
            .finish()
    }
}


#[cfg(test)]
mod proptests {
    use proptest::prelude::*;

    use super::BoundedStack;
    use crate::Error;

    const TEST_CAPACITY: usize = 32;

    proptest! {
        /// Pushing within capacity counts every push, and the stack is full exactly at capacity.
        #[test]
        fn push_counts(values in prop::collection::vec(any::<u32>(), 0..=TEST_CAPACITY)) {
            let mut stack = BoundedStack::new(TEST_CAPACITY).unwrap();
            for (i, &value) in values.iter().enumerate() {
                prop_assert_eq!(stack.size(), i);
                stack.push(value).unwrap();
            }
            prop_assert_eq!(stack.size(), values.len());
            prop_assert_eq!(stack.is_full(), values.len() == TEST_CAPACITY);
            prop_assert_eq!(stack.remaining(), TEST_CAPACITY - values.len());
        }

        /// Pops return the pushed values in reverse order.
        #[test]
        fn pop_is_lifo(values in prop::collection::vec(any::<i64>(), 1..=TEST_CAPACITY)) {
            let mut stack = BoundedStack::new(TEST_CAPACITY).unwrap();
            for &value in &values {
                stack.push(value).unwrap();
            }
            for &expected in values.iter().rev() {
                prop_assert_eq!(stack.pop(), Ok(expected));
            }
            prop_assert!(stack.is_empty());
            prop_assert_eq!(stack.pop(), Err(Error::StackEmpty));
        }

        /// A full stack rejects pushes without changing its contents.
        #[test]
        fn overflow_is_rejected(values in prop::collection::vec(any::<u8>(), 1..=TEST_CAPACITY), extra in any::<u8>()) {
            let mut stack = BoundedStack::new(values.len()).unwrap();
            for &value in &values {
                stack.push(value).unwrap();
            }
            let before = stack.list();
            prop_assert_eq!(stack.push(extra), Err(Error::StackFull { capacity: values.len() }));
            prop_assert_eq!(stack.size(), values.len());
            prop_assert_eq!(stack.list(), before);
        }

        /// Peeking any number of times returns the top and changes nothing.
        #[test]
        fn peek_is_pure(values in prop::collection::vec(any::<u16>(), 1..=TEST_CAPACITY), peeks in 1usize..8) {
            let mut stack = BoundedStack::new(TEST_CAPACITY).unwrap();
            for &value in &values {
                stack.push(value).unwrap();
            }
            let top = values[values.len() - 1];
            for _ in 0..peeks {
                prop_assert_eq!(stack.peek(), Ok(&top));
            }
            prop_assert_eq!(stack.size(), values.len());
        }

        /// `list` joins the elements bottom to top with `;`.
        #[test]
        fn list_matches_join(values in prop::collection::vec(any::<i32>(), 0..=TEST_CAPACITY)) {
            let mut stack = BoundedStack::new(TEST_CAPACITY).unwrap();
            for &value in &values {
                stack.push(value).unwrap();
            }
            let expected = values.iter().map(i32::to_string).collect::<Vec<_>>().join(";");
            prop_assert_eq!(stack.list().is_empty(), values.is_empty());
            prop_assert_eq!(stack.list(), expected);
        }

        /// After being emptied the stack holds only what is pushed next.
        #[test]
        fn refill(
            first in prop::collection::vec(any::<u32>(), 0..=TEST_CAPACITY),
            second in prop::collection::vec(any::<u32>(), 0..=TEST_CAPACITY),
        ) {
            let mut stack = BoundedStack::new(TEST_CAPACITY).unwrap();
            for &value in &first {
                stack.push(value).unwrap();
            }
            while stack.pop().is_ok() {}
            for &value in &second {
                stack.push(value).unwrap();
            }
            prop_assert_eq!(stack.iter().copied().collect::<Vec<_>>(), second);
        }
    }
}
