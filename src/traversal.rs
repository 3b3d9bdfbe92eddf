//! Detached, fail-fast traversals over a [`RingDeque`].
//!
//! A [`Traversal`] remembers only a position and a snapshot of the deque's
//! structural state, so the deque stays free to be mutated between steps.
//! Every step compares that snapshot against the deque it is given; once the
//! deque has been pushed to, popped from, cleared, rotated, or reallocated,
//! the traversal refuses to continue with [`Error::ConcurrentModification`]
//! instead of reading from slots that may have moved.

use core::fmt::{self, Debug, Formatter};
use core::marker::PhantomData;

use crate::deque::RingDeque;
use crate::error::{Error, Result};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Direction {
    Forward,
    Backward,
}

/// The structural state of a deque at one point in time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Stamp {
    pub(crate) generation: usize,
    pub(crate) len: usize,
    pub(crate) capacity: usize,
}

/// A front-to-back or back-to-front walk over a deque that does not borrow it.
///
/// Created by [`RingDeque::traverse`] and [`RingDeque::traverse_back`]. Each
/// call to [`next`](Traversal::next), [`has_next`](Traversal::has_next) or
/// [`advance`](Traversal::advance) takes the deque as an argument and fails
/// with [`Error::ConcurrentModification`] if any element was inserted or
/// removed, or the buffer was reallocated, since the traversal was created.
/// Replacing an element in place (through [`get_mut`](RingDeque::get_mut),
/// [`replace`](RingDeque::replace) or [`swap`](RingDeque::swap)) is not a
/// structural change.
///
/// For the common case where the deque is not touched while walking it,
/// prefer the borrowing [`RingDeque::iter`].
///
/// # Examples
/// ```
/// use ringdeque::RingDeque;
///
/// let mut deque = RingDeque::<&str>::with_capacity(4);
/// deque.extend(["b", "c"].iter());
/// deque.push_front("a");
///
/// let mut walk = deque.traverse_back();
/// let mut seen = Vec::new();
/// while let Some(item) = walk.next(&deque)? {
///     seen.push(*item);
/// }
/// assert_eq!(seen, ["c", "b", "a"]);
/// # Ok::<(), ringdeque::Error>(())
/// ```
pub struct Traversal<T> {
    direction: Direction,
    position: usize,
    stamp: Stamp,
    _elem: PhantomData<fn() -> T>,
}

impl<T> Traversal<T> {
    pub(crate) fn new(direction: Direction, stamp: Stamp) -> Self {
        Traversal {
            direction,
            position: 0,
            stamp,
            _elem: PhantomData,
        }
    }

    /// Returns the number of elements this traversal has yet to yield,
    /// assuming the deque is unchanged.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.stamp.len - self.position
    }

    /// Returns `true` if this traversal walks from the back to the front.
    #[inline]
    pub fn is_reversed(&self) -> bool {
        self.direction == Direction::Backward
    }

    fn check(&self, deque: &RingDeque<T>) -> Result<()> {
        let current = deque.stamp();
        if current != self.stamp {
            #[cfg(feature = "tracing")]
            tracing::debug!(
                expected = ?self.stamp,
                found = ?current,
                position = self.position,
                "deque modified during traversal"
            );
            return Err(Error::ConcurrentModification);
        }

        Ok(())
    }

    /// Returns `Ok(true)` if a call to [`next`](Traversal::next) would yield
    /// another element.
    ///
    /// # Errors
    /// Returns [`Error::ConcurrentModification`] if `deque` was structurally
    /// modified since the traversal was created.
    pub fn has_next(&self, deque: &RingDeque<T>) -> Result<bool> {
        self.check(deque)?;
        Ok(self.position < self.stamp.len)
    }

    /// Yields the next element, or `Ok(None)` once every element was visited.
    ///
    /// # Errors
    /// Returns [`Error::ConcurrentModification`] if `deque` was structurally
    /// modified since the traversal was created.
    ///
    /// # Examples
    /// ```
    /// use ringdeque::{Error, RingDeque};
    ///
    /// let mut deque = RingDeque::with_capacity(2);
    /// deque.push_back(1);
    /// deque.push_back(2);
    ///
    /// let mut walk = deque.traverse();
    /// assert_eq!(walk.next(&deque), Ok(Some(&1)));
    /// assert_eq!(walk.next(&deque), Ok(Some(&2)));
    /// assert_eq!(walk.next(&deque), Ok(None));
    ///
    /// let mut walk = deque.traverse();
    /// deque.pop_front();
    /// assert_eq!(walk.next(&deque), Err(Error::ConcurrentModification));
    /// ```
    pub fn next<'a>(&mut self, deque: &'a RingDeque<T>) -> Result<Option<&'a T>> {
        self.check(deque)?;

        let len = self.stamp.len;
        if self.position == len {
            return Ok(None);
        }

        let index = match self.direction {
            Direction::Forward => self.position,
            Direction::Backward => len - 1 - self.position,
        };

        let item = deque.at(index)?;
        self.position += 1;
        Ok(Some(item))
    }

    /// Yields the next element, treating exhaustion as an error.
    ///
    /// # Errors
    /// Returns [`Error::ConcurrentModification`] if `deque` was structurally
    /// modified since the traversal was created, or [`Error::IndexOutOfRange`]
    /// if every element was already visited.
    ///
    /// # Examples
    /// ```
    /// use ringdeque::{Error, RingDeque};
    ///
    /// let mut deque = RingDeque::with_capacity(1);
    /// deque.push_back('z');
    ///
    /// let mut walk = deque.traverse();
    /// assert_eq!(walk.advance(&deque), Ok(&'z'));
    /// assert_eq!(walk.advance(&deque), Err(Error::IndexOutOfRange { index: 1, len: 1 }));
    /// ```
    pub fn advance<'a>(&mut self, deque: &'a RingDeque<T>) -> Result<&'a T> {
        let position = self.position;
        let len = self.stamp.len;
        self.next(deque)?
            .ok_or(Error::IndexOutOfRange { index: position, len })
    }
}

impl<T> Clone for Traversal<T> {
    fn clone(&self) -> Self {
        Traversal {
            direction: self.direction,
            position: self.position,
            stamp: self.stamp,
            _elem: PhantomData,
        }
    }
}

impl<T> Debug for Traversal<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Traversal")
            .field("direction", &self.direction)
            .field("position", &self.position)
            .field("len", &self.stamp.len)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    fn drain_all<T: Copy>(walk: &mut Traversal<T>, deque: &RingDeque<T>) -> Result<Vec<T>> {
        let mut out = Vec::new();
        while walk.has_next(deque)? {
            out.push(*walk.advance(deque)?);
        }
        Ok(out)
    }

    fn wrapped_deque() -> RingDeque<i32> {
        let mut deque = RingDeque::with_capacity(6);
        deque.extend(2..5);
        deque.push_front(1);
        deque.push_front(0);
        deque
    }

    #[test]
    fn forward_and_backward_agree_with_iter() {
        let deque = wrapped_deque();

        let forward = drain_all(&mut deque.traverse(), &deque).unwrap();
        assert!(forward.iter().eq(deque.iter()));

        let backward = drain_all(&mut deque.traverse_back(), &deque).unwrap();
        assert!(backward.iter().eq(deque.iter().rev()));
    }

    #[test]
    fn fresh_traversals_are_independent() {
        let deque = wrapped_deque();
        let mut first = deque.traverse();
        first.next(&deque).unwrap();
        first.next(&deque).unwrap();
        assert_eq!(first.remaining(), 3);

        let mut second = deque.traverse();
        assert_eq!(second.remaining(), 5);
        assert_eq!(second.next(&deque), Ok(Some(&0)));
        assert_eq!(first.next(&deque), Ok(Some(&2)));
    }

    #[test]
    fn empty_deque() {
        let deque = RingDeque::<u8>::with_capacity(0);
        let mut walk = deque.traverse_back();
        assert!(walk.is_reversed());
        assert_eq!(walk.has_next(&deque), Ok(false));
        assert_eq!(walk.next(&deque), Ok(None));
        assert_eq!(
            walk.advance(&deque),
            Err(Error::IndexOutOfRange { index: 0, len: 0 })
        );
    }

    #[test]
    fn every_structural_change_is_detected() {
        type Mutation = fn(&mut RingDeque<i32>);
        let mutations: [Mutation; 10] = [
            |d| d.push_back(9),
            |d| d.push_front(9),
            |d| {
                let _ = d.try_push_back(9);
            },
            |d| {
                d.pop_front();
            },
            |d| {
                d.pop_back();
            },
            |d| d.clear(),
            |d| d.truncate(2),
            |d| d.retain(|&x| x != 3),
            |d| d.rotate_left(1),
            |d| {
                d.make_contiguous();
            },
        ];

        for mutate in mutations.iter() {
            let mut deque = wrapped_deque();
            let mut walk = deque.traverse();
            assert_eq!(walk.next(&deque), Ok(Some(&0)));

            mutate(&mut deque);
            assert_eq!(walk.next(&deque), Err(Error::ConcurrentModification));
            assert_eq!(walk.has_next(&deque), Err(Error::ConcurrentModification));
        }
    }

    #[test]
    fn rejected_insert_is_not_structural() {
        let mut deque = RingDeque::with_capacity(2);
        deque.extend(1..=2);
        let mut walk = deque.traverse();

        assert_eq!(deque.try_push_back(3), Err(3));
        assert_eq!(deque.try_push_front(0), Err(0));
        assert_eq!(drain_all(&mut walk, &deque), Ok(alloc::vec![1, 2]));
    }

    #[test]
    fn pop_then_push_is_still_detected() {
        let mut deque = wrapped_deque();
        let mut walk = deque.traverse();

        let x = deque.pop_front().unwrap();
        deque.push_front(x);
        assert_eq!(deque.len(), 5);

        assert_eq!(walk.next(&deque), Err(Error::ConcurrentModification));
    }

    #[test]
    fn growth_is_detected() {
        let mut deque = RingDeque::with_capacity(1);
        deque.push_back(1);
        let mut walk = deque.traverse();

        deque.push_back(2);
        assert_eq!(deque.capacity(), 2);
        assert_eq!(walk.advance(&deque), Err(Error::ConcurrentModification));
    }

    #[test]
    fn in_place_updates_are_not_structural() {
        let mut deque = wrapped_deque();
        let mut walk = deque.traverse();
        assert_eq!(walk.next(&deque), Ok(Some(&0)));

        *deque.get_mut(1).unwrap() = 10;
        deque.swap(2, 3);
        deque.replace(4, 40);

        assert_eq!(drain_all(&mut walk, &deque), Ok(alloc::vec![10, 3, 2, 40]));
    }
}
