//! A growable double-ended queue implemented with a ring buffer.
//!
//! This queue has O(1) inserts and removals from both ends of the sequence,
//! amortized over the occasional reallocation when it runs out of room.
//! It also has O(1) indexing like a vector.

use alloc::vec::Vec;
use core::convert::TryInto;
use core::fmt::{self, Debug, Display, Formatter};
use core::hash::{Hash, Hasher};
use core::iter::{FromIterator, FusedIterator};
use core::marker::PhantomData;
use core::mem::MaybeUninit;
use core::ops::{Index, IndexMut};

use crate::error::{Error, Result};
use crate::storage::{
    allocate, assume_init_slice, assume_init_slice_mut, grown_capacity, index_out_of_bounds,
    mut_ptr_at_index, ptr_at_index, rotation_out_of_bounds, straighten_into, wrap_add, wrap_sub,
    Slots,
};
use crate::traversal::{Direction, Stamp, Traversal};

/// The capacity used by [`RingDeque::new`] and [`Default`].
pub const DEFAULT_CAPACITY: usize = 32;

/// A double-ended queue implemented with a growable ring buffer.
///
/// The "default" usage of this type as a queue is to use [`push_back`](RingDeque::push_back)
/// to add to the queue, and [`pop_front`](RingDeque::pop_front) to remove from it.
///
/// The elements live in a single contiguous block of `capacity` slots that is
/// read as a circular array: the element at logical index `i` is stored in
/// slot `(front + i) % capacity`. When [`push_back`](RingDeque::push_back) or
/// [`push_front`](RingDeque::push_front) find the buffer full, it is replaced
/// with one of `max(len + 1, capacity * 2)` slots, into which the elements are
/// moved in order starting at slot 0. The buffer never shrinks on its own.
///
/// The [`try_push_back`](RingDeque::try_push_back) and
/// [`try_push_front`](RingDeque::try_push_front) variants never reallocate,
/// handing the value back instead when the deque is full.
///
/// Since `RingDeque` is a ring buffer, its elements are not necessarily
/// contiguous in memory. If you want to access the elements as a single slice,
/// you can use [`make_contiguous`](RingDeque::make_contiguous).
pub struct RingDeque<T> {
    buf: Slots<T>,
    front: usize,
    back: usize,
    len: usize,
    generation: usize,
}

impl<T> RingDeque<T> {
    /// Creates an empty deque with room for [`DEFAULT_CAPACITY`] elements.
    ///
    /// # Examples
    /// ```
    /// let deque = ringdeque::RingDeque::<u32>::new();
    /// assert_eq!(deque.len(), 0);
    /// assert_eq!(deque.capacity(), 32);
    /// ```
    #[inline]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates an empty deque with room for exactly `capacity` elements.
    ///
    /// A capacity of zero is allowed; the first insertion will allocate.
    ///
    /// # Examples
    /// ```
    /// let deque = ringdeque::RingDeque::<char>::with_capacity(0);
    /// assert_eq!(deque.capacity(), 0);
    /// assert!(deque.is_full());
    /// ```
    pub fn with_capacity(capacity: usize) -> Self {
        RingDeque {
            buf: allocate(capacity),
            front: 0,
            back: 0,
            len: 0,
            generation: 0,
        }
    }

    /// Creates an empty deque from a capacity of any integer type, failing
    /// with [`Error::InvalidArgument`] if it is negative or does not fit in
    /// a `usize`.
    ///
    /// # Examples
    /// ```
    /// use ringdeque::{Error, RingDeque};
    ///
    /// let deque = RingDeque::<u8>::try_with_capacity(2i32).unwrap();
    /// assert_eq!(deque.capacity(), 2);
    ///
    /// let err = RingDeque::<u8>::try_with_capacity(-1i64).unwrap_err();
    /// assert!(matches!(err, Error::InvalidArgument(_)));
    /// ```
    pub fn try_with_capacity<C: TryInto<usize>>(capacity: C) -> Result<Self> {
        let capacity = capacity.try_into().map_err(|_| {
            Error::InvalidArgument("capacity must be a non-negative integer that fits in a usize")
        })?;
        Ok(Self::with_capacity(capacity))
    }

    /// Returns the number of elements the deque can hold without reallocating.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Returns the number of elements currently in the deque.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` exactly when the deque contains zero elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `true` exactly when the next [`push_back`](RingDeque::push_back)
    /// or [`push_front`](RingDeque::push_front) would reallocate.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.len == self.capacity()
    }

    /// Returns `true` if the deque contains an element equal to the given value.
    ///
    /// # Examples
    /// ```
    /// let mut deque = ringdeque::RingDeque::with_capacity(3);
    /// deque.push_back(0);
    /// deque.push_front(1);
    /// assert_eq!(deque.contains(&1), true);
    /// assert_eq!(deque.contains(&10), false);
    /// ```
    pub fn contains(&self, x: &T) -> bool
    where
        T: PartialEq,
    {
        let (a, b) = self.as_slices();
        a.contains(x) || b.contains(x)
    }

    #[inline(always)]
    fn physical_index(&self, index: usize) -> Option<usize> {
        if index >= self.len {
            return None;
        }

        Some(wrap_add(self.front, index, self.capacity()))
    }

    #[inline(always)]
    fn modified(&mut self) {
        self.generation = self.generation.wrapping_add(1);
    }

    pub(crate) fn stamp(&self) -> Stamp {
        Stamp {
            generation: self.generation,
            len: self.len,
            capacity: self.capacity(),
        }
    }

    /// Returns a reference to the element at the given index, or [`None`] if
    /// the index is out of bounds.
    ///
    /// The element at index 0 is the front of the queue.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        let index = self.physical_index(index)?;
        unsafe { Some(&*ptr_at_index(&self.buf, index)) }
    }

    /// Returns a mutable reference to the element at the given index, or
    /// [`None`] if the index is out of bounds.
    ///
    /// The element at index 0 is the front of the queue.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        let index = self.physical_index(index)?;
        unsafe { Some(&mut *mut_ptr_at_index(&mut self.buf, index)) }
    }

    /// Returns a reference to the element at the given index, or
    /// [`Error::IndexOutOfRange`] unless `index < self.len()`.
    ///
    /// # Examples
    /// ```
    /// use ringdeque::{Error, RingDeque};
    ///
    /// let mut deque = RingDeque::with_capacity(2);
    /// deque.push_back('b');
    /// deque.push_front('a');
    /// assert_eq!(deque.at(1), Ok(&'b'));
    /// assert_eq!(deque.at(2), Err(Error::IndexOutOfRange { index: 2, len: 2 }));
    /// ```
    pub fn at(&self, index: usize) -> Result<&T> {
        let len = self.len;
        self.get(index)
            .ok_or(Error::IndexOutOfRange { index, len })
    }

    /// Returns a mutable reference to the element at the given index, or
    /// [`Error::IndexOutOfRange`] unless `index < self.len()`.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T> {
        let len = self.len;
        self.get_mut(index)
            .ok_or(Error::IndexOutOfRange { index, len })
    }

    /// Returns a reference to the front element, or [`None`] if the deque is empty.
    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.get(0)
    }

    /// Returns a mutable reference to the front element, or [`None`] if the deque is empty.
    #[inline]
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.get_mut(0)
    }

    /// Returns a reference to the back element, or [`None`] if the deque is empty.
    ///
    /// # Examples
    /// ```
    /// let mut deque = ringdeque::RingDeque::with_capacity(4);
    /// assert_eq!(deque.back(), None);
    /// deque.push_back(1);
    /// deque.push_back(2);
    /// assert_eq!(deque.back(), Some(&2));
    /// assert_eq!(deque.len(), 2);
    /// ```
    #[inline]
    pub fn back(&self) -> Option<&T> {
        if self.is_empty() {
            return None;
        }

        let idx = wrap_sub(self.back, 1, self.capacity());
        unsafe { Some(&*ptr_at_index(&self.buf, idx)) }
    }

    /// Returns a mutable reference to the back element, or [`None`] if the deque is empty.
    #[inline]
    pub fn back_mut(&mut self) -> Option<&mut T> {
        if self.is_empty() {
            return None;
        }

        let idx = wrap_sub(self.back, 1, self.capacity());
        unsafe { Some(&mut *mut_ptr_at_index(&mut self.buf, idx)) }
    }

    /// Removes the first element and returns it, or [`None`] if the deque is empty.
    ///
    /// # Examples
    /// ```
    /// let mut deque = ringdeque::RingDeque::with_capacity(3);
    /// deque.push_back(1);
    /// deque.push_back(2);
    /// assert_eq!(deque.pop_front(), Some(1));
    /// assert_eq!(deque.pop_front(), Some(2));
    /// assert_eq!(deque.pop_front(), None);
    /// ```
    pub fn pop_front(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }

        let front = self.front;
        let result = unsafe { ptr_at_index(&self.buf, front).read() };
        self.front = wrap_add(front, 1, self.capacity());
        self.len -= 1;
        self.modified();

        Some(result)
    }

    /// Removes the last element and returns it, or [`None`] if the deque is empty.
    ///
    /// # Examples
    /// ```
    /// let mut deque = ringdeque::RingDeque::with_capacity(3);
    /// deque.push_back(1);
    /// deque.push_back(3);
    /// assert_eq!(deque.pop_back(), Some(3));
    /// assert_eq!(deque.pop_back(), Some(1));
    /// assert_eq!(deque.pop_back(), None);
    /// ```
    pub fn pop_back(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }

        self.back = wrap_sub(self.back, 1, self.capacity());
        let result = unsafe { ptr_at_index(&self.buf, self.back).read() };
        self.len -= 1;
        self.modified();

        Some(result)
    }

    fn write_front(&mut self, value: T) {
        debug_assert!(!self.is_full());
        let idx = wrap_sub(self.front, 1, self.capacity());
        unsafe {
            mut_ptr_at_index(&mut self.buf, idx).write(value);
        }

        self.front = idx;
        self.len += 1;
        self.modified();
    }

    fn write_back(&mut self, value: T) {
        debug_assert!(!self.is_full());
        let idx = self.back;
        unsafe {
            mut_ptr_at_index(&mut self.buf, idx).write(value);
        }

        self.back = wrap_add(idx, 1, self.capacity());
        self.len += 1;
        self.modified();
    }

    /// Prepends an element to the front of the deque, returning `Err(value)`
    /// if it is already full. Never reallocates.
    ///
    /// # Examples
    /// ```
    /// let mut deque = ringdeque::RingDeque::with_capacity(3);
    /// assert!(deque.try_push_front(1).is_ok());
    /// assert!(deque.try_push_front(2).is_ok());
    /// assert!(deque.try_push_front(3).is_ok());
    /// assert_eq!(deque.try_push_front(4), Err(4));
    /// assert_eq!(deque, &[3, 2, 1]);
    /// ```
    pub fn try_push_front(&mut self, value: T) -> core::result::Result<(), T> {
        if self.is_full() {
            return Err(value);
        }

        self.write_front(value);
        Ok(())
    }

    /// Appends an element to the back of the deque, returning `Err(value)`
    /// if it is already full. Never reallocates.
    ///
    /// # Examples
    /// ```
    /// let mut deque = ringdeque::RingDeque::with_capacity(3);
    /// assert!(deque.try_push_back(1).is_ok());
    /// assert!(deque.try_push_back(2).is_ok());
    /// assert!(deque.try_push_back(3).is_ok());
    /// assert_eq!(deque.try_push_back(4), Err(4));
    /// assert_eq!(deque.capacity(), 3);
    /// ```
    pub fn try_push_back(&mut self, value: T) -> core::result::Result<(), T> {
        if self.is_full() {
            return Err(value);
        }

        self.write_back(value);
        Ok(())
    }

    /// Prepends an element to the front of the deque, growing the buffer
    /// first if it is full.
    ///
    /// # Examples
    /// ```
    /// let mut deque = ringdeque::RingDeque::with_capacity(0);
    /// deque.push_front('x');
    /// assert_eq!(deque.capacity(), 1);
    /// assert_eq!(deque[0], 'x');
    /// ```
    pub fn push_front(&mut self, value: T) {
        if self.is_full() {
            self.grow();
        }

        self.write_front(value);
    }

    /// Appends an element to the back of the deque, growing the buffer
    /// first if it is full.
    ///
    /// # Examples
    /// ```
    /// let mut deque = ringdeque::RingDeque::with_capacity(2);
    /// deque.push_back(1);
    /// deque.push_back(2);
    /// deque.push_back(3);
    /// assert_eq!(deque.capacity(), 4);
    /// assert_eq!(deque, &[1, 2, 3]);
    /// ```
    pub fn push_back(&mut self, value: T) {
        if self.is_full() {
            self.grow();
        }

        self.write_back(value);
    }

    /// Moves every element into a buffer of `max(len + 1, capacity * 2)`
    /// slots, front first at slot 0.
    #[cold]
    fn grow(&mut self) {
        let old_capacity = self.capacity();
        let new_capacity = grown_capacity(old_capacity, self.len);
        if new_capacity <= old_capacity {
            return;
        }

        let mut buf = allocate(new_capacity);
        unsafe {
            straighten_into(&self.buf, self.front, self.len, &mut buf);
        }

        // the old slots no longer own anything, dropping the box only frees memory
        self.buf = buf;
        self.front = 0;
        self.back = self.len;
        self.modified();

        #[cfg(feature = "tracing")]
        tracing::trace!(old_capacity, new_capacity, len = self.len, "grew ring buffer");
    }

    /// Shortens the deque, keeping the first `len` elements and dropping the rest.
    ///
    /// If `len` is greater than the deque's current length, this has no effect.
    ///
    /// # Examples
    /// ```
    /// let mut deque = ringdeque::RingDeque::with_capacity(4);
    /// deque.push_back(5);
    /// deque.push_back(10);
    /// deque.push_front(15);
    /// deque.truncate(1);
    /// assert_eq!(deque, &[15]);
    /// ```
    pub fn truncate(&mut self, len: usize) {
        let old_len = self.len;
        if len >= old_len {
            return;
        }

        let cap = self.capacity();
        let front = self.front;

        // shrink first, so a panicking destructor leaks the tail instead of
        // leaving it reachable
        self.len = len;
        self.back = wrap_add(front, len, cap);
        self.modified();

        for i in len..old_len {
            let idx = wrap_add(front, i, cap);
            unsafe {
                mut_ptr_at_index(&mut self.buf, idx).drop_in_place();
            }
        }
    }

    /// Clears the deque, dropping all values.
    ///
    /// The capacity is left unchanged.
    ///
    /// # Examples
    /// ```
    /// let mut deque = ringdeque::RingDeque::with_capacity(4);
    /// deque.extend(1..=3);
    /// deque.clear();
    /// assert!(deque.is_empty());
    /// assert_eq!(deque.capacity(), 4);
    /// assert_eq!(deque.pop_front(), None);
    /// ```
    pub fn clear(&mut self) {
        self.truncate(0);
        self.front = 0;
        self.back = 0;
        self.modified();
    }

    /// Swaps the elements at indices `i` and `j`.
    ///
    /// `i` and `j` may be equal.
    ///
    /// The element at index 0 is the front of the queue.
    ///
    /// # Panics
    /// Panics if either index is out of bounds.
    ///
    /// # Examples
    /// ```
    /// let mut deque = ringdeque::RingDeque::with_capacity(4);
    /// deque.push_back(2);
    /// deque.push_back(1);
    /// deque.push_front(3);
    /// deque.swap(0, 2);
    /// assert_eq!(deque, &[1, 2, 3]);
    /// ```
    pub fn swap(&mut self, i: usize, j: usize) {
        let len = self.len;
        let a = self
            .physical_index(i)
            .unwrap_or_else(|| index_out_of_bounds(i, len));
        let b = self
            .physical_index(j)
            .unwrap_or_else(|| index_out_of_bounds(j, len));
        self.buf.swap(a, b);
    }

    /// Replaces the element at `index` with `value`, returning the old element.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    ///
    /// # Examples
    /// ```
    /// let mut deque = ringdeque::RingDeque::<i32>::with_capacity(3);
    /// deque.extend([1, 2, 4].iter());
    /// assert_eq!(deque.replace(2, 3), 4);
    /// assert_eq!(deque, &[1, 2, 3]);
    /// ```
    pub fn replace(&mut self, index: usize, value: T) -> T {
        let len = self.len;
        let idx = self
            .physical_index(index)
            .unwrap_or_else(|| index_out_of_bounds(index, len));
        unsafe { mut_ptr_at_index(&mut self.buf, idx).replace(value) }
    }

    /// Retains only the elements specified by the predicate.
    ///
    /// In other words, remove all elements `e` such that `f(&e)` returns `false`.
    /// This method operates in place, visiting each element exactly once in the
    /// original order, and preserves the order of the retained elements.
    ///
    /// # Examples
    /// ```
    /// let mut deque = ringdeque::RingDeque::with_capacity(4);
    /// deque.extend(1..=4);
    /// deque.retain(|&x| x % 2 == 0);
    /// assert_eq!(deque, &[2, 4]);
    /// ```
    pub fn retain<F>(&mut self, mut f: F)
    where
        F: FnMut(&T) -> bool,
    {
        let cap = self.capacity();
        let front = self.front;
        let old_len = self.len;

        // if `f` panics, everything not yet written back is leaked
        self.len = 0;
        self.back = front;
        self.modified();

        let mut kept = 0;
        for i in 0..old_len {
            let src = wrap_add(front, i, cap);
            let keep = f(unsafe { &*ptr_at_index(&self.buf, src) });

            if keep {
                if kept != i {
                    let dst = wrap_add(front, kept, cap);
                    unsafe {
                        core::ptr::copy_nonoverlapping(
                            ptr_at_index(&self.buf, src),
                            mut_ptr_at_index(&mut self.buf, dst),
                            1,
                        );
                    }
                }
                kept += 1;
            } else {
                unsafe {
                    mut_ptr_at_index(&mut self.buf, src).drop_in_place();
                }
            }
        }

        self.len = kept;
        self.back = wrap_add(front, kept, cap);
    }

    fn rotate_left_inner(&mut self, mid: usize) {
        debug_assert!(mid * 2 <= self.len);
        let cap = self.capacity();

        for _ in 0..mid {
            unsafe {
                // front and back coincide when the buffer is full
                core::ptr::copy(
                    ptr_at_index(&self.buf, self.front),
                    mut_ptr_at_index(&mut self.buf, self.back),
                    1,
                );
            }
            self.front = wrap_add(self.front, 1, cap);
            self.back = wrap_add(self.back, 1, cap);
        }
    }

    fn rotate_right_inner(&mut self, k: usize) {
        debug_assert!(k * 2 <= self.len);
        let cap = self.capacity();

        for _ in 0..k {
            self.front = wrap_sub(self.front, 1, cap);
            self.back = wrap_sub(self.back, 1, cap);
            unsafe {
                core::ptr::copy(
                    ptr_at_index(&self.buf, self.back),
                    mut_ptr_at_index(&mut self.buf, self.front),
                    1,
                );
            }
        }
    }

    /// Rotates the deque `mid` places to the left.
    ///
    /// Equivalently,
    ///
    /// * Rotates `mid` into the first position.
    /// * Pops the first `mid` items and pushes them to the end.
    /// * Rotates `len() - mid` places to the right.
    ///
    /// # Panics
    /// Panics if `mid` is greater than the deque's length. Note that
    /// `mid == len()` does *not* panic and is a no-op rotation.
    ///
    /// # Examples
    /// ```
    /// let mut deque = ringdeque::RingDeque::with_capacity(16);
    /// deque.extend(0..10);
    /// for i in 1..10 {
    ///     deque.rotate_left(3);
    ///     assert_eq!(deque.front(), Some(&(i * 3 % 10)));
    /// }
    /// deque.rotate_left(3);
    /// assert_eq!(deque, &[0, 1, 2, 3, 4, 5, 6, 7, 8, 9]);
    /// ```
    pub fn rotate_left(&mut self, mid: usize) {
        if mid > self.len {
            rotation_out_of_bounds(mid, self.len);
        }

        let k = self.len - mid;
        if mid <= k {
            self.rotate_left_inner(mid);
        } else {
            self.rotate_right_inner(k);
        }
        self.modified();
    }

    /// Rotates the deque `k` places to the right.
    ///
    /// Equivalently,
    ///
    /// * Rotates the first item into position `k`.
    /// * Pops the last `k` items and pushes them to the front.
    /// * Rotates `len() - k` places to the left.
    ///
    /// # Panics
    /// Panics if `k` is greater than the deque's length. Note that `k == len()`
    /// does *not* panic and is a no-op rotation.
    ///
    /// # Examples
    /// ```
    /// let mut deque = ringdeque::RingDeque::with_capacity(10);
    /// deque.extend(0..10);
    /// for i in 1..10 {
    ///     deque.rotate_right(3);
    ///     assert_eq!(deque.get(i * 3 % 10), Some(&0));
    /// }
    /// deque.rotate_right(3);
    /// assert_eq!(deque, &[0, 1, 2, 3, 4, 5, 6, 7, 8, 9]);
    /// ```
    pub fn rotate_right(&mut self, k: usize) {
        if k > self.len {
            rotation_out_of_bounds(k, self.len);
        }

        let mid = self.len - k;
        if k <= mid {
            self.rotate_right_inner(k);
        } else {
            self.rotate_left_inner(mid);
        }
        self.modified();
    }

    /// Returns a pair of slices which contain, in order, the contents of the deque.
    ///
    /// If [`make_contiguous`](RingDeque::make_contiguous) was previously called,
    /// all elements of the deque will be in the first slice and the second
    /// slice will be empty.
    ///
    /// # Examples
    /// ```
    /// let mut deque = ringdeque::RingDeque::with_capacity(4);
    /// deque.push_back(2);
    /// deque.push_back(1);
    /// deque.push_front(3);
    /// assert_eq!(deque.as_slices(), (&[3][..], &[2, 1][..]));
    /// ```
    pub fn as_slices(&self) -> (&[T], &[T]) {
        let front = self.front;
        let to_end = self.capacity() - front;
        let (head, tail) = self.buf.split_at(front);

        unsafe {
            if self.len <= to_end {
                (assume_init_slice(&tail[..self.len]), &[])
            } else {
                let wrapped = self.len - to_end;
                (assume_init_slice(tail), assume_init_slice(&head[..wrapped]))
            }
        }
    }

    /// Returns a pair of mutable slices which contain, in order, the contents
    /// of the deque.
    ///
    /// # Examples
    /// ```
    /// let mut deque = ringdeque::RingDeque::with_capacity(4);
    /// deque.push_back(2);
    /// deque.push_back(1);
    /// deque.push_front(3);
    /// deque.as_mut_slices().0[0] = 1;
    /// deque.as_mut_slices().1[1] = 3;
    /// assert_eq!(deque.as_slices(), (&[1][..], &[2, 3][..]));
    /// ```
    pub fn as_mut_slices(&mut self) -> (&mut [T], &mut [T]) {
        let front = self.front;
        let len = self.len;
        let to_end = self.capacity() - front;
        let (head, tail) = self.buf.split_at_mut(front);

        unsafe {
            if len <= to_end {
                (assume_init_slice_mut(&mut tail[..len]), &mut [])
            } else {
                let wrapped = len - to_end;
                (
                    assume_init_slice_mut(tail),
                    assume_init_slice_mut(&mut head[..wrapped]),
                )
            }
        }
    }

    /// Rearranges the internal storage of the deque so it is one contiguous
    /// slice, which is then returned.
    ///
    /// This does not change the order of the inserted elements. As it returns
    /// a mutable slice, this can be used to sort or binary search a deque.
    ///
    /// # Examples
    /// ```
    /// let mut deque = ringdeque::RingDeque::with_capacity(4);
    /// deque.push_back(2);
    /// deque.push_back(1);
    /// deque.push_front(3);
    /// deque.make_contiguous().sort();
    /// assert_eq!(deque.as_slices(), (&[1, 2, 3][..], &[][..]));
    /// ```
    pub fn make_contiguous(&mut self) -> &mut [T] {
        let front = self.front;
        let len = self.len;
        let cap = self.capacity();

        if len > cap - front {
            self.buf.rotate_left(front);
            self.front = 0;
            self.back = wrap_add(0, len, cap);
            self.modified();
        }

        let start = self.front;
        unsafe { assume_init_slice_mut(&mut self.buf[start..start + len]) }
    }

    /// Returns a front-to-back iterator.
    ///
    /// Reverse it with [`Iterator::rev`] to walk the deque back-to-front.
    ///
    /// # Examples
    /// ```
    /// let mut deque = ringdeque::RingDeque::with_capacity(4);
    /// deque.push_back(5);
    /// deque.push_back(3);
    /// deque.push_front(4);
    ///
    /// let mut it = deque.iter();
    /// assert_eq!(it.next(), Some(&4));
    /// assert_eq!(it.next(), Some(&5));
    /// assert_eq!(it.next(), Some(&3));
    /// assert!(it.next().is_none());
    ///
    /// let backwards: Vec<_> = deque.iter().rev().copied().collect();
    /// assert_eq!(backwards, [3, 5, 4]);
    /// ```
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            front: self.front,
            len: self.len,
            buf: &self.buf,
        }
    }

    /// Returns a front-to-back iterator that returns mutable references.
    ///
    /// # Examples
    /// ```
    /// let mut deque = ringdeque::RingDeque::<i32>::with_capacity(4);
    /// deque.extend([5, 3, 4].iter());
    /// for num in deque.iter_mut() {
    ///     *num -= 2;
    /// }
    /// assert_eq!(deque, &[3, 1, 2]);
    /// ```
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut {
            front: self.front,
            len: self.len,
            capacity: self.capacity(),
            ptr: mut_ptr_at_index(&mut self.buf, 0),
            _ref: PhantomData,
        }
    }

    /// Returns a detached front-to-back [`Traversal`] of the deque.
    ///
    /// Unlike [`iter`](RingDeque::iter), the traversal does not borrow the
    /// deque; each step takes the deque as an argument and fails with
    /// [`Error::ConcurrentModification`] if it was structurally modified
    /// since this call.
    ///
    /// # Examples
    /// ```
    /// use ringdeque::{Error, RingDeque};
    ///
    /// let mut deque = RingDeque::with_capacity(4);
    /// deque.extend(1..=3);
    ///
    /// let mut walk = deque.traverse();
    /// assert_eq!(walk.next(&deque), Ok(Some(&1)));
    /// deque.push_back(4);
    /// assert_eq!(walk.next(&deque), Err(Error::ConcurrentModification));
    /// ```
    pub fn traverse(&self) -> Traversal<T> {
        Traversal::new(Direction::Forward, self.stamp())
    }

    /// Returns a detached back-to-front [`Traversal`] of the deque.
    ///
    /// See [`traverse`](RingDeque::traverse) for how modifications are detected.
    pub fn traverse_back(&self) -> Traversal<T> {
        Traversal::new(Direction::Backward, self.stamp())
    }
}

impl<T> Default for RingDeque<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for RingDeque<T> {
    fn clone(&self) -> Self {
        let mut result = Self::with_capacity(self.capacity());
        result.extend(self.iter().cloned());
        result
    }

    fn clone_from(&mut self, source: &Self) {
        self.clear();
        self.extend(source.iter().cloned());
    }
}

impl<T> Index<usize> for RingDeque<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        let len = self.len;
        self.get(index)
            .unwrap_or_else(|| index_out_of_bounds(index, len))
    }
}

impl<T> IndexMut<usize> for RingDeque<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        let len = self.len;
        self.get_mut(index)
            .unwrap_or_else(|| index_out_of_bounds(index, len))
    }
}

impl<T> Drop for RingDeque<T> {
    fn drop(&mut self) {
        let (front, back) = self.as_mut_slices();
        unsafe {
            core::ptr::drop_in_place(front);
            core::ptr::drop_in_place(back);
        }
    }
}

impl<T: Debug> Debug for RingDeque<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let (front, back) = self.as_slices();
        f.debug_list().entries(front).entries(back).finish()
    }
}

/// Renders the elements front to back as `[a, b, c]`.
///
/// # Examples
/// ```
/// let mut deque = ringdeque::RingDeque::<&str>::with_capacity(2);
/// assert_eq!(deque.to_string(), "[]");
/// deque.push_back("A");
/// deque.push_front("B");
/// deque.push_back("C");
/// assert_eq!(deque.to_string(), "[B, A, C]");
/// ```
impl<T: Display> Display for RingDeque<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, item) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            Display::fmt(item, f)?;
        }
        f.write_str("]")
    }
}

impl<T: Hash> Hash for RingDeque<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len.hash(state);
        // hash element by element so the split point between the two
        // slices does not leak into the hash
        self.iter().for_each(|item| item.hash(state));
    }
}

impl<A, B> PartialEq<RingDeque<B>> for RingDeque<A>
where
    A: PartialEq<B>,
{
    fn eq(&self, other: &RingDeque<B>) -> bool {
        if self.len() != other.len() {
            return false;
        }

        let (self_front, self_back) = self.as_slices();
        let (other_front, other_back) = other.as_slices();

        match self_front.len() {
            len if len == other_front.len() => self_front == other_front && self_back == other_back,
            len if len < other_front.len() => {
                let a = self_front.len();
                let b = other_front.len() - a;
                debug_assert_eq!(self_back[..b].len(), other_front[a..].len());
                debug_assert_eq!(self_back[b..].len(), other_back.len());
                self_front == &other_front[..a]
                    && self_back[..b] == other_front[a..]
                    && &self_back[b..] == other_back
            }
            _ => {
                let a = other_front.len();
                let b = self_front.len() - a;
                debug_assert_eq!(self_front[a..].len(), other_back[..b].len());
                debug_assert_eq!(self_back.len(), other_back[b..].len());
                &self_front[..a] == other_front
                    && self_front[a..] == other_back[..b]
                    && self_back == &other_back[b..]
            }
        }
    }
}

impl<T: Eq> Eq for RingDeque<T> {}

impl<T: PartialEq, R: AsRef<[T]>> PartialEq<R> for RingDeque<T> {
    fn eq(&self, other: &R) -> bool {
        let other = other.as_ref();
        if self.len() != other.len() {
            return false;
        }

        let (front, back) = self.as_slices();
        let mid = front.len();
        front == &other[..mid] && back == &other[mid..]
    }
}

impl<T: PartialOrd> PartialOrd for RingDeque<T> {
    fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
        self.iter().partial_cmp(other.iter())
    }
}

impl<T: Ord> Ord for RingDeque<T> {
    fn cmp(&self, other: &Self) -> core::cmp::Ordering {
        self.iter().cmp(other.iter())
    }
}

impl<T> Extend<T> for RingDeque<T> {
    fn extend<It: IntoIterator<Item = T>>(&mut self, iter: It) {
        iter.into_iter().for_each(|item| self.push_back(item));
    }
}

impl<'a, T: 'a + Clone> Extend<&'a T> for RingDeque<T> {
    fn extend<It: IntoIterator<Item = &'a T>>(&mut self, iter: It) {
        iter.into_iter()
            .for_each(|item| self.push_back(item.clone()));
    }
}

impl<T> FromIterator<T> for RingDeque<T> {
    /// Collects the items into a deque whose capacity is the iterator's lower
    /// size bound, growing as needed past that.
    fn from_iter<It: IntoIterator<Item = T>>(iter: It) -> Self {
        let iter = iter.into_iter();
        let mut result = Self::with_capacity(iter.size_hint().0);
        result.extend(iter);
        result
    }
}

impl<T> From<Vec<T>> for RingDeque<T> {
    /// Moves the vector's elements into a deque with exactly `vec.len()` slots.
    ///
    /// # Examples
    /// ```
    /// let deque = ringdeque::RingDeque::from(vec![1, 2, 3]);
    /// assert_eq!(deque.capacity(), 3);
    /// assert_eq!(deque.front(), Some(&1));
    /// ```
    fn from(vec: Vec<T>) -> Self {
        let mut result = Self::with_capacity(vec.len());
        result.extend(vec);
        result
    }
}

/// An iterator over the elements of a deque.
///
/// This `struct` is created by the [`iter`](RingDeque::iter) method on
/// [`RingDeque`]. See its documentation for more.
pub struct Iter<'a, T> {
    front: usize,
    len: usize,
    buf: &'a [MaybeUninit<T>],
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter {
            front: self.front,
            len: self.len,
            buf: self.buf,
        }
    }
}

impl<T: Debug> Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<&'a T> {
        if self.len == 0 {
            return None;
        }

        let front = self.front;
        self.front = wrap_add(front, 1, self.buf.len());
        self.len -= 1;
        unsafe { Some(&*ptr_at_index(self.buf, front)) }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    #[inline]
    fn next_back(&mut self) -> Option<&'a T> {
        if self.len == 0 {
            return None;
        }

        let idx = wrap_add(self.front, self.len - 1, self.buf.len());
        self.len -= 1;
        unsafe { Some(&*ptr_at_index(self.buf, idx)) }
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

/// A mutable iterator over the elements of a deque.
///
/// This `struct` is created by the [`iter_mut`](RingDeque::iter_mut) method
/// on [`RingDeque`]. See its documentation for more.
pub struct IterMut<'a, T> {
    front: usize,
    len: usize,
    capacity: usize,
    ptr: *mut T,
    _ref: PhantomData<&'a mut T>,
}

unsafe impl<T: Send> Send for IterMut<'_, T> {}
unsafe impl<T: Sync> Sync for IterMut<'_, T> {}

impl<T> Debug for IterMut<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("IterMut")
            .field("remaining", &self.len)
            .finish()
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    #[inline]
    fn next(&mut self) -> Option<&'a mut T> {
        if self.len == 0 {
            return None;
        }

        let front = self.front;
        self.front = wrap_add(front, 1, self.capacity);
        self.len -= 1;
        unsafe { Some(&mut *self.ptr.add(front)) }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<'a, T> DoubleEndedIterator for IterMut<'a, T> {
    #[inline]
    fn next_back(&mut self) -> Option<&'a mut T> {
        if self.len == 0 {
            return None;
        }

        let idx = wrap_add(self.front, self.len - 1, self.capacity);
        self.len -= 1;
        unsafe { Some(&mut *self.ptr.add(idx)) }
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}
impl<T> FusedIterator for IterMut<'_, T> {}

/// An owning iterator over the elements of a deque.
///
/// This `struct` is created by the [`into_iter`](RingDeque::into_iter) method
/// on [`RingDeque`] (provided by the `IntoIterator` trait). See its
/// documentation for more.
pub struct IntoIter<T> {
    inner: RingDeque<T>,
}

impl<T: Debug> Debug for IntoIter<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.inner).finish()
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.inner.pop_front()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.inner.len();
        (len, Some(len))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        self.inner.pop_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
impl<T> FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for RingDeque<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    /// Converts the deque into a front-to-back iterator yielding elements by value.
    fn into_iter(self) -> IntoIter<T> {
        IntoIter { inner: self }
    }
}

impl<'a, T> IntoIterator for &'a RingDeque<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut RingDeque<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> IterMut<'a, T> {
        self.iter_mut()
    }
}
