//! Slot storage for the ring and the index arithmetic over it.

use alloc::boxed::Box;
use core::mem::MaybeUninit;

/// A contiguous block of slots, each either holding a `T` or uninitialized.
///
/// Which slots are initialized is tracked entirely by the owning deque.
pub(crate) type Slots<T> = Box<[MaybeUninit<T>]>;

/// Allocates `capacity` uninitialized slots.
pub(crate) fn allocate<T>(capacity: usize) -> Slots<T> {
    (0..capacity).map(|_| MaybeUninit::uninit()).collect()
}

/// Returns the capacity to grow to when a deque holding `len` elements in
/// `capacity` slots is full.
///
/// This is `max(len + 1, capacity * 2)`, so an empty zero-capacity buffer
/// grows to a single slot.
#[inline]
pub(crate) fn grown_capacity(capacity: usize, len: usize) -> usize {
    let min = match len.checked_add(1) {
        Some(min) => min,
        None => capacity_overflow(),
    };

    usize::max(min, capacity.saturating_mul(2))
}

/// Computes `(index + n) % capacity` without risking overflow.
///
/// Requires `index < capacity` (or `index == capacity == 0`) and `n <= capacity`.
#[inline(always)]
pub(crate) fn wrap_add(index: usize, n: usize, capacity: usize) -> usize {
    debug_assert!(index <= capacity && n <= capacity);
    let to_end = capacity - index;
    if n < to_end {
        index + n
    } else {
        n - to_end
    }
}

/// Computes `(index - n) mod capacity`, i.e. steps `n` slots backwards with wraparound.
///
/// Requires `index < capacity` and `n <= capacity`.
#[inline(always)]
pub(crate) fn wrap_sub(index: usize, n: usize, capacity: usize) -> usize {
    debug_assert!(index < capacity && n <= capacity);
    if n <= index {
        index - n
    } else {
        capacity - (n - index)
    }
}

/// Returns a pointer to the slot at position `index`.
///
/// The pointer may be one past the end when `index == slots.len()`, and the
/// value it points to may not be initialized.
#[inline(always)]
pub(crate) fn ptr_at_index<T>(slots: &[MaybeUninit<T>], index: usize) -> *const T {
    debug_assert!(index <= slots.len());
    slots.as_ptr().wrapping_add(index).cast::<T>()
}

/// Returns a mutable pointer to the slot at position `index`.
///
/// The pointer may be one past the end when `index == slots.len()`, and the
/// value it points to may not be initialized.
#[inline(always)]
pub(crate) fn mut_ptr_at_index<T>(slots: &mut [MaybeUninit<T>], index: usize) -> *mut T {
    debug_assert!(index <= slots.len());
    slots.as_mut_ptr().wrapping_add(index).cast::<T>()
}

/// Reinterprets a run of slots as initialized values.
///
/// # Safety
/// Every slot in `slots` must be initialized.
#[inline(always)]
pub(crate) unsafe fn assume_init_slice<T>(slots: &[MaybeUninit<T>]) -> &[T] {
    &*(slots as *const [MaybeUninit<T>] as *const [T])
}

/// Reinterprets a run of slots as mutable initialized values.
///
/// # Safety
/// Every slot in `slots` must be initialized.
#[inline(always)]
pub(crate) unsafe fn assume_init_slice_mut<T>(slots: &mut [MaybeUninit<T>]) -> &mut [T] {
    &mut *(slots as *mut [MaybeUninit<T>] as *mut [T])
}

/// Moves the `len` values of the ring starting at physical slot `front` of
/// `src` into slots `0..len` of `dst`, preserving their logical order.
///
/// Afterwards the values are owned by `dst`; their old slots in `src` must be
/// treated as uninitialized.
///
/// # Safety
/// The `len` slots of `src` starting at `front` (wrapping around) must be
/// initialized, and `dst` must hold at least `len` slots.
pub(crate) unsafe fn straighten_into<T>(
    src: &[MaybeUninit<T>],
    front: usize,
    len: usize,
    dst: &mut [MaybeUninit<T>],
) {
    debug_assert!(len <= src.len() && len <= dst.len());
    let first = usize::min(len, src.len() - front);

    core::ptr::copy_nonoverlapping(ptr_at_index(src, front), mut_ptr_at_index(dst, 0), first);
    core::ptr::copy_nonoverlapping(
        ptr_at_index(src, 0),
        mut_ptr_at_index(dst, first),
        len - first,
    );
}

#[inline(never)]
#[cold]
#[track_caller]
pub(crate) fn index_out_of_bounds(index: usize, len: usize) -> ! {
    panic!(
        "index out of bounds: the len is {} but the index is {}",
        len, index
    )
}

#[inline(never)]
#[cold]
#[track_caller]
pub(crate) fn rotation_out_of_bounds(by: usize, len: usize) -> ! {
    panic!(
        "cannot rotate by {} places in a deque of length {}",
        by, len
    )
}

#[inline(never)]
#[cold]
#[track_caller]
pub(crate) fn capacity_overflow() -> ! {
    panic!("capacity overflow")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_add_matches_modulo() {
        for capacity in 1..=9 {
            for index in 0..capacity {
                for n in 0..=capacity {
                    assert_eq!(wrap_add(index, n, capacity), (index + n) % capacity);
                }
            }
        }

        assert_eq!(wrap_add(0, 0, 0), 0);
        assert_eq!(wrap_add(usize::MAX - 1, usize::MAX, usize::MAX), usize::MAX - 1);
    }

    #[test]
    fn wrap_sub_matches_modulo() {
        for capacity in 1..=9 {
            for index in 0..capacity {
                for n in 0..=capacity {
                    assert_eq!(
                        wrap_sub(index, n, capacity),
                        (index + capacity - n) % capacity
                    );
                }
            }
        }
    }

    #[test]
    fn growth_policy() {
        assert_eq!(grown_capacity(0, 0), 1);
        assert_eq!(grown_capacity(1, 1), 2);
        assert_eq!(grown_capacity(2, 2), 4);
        assert_eq!(grown_capacity(32, 32), 64);
        assert_eq!(grown_capacity(usize::MAX / 2 + 1, 7), usize::MAX);
    }

    #[test]
    fn straighten_wrapped_ring() {
        let mut src = allocate::<u32>(5);
        // ring of [10, 11, 12, 13] starting at physical slot 3
        for (slot, value) in [3usize, 4, 0, 1].iter().zip(10..) {
            src[*slot] = MaybeUninit::new(value);
        }

        let mut dst = allocate::<u32>(8);
        unsafe {
            straighten_into(&src, 3, 4, &mut dst);
            assert_eq!(assume_init_slice(&dst[..4]), &[10, 11, 12, 13]);
        }
    }

    #[test]
    fn straighten_empty_buffer() {
        let src = allocate::<u32>(0);
        let mut dst = allocate::<u32>(1);
        unsafe { straighten_into(&src, 0, 0, &mut dst) };
        assert_eq!(dst.len(), 1);
    }
}
