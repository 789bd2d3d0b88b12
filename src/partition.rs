//! Partitioning schemes shared by all quicksort recursion strategies.

use ndarray::{ArrayView1, ArrayViewMut1, Axis};

/// Bounds of the two sub-ranges left to sort after partitioning a view of length `len`.
///
/// The left sub-range is `..left` and the right sub-range is `right..`. Elements in between (at
/// most the pivot itself) are already at their final sorted position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Split {
	/// Exclusive end of the left sub-range.
	pub left: usize,
	/// Inclusive start of the right sub-range.
	pub right: usize,
}

impl Split {
	/// Splits `v` into its left and right sub-range, dropping the in-between elements.
	#[inline]
	pub(crate) fn apply<T>(self, v: ArrayViewMut1<'_, T>) -> (ArrayViewMut1<'_, T>, ArrayViewMut1<'_, T>) {
		debug_assert!(self.left <= self.right && self.right <= v.len());
		let (left, rest) = v.split_at(Axis(0), self.left);
		let (_, right) = rest.split_at(Axis(0), self.right - self.left);
		(left, right)
	}
}

/// Partitioning scheme used by the quicksort strategies.
///
/// Implementations rearrange the whole view in place such that every element of the left sub-range
/// is not greater than every element of the right sub-range, and return the [`Split`] bounding both.
/// For views of length two or more, both returned sub-ranges must be strictly shorter than the view.
pub trait Partition {
	/// Partitions `v` of length two or more by `is_less`.
	fn partition<T, F>(v: ArrayViewMut1<'_, T>, is_less: &mut F) -> Split
	where
		T: Copy,
		F: FnMut(&T, &T) -> bool;
}

/// Lomuto partitioning with the last element as pivot.
///
/// The pivot ends up at its final sorted position `q`, so the two sub-ranges are `..q` and `q + 1..`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Lomuto;

impl Partition for Lomuto {
	#[inline]
	fn partition<T, F>(v: ArrayViewMut1<'_, T>, is_less: &mut F) -> Split
	where
		T: Copy,
		F: FnMut(&T, &T) -> bool,
	{
		let mid = lomuto_partition(v, is_less);
		Split {
			left: mid,
			right: mid + 1,
		}
	}
}

/// Partitions non-empty `v` around its last element and returns the pivot's final position.
///
/// Afterwards, elements before the returned index are not greater than the pivot and elements
/// after it are greater than the pivot.
pub fn lomuto_partition<T, F>(mut v: ArrayViewMut1<'_, T>, is_less: &mut F) -> usize
where
	T: Copy,
	F: FnMut(&T, &T) -> bool,
{
	let last = v.len() - 1;
	let pivot = v[last];

	// Invariant: `v[..l]` is not greater than the pivot, `v[l..r]` is greater than the pivot.
	let mut l = 0;
	for r in 0..last {
		if !is_less(&pivot, &v[r]) {
			v.swap(l, r);
			l += 1;
		}
	}

	// Place the pivot between the two partitions.
	v.swap(l, last);
	l
}

/// Checks whether `v` is non-descending.
pub fn is_sorted<T: Ord>(v: ArrayView1<'_, T>) -> bool {
	v.windows(2).into_iter().all(|w| w[0] <= w[1])
}
